use reqwest::Client;
use url::Url;

use crate::apis::evaluator::{self, Evaluation};
use crate::render::{self, ResultPanel};

const IDLE_LABEL: &str = "Evaluar";
const BUSY_LABEL: &str = "Evaluando...";

pub struct SubmitButton {
    enabled: bool,
    label: &'static str,
}

impl SubmitButton {
    const fn new() -> Self {
        Self { enabled: true, label: IDLE_LABEL }
    }

    pub const fn label(&self) -> &'static str {
        self.label
    }
}

// restores the button state when dropped, whichever way the submission ended
struct BusyGuard<'a> {
    button: &'a mut SubmitButton,
}

impl<'a> BusyGuard<'a> {
    fn begin(button: &'a mut SubmitButton) -> Self {
        button.enabled = false;
        button.label = BUSY_LABEL;
        Self { button }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.enabled = true;
        self.button.label = IDLE_LABEL;
    }
}

pub struct ExpressionForm {
    http_client: Client,
    evaluate_url: Url,
    panel: ResultPanel,
    button: SubmitButton,
}

impl ExpressionForm {
    pub const fn new(http_client: Client, evaluate_url: Url, panel: ResultPanel) -> Self {
        Self { http_client, evaluate_url, panel, button: SubmitButton::new() }
    }

    pub const fn submit_label(&self) -> &'static str {
        self.button.label()
    }

    pub async fn submit(&mut self, input: &str) {
        let expression = input.trim();

        if expression.is_empty() {
            self.panel.alert("Por favor, ingresa una expresión.");
            return;
        }

        self.panel.show(render::placeholder(expression));
        let _busy = BusyGuard::begin(&mut self.button);

        match evaluator::evaluate(self.http_client.clone(), self.evaluate_url.clone(), expression)
            .await
        {
            Ok(Evaluation::Success(result)) => {
                log::debug!("evaluación correcta con {} elementos", result.elementos.len());
                self.panel.show(render::success(expression, &result));
            }
            Ok(Evaluation::Failure(failure)) => self.panel.show(render::failure(&failure)),
            Err(err) => {
                // the cause goes to the log only; the page gets the generic message
                log::error!("la solicitud no se pudo completar: {err}");
                self.panel.show(render::request_error());
            }
        }
    }
}
