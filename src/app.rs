use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::apis::evaluator;
use crate::form::ExpressionForm;
use crate::render::ResultPanel;
use crate::utilities::config::Config;

pub struct App {
    http_client: reqwest::Client,
    health_url: url::Url,
    form: ExpressionForm,
}

impl App {
    pub fn new() -> Result<Self, url::ParseError> {
        let config = Config::from_env()?;
        let http_client = reqwest::Client::new();

        log::info!("resultados en {}", config.result_file.display());

        let panel = ResultPanel::new(config.result_file);
        let form = ExpressionForm::new(http_client.clone(), config.evaluate_url, panel);

        Ok(Self { http_client, health_url: config.health_url, form })
    }

    pub async fn run(&mut self) {
        self.check_server().await;

        println!("Conjuntos fijos: A = {{1, 4, 6, 7}}, B = {{2, 4, 5, 7}}, C = {{3, 5, 6, 7}}");
        println!("Escribe una expresión de conjuntos (por ejemplo, \"A or B\") y presiona Enter.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{}> ", self.form.submit_label());
            io::stdout().flush().ok();

            let line = tokio::select! {
                line = lines.next_line() => line,
                _ = signal::ctrl_c() => break,
            };

            match line {
                Ok(Some(line)) => self.form.submit(&line).await,
                Ok(None) => break,
                Err(err) => {
                    log::error!("error al leer la entrada: {err}");
                    break;
                }
            }
        }

        log::info!("cerrando el cliente");
    }

    async fn check_server(&self) {
        match evaluator::health(self.http_client.clone(), self.health_url.clone()).await {
            Ok(health) => {
                log::info!("servidor disponible: {} ({})", health.status, health.message);
            }
            Err(err) => log::warn!("el servidor no respondió a /health: {err}"),
        }
    }
}
