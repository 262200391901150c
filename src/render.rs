use std::path::PathBuf;
use std::{fs, io};

use colored::Colorize;

use crate::apis::evaluator::{EvaluationFailure, EvaluationResult};

pub const REQUEST_ERROR_TEXT: &str = "No se pudo procesar la solicitud";

pub struct View {
    pub html: String,
    pub console: String,
}

pub fn placeholder(expression: &str) -> View {
    View {
        html: format!(
            "<section class=\"estado\">\n\
             <p>Evaluando expresión: <strong>{expression}</strong></p>\n\
             <p>Por favor, espera un momento...</p>\n\
             </section>"
        ),
        console: format!("Evaluando expresión: {expression}"),
    }
}

pub fn success(expression: &str, result: &EvaluationResult) -> View {
    let elementos = join_or_fallback(&result.elementos);

    let mut html = format!(
        "<section class=\"resultado\">\n\
         <figure>{}</figure>\n\
         <h4>Resultado:</h4>\n\
         <p><strong>Expresión:</strong> {expression}</p>\n\
         <p><strong>Elementos:</strong> {elementos}</p>\n",
        result.svg
    );
    let mut console = format!("Expresión: {expression}\nElementos: {elementos}");

    if !result.regiones.is_empty() {
        let regiones = result.regiones.join(", ");
        html.push_str(&format!("<p><strong>Regiones:</strong> {regiones}</p>\n"));
        console.push_str(&format!("\nRegiones: {regiones}"));
    }

    html.push_str(&format!(
        "<p><strong>Explicación:</strong> {}</p>\n</section>",
        result.explicacion
    ));
    console.push_str(&format!("\nExplicación: {}", result.explicacion));

    View { html, console }
}

pub fn failure(failure: &EvaluationFailure) -> View {
    let error = failure.error.as_deref().unwrap_or("Error desconocido");
    let explicacion = failure.explicacion.as_deref().unwrap_or_default();

    View {
        html: format!(
            "<section class=\"error\">\n\
             <p><strong>Error:</strong> {error}</p>\n\
             <p>{explicacion}</p>\n\
             </section>"
        ),
        console: format!("Error: {error}\n{explicacion}").trim_end().red().to_string(),
    }
}

pub fn request_error() -> View {
    View {
        html: format!(
            "<section class=\"error\">\n\
             <p><strong>Error:</strong> {REQUEST_ERROR_TEXT}</p>\n\
             <p>Por favor, inténtalo de nuevo más tarde.</p>\n\
             </section>"
        ),
        console: format!("Error: {REQUEST_ERROR_TEXT}. Por favor, inténtalo de nuevo más tarde.")
            .red()
            .to_string(),
    }
}

fn join_or_fallback(elementos: &[String]) -> String {
    let joined = elementos.join(", ");
    if joined.is_empty() { "Ninguno".to_string() } else { joined }
}

pub struct ResultPanel {
    path: PathBuf,
    current: Option<View>,
}

impl ResultPanel {
    pub const fn new(path: PathBuf) -> Self {
        Self { path, current: None }
    }

    // replaces the whole region, like the original page did on every render
    pub fn show(&mut self, view: View) {
        println!("{}", view.console);

        if let Err(err) = self.write_document(&view.html) {
            log::error!("no se pudo escribir {}: {err}", self.path.display());
        }

        self.current = Some(view);
    }

    pub fn alert(&self, text: &str) {
        println!("{}", text.bright_yellow());
    }

    #[cfg(test)]
    pub const fn current(&self) -> Option<&View> {
        self.current.as_ref()
    }

    fn write_document(&self, fragment: &str) -> io::Result<()> {
        fs::write(
            &self.path,
            format!(
                "<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n<meta charset=\"utf-8\">\n\
                 <title>Diagrama de Venn</title>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n"
            ),
        )
    }
}
