use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Serialize)]
struct Payload<'a> {
    expression: &'a str,
}

#[derive(Deserialize)]
struct Response {
    success: bool,
    svg: Option<String>,
    elementos: Option<Vec<String>>,
    regiones: Option<Vec<String>>,
    explicacion: Option<String>,
    error: Option<String>,
}

pub struct EvaluationResult {
    pub svg: String,
    pub elementos: Vec<String>,
    pub regiones: Vec<String>,
    pub explicacion: String,
}

pub struct EvaluationFailure {
    pub error: Option<String>,
    pub explicacion: Option<String>,
}

pub enum Evaluation {
    Success(EvaluationResult),
    Failure(EvaluationFailure),
}

impl From<Response> for Evaluation {
    fn from(response: Response) -> Self {
        if response.success {
            Self::Success(EvaluationResult {
                svg: response.svg.unwrap_or_default(),
                elementos: response.elementos.unwrap_or_default(),
                regiones: response.regiones.unwrap_or_default(),
                explicacion: response.explicacion.unwrap_or_default(),
            })
        } else {
            Self::Failure(EvaluationFailure {
                error: response.error,
                explicacion: response.explicacion,
            })
        }
    }
}

#[derive(Debug)]
pub enum RequestError {
    Http(StatusCode),
    Network(reqwest::Error),
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err)
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(status) => write!(f, "HTTP {status}"),
            Self::Network(err) => write!(f, "{err}"),
        }
    }
}

pub async fn evaluate(
    http_client: reqwest::Client,
    url: Url,
    expression: &str,
) -> Result<Evaluation, RequestError> {
    let response = http_client.post(url).json(&Payload { expression }).send().await?;

    // a non-OK status discards the body, even if it carries JSON
    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Http(status));
    }

    Ok(response.json::<Response>().await?.into())
}

#[derive(Deserialize)]
pub struct Health {
    pub status: String,
    pub message: String,
}

pub async fn health(http_client: reqwest::Client, url: Url) -> Result<Health, RequestError> {
    let response = http_client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Http(status));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utilities::test_fixtures;

    #[test]
    fn test_success_shape() {
        let response: Response = serde_json::from_str(
            r#"{"success": true, "svg": "<svg/>", "elementos": ["1", "4"], "explicacion": "x"}"#,
        )
        .unwrap();

        let Evaluation::Success(result) = Evaluation::from(response) else {
            panic!("expected a success evaluation");
        };

        assert_eq!(result.svg, "<svg/>");
        assert_eq!(result.elementos, ["1", "4"]);
        assert!(result.regiones.is_empty());
        assert_eq!(result.explicacion, "x");
    }

    #[test]
    fn test_success_shape_with_missing_fields() {
        let response: Response = serde_json::from_str(r#"{"success": true}"#).unwrap();

        let Evaluation::Success(result) = Evaluation::from(response) else {
            panic!("expected a success evaluation");
        };

        assert_eq!(result.svg, "");
        assert!(result.elementos.is_empty());
        assert_eq!(result.explicacion, "");
    }

    #[test]
    fn test_failure_shape() {
        let response: Response =
            serde_json::from_str(r#"{"success": false, "error": "bad input"}"#).unwrap();

        let Evaluation::Failure(failure) = Evaluation::from(response) else {
            panic!("expected a failure evaluation");
        };

        assert_eq!(failure.error.as_deref(), Some("bad input"));
        assert_eq!(failure.explicacion, None);
    }

    #[tokio::test]
    async fn test_evaluate() {
        let server = test_fixtures::http_server(vec![test_fixtures::success_response()]).await;

        let result = evaluate(reqwest::Client::new(), server.evaluate_url(), "A or B")
            .await
            .unwrap();

        let Evaluation::Success(result) = result else {
            panic!("expected a success evaluation");
        };
        assert_eq!(result.elementos, ["1", "4", "7"]);

        let request = server.request(0);
        assert!(request.head.starts_with("POST /api/evaluate"));
        assert!(request.head.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn test_evaluate_http_error() {
        let server = test_fixtures::http_server(vec![test_fixtures::json_response(
            "500 Internal Server Error",
            r#"{"success": false, "error": "detalle interno"}"#,
        )])
        .await;

        let result = evaluate(reqwest::Client::new(), server.evaluate_url(), "A or B").await;

        let Err(RequestError::Http(status)) = result else {
            panic!("expected an HTTP error");
        };
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_evaluate_network_error() {
        let url = Url::parse("http://127.0.0.1:9/api/evaluate").unwrap();

        let result = evaluate(reqwest::Client::new(), url, "A or B").await;

        assert!(matches!(result, Err(RequestError::Network(_))));
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_fixtures::http_server(vec![test_fixtures::json_response(
            "200 OK",
            r#"{"status": "ok", "message": "La aplicación está funcionando correctamente"}"#,
        )])
        .await;

        let health = health(reqwest::Client::new(), server.health_url()).await.unwrap();

        assert_eq!(health.status, "ok");
        assert!(server.request(0).head.starts_with("GET /health"));
    }
}
