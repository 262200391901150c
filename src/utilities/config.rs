use std::env;
use std::path::PathBuf;

use url::Url;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000/";
const DEFAULT_RESULT_FILE: &str = "resultado.html";

pub struct Config {
    pub evaluate_url: Url,
    pub health_url: Url,
    pub result_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, url::ParseError> {
        let server_url =
            env::var("SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let result_file =
            env::var("RESULT_FILE").unwrap_or_else(|_| DEFAULT_RESULT_FILE.to_string());

        Self::from_parts(&server_url, result_file.into())
    }

    pub fn from_parts(server_url: &str, result_file: PathBuf) -> Result<Self, url::ParseError> {
        // a missing trailing slash would make join() drop the last path segment
        let base = if server_url.ends_with('/') {
            Url::parse(server_url)?
        } else {
            Url::parse(&format!("{server_url}/"))?
        };

        Ok(Self {
            evaluate_url: base.join("api/evaluate")?,
            health_url: base.join("health")?,
            result_file,
        })
    }
}
