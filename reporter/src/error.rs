use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReporterError {
    #[error("Env {0} not set")]
    MissingEnv(&'static str),
    #[error("Invalid repository identifier: {0}, expected owner/name")]
    InvalidRepository(String),
    #[error("Missing input record from {0}")]
    MissingInput(&'static str),
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Invalid authentication token")]
    InvalidToken,
    #[error("Request error")]
    Request(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    ApiRequest { status: StatusCode, body: String },
}
