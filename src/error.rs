use thiserror::Error;

#[derive(Error, Debug)]
pub enum PinpointError {
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("geocoding API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, PinpointError>;
