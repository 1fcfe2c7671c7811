use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request never produced a response (DNS, refused connection, ...)
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid API base URL: {0:?}")]
    InvalidBaseUrl(String),
}

impl AppError {
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AppError::HttpStatus {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            AppError::Network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
