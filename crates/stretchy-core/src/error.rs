use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid header bounds: minimum {min} must be finite, non-negative and not above maximum {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Scroll trace error: {0}")]
    Trace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
