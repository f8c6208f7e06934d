use thiserror::Error;

/// Errors produced by the generation cycle
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A required field is blank or a supplied value failed pre-validation.
    /// The message is the user-facing instruction for the triggering form.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("Parsing Error: {0}")]
    ParsingError(String),

    #[error("HTTP Error: {status_code} - {message}")]
    HttpError { status_code: u16, message: String },

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Result type for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;
