use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Invalid file format: {0}")]
    Format(String),

    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
