use thiserror::Error;

#[derive(Error, Debug)]
pub enum NdjsonError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Encoding error: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Export failed: {message}")]
    ExportError { message: String },
}

pub type Result<T> = std::result::Result<T, NdjsonError>;
