use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed record in {source_name}, line {line}: {reason}")]
    MalformedRecordError {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("Report generation error: {message}")]
    ReportError { message: String },
}

pub type Result<T> = std::result::Result<T, BenchError>;
