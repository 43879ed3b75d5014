use thiserror::Error;

/// Errors that can occur while loading recipes or chatting with the user
#[derive(Error, Debug)]
pub enum ChatbotError {
    /// Failed to parse a duration such as "1 hr 20 mins"
    #[error("Failed to parse duration: {0}")]
    ParseError(String),

    /// No recipe satisfied the requested filter
    #[error("No recipes found: {0}")]
    EmptyResult(String),

    /// The user typed something that could not be used where a value is required
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Dataset file has an extension we cannot read
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Reading the dataset or talking to the terminal failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to read a CSV dataset
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Failed to read a JSON dataset
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ChatbotError>;
