use thiserror::Error;

/// Errors that can occur while loading translation dictionaries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("Invalid translation endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Translation fetch failed: {0}")]
    FetchFailed(String),
    #[error("No dictionary available for \"{0}\"")]
    NotAvailable(String),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, TranslationError>;
