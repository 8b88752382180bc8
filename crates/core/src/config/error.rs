use thiserror::Error;

/// Errors that can occur when validating configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid theme \"{0}\": expected \"light\" or \"dark\"")]
    InvalidTheme(String),
    #[error("Invalid direction \"{0}\": expected \"ltr\" or \"rtl\"")]
    InvalidDirection(String),
    #[error("Invalid language tag \"{0}\"")]
    InvalidLanguageTag(String),
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
