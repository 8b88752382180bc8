//! SDK error types.

use thiserror::Error;

use kyc_sdk_core::config::ConfigError;
use kyc_sdk_core::host::HostError;
use kyc_sdk_core::translation::TranslationError;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors surfaced at the SDK boundary.
///
/// Normal operation never errors: configuration changes resolve with
/// response objects, and translation failures are folded into response
/// fields. What remains here are caller-configuration errors.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Host environment error: {0}")]
    Host(#[from] HostError),

    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_error_conversion() {
        let error: SdkError = HostError::ContainerNotFound {
            selector: "#missing".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Host environment error: Container element \"#missing\" not found"
        );
    }
}
