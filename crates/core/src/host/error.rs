use thiserror::Error;

/// Errors that can occur while interacting with the host environment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("Container element \"{selector}\" not found")]
    ContainerNotFound { selector: String },
    #[error("Mount failed: {0}")]
    MountFailed(String),
}

/// Result type for host environment operations.
pub type Result<T> = std::result::Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_not_found_display() {
        let error = HostError::ContainerNotFound {
            selector: "#kyc-widget".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Container element \"#kyc-widget\" not found"
        );
    }
}
