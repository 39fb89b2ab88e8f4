//! Unified error types for the agriconnect application.

use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::Parse("bad toml".to_string());
        assert_eq!(err.to_string(), "Failed to parse configuration: bad toml");

        let err: AppError = std::io::Error::new(std::io::ErrorKind::Other, "closed").into();
        assert_eq!(err.to_string(), "IO error: closed");
    }
}
