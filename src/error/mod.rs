//! Error handling module for Mixreel

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for Mixreel operations
#[derive(Error, Debug)]
pub enum MixreelError {
    /// A pipeline stage failed
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Configuration could not be assembled
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

/// Result type alias for Mixreel operations
pub type MixreelResult<T> = std::result::Result<T, MixreelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_pass_through() {
        let err = MixreelError::from(DomainError::EmptyAudio);
        assert_eq!(err.to_string(), DomainError::EmptyAudio.to_string());
        assert!(matches!(err, MixreelError::Domain(DomainError::EmptyAudio)));
    }
}
