// Domain errors - Error types for the domain layer

use std::fmt;

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Invalid arguments provided
    BadArgs(String),
    /// Configuration could not be loaded or is inconsistent
    ConfigError(String),
    /// Malformed URL or URL without a usable file name
    InvalidUrl(String),
    /// File not found
    FileNotFound(String),
    /// File system operation failed
    FsFail(String),
    /// Remote server answered with a non-success status
    HttpStatus { url: String, status: u16 },
    /// Network transfer failed
    NetworkFail(String),
    /// External tool binary could not be started
    ToolNotFound(String),
    /// External tool ran and reported failure
    ToolFailed { tool: String, message: String },
    /// Media duration could not be determined
    ProbeFail(String),
    /// Visual clip has no playable length, so it cannot be looped
    ZeroDurationClip(String),
    /// Merged audio track is empty
    EmptyAudio,
    /// Image bytes could not be decoded or re-encoded
    DecodeFail(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
            DomainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DomainError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            DomainError::FileNotFound(msg) => write!(f, "File not found: {}", msg),
            DomainError::FsFail(msg) => write!(f, "File system error: {}", msg),
            DomainError::HttpStatus { url, status } => {
                write!(f, "HTTP request to {} failed with status {}", url, status)
            }
            DomainError::NetworkFail(msg) => write!(f, "Network error: {}", msg),
            DomainError::ToolNotFound(tool) => {
                write!(f, "External tool '{}' not found; is it installed and on PATH?", tool)
            }
            DomainError::ToolFailed { tool, message } => {
                write!(f, "External tool '{}' failed: {}", tool, message)
            }
            DomainError::ProbeFail(msg) => write!(f, "Probe failed: {}", msg),
            DomainError::ZeroDurationClip(msg) => {
                write!(f, "Visual clip has zero duration and cannot be looped: {}", msg)
            }
            DomainError::EmptyAudio => write!(f, "Merged audio track is empty; nothing to render"),
            DomainError::DecodeFail(msg) => write!(f, "Image decode failed: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::FsFail(err.to_string())
    }
}
