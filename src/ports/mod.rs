// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for the general-purpose video downloader
#[async_trait]
pub trait DownloaderPort: Send + Sync {
    /// Download `url` into `dest_dir`, naming the file `<id>.<ext>`
    async fn download(&self, url: &str, dest_dir: &Path) -> Result<DownloadedMedia, DomainError>;
}

/// Port for plain HTTP transfers
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// GET `url` and return the full body; non-success statuses are errors
    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, DomainError>;
}

/// Port for media decoding, probing and encoding
#[async_trait]
pub trait MediaPort: Send + Sync {
    /// Playable duration of a media file in seconds
    async fn probe_duration(&self, path: &Path) -> Result<f64, DomainError>;

    /// Append the audio of every input, in order, into one MP3 at `output`
    async fn merge_audio(&self, inputs: &[PathBuf], output: &Path) -> Result<(), DomainError>;

    /// Join `repeats` full copies of `input` at a fixed frame rate, without audio
    async fn loop_clip(
        &self,
        input: &Path,
        repeats: u32,
        settings: &RenderSettings,
        output: &Path,
    ) -> Result<(), DomainError>;

    /// Encode the visual with the merged audio, cut to the audio's length
    async fn compose(&self, job: &ComposeJob) -> Result<(), DomainError>;
}

/// Port for still image handling
#[async_trait]
pub trait ImagePort: Send + Sync {
    /// Decode raw image bytes and persist them as PNG; returns (width, height)
    async fn decode_to_png(&self, bytes: &[u8], output: &Path) -> Result<(u32, u32), DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if file exists
    async fn file_exists(&self, path: &Path) -> Result<bool, DomainError>;

    /// Get file size
    async fn file_size(&self, path: &Path) -> Result<u64, DomainError>;

    /// Read a whole text file
    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError>;

    /// Write bytes atomically, replacing any existing file
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), DomainError>;

    /// Create directory (including parent directories)
    async fn create_directory(&self, path: &Path) -> Result<(), DomainError>;
}

/// Port for the post-render timestamp generator
#[async_trait]
pub trait TimestampPort: Send + Sync {
    /// Run the generator; `Ok(false)` when none is configured
    async fn generate(&self) -> Result<bool, DomainError>;
}

/// Port for logging and observability
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);

    /// Log structured event
    async fn log_event(&self, event: &LogEvent);
}

/// Log event with structured data
#[derive(Debug, Clone)]
pub struct LogEvent {
    pub level: LogLevel,
    pub stage: &'static str,
    pub message: String,
    pub context: std::collections::BTreeMap<String, String>,
}

impl LogEvent {
    pub fn info(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            level: LogLevel::Info,
            stage,
            message: message.into(),
            context: Default::default(),
        }
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.context.insert(key.to_string(), value.to_string());
        self
    }
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse log level from string
    pub fn parse(level_str: &str) -> Result<Self, DomainError> {
        match level_str.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid log level: {}. Valid levels: trace, debug, info, warn, error",
                level_str
            ))),
        }
    }

    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
