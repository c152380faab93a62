//! Mixreel Library
//!
//! Collects tracks from YouTube, direct URLs, other downloader-supported
//! sites or the local input directory, joins their audio in order and
//! renders it over a still image or a looping clip.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{AppContainer, DefaultAppContainer, PipelinePorts, RenderInteractor};
pub use domain::errors::DomainError;
pub use domain::model::{PipelineConfig, RenderReport, SourceKind, SourceRef};
pub use error::{MixreelError, MixreelResult};
