// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::rules::{classify, extract_youtube_id, is_direct_media};

/// Whether an input line points at the network or at the local input directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locality {
    Remote,
    Local,
}

/// How a source reference will be turned into a local media file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SourceKind {
    /// YouTube watch or short link, fetched by the downloader tool
    #[serde(rename = "youtube")]
    YouTube { id: String },
    /// Remote URL naming a media file, fetched with a single GET
    DirectUrl,
    /// Remote page the downloader tool has to extract media from
    Downloader,
    /// File name relative to the input directory
    LocalFile,
}

impl SourceKind {
    pub fn locality(&self) -> Locality {
        match self {
            SourceKind::LocalFile => Locality::Local,
            _ => Locality::Remote,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::YouTube { id } => write!(f, "youtube ({})", id),
            SourceKind::DirectUrl => write!(f, "direct-url"),
            SourceKind::Downloader => write!(f, "downloader"),
            SourceKind::LocalFile => write!(f, "local-file"),
        }
    }
}

/// One entry of the input list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub raw: String,
    #[serde(flatten)]
    pub kind: SourceKind,
}

impl SourceRef {
    /// Classify a single input line
    pub fn parse(line: &str) -> Self {
        let raw = line.trim().to_string();
        let kind = match classify(&raw) {
            Locality::Local => SourceKind::LocalFile,
            Locality::Remote => match extract_youtube_id(&raw) {
                Some(id) => SourceKind::YouTube { id },
                None if is_direct_media(&raw) => SourceKind::DirectUrl,
                None => SourceKind::Downloader,
            },
        };
        Self { raw, kind }
    }

    pub fn is_remote(&self) -> bool {
        self.kind.locality() == Locality::Remote
    }
}

/// Where the local copy of a source came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionOrigin {
    /// Reused a file left in the temp directory by an earlier run
    Cached,
    Downloaded,
    Fetched,
    Local,
}

/// A source reference bound to a file on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSource {
    pub source: SourceRef,
    pub path: PathBuf,
    pub origin: ResolutionOrigin,
}

/// What the downloader tool reports after writing a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadedMedia {
    pub id: String,
    pub ext: String,
    pub path: PathBuf,
}

/// Concatenation of every source's audio, in input order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedAudio {
    pub path: PathBuf,
    /// Seconds
    pub duration: f64,
    pub source_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualKind {
    Still,
    Motion,
}

/// The picture track handed to the composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualClip {
    pub kind: VisualKind,
    pub path: PathBuf,
    /// Playable length in seconds; unset for still images until composed
    pub duration: Option<f64>,
    pub fps: u32,
    /// How many whole copies of the source clip were joined
    pub repeats: u32,
}

impl VisualClip {
    pub fn still(path: PathBuf, fps: u32) -> Self {
        Self {
            kind: VisualKind::Still,
            path,
            duration: None,
            fps,
            repeats: 1,
        }
    }

    pub fn looped(path: PathBuf, clip_duration: f64, repeats: u32, fps: u32) -> Self {
        Self {
            kind: VisualKind::Motion,
            path,
            duration: Some(clip_duration * repeats as f64),
            fps,
            repeats,
        }
    }
}

/// Encoder settings for the final render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub video_codec: String,
    pub audio_codec: String,
    pub preset: String,
    pub fps: u32,
    pub threads: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            preset: "medium".to_string(),
            fps: 24,
            threads: num_cpus::get(),
        }
    }
}

/// Everything the composer needs for one encode
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeJob {
    pub visual: VisualClip,
    pub audio: MergedAudio,
    pub output: PathBuf,
    pub settings: RenderSettings,
}

/// Locations of the external binaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub ffmpeg: String,
    pub ffprobe: String,
    pub ytdlp: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
            ytdlp: "yt-dlp".to_string(),
        }
    }
}

pub const DEFAULT_SOURCES: [&str; 2] = [
    "https://youtu.be/1O0yazhqaxs",
    "https://youtu.be/TK4N5W22Gts",
];

pub const DEFAULT_IMAGE_URL: &str = "https://i.imgur.com/4EmycCc.jpeg";

/// Run configuration passed to every stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub temp_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Optional newline-delimited list of sources
    pub input_list: PathBuf,
    pub output_file: String,
    /// Sources given directly; they take precedence over `input_list`
    pub sources: Vec<String>,
    pub default_sources: Vec<String>,
    pub image_url: String,
    pub loop_visual: bool,
    /// Extensions probed in the temp directory before downloading a YouTube link
    pub cached_extensions: Vec<String>,
    /// Connect and stall timeout for HTTP transfers; zero disables it
    pub http_timeout_secs: u64,
    /// argv of the timestamp generator; empty means skip
    pub timestamp_command: Vec<String>,
    pub skip_timestamps: bool,
    pub render: RenderSettings,
    pub tools: ToolPaths,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            temp_dir: PathBuf::from("temp"),
            output_dir: PathBuf::from("output"),
            input_list: PathBuf::from("input").join("input.txt"),
            output_file: "test.mp4".to_string(),
            sources: Vec::new(),
            default_sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            loop_visual: true,
            cached_extensions: vec!["webm".to_string()],
            http_timeout_secs: 300,
            timestamp_command: Vec::new(),
            skip_timestamps: false,
            render: RenderSettings::default(),
            tools: ToolPaths::default(),
        }
    }
}

impl PipelineConfig {
    pub fn merged_audio_path(&self) -> PathBuf {
        self.temp_dir.join("merged_audio.mp3")
    }

    pub fn image_path(&self) -> PathBuf {
        self.temp_dir.join("image.png")
    }

    pub fn looped_visual_path(&self) -> PathBuf {
        self.temp_dir.join("looped_visual.mp4")
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        match self.http_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Path a local entry resolves to
    pub fn local_path(&self, name: &str) -> PathBuf {
        crate::domain::rules::local_media_path(&self.input_dir, name)
    }

    /// Reject settings that would only fail deep inside a tool invocation
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=120).contains(&self.render.fps) {
            return Err(DomainError::ConfigError(format!(
                "fps must be between 1 and 120, got {}",
                self.render.fps
            )));
        }
        if self.render.video_codec.trim().is_empty() {
            return Err(DomainError::ConfigError("video codec cannot be empty".to_string()));
        }
        if self.render.audio_codec.trim().is_empty() {
            return Err(DomainError::ConfigError("audio codec cannot be empty".to_string()));
        }
        if self.image_url.trim().is_empty() {
            return Err(DomainError::ConfigError("image URL cannot be empty".to_string()));
        }
        if self.output_file.trim().is_empty() {
            return Err(DomainError::ConfigError("output file name cannot be empty".to_string()));
        }
        if let Some(ext) = self
            .cached_extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.contains('.') || ext.contains('/'))
        {
            return Err(DomainError::ConfigError(format!(
                "cached extension '{}' must be a bare extension such as 'webm'",
                ext
            )));
        }
        Ok(())
    }
}

/// Summary of a finished render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReport {
    pub output_path: PathBuf,
    pub duration: f64,
    pub fps: u32,
    pub video_codec: String,
    pub sources: Vec<ResolvedSource>,
    pub visual: VisualClip,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
    pub timestamps_generated: bool,
}

#[cfg(test)]
mod tests;
