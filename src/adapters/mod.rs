// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod fs_local;
pub mod http_reqwest;
pub mod image_png;
pub mod timestamp_cmd;
pub mod tool_runner;
pub mod toml_config;
pub mod tracing_log;
pub mod ytdlp;

// Re-export adapters
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::FsLocalAdapter;
pub use http_reqwest::ReqwestHttpAdapter;
pub use image_png::ImagePngAdapter;
pub use timestamp_cmd::CommandTimestampAdapter;
pub use toml_config::TomlConfigAdapter;
pub use tracing_log::TracingLogAdapter;
pub use ytdlp::YtDlpAdapter;
