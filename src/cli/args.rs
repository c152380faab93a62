//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

fn fps_in_range(s: &str) -> Result<u32, String> {
    clap_num::number_range(s, 1, 120)
}

/// Arguments for the render command; every flag overrides the config file
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Sources to render (URLs or file names in the input directory); overrides the input list
    pub sources: Vec<String>,

    /// Newline-delimited list of sources
    #[arg(long, env = "MIXREEL_INPUT_LIST")]
    pub input_list: Option<PathBuf>,

    /// Directory local file names are resolved against
    #[arg(long, env = "MIXREEL_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Scratch directory for downloads and intermediate files
    #[arg(long, env = "MIXREEL_TEMP_DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Directory the rendered video is written to
    #[arg(long, env = "MIXREEL_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output file name inside the output directory
    #[arg(short, long, env = "MIXREEL_OUTPUT")]
    pub output: Option<String>,

    /// Background image, GIF or video URL
    #[arg(long, env = "MIXREEL_IMAGE_URL")]
    pub image_url: Option<String>,

    /// Use the first frame as a still even when the visual can loop
    #[arg(long)]
    pub no_loop: bool,

    /// Video codec
    #[arg(long, env = "MIXREEL_VIDEO_CODEC")]
    pub video_codec: Option<String>,

    /// Audio codec of the final video
    #[arg(long, env = "MIXREEL_AUDIO_CODEC")]
    pub audio_codec: Option<String>,

    /// Encoding preset
    #[arg(long, env = "MIXREEL_PRESET")]
    pub preset: Option<String>,

    /// Output frame rate (1-120)
    #[arg(long, env = "MIXREEL_FPS", value_parser = fps_in_range)]
    pub fps: Option<u32>,

    /// Encoder threads
    #[arg(long, env = "MIXREEL_THREADS")]
    pub threads: Option<usize>,

    /// ffmpeg binary
    #[arg(long, env = "MIXREEL_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// ffprobe binary
    #[arg(long, env = "MIXREEL_FFPROBE")]
    pub ffprobe: Option<String>,

    /// yt-dlp binary
    #[arg(long = "yt-dlp", env = "MIXREEL_YTDLP")]
    pub ytdlp: Option<String>,

    /// Timestamp generator command, run after the render (split on whitespace)
    #[arg(long, env = "MIXREEL_TIMESTAMP_CMD")]
    pub timestamp_cmd: Option<String>,

    /// Extra argument for the timestamp generator, passed verbatim (repeatable)
    #[arg(long = "timestamp-arg", value_name = "ARG")]
    pub timestamp_args: Vec<String>,

    /// Do not run the timestamp generator
    #[arg(long)]
    pub skip_timestamps: bool,

    /// HTTP timeout in seconds (0 disables)
    #[arg(long, env = "MIXREEL_HTTP_TIMEOUT")]
    pub http_timeout: Option<u64>,

    /// Print the render report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Entries to classify
    #[arg(required = true)]
    pub entries: Vec<String>,

    /// Directory local file names are resolved against
    #[arg(long, default_value = "input")]
    pub input_dir: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the probe command
#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Media file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// ffprobe binary
    #[arg(long, default_value = "ffprobe", env = "MIXREEL_FFPROBE")]
    pub ffprobe: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the loops command
#[derive(Args, Debug)]
pub struct LoopsArgs {
    /// Audio duration in seconds
    #[arg(long)]
    pub audio: f64,

    /// Clip duration in seconds
    #[arg(long)]
    pub clip: f64,
}
