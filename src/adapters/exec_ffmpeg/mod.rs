//! FFmpeg execution adapter
//!
//! Drives the `ffmpeg` and `ffprobe` binaries for probing, audio merging,
//! clip looping and the final encode.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};

use crate::adapters::tool_runner::ToolRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Even dimensions keep yuv420p encoders happy with odd-sized sources
const EVEN_SCALE: &str = "scale=trunc(iw/2)*2:trunc(ih/2)*2";

/// Every merged input is brought to this layout before concatenation
const MERGE_FORMAT: &str = "aresample=44100,aformat=sample_fmts=fltp:channel_layouts=stereo";

/// FFmpeg-based media adapter
pub struct FFmpegAdapter {
    ffmpeg: ToolRunner,
    ffprobe: ToolRunner,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(tools: &ToolPaths) -> Self {
        Self {
            ffmpeg: ToolRunner::new(tools.ffmpeg.clone()),
            ffprobe: ToolRunner::new(tools.ffprobe.clone()),
        }
    }
}

fn os(value: impl Into<OsString>) -> OsString {
    value.into()
}

fn base_args() -> Vec<OsString> {
    ["-y", "-hide_banner", "-loglevel", "error"]
        .into_iter()
        .map(os)
        .collect()
}

/// ffprobe arguments printing only the container duration
pub fn probe_args(path: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-v",
        "error",
        "-show_entries",
        "format=duration",
        "-of",
        "default=noprint_wrappers=1:nokey=1",
    ]
    .into_iter()
    .map(os)
    .collect();
    args.push(os(path));
    args
}

/// Parse ffprobe's bare duration output
pub fn parse_probe_duration(stdout: &str) -> Result<f64, DomainError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .ok_or_else(|| DomainError::ProbeFail("ffprobe printed no duration".to_string()))?;

    let duration: f64 = line
        .parse()
        .map_err(|_| DomainError::ProbeFail(format!("unreadable duration '{}'", line)))?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(DomainError::ProbeFail(format!("invalid duration {}", duration)));
    }
    Ok(duration)
}

/// Audio concatenation; zero inputs produce a zero-length MP3
pub fn merge_args(inputs: &[PathBuf], output: &Path) -> Vec<OsString> {
    let mut args = base_args();

    if inputs.is_empty() {
        args.extend(
            ["-f", "lavfi", "-i", "anullsrc=r=44100:cl=stereo", "-t", "0"]
                .into_iter()
                .map(os),
        );
    } else {
        for input in inputs {
            args.push(os("-i"));
            args.push(os(input));
        }

        let mut graph = String::new();
        for index in 0..inputs.len() {
            graph.push_str(&format!("[{index}:a]{MERGE_FORMAT}[a{index}];"));
        }
        for index in 0..inputs.len() {
            graph.push_str(&format!("[a{index}]"));
        }
        graph.push_str(&format!("concat=n={}:v=0:a=1[out]", inputs.len()));

        args.extend([os("-filter_complex"), os(graph), os("-map"), os("[out]")]);
    }

    args.extend(["-c:a", "libmp3lame", "-q:a", "2"].into_iter().map(os));
    args.push(os(output));
    args
}

/// Repeat a clip `repeats` times at a fixed frame rate, dropping its audio
pub fn loop_args(input: &Path, repeats: u32, settings: &RenderSettings, output: &Path) -> Vec<OsString> {
    let mut args = base_args();
    args.extend([
        os("-stream_loop"),
        os(repeats.saturating_sub(1).to_string()),
        os("-i"),
        os(input),
        os("-an"),
        os("-vf"),
        os(format!("fps={},{}", settings.fps, EVEN_SCALE)),
    ]);
    args.extend(video_encoder_args(settings));
    args.push(os(output));
    args
}

fn video_encoder_args(settings: &RenderSettings) -> Vec<OsString> {
    vec![
        os("-c:v"),
        os(&settings.video_codec),
        os("-preset"),
        os(&settings.preset),
        os("-pix_fmt"),
        os("yuv420p"),
        os("-threads"),
        os(settings.threads.to_string()),
    ]
}

/// Final encode: visual input, merged audio, cut to the audio's duration
pub fn compose_args(job: &ComposeJob) -> Vec<OsString> {
    let settings = &job.settings;
    let mut args = base_args();

    if job.visual.kind == VisualKind::Still {
        args.extend([
            os("-loop"),
            os("1"),
            os("-framerate"),
            os(settings.fps.to_string()),
        ]);
    }
    args.extend([
        os("-i"),
        os(&job.visual.path),
        os("-i"),
        os(&job.audio.path),
        os("-map"),
        os("0:v:0"),
        os("-map"),
        os("1:a:0"),
        os("-vf"),
        os(EVEN_SCALE),
    ]);
    args.extend(video_encoder_args(settings));
    args.extend([
        os("-r"),
        os(settings.fps.to_string()),
        os("-c:a"),
        os(&settings.audio_codec),
        os("-t"),
        os(format!("{:.3}", job.audio.duration)),
        os("-movflags"),
        os("+faststart"),
        os(&job.output),
    ]);
    args
}

#[async_trait]
impl MediaPort for FFmpegAdapter {
    async fn probe_duration(&self, path: &Path) -> Result<f64, DomainError> {
        if !path.exists() {
            return Err(DomainError::FileNotFound(path.display().to_string()));
        }
        let output = self.ffprobe.run(&probe_args(path)).await?;
        let duration = parse_probe_duration(&output.stdout)
            .map_err(|e| DomainError::ProbeFail(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), duration, "probed duration");
        Ok(duration)
    }

    async fn merge_audio(&self, inputs: &[PathBuf], output: &Path) -> Result<(), DomainError> {
        info!(inputs = inputs.len(), output = %output.display(), "merging audio");
        self.ffmpeg.run(&merge_args(inputs, output)).await?;
        Ok(())
    }

    async fn loop_clip(
        &self,
        input: &Path,
        repeats: u32,
        settings: &RenderSettings,
        output: &Path,
    ) -> Result<(), DomainError> {
        info!(input = %input.display(), repeats, fps = settings.fps, "looping visual clip");
        self.ffmpeg
            .run(&loop_args(input, repeats, settings, output))
            .await?;
        Ok(())
    }

    async fn compose(&self, job: &ComposeJob) -> Result<(), DomainError> {
        info!(
            output = %job.output.display(),
            codec = %job.settings.video_codec,
            fps = job.settings.fps,
            duration = job.audio.duration,
            "encoding final video"
        );
        self.ffmpeg.run(&compose_args(job)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    fn settings() -> RenderSettings {
        RenderSettings {
            threads: 2,
            ..RenderSettings::default()
        }
    }

    fn position(args: &[String], flag: &str) -> usize {
        args.iter().position(|a| a == flag).unwrap()
    }

    #[test]
    fn test_parse_probe_duration() {
        assert_eq!(parse_probe_duration("12.480000\n").unwrap(), 12.48);
        assert_eq!(parse_probe_duration("\n 7.0 \n").unwrap(), 7.0);
        assert!(parse_probe_duration("N/A\n").is_err());
        assert!(parse_probe_duration("").is_err());
        assert!(parse_probe_duration("-3").is_err());
    }

    #[test]
    fn test_merge_args_keeps_input_order() {
        let inputs = vec![PathBuf::from("temp/b.webm"), PathBuf::from("input/a.mp3")];
        let args = strings(&merge_args(&inputs, Path::new("temp/merged_audio.mp3")));

        let first = args.iter().position(|a| a == "temp/b.webm").unwrap();
        let second = args.iter().position(|a| a == "input/a.mp3").unwrap();
        assert!(first < second);

        let graph = &args[position(&args, "-filter_complex") + 1];
        assert!(graph.ends_with("[a0][a1]concat=n=2:v=0:a=1[out]"));
        assert!(graph.starts_with("[0:a]aresample=44100"));
        assert_eq!(args.last().unwrap(), "temp/merged_audio.mp3");
        assert!(args.contains(&"libmp3lame".to_string()));
    }

    #[test]
    fn test_merge_args_without_inputs_is_silent_zero_length() {
        let args = strings(&merge_args(&[], Path::new("out.mp3")));
        assert!(args.contains(&"anullsrc=r=44100:cl=stereo".to_string()));
        assert_eq!(args[position(&args, "-t") + 1], "0");
        assert!(!args.contains(&"-filter_complex".to_string()));
    }

    #[test]
    fn test_loop_args() {
        let args = strings(&loop_args(
            Path::new("temp/loop.gif"),
            3,
            &settings(),
            Path::new("temp/looped_visual.mp4"),
        ));
        assert_eq!(args[position(&args, "-stream_loop") + 1], "2");
        assert!(position(&args, "-stream_loop") < position(&args, "-i"));
        assert!(args[position(&args, "-vf") + 1].starts_with("fps=24,"));
        assert!(args.contains(&"-an".to_string()));
        assert_eq!(args[position(&args, "-c:v") + 1], "libx264");
        assert_eq!(args[position(&args, "-threads") + 1], "2");
    }

    #[test]
    fn test_compose_args_still_image() {
        let job = ComposeJob {
            visual: VisualClip::still(PathBuf::from("temp/image.png"), 24),
            audio: MergedAudio {
                path: PathBuf::from("temp/merged_audio.mp3"),
                duration: 12.0,
                source_count: 2,
            },
            output: PathBuf::from("output/test.mp4"),
            settings: settings(),
        };
        let args = strings(&compose_args(&job));

        assert_eq!(args[position(&args, "-loop") + 1], "1");
        assert_eq!(args[position(&args, "-framerate") + 1], "24");
        assert_eq!(args[position(&args, "-r") + 1], "24");
        assert_eq!(args[position(&args, "-t") + 1], "12.000");
        assert_eq!(args[position(&args, "-c:a") + 1], "aac");
        assert_eq!(args.last().unwrap(), "output/test.mp4");
    }

    #[test]
    fn test_compose_args_motion_clip_is_not_image_looped() {
        let job = ComposeJob {
            visual: VisualClip::looped(PathBuf::from("temp/looped_visual.mp4"), 5.0, 3, 24),
            audio: MergedAudio {
                path: PathBuf::from("temp/merged_audio.mp3"),
                duration: 12.5,
                source_count: 1,
            },
            output: PathBuf::from("output/test.mp4"),
            settings: RenderSettings {
                video_codec: "libx265".to_string(),
                ..settings()
            },
        };
        let args = strings(&compose_args(&job));

        assert!(!args.contains(&"-loop".to_string()));
        assert_eq!(args[position(&args, "-c:v") + 1], "libx265");
        assert_eq!(args[position(&args, "-t") + 1], "12.500");
    }
}
