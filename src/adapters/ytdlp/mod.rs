//! yt-dlp downloader adapter

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::adapters::tool_runner::ToolRunner;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Downloader adapter backed by the `yt-dlp` binary
pub struct YtDlpAdapter {
    runner: ToolRunner,
}

impl YtDlpAdapter {
    pub fn new(tools: &ToolPaths) -> Self {
        Self {
            runner: ToolRunner::new(tools.ytdlp.clone()),
        }
    }
}

/// Output template naming files by media id and container extension
pub fn output_template(dest_dir: &Path) -> PathBuf {
    dest_dir.join("%(id)s.%(ext)s")
}

/// Arguments downloading one URL and printing id, extension and final path
pub fn download_args(url: &str, dest_dir: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--no-progress".into(),
        "--no-playlist".into(),
        "-o".into(),
        output_template(dest_dir).into_os_string(),
    ];
    for field in ["%(id)s", "%(ext)s", "%(filepath)s"] {
        args.push("--print".into());
        args.push(format!("after_move:{}", field).into());
    }
    args.push("--".into());
    args.push(url.into());
    args
}

/// Read the id/ext/path triple printed after the move stage
pub fn parse_download_output(stdout: &str) -> Result<DownloadedMedia, DomainError> {
    let lines: Vec<&str> = stdout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 3 {
        return Err(DomainError::ToolFailed {
            tool: "yt-dlp".to_string(),
            message: format!("expected id, extension and path, got {:?}", lines),
        });
    }

    let tail = &lines[lines.len() - 3..];
    Ok(DownloadedMedia {
        id: tail[0].to_string(),
        ext: tail[1].to_string(),
        path: PathBuf::from(tail[2]),
    })
}

#[async_trait]
impl DownloaderPort for YtDlpAdapter {
    async fn download(&self, url: &str, dest_dir: &Path) -> Result<DownloadedMedia, DomainError> {
        info!(url, dest = %dest_dir.display(), "downloading with {}", self.runner.program());
        let output = self.runner.run(&download_args(url, dest_dir)).await?;
        let media = parse_download_output(&output.stdout)?;

        if !media.path.exists() {
            return Err(DomainError::FileNotFound(format!(
                "downloader reported {} but it is missing",
                media.path.display()
            )));
        }
        Ok(media)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_args() {
        let args: Vec<String> = download_args("https://youtu.be/abc12345678", Path::new("temp"))
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        let template = PathBuf::from("temp").join("%(id)s.%(ext)s");
        assert_eq!(args[3], template.to_string_lossy());
        assert!(args.contains(&"after_move:%(filepath)s".to_string()));
        assert_eq!(args[args.len() - 2], "--");
        assert_eq!(args.last().unwrap(), "https://youtu.be/abc12345678");
    }

    #[test]
    fn test_parse_download_output() {
        let stdout = "WARNING: something noisy\nabc12345678\nwebm\ntemp/abc12345678.webm\n";
        let media = parse_download_output(stdout).unwrap();
        assert_eq!(media.id, "abc12345678");
        assert_eq!(media.ext, "webm");
        assert_eq!(media.path, PathBuf::from("temp/abc12345678.webm"));
    }

    #[test]
    fn test_parse_download_output_incomplete() {
        assert!(matches!(
            parse_download_output("abc12345678\n"),
            Err(DomainError::ToolFailed { .. })
        ));
    }
}
