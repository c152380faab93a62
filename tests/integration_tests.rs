use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use mixreel::adapters::TomlConfigAdapter;
use mixreel::cli::args::RenderArgs;
use mixreel::config_initialization::initialize_with_adapter;
use mixreel::domain::rules::*;
use mixreel::*;

/// Test utilities for the CLI binary
mod test_utils {
    use super::*;

    /// The binary, run in `dir` with no inherited MIXREEL_* settings
    pub fn mixreel_in(dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("mixreel").unwrap();
        cmd.current_dir(dir);
        for (key, _) in std::env::vars() {
            if key.starts_with("MIXREEL_") || key == "RUST_LOG" {
                cmd.env_remove(key);
            }
        }
        cmd
    }

    pub fn write_config(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

use test_utils::*;

#[test]
fn test_source_classification() {
    assert_eq!(
        SourceRef::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ").kind,
        SourceKind::YouTube {
            id: "dQw4w9WgXcQ".to_string()
        }
    );
    assert_eq!(SourceRef::parse("https://example.com/a.mp3").kind, SourceKind::DirectUrl);
    assert_eq!(SourceRef::parse("https://vimeo.com/1234").kind, SourceKind::Downloader);
    assert_eq!(SourceRef::parse("set/intro.mp3").kind, SourceKind::LocalFile);
}

#[test]
fn test_loop_count_public_api() {
    assert_eq!(loop_count(12.0, 5.0).unwrap(), 3);
    assert!(matches!(loop_count(1.0, 0.0), Err(DomainError::ZeroDurationClip(_))));
}

#[test]
fn test_config_file_and_overrides() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        dir.path(),
        "mixreel.yaml",
        "output_file: night.mp4\nrender:\n  preset: slow\n  fps: 25\n",
    );

    let args = RenderArgs {
        fps: Some(50),
        ..RenderArgs::default()
    };
    let adapter = TomlConfigAdapter::with_search_paths(Vec::new());
    let config = initialize_with_adapter(&adapter, Some(&path), &args).unwrap();

    assert_eq!(config.output_file, "night.mp4");
    assert_eq!(config.render.preset, "slow");
    assert_eq!(config.render.fps, 50);
    assert_eq!(config.render.video_codec, "libx264");
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("classify"));
}

#[test]
fn test_cli_classify_json() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["classify", "https://youtu.be/abc12345678", "clip.mp4", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"youtube\""))
        .stdout(predicate::str::contains("\"id\": \"abc12345678\""))
        .stdout(predicate::str::contains("\"kind\": \"local_file\""));
}

#[test]
fn test_cli_classify_text() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["classify", "https://soundcloud.com/artist/track"])
        .assert()
        .success()
        .stdout(predicate::str::contains("downloader"));
}

#[test]
fn test_cli_loops() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["loops", "--audio", "12", "--clip", "5"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 repeats"));

    mixreel_in(dir.path())
        .args(["loops", "--audio", "12", "--clip", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("zero"));
}

#[test]
fn test_cli_rejects_out_of_range_fps() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["render", "--fps", "0"])
        .assert()
        .failure();
}

#[test]
fn test_cli_probe_missing_file() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["probe", "--input", "absent.mp3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.mp3"));
}

#[test]
fn test_cli_show_config_defaults() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["show-config", "--output", "mix.mp4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# built-in defaults"))
        .stdout(predicate::str::contains("output_file = \"mix.mp4\""))
        .stdout(predicate::str::contains("fps = 24"));
}

#[test]
fn test_cli_config_precedence() {
    let dir = TempDir::new().unwrap();
    write_config(
        dir.path(),
        "mixreel.toml",
        "output_file = \"file.mp4\"\n\n[render]\nfps = 25\npreset = \"slow\"\n",
    );

    // File beats defaults
    mixreel_in(dir.path())
        .arg("show-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("# loaded from mixreel.toml"))
        .stdout(predicate::str::contains("fps = 25"))
        .stdout(predicate::str::contains("preset = \"slow\""));

    // Environment beats file
    mixreel_in(dir.path())
        .arg("show-config")
        .env("MIXREEL_FPS", "30")
        .assert()
        .success()
        .stdout(predicate::str::contains("fps = 30"));

    // Flags beat environment
    mixreel_in(dir.path())
        .args(["show-config", "--fps", "60"])
        .env("MIXREEL_FPS", "30")
        .assert()
        .success()
        .stdout(predicate::str::contains("fps = 60"))
        .stdout(predicate::str::contains("output_file = \"file.mp4\""));
}

#[test]
fn test_cli_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["--config", "nope.toml", "show-config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_cli_skip_timestamps_with_env_command() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args(["show-config", "--skip-timestamps"])
        .env("MIXREEL_TIMESTAMP_CMD", "python gen.py")
        .assert()
        .success()
        .stdout(predicate::str::contains("skip_timestamps = true"))
        .stdout(predicate::str::contains("\"gen.py\""));
}

#[test]
fn test_cli_timestamp_arg_keeps_spaces() {
    let dir = TempDir::new().unwrap();
    mixreel_in(dir.path())
        .args([
            "show-config",
            "--timestamp-cmd",
            "python gen.py",
            "--timestamp-arg",
            "My Videos/stamps.txt",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"My Videos/stamps.txt\""));
}
