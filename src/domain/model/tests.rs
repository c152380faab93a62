// Unit tests for domain models

use std::path::PathBuf;

use crate::domain::errors::*;
use crate::domain::model::*;

#[test]
fn test_source_ref_youtube_short_link() {
    let source = SourceRef::parse("https://youtu.be/abc12345678");
    assert_eq!(
        source.kind,
        SourceKind::YouTube {
            id: "abc12345678".to_string()
        }
    );
    assert!(source.is_remote());
}

#[test]
fn test_source_ref_local_file() {
    let source = SourceRef::parse("clip.mp4");
    assert_eq!(source.kind, SourceKind::LocalFile);
    assert!(!source.is_remote());

    let config = PipelineConfig::default();
    assert_eq!(config.local_path(&source.raw), PathBuf::from("input").join("clip.mp4"));
}

#[test]
fn test_source_ref_trims_whitespace() {
    let source = SourceRef::parse("  clip.mp4\r");
    assert_eq!(source.raw, "clip.mp4");
}

#[test]
fn test_source_ref_direct_and_downloader_urls() {
    assert_eq!(
        SourceRef::parse("https://cdn.example.com/set/track01.mp3").kind,
        SourceKind::DirectUrl
    );
    assert_eq!(
        SourceRef::parse("https://soundcloud.com/artist/track").kind,
        SourceKind::Downloader
    );
}

#[test]
fn test_source_kind_display() {
    assert_eq!(
        SourceKind::YouTube { id: "abc12345678".to_string() }.to_string(),
        "youtube (abc12345678)"
    );
    assert_eq!(SourceKind::LocalFile.to_string(), "local-file");
}

#[test]
fn test_source_ref_json_shape() {
    let json = serde_json::to_value(SourceRef::parse("https://youtu.be/abc12345678")).unwrap();
    assert_eq!(json["raw"], "https://youtu.be/abc12345678");
    assert_eq!(json["kind"], "youtube");
    assert_eq!(json["id"], "abc12345678");
}

#[test]
fn test_visual_clip_looped_duration() {
    let clip = VisualClip::looped(PathBuf::from("temp/looped_visual.mp4"), 5.0, 3, 24);
    assert_eq!(clip.kind, VisualKind::Motion);
    assert_eq!(clip.duration, Some(15.0));
    assert_eq!(clip.repeats, 3);

    let still = VisualClip::still(PathBuf::from("temp/image.png"), 24);
    assert_eq!(still.duration, None);
    assert_eq!(still.kind, VisualKind::Still);
}

#[test]
fn test_pipeline_config_defaults() {
    let config = PipelineConfig::default();
    assert_eq!(config.merged_audio_path(), PathBuf::from("temp").join("merged_audio.mp3"));
    assert_eq!(config.image_path(), PathBuf::from("temp").join("image.png"));
    assert_eq!(config.output_path(), PathBuf::from("output").join("test.mp4"));
    assert_eq!(config.input_list, PathBuf::from("input").join("input.txt"));
    assert_eq!(config.default_sources.len(), 2);
    assert_eq!(config.render.fps, 24);
    assert_eq!(config.render.video_codec, "libx264");
    assert!(config.loop_visual);
    assert!(config.validate().is_ok());
}

#[test]
fn test_pipeline_config_timeout() {
    let mut config = PipelineConfig::default();
    assert_eq!(config.http_timeout(), Some(std::time::Duration::from_secs(300)));
    config.http_timeout_secs = 0;
    assert_eq!(config.http_timeout(), None);
}

#[test]
fn test_pipeline_config_validation() {
    let mut config = PipelineConfig::default();
    config.render.fps = 0;
    assert!(matches!(config.validate(), Err(DomainError::ConfigError(_))));

    let mut config = PipelineConfig::default();
    config.render.video_codec = "  ".to_string();
    assert!(config.validate().is_err());

    let mut config = PipelineConfig::default();
    config.cached_extensions = vec![".webm".to_string()];
    assert!(config.validate().is_err());

    let mut config = PipelineConfig::default();
    config.image_url = String::new();
    assert!(config.validate().is_err());
}
