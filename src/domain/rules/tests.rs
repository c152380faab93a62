// Unit tests for classification and loop rules

use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;

#[test]
fn test_extract_youtube_id_short_link() {
    assert_eq!(
        extract_youtube_id("https://youtu.be/abc12345678"),
        Some("abc12345678".to_string())
    );
}

#[test]
fn test_extract_youtube_id_watch_link() {
    assert_eq!(
        extract_youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
        Some("dQw4w9WgXcQ".to_string())
    );
    assert_eq!(
        extract_youtube_id("https://youtube.com/watch?v=a-b_c-d_e-f"),
        Some("a-b_c-d_e-f".to_string())
    );
}

#[test]
fn test_extract_youtube_id_takes_first_eleven_chars() {
    assert_eq!(
        extract_youtube_id("https://youtu.be/abcdefghijklmnop"),
        Some("abcdefghijk".to_string())
    );
}

#[test]
fn test_extract_youtube_id_not_found() {
    assert_eq!(extract_youtube_id("https://vimeo.com/123456789"), None);
    assert_eq!(extract_youtube_id("https://youtu.be/short"), None);
    assert_eq!(extract_youtube_id("https://youtu.be/abc!@#45678"), None);
    assert_eq!(extract_youtube_id("clip.mp4"), None);
}

#[test]
fn test_classify() {
    assert_eq!(classify("https://youtu.be/abc12345678"), Locality::Remote);
    assert_eq!(classify("http://example.com/a.mp3"), Locality::Remote);
    assert_eq!(classify("clip.mp4"), Locality::Local);
    assert_eq!(classify("ftp://example.com/a.mp3"), Locality::Local);
}

#[test]
fn test_local_media_path() {
    assert_eq!(
        local_media_path(Path::new("input"), "clip.mp4"),
        PathBuf::from("input").join("clip.mp4")
    );
}

#[test]
fn test_parse_input_list_skips_blanks_and_comments() {
    let content = "  https://youtu.be/abc12345678 \n\n# intro\nclip.mp4\r\n   \n";
    assert_eq!(
        parse_input_list(content),
        vec!["https://youtu.be/abc12345678".to_string(), "clip.mp4".to_string()]
    );
    assert!(parse_input_list("\n \n#only comments\n").is_empty());
}

#[test]
fn test_parse_input_list_strips_byte_order_mark() {
    let entries = parse_input_list("\u{feff}https://youtu.be/abc12345678\r\nclip.mp4\r\n");
    assert_eq!(entries[0], "https://youtu.be/abc12345678");
    assert_eq!(
        SourceRef::parse(&entries[0]).kind,
        SourceKind::YouTube {
            id: "abc12345678".to_string()
        }
    );
    assert_eq!(entries[1], "clip.mp4");
}

#[test]
fn test_is_motion() {
    assert!(is_motion("https://example.com/loop.mp4"));
    assert!(is_motion("https://example.com/loop.webm?token=1"));
    assert!(is_motion("https://media.example.com/anim.gif"));
    assert!(!is_motion("https://i.imgur.com/4EmycCc.jpeg"));
    assert!(!is_motion("https://example.com/picture.png"));
    assert!(!is_motion("https://example.com/no-extension"));
}

#[test]
fn test_is_direct_media() {
    assert!(is_direct_media("https://example.com/track.mp3"));
    assert!(is_direct_media("https://example.com/video.mp4?dl=1"));
    assert!(!is_direct_media("https://example.com/watch/123"));
    assert!(!is_direct_media("https://example.com/cover.jpg"));
}

#[test]
fn test_loop_count_overshoots() {
    assert_eq!(loop_count(12.0, 5.0).unwrap(), 3);
    assert_eq!(loop_count(10.0, 5.0).unwrap(), 3);
    assert_eq!(loop_count(4.0, 5.0).unwrap(), 1);
    assert_eq!(loop_count(0.0, 5.0).unwrap(), 1);
}

#[test]
fn test_loop_count_covers_audio() {
    let cases = [(12.0, 5.0), (3600.0, 7.3), (0.5, 0.25), (59.99, 60.0), (125.4, 2.5)];
    for (audio, clip) in cases {
        let repeats = loop_count(audio, clip).unwrap() as f64;
        assert!(repeats * clip >= audio, "{} x {} < {}", repeats, clip, audio);
        assert!((repeats - 1.0) * clip <= audio, "{} x {} overshoots {}", repeats - 1.0, clip, audio);
    }
}

#[test]
fn test_loop_count_zero_duration_clip() {
    assert!(matches!(loop_count(12.0, 0.0), Err(DomainError::ZeroDurationClip(_))));
    assert!(matches!(loop_count(12.0, -1.0), Err(DomainError::ZeroDurationClip(_))));
    assert!(matches!(loop_count(12.0, f64::NAN), Err(DomainError::ZeroDurationClip(_))));
}

#[test]
fn test_loop_count_rejects_negative_audio() {
    assert!(matches!(loop_count(-1.0, 5.0), Err(DomainError::BadArgs(_))));
}

#[test]
fn test_cached_download_candidates() {
    let exts = vec!["webm".to_string(), "mp4".to_string()];
    assert_eq!(
        cached_download_candidates(Path::new("temp"), "abc12345678", &exts),
        vec![
            PathBuf::from("temp").join("abc12345678.webm"),
            PathBuf::from("temp").join("abc12345678.mp4"),
        ]
    );
}
