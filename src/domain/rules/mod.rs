// Domain rules - Source classification and loop arithmetic

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::*;
use crate::domain::model::Locality;

static YOUTUBE_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]{11})")
        .expect("YouTube id pattern is valid")
});

/// Extract the 11-character video id from a watch or short link
pub fn extract_youtube_id(url: &str) -> Option<String> {
    YOUTUBE_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// A line is remote iff it carries an http(s) scheme
pub fn classify(line: &str) -> Locality {
    if line.starts_with("http://") || line.starts_with("https://") {
        Locality::Remote
    } else {
        Locality::Local
    }
}

/// Path of a local entry inside the input directory
pub fn local_media_path(input_dir: &Path, name: &str) -> PathBuf {
    input_dir.join(name)
}

/// Split an input list into entries, dropping blanks and `#` comments
pub fn parse_input_list(content: &str) -> Vec<String> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Guess a MIME type from the path component of a URL or file name
pub fn guess_mime(url: &str) -> Option<mime_guess::Mime> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    };
    mime_guess::from_path(path).first()
}

/// Video files and GIFs can be looped; anything else is treated as a still
pub fn is_motion(url: &str) -> bool {
    match guess_mime(url) {
        Some(mime) => mime.type_() == mime_guess::mime::VIDEO || mime.essence_str() == "image/gif",
        None => false,
    }
}

/// A remote link that names an audio or video file outright
pub fn is_direct_media(url: &str) -> bool {
    match guess_mime(url) {
        Some(mime) => {
            mime.type_() == mime_guess::mime::AUDIO || mime.type_() == mime_guess::mime::VIDEO
        }
        None => false,
    }
}

/// Number of whole copies of a clip needed to cover the audio.
///
/// Always one more than the integer quotient, so the looped visual overshoots
/// the audio and the composer only ever trims.
pub fn loop_count(audio_duration: f64, clip_duration: f64) -> Result<u32, DomainError> {
    if !clip_duration.is_finite() || clip_duration <= 0.0 {
        return Err(DomainError::ZeroDurationClip(format!(
            "clip duration is {}",
            clip_duration
        )));
    }
    if !audio_duration.is_finite() || audio_duration < 0.0 {
        return Err(DomainError::BadArgs(format!(
            "audio duration must be a non-negative number, got {}",
            audio_duration
        )));
    }

    let quotient = (audio_duration / clip_duration).floor();
    if quotient >= u32::MAX as f64 {
        return Err(DomainError::BadArgs(format!(
            "clip of {}s is too short to cover {}s of audio",
            clip_duration, audio_duration
        )));
    }
    Ok(quotient as u32 + 1)
}

/// Candidate paths of an earlier download of `id`, in preference order
pub fn cached_download_candidates(temp_dir: &Path, id: &str, extensions: &[String]) -> Vec<PathBuf> {
    extensions
        .iter()
        .map(|ext| temp_dir.join(format!("{}.{}", id, ext)))
        .collect()
}

#[cfg(test)]
mod tests;
