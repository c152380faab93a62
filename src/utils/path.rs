//! Path helpers for downloaded files

use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// File name a direct download is stored under: the last non-empty URL path segment
pub fn url_file_name(url: &str) -> Result<String, DomainError> {
    let parsed = url::Url::parse(url).map_err(|e| DomainError::InvalidUrl(format!("{}: {}", url, e)))?;

    let name = parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| DomainError::InvalidUrl(format!("{} has no file name", url)))?;

    let decoded = urlencoding::decode(name)
        .map_err(|e| DomainError::InvalidUrl(format!("{}: {}", url, e)))?
        .into_owned();
    if decoded == "." || decoded == ".." || decoded.contains('/') || decoded.contains('\\') {
        return Err(DomainError::InvalidUrl(format!("{} has an unsafe file name", url)));
    }
    Ok(decoded)
}

/// Destination of a direct download inside `dest_dir`
pub fn download_destination(dest_dir: &Path, url: &str) -> Result<PathBuf, DomainError> {
    Ok(dest_dir.join(url_file_name(url)?))
}
