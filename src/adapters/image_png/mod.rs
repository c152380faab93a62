//! Still image adapter: decode any supported format, store as PNG

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::ImageFormat;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

pub struct ImagePngAdapter;

impl ImagePngAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImagePngAdapter {
    fn default() -> Self {
        Self::new()
    }
}

/// Blocking decode and save
pub fn decode_and_save(bytes: &[u8], output: &Path) -> Result<(u32, u32), DomainError> {
    let img = image::load_from_memory(bytes).map_err(|e| DomainError::DecodeFail(e.to_string()))?;
    let dims = (img.width(), img.height());
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|e| DomainError::DecodeFail(format!("{}: {}", output.display(), e)))?;
    Ok(dims)
}

#[async_trait]
impl ImagePort for ImagePngAdapter {
    async fn decode_to_png(&self, bytes: &[u8], output: &Path) -> Result<(u32, u32), DomainError> {
        let bytes = bytes.to_vec();
        let output: PathBuf = output.to_path_buf();
        let dims = tokio::task::spawn_blocking(move || decode_and_save(&bytes, &output))
            .await
            .map_err(|e| DomainError::DecodeFail(format!("decoder task failed: {}", e)))??;
        debug!(width = dims.0, height = dims.1, "image stored as PNG");
        Ok(dims)
    }
}
