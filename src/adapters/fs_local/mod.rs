// Local filesystem adapter - File system operations over std::fs

use std::fs;
use std::io::Write;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::ports::*;

/// Local filesystem adapter
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsLocalAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn file_exists(&self, path: &Path) -> Result<bool, DomainError> {
        Ok(path.is_file())
    }

    async fn file_size(&self, path: &Path) -> Result<u64, DomainError> {
        let metadata = fs::metadata(path).map_err(|e| {
            DomainError::FsFail(format!("Failed to get file size of {}: {}", path.display(), e))
        })?;
        Ok(metadata.len())
    }

    async fn read_to_string(&self, path: &Path) -> Result<String, DomainError> {
        fs::read_to_string(path)
            .map_err(|e| DomainError::FsFail(format!("Failed to read {}: {}", path.display(), e)))
    }

    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<(), DomainError> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.create_directory(parent).await?;

        // Write next to the target, then rename over it
        let mut temp_file = tempfile::Builder::new()
            .prefix(".mixreel-")
            .tempfile_in(parent)
            .map_err(|e| DomainError::FsFail(format!("Failed to create temp file: {}", e)))?;
        temp_file
            .write_all(bytes)
            .map_err(|e| DomainError::FsFail(format!("Failed to write {}: {}", path.display(), e)))?;
        temp_file
            .persist(path)
            .map_err(|e| DomainError::FsFail(format!("Failed to move file into {}: {}", path.display(), e)))?;
        Ok(())
    }

    async fn create_directory(&self, path: &Path) -> Result<(), DomainError> {
        fs::create_dir_all(path).map_err(|e| {
            DomainError::FsFail(format!("Failed to create directory {}: {}", path.display(), e))
        })?;
        Ok(())
    }
}
