// Fetch interactor - Turns source references into local media files

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::cached_download_candidates;
use crate::ports::*;
use crate::utils::path::download_destination;
use crate::utils::Utils;

/// Media fetcher: downloader tool for pages, single GET for file URLs
pub struct MediaFetcher {
    config: Arc<PipelineConfig>,
    downloader: Arc<dyn DownloaderPort>,
    http: Arc<dyn HttpPort>,
    fs: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

impl MediaFetcher {
    /// Create new fetcher with injected ports
    pub fn new(
        config: Arc<PipelineConfig>,
        downloader: Arc<dyn DownloaderPort>,
        http: Arc<dyn HttpPort>,
        fs: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            config,
            downloader,
            http,
            fs,
            log_port,
        }
    }

    /// Run the downloader tool and return the path it wrote
    pub async fn fetch_via_downloader(&self, url: &str, dest_dir: &Path) -> Result<PathBuf, DomainError> {
        self.fs.create_directory(dest_dir).await?;
        let media = self.downloader.download(url, dest_dir).await?;
        self.log_port
            .info(&format!(
                "Downloaded {} as {} ({})",
                url,
                media.path.display(),
                media.ext
            ))
            .await;
        Ok(media.path)
    }

    /// GET the URL and store the body under its file name in `dest_dir`
    pub async fn fetch_direct(&self, url: &str, dest_dir: &Path) -> Result<PathBuf, DomainError> {
        let destination = download_destination(dest_dir, url)?;
        let bytes = self.http.get_bytes(url).await?;
        self.fs.write_bytes(&destination, &bytes).await?;
        self.log_port
            .info(&format!(
                "Fetched {} ({}) to {}",
                url,
                Utils::format_file_size(bytes.len() as u64),
                destination.display()
            ))
            .await;
        Ok(destination)
    }

    /// Earlier download of a YouTube id left in the temp directory
    pub async fn find_cached(&self, id: &str) -> Result<Option<PathBuf>, DomainError> {
        let candidates =
            cached_download_candidates(&self.config.temp_dir, id, &self.config.cached_extensions);
        for candidate in candidates {
            if self.fs.file_exists(&candidate).await? {
                return Ok(Some(candidate));
            }
        }
        Ok(None)
    }

    /// Bind one source reference to a file on disk
    pub async fn resolve(&self, source: &SourceRef) -> Result<ResolvedSource, DomainError> {
        let temp_dir = self.config.temp_dir.as_path();

        let (path, origin) = match &source.kind {
            SourceKind::YouTube { id } => match self.find_cached(id).await? {
                Some(path) => {
                    self.log_port
                        .info(&format!("Reusing {} for {}", path.display(), source.raw))
                        .await;
                    (path, ResolutionOrigin::Cached)
                }
                None => (
                    self.fetch_via_downloader(&source.raw, temp_dir).await?,
                    ResolutionOrigin::Downloaded,
                ),
            },
            SourceKind::Downloader => (
                self.fetch_via_downloader(&source.raw, temp_dir).await?,
                ResolutionOrigin::Downloaded,
            ),
            SourceKind::DirectUrl => (
                self.fetch_direct(&source.raw, temp_dir).await?,
                ResolutionOrigin::Fetched,
            ),
            SourceKind::LocalFile => {
                let path = self.config.local_path(&source.raw);
                if !self.fs.file_exists(&path).await? {
                    return Err(DomainError::FileNotFound(path.display().to_string()));
                }
                (path, ResolutionOrigin::Local)
            }
        };

        Ok(ResolvedSource {
            source: source.clone(),
            path,
            origin,
        })
    }

    /// Resolve every entry in order; the first failure aborts
    pub async fn resolve_all(&self, entries: &[String]) -> Result<Vec<ResolvedSource>, DomainError> {
        let mut resolved = Vec::with_capacity(entries.len());
        for entry in entries {
            let source = SourceRef::parse(entry);
            self.log_port
                .log_event(
                    &LogEvent::info("resolve", "Resolving source")
                        .with("entry", &source.raw)
                        .with("kind", &source.kind)
                        .with("remote", source.is_remote()),
                )
                .await;
            resolved.push(self.resolve(&source).await?);
        }
        Ok(resolved)
    }
}
