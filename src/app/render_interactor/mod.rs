// Render interactor - Orchestrates the whole run, stage by stage

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::app::fetch_interactor::MediaFetcher;
use crate::app::visual_interactor::VisualResolver;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::parse_input_list;
use crate::ports::*;

/// Every port the pipeline talks to
#[derive(Clone)]
pub struct PipelinePorts {
    pub downloader: Arc<dyn DownloaderPort>,
    pub http: Arc<dyn HttpPort>,
    pub media: Arc<dyn MediaPort>,
    pub image: Arc<dyn ImagePort>,
    pub fs: Arc<dyn FsPort>,
    pub timestamps: Arc<dyn TimestampPort>,
    pub log: Arc<dyn LogPort>,
}

/// Where the entry list of a run came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    Explicit,
    ListFile,
    Defaults,
}

/// Interactor for the render use case
pub struct RenderInteractor {
    config: Arc<PipelineConfig>,
    fetcher: Arc<MediaFetcher>,
    visual: VisualResolver,
    media: Arc<dyn MediaPort>,
    fs: Arc<dyn FsPort>,
    timestamps: Arc<dyn TimestampPort>,
    log_port: Arc<dyn LogPort>,
}

impl RenderInteractor {
    /// Create new render interactor with injected ports
    pub fn new(config: PipelineConfig, ports: PipelinePorts) -> Self {
        let config = Arc::new(config);
        let fetcher = Arc::new(MediaFetcher::new(
            Arc::clone(&config),
            Arc::clone(&ports.downloader),
            Arc::clone(&ports.http),
            Arc::clone(&ports.fs),
            Arc::clone(&ports.log),
        ));
        let visual = VisualResolver::new(
            Arc::clone(&config),
            Arc::clone(&fetcher),
            Arc::clone(&ports.http),
            Arc::clone(&ports.media),
            Arc::clone(&ports.image),
            Arc::clone(&ports.log),
        );

        Self {
            config,
            fetcher,
            visual,
            media: ports.media,
            fs: ports.fs,
            timestamps: ports.timestamps,
            log_port: ports.log,
        }
    }

    /// Entries to render: explicit sources, else the list file, else the defaults
    pub async fn load_inputs(&self) -> Result<(Vec<String>, InputOrigin), DomainError> {
        if !self.config.sources.is_empty() {
            return Ok((self.config.sources.clone(), InputOrigin::Explicit));
        }

        let list = &self.config.input_list;
        if self.fs.file_exists(list).await? && self.fs.file_size(list).await? > 0 {
            let entries = parse_input_list(&self.fs.read_to_string(list).await?);
            if !entries.is_empty() {
                self.log_port
                    .info(&format!("Read {} entries from {}", entries.len(), list.display()))
                    .await;
                return Ok((entries, InputOrigin::ListFile));
            }
            self.log_port
                .warn(&format!("{} has no entries, using defaults", list.display()))
                .await;
        }

        Ok((self.config.default_sources.clone(), InputOrigin::Defaults))
    }

    /// Concatenate the audio of all sources in input order and measure the result
    pub async fn merge(&self, sources: &[ResolvedSource]) -> Result<MergedAudio, DomainError> {
        let inputs: Vec<PathBuf> = sources.iter().map(|s| s.path.clone()).collect();
        let output = self.config.merged_audio_path();

        self.media.merge_audio(&inputs, &output).await?;
        let duration = if inputs.is_empty() {
            0.0
        } else {
            self.media.probe_duration(&output).await?
        };

        self.log_port
            .log_event(
                &LogEvent::info("merge", "Merged audio")
                    .with("path", output.display())
                    .with("duration", format!("{:.3}", duration))
                    .with("sources", inputs.len()),
            )
            .await;

        Ok(MergedAudio {
            path: output,
            duration,
            source_count: inputs.len(),
        })
    }

    /// Bind visual and audio into the output file
    pub async fn compose(&self, visual: VisualClip, audio: MergedAudio) -> Result<PathBuf, DomainError> {
        if audio.duration <= 0.0 {
            return Err(DomainError::EmptyAudio);
        }

        let job = ComposeJob {
            visual,
            audio,
            output: self.config.output_path(),
            settings: self.config.render.clone(),
        };
        self.media.compose(&job).await?;
        Ok(job.output)
    }

    /// Run every stage in order; any failure aborts the run
    pub async fn execute(&self) -> Result<RenderReport, DomainError> {
        let result = self.run_stages().await;
        if let Err(e) = &result {
            self.log_port.error(&format!("Render failed: {}", e)).await;
        }
        result
    }

    async fn run_stages(&self) -> Result<RenderReport, DomainError> {
        let started_at = Utc::now();
        let clock = Instant::now();

        self.fs.create_directory(&self.config.temp_dir).await?;
        self.fs.create_directory(&self.config.output_dir).await?;

        let (entries, origin) = self.load_inputs().await?;
        self.log_port
            .info(&format!("Rendering {} sources ({:?})", entries.len(), origin))
            .await;

        let sources = self.fetcher.resolve_all(&entries).await?;
        let audio = self.merge(&sources).await?;
        if audio.duration <= 0.0 {
            return Err(DomainError::EmptyAudio);
        }

        let visual = self
            .visual
            .resolve(audio.duration, &self.config.image_url, self.config.loop_visual)
            .await?;

        let duration = audio.duration;
        let output_path = self.compose(visual.clone(), audio).await?;
        self.log_port
            .info(&format!("Video written to {}", output_path.display()))
            .await;

        let timestamps_generated = if self.config.skip_timestamps {
            self.log_port.debug("Timestamp generation skipped").await;
            false
        } else {
            self.timestamps.generate().await?
        };

        Ok(RenderReport {
            output_path,
            duration,
            fps: self.config.render.fps,
            video_codec: self.config.render.video_codec.clone(),
            sources,
            visual,
            started_at,
            elapsed: clock.elapsed(),
            timestamps_generated,
        })
    }
}
