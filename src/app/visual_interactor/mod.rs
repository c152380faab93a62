// Visual interactor - Produces the picture track for the render

use std::sync::Arc;

use crate::app::fetch_interactor::MediaFetcher;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::{is_motion, loop_count};
use crate::ports::*;

/// Decides between a still image and a looped motion clip
pub struct VisualResolver {
    config: Arc<PipelineConfig>,
    fetcher: Arc<MediaFetcher>,
    http: Arc<dyn HttpPort>,
    media: Arc<dyn MediaPort>,
    image: Arc<dyn ImagePort>,
    log_port: Arc<dyn LogPort>,
}

impl VisualResolver {
    pub fn new(
        config: Arc<PipelineConfig>,
        fetcher: Arc<MediaFetcher>,
        http: Arc<dyn HttpPort>,
        media: Arc<dyn MediaPort>,
        image: Arc<dyn ImagePort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            config,
            fetcher,
            http,
            media,
            image,
            log_port,
        }
    }

    /// Build a visual at least `audio_duration` long when looping, else a still
    pub async fn resolve(
        &self,
        audio_duration: f64,
        image_url: &str,
        loop_requested: bool,
    ) -> Result<VisualClip, DomainError> {
        if loop_requested && is_motion(image_url) {
            self.resolve_motion(audio_duration, image_url).await
        } else {
            self.resolve_still(image_url).await
        }
    }

    async fn resolve_motion(&self, audio_duration: f64, url: &str) -> Result<VisualClip, DomainError> {
        let settings = &self.config.render;
        let source = self.fetcher.fetch_direct(url, &self.config.temp_dir).await?;
        let clip_duration = self.media.probe_duration(&source).await?;
        let repeats = loop_count(audio_duration, clip_duration).map_err(|e| match e {
            DomainError::ZeroDurationClip(_) => DomainError::ZeroDurationClip(url.to_string()),
            other => other,
        })?;

        self.log_port
            .log_event(
                &LogEvent::info("visual", "Looping motion clip")
                    .with("clip_duration", clip_duration)
                    .with("audio_duration", audio_duration)
                    .with("repeats", repeats),
            )
            .await;

        let looped = self.config.looped_visual_path();
        self.media.loop_clip(&source, repeats, settings, &looped).await?;
        Ok(VisualClip::looped(looped, clip_duration, repeats, settings.fps))
    }

    async fn resolve_still(&self, url: &str) -> Result<VisualClip, DomainError> {
        let bytes = self.http.get_bytes(url).await?;
        let target = self.config.image_path();
        let (width, height) = self.image.decode_to_png(&bytes, &target).await?;
        self.log_port
            .info(&format!(
                "Stored still image {}x{} at {}",
                width,
                height,
                target.display()
            ))
            .await;
        Ok(VisualClip::still(target, self.config.render.fps))
    }
}
