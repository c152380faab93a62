use std::sync::Arc;

use crate::adapters::{
    CommandTimestampAdapter, FFmpegAdapter, FsLocalAdapter, ImagePngAdapter, ReqwestHttpAdapter,
    TracingLogAdapter, YtDlpAdapter,
};
use crate::app::render_interactor::{PipelinePorts, RenderInteractor};
use crate::domain::errors::DomainError;
use crate::domain::model::PipelineConfig;

pub trait AppContainer: Send + Sync {
    fn render_interactor(&self) -> Arc<RenderInteractor>;
}

pub struct DefaultAppContainer {
    render_interactor: Arc<RenderInteractor>,
}

impl DefaultAppContainer {
    /// Wire the production adapters for `config`
    pub fn new(config: PipelineConfig) -> Result<Self, DomainError> {
        config.validate()?;
        let ports = Self::production_ports(&config)?;
        Ok(Self::with_ports(config, ports))
    }

    /// Wire an interactor over caller-supplied ports
    pub fn with_ports(config: PipelineConfig, ports: PipelinePorts) -> Self {
        Self {
            render_interactor: Arc::new(RenderInteractor::new(config, ports)),
        }
    }

    pub fn production_ports(config: &PipelineConfig) -> Result<PipelinePorts, DomainError> {
        Ok(PipelinePorts {
            downloader: Arc::new(YtDlpAdapter::new(&config.tools)),
            http: Arc::new(ReqwestHttpAdapter::new(config.http_timeout())?),
            media: Arc::new(FFmpegAdapter::new(&config.tools)),
            image: Arc::new(ImagePngAdapter::new()),
            fs: Arc::new(FsLocalAdapter::new()),
            timestamps: Arc::new(CommandTimestampAdapter::new(config.timestamp_command.clone())),
            log: Arc::new(TracingLogAdapter::new()),
        })
    }
}

impl AppContainer for DefaultAppContainer {
    fn render_interactor(&self) -> Arc<RenderInteractor> {
        Arc::clone(&self.render_interactor)
    }
}
