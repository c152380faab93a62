// Tracing log adapter - Structured logging using tracing crate

use async_trait::async_trait;
use tracing::{debug, error, info, trace, warn};

use crate::ports::*;

/// Tracing log adapter
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Create new tracing log adapter; the subscriber is installed by the binary
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingLogAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LogPort for TracingLogAdapter {
    async fn info(&self, message: &str) {
        info!("{}", message);
    }

    async fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    async fn error(&self, message: &str) {
        error!("{}", message);
    }

    async fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    async fn log_event(&self, event: &LogEvent) {
        let stage = event.stage;
        let context = &event.context;

        match event.level {
            LogLevel::Error => error!(stage, ?context, "{}", event.message),
            LogLevel::Warn => warn!(stage, ?context, "{}", event.message),
            LogLevel::Info => info!(stage, ?context, "{}", event.message),
            LogLevel::Debug => debug!(stage, ?context, "{}", event.message),
            LogLevel::Trace => trace!(stage, ?context, "{}", event.message),
        }
    }
}
