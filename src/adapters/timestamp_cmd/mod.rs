//! Timestamp generator adapter running a configured command

use std::ffi::OsString;

use async_trait::async_trait;
use tracing::info;

use crate::adapters::tool_runner::ToolRunner;
use crate::domain::errors::*;
use crate::ports::*;

/// Runs the configured generator with its fixed argv; nothing from the run is passed
pub struct CommandTimestampAdapter {
    command: Vec<String>,
}

impl CommandTimestampAdapter {
    pub fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

#[async_trait]
impl TimestampPort for CommandTimestampAdapter {
    async fn generate(&self) -> Result<bool, DomainError> {
        let Some((program, rest)) = self.command.split_first() else {
            info!("no timestamp generator configured, skipping");
            return Ok(false);
        };

        let args: Vec<OsString> = rest.iter().map(OsString::from).collect();
        let output = ToolRunner::new(program.clone()).run(&args).await?;
        for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
            info!(target: "mixreel::timestamps", "{}", line);
        }
        Ok(true)
    }
}
