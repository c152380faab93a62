//! Subprocess runner shared by the external tool adapters

use std::ffi::OsString;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::DomainError;

/// Captured output of a successful tool run
#[derive(Debug, Clone, Default)]
pub struct ToolOutput {
    pub stdout: String,
}

/// Runs one external binary and turns its exit status into a domain result
#[derive(Debug, Clone)]
pub struct ToolRunner {
    program: String,
}

impl ToolRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run to completion; non-zero exit becomes `ToolFailed` carrying the stderr tail
    pub async fn run(&self, args: &[OsString]) -> Result<ToolOutput, DomainError> {
        debug!(program = %self.program, ?args, "spawning tool");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DomainError::ToolNotFound(self.program.clone()),
                _ => DomainError::ToolFailed {
                    tool: self.program.clone(),
                    message: e.to_string(),
                },
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::ToolFailed {
                tool: self.program.clone(),
                message: format!("{} ({})", stderr_tail(&stderr, 8), output.status),
            });
        }

        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

/// Last `lines` non-empty lines of a tool's stderr
pub fn stderr_tail(stderr: &str, lines: usize) -> String {
    let kept: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = kept.len().saturating_sub(lines);
    kept[start..].join("\n")
}
