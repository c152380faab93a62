//! CLI module for Mixreel
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::logging::LogFormat;

pub mod args;
pub mod commands;

/// Mixreel
///
/// Downloads or collects a list of tracks, joins their audio and renders it
/// over a still image or a looping clip.
#[derive(Parser, Debug)]
#[command(name = "mixreel")]
#[command(about = "Mixreel - stitch tracks into one video over a still or looping visual")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (RUST_LOG takes precedence)
    #[arg(
        long,
        default_value = "info",
        global = true,
        env = "MIXREEL_LOG_LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value = "compact", global = true, env = "MIXREEL_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Configuration file (TOML, or YAML by extension)
    #[arg(long, global = true, env = "MIXREEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch sources, merge their audio and render the final video
    Render(args::RenderArgs),
    /// Show how input entries would be resolved
    Classify(args::ClassifyArgs),
    /// Print the duration of a media file
    Probe(args::ProbeArgs),
    /// Compute how many copies of a clip cover an audio track
    Loops(args::LoopsArgs),
    /// Print the effective configuration as TOML
    ShowConfig(args::RenderArgs),
}
