//! Mixreel CLI
//!
//! Stitches a list of tracks into one video over a still image or a looping clip.
//!
//! # Usage
//!
//! ```bash
//! mixreel render
//! mixreel render https://youtu.be/1O0yazhqaxs intro.mp3 --image-url https://example.com/loop.gif
//! mixreel classify https://youtu.be/1O0yazhqaxs clip.mp4 --json
//! mixreel probe --input temp/merged_audio.mp3
//! mixreel loops --audio 3600 --clip 7.5
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use mixreel::cli::{commands, Cli, Commands};
use mixreel::ports::LogLevel;
use mixreel::utils::logging::{LoggingConfig, LoggingSystem};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingSystem::new(LoggingConfig {
        level: LogLevel::parse(&cli.log_level)?,
        format: cli.log_format,
        ..LoggingConfig::default()
    });
    logging.initialize()?;
    logging.log_system_info();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Render(args) => {
            info!("Executing render command");
            commands::render(config_path, args).await?;
        }
        Commands::Classify(args) => commands::classify(args)?,
        Commands::Probe(args) => commands::probe(args).await?,
        Commands::Loops(args) => commands::loops(args)?,
        Commands::ShowConfig(args) => commands::show_config(config_path, args)?,
    }

    Ok(())
}
