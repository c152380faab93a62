//! Command implementations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::adapters::{FFmpegAdapter, TomlConfigAdapter};
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::args::{ClassifyArgs, LoopsArgs, ProbeArgs, RenderArgs};
use crate::config_initialization::{config_source, initialize_configuration};
use crate::domain::model::{Locality, RenderReport, SourceRef, ToolPaths, VisualKind};
use crate::domain::rules::{local_media_path, loop_count};
use crate::ports::MediaPort;
use crate::utils::Utils;

/// Execute the render command
pub async fn render(config_path: Option<&Path>, args: RenderArgs) -> Result<()> {
    info!("Starting render");

    let config = initialize_configuration(config_path, &args)?;
    let container = DefaultAppContainer::new(config).context("Failed to set up pipeline")?;
    let report = container
        .render_interactor()
        .execute()
        .await
        .context("Render failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize render report to JSON")?;
        println!("{}", json);
    } else {
        display_report(&report);
    }

    info!("Render completed in {}", Utils::format_duration(report.elapsed));
    Ok(())
}

/// One classified input entry
#[derive(Debug, Serialize)]
pub struct ClassifiedEntry {
    pub source: SourceRef,
    pub locality: Locality,
    /// Where a local entry is read from
    pub local_path: Option<PathBuf>,
}

/// Classify entries without touching the network
pub fn classify_entries(entries: &[String], input_dir: &Path) -> Vec<ClassifiedEntry> {
    entries
        .iter()
        .map(|entry| SourceRef::parse(entry))
        .filter(|source| !source.raw.is_empty())
        .map(|source| {
            let locality = source.kind.locality();
            let local_path = match locality {
                Locality::Local => Some(local_media_path(input_dir, &source.raw)),
                Locality::Remote => None,
            };
            ClassifiedEntry {
                source,
                locality,
                local_path,
            }
        })
        .collect()
}

/// Execute the classify command
pub fn classify(args: ClassifyArgs) -> Result<()> {
    let classified = classify_entries(&args.entries, &args.input_dir);

    if args.json {
        let json = serde_json::to_string_pretty(&classified)
            .context("Failed to serialize classification to JSON")?;
        println!("{}", json);
        return Ok(());
    }

    for entry in &classified {
        match &entry.local_path {
            Some(path) => println!("{}\t{}\t{}", entry.source.raw, entry.source.kind, path.display()),
            None => println!("{}\t{}", entry.source.raw, entry.source.kind),
        }
    }
    Ok(())
}

/// Execute the probe command
pub async fn probe(args: ProbeArgs) -> Result<()> {
    info!("Probing {}", args.input.display());

    let tools = ToolPaths {
        ffprobe: args.ffprobe.clone(),
        ..ToolPaths::default()
    };
    let duration = FFmpegAdapter::new(&tools)
        .probe_duration(&args.input)
        .await
        .with_context(|| format!("Failed to probe {}", args.input.display()))?;

    if args.json {
        let json = serde_json::json!({
            "path": args.input,
            "duration": duration,
            "formatted": Utils::format_seconds(duration),
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{}\t{:.3}s ({})", args.input.display(), duration, Utils::format_seconds(duration));
    }
    Ok(())
}

/// Execute the loops command
pub fn loops(args: LoopsArgs) -> Result<()> {
    let repeats = loop_count(args.audio, args.clip)?;
    println!(
        "{} repeats ({:.3}s of visual for {:.3}s of audio)",
        repeats,
        repeats as f64 * args.clip,
        args.audio
    );
    Ok(())
}

/// Execute the show-config command
pub fn show_config(config_path: Option<&Path>, args: RenderArgs) -> Result<()> {
    let config = initialize_configuration(config_path, &args)?;
    let text = TomlConfigAdapter::to_toml_string(&config)?;

    match config_source(&TomlConfigAdapter::new(), config_path) {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# built-in defaults"),
    }
    print!("{}", text);
    Ok(())
}

/// Display a render report in human-readable format
fn display_report(report: &RenderReport) {
    println!("Output: {}", report.output_path.display());
    println!("Duration: {}", Utils::format_seconds(report.duration));
    println!("Video: {} @ {} fps", report.video_codec, report.fps);

    match report.visual.kind {
        VisualKind::Still => println!("Visual: still image {}", report.visual.path.display()),
        VisualKind::Motion => println!(
            "Visual: {} x{} loop",
            report.visual.path.display(),
            report.visual.repeats
        ),
    }

    println!("Sources ({}):", report.sources.len());
    for (index, source) in report.sources.iter().enumerate() {
        println!(
            "  {}. {} [{:?}] -> {}",
            index + 1,
            source.source.raw,
            source.origin,
            source.path.display()
        );
    }

    if report.timestamps_generated {
        println!("Timestamps: generated");
    }
    println!("Elapsed: {}", Utils::format_duration(report.elapsed));
}
