//! Configuration initialization and hierarchy management
//!
//! Precedence: CLI flags > `MIXREEL_*` environment variables > config file > defaults.
//! Environment variables reach us through clap's `env` attributes, so by the time
//! `RenderArgs` is populated both upper layers are already folded together.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::adapters::TomlConfigAdapter;
use crate::cli::args::RenderArgs;
use crate::domain::model::PipelineConfig;
use crate::error::{MixreelError, MixreelResult};

/// Build the effective configuration for a run
pub fn initialize_configuration(
    config_path: Option<&Path>,
    args: &RenderArgs,
) -> MixreelResult<PipelineConfig> {
    initialize_with_adapter(&TomlConfigAdapter::new(), config_path, args)
}

/// Same as [`initialize_configuration`] with an explicit file source
pub fn initialize_with_adapter(
    adapter: &TomlConfigAdapter,
    config_path: Option<&Path>,
    args: &RenderArgs,
) -> MixreelResult<PipelineConfig> {
    let mut config = adapter.load(config_path)?;

    let overrides = apply_overrides(&mut config, args);
    if overrides > 0 {
        info!("Applied {} command-line/environment overrides", overrides);
    }

    config.validate().map_err(|e| MixreelError::Config {
        message: e.to_string(),
    })?;
    debug!(?config, "effective configuration");
    Ok(config)
}

fn set<T>(slot: &mut T, value: Option<T>, count: &mut usize) {
    if let Some(value) = value {
        *slot = value;
        *count += 1;
    }
}

/// Fold flag values into `config`; returns how many settings changed source
pub fn apply_overrides(config: &mut PipelineConfig, args: &RenderArgs) -> usize {
    let mut count = 0;

    if !args.sources.is_empty() {
        config.sources = args.sources.clone();
        count += 1;
    }

    set(&mut config.input_list, args.input_list.clone(), &mut count);
    set(&mut config.input_dir, args.input_dir.clone(), &mut count);
    set(&mut config.temp_dir, args.temp_dir.clone(), &mut count);
    set(&mut config.output_dir, args.output_dir.clone(), &mut count);
    set(&mut config.output_file, args.output.clone(), &mut count);
    set(&mut config.image_url, args.image_url.clone(), &mut count);
    set(&mut config.http_timeout_secs, args.http_timeout, &mut count);

    set(&mut config.render.video_codec, args.video_codec.clone(), &mut count);
    set(&mut config.render.audio_codec, args.audio_codec.clone(), &mut count);
    set(&mut config.render.preset, args.preset.clone(), &mut count);
    set(&mut config.render.fps, args.fps, &mut count);
    set(&mut config.render.threads, args.threads, &mut count);

    set(&mut config.tools.ffmpeg, args.ffmpeg.clone(), &mut count);
    set(&mut config.tools.ffprobe, args.ffprobe.clone(), &mut count);
    set(&mut config.tools.ytdlp, args.ytdlp.clone(), &mut count);

    if let Some(command) = &args.timestamp_cmd {
        config.timestamp_command = command.split_whitespace().map(str::to_string).collect();
        count += 1;
    }
    // Verbatim arguments keep embedded spaces
    if !args.timestamp_args.is_empty() {
        config.timestamp_command.extend(args.timestamp_args.iter().cloned());
        count += 1;
    }
    if args.no_loop {
        config.loop_visual = false;
        count += 1;
    }
    if args.skip_timestamps {
        config.skip_timestamps = true;
        count += 1;
    }

    count
}

/// Config file a run would read, if any
pub fn config_source(adapter: &TomlConfigAdapter, explicit: Option<&Path>) -> Option<PathBuf> {
    adapter.locate(explicit).ok().flatten()
}
