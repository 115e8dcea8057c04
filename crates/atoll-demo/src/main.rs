//! Atoll host binary.
//!
//! Loads `config.ron` (creating it on first run), applies CLI overrides,
//! generates an island mesh and writes preview artifacts. With `--watch` it
//! keeps polling the config file and regenerates on every change, reusing the
//! pipeline so the falloff mask is only rebuilt when its shape changes.

mod artifacts;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use atoll_config::{CliArgs, Config, default_config_dir};
use atoll_pipeline::{GenerationError, GenerationPipeline};
use clap::Parser;
use tracing::{error, info, warn};

use crate::artifacts::{ArtifactError, write_artifacts};

const WATCH_INTERVAL: Duration = Duration::from_millis(500);

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}; pass --config <dir>");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut config = file_config.clone();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    atoll_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %config_dir.display(), "atoll starting");

    let mut pipeline = GenerationPipeline::new();
    if let Err(e) = regenerate(&mut pipeline, &config) {
        error!("generation failed: {e}");
        if !args.watch {
            return ExitCode::FAILURE;
        }
    }

    if args.watch {
        watch(&mut pipeline, &config_dir, &args, file_config);
    }

    ExitCode::SUCCESS
}

/// Generate from `config`, report the vertex count and write artifacts.
fn regenerate(pipeline: &mut GenerationPipeline, config: &Config) -> Result<(), RunError> {
    let mesh = pipeline.generate(&config.terrain)?;
    info!(
        vertex_count = pipeline.vertex_count().unwrap_or_default(),
        seed = config.terrain.seed,
        "terrain regenerated"
    );

    let vertices_per_line = config
        .terrain
        .vertices_per_line()
        .map_err(GenerationError::from)?;
    let falloff = if config.terrain.use_falloff {
        pipeline.falloff_cache().mask()
    } else {
        None
    };

    for path in write_artifacts(&config.output, &mesh, vertices_per_line, falloff)? {
        info!(path = %path.display(), "wrote artifact");
    }
    Ok(())
}

/// Poll the config file and regenerate whenever the effective config changes.
///
/// CLI overrides are re-applied to every reloaded file, so edits to an
/// overridden field have no effect.
fn watch(
    pipeline: &mut GenerationPipeline,
    config_dir: &Path,
    args: &CliArgs,
    mut file_config: Config,
) {
    info!(config_dir = %config_dir.display(), "watching config for changes");

    loop {
        std::thread::sleep(WATCH_INTERVAL);

        let reloaded = match file_config.reload(config_dir) {
            Ok(Some(reloaded)) => reloaded,
            Ok(None) => continue,
            Err(e) => {
                warn!("config reload failed, keeping previous settings: {e}");
                continue;
            }
        };

        let mut previous = file_config.clone();
        previous.apply_cli_overrides(args);
        let mut next = reloaded.clone();
        next.apply_cli_overrides(args);
        file_config = reloaded;

        if next == previous {
            continue;
        }
        if !next.terrain_changed(&previous) {
            info!("only output settings changed, rewriting artifacts");
        }
        if let Err(e) = regenerate(pipeline, &next) {
            error!("generation failed: {e}");
        }
    }
}
