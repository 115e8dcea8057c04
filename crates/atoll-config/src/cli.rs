//! Command-line argument parsing for Atoll.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Atoll command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "atoll", about = "Procedural island terrain generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Samples per side of the terrain grid.
    #[arg(long)]
    pub size: Option<u32>,

    /// Level-of-detail simplification (0 = full detail).
    #[arg(long)]
    pub simplification: Option<u32>,

    /// Number of noise octaves.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Height multiplier applied after the curve.
    #[arg(long)]
    pub height_multiplier: Option<f32>,

    /// Disable the island falloff mask.
    #[arg(long)]
    pub no_falloff: bool,

    /// Sample rows on the rayon thread pool.
    #[arg(long)]
    pub parallel: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to write artifacts to.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Keep running and regenerate whenever the terrain section of
    /// `config.ron` changes.
    #[arg(long)]
    pub watch: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(size) = args.size {
            self.terrain.terrain_size = size;
        }
        if let Some(simp) = args.simplification {
            self.terrain.simplification = simp;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octaves = octaves;
        }
        if let Some(mult) = args.height_multiplier {
            self.terrain.height_multiplier = mult;
        }
        if args.no_falloff {
            self.terrain.use_falloff = false;
        }
        if args.parallel {
            self.terrain.parallel_rows = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
    }
}
