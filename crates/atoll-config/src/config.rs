//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use atoll_terrain::TerrainConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation parameters, handed to the pipeline as a snapshot.
    pub terrain: TerrainConfig,
    /// Where and what to write after generation.
    pub output: OutputConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the artifacts are written to. Relative paths resolve against
    /// the working directory.
    pub directory: PathBuf,
    /// Write the mesh as Wavefront OBJ.
    pub write_obj: bool,
    /// Write a colored heightmap preview PNG.
    pub write_heightmap_png: bool,
    /// Write a greyscale falloff mask PNG (only when falloff is enabled).
    pub write_falloff_png: bool,
    /// Base file name shared by all artifacts.
    pub file_stem: String,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to a file in debug builds.
    pub log_to_file: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("atoll-out"),
            write_obj: true,
            write_heightmap_png: true,
            write_falloff_png: true,
            file_stem: "island".to_string(),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
        }
    }
}

impl OutputConfig {
    /// Path of an artifact with the given extension.
    pub fn artifact_path(&self, suffix: &str, extension: &str) -> PathBuf {
        let name = if suffix.is_empty() {
            format!("{}.{extension}", self.file_stem)
        } else {
            format!("{}_{suffix}.{extension}", self.file_stem)
        };
        self.directory.join(name)
    }
}

/// The platform config directory for Atoll, e.g. `~/.config/atoll` on Linux.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("atoll"))
        .ok_or(ConfigError::NoConfigDir)
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file; returns `Some(new_config)` if it differs from `self`.
    ///
    /// A host regenerates terrain only when the terrain section changed, see
    /// [`Config::terrain_changed`].
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Whether the terrain section differs from `other`'s.
    pub fn terrain_changed(&self, other: &Config) -> bool {
        self.terrain != other.terrain
    }
}
