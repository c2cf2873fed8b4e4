//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level terrain tool configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Terrain generation settings.
    pub terrain: TerrainSection,
    /// Debug image output settings.
    pub viz: VizSection,
    /// Debug/development settings.
    pub debug: DebugSection,
}

/// Which generation strategy the tool runs.
///
/// Serialized in snake_case so RON files stay plain identifiers; on the
/// command line clap exposes the kebab-case forms `diamond-square` and
/// `layered-noise`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TerrainStrategy {
    /// Midpoint-displacement fractal over a single square grid.
    DiamondSquare,
    /// Octave-summed gradient noise over a chunk lattice.
    LayeredNoise,
}

/// Terrain generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainSection {
    /// Generation strategy.
    pub strategy: TerrainStrategy,
    /// World seed for the permutation table or fractal RNG.
    pub seed: u64,
    /// Horizontal spacing between grid samples in world units.
    pub world_scale: f32,
    /// Grid side for the fractal strategy; must be `2^n + 1`.
    pub fractal_size: u32,
    /// Initial displacement range for the fractal strategy.
    pub roughness: f32,
    /// Chunk count along x for the layered-noise strategy.
    pub x_chunks: u32,
    /// Chunk count along z for the layered-noise strategy.
    pub z_chunks: u32,
    /// Samples per chunk along x.
    pub chunk_width: u32,
    /// Samples per chunk along z.
    pub chunk_depth: u32,
    /// Octaves to sum per noise sample.
    pub octaves: u32,
    /// Divides sample coordinates; larger values zoom the terrain out.
    pub noise_scale: f32,
    /// Amplitude falloff per octave.
    pub persistence: f32,
    /// Frequency growth per octave.
    pub lacunarity: f32,
    /// Vertical scale applied to shaped noise.
    pub mesh_height: f32,
    /// Water line as a fraction of `mesh_height`.
    pub water_height: f32,
}

/// Debug image output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VizSection {
    /// Directory the demo writes heightmap/normal-map PNGs into.
    pub output_dir: PathBuf,
    /// Integer upscale factor for written images (1 = one pixel per sample).
    pub image_scale: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugSection {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for TerrainStrategy {
    fn default() -> Self {
        Self::LayeredNoise
    }
}

impl Default for TerrainSection {
    fn default() -> Self {
        Self {
            strategy: TerrainStrategy::default(),
            seed: 0,
            world_scale: 1.0,
            fractal_size: 33,
            roughness: 7.0,
            x_chunks: 1,
            z_chunks: 1,
            chunk_width: 256,
            chunk_depth: 256,
            octaves: 8,
            noise_scale: 128.0,
            persistence: 0.5,
            lacunarity: 2.0,
            mesh_height: 64.0,
            water_height: 0.1,
        }
    }
}

impl Default for VizSection {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("terrain-debug"),
            image_scale: 1,
        }
    }
}

impl Default for DebugSection {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

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

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(!ron_str.is_empty());
        assert!(ron_str.contains("octaves: 8"));
        assert!(ron_str.contains("fractal_size: 33"));
        assert!(ron_str.contains("strategy: layered_noise"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.terrain.strategy = TerrainStrategy::DiamondSquare;
        config.terrain.seed = 99;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        // Config missing the `viz` section entirely
        let ron_str = "(terrain: (), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.viz, VizSection::default());
    }

    #[test]
    fn test_partial_terrain_section_fills_defaults() {
        let ron_str = "(terrain: (seed: 42, octaves: 3))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.terrain.seed, 42);
        assert_eq!(config.terrain.octaves, 3);
        assert_eq!(config.terrain.noise_scale, 128.0);
        assert_eq!(config.terrain.strategy, TerrainStrategy::LayeredNoise);
    }

    #[test]
    fn test_extra_field_ignored() {
        let ron_str = "(future_setting: true)";
        // RON with #[serde(default)] and deny_unknown_fields not set should accept this
        let result: Result<Config, _> = ron::from_str(ron_str);
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.strategy = TerrainStrategy::DiamondSquare;
        config.terrain.fractal_size = 65;
        config.viz.output_dir = PathBuf::from("elsewhere");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.terrain.seed = 777;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_some());
        assert_eq!(result.unwrap().terrain.seed, 777);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let result: Result<Config, _> = ron::from_str("{{not valid}}");
        assert!(result.is_err());
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// This is a comment\n(\n  // Another comment\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
