//! Command-line argument parsing for the terrain tool.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, TerrainStrategy};

/// Terrain tool command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "massif", about = "Procedural heightfield terrain generator")]
pub struct CliArgs {
    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Generation strategy.
    #[arg(long, value_enum)]
    pub strategy: Option<TerrainStrategy>,

    /// Octaves for the layered-noise strategy.
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Grid side for the diamond-square strategy (must be 2^n + 1).
    #[arg(long)]
    pub size: Option<u32>,

    /// Directory for debug image output.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(strategy) = args.strategy {
            self.terrain.strategy = strategy;
        }
        if let Some(octaves) = args.octaves {
            self.terrain.octaves = octaves;
        }
        if let Some(size) = args.size {
            self.terrain.fractal_size = size;
        }
        if let Some(ref output) = args.output {
            self.viz.output_dir = output.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_args() -> CliArgs {
        CliArgs {
            seed: None,
            strategy: None,
            octaves: None,
            size: None,
            output: None,
            log_level: None,
            config: None,
        }
    }

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            seed: Some(1234),
            strategy: Some(TerrainStrategy::DiamondSquare),
            size: Some(65),
            ..empty_args()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.terrain.seed, 1234);
        assert_eq!(config.terrain.strategy, TerrainStrategy::DiamondSquare);
        assert_eq!(config.terrain.fractal_size, 65);
        // Non-overridden fields retain defaults
        assert_eq!(config.terrain.octaves, 8);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&empty_args());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_kebab_case_strategy() {
        let args = CliArgs::parse_from(["massif", "--strategy", "diamond-square", "--seed", "7"]);
        assert_eq!(args.strategy, Some(TerrainStrategy::DiamondSquare));
        assert_eq!(args.seed, Some(7));
    }
}
