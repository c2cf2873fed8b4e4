//! Configuration system for the terrain tool.
//!
//! Provides runtime-configurable settings that persist to disk as RON files.
//! Supports CLI overrides via clap, hot-reload detection, OS directory
//! resolution, and forward/backward compatible serialization.

mod cli;
mod config;
mod dirs;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugSection, TerrainSection, TerrainStrategy, VizSection};
pub use self::dirs::AppDirs;
pub use error::ConfigError;
