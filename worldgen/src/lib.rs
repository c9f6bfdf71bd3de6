//! Gazebo worlds built from the `maze` generators
//!
//! The binaries share the config file format and logging setup defined here.

use std::{fs::read_to_string, path::Path};

use anyhow::Context;
use serde::Deserialize;
use simple_logger::SimpleLogger;

use maze::{PartialMazeConfig, PartialScatterConfig};

pub mod sdf;

/// Content of a config file
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub maze: PartialMazeConfig,
    pub scatter: PartialScatterConfig,
}

impl FileConfig {
    /// Load the config file, if any
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        path.map(|path| {
            read_to_string(path)
                .with_context(|| format!("Cannot read config file {}", path.display()))
                .and_then(|s| {
                    toml::from_str::<FileConfig>(&s).context("Cannot parse config file")
                })
        })
        .transpose()
        .context("While loading configs")
        .map(Option::unwrap_or_default)
    }
}

pub fn init_logging() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .env()
        .init()
        .context("While initializing logging")
}

/// Use the given seed, or draw a fresh one
///
/// The drawn seed is logged, so the run can be repeated.
pub fn pick_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let seed = rand::random();
        log::info!("No seed given, using {seed}");
        seed
    })
}
