use std::{
    fs, io,
    path::{Path, PathBuf},
    thread::available_parallelism,
};

use lbl_solver::{PhaseBounds, pipeline};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "cubesolve.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Everything `cubesolve` can be configured with. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub twophase: TwophaseConfig,
    pub service: ServiceConfig,
}

/// Iteration bounds for the layer-by-layer phases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub cross: usize,
    pub first_layer_corners: usize,
    pub middle_layer: usize,
    pub top_cross: usize,
    pub top_corner_orientation: usize,
    pub permutation: usize,
}

/// How to run the external two-phase solver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwophaseConfig {
    pub binary: PathBuf,
    pub max_length: u8,
    /// Defaults to the available parallelism.
    pub threads: Option<usize>,
    /// Where the solver keeps its tables. Defaults to a directory in the
    /// user's cache.
    pub table_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Merge adjacent turns of the same face in reported solutions.
    pub simplify: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            cross: pipeline::DEFAULT_CROSS_BOUND,
            first_layer_corners: pipeline::DEFAULT_FIRST_LAYER_CORNERS_BOUND,
            middle_layer: pipeline::DEFAULT_MIDDLE_LAYER_BOUND,
            top_cross: pipeline::DEFAULT_TOP_CROSS_BOUND,
            top_corner_orientation: pipeline::DEFAULT_TOP_CORNER_ORIENTATION_BOUND,
            permutation: pipeline::DEFAULT_PERMUTATION_BOUND,
        }
    }
}

impl From<&PipelineConfig> for PhaseBounds {
    fn from(config: &PipelineConfig) -> Self {
        PhaseBounds {
            cross: config.cross,
            first_layer_corners: config.first_layer_corners,
            middle_layer: config.middle_layer,
            top_cross: config.top_cross,
            top_corner_orientation: config.top_corner_orientation,
            permutation: config.permutation,
        }
    }
}

impl Default for TwophaseConfig {
    fn default() -> Self {
        TwophaseConfig {
            binary: PathBuf::from("twophase"),
            max_length: 20,
            threads: None,
            table_dir: None,
        }
    }
}

impl TwophaseConfig {
    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(|| match available_parallelism() {
            Ok(v) => v.get(),
            Err(e) => {
                warn!("Failed to get available parallelism; defaulting to 1: {e}");
                1
            }
        })
    }

    pub fn table_dir(&self) -> Option<PathBuf> {
        self.table_dir.clone().or_else(|| {
            dirs::cache_dir().map(|mut cache| {
                cache.push("rob-twophase-tables");
                cache
            })
        })
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads the configuration at `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No configuration file at {}; using defaults",
                    path.display()
                );
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    source,
                });
            }
        };

        Config::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}
