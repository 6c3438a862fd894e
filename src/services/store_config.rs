use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DOCUMENT_FILE_NAME: &str = "scenarios.json";

#[derive(Error, Debug)]
pub enum StoreConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Where the scenario document lives. An ephemeral deployment is just a
/// different `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&contents).map_err(|source| StoreConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves the effective configuration: an explicit data directory wins
    /// over the config file, which wins over the built-in default.
    pub fn resolve(
        config_file: Option<&Path>,
        data_dir: Option<&Path>,
    ) -> Result<Self, StoreConfigError> {
        let mut config = match config_file {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        if let Some(dir) = data_dir {
            config.data_dir = dir.to_path_buf();
        }
        Ok(config)
    }

    pub fn document_path(&self) -> PathBuf {
        self.data_dir.join(DOCUMENT_FILE_NAME)
    }
}
