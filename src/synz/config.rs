use crate::error::{Result, SynzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "synonyms.txt";

/// Configuration for synz, stored as config.json in the app data
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SynzConfig {
    /// Path of the dictionary file used when `--file` is not given.
    /// Relative paths are resolved against the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for SynzConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl SynzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| SynzError::Read {
            path: config_path.clone(),
            source,
        })?;
        let config: SynzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|source| SynzError::Write {
                path: config_dir.to_path_buf(),
                source,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|source| SynzError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Resolve the dictionary path against the data directory.
    pub fn resolve_data_file(&self, data_dir: &Path) -> PathBuf {
        let path = Path::new(&self.data_file);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            data_dir.join(path)
        }
    }
}
