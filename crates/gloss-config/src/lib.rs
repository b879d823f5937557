use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::language::LanguageConfig;

pub mod dictionary;
pub mod language;

pub use dictionary::DictionaryPair;

fn default_data_dir() -> PathBuf {
    PathBuf::from("./dat")
}

fn default_freq_threshold() -> u32 {
    100
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Holds `dict/` and `lang/<code>/`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Used by the one-shot CLI when no threshold is given
    #[serde(default = "default_freq_threshold")]
    pub freq_threshold: u32,
    /// Pending requests between the reader and the worker
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    #[serde(default)]
    pub dictionaries: DictionaryConfig,
    #[serde(default)]
    pub languages: LanguageConfig,
}

impl Config {
    pub fn new() -> Self {
        let data_dir = env::var("GLOSS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let freq_threshold = env::var("GLOSS_FREQ_THRESHOLD")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_freq_threshold);

        let channel_capacity = env::var("GLOSS_CHANNEL_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&capacity| capacity > 0)
            .unwrap_or_else(default_channel_capacity);

        Config {
            data_dir,
            freq_threshold,
            channel_capacity,
            dictionaries: DictionaryConfig::default(),
            languages: LanguageConfig::default(),
        }
    }

    /// JSON config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn dictionary_path(&self, pair: &DictionaryPair) -> PathBuf {
        self.data_dir.join("dict").join(&pair.file)
    }

    pub fn language_dir(&self, code: &str) -> PathBuf {
        self.data_dir.join("lang").join(code)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: default_data_dir(),
            freq_threshold: default_freq_threshold(),
            channel_capacity: default_channel_capacity(),
            dictionaries: DictionaryConfig::default(),
            languages: LanguageConfig::default(),
        }
    }
}
