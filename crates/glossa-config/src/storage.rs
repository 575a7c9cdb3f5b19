use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const APP_NAME: &str = "glossa";

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_common_words_file() -> String {
    "common_words.txt".to_string()
}

fn default_definitions_file() -> String {
    "difficult_words_definitions.txt".to_string()
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from("assets/combined_common_words.txt")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Writable directory holding the store and the definitions artifact
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_common_words_file")]
    pub common_words_file: String,
    #[serde(default = "default_definitions_file")]
    pub definitions_file: String,
    /// Shipped snapshot the store is seeded from and reset to
    #[serde(default = "default_baseline_path")]
    pub baseline_path: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("GLOSSA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let baseline_path = env::var("GLOSSA_BASELINE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_baseline_path());

        Self {
            data_dir,
            baseline_path,
            ..Self::default()
        }
    }

    pub fn common_words_path(&self) -> PathBuf {
        self.data_dir.join(&self.common_words_file)
    }

    pub fn definitions_path(&self) -> PathBuf {
        self.data_dir.join(&self.definitions_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            common_words_file: default_common_words_file(),
            definitions_file: default_definitions_file(),
            baseline_path: default_baseline_path(),
        }
    }
}
