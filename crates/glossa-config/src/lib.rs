use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::search::SearchConfig;
use self::storage::StorageConfig;

pub mod lookup;
pub mod search;
pub mod storage;

fn default_level() -> String {
    "Medium".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub lookup: LookupConfig,
    pub search: SearchConfig,

    /// Proficiency level used when none is given on the command line
    #[serde(default = "default_level")]
    pub default_level: String,
}

impl Config {
    pub fn new() -> Self {
        let default_level = env::var("GLOSSA_LEVEL").unwrap_or_else(|_| default_level());

        Config {
            storage: StorageConfig::new(),
            lookup: LookupConfig::new(),
            search: SearchConfig::default(),

            default_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            lookup: LookupConfig::default(),
            search: SearchConfig::default(),
            default_level: default_level(),
        }
    }
}
