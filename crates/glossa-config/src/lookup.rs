use std::env;

use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "en".to_string()
}

fn default_corpus_variant() -> String {
    "large".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    250
}

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_online() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_language")]
    pub language: String,
    /// Word list the frequency oracle reads from
    #[serde(default = "default_corpus_variant")]
    pub corpus_variant: String,
    /// Frequency reported for words the oracle does not know
    #[serde(default)]
    pub frequency_floor: f64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,
    /// Offline lexicon: a JSON file or a directory of them
    #[serde(default)]
    pub dictionary_path: Option<String>,
    /// Frequency TSV (`word\tfrequency`) overriding the bundled model per word
    #[serde(default)]
    pub frequency_path: Option<String>,
    /// Query the online dictionary, `dictionary_path` is required when off
    #[serde(default = "default_online")]
    pub online: bool,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let online = env::var("GLOSSA_ONLINE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_online());

        let max_attempts = env::var("GLOSSA_LOOKUP_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_max_attempts());

        Self {
            online,
            max_attempts,
            dictionary_path: env::var("GLOSSA_DICTIONARY_PATH").ok(),
            frequency_path: env::var("GLOSSA_FREQUENCY_PATH").ok(),
            ..Self::default()
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            corpus_variant: default_corpus_variant(),
            frequency_floor: 0.0,
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            dictionary_path: None,
            frequency_path: None,
            online: default_online(),
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
