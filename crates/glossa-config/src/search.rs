use serde::{Deserialize, Serialize};

fn default_max_suggestions() -> usize {
    3
}

fn default_max_completions() -> usize {
    10
}

fn default_similarity_cutoff() -> f64 {
    0.6
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fuzzy matches returned when a query has no exact hit
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Prefix completions offered while typing
    #[serde(default = "default_max_completions")]
    pub max_completions: usize,
    /// Candidates scoring below this similarity are not suggested
    #[serde(default = "default_similarity_cutoff")]
    pub similarity_cutoff: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            max_completions: default_max_completions(),
            similarity_cutoff: default_similarity_cutoff(),
        }
    }
}
