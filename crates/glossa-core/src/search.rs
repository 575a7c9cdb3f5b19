use glossa_config::search::SearchConfig;

use crate::classifier::DifficultWordMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    ExactHit { word: String, definition: String },
    /// Closest known words with their definitions, best first
    Suggestions(Vec<(String, String)>),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    pub max_suggestions: usize,
    pub max_completions: usize,
    pub similarity_cutoff: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for SearchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_suggestions: config.max_suggestions,
            max_completions: config.max_completions,
            similarity_cutoff: config.similarity_cutoff,
        }
    }
}

/// Lookup over the active book's definitions
pub struct SearchIndex<'a> {
    definitions: &'a DifficultWordMap,
    options: SearchOptions,
}

impl<'a> SearchIndex<'a> {
    pub fn new(definitions: &'a DifficultWordMap, options: SearchOptions) -> Self {
        Self {
            definitions,
            options,
        }
    }

    pub fn lookup(&self, query: &str) -> SearchOutcome {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return SearchOutcome::NotFound;
        }

        if let Some(definition) = self.definitions.get(&query) {
            return SearchOutcome::ExactHit {
                word: query,
                definition: definition.clone(),
            };
        }

        let suggestions = self.closest(&query);
        if suggestions.is_empty() {
            SearchOutcome::NotFound
        } else {
            SearchOutcome::Suggestions(suggestions)
        }
    }

    /// Known words starting with `partial`, in alphabetical order
    pub fn suggest(&self, partial: &str) -> Vec<&'a str> {
        let partial = partial.trim().to_lowercase();
        if partial.is_empty() {
            return Vec::new();
        }

        let definitions: &'a DifficultWordMap = self.definitions;
        definitions
            .range(partial.clone()..)
            .map(|(word, _)| word.as_str())
            .take_while(|word| word.starts_with(partial.as_str()))
            .take(self.options.max_completions)
            .collect()
    }

    fn closest(&self, query: &str) -> Vec<(String, String)> {
        let mut scored: Vec<(usize, f64, &String, &String)> = self
            .definitions
            .iter()
            .filter_map(|(word, definition)| {
                let distance = edit_distance(query, word);
                let score = similarity(distance, query, word);
                (score >= self.options.similarity_cutoff).then_some((distance, score, word, definition))
            })
            .collect();

        scored.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| b.1.total_cmp(&a.1))
                .then_with(|| a.2.cmp(b.2))
        });

        scored
            .into_iter()
            .take(self.options.max_suggestions)
            .map(|(_, _, word, definition)| (word.clone(), definition.clone()))
            .collect()
    }
}

fn similarity(distance: usize, a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / longest as f64
}

/// Edit distance counting adjacent transpositions as one edit
/// (optimal string alignment)
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        matrix[0][j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(matrix[i - 2][j - 2] + 1);
            }
            matrix[i][j] = best;
        }
    }

    matrix[a.len()][b.len()]
}
