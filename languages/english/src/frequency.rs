use std::collections::HashMap;
use std::path::Path;

use glossa_core::dictionary::{LoadError, LookupError};
use glossa_core::language::FrequencyOracle;
use wordfreq::WordFreq;
use wordfreq_model::{ModelKind, load_wordfreq};

/// English word frequencies from the wordfreq "large" list
pub struct EnglishFrequency {
    model: WordFreq,
    overrides: WordListFrequency,
}

impl EnglishFrequency {
    /// Load the bundled model. Only the large English list ships, other
    /// variants are answered from it.
    pub fn load(corpus_variant: &str) -> Result<Self, LoadError> {
        if !corpus_variant.eq_ignore_ascii_case("large") {
            tracing::warn!(
                "Corpus variant '{}' is not bundled, using 'large'",
                corpus_variant
            );
        }

        tracing::info!("Loading English word frequencies...");
        let model = load_wordfreq(ModelKind::LargeEn)
            .map_err(|e| LoadError::InvalidFormat(format!("wordfreq model: {e}")))?;

        Ok(Self {
            model,
            overrides: WordListFrequency::default(),
        })
    }

    /// Answer the words in `overrides` from that list instead of the model
    pub fn with_overrides(mut self, overrides: WordListFrequency) -> Self {
        self.overrides = overrides;
        self
    }
}

impl FrequencyOracle for EnglishFrequency {
    fn global_frequency(
        &self,
        word: &str,
        language: &str,
        _corpus_variant: &str,
        floor: f64,
    ) -> Result<f64, LookupError> {
        if !language.eq_ignore_ascii_case("en") {
            return Err(LookupError::UnsupportedLanguage(language.to_string()));
        }

        let word = word.to_lowercase();
        let frequency = match self.overrides.get(&word) {
            Some(frequency) => frequency,
            None => f64::from(self.model.word_frequency(&word)),
        };
        Ok(frequency.max(floor))
    }
}

/// Word frequencies read from a `word\tfrequency` list
#[derive(Debug, Default, Clone)]
pub struct WordListFrequency {
    frequencies: HashMap<String, f64>,
}

impl WordListFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load frequency data from TSV file (word\tfrequency format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let list = Self {
            frequencies: parse_tsv(&content),
        };
        tracing::info!(
            "Loaded {} word frequencies from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.frequencies.get(word).copied()
    }
}

fn parse_tsv(content: &str) -> HashMap<String, f64> {
    let mut frequencies = HashMap::new();

    for line in content.lines() {
        let parts: Vec<&str> = line.split('\t').collect();
        if parts.len() >= 2 {
            if let Ok(freq) = parts[1].trim().parse::<f64>() {
                if (0.0..=1.0).contains(&freq) {
                    frequencies.insert(parts[0].trim().to_lowercase(), freq);
                }
            }
        }
    }

    frequencies
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;

    fn english() -> &'static EnglishFrequency {
        static MODEL: OnceLock<EnglishFrequency> = OnceLock::new();
        MODEL.get_or_init(|| EnglishFrequency::load("large").unwrap())
    }

    fn frequency(word: &str) -> f64 {
        english().global_frequency(word, "en", "large", 0.0).unwrap()
    }

    #[test]
    fn everyday_words_are_globally_common() {
        assert!(frequency("the") > 1e-2);
        for word in ["looked", "thought", "people", "because", "against"] {
            assert!(frequency(word) > 1e-5, "{word} should be common");
        }
    }

    #[test]
    fn rare_words_rank_below_everyday_ones() {
        assert!(frequency("harpoon") < frequency("looked"));
        assert!(frequency("cetology") < 1e-6);
    }

    #[test]
    fn unknown_words_get_the_floor() {
        assert_eq!(frequency("qzxjvwk"), 0.0);
        assert_eq!(
            english()
                .global_frequency("qzxjvwk", "en", "large", 1e-9)
                .unwrap(),
            1e-9
        );
    }

    #[test]
    fn lookups_ignore_case() {
        assert_eq!(frequency("Looked"), frequency("looked"));
    }

    #[test]
    fn other_languages_are_rejected() {
        let err = english()
            .global_frequency("gato", "es", "large", 0.0)
            .unwrap_err();
        assert!(matches!(err, LookupError::UnsupportedLanguage(_)));
        assert!(!err.is_transient());
    }

    #[test]
    fn overrides_take_precedence_over_the_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.tsv");
        std::fs::write(&path, "Looked\t1e-9\n").unwrap();

        let oracle = EnglishFrequency::load("large")
            .unwrap()
            .with_overrides(WordListFrequency::load_from_file(&path).unwrap());

        assert_eq!(oracle.global_frequency("looked", "en", "large", 0.0).unwrap(), 1e-9);
        assert!(oracle.global_frequency("thought", "en", "large", 0.0).unwrap() > 1e-5);
    }

    #[test]
    fn loads_tsv_skipping_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("freq.tsv");
        std::fs::write(&path, "Sea\t1.1e-4\nbroken\nnan\tabc\nbig\t7\n").unwrap();

        let list = WordListFrequency::load_from_file(&path).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get("sea"), Some(1.1e-4));
    }
}
