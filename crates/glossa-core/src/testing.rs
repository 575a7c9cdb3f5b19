use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::dictionary::{DefinitionSource, LookupError, SourceMetadata};
use crate::language::{FrequencyOracle, LanguageProcessor, Token};

pub fn word_set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Whitespace tokenizer without Unicode normalization
pub struct SplitProcessor;

impl LanguageProcessor for SplitProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|surface| Token {
                surface: surface.to_string(),
            })
            .collect()
    }
}

/// Dictionary defining each known word as "meaning of <word>"
#[derive(Default)]
pub struct StubDictionary {
    known: HashSet<String>,
    pub calls: AtomicUsize,
    /// Transient failures returned before answering
    failures: AtomicUsize,
}

impl StubDictionary {
    pub fn with_words(words: &[&str]) -> Self {
        Self {
            known: word_set(words),
            ..Self::default()
        }
    }

    pub fn failing_first(mut self, failures: usize) -> Self {
        self.failures = AtomicUsize::new(failures);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn meaning_of(word: &str) -> String {
    format!("meaning of {word}")
}

impl DefinitionSource for StubDictionary {
    fn define(&self, word: &str) -> Result<Option<String>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(LookupError::Unavailable("stub offline".to_string()));
        }
        Ok(self.known.contains(word).then(|| meaning_of(word)))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "stub".to_string(),
            language: "en".to_string(),
            entry_count: Some(self.known.len()),
        }
    }
}

/// Oracle with fixed frequencies, everything else reports the floor
#[derive(Default)]
pub struct StubOracle {
    frequencies: HashMap<String, f64>,
    unavailable: bool,
}

impl StubOracle {
    pub fn with(entries: &[(&str, f64)]) -> Self {
        Self {
            frequencies: entries.iter().map(|(w, f)| (w.to_string(), *f)).collect(),
            unavailable: false,
        }
    }

    /// Oracle whose every query fails transiently
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

impl FrequencyOracle for StubOracle {
    fn global_frequency(
        &self,
        word: &str,
        _language: &str,
        _corpus_variant: &str,
        floor: f64,
    ) -> Result<f64, LookupError> {
        if self.unavailable {
            return Err(LookupError::Unavailable("stub oracle offline".to_string()));
        }
        Ok(self.frequencies.get(word).copied().unwrap_or(floor))
    }
}

/// `word` repeated `times` times, space separated
pub fn repeat_word(word: &str, times: usize) -> String {
    vec![word; times].join(" ")
}
