use std::collections::HashMap;

use glossa_core::dictionary::{DefinitionSource, LoadError, LookupError, SourceMetadata};
use serde::Deserialize;

/// Headword with its senses, most common first
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    #[serde(default, alias = "meanings")]
    pub senses: Vec<String>,
}

impl DictionaryEntry {
    pub fn first_sense(&self) -> Option<&str> {
        self.senses
            .iter()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct DictionaryJson {
    words: Vec<DictionaryEntry>,
}

/// Offline dictionary keyed by lowercase headword
#[derive(Debug, Default, Clone)]
pub struct JsonDictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<String, usize>,
}

impl JsonDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{"words": [{"word": .., "senses": [..]}]}`
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        let data: DictionaryJson = serde_json::from_str(json_str)
            .map_err(|e| LoadError::InvalidFormat(e.to_string()))?;

        let mut dict = Self::new();
        for entry in data.words {
            // Entries without a usable sense cannot define anything
            if entry.first_sense().is_none() {
                continue;
            }
            dict.insert(entry);
        }
        Ok(dict)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.index
            .get(&word.to_lowercase())
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Merge another dictionary into this one.
    /// Headwords present in both take the other dictionary's entry.
    pub fn merge(mut self, other: JsonDictionary) -> Self {
        for entry in other.entries {
            self.insert(entry);
        }
        self
    }

    fn insert(&mut self, mut entry: DictionaryEntry) {
        entry.word = entry.word.trim().to_lowercase();
        match self.index.get(&entry.word) {
            Some(&idx) => self.entries[idx] = entry,
            None => {
                self.index.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }
}

impl DefinitionSource for JsonDictionary {
    fn define(&self, word: &str) -> Result<Option<String>, LookupError> {
        Ok(self
            .get(word)
            .and_then(DictionaryEntry::first_sense)
            .map(str::to_string))
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "JSON dictionary".to_string(),
            language: "en".to_string(),
            entry_count: Some(self.entries.len()),
        }
    }
}
