use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::persist::write_atomic;

/// Function words used when the store file is missing or unreadable
pub const DEFAULT_COMMON_WORDS: [&str; 30] = [
    "the", "and", "is", "of", "a", "an", "in", "to", "it", "that", "was", "he", "she", "for",
    "on", "are", "with", "as", "i", "his", "they", "at", "be", "this", "have", "from", "or",
    "had", "but", "not",
];

/// Baseline snapshot compiled in, used when the baseline file is missing
const BUILT_IN_BASELINE: &str = include_str!("../../../assets/combined_common_words.txt");

/// Persistent set of words excluded from difficulty checks.
///
/// The backing file holds one lowercase word per line. It only grows,
/// except through [`CommonWordStore::reset_from`].
#[derive(Debug, Clone)]
pub struct CommonWordStore {
    path: PathBuf,
    words: HashSet<String>,
}

impl CommonWordStore {
    /// Load the store at `path`, falling back to the built-in words
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::try_load(&path) {
            Ok(store) => {
                tracing::info!("Loaded {} common words from {}", store.len(), path.display());
                store
            }
            Err(StoreError::NotFound(_)) => {
                tracing::warn!(
                    "Common words file not found at {}. Using a small default list.",
                    path.display()
                );
                Self::with_defaults(path)
            }
            Err(e) => {
                tracing::warn!("Error reading common words file: {}", e);
                Self::with_defaults(path)
            }
        }
    }

    pub fn try_load(path: &Path) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            _ => StoreError::IoError(e),
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            words: parse_words(&content),
        })
    }

    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: DEFAULT_COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Copy the baseline snapshot to `path` unless a store already exists there.
    /// Returns whether a copy was made.
    pub fn seed_from_baseline(path: &Path, baseline: &Path) -> Result<bool, StoreError> {
        if path.exists() {
            return Ok(false);
        }
        let snapshot = read_baseline(baseline)?;
        write_atomic(path, &snapshot)?;
        tracing::info!("Copied {} to {}", baseline.display(), path.display());
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Add `new_words` in one batch and append them to the backing file.
    ///
    /// The in-memory set keeps the new words even when the write fails.
    /// Returns how many words were actually new.
    pub fn append(&mut self, new_words: &[String]) -> Result<usize, StoreError> {
        let added: Vec<&String> = new_words
            .iter()
            .filter(|word| self.words.insert((*word).clone()))
            .collect();

        if added.is_empty() {
            return Ok(0);
        }

        let mut content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // Without a file the store came from the defaults; persist all of it
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let mut words: Vec<&String> = self.words.iter().collect();
                words.sort();
                let mut content = String::new();
                for word in words {
                    content.push_str(word);
                    content.push('\n');
                }
                write_atomic(&self.path, &content)?;
                return Ok(added.len());
            }
            Err(e) => return Err(e.into()),
        };

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        for word in &added {
            content.push_str(word);
            content.push('\n');
        }
        write_atomic(&self.path, &content)?;

        tracing::info!("Appended {} words to {}", added.len(), self.path.display());
        Ok(added.len())
    }

    /// Replace the store wholesale with the baseline snapshot
    pub fn reset_from(&mut self, baseline: &Path) -> Result<(), StoreError> {
        let snapshot = read_baseline(baseline)?;
        write_atomic(&self.path, &snapshot)?;
        self.words = parse_words(&snapshot);
        tracing::info!("Common words reset to {} entries", self.words.len());
        Ok(())
    }
}

fn read_baseline(baseline: &Path) -> Result<String, StoreError> {
    match fs::read_to_string(baseline) {
        Ok(snapshot) => Ok(snapshot),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "Baseline {} not found, using the built-in snapshot",
                baseline.display()
            );
            Ok(BUILT_IN_BASELINE.to_string())
        }
        Err(source) => Err(StoreError::Baseline {
            path: baseline.to_path_buf(),
            source,
        }),
    }
}

fn parse_words(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}
