use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use glossa_config::lookup::LookupConfig;
use tokio_util::sync::CancellationToken;

use crate::dictionary::{DefinitionSource, LookupError};
use crate::language::FrequencyOracle;

/// How often a backoff wait looks at the cancel token
const CANCEL_POLL: Duration = Duration::from_millis(20);

/// Bounded retry for collaborator calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Delay before the second attempt, grows linearly after that
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &LookupConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            backoff: Duration::from_millis(config.backoff_ms),
        }
    }

    pub fn no_backoff(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff: Duration::ZERO,
        }
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    /// Once `cancel` fires no further attempt starts and the backoff wait
    /// ends early with [`LookupError::Cancelled`].
    pub fn run<T>(
        &self,
        what: &str,
        cancel: &CancellationToken,
        mut op: impl FnMut() -> Result<T, LookupError>,
    ) -> Result<T, LookupError> {
        let mut attempt = 1;
        loop {
            if cancel.is_cancelled() {
                return Err(LookupError::Cancelled);
            }
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    tracing::debug!("{} failed (attempt {}): {}", what, attempt, e);
                    if !wait_unless_cancelled(self.backoff * attempt, cancel) {
                        return Err(LookupError::Cancelled);
                    }
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Sleep for `delay`, returns false when `cancel` fired first
fn wait_unless_cancelled(delay: Duration, cancel: &CancellationToken) -> bool {
    let deadline = Instant::now() + delay;
    loop {
        if cancel.is_cancelled() {
            return false;
        }
        let now = Instant::now();
        if now >= deadline {
            return true;
        }
        thread::sleep((deadline - now).min(CANCEL_POLL));
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&LookupConfig::default())
    }
}

/// Definitions fetched during one classification run, misses included
#[derive(Debug, Default, Clone)]
pub struct DefinitionCache {
    entries: HashMap<String, Option<String>>,
}

impl DefinitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(None)` is a cached miss, `None` means never looked up
    pub fn get(&self, word: &str) -> Option<Option<&str>> {
        self.entries.get(word).map(Option::as_deref)
    }

    pub fn insert(&mut self, word: &str, definition: Option<String>) {
        self.entries.insert(word.to_string(), definition);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dictionary lookups behind a per-run cache and retry policy
pub struct DefinitionResolver {
    source: Box<dyn DefinitionSource>,
    retry: RetryPolicy,
}

impl DefinitionResolver {
    pub fn new(source: Box<dyn DefinitionSource>, retry: RetryPolicy) -> Self {
        Self { source, retry }
    }

    /// Definition of `word`, consulting `cache` before the dictionary.
    /// Lookup failures are cached as misses, cancelled lookups are not cached.
    pub fn resolve(
        &self,
        word: &str,
        cache: &mut DefinitionCache,
        cancel: &CancellationToken,
    ) -> Option<String> {
        if let Some(cached) = cache.get(word) {
            return cached.map(str::to_string);
        }

        let definition = match self.retry.run("define", cancel, || self.source.define(word)) {
            Ok(definition) => definition
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            Err(LookupError::Cancelled) => {
                tracing::debug!("Definition lookup for '{}' cancelled", word);
                return None;
            }
            Err(e) => {
                tracing::warn!("Definition lookup for '{}' failed: {}", word, e);
                None
            }
        };

        cache.insert(word, definition.clone());
        definition
    }
}

/// Frequency oracle queries bound to one language and corpus
pub struct FrequencyResolver {
    oracle: Box<dyn FrequencyOracle>,
    retry: RetryPolicy,
    language: String,
    corpus_variant: String,
    floor: f64,
}

impl FrequencyResolver {
    pub fn new(oracle: Box<dyn FrequencyOracle>, retry: RetryPolicy, config: &LookupConfig) -> Self {
        Self {
            oracle,
            retry,
            language: config.language.clone(),
            corpus_variant: config.corpus_variant.clone(),
            floor: config.frequency_floor,
        }
    }

    /// Global frequency of `word` in `[0, 1]`, `None` when the oracle keeps failing
    pub fn global_frequency(&self, word: &str, cancel: &CancellationToken) -> Option<f64> {
        let result = self.retry.run("global_frequency", cancel, || {
            self.oracle
                .global_frequency(word, &self.language, &self.corpus_variant, self.floor)
        });

        match result {
            Ok(freq) => Some(freq.clamp(0.0, 1.0)),
            Err(LookupError::Cancelled) => None,
            Err(e) => {
                tracing::warn!("Frequency lookup for '{}' failed: {}", word, e);
                None
            }
        }
    }
}
