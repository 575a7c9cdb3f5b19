use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use crate::counter::LocalFrequencies;
use crate::profile::FrequencyProfile;
use crate::resolver::{DefinitionCache, DefinitionResolver, FrequencyResolver};

/// Difficult words of the active book with their definitions
pub type DifficultWordMap = BTreeMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Classification {
    pub difficult: DifficultWordMap,
    /// Globally common words frequent enough in this book to learn, sorted
    pub newly_common: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Verdict {
    Difficult(String),
    Common,
    /// Locally or globally rare but the dictionary has no entry
    Undefined,
    /// Between the local limit and the common-word threshold without being globally rare
    Unclassified,
    /// The frequency oracle could not be reached
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("classification cancelled")]
pub struct Cancelled;

pub struct DifficultyClassifier<'a> {
    profile: FrequencyProfile,
    definitions: &'a DefinitionResolver,
    frequencies: &'a FrequencyResolver,
}

impl<'a> DifficultyClassifier<'a> {
    pub fn new(
        profile: FrequencyProfile,
        definitions: &'a DefinitionResolver,
        frequencies: &'a FrequencyResolver,
    ) -> Self {
        Self {
            profile,
            definitions,
            frequencies,
        }
    }

    /// Split the counted tokens into difficult and newly common words.
    ///
    /// Each token lands in at most one of the two outputs. Tokens are
    /// visited in sorted order and the result does not depend on it.
    pub fn classify(
        &self,
        local: &LocalFrequencies,
        cache: &mut DefinitionCache,
        cancel: &CancellationToken,
    ) -> Result<Classification, Cancelled> {
        let mut classification = Classification::default();

        for token in &local.distinct {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let verdict = self.judge(token, local.count_of(token), cache, cancel);
            // A lookup cut short by the cancel reads as a miss
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }
            tracing::debug!("{}: {:?}", token, verdict);

            match verdict {
                Verdict::Difficult(definition) => {
                    classification.difficult.insert(token.clone(), definition);
                }
                Verdict::Common => classification.newly_common.push(token.clone()),
                Verdict::Undefined | Verdict::Unclassified | Verdict::Unknown => {}
            }
        }

        Ok(classification)
    }

    fn judge(
        &self,
        token: &str,
        local: usize,
        cache: &mut DefinitionCache,
        cancel: &CancellationToken,
    ) -> Verdict {
        if local <= self.profile.local_limit {
            return self.define(token, cache, cancel);
        }

        let Some(global) = self.frequencies.global_frequency(token, cancel) else {
            return Verdict::Unknown;
        };

        if global < self.profile.global_freq_limit {
            self.define(token, cache, cancel)
        } else if local > self.profile.common_word_lower_limit {
            Verdict::Common
        } else {
            Verdict::Unclassified
        }
    }

    fn define(
        &self,
        token: &str,
        cache: &mut DefinitionCache,
        cancel: &CancellationToken,
    ) -> Verdict {
        match self.definitions.resolve(token, cache, cancel) {
            Some(definition) => Verdict::Difficult(definition),
            None => Verdict::Undefined,
        }
    }
}
