use std::path::Path;

use glossa_config::Config;
use glossa_types::Milestone;
use tokio_util::sync::CancellationToken;

use crate::artifact::DefinitionsArtifact;
use crate::classifier::{Classification, DifficultyClassifier};
use crate::counter::LocalFrequencies;
use crate::dictionary::DefinitionSource;
use crate::error::{ArtifactError, ProcessError, ResetError, StoreError};
use crate::language::{FrequencyOracle, LanguageProcessor};
use crate::profile::ProficiencyTier;
use crate::resolver::{DefinitionCache, DefinitionResolver, FrequencyResolver, RetryPolicy};
use crate::search::{SearchOptions, SearchOutcome};
use crate::session::BookSession;
use crate::store::CommonWordStore;

/// Cancellation and progress reporting for one run
#[derive(Clone, Default)]
pub struct RunControl {
    cancel: CancellationToken,
    progress: Option<kanal::Sender<Milestone>>,
}

impl RunControl {
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: kanal::Sender<Milestone>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn report(&self, milestone: Milestone) {
        tracing::info!("{}", milestone.describe());
        if let Some(progress) = &self.progress {
            if progress.send(milestone).is_err() {
                tracing::debug!("Progress receiver dropped");
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessRequest {
    pub book_name: String,
    pub level: String,
    /// Extracted page texts, empty when extraction failed
    pub pages: Vec<String>,
}

#[derive(Debug, Default)]
pub struct ProcessReport {
    pub book_name: String,
    pub difficult_count: usize,
    /// Words this run added to the common-word store
    pub newly_common: Vec<String>,
    pub store_error: Option<StoreError>,
    pub artifact_error: Option<ArtifactError>,
}

impl ProcessReport {
    /// Whether the results survived to disk
    pub fn is_durable(&self) -> bool {
        self.store_error.is_none() && self.artifact_error.is_none()
    }

    /// User-facing summary of the run
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.newly_common.is_empty() {
            lines.push(format!(
                "Appended {} words to common words.",
                self.newly_common.len()
            ));
        }
        lines.push(format!("{} analyzed successfully.", self.book_name));
        lines.push(format!("{} difficult words updated.", self.difficult_count));
        if let Some(e) = &self.store_error {
            lines.push(format!("Warning: common words not saved: {e}"));
        }
        if let Some(e) = &self.artifact_error {
            lines.push(format!("Warning: definitions not saved: {e}"));
        }
        lines
    }
}

#[derive(Debug)]
pub struct ProcessOutcome {
    /// The new active book
    pub session: BookSession,
    pub report: ProcessReport,
}

/// A failed run together with the session the caller should keep
#[derive(Debug)]
pub struct ProcessFailure {
    pub session: BookSession,
    pub error: ProcessError,
}

#[derive(Debug, Default)]
pub struct ResetOutcome {
    /// Book that was active before the reset
    pub cleared_book: Option<String>,
    pub artifact_error: Option<ArtifactError>,
}

/// Classification engine owning the common-word store and collaborators
pub struct Engine {
    processor: Box<dyn LanguageProcessor>,
    definitions: DefinitionResolver,
    frequencies: FrequencyResolver,
    store: CommonWordStore,
    artifact: DefinitionsArtifact,
    search: SearchOptions,
}

impl Engine {
    pub fn new(
        config: &Config,
        processor: Box<dyn LanguageProcessor>,
        dictionary: Box<dyn DefinitionSource>,
        oracle: Box<dyn FrequencyOracle>,
        store: CommonWordStore,
    ) -> Self {
        let source = dictionary.metadata();
        tracing::info!(
            "Definitions from {} ({} entries)",
            source.name,
            source
                .entry_count
                .map_or_else(|| "unknown".to_string(), |n| n.to_string())
        );
        let language = processor.language_code();
        if source.language != language || config.lookup.language != language {
            tracing::warn!(
                "Language mismatch: text '{}', dictionary '{}', frequencies '{}'",
                language,
                source.language,
                config.lookup.language
            );
        }

        let retry = RetryPolicy::from_config(&config.lookup);
        Self {
            processor,
            definitions: DefinitionResolver::new(dictionary, retry),
            frequencies: FrequencyResolver::new(oracle, retry, &config.lookup),
            store,
            artifact: DefinitionsArtifact::new(config.storage.definitions_path()),
            search: SearchOptions::from(&config.search),
        }
    }

    pub fn store(&self) -> &CommonWordStore {
        &self.store
    }

    pub fn artifact(&self) -> &DefinitionsArtifact {
        &self.artifact
    }

    /// Restore the active book from the definitions artifact
    pub fn load_session(&self) -> BookSession {
        match self.artifact.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!("Could not restore last book: {}", e);
                BookSession::empty()
            }
        }
    }

    /// Classify one book and make it the active book.
    ///
    /// On cancellation the prior session comes back untouched and nothing
    /// is written. When no pages were extracted the session moves to
    /// `FailedToLoad` and the previous artifact stays on disk.
    pub fn process(
        &mut self,
        session: BookSession,
        request: ProcessRequest,
        control: &RunControl,
    ) -> Result<ProcessOutcome, ProcessFailure> {
        if let Err(e) = session.ensure_can_process() {
            return Err(ProcessFailure {
                session,
                error: e.into(),
            });
        }

        let tier = ProficiencyTier::from_name(&request.level);
        tracing::info!(
            "Processing '{}' at {} level ({} pages)",
            request.book_name,
            tier,
            request.pages.len()
        );
        control.report(Milestone::ExtractionDone {
            pages: request.pages.len(),
        });

        let classification = match self.classify(&request.pages, tier, control) {
            Some(classification) => classification,
            None => {
                tracing::info!("Processing of '{}' cancelled", request.book_name);
                return Err(ProcessFailure {
                    session,
                    error: ProcessError::Cancelled,
                });
            }
        };

        if request.pages.is_empty() {
            tracing::warn!("No text extracted from '{}'", request.book_name);
            return Err(ProcessFailure {
                session: BookSession::failed(),
                error: ProcessError::ExtractionFailed {
                    book_name: request.book_name,
                },
            });
        }

        let Classification {
            difficult,
            newly_common,
        } = classification;

        let store_error = self.store.append(&newly_common).err();
        if let Some(e) = &store_error {
            tracing::error!("Error writing common words: {}", e);
        }

        let artifact_error = self.artifact.save(&request.book_name, &difficult).err();
        if let Some(e) = &artifact_error {
            tracing::error!("Error writing definitions: {}", e);
        }
        control.report(Milestone::Persisted);

        let report = ProcessReport {
            book_name: request.book_name.clone(),
            difficult_count: difficult.len(),
            newly_common,
            store_error,
            artifact_error,
        };

        Ok(ProcessOutcome {
            session: BookSession::loaded(request.book_name, difficult),
            report,
        })
    }

    /// Count and classify, `None` when cancelled
    fn classify(
        &self,
        pages: &[String],
        tier: ProficiencyTier,
        control: &RunControl,
    ) -> Option<Classification> {
        let mut local = LocalFrequencies::default();
        for page in pages {
            if control.is_cancelled() {
                return None;
            }
            local.add_page(page, self.processor.as_ref(), self.store.words());
        }
        control.report(Milestone::CountingDone {
            distinct: local.len(),
        });

        let mut cache = DefinitionCache::new();
        let classification =
            DifficultyClassifier::new(tier.profile(), &self.definitions, &self.frequencies)
                .classify(&local, &mut cache, control.cancel_token())
                .ok()?;
        tracing::debug!("Resolved {} definitions", cache.len());

        control.report(Milestone::ClassificationDone {
            difficult: classification.difficult.len(),
            newly_common: classification.newly_common.len(),
        });
        Some(classification)
    }

    /// Replace the common-word store with `baseline` and clear the active book
    pub fn reset_store(
        &mut self,
        session: &mut BookSession,
        baseline: &Path,
    ) -> Result<ResetOutcome, ResetError> {
        session.ensure_can_process()?;
        self.store.reset_from(baseline)?;

        let artifact_error = self.artifact.clear().err();
        if let Some(e) = &artifact_error {
            tracing::error!("Error clearing definitions: {}", e);
        }

        let cleared_book = session.book_name().map(str::to_string);
        *session = BookSession::empty();
        Ok(ResetOutcome {
            cleared_book,
            artifact_error,
        })
    }

    pub fn search(&self, session: &BookSession, query: &str) -> SearchOutcome {
        session.search(query, self.search)
    }

    pub fn suggest(&self, session: &BookSession, partial: &str) -> Vec<String> {
        session.suggest(partial, self.search)
    }
}
