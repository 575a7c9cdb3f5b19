use glossa_types::BookLabel;

use crate::classifier::DifficultWordMap;
use crate::error::SessionError;
use crate::search::{SearchIndex, SearchOptions, SearchOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NoBookLoaded,
    Processing,
    BookLoaded,
    /// The last attempt failed, a new upload is needed
    FailedToLoad,
}

/// The single active book and its difficult words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSession {
    state: SessionState,
    book_name: Option<String>,
    definitions: DifficultWordMap,
}

impl BookSession {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn loaded(book_name: impl Into<String>, definitions: DifficultWordMap) -> Self {
        Self {
            state: SessionState::BookLoaded,
            book_name: Some(book_name.into()),
            definitions,
        }
    }

    pub fn failed() -> Self {
        Self {
            state: SessionState::FailedToLoad,
            ..Self::default()
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn book_name(&self) -> Option<&str> {
        self.book_name.as_deref()
    }

    pub fn definitions(&self) -> &DifficultWordMap {
        &self.definitions
    }

    pub fn is_processing(&self) -> bool {
        self.state == SessionState::Processing
    }

    /// Whether a new classification run may start from this state
    pub fn ensure_can_process(&self) -> Result<(), SessionError> {
        if self.is_processing() {
            return Err(SessionError::AlreadyProcessing);
        }
        Ok(())
    }

    /// Mark this session as processing and hand back the prior session.
    ///
    /// The prior definitions stay searchable until the run finishes.
    pub fn begin_processing(&mut self) -> Result<BookSession, SessionError> {
        self.ensure_can_process()?;
        let prior = self.clone();
        self.state = SessionState::Processing;
        Ok(prior)
    }

    pub fn label(&self) -> BookLabel {
        match (self.state, &self.book_name) {
            (SessionState::Processing, _) => BookLabel::Processing,
            (SessionState::FailedToLoad, _) => BookLabel::FailedToLoad,
            (SessionState::BookLoaded, Some(name)) => BookLabel::Loaded(name.clone()),
            _ => BookLabel::NoBookLoaded,
        }
    }

    pub fn search(&self, query: &str, options: SearchOptions) -> SearchOutcome {
        SearchIndex::new(&self.definitions, options).lookup(query)
    }

    pub fn suggest(&self, partial: &str, options: SearchOptions) -> Vec<String> {
        SearchIndex::new(&self.definitions, options)
            .suggest(partial)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BookSession {
        let mut definitions = DifficultWordMap::new();
        definitions.insert("cat".to_string(), "a small feline".to_string());
        BookSession::loaded("Cats", definitions)
    }

    #[test]
    fn empty_session_has_no_book() {
        let session = BookSession::empty();
        assert_eq!(session.state(), SessionState::NoBookLoaded);
        assert_eq!(session.label(), BookLabel::NoBookLoaded);
        assert_eq!(session.search("cat", SearchOptions::default()), SearchOutcome::NotFound);
    }

    #[test]
    fn begin_processing_returns_prior_and_blocks_reentry() {
        let mut session = sample();
        let prior = session.begin_processing().unwrap();

        assert_eq!(prior.state(), SessionState::BookLoaded);
        assert_eq!(session.label(), BookLabel::Processing);
        assert_eq!(
            session.begin_processing(),
            Err(SessionError::AlreadyProcessing)
        );
    }

    #[test]
    fn processing_can_start_after_failure() {
        let mut session = BookSession::failed();
        assert_eq!(session.label(), BookLabel::FailedToLoad);
        assert!(session.begin_processing().is_ok());
    }

    #[test]
    fn search_uses_session_definitions() {
        let session = sample();
        assert!(matches!(
            session.search("cat", SearchOptions::default()),
            SearchOutcome::ExactHit { .. }
        ));
        assert_eq!(session.suggest("c", SearchOptions::default()), vec!["cat"]);
    }
}
