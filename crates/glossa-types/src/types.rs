#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Start classifying a document with the given proficiency level
    ProcessBook {
        path: String,
        level: String,
    },
    /// Cancel the classification run currently in flight
    CancelProcessing,
    Search(String),
    Suggest(String),
    ResetStore,
    /// Report the active book
    ShowStatus,
    Progress(Milestone),
    /// Text for the presentation layer
    ShowOutput(String),
    /// Active book label changed
    BookChanged(BookLabel),
}

/// Discrete checkpoints of one classification run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    ExtractionDone { pages: usize },
    CountingDone { distinct: usize },
    ClassificationDone { difficult: usize, newly_common: usize },
    Persisted,
}

impl Milestone {
    pub fn describe(&self) -> String {
        match self {
            Milestone::ExtractionDone { pages } => format!("Extracted {pages} pages"),
            Milestone::CountingDone { distinct } => format!("Counted {distinct} candidate words"),
            Milestone::ClassificationDone {
                difficult,
                newly_common,
            } => format!("Classified {difficult} difficult, {newly_common} newly common"),
            Milestone::Persisted => "Results saved".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookLabel {
    NoBookLoaded,
    Processing,
    Loaded(String),
    FailedToLoad,
}

impl BookLabel {
    pub fn as_text(&self) -> &str {
        match self {
            BookLabel::NoBookLoaded => "No book loaded",
            BookLabel::Processing => "Processing...",
            BookLabel::Loaded(name) => name,
            BookLabel::FailedToLoad => "Failed to load book",
        }
    }
}
