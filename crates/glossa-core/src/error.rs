use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Common words file not found: {0}")]
    NotFound(PathBuf),

    #[error("Baseline snapshot unreadable at {path}: {source}")]
    Baseline {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Definitions file unreadable: {0}")]
    Read(std::io::Error),

    #[error("Definitions file not written: {0}")]
    Write(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("A book is already being processed")]
    AlreadyProcessing,
}

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Could not extract any text from {book_name}")]
    ExtractionFailed { book_name: String },

    #[error("Processing cancelled")]
    Cancelled,

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, thiserror::Error)]
pub enum ResetError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
