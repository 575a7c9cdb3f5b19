/// Dictionary collaborator consulted for word definitions
pub trait DefinitionSource: Send + Sync {
    /// First sense of `word`, `None` when the dictionary has no entry
    fn define(&self, word: &str) -> Result<Option<String>, LookupError>;

    /// Get dictionary metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub language: String,
    pub entry_count: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Lookup service unavailable: {0}")]
    Unavailable(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lookup cancelled")]
    Cancelled,
}

impl LookupError {
    /// Whether repeating the same call may succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, LookupError::Unavailable(_) | LookupError::IoError(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
