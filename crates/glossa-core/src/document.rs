use std::path::Path;

/// Text extraction collaborator
pub trait PageExtractor: Send + Sync {
    /// Plain text of each page in order, empty when the document cannot be read
    fn extract_pages(&self, path: &Path) -> Vec<String>;
}

/// Display name of a book, taken from its file name without extension
pub fn book_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
