use std::path::Path;

use glossa_core::document::PageExtractor;

/// Page separator used by `pdftotext` and similar converters
pub const PAGE_BREAK: char = '\x0c';

/// Reads UTF-8 text files, one page per form-feed separated chunk
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn split_pages(text: &str) -> Vec<String> {
        text.split(PAGE_BREAK)
            .filter(|page| !page.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl PageExtractor for PlainTextExtractor {
    fn extract_pages(&self, path: &Path) -> Vec<String> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let pages = Self::split_pages(&text);
                tracing::debug!("Extracted {} pages from {}", pages.len(), path.display());
                pages
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_feeds_separate_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.txt");
        std::fs::write(&path, "Call me Ishmael.\x0cSome years ago\x0c  \n\x0c").unwrap();

        let pages = PlainTextExtractor.extract_pages(&path);
        assert_eq!(pages, vec!["Call me Ishmael.", "Some years ago"]);
    }

    #[test]
    fn text_without_breaks_is_one_page() {
        assert_eq!(PlainTextExtractor::split_pages("one page"), vec!["one page"]);
        assert!(PlainTextExtractor::split_pages("").is_empty());
    }

    #[test]
    fn unreadable_file_yields_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PlainTextExtractor.extract_pages(&dir.path().join("missing.txt")).is_empty());
        // A directory is not readable as text
        assert!(PlainTextExtractor.extract_pages(dir.path()).is_empty());
    }
}
