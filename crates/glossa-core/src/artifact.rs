use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::classifier::DifficultWordMap;
use crate::error::ArtifactError;
use crate::persist::write_atomic;
use crate::session::BookSession;

pub const BOOK_NAME_KEY: &str = "__book_name__";

/// The persisted definitions of the active book.
///
/// First line `__book_name__: <name>`, then one `word: definition` per line.
#[derive(Debug, Clone)]
pub struct DefinitionsArtifact {
    path: PathBuf,
}

impl DefinitionsArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Session restored from disk, empty when there is no artifact
    pub fn load(&self) -> Result<BookSession, ArtifactError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BookSession::empty()),
            Err(e) => return Err(ArtifactError::Read(e)),
        };

        let (book_name, definitions) = parse(&content);
        Ok(match book_name {
            Some(name) => BookSession::loaded(name, definitions),
            None => BookSession::empty(),
        })
    }

    /// Overwrite the artifact with a new book
    pub fn save(&self, book_name: &str, definitions: &DifficultWordMap) -> Result<(), ArtifactError> {
        write_atomic(&self.path, &format(book_name, definitions)).map_err(ArtifactError::Write)
    }

    pub fn clear(&self) -> Result<(), ArtifactError> {
        write_atomic(&self.path, "").map_err(ArtifactError::Write)
    }
}

pub fn format(book_name: &str, definitions: &DifficultWordMap) -> String {
    let mut out = String::new();
    if !book_name.is_empty() {
        out.push_str(&format!("{}: {}\n", BOOK_NAME_KEY, single_line(book_name)));
    }
    for (word, definition) in definitions {
        out.push_str(&format!("{}: {}\n", word, single_line(definition)));
    }
    out
}

pub fn parse(content: &str) -> (Option<String>, DifficultWordMap) {
    let mut book_name = None;
    let mut definitions = DifficultWordMap::new();

    for line in content.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key == BOOK_NAME_KEY {
            book_name = Some(value.trim().to_string());
        } else if !key.is_empty() {
            definitions.insert(key.to_lowercase(), value.trim().to_string());
        }
    }

    (book_name, definitions)
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
