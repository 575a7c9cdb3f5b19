use std::path::{Path, PathBuf};

use glossa_core::dictionary::LoadError;

use crate::dictionary::JsonDictionary;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<JsonDictionary, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::FileNotFound(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let dict = JsonDictionary::from_json(&json)?;
        tracing::info!("Loaded {} dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    /// Load a lexicon from one JSON file, or from every `.json` file in a
    /// directory merged in file name order
    pub fn load(path: &Path) -> Result<JsonDictionary, LoadError> {
        if !path.is_dir() {
            return Self::load_from_file(path);
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|file| file.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        if files.is_empty() {
            return Err(LoadError::FileNotFound(format!(
                "no .json files in {}",
                path.display()
            )));
        }

        let mut dict = JsonDictionary::new();
        for file in &files {
            dict = dict.merge(Self::load_from_file(file)?);
        }
        tracing::info!(
            "Merged {} dictionary files ({} entries)",
            files.len(),
            dict.entry_count()
        );
        Ok(dict)
    }
}
