pub mod dictionary;
pub mod extract;
pub mod frequency;
pub mod loader;
pub mod online;
pub mod processor;

pub use dictionary::{DictionaryEntry, JsonDictionary};
pub use extract::PlainTextExtractor;
pub use frequency::{EnglishFrequency, WordListFrequency};
pub use loader::DictionaryLoader;
pub use online::HttpDictionary;
pub use processor::EnglishProcessor;
