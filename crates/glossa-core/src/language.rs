use crate::dictionary::LookupError;

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", "de", ...)
    fn language_code(&self) -> &str;

    /// Normalize text (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Break text into raw word tokens
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Global word frequency source
pub trait FrequencyOracle: Send + Sync {
    /// Relative frequency of `word` in general usage, in `[0, 1]`.
    /// Words the oracle does not know report `floor`.
    fn global_frequency(
        &self,
        word: &str,
        language: &str,
        corpus_variant: &str,
        floor: f64,
    ) -> Result<f64, LookupError>;
}

/// Raw surface form as it appears in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
}
