use glossa_core::language::{LanguageProcessor, Token};
use unicode_normalization::UnicodeNormalization;

/// Characters that join words without spaces, e.g. "end—start" or "and/or"
const SEPARATORS: [char; 4] = ['\u{2014}', '\u{2013}', '/', '\u{2026}'];

const APOSTROPHES: [char; 2] = ['\'', '\u{2019}'];

/// Contraction endings after the apostrophe. "'s" stays, it is a possessive
/// as often as a contraction and the word normalizer strips it.
const CLITICS: [&str; 5] = ["m", "re", "ve", "ll", "d"];

/// Negations whose stem changes when "n't" comes off
const IRREGULAR_NEGATIONS: [(&str, &str); 3] = [("ca", "can"), ("wo", "will"), ("sha", "shall")];

/// English text processor
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishProcessor;

impl EnglishProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, text: &str) -> String {
        text.nfkc().collect()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
            .filter(|surface| !surface.is_empty())
            .map(|surface| Token {
                surface: strip_clitic(surface).to_string(),
            })
            .collect()
    }
}

/// Host word of a contraction: "don't" -> "do", "we'll" -> "we", "can't" -> "can"
fn strip_clitic(surface: &str) -> &str {
    let word = surface.trim_matches(|c: char| !c.is_alphanumeric() && !APOSTROPHES.contains(&c));
    let Some((stem, ending)) = word.rsplit_once(APOSTROPHES) else {
        return surface;
    };
    let ending = ending.to_ascii_lowercase();

    if ending == "t" {
        if let Some(host) = stem.strip_suffix(['n', 'N']) {
            let lower = host.to_ascii_lowercase();
            return IRREGULAR_NEGATIONS
                .iter()
                .find(|(contracted, _)| *contracted == lower)
                .map_or(host, |(_, full)| *full);
        }
    }
    if CLITICS.contains(&ending.as_str()) {
        return stem;
    }
    surface
}
