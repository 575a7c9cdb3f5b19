use std::collections::{BTreeSet, HashMap, HashSet};

use crate::language::LanguageProcessor;
use crate::normalize::normalize;

/// Per-document occurrence counts of tokens not already known to be common
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LocalFrequencies {
    pub counts: HashMap<String, usize>,
    /// Sorted so downstream passes see tokens in a stable order
    pub distinct: BTreeSet<String>,
}

impl LocalFrequencies {
    pub fn count_of(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.distinct.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct.is_empty()
    }

    /// Tally every token of one page
    pub fn add_page(
        &mut self,
        page: &str,
        processor: &dyn LanguageProcessor,
        common_words: &HashSet<String>,
    ) {
        let text = processor.normalize(page);
        for token in processor.tokenize(&text) {
            let Some(word) = normalize(&token.surface) else {
                continue;
            };
            if common_words.contains(&word) {
                continue;
            }
            *self.counts.entry(word.clone()).or_insert(0) += 1;
            self.distinct.insert(word);
        }
    }
}

/// Count tokens across all pages, skipping words in `common_words`
pub fn count_pages<S: AsRef<str>>(
    pages: &[S],
    processor: &dyn LanguageProcessor,
    common_words: &HashSet<String>,
) -> LocalFrequencies {
    let mut frequencies = LocalFrequencies::default();
    for page in pages {
        frequencies.add_page(page.as_ref(), processor, common_words);
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{SplitProcessor, word_set};

    #[test]
    fn counts_scenario_page() {
        let pages = ["The cat sat. The cat ran. A gato was seen."];
        let common = word_set(&["the", "a", "was", "seen"]);

        let frequencies = count_pages(&pages, &SplitProcessor, &common);

        assert_eq!(frequencies.count_of("cat"), 2);
        assert_eq!(frequencies.count_of("sat"), 1);
        assert_eq!(frequencies.count_of("ran"), 1);
        assert_eq!(frequencies.count_of("gato"), 1);
        assert_eq!(
            frequencies.distinct.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["cat", "gato", "ran", "sat"]
        );
    }

    #[test]
    fn common_words_never_counted() {
        let pages = ["the THE The", "the"];
        let frequencies = count_pages(&pages, &SplitProcessor, &word_set(&["the"]));
        assert!(frequencies.is_empty());
        assert_eq!(frequencies.count_of("the"), 0);
    }

    #[test]
    fn counts_span_pages() {
        let pages = ["lantern lantern", "Lantern's glow"];
        let frequencies = count_pages(&pages, &SplitProcessor, &HashSet::new());
        assert_eq!(frequencies.count_of("lantern"), 3);
        assert_eq!(frequencies.count_of("glow"), 1);
        assert_eq!(frequencies.len(), 2);
    }

    #[test]
    fn identical_input_gives_identical_counts() {
        let pages = ["Call me Ishmael. Some years ago", "never mind how long"];
        let common = word_set(&["me"]);
        assert_eq!(
            count_pages(&pages, &SplitProcessor, &common),
            count_pages(&pages, &SplitProcessor, &common)
        );
    }
}
