//! Text tokenization shared by indexing and querying.

use std::collections::HashSet;

use crate::stopwords;

/// Splits text into lowercase word tokens, dropping stopwords.
///
/// A token is a run of at least two word characters (alphanumerics and
/// underscore); everything else separates tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: HashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Tokenizer {
    /// A tokenizer using the built-in English stopword list.
    #[must_use]
    pub fn english() -> Self {
        Self::with_stopwords(stopwords::ENGLISH.iter().copied())
    }

    /// A tokenizer with a custom stopword list (matched case-insensitively).
    #[must_use]
    pub fn with_stopwords<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stopwords: stopwords
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|w| w.chars().count() >= 2)
            .filter(|w| !self.is_stopword(w))
            .map(str::to_string)
            .collect()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits() {
        let tokenizer = Tokenizer::with_stopwords(Vec::<String>::new());
        assert_eq!(
            tokenizer.tokenize("Sunrise Catering, AUSTIN"),
            vec!["sunrise", "catering", "austin"]
        );
    }

    #[test]
    fn test_drops_single_characters() {
        let tokenizer = Tokenizer::with_stopwords(Vec::<String>::new());
        assert_eq!(tokenizer.tokenize("a b DJ x"), vec!["dj"]);
    }

    #[test]
    fn test_punctuation_separates_tokens() {
        let tokenizer = Tokenizer::with_stopwords(Vec::<String>::new());
        assert_eq!(
            tokenizer.tokenize("hall-rental/photo_booth 24h"),
            vec!["hall", "rental", "photo_booth", "24h"]
        );
    }

    #[test]
    fn test_stopwords_removed() {
        let tokenizer = Tokenizer::english();
        assert_eq!(
            tokenizer.tokenize("The best venue in the city"),
            vec!["best", "venue", "city"]
        );
    }

    #[test]
    fn test_custom_stopwords_case_insensitive() {
        let tokenizer = Tokenizer::with_stopwords(["Guests"]);
        assert_eq!(tokenizer.tokenize("100 guests"), vec!["100"]);
    }

    #[test]
    fn test_unicode_words() {
        let tokenizer = Tokenizer::english();
        assert_eq!(tokenizer.tokenize("Café Déjà"), vec!["café", "déjà"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(Tokenizer::english().tokenize("").is_empty());
        assert!(Tokenizer::english().tokenize("the and of").is_empty());
    }
}
