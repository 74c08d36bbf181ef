//! Vocabulary selection.

use std::collections::{HashMap, HashSet};

/// Corpus statistics for one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermStats {
    /// Position of the token's first appearance across the corpus.
    pub first_seen: usize,
    /// Occurrences across all documents.
    pub total: usize,
    /// Number of documents containing the token.
    pub document_frequency: usize,
}

/// The fixed set of indexed tokens, each mapped to a dense dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    dims: HashMap<String, usize>,
    document_frequency: Vec<usize>,
}

impl Vocabulary {
    /// Select up to `max_size` tokens from a tokenized corpus.
    ///
    /// Tokens are ranked by total corpus frequency, ties going to the
    /// token seen first. Retained tokens get dimensions in first-seen
    /// order, so the result depends only on the corpus and `max_size`.
    #[must_use]
    pub fn build(corpus: &[Vec<String>], max_size: usize) -> Self {
        let (order, stats) = corpus_stats(corpus);

        let mut ranked: Vec<&String> = order.iter().collect();
        ranked.sort_by(|a, b| {
            let (sa, sb) = (&stats[*a], &stats[*b]);
            sb.total
                .cmp(&sa.total)
                .then(sa.first_seen.cmp(&sb.first_seen))
        });
        ranked.truncate(max_size);
        ranked.sort_by_key(|term| stats[*term].first_seen);

        let terms: Vec<String> = ranked.into_iter().cloned().collect();
        let dims = terms
            .iter()
            .enumerate()
            .map(|(dim, term)| (term.clone(), dim))
            .collect();
        let document_frequency = terms
            .iter()
            .map(|term| stats[term].document_frequency)
            .collect();

        Self {
            terms,
            dims,
            document_frequency,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Dimension of a token, if it made it into the vocabulary.
    #[must_use]
    pub fn dimension(&self, token: &str) -> Option<usize> {
        self.dims.get(token).copied()
    }

    /// Token at a dimension.
    #[must_use]
    pub fn term(&self, dim: usize) -> Option<&str> {
        self.terms.get(dim).map(String::as_str)
    }

    /// Tokens in dimension order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of corpus documents containing the token at `dim`.
    #[must_use]
    pub fn document_frequency(&self, dim: usize) -> usize {
        self.document_frequency.get(dim).copied().unwrap_or(0)
    }
}

/// Collect tokens in first-seen order along with their statistics.
fn corpus_stats(corpus: &[Vec<String>]) -> (Vec<String>, HashMap<String, TermStats>) {
    let mut order = Vec::new();
    let mut stats: HashMap<String, TermStats> = HashMap::new();

    for tokens in corpus {
        let mut seen_here: HashSet<&str> = HashSet::new();
        for token in tokens {
            let entry = stats.entry(token.clone()).or_insert_with(|| {
                order.push(token.clone());
                TermStats {
                    first_seen: order.len() - 1,
                    total: 0,
                    document_frequency: 0,
                }
            });
            entry.total += 1;
            if seen_here.insert(token.as_str()) {
                entry.document_frequency += 1;
            }
        }
    }

    (order, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<Vec<String>> {
        docs.iter()
            .map(|d| d.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_dimensions_follow_first_occurrence() {
        let vocab = Vocabulary::build(&corpus(&["cake venue", "venue dj"]), 10);
        assert_eq!(vocab.terms(), &["cake", "venue", "dj"]);
        assert_eq!(vocab.dimension("venue"), Some(1));
        assert_eq!(vocab.dimension("balloons"), None);
        assert_eq!(vocab.term(2), Some("dj"));
    }

    #[test]
    fn test_document_frequency_counts_documents_not_occurrences() {
        let vocab = Vocabulary::build(&corpus(&["venue venue venue", "venue dj"]), 10);
        let venue = vocab.dimension("venue").unwrap();
        assert_eq!(vocab.document_frequency(venue), 2);
        let dj = vocab.dimension("dj").unwrap();
        assert_eq!(vocab.document_frequency(dj), 1);
    }

    #[test]
    fn test_cap_keeps_most_frequent() {
        let vocab = Vocabulary::build(&corpus(&["cake venue dj", "venue dj", "dj"]), 2);
        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.terms(), &["venue", "dj"]);
        assert_eq!(vocab.dimension("cake"), None);
    }

    #[test]
    fn test_cap_ties_prefer_first_seen() {
        let vocab = Vocabulary::build(&corpus(&["zeta alpha", "mid"]), 2);
        assert_eq!(vocab.terms(), &["zeta", "alpha"]);
    }

    #[test]
    fn test_zero_cap() {
        let vocab = Vocabulary::build(&corpus(&["cake venue"]), 0);
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = Vocabulary::build(&[], 5000);
        assert!(vocab.is_empty());
        assert_eq!(vocab.document_frequency(0), 0);
    }
}
