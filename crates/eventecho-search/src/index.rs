//! TF-IDF index construction.
//!
//! The index is a one-shot batch computation: tokenize every document,
//! fix a vocabulary, weight term counts by inverse document frequency, and
//! normalize each row to unit length so cosine similarity reduces to a
//! dot product. There is no incremental update path.

use std::collections::HashMap;

use crate::tokenize::Tokenizer;
use crate::vector::SparseVector;
use crate::vocabulary::Vocabulary;

/// Default cap on the number of indexed tokens.
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 5000;

/// How document frequency is turned into an IDF weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdfWeighting {
    /// `ln((1 + n) / (1 + df)) + 1`. Always positive, so every known term
    /// contributes to similarity.
    #[default]
    Smooth,
    /// `ln(n / (1 + df))`, clamped at zero. Terms present in most documents
    /// carry no weight at all.
    Classic,
}

impl IdfWeighting {
    #[must_use]
    pub fn weight(self, documents: usize, document_frequency: usize) -> f64 {
        let n = documents as f64;
        let df = document_frequency as f64;
        match self {
            Self::Smooth => ((1.0 + n) / (1.0 + df)).ln() + 1.0,
            Self::Classic => {
                if documents == 0 {
                    0.0
                } else {
                    (n / (1.0 + df)).ln().max(0.0)
                }
            }
        }
    }

    /// Parse a configuration value (`smooth` or `classic`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "smooth" => Some(Self::Smooth),
            "classic" => Some(Self::Classic),
            _ => None,
        }
    }
}

/// Knobs for building a [`VendorIndex`].
#[derive(Debug, Clone)]
pub struct IndexOptions {
    pub max_vocab_size: usize,
    pub tokenizer: Tokenizer,
    pub idf: IdfWeighting,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_vocab_size: DEFAULT_MAX_VOCAB_SIZE,
            tokenizer: Tokenizer::english(),
            idf: IdfWeighting::default(),
        }
    }
}

impl IndexOptions {
    #[must_use]
    pub fn with_max_vocab_size(mut self, max_vocab_size: usize) -> Self {
        self.max_vocab_size = max_vocab_size;
        self
    }

    #[must_use]
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokenizer = Tokenizer::with_stopwords(stopwords);
        self
    }

    #[must_use]
    pub fn with_idf(mut self, idf: IdfWeighting) -> Self {
        self.idf = idf;
        self
    }
}

/// One unit-length TF-IDF row per document.
///
/// Row count equals the number of indexed documents and every dimension
/// is below the vocabulary size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeightMatrix {
    rows: Vec<SparseVector>,
    columns: usize,
}

impl TermWeightMatrix {
    #[must_use]
    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<&SparseVector> {
        self.rows.get(idx)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns
    }
}

/// The frozen search index over the vendor catalog.
#[derive(Debug, Clone)]
pub struct VendorIndex {
    pub(crate) tokenizer: Tokenizer,
    pub(crate) vocabulary: Vocabulary,
    pub(crate) idf: Vec<f64>,
    pub(crate) matrix: TermWeightMatrix,
}

impl VendorIndex {
    /// Build the index from vendor documents in catalog order.
    #[must_use]
    pub fn build<S: AsRef<str>>(documents: &[S], options: &IndexOptions) -> Self {
        let tokenizer = options.tokenizer.clone();
        let corpus: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenizer.tokenize(doc.as_ref()))
            .collect();

        let vocabulary = Vocabulary::build(&corpus, options.max_vocab_size);
        let idf: Vec<f64> = (0..vocabulary.len())
            .map(|dim| {
                options
                    .idf
                    .weight(corpus.len(), vocabulary.document_frequency(dim))
            })
            .collect();

        let rows = corpus
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();
        let matrix = TermWeightMatrix {
            rows,
            columns: vocabulary.len(),
        };

        log::debug!(
            "Built vendor index: {} documents, {} terms",
            matrix.row_count(),
            matrix.column_count()
        );

        Self {
            tokenizer,
            vocabulary,
            idf,
            matrix,
        }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn matrix(&self) -> &TermWeightMatrix {
        &self.matrix
    }

    /// IDF weight of the token at `dim`.
    #[must_use]
    pub fn idf(&self, dim: usize) -> Option<f64> {
        self.idf.get(dim).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.row_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.row_count() == 0
    }

    /// Project arbitrary text into the index space.
    ///
    /// Tokens outside the vocabulary are dropped.
    #[must_use]
    pub fn vectorize(&self, text: &str) -> SparseVector {
        weigh(&self.tokenizer.tokenize(text), &self.vocabulary, &self.idf)
    }
}

/// Raw term counts times IDF, L2-normalized.
fn weigh(tokens: &[String], vocabulary: &Vocabulary, idf: &[f64]) -> SparseVector {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for dim in tokens.iter().filter_map(|t| vocabulary.dimension(t)) {
        *counts.entry(dim).or_insert(0) += 1;
    }

    let entries = counts
        .into_iter()
        .map(|(dim, count)| (dim, count as f64 * idf[dim]))
        .collect();
    SparseVector::from_entries(entries).normalized()
}
