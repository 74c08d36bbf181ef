//! Ranked similarity queries against a [`VendorIndex`].

use std::cmp::Ordering;

use eventecho_core::VendorId;

use crate::index::VendorIndex;

/// A catalog row and its similarity to the query, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    pub id: VendorId,
    pub score: f64,
}

impl VendorIndex {
    /// Cosine similarity of the query against every row, in catalog order.
    ///
    /// A query with no known tokens scores zero everywhere.
    #[must_use]
    pub fn scores(&self, text: &str) -> Vec<f64> {
        let query = self.vectorize(text);
        self.matrix
            .rows()
            .iter()
            // Both sides are unit length (or zero), so the dot product is the cosine.
            .map(|row| query.dot(row).clamp(0.0, 1.0))
            .collect()
    }

    /// The `top_n` rows most similar to `text`, best first.
    ///
    /// Equal scores keep catalog order. Asking for more rows than exist
    /// returns them all; an empty index returns nothing.
    #[must_use]
    pub fn query(&self, text: &str, top_n: usize) -> Vec<ScoredMatch> {
        let mut ranked: Vec<ScoredMatch> = self
            .scores(text)
            .into_iter()
            .enumerate()
            .map(|(row, score)| ScoredMatch {
                id: VendorId::new(row),
                score,
            })
            .collect();

        // Stable sort: ties stay in catalog order.
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_n);

        log::debug!("Query {:?} matched {} vendors", text, ranked.len());
        ranked
    }
}
