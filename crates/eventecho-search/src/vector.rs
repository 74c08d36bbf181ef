//! Sparse weighted vectors.

use std::cmp::Ordering;

/// A sparse vector of `(dimension, weight)` pairs sorted by dimension.
///
/// Vendor documents touch only a handful of vocabulary terms, so rows of
/// the term-weight matrix are stored sparsely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build a vector from unordered entries, dropping zero weights.
    ///
    /// Duplicate dimensions are summed.
    #[must_use]
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(dim, _)| *dim);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (dim, weight) in entries {
            match merged.last_mut() {
                Some((last, total)) if *last == dim => *total += weight,
                _ => merged.push((dim, weight)),
            }
        }
        merged.retain(|(_, weight)| weight.abs() > 0.0);
        Self { entries: merged }
    }

    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at a dimension (zero when absent).
    #[must_use]
    pub fn get(&self, dim: usize) -> f64 {
        self.entries
            .binary_search_by_key(&dim, |(d, _)| *d)
            .map(|idx| self.entries[idx].1)
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit L2 length. The zero vector stays zero.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }

    /// Dot product by merging the two sorted entry lists.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_dim, a_weight) = self.entries[i];
            let (b_dim, b_weight) = other.entries[j];
            match a_dim.cmp(&b_dim) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Cosine similarity. Zero when either side is the zero vector.
    #[must_use]
    pub fn cosine(&self, other: &Self) -> f64 {
        let denom = self.norm() * other.norm();
        if denom <= 0.0 {
            0.0
        } else {
            self.dot(other) / denom
        }
    }
}
