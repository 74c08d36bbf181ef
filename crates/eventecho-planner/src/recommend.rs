//! Vendor recommendations: the search index joined back to the catalog.

use std::sync::Arc;

use serde::Serialize;

use eventecho_core::{Catalog, VendorId, VendorRecord};
use eventecho_search::{IndexOptions, VendorIndex};

/// Shown in place of a vendor list when nothing could be recommended.
pub const NO_VENDORS: &str = "No matching vendors found in the catalog.";

/// A recommended vendor and how well it matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: VendorId,
    pub vendor: VendorRecord,
    pub score: f64,
}

/// Read-only recommender over the catalog and its index.
///
/// Cloning is cheap; clones share the same catalog and index.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    index: Arc<VendorIndex>,
}

impl Recommender {
    /// Index the catalog. This is the only time the index is built.
    #[must_use]
    pub fn build(catalog: Catalog, options: &IndexOptions) -> Self {
        let index = VendorIndex::build(&catalog.documents(), options);
        log::info!(
            "Indexed {} vendors over {} terms",
            index.len(),
            index.vocabulary().len()
        );
        Self {
            catalog: Arc::new(catalog),
            index: Arc::new(index),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn index(&self) -> &VendorIndex {
        &self.index
    }

    /// The `top_n` vendors most similar to `query`, best first.
    #[must_use]
    pub fn recommend(&self, query: &str, top_n: usize) -> Vec<Recommendation> {
        self.index
            .query(query, top_n)
            .into_iter()
            .filter_map(|m| {
                self.catalog.get(m.id).map(|vendor| Recommendation {
                    id: m.id,
                    vendor: vendor.clone(),
                    score: m.score,
                })
            })
            .collect()
    }
}

/// Render recommendations as one `• name (category) - location` line each.
#[must_use]
pub fn vendor_list(recommendations: &[Recommendation]) -> String {
    if recommendations.is_empty() {
        return NO_VENDORS.to_string();
    }
    recommendations
        .iter()
        .map(|r| r.vendor.summary_line())
        .collect::<Vec<_>>()
        .join("\n")
}
