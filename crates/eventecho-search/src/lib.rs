//! Vendor similarity search for eventecho.
//!
//! Builds a TF-IDF index over the catalog's vendor documents once at
//! startup and answers free-text queries by cosine similarity. The index
//! is immutable after construction, so it can be shared between threads
//! without locking.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod index;
pub mod search;
pub mod stopwords;
pub mod tokenize;
pub mod vector;
pub mod vocabulary;

pub use index::{IdfWeighting, IndexOptions, TermWeightMatrix, VendorIndex, DEFAULT_MAX_VOCAB_SIZE};
pub use search::ScoredMatch;
pub use tokenize::Tokenizer;
pub use vector::SparseVector;
pub use vocabulary::Vocabulary;
