//! Error types for building the planner context.

use thiserror::Error;

/// Errors raised while assembling a [`Planner`](crate::Planner).
///
/// Only these are fatal; failures while serving requests degrade to
/// fallbacks or user-visible messages instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The vendor catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] eventecho_core::CatalogError),

    /// The HTTP client for the generation service could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for planner construction results.
pub type Result<T> = std::result::Result<T, Error>;
