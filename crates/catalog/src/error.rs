//! Error types for the catalog crate.
//!
//! Every variant is a startup failure: a catalog that fails to load or
//! validate means the engine refuses to serve at all.

use thiserror::Error;

/// Errors that can occur while loading or validating a tool catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("I/O error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog is not valid JSON or not shaped like a catalog
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no tools")]
    Empty,

    #[error("Tool at position {position} has an empty id")]
    EmptyId { position: usize },

    #[error("Duplicate tool id: {id}")]
    DuplicateId { id: String },

    #[error("Tool {id} has no keywords")]
    NoKeywords { id: String },

    #[error("Tool {id} has an empty keyword")]
    EmptyKeyword { id: String },

    /// Keywords are matched against a lowercased need, so uppercase ones could never match
    #[error("Keyword {keyword:?} of tool {id} is not lowercase")]
    KeywordNotLowercase { id: String, keyword: String },

    #[error("Tool {id} has a non-finite weight: {weight}")]
    InvalidWeight { id: String, weight: f32 },

    /// No entry is tagged popular, so there would be no fallback list
    #[error("Catalog has no tools in category \"{category}\" to use as fallback")]
    NoFallback { category: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
