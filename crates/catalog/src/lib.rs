//! # Catalog Crate
//!
//! This crate owns the static tool catalog the recommendation engine
//! matches against.
//!
//! ## Main Components
//!
//! - **types**: `ToolCatalogEntry`, `ToolCatalog`, `ToolId`
//! - **parser**: Parse catalog JSON into entries
//! - **index**: Validate entries and build the indexed catalog
//! - **error**: `CatalogError`, fatal at startup
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::ToolCatalog;
//! use std::path::Path;
//!
//! let catalog = ToolCatalog::load_from_file(Path::new("catalog.json"))?;
//! let entry = catalog.get("calendly").unwrap();
//! println!("{} has {} keywords", entry.id, entry.keywords.len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{MAX_SUGGESTIONS, POPULAR_CATEGORY, ToolCatalog, ToolCatalogEntry, ToolId};
