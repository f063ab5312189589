//! Pipeline for shaping keyword candidates into suggestions.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. CatalogMembershipFilter drops ids the catalog does not know
//! 2. DeduplicateFilter keeps the first occurrence of every id
//! 3. WeightOrderingFilter (optional) sorts by descending weight
//!
//! Fallback and truncation are applied afterwards by the engine.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::FilterPipeline;
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(CatalogMembershipFilter::new(catalog.clone()))
//!     .add_filter(DeduplicateFilter);
//!
//! let filtered = pipeline.apply(candidates, &context);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
