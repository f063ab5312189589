//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod catalog_membership;
pub mod deduplicate;
pub mod weight_ordering;

// Re-export for convenience
pub use catalog_membership::CatalogMembershipFilter;
pub use deduplicate::DeduplicateFilter;
pub use weight_ordering::WeightOrderingFilter;
