//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use sources::{Candidate, RequestContext};

/// Core trait for filtering and reordering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared by concurrent requests
/// - Filters take ownership of the Vec<Candidate> and return a new Vec
/// - Filters are pure and infallible; a request never fails inside the pipeline
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `context` - The normalized request
    fn apply(&self, candidates: Vec<Candidate>, context: &RequestContext) -> Vec<Candidate>;
}
