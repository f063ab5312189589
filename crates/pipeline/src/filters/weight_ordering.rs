//! Reorders candidates by catalog weight.
//!
//! Only installed when weighted ordering is configured; the default
//! engine keeps plain catalog order.

use crate::traits::Filter;
use sources::{Candidate, RequestContext};
use std::cmp::Ordering;

/// Sorts candidates by descending weight.
///
/// ## Algorithm
/// Stable sort on weight, then on catalog position, so equal weights
/// keep catalog evaluation order regardless of the input order.
pub struct WeightOrderingFilter;

impl Filter for WeightOrderingFilter {
    fn name(&self) -> &str {
        "WeightOrderingFilter"
    }

    fn apply(&self, mut candidates: Vec<Candidate>, _context: &RequestContext) -> Vec<Candidate> {
        candidates.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.position.cmp(&b.position))
        });
        candidates
    }
}
