//! Keyword Source - table-driven need matching
//!
//! Generates candidates by testing every catalog entry against the
//! lowercased need.
//!
//! ## Algorithm
//! 1. No need → no candidates
//! 2. For each entry, in catalog order:
//!    - if any of its keywords is a substring of the need, emit a candidate
//! 3. Return candidates in catalog order (no scoring, no dedup)
//!
//! Matching is plain containment, not word-boundary matching, so
//! "scheduler" matches "schedule" and a need touching several categories
//! collects candidates from all of them.

use crate::types::{Candidate, CandidateSource, RequestContext};
use catalog::{ToolCatalog, ToolCatalogEntry};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Catalogs at least this large are matched on the rayon pool
const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Keyword source turns a need into catalog-ordered candidates
#[derive(Clone)]
pub struct KeywordSource {
    /// Shared reference to the catalog (read-only, so no Mutex needed)
    catalog: Arc<ToolCatalog>,

    /// Minimum catalog size before matching fans out to rayon
    parallel_threshold: usize,
}

impl KeywordSource {
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self {
            catalog,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Configure when matching runs in parallel (default: 512 entries)
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Generate keyword candidates for a request
    #[instrument(skip(self, context), fields(has_need = context.has_signal()))]
    pub fn get_candidates(&self, context: &RequestContext) -> Vec<Candidate> {
        let Some(need) = context.need.as_deref() else {
            debug!("No need given, skipping keyword matching");
            return Vec::new();
        };

        let entries = self.catalog.entries();
        let candidates: Vec<Candidate> = if entries.len() >= self.parallel_threshold {
            // collect() on an indexed parallel iterator keeps catalog order
            entries
                .par_iter()
                .enumerate()
                .filter_map(|(position, entry)| match_entry(entry, position, need))
                .collect()
        } else {
            entries
                .iter()
                .enumerate()
                .filter_map(|(position, entry)| match_entry(entry, position, need))
                .collect()
        };

        debug!(
            "Matched {} of {} catalog entries",
            candidates.len(),
            entries.len()
        );
        candidates
    }
}

fn match_entry(entry: &ToolCatalogEntry, position: usize, need: &str) -> Option<Candidate> {
    let keyword = entry.matched_keyword(need)?;
    Some(
        Candidate::from_entry(entry, CandidateSource::Keyword, position)
            .with_matched_keyword(keyword),
    )
}
