//! Filter to drop repeated tool ids.
//!
//! Keeps the first occurrence of every id and drops later ones silently,
//! so the surviving order is the order candidates were generated in.

use crate::traits::Filter;
use sources::{Candidate, RequestContext};
use std::collections::HashSet;

/// Removes duplicate candidates, first occurrence wins.
///
/// ## Algorithm
/// Single pass with a HashSet of seen ids for O(1) lookups.
pub struct DeduplicateFilter;

impl Filter for DeduplicateFilter {
    fn name(&self) -> &str {
        "DeduplicateFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &RequestContext) -> Vec<Candidate> {
        let mut seen = HashSet::with_capacity(candidates.len());
        candidates
            .into_iter()
            .filter(|candidate| seen.insert(candidate.tool_id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sources::CandidateSource;

    #[test]
    fn test_first_occurrence_wins() {
        let candidates = vec![
            Candidate::new("calendly", CandidateSource::Keyword, 3)
                .with_matched_keyword("schedule"),
            Candidate::new("buffer", CandidateSource::Keyword, 6),
            Candidate::new("calendly", CandidateSource::Keyword, 3).with_matched_keyword("meeting"),
            Candidate::new("docusign", CandidateSource::Keyword, 9),
            Candidate::new("buffer", CandidateSource::Keyword, 6),
        ];

        let filtered = DeduplicateFilter.apply(candidates, &RequestContext::default());
        let ids: Vec<&str> = filtered.iter().map(|c| c.tool_id.as_str()).collect();

        assert_eq!(ids, vec!["calendly", "buffer", "docusign"]);
        assert_eq!(filtered[0].matched_keyword.as_deref(), Some("schedule"));
    }

    #[test]
    fn test_empty_input() {
        assert!(DeduplicateFilter.apply(vec![], &RequestContext::default()).is_empty());
    }
}
