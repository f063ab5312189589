//! Filter to guarantee every suggestion exists in the catalog.
//!
//! Sources only emit ids they read from the catalog, so normally nothing
//! is dropped here.

use crate::traits::Filter;
use catalog::ToolCatalog;
use sources::{Candidate, RequestContext};
use std::sync::Arc;
use tracing::warn;

/// Removes candidates whose id is not in the catalog.
pub struct CatalogMembershipFilter {
    catalog: Arc<ToolCatalog>,
}

impl CatalogMembershipFilter {
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self { catalog }
    }
}

impl Filter for CatalogMembershipFilter {
    fn name(&self) -> &str {
        "CatalogMembershipFilter"
    }

    fn apply(&self, candidates: Vec<Candidate>, _context: &RequestContext) -> Vec<Candidate> {
        candidates
            .into_iter()
            .filter(|candidate| {
                let known = self.catalog.contains(&candidate.tool_id);
                if !known {
                    warn!("Dropping candidate not in catalog: {}", candidate.tool_id);
                }
                known
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{POPULAR_CATEGORY, ToolCatalogEntry};
    use sources::CandidateSource;

    #[test]
    fn test_unknown_ids_dropped() {
        let catalog = Arc::new(
            ToolCatalog::from_entries(vec![
                ToolCatalogEntry::new("trello", ["task"]),
                ToolCatalogEntry::new("notion", ["wiki"]).with_category(POPULAR_CATEGORY),
            ])
            .unwrap(),
        );

        let candidates = vec![
            Candidate::new("trello", CandidateSource::Keyword, 0),
            Candidate::new("ghost", CandidateSource::Keyword, 7),
            Candidate::new("notion", CandidateSource::Keyword, 1),
        ];

        let filtered =
            CatalogMembershipFilter::new(catalog).apply(candidates, &RequestContext::default());
        let ids: Vec<&str> = filtered.iter().map(|c| c.tool_id.as_str()).collect();

        assert_eq!(ids, vec!["trello", "notion"]);
    }
}
