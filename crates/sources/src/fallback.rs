//! Fallback Source - the fixed list used when nothing matches
//!
//! The list is derived from catalog entries tagged "popular" when the
//! catalog is built, so it is the same for every request. It never
//! depends on the need or on the auxiliary hints.

use crate::types::{Candidate, CandidateSource};
use catalog::ToolCatalog;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct FallbackSource {
    catalog: Arc<ToolCatalog>,
}

impl FallbackSource {
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self { catalog }
    }

    /// Candidates for the fallback list, in fallback order
    pub fn get_candidates(&self) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = self
            .catalog
            .fallback()
            .iter()
            .filter_map(|id| {
                let position = self.catalog.position(id)?;
                let entry = &self.catalog.entries()[position];
                Some(Candidate::from_entry(entry, CandidateSource::Fallback, position))
            })
            .collect();

        debug!("Generated {} fallback candidates", candidates.len());
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{POPULAR_CATEGORY, ToolCatalogEntry};

    #[test]
    fn test_fallback_candidates_follow_catalog_tags() {
        let catalog = Arc::new(
            ToolCatalog::from_entries(vec![
                ToolCatalogEntry::new("mailer", ["email"]),
                ToolCatalogEntry::new("notes", ["wiki"]).with_category(POPULAR_CATEGORY),
                ToolCatalogEntry::new("chat", ["chat"]).with_category(POPULAR_CATEGORY),
            ])
            .unwrap(),
        );

        let candidates = FallbackSource::new(catalog).get_candidates();
        let ids: Vec<&str> = candidates.iter().map(|c| c.tool_id.as_str()).collect();

        assert_eq!(ids, vec!["notes", "chat"]);
        assert!(candidates.iter().all(|c| c.source == CandidateSource::Fallback));
        assert_eq!(candidates[0].position, 1);
    }
}
