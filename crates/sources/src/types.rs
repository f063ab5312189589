//! Shared types for candidate generation.

use catalog::{ToolCatalogEntry, ToolId};

/// Where a candidate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    /// A catalog keyword occurred in the need
    Keyword,
    /// Part of the fixed fallback list
    Fallback,
}

/// A suggestion before deduplication and truncation
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub tool_id: ToolId,
    pub source: CandidateSource,
    /// Position of the tool in catalog evaluation order
    pub position: usize,
    pub weight: f32,
    /// The keyword that triggered the match (keyword candidates only)
    pub matched_keyword: Option<String>,
}

impl Candidate {
    pub fn new(tool_id: impl Into<ToolId>, source: CandidateSource, position: usize) -> Self {
        Self {
            tool_id: tool_id.into(),
            source,
            position,
            weight: 0.0,
            matched_keyword: None,
        }
    }

    /// Candidate for a catalog entry at `position`
    pub fn from_entry(entry: &ToolCatalogEntry, source: CandidateSource, position: usize) -> Self {
        Self::new(entry.id.clone(), source, position).with_weight(entry.weight)
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_matched_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.matched_keyword = Some(keyword.into());
        self
    }
}

/// The normalized request seen by sources and filters.
///
/// Built once per request by `request_context::build_request_context`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    /// Lowercased need; `None` means no signal
    pub need: Option<String>,
    // Accepted for forward compatibility, not used for matching
    pub budget: Option<String>,
    pub audience: Option<String>,
    pub priority: Option<String>,
}

impl RequestContext {
    /// Context for a bare need string; empty means no signal
    pub fn for_need(need: &str) -> Self {
        Self {
            need: (!need.is_empty()).then(|| need.to_lowercase()),
            ..Self::default()
        }
    }

    pub fn has_signal(&self) -> bool {
        self.need.is_some()
    }
}
