//! # Recommendation Engine
//!
//! This module coordinates the recommendation pipeline:
//! 1. Normalize the request into a context
//! 2. Generate keyword candidates from the catalog
//! 3. Apply filters (catalog membership, dedup, optional weight ordering)
//! 4. Substitute the fallback list when nothing survived
//! 5. Truncate to the configured maximum
//!
//! The engine holds no mutable state; clones share the same catalog and
//! pipeline and may be used from any number of threads at once.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use catalog::{ToolCatalog, ToolId};
use pipeline::FilterPipeline;
use pipeline::filters::{CatalogMembershipFilter, DeduplicateFilter, WeightOrderingFilter};
use sources::{
    Candidate, CandidateSource, FallbackSource, InputError, KeywordSource, RecommendationRequest,
    RequestContext, build_request_context,
};

use crate::config::{EngineConfig, SuggestionOrder};

/// Final result returned to the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub suggestions: Vec<ToolId>,
}

/// Main engine that coordinates sources and filters
#[derive(Clone)]
pub struct RecommendationEngine {
    catalog: Arc<ToolCatalog>,
    keyword_source: KeywordSource,
    fallback_source: FallbackSource,
    filter_pipeline: Arc<FilterPipeline>,
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Engine with the default configuration
    pub fn new(catalog: Arc<ToolCatalog>) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: Arc<ToolCatalog>, config: EngineConfig) -> Self {
        let keyword_source = KeywordSource::new(catalog.clone());
        let fallback_source = FallbackSource::new(catalog.clone());

        let mut filter_pipeline = FilterPipeline::new()
            .add_filter(CatalogMembershipFilter::new(catalog.clone()))
            .add_filter(DeduplicateFilter);
        if config.order() == SuggestionOrder::Weighted {
            filter_pipeline = filter_pipeline.add_filter(WeightOrderingFilter);
        }

        debug!(
            "Engine ready: {} tools, filters {:?}, {:?}",
            catalog.len(),
            filter_pipeline.filter_names(),
            config
        );

        Self {
            catalog,
            keyword_source,
            fallback_source,
            filter_pipeline: Arc::new(filter_pipeline),
            config,
        }
    }

    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Main entry point: suggestions for a request.
    ///
    /// Never fails; a missing or empty need yields the fallback list.
    pub fn recommend(&self, request: &RecommendationRequest) -> RecommendationResult {
        let suggestions = self
            .explain(request)
            .into_iter()
            .map(|candidate| candidate.tool_id)
            .collect();

        RecommendationResult { suggestions }
    }

    /// Parse a raw JSON body and recommend
    pub fn recommend_json(&self, body: &str) -> Result<RecommendationResult, InputError> {
        let request = RecommendationRequest::from_json(body)?;
        Ok(self.recommend(&request))
    }

    /// Recommend from an already-parsed JSON value
    pub fn recommend_value(&self, value: Value) -> Result<RecommendationResult, InputError> {
        let request = RecommendationRequest::from_value(value)?;
        Ok(self.recommend(&request))
    }

    /// Like `recommend`, but keeps each suggestion's origin and matched keyword
    pub fn explain(&self, request: &RecommendationRequest) -> Vec<Candidate> {
        let start_time = Instant::now();

        let context = build_request_context(request);
        let ranked = self.rank(&context);

        info!(
            "Recommended {} tools (fallback: {}) in {:.2?}",
            ranked.len(),
            ranked.first().is_some_and(|c| c.source == CandidateSource::Fallback),
            start_time.elapsed()
        );
        ranked
    }

    fn rank(&self, context: &RequestContext) -> Vec<Candidate> {
        let candidates = self.keyword_source.get_candidates(context);
        let mut ranked = self.filter_pipeline.apply(candidates, context);

        // Fallback replaces an empty match set, it is never blended in
        if ranked.is_empty() {
            debug!("No keyword matches, using fallback list");
            ranked = self.fallback_source.get_candidates();
        }

        ranked.truncate(self.config.max_suggestions());
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{POPULAR_CATEGORY, ToolCatalogEntry};

    // ============================================================================
    // Test Fixtures
    // ============================================================================

    /// Ten tools that all match "work", plus two popular ones
    fn build_wide_catalog() -> Arc<ToolCatalog> {
        let mut entries: Vec<ToolCatalogEntry> = (0..10)
            .map(|i| ToolCatalogEntry::new(format!("tool-{}", i), ["work"]).with_weight(i as f32))
            .collect();
        entries.push(ToolCatalogEntry::new("notes", ["wiki"]).with_category(POPULAR_CATEGORY));
        entries.push(ToolCatalogEntry::new("chat", ["chat"]).with_category(POPULAR_CATEGORY));
        Arc::new(ToolCatalog::from_entries(entries).unwrap())
    }

    fn ids(result: &RecommendationResult) -> Vec<&str> {
        result.suggestions.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_truncates_to_first_six_in_catalog_order() {
        let engine = RecommendationEngine::new(build_wide_catalog());
        let result = engine.recommend(&RecommendationRequest::with_need("teamwork"));

        assert_eq!(
            ids(&result),
            vec!["tool-0", "tool-1", "tool-2", "tool-3", "tool-4", "tool-5"]
        );
    }

    #[test]
    fn test_weighted_order_truncates_heaviest() {
        let config = EngineConfig::default().with_order(SuggestionOrder::Weighted);
        let engine = RecommendationEngine::with_config(build_wide_catalog(), config);
        let result = engine.recommend(&RecommendationRequest::with_need("work"));

        assert_eq!(
            ids(&result),
            vec!["tool-9", "tool-8", "tool-7", "tool-6", "tool-5", "tool-4"]
        );
    }

    #[test]
    fn test_configured_limit() {
        let config = EngineConfig::default().with_max_suggestions(2);
        let engine = RecommendationEngine::with_config(build_wide_catalog(), config);

        let result = engine.recommend(&RecommendationRequest::with_need("work"));
        assert_eq!(ids(&result), vec!["tool-0", "tool-1"]);

        let result = engine.recommend(&RecommendationRequest::default());
        assert_eq!(ids(&result), vec!["notes", "chat"]);
    }

    #[test]
    fn test_fallback_not_blended() {
        let engine = RecommendationEngine::new(build_wide_catalog());

        let result = engine.recommend(&RecommendationRequest::with_need("wiki"));
        assert_eq!(ids(&result), vec!["notes"]);

        let result = engine.recommend(&RecommendationRequest::with_need("nothing relevant"));
        assert_eq!(ids(&result), vec!["notes", "chat"]);
    }

    #[test]
    fn test_explain_reports_origin() {
        let engine = RecommendationEngine::new(build_wide_catalog());

        let explained = engine.explain(&RecommendationRequest::with_need("wiki"));
        assert_eq!(explained[0].source, CandidateSource::Keyword);
        assert_eq!(explained[0].matched_keyword.as_deref(), Some("wiki"));

        let explained = engine.explain(&RecommendationRequest::default());
        assert!(explained.iter().all(|c| c.source == CandidateSource::Fallback));
    }

    #[test]
    fn test_recommend_json_rejects_bad_need() {
        let engine = RecommendationEngine::new(build_wide_catalog());

        let err = engine.recommend_json(r#"{"need": 5}"#).unwrap_err();
        assert!(matches!(err, InputError::InvalidField { field: "need", .. }));

        let result = engine.recommend_json(r#"{"need": "work", "budget": "low"}"#).unwrap();
        assert_eq!(result.suggestions.len(), 6);
    }

    #[test]
    fn test_result_serializes_as_suggestions_object() {
        let result = RecommendationResult {
            suggestions: vec!["notion".to_string(), "slack".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "suggestions": ["notion", "slack"] })
        );
    }
}
