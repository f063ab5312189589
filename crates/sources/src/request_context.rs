//! Build a RequestContext from a RecommendationRequest
//!
//! The context is built once per request so sources and filters never
//! re-normalize the need.

use crate::request::RecommendationRequest;
use crate::types::RequestContext;
use tracing::debug;

/// Normalize a request for candidate generation.
///
/// - `need` is lowercased; absent or empty means no signal
/// - auxiliary fields are carried through untouched
pub fn build_request_context(request: &RecommendationRequest) -> RequestContext {
    if request.budget.is_some() || request.audience.is_some() || request.priority.is_some() {
        debug!(
            budget = ?request.budget,
            audience = ?request.audience,
            priority = ?request.priority,
            "Auxiliary hints present (not used for matching)"
        );
    }

    let need = request.need.as_deref().unwrap_or_default();

    RequestContext {
        budget: request.budget.clone(),
        audience: request.audience.clone(),
        priority: request.priority.clone(),
        ..RequestContext::for_need(need)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need_is_lowercased() {
        let context =
            build_request_context(&RecommendationRequest::with_need("Need an EMAIL Tool"));
        assert_eq!(context.need.as_deref(), Some("need an email tool"));
        assert!(context.has_signal());
    }

    #[test]
    fn test_empty_or_missing_need_has_no_signal() {
        let context = build_request_context(&RecommendationRequest::with_need(""));
        assert!(!context.has_signal());

        let context = build_request_context(&RecommendationRequest::default());
        assert!(!context.has_signal());
    }

    #[test]
    fn test_auxiliary_fields_carried() {
        let request = RecommendationRequest {
            need: None,
            budget: Some("free".to_string()),
            audience: Some("students".to_string()),
            priority: None,
        };
        let context = build_request_context(&request);

        assert_eq!(context.budget.as_deref(), Some("free"));
        assert_eq!(context.audience.as_deref(), Some("students"));
        assert!(context.priority.is_none());
    }

    #[test]
    fn test_matches_for_need() {
        let built = build_request_context(&RecommendationRequest::with_need("Schedule"));
        assert_eq!(built, RequestContext::for_need("Schedule"));
    }
}
