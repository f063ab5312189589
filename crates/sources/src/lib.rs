//! # Sources Crate
//!
//! This crate turns a recommendation request into candidates.
//!
//! ## Components
//!
//! ### Request
//! `RecommendationRequest` is the boundary type; `InputError` is the only
//! per-request failure. `build_request_context` normalizes a request into
//! the `RequestContext` every later stage reads.
//!
//! ### Keyword Source
//! Table-driven matching: each catalog entry whose keywords occur in the
//! lowercased need becomes a candidate, in catalog order.
//!
//! ### Fallback Source
//! The fixed list of popular tools, used only when nothing matched.
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{KeywordSource, FallbackSource, RecommendationRequest, build_request_context};
//! use catalog::ToolCatalog;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(ToolCatalog::builtin()?);
//! let request = RecommendationRequest::from_json(r#"{"need": "email newsletter"}"#)?;
//! let context = build_request_context(&request);
//!
//! let mut candidates = KeywordSource::new(catalog.clone()).get_candidates(&context);
//! if candidates.is_empty() {
//!     candidates = FallbackSource::new(catalog).get_candidates();
//! }
//! ```

// Public modules
pub mod types;
pub mod request;
pub mod request_context;
pub mod keyword;
pub mod fallback;

// Re-export commonly used types
pub use types::{Candidate, CandidateSource, RequestContext};
pub use request::{InputError, RecommendationRequest};
pub use request_context::build_request_context;
pub use keyword::KeywordSource;
pub use fallback::FallbackSource;
