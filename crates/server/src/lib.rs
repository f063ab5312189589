//! Server crate for the toolrec recommendation engine.
//!
//! This crate contains the engine that coordinates sources and filters,
//! its configuration, and the HTTP boundary that exposes it.

pub mod config;
pub mod engine;
pub mod http;

pub use config::{EngineConfig, SuggestionOrder};
pub use engine::{RecommendationEngine, RecommendationResult};
pub use http::router;
