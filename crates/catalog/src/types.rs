//! Core domain types for the tool catalog.
//!
//! This module defines the fundamental data structures shared by every
//! crate in the workspace:
//! - `ToolId` type alias for domain clarity
//! - `ToolCatalogEntry`, one matchable tool
//! - `ToolCatalog`, the immutable, indexed collection of entries

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases and Constants
// =============================================================================

/// Unique identifier for a tool (e.g. "calendly")
pub type ToolId = String;

/// Category tag marking entries that make up the fallback list
pub const POPULAR_CATEGORY: &str = "popular";

/// Upper bound on the number of suggestions in any result
pub const MAX_SUGGESTIONS: usize = 6;

// =============================================================================
// Catalog Entry
// =============================================================================

/// A single tool in the catalog.
///
/// Entries are table-driven: each carries the keywords that make it
/// relevant, so adding a tool never touches matching logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCatalogEntry {
    pub id: ToolId,

    /// Display name, only used for listings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Lowercase tokens or phrases; any one occurring in a need makes the tool relevant
    pub keywords: Vec<String>,

    /// Tie-break priority under weighted ordering, higher preferred
    #[serde(default)]
    pub weight: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ToolCatalogEntry {
    /// Create an entry with the given id and keywords, no weight and no category
    pub fn new<I, S>(id: impl Into<ToolId>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            name: None,
            keywords: keywords.into_iter().map(Into::into).collect(),
            weight: 0.0,
            category: None,
        }
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this entry belongs to the fallback list
    pub fn is_popular(&self) -> bool {
        self.category.as_deref() == Some(POPULAR_CATEGORY)
    }

    /// Returns the first keyword contained in `need`, if any.
    ///
    /// `need` must already be lowercased. This is plain substring
    /// containment, so "scheduler" matches the keyword "schedule".
    pub fn matched_keyword(&self, need: &str) -> Option<&str> {
        self.keywords
            .iter()
            .map(String::as_str)
            .find(|keyword| need.contains(keyword))
    }
}

// =============================================================================
// ToolCatalog - the immutable, indexed catalog
// =============================================================================

/// The static set of known tools.
///
/// Built once at startup (see `index.rs`) and shared behind an `Arc`;
/// nothing on it takes `&mut self` after construction.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    /// Entries in catalog (evaluation) order
    pub(crate) entries: Vec<ToolCatalogEntry>,
    /// Tool id -> position in `entries`
    pub(crate) id_index: HashMap<ToolId, usize>,
    /// Ids of popular entries in catalog order, capped at MAX_SUGGESTIONS
    pub(crate) fallback: Vec<ToolId>,
}

impl ToolCatalog {
    /// All entries, in evaluation order
    pub fn entries(&self) -> &[ToolCatalogEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: &str) -> Option<&ToolCatalogEntry> {
        self.position(id).map(|position| &self.entries[position])
    }

    /// Position of a tool in evaluation order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.id_index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_index.contains_key(id)
    }

    /// The fixed list returned when nothing matches
    pub fn fallback(&self) -> &[ToolId] {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct categories in order of first appearance
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for category in self.entries.iter().filter_map(|e| e.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}
