//! ToolCatalog building and validation.
//!
//! This module turns parsed entries into a `ToolCatalog`:
//! - Validate every entry (ids, keywords, weights)
//! - Build the id index
//! - Derive the fallback list from popular entries

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use rayon::prelude::*;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use tracing::{debug, info};

/// Catalog shipped inside the binary
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

impl ToolCatalog {
    /// Build a catalog from entries, validating them first.
    ///
    /// Entry order is preserved and becomes the evaluation order.
    pub fn from_entries(entries: Vec<ToolCatalogEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        // Per-entry checks are independent; find_map_first keeps the
        // reported error deterministic (first bad entry in catalog order).
        if let Some(err) = entries
            .par_iter()
            .enumerate()
            .find_map_first(|(position, entry)| validate_entry(position, entry).err())
        {
            return Err(err);
        }

        let mut id_index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            match id_index.entry(entry.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(CatalogError::DuplicateId {
                        id: entry.id.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }

        let fallback: Vec<ToolId> = entries
            .iter()
            .filter(|entry| entry.is_popular())
            .map(|entry| entry.id.clone())
            .take(MAX_SUGGESTIONS)
            .collect();

        if fallback.is_empty() {
            return Err(CatalogError::NoFallback {
                category: POPULAR_CATEGORY.to_string(),
            });
        }

        debug!("Fallback list: {:?}", fallback);

        Ok(Self {
            entries,
            id_index,
            fallback,
        })
    }

    /// Parse and validate a catalog from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_entries(parser::parse_entries(json)?)
    }

    /// Load a catalog file from disk
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading tool catalog from {:?}", path);
        let catalog = Self::from_entries(parser::parse_file(path)?)?;
        info!(
            "Loaded {} tools ({} fallback)",
            catalog.len(),
            catalog.fallback.len()
        );
        Ok(catalog)
    }

    /// The catalog embedded at compile time
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Load from `path` when given, otherwise fall back to the built-in catalog
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                info!("Using built-in tool catalog");
                Self::builtin()
            }
        }
    }
}

/// Check a single entry in isolation
fn validate_entry(position: usize, entry: &ToolCatalogEntry) -> Result<()> {
    if entry.id.is_empty() {
        return Err(CatalogError::EmptyId { position });
    }
    if entry.keywords.is_empty() {
        return Err(CatalogError::NoKeywords {
            id: entry.id.clone(),
        });
    }
    for keyword in &entry.keywords {
        if keyword.is_empty() {
            return Err(CatalogError::EmptyKeyword {
                id: entry.id.clone(),
            });
        }
        if keyword.to_lowercase() != *keyword {
            return Err(CatalogError::KeywordNotLowercase {
                id: entry.id.clone(),
                keyword: keyword.clone(),
            });
        }
    }
    if !entry.weight.is_finite() {
        return Err(CatalogError::InvalidWeight {
            id: entry.id.clone(),
            weight: entry.weight,
        });
    }
    Ok(())
}
