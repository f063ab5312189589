//! Parser for catalog files.
//!
//! A catalog file is JSON, either an object with a `tools` array:
//!
//! ```json
//! { "tools": [ { "id": "calendly", "keywords": ["schedule"], "category": "scheduling" } ] }
//! ```
//!
//! or a bare array of the same entries. Parsing only checks shape; the
//! semantic checks live in `index.rs`.

use crate::error::Result;
use crate::types::ToolCatalogEntry;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The two accepted top-level layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { tools: Vec<ToolCatalogEntry> },
    Bare(Vec<ToolCatalogEntry>),
}

/// Parse catalog entries from a JSON string
pub fn parse_entries(json: &str) -> Result<Vec<ToolCatalogEntry>> {
    let file: CatalogFile = serde_json::from_str(json)?;
    Ok(match file {
        CatalogFile::Wrapped { tools } => tools,
        CatalogFile::Bare(tools) => tools,
    })
}

/// Read and parse catalog entries from a file
pub fn parse_file(path: &Path) -> Result<Vec<ToolCatalogEntry>> {
    let content = fs::read_to_string(path)?;
    parse_entries(&content)
}
