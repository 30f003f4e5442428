//! Extraction snapshot loading.
//!
//! The upstream extraction service is an opaque, already-validated source;
//! this module only deserializes its JSON payload. No retries, no schema
//! checks beyond what serde enforces.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use takeoff_engine::engine::{RebarItem, TakeoffItem};

/// One immutable batch from the upstream extraction service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub project_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub items: Vec<TakeoffItem>,
    #[serde(default)]
    pub rebar: Vec<RebarItem>,
}

/// Read a snapshot from a JSON file.
pub fn read_snapshot(path: &Path) -> Result<Snapshot> {
    let content = std::fs::read_to_string(path)?;
    parse_snapshot(&content)
}

/// Parse snapshot JSON content.
pub fn parse_snapshot(content: &str) -> Result<Snapshot> {
    Ok(serde_json::from_str(content)?)
}
