//! Extracted record types.
//!
//! These mirror the payload of the upstream extraction service. Batches are
//! treated as immutable snapshots: nothing in the engine mutates an item
//! after it has been received.

use serde::{Deserialize, Serialize};

/// A single measured line-item from a takeoff batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TakeoffItem {
    pub id: String,
    /// Free text, conventionally `"Element - Material - Location"`.
    pub description: String,
    /// Repetition count applied to the dimensions. Defaults to 1.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Free-text dimension expression, e.g. `"15.00 x 0.60 x 1.20"`.
    #[serde(default)]
    pub dimensions: String,
    /// Quantity already computed upstream; never recomputed here.
    pub quantity: f64,
    pub unit: String,
    /// Trade category; matched against the canonical priority table.
    pub category: String,
    #[serde(default)]
    pub confidence: String,
}

fn default_multiplier() -> f64 {
    1.0
}

/// A single reinforcement record from a bar bending schedule.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RebarItem {
    pub bar_mark: String,
    pub member: String,
    /// Bar type/size code, e.g. `"T12"`. Aggregation key for summaries.
    pub bar_type: String,
    pub shape_code: String,
    pub member_count: u32,
    pub bars_per_member: u32,
    pub total_bars: u32,
    pub length_per_bar: f64,
    pub total_length: f64,
    /// Total mass in kilograms.
    pub total_weight: f64,
}
