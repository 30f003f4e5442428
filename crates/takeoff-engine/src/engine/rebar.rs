//! Reinforcement aggregation by bar type.

use std::collections::HashMap;

use super::item::RebarItem;

/// Mass unit carried by every reinforcement summary.
pub const REBAR_WEIGHT_UNIT: &str = "kg";

/// Aggregate reinforcement weight for one bar type.
#[derive(Clone, Debug, PartialEq)]
pub struct RebarSummary {
    pub bar_type: String,
    /// Display name, also the pricing key for the BOQ.
    pub name: String,
    pub total_weight: f64,
}

impl RebarSummary {
    pub fn display_name(bar_type: &str) -> String {
        format!("Reinforcement Bars (Type {})", bar_type)
    }
}

/// Sum total weight keyed solely by bar type; member and shape are ignored.
/// Output is sorted alphabetically by display name. Scope filtering, if
/// any, is the supplier's concern, not this function's.
pub fn summarise_rebar(records: &[RebarItem]) -> Vec<RebarSummary> {
    let mut weights: HashMap<String, f64> = HashMap::new();
    for record in records {
        *weights.entry(record.bar_type.clone()).or_insert(0.0) += record.total_weight;
    }

    let mut summaries: Vec<RebarSummary> = weights
        .into_iter()
        .map(|(bar_type, total_weight)| RebarSummary {
            name: RebarSummary::display_name(&bar_type),
            bar_type,
            total_weight,
        })
        .collect();
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    summaries
}
