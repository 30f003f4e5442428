//! Unit pricing and the priced grand total.

use std::collections::HashMap;

use super::group::GroupedItem;
use super::rebar::RebarSummary;

/// User-entered unit rates keyed by display name (group name or
/// reinforcement summary name). Absent names price at zero.
#[derive(Clone, Debug, Default)]
pub struct PriceBook {
    rates: HashMap<String, f64>,
}

impl PriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coerce raw input and store it. Returns the rate actually stored.
    pub fn set(&mut self, name: &str, raw: &str) -> f64 {
        let rate = coerce_rate(raw);
        self.rates.insert(name.to_string(), rate);
        rate
    }

    /// Rate for a display name; 0 when unset.
    pub fn rate(&self, name: &str) -> f64 {
        self.rates.get(name).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Coerce raw price input to a non-negative rate. Non-numeric, empty,
/// non-finite and negative inputs all coerce to 0; this is never an error.
pub fn coerce_rate(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 0.0)
        .unwrap_or(0.0)
}

/// Grand total over priced groups and reinforcement summaries. Fully
/// recomputed from the inputs on every call.
pub fn grand_total(
    groups: &[GroupedItem],
    summaries: &[RebarSummary],
    prices: &PriceBook,
) -> f64 {
    let group_total: f64 = groups
        .iter()
        .map(|g| g.total_quantity * prices.rate(&g.name))
        .sum();
    let rebar_total: f64 = summaries
        .iter()
        .map(|s| s.total_weight * prices.rate(&s.name))
        .sum();
    group_total + rebar_total
}
