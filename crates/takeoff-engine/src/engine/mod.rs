//! Takeoff computation engine API.
//!
//! This module provides the aggregation core for a takeoff session:
//!
//! - [`TakeoffItem`], [`RebarItem`] - Extracted record types
//! - [`classify_description`] - Description parsing (group name / location label)
//! - [`group_items`] - Filtering, bucketing and canonical trade ordering
//! - [`synthesize_dimension`] - Dimension text to multiplication formula tokens
//! - [`summarise_rebar`] - Reinforcement weight totals by bar type
//! - [`PriceBook`], [`grand_total`] - Unit pricing and the priced total
//! - [`format_number`] - Format quantities for display

mod classify;
mod cost;
mod dimension;
mod format;
mod group;
mod item;
mod rebar;

pub use classify::{Classification, classify_description, DEFAULT_LOCATION, SEGMENT_DELIMITER};
pub use cost::{PriceBook, coerce_rate, grand_total};
pub use dimension::{DimensionFormula, synthesize_dimension};
pub use format::format_number;
pub use group::{
    CATEGORY_PRIORITY, CategoryFilter, GroupMember, GroupedItem, category_priority, group_items,
};
pub use item::{RebarItem, TakeoffItem};
pub use rebar::{REBAR_WEIGHT_UNIT, RebarSummary, summarise_rebar};
