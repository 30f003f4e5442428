//! Grouping, filtering and subtotal accumulation.
//!
//! Items are bucketed by (parsed group name, unit, category) and ordered by
//! the canonical trade sequence, so the dimension sheet reads the way an
//! estimator expects a takeoff to read.

use std::collections::HashMap;

use super::classify::classify_description;
use super::item::TakeoffItem;

/// Canonical trade ordering for output, highest priority first. Categories
/// absent from this table sort after every listed one.
pub const CATEGORY_PRIORITY: &[&str] = &[
    "Preliminaries",
    "Sub Structure",
    "Super Structure",
    "Blockwork",
    "Roofing",
    "Finishes",
    "Doors & Windows",
    "Painting",
    "External Works",
];

/// Category predicate applied during grouping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// A member item within a group, annotated with its parsed location label.
#[derive(Clone, Debug)]
pub struct GroupMember {
    pub location: String,
    pub item: TakeoffItem,
}

/// An aggregation bucket: one per distinct (group name, unit, category).
#[derive(Clone, Debug)]
pub struct GroupedItem {
    pub name: String,
    pub unit: String,
    pub category: String,
    pub items: Vec<GroupMember>,
    pub total_quantity: f64,
}

/// Priority index of a category in the canonical trade ordering.
pub fn category_priority(category: &str) -> usize {
    CATEGORY_PRIORITY
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_PRIORITY.len())
}

/// Filter, bucket and sort a batch of items into groups.
///
/// An item passes when its description contains `search` case-insensitively
/// and its category matches `filter`. The first occurrence of a bucket key
/// creates the group; later occurrences append and accumulate the total.
///
/// Ordering: stable sort by canonical category priority, then
/// case-insensitive group name. Ties among unlisted categories keep their
/// encounter order. Pure and idempotent over identical inputs.
pub fn group_items(
    items: &[TakeoffItem],
    search: &str,
    filter: &CategoryFilter,
) -> Vec<GroupedItem> {
    let needle = search.to_lowercase();

    let mut groups: Vec<GroupedItem> = Vec::new();
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();

    for item in items {
        if !needle.is_empty() && !item.description.to_lowercase().contains(&needle) {
            continue;
        }
        if !filter.matches(&item.category) {
            continue;
        }

        let classified = classify_description(&item.description);
        let key = (
            classified.group.clone(),
            item.unit.clone(),
            item.category.clone(),
        );
        let idx = *index.entry(key).or_insert_with(|| {
            groups.push(GroupedItem {
                name: classified.group.clone(),
                unit: item.unit.clone(),
                category: item.category.clone(),
                items: Vec::new(),
                total_quantity: 0.0,
            });
            groups.len() - 1
        });

        groups[idx].items.push(GroupMember {
            location: classified.location,
            item: item.clone(),
        });
        groups[idx].total_quantity += item.quantity;
    }

    groups.sort_by(|a, b| {
        category_priority(&a.category)
            .cmp(&category_priority(&b.category))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    groups
}
