use takeoff_engine::engine::{CategoryFilter, PriceBook, RebarItem, TakeoffItem};

use crate::storage::Snapshot;

/// UI-agnostic state for one takeoff session.
///
/// Holds one immutable snapshot of extracted data plus the mutable session
/// inputs (search term, category filter, unit prices). Everything derived -
/// groups, summaries, totals, workbooks - is recomputed from scratch on
/// access; nothing incremental survives an edit.
pub struct Project {
    pub name: String,
    pub summary: String,
    pub(crate) items: Vec<TakeoffItem>,
    pub(crate) rebar: Vec<RebarItem>,
    pub(crate) search_term: String,
    pub(crate) category_filter: CategoryFilter,
    pub(crate) prices: PriceBook,
}

impl Project {
    /// Create an empty project.
    ///
    /// This constructor is side-effect free: it does not touch the filesystem.
    pub fn new(name: &str) -> Self {
        Project {
            name: name.to_string(),
            summary: String::new(),
            items: Vec::new(),
            rebar: Vec::new(),
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            prices: PriceBook::new(),
        }
    }

    /// Create a project from an extraction snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Project {
            name: snapshot.project_name,
            summary: snapshot.summary,
            items: snapshot.items,
            rebar: snapshot.rebar,
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            prices: PriceBook::new(),
        }
    }

    pub fn items(&self) -> &[TakeoffItem] {
        &self.items
    }

    pub fn rebar_items(&self) -> &[RebarItem] {
        &self.rebar
    }
}
