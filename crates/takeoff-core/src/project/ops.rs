use takeoff_engine::engine::{
    CategoryFilter, GroupedItem, PriceBook, RebarSummary, grand_total, group_items,
    summarise_rebar,
};

use super::Project;
use crate::workbook::{Workbook, emit};

impl Project {
    /// Set the case-insensitive description search term.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    /// Store a unit price for a group or reinforcement display name.
    /// Returns the coerced rate; bad input stores 0, never an error.
    pub fn set_unit_price(&mut self, name: &str, raw: &str) -> f64 {
        self.prices.set(name, raw)
    }

    pub fn prices(&self) -> &PriceBook {
        &self.prices
    }

    /// Groups under the current search term and category filter,
    /// recomputed from the snapshot on every call.
    pub fn grouped_items(&self) -> Vec<GroupedItem> {
        group_items(&self.items, &self.search_term, &self.category_filter)
    }

    /// Reinforcement summaries over the full rebar batch.
    pub fn rebar_summaries(&self) -> Vec<RebarSummary> {
        summarise_rebar(&self.rebar)
    }

    /// Priced total over current groups and reinforcement summaries.
    pub fn grand_total(&self) -> f64 {
        grand_total(&self.grouped_items(), &self.rebar_summaries(), &self.prices)
    }

    /// One full synthesis pass over the current snapshot, filters and
    /// prices. The returned workbook owns no state; a second call with the
    /// same inputs yields an identical workbook.
    pub fn synthesize_workbook(&self) -> Workbook {
        emit::synthesize_workbook(
            &self.grouped_items(),
            &self.rebar,
            &self.rebar_summaries(),
            &self.prices,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::SheetId;
    use takeoff_engine::engine::TakeoffItem;

    fn project_with_items() -> Project {
        let mut project = Project::new("Test House");
        project.items = vec![
            TakeoffItem {
                id: "1".to_string(),
                description: "Strip Footing - Grid 1".to_string(),
                multiplier: 1.0,
                dimensions: "12.0 x 0.35".to_string(),
                quantity: 4.2,
                unit: "m3".to_string(),
                category: "Sub Structure".to_string(),
                confidence: String::new(),
            },
            TakeoffItem {
                id: "2".to_string(),
                description: "Internal Walls - Emulsion".to_string(),
                multiplier: 1.0,
                dimensions: "-".to_string(),
                quantity: 120.0,
                unit: "m2".to_string(),
                category: "Painting".to_string(),
                confidence: String::new(),
            },
        ];
        project
    }

    #[test]
    fn test_search_term_narrows_groups() {
        let mut project = project_with_items();
        assert_eq!(project.grouped_items().len(), 2);
        project.set_search_term("footing");
        assert_eq!(project.grouped_items().len(), 1);
        project.set_search_term("");
        assert_eq!(project.grouped_items().len(), 2);
    }

    #[test]
    fn test_category_filter_narrows_groups() {
        let mut project = project_with_items();
        project.set_category_filter(CategoryFilter::Only("Painting".to_string()));
        let groups = project.grouped_items();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Painting");
    }

    #[test]
    fn test_set_unit_price_coerces() {
        let mut project = project_with_items();
        assert_eq!(project.set_unit_price("Strip Footing", "150"), 150.0);
        assert_eq!(project.set_unit_price("Internal Walls", "n/a"), 0.0);
        assert!((project.grand_total() - 4.2 * 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_filters_do_not_affect_rebar_summaries() {
        let mut project = project_with_items();
        project.rebar = vec![takeoff_engine::engine::RebarItem {
            bar_mark: "01".to_string(),
            member: "Footing".to_string(),
            bar_type: "T12".to_string(),
            shape_code: "00".to_string(),
            member_count: 1,
            bars_per_member: 1,
            total_bars: 1,
            length_per_bar: 1.0,
            total_length: 1.0,
            total_weight: 9.9,
        }];
        project.set_search_term("no such item");
        assert!(project.grouped_items().is_empty());
        assert_eq!(project.rebar_summaries().len(), 1);
    }

    #[test]
    fn test_synthesize_twice_is_identical() {
        let mut project = project_with_items();
        project.set_unit_price("Strip Footing", "150");
        let first = project.synthesize_workbook();
        let second = project.synthesize_workbook();
        assert_eq!(first, second);
        assert!(first.sheet(SheetId::Boq).is_some());
    }
}
