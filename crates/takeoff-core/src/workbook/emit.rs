//! Three-sheet workbook emission.
//!
//! Emission is a two-phase protocol. Phase 1 writes the dimension sheet and
//! returns the address of every group's subtotal cell; phase 2 builds the
//! BOQ consuming that map read-only. The rebar schedule sits between the
//! two and is referenced by conditional sums rather than addresses, because
//! its row positions are not captured before BOQ construction.

use std::collections::HashMap;

use tracing::warn;

use takeoff_engine::engine::{
    DimensionFormula, GroupedItem, PriceBook, REBAR_WEIGHT_UNIT, RebarItem, RebarSummary,
    grand_total, synthesize_dimension,
};

use super::address::{CellAddress, SheetId};
use super::cell::{Cell, FormulaExpr, Sheet, Workbook};

/// Dimension sheet quantity column.
pub const DIM_QTY_COL: usize = 3;

const DIM_DESCRIPTION_COL: usize = 0;
const DIM_MULTIPLIER_COL: usize = 1;
const DIM_DIMENSIONS_COL: usize = 2;
const DIM_UNIT_COL: usize = 4;

/// Rebar schedule columns referenced by BOQ conditional sums.
pub const REBAR_TYPE_COL: usize = 2;
pub const REBAR_WEIGHT_COL: usize = 9;

/// BOQ columns.
pub const BOQ_QTY_COL: usize = 3;
pub const BOQ_RATE_COL: usize = 4;
pub const BOQ_AMOUNT_COL: usize = 5;

/// Subtotal-cell addresses recorded during phase 1, keyed by group name.
pub type SubtotalMap = HashMap<String, CellAddress>;

/// Phase 1: emit the dimension sheet and record subtotal addresses.
///
/// Per group: a category header only when the category changes from the
/// previously emitted group (the input is already category-sorted), the
/// group name, then per member a logic row (location, multiplier, dimension
/// text) and a value row carrying the synthesized quantity cell, then a
/// subtotal row with a plain literal total, then a spacer.
pub fn emit_dimension_sheet(groups: &[GroupedItem]) -> (Sheet, SubtotalMap) {
    let mut sheet = Sheet::new(SheetId::Dimensions);
    let mut subtotals = SubtotalMap::new();

    sheet.push_row(vec![
        Cell::Text("Description".to_string()),
        Cell::Text("No.".to_string()),
        Cell::Text("Dimensions".to_string()),
        Cell::Text("Qty".to_string()),
        Cell::Text("Unit".to_string()),
    ]);

    let mut last_category: Option<&str> = None;
    for group in groups {
        if last_category != Some(group.category.as_str()) {
            sheet.push_row(vec![Cell::Text(group.category.clone())]);
            last_category = Some(group.category.as_str());
        }

        sheet.push_row(vec![Cell::Text(group.name.clone())]);

        for member in &group.items {
            let mut logic_row = vec![Cell::Empty; DIM_UNIT_COL + 1];
            logic_row[DIM_DESCRIPTION_COL] = Cell::Text(member.location.clone());
            logic_row[DIM_MULTIPLIER_COL] = Cell::Number(member.item.multiplier);
            logic_row[DIM_DIMENSIONS_COL] = Cell::Text(member.item.dimensions.clone());
            sheet.push_row(logic_row);

            let qty_cell = match synthesize_dimension(
                &member.item.dimensions,
                member.item.multiplier,
                member.item.quantity,
            ) {
                DimensionFormula::Product { tokens } => Cell::Formula {
                    expr: FormulaExpr::Product(tokens),
                    cached: member.item.quantity,
                },
                DimensionFormula::Fallback => Cell::Number(member.item.quantity),
            };
            let mut value_row = vec![Cell::Empty; DIM_UNIT_COL + 1];
            value_row[DIM_QTY_COL] = qty_cell;
            sheet.push_row(value_row);
        }

        let subtotal_row = sheet.next_row();
        subtotals.insert(
            group.name.clone(),
            CellAddress::new(SheetId::Dimensions, subtotal_row, DIM_QTY_COL),
        );
        sheet.push_row(vec![
            Cell::Text("Total".to_string()),
            Cell::Empty,
            Cell::Empty,
            Cell::Number(group.total_quantity),
            Cell::Text(group.unit.clone()),
        ]);

        sheet.push_row(Vec::new());
    }

    (sheet, subtotals)
}

/// Emit the rebar schedule: one row per record, input order preserved,
/// fixed ten-column layout.
pub fn emit_rebar_schedule(records: &[RebarItem]) -> Sheet {
    let mut sheet = Sheet::new(SheetId::RebarSchedule);
    for record in records {
        sheet.push_row(vec![
            Cell::Text(record.member.clone()),
            Cell::Text(record.bar_mark.clone()),
            Cell::Text(record.bar_type.clone()),
            Cell::Text(record.shape_code.clone()),
            Cell::Number(record.member_count as f64),
            Cell::Number(record.bars_per_member as f64),
            Cell::Number(record.total_bars as f64),
            Cell::Number(record.length_per_bar),
            Cell::Number(record.total_length),
            Cell::Number(record.total_weight),
        ]);
    }
    sheet
}

/// Phase 2: emit the BOQ, consuming the subtotal map read-only.
///
/// Group rows reference their recorded dimension-sheet subtotal; rebar rows
/// use a conditional sum over the schedule keyed on exact bar-type text.
/// Every amount cell is a same-row quantity x rate formula so rate edits in
/// the exported file recompute. The closing grand-total amount sums the
/// whole amount column span.
pub fn emit_boq_sheet(
    groups: &[GroupedItem],
    summaries: &[RebarSummary],
    prices: &PriceBook,
    subtotals: &SubtotalMap,
    rebar_rows: usize,
) -> Sheet {
    let mut sheet = Sheet::new(SheetId::Boq);

    sheet.push_row(vec![
        Cell::Text("Item".to_string()),
        Cell::Text("Description".to_string()),
        Cell::Text("Unit".to_string()),
        Cell::Text("Qty".to_string()),
        Cell::Text("Rate".to_string()),
        Cell::Text("Amount".to_string()),
    ]);

    let mut item_no = 0usize;
    let mut last_amount_row = 0usize;

    for group in groups {
        item_no += 1;
        let row = sheet.next_row();
        let rate = prices.rate(&group.name);
        let qty_cell = match subtotals.get(&group.name) {
            Some(addr) => Cell::Formula {
                expr: FormulaExpr::CellRef(*addr),
                cached: group.total_quantity,
            },
            None => {
                warn!(group = group.name.as_str(), "no recorded subtotal address");
                Cell::Number(group.total_quantity)
            }
        };
        sheet.push_row(vec![
            Cell::Number(item_no as f64),
            Cell::Text(group.name.clone()),
            Cell::Text(group.unit.clone()),
            qty_cell,
            Cell::Number(rate),
            amount_formula(row, group.total_quantity * rate),
        ]);
        last_amount_row = row;
    }

    if !summaries.is_empty() {
        sheet.push_row(Vec::new());
        sheet.push_row(vec![
            Cell::Empty,
            Cell::Text("Reinforcement".to_string()),
        ]);

        for summary in summaries {
            item_no += 1;
            let row = sheet.next_row();
            let rate = prices.rate(&summary.name);
            let qty_cell = Cell::Formula {
                expr: FormulaExpr::ConditionalSum {
                    sheet: SheetId::RebarSchedule,
                    criteria_col: REBAR_TYPE_COL,
                    sum_col: REBAR_WEIGHT_COL,
                    first_row: 0,
                    last_row: rebar_rows.saturating_sub(1),
                    criterion: summary.bar_type.clone(),
                },
                cached: summary.total_weight,
            };
            sheet.push_row(vec![
                Cell::Number(item_no as f64),
                Cell::Text(summary.name.clone()),
                Cell::Text(REBAR_WEIGHT_UNIT.to_string()),
                qty_cell,
                Cell::Number(rate),
                amount_formula(row, summary.total_weight * rate),
            ]);
            last_amount_row = row;
        }
    }

    sheet.push_row(Vec::new());
    let total = grand_total(groups, summaries, prices);
    let total_cell = if last_amount_row > 0 {
        Cell::Formula {
            expr: FormulaExpr::ColumnSum {
                col: BOQ_AMOUNT_COL,
                first_row: 1,
                last_row: last_amount_row,
            },
            cached: total,
        }
    } else {
        Cell::Number(0.0)
    };
    sheet.push_row(vec![
        Cell::Empty,
        Cell::Text("Grand Total".to_string()),
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        total_cell,
    ]);

    sheet
}

fn amount_formula(row: usize, cached: f64) -> Cell {
    Cell::Formula {
        expr: FormulaExpr::CellProduct(
            CellAddress::new(SheetId::Boq, row, BOQ_QTY_COL),
            CellAddress::new(SheetId::Boq, row, BOQ_RATE_COL),
        ),
        cached,
    }
}

/// One full synthesis pass: dimension sheet, rebar schedule, BOQ, in that
/// fixed order.
pub fn synthesize_workbook(
    groups: &[GroupedItem],
    records: &[RebarItem],
    summaries: &[RebarSummary],
    prices: &PriceBook,
) -> Workbook {
    let (dimensions, subtotals) = emit_dimension_sheet(groups);
    let rebar = emit_rebar_schedule(records);
    let boq = emit_boq_sheet(groups, summaries, prices, &subtotals, records.len());
    Workbook {
        sheets: vec![dimensions, rebar, boq],
    }
}
