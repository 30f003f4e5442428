//! Workbook encoder for tabular text output.
//!
//! The single place that knows concrete spreadsheet syntax. Abstract cells
//! render to CSV fields; formulas become `=`-prefixed A1 text with
//! sheet-qualified references where they cross sheets. Binary formats are a
//! downstream concern and consume the same abstract workbook.

use std::fs;
use std::path::Path;

use takeoff_engine::engine::format_number;

use crate::error::Result;
use crate::workbook::{Cell, CellAddress, FormulaExpr, SheetId, Workbook};

/// Suffix appended to the export file name.
const EXPORT_SUFFIX: &str = "_Takeoff.csv";

/// Derive the export file name from a project name: whitespace runs become
/// underscores, then the fixed suffix.
pub fn export_file_name(project_name: &str) -> String {
    let base = project_name.split_whitespace().collect::<Vec<_>>().join("_");
    if base.is_empty() {
        "Takeoff.csv".to_string()
    } else {
        format!("{}{}", base, EXPORT_SUFFIX)
    }
}

/// Write a workbook to a file.
pub fn write_workbook(path: &Path, workbook: &Workbook) -> Result<()> {
    fs::write(path, write_workbook_content(workbook))?;
    Ok(())
}

/// Render a workbook as text: one banner line per sheet, then its rows as
/// CSV.
pub fn write_workbook_content(workbook: &Workbook) -> String {
    let mut out = String::from("# Takeoff Workbook\n");
    for sheet in &workbook.sheets {
        out.push('\n');
        out.push_str(&format!("## {}\n", sheet.id.display_name()));
        for row in &sheet.rows {
            let fields: Vec<String> = row
                .iter()
                .map(|cell| escape_field(&render_cell(cell, sheet.id)))
                .collect();
            out.push_str(&fields.join(","));
            out.push('\n');
        }
    }
    out
}

fn render_cell(cell: &Cell, current: SheetId) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(n) => format_number(*n),
        Cell::Formula { expr, .. } => format!("={}", render_formula(expr, current)),
    }
}

/// Render an abstract formula in A1 syntax, qualifying references that
/// leave `current`.
pub(crate) fn render_formula(expr: &FormulaExpr, current: SheetId) -> String {
    match expr {
        FormulaExpr::Product(tokens) => tokens.join("*"),
        FormulaExpr::CellRef(addr) => render_ref(addr, current),
        FormulaExpr::CellProduct(a, b) => {
            format!("{}*{}", render_ref(a, current), render_ref(b, current))
        }
        FormulaExpr::ConditionalSum {
            sheet,
            criteria_col,
            sum_col,
            first_row,
            last_row,
            criterion,
        } => format!(
            "SUMIF({},\"{}\",{})",
            render_range(*sheet, *criteria_col, *first_row, *last_row, current),
            criterion.replace('"', "\"\""),
            render_range(*sheet, *sum_col, *first_row, *last_row, current),
        ),
        FormulaExpr::ColumnSum {
            col,
            first_row,
            last_row,
        } => format!(
            "SUM({})",
            render_range(current, *col, *first_row, *last_row, current)
        ),
    }
}

fn render_ref(addr: &CellAddress, current: SheetId) -> String {
    if addr.sheet == current {
        addr.to_a1()
    } else {
        addr.to_string()
    }
}

fn render_range(
    sheet: SheetId,
    col: usize,
    first_row: usize,
    last_row: usize,
    current: SheetId,
) -> String {
    let start = CellAddress::new(sheet, first_row, col);
    let end = CellAddress::new(sheet, last_row, col);
    if sheet == current {
        format!("{}:{}", start.to_a1(), end.to_a1())
    } else {
        format!(
            "'{}'!{}:{}",
            sheet.display_name(),
            start.to_a1(),
            end.to_a1()
        )
    }
}

/// Escape a field for CSV output. Formula text is intentional output here,
/// so no injection guard is applied.
fn escape_field(field: &str) -> String {
    if field.contains(',')
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::Sheet;

    #[test]
    fn test_export_file_name_replaces_whitespace() {
        assert_eq!(export_file_name("Villa 12"), "Villa_12_Takeoff.csv");
        assert_eq!(
            export_file_name("  Two   Storey  House "),
            "Two_Storey_House_Takeoff.csv"
        );
        assert_eq!(export_file_name(""), "Takeoff.csv");
    }

    #[test]
    fn test_render_product_formula() {
        let expr = FormulaExpr::Product(vec![
            "15.00".to_string(),
            "0.60".to_string(),
            "1.20".to_string(),
        ]);
        assert_eq!(render_formula(&expr, SheetId::Dimensions), "15.00*0.60*1.20");
    }

    #[test]
    fn test_render_cross_sheet_reference() {
        let expr = FormulaExpr::CellRef(CellAddress::new(SheetId::Dimensions, 7, 3));
        assert_eq!(render_formula(&expr, SheetId::Boq), "'Dim Sheet'!D8");
        assert_eq!(render_formula(&expr, SheetId::Dimensions), "D8");
    }

    #[test]
    fn test_render_same_row_product() {
        let expr = FormulaExpr::CellProduct(
            CellAddress::new(SheetId::Boq, 1, 3),
            CellAddress::new(SheetId::Boq, 1, 4),
        );
        assert_eq!(render_formula(&expr, SheetId::Boq), "D2*E2");
    }

    #[test]
    fn test_render_conditional_sum() {
        let expr = FormulaExpr::ConditionalSum {
            sheet: SheetId::RebarSchedule,
            criteria_col: 2,
            sum_col: 9,
            first_row: 0,
            last_row: 4,
            criterion: "T12".to_string(),
        };
        assert_eq!(
            render_formula(&expr, SheetId::Boq),
            "SUMIF('Rebar Schedule'!C1:C5,\"T12\",'Rebar Schedule'!J1:J5)"
        );
    }

    #[test]
    fn test_render_column_sum() {
        let expr = FormulaExpr::ColumnSum {
            col: 5,
            first_row: 1,
            last_row: 6,
        };
        assert_eq!(render_formula(&expr, SheetId::Boq), "SUM(F2:F7)");
    }

    #[test]
    fn test_workbook_content_banners_and_formulas() {
        let mut sheet = Sheet::new(SheetId::Boq);
        sheet.push_row(vec![
            Cell::Text("Grand Total".to_string()),
            Cell::Formula {
                expr: FormulaExpr::ColumnSum {
                    col: 1,
                    first_row: 1,
                    last_row: 3,
                },
                cached: 99.0,
            },
        ]);
        let workbook = Workbook { sheets: vec![sheet] };

        let content = write_workbook_content(&workbook);
        assert!(content.starts_with("# Takeoff Workbook\n"));
        assert!(content.contains("## BOQ\n"));
        assert!(content.contains("Grand Total,=SUM(B2:B4)"));
        // Cached values never appear in the text output.
        assert!(!content.contains("99"));
    }

    #[test]
    fn test_escape_field_quotes_commas() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(
            escape_field("Grade Beam, Grid A"),
            "\"Grade Beam, Grid A\""
        );
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
