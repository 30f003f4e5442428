//! Abstract workbook model and the three-sheet emitter.
//!
//! The emitter produces ordered sheets of typed cells. Formulas stay
//! abstract ([`FormulaExpr`]): token products, cell references, conditional
//! sums. Concrete spreadsheet syntax is the encoder's concern
//! (`storage::writer`), not the domain's.

mod address;
mod cell;
pub mod emit;

pub use address::{CellAddress, SheetId};
pub use cell::{Cell, FormulaExpr, Sheet, Workbook};
