//! takeoff_core - UI-agnostic project model, workbook synthesis and storage.

pub mod error;
pub mod project;
pub mod storage;
pub mod workbook;

pub use error::{Result, TakeoffError};
pub use project::Project;
pub use workbook::{Cell, CellAddress, FormulaExpr, Sheet, SheetId, Workbook};

pub use takeoff_engine::engine::{CategoryFilter, GroupedItem, RebarSummary};
