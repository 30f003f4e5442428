//! Snapshot input and workbook output.

pub mod json;
pub mod writer;

pub use json::{Snapshot, parse_snapshot, read_snapshot};
pub use writer::{export_file_name, write_workbook, write_workbook_content};
