//! Export module for the expense tracker
//!
//! - CSV: the expense list (`Name,Amount,Frequency`), spreadsheet-compatible
//! - JSON: the full ledger document
//! - YAML: the full ledger, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, CSV_HEADER};
pub use json::export_ledger_json;
pub use yaml::export_ledger_yaml;
