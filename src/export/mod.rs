//! Export module for tally-cli
//!
//! Provides complete data export functionality in multiple formats:
//! - CSV: entry rows for spreadsheet use
//! - JSON: machine-readable full book export
//! - YAML: human-readable full book export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_entries_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
