//! YAML export functionality
//!
//! Exports the complete book to YAML for human-readable backup.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::FullExport;
use crate::models::Book;

/// Export the full book to YAML
pub fn export_full_yaml<W: Write>(book: &Book, writer: &mut W) -> TallyResult<()> {
    let export = FullExport::from_book(book);

    writeln!(writer, "# tally-cli full book export")
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer, "# App version: {}", export.app_version)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> TallyResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| TallyError::Import(e.to_string()))?;

    export.validate().map_err(TallyError::Import)?;
    Ok(export)
}
