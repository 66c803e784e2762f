//! CSV export functionality
//!
//! Exports every entry of every account as flat CSV rows.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Book;

/// Export all entries in the book to CSV
pub fn export_entries_csv<W: Write>(book: &Book, writer: &mut W) -> TallyResult<()> {
    writeln!(writer, "Account,Category,Date,Description,Amount")
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for account in book.accounts() {
        for entry in account.expenses().iter().chain(account.revenues().iter()) {
            writeln!(
                writer,
                "{},{},{},{},{:.2}",
                escape_csv(account.name()),
                entry.category(),
                entry.date().format("%Y-%m-%d"),
                escape_csv(entry.description()),
                entry.amount().cents() as f64 / 100.0
            )
            .map_err(|e| TallyError::Export(e.to_string()))?;
        }
    }

    Ok(())
}

/// Escape a CSV field: quote when it contains commas, quotes, or newlines
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
