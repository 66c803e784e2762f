//! JSON export functionality
//!
//! Exports the complete book to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TallyError, TallyResult};
use crate::models::Book;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full book export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The complete book: all accounts with their entry sequences
    pub book: Book,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of accounts
    pub account_count: usize,

    /// Total number of entries across all accounts
    pub entry_count: usize,
}

impl FullExport {
    /// Create a new full export from the book
    pub fn from_book(book: &Book) -> Self {
        let entry_count = book
            .accounts()
            .iter()
            .map(|a| a.expenses().len() + a.revenues().len())
            .sum();

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                account_count: book.accounts().len(),
                entry_count,
            },
            book: book.clone(),
        }
    }

    /// Validate an imported export
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Unsupported export schema version: {} (expected {})",
                self.schema_version, EXPORT_SCHEMA_VERSION
            ));
        }

        self.book.validate().map_err(|e| e.to_string())
    }
}

/// Export the full book to pretty-printed JSON
pub fn export_full_json<W: Write>(book: &Book, writer: &mut W) -> TallyResult<()> {
    let export = FullExport::from_book(book);
    serde_json::to_writer_pretty(writer, &export).map_err(|e| TallyError::Export(e.to_string()))
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> TallyResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| TallyError::Import(e.to_string()))?;

    export.validate().map_err(TallyError::Import)?;
    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Entry, Money};
    use chrono::NaiveDate;

    fn sample_book() -> Book {
        let mut account = Account::new("main");
        account
            .add_entry(Entry::expense(
                "coffee",
                Money::from_cents(350),
                NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            ))
            .unwrap();
        Book::new(account)
    }

    #[test]
    fn test_full_export_metadata() {
        let export = FullExport::from_book(&sample_book());
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.account_count, 1);
        assert_eq!(export.metadata.entry_count, 1);
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_export_import_roundtrip() {
        let book = sample_book();

        let mut buffer = Vec::new();
        export_full_json(&book, &mut buffer).unwrap();

        let imported = import_from_json(&String::from_utf8(buffer).unwrap()).unwrap();
        assert_eq!(imported.book, book);
    }

    #[test]
    fn test_import_rejects_unknown_schema() {
        let mut export = FullExport::from_book(&sample_book());
        export.schema_version = "99.0.0".to_string();

        let json = serde_json::to_string(&export).unwrap();
        let result = import_from_json(&json);
        assert!(matches!(result, Err(TallyError::Import(_))));
    }
}
