//! Export CLI command

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::export::{export_entries_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Arguments for `tally export`
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (csv, json, yaml)
    #[arg(short, long, default_value = "csv")]
    pub format: String,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    args: ExportArgs,
) -> TallyResult<()> {
    let book = storage.book.load(&settings.default_account)?;

    let mut buffer = Vec::new();
    match args.format.to_lowercase().as_str() {
        "csv" => export_entries_csv(&book, &mut buffer)?,
        "json" => export_full_json(&book, &mut buffer)?,
        "yaml" => export_full_yaml(&book, &mut buffer)?,
        other => {
            return Err(TallyError::Validation(format!(
                "Invalid export format: '{}'. Valid formats: csv, json, yaml",
                other
            )))
        }
    }

    match args.output {
        Some(path) => {
            std::fs::write(&path, &buffer)
                .map_err(|e| TallyError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("Exported {} bytes to {}", buffer.len(), path.display());
        }
        None => {
            let text = String::from_utf8(buffer)
                .map_err(|e| TallyError::Export(e.to_string()))?;
            print!("{}", text);
        }
    }

    Ok(())
}
