//! CLI command for data export
//!
//! Writes the expense list or the whole ledger to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_ledger_json, export_ledger_yaml};
use crate::storage::Storage;

/// Default output file for CSV exports
pub const DEFAULT_CSV_OUTPUT: &str = "expenses.csv";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense list)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

impl ExportFormat {
    /// Default output file name for this format
    pub fn default_output(&self) -> PathBuf {
        match self {
            Self::Csv => PathBuf::from(DEFAULT_CSV_OUTPUT),
            Self::Json => PathBuf::from("expenses.json"),
            Self::Yaml => PathBuf::from("expenses.yaml"),
        }
    }
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    format: ExportFormat,
) -> ExpenseResult<()> {
    let output = output.unwrap_or_else(|| format.default_output());
    let state = storage.ledger.snapshot()?;

    let file = File::create(&output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            let count = export_expenses_csv(&state.expenses, &mut writer)?;
            println!("Exported {} expenses to: {}", count, output.display());
        }
        ExportFormat::Json => {
            export_ledger_json(&state, &mut writer, true)?;
            println!("Ledger exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_ledger_yaml(&state, &mut writer)?;
            println!("Ledger exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    tracing::info!(path = %output.display(), ?format, "export written");
    Ok(())
}
