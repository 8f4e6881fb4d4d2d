//! Export CLI command

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::ValueEnum;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_full_json, export_full_yaml, export_history_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// History only, spreadsheet-compatible
    Csv,
    /// Balances and history
    Json,
    /// Balances and history, human-readable
    Yaml,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

/// Write an export; defaults to a timestamped file in the exports directory
pub fn handle_export(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> LedgerResult<()> {
    let ledger = storage.load_ledger()?;

    let output = match output {
        Some(path) => path,
        None => default_output(storage, format)?,
    };

    let file = File::create(&output).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_history_csv(&ledger, &mut writer)?,
        ExportFormat::Json => export_full_json(&ledger, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(&ledger, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| LedgerError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    println!(
        "Exported {} entries to: {}",
        ledger.len(),
        output.display()
    );
    Ok(())
}

fn default_output(storage: &Storage, format: ExportFormat) -> LedgerResult<PathBuf> {
    let dir = storage.paths().export_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| LedgerError::Export(format!("Failed to create {}: {}", dir.display(), e)))?;

    Ok(dir.join(format!(
        "rockefeller-{}.{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    )))
}
