//! YAML export
//!
//! The same document as the JSON export, with a comment header.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::services::EnvelopeLedger;

/// Write the full export as YAML
pub fn export_full_yaml<W: Write>(ledger: &EnvelopeLedger, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::from_ledger(ledger);

    let header = format!(
        "# Rockefeller ledger export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}
