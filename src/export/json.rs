//! JSON export
//!
//! A versioned dump of the balances and the full history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Balances, LedgerEntry, Money};
use crate::services::EnvelopeLedger;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything the ledger holds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Version of the application that wrote the export
    pub app_version: String,
    pub balances: Balances,
    /// Insertion-ordered history
    pub history: Vec<LedgerEntry>,
    pub metadata: ExportMetadata,
}

/// Summary figures, for reference only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub entry_count: usize,
    pub investment_count: usize,
    pub total_balance: Money,
    pub earliest_entry: Option<String>,
    pub latest_entry: Option<String>,
}

impl FullExport {
    pub fn from_ledger(ledger: &EnvelopeLedger) -> Self {
        let history = ledger.history().to_vec();

        let metadata = ExportMetadata {
            entry_count: history.len(),
            investment_count: history.iter().filter(|e| e.is_investment()).count(),
            total_balance: ledger.total_balance(),
            earliest_entry: history.iter().map(|e| e.created_at).min().map(|t| t.to_string()),
            latest_entry: history.iter().map(|e| e.created_at).max().map(|t| t.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            balances: *ledger.balances(),
            history,
            metadata,
        }
    }
}

/// Write the full export as pretty JSON
pub fn export_full_json<W: Write>(ledger: &EnvelopeLedger, writer: &mut W) -> LedgerResult<()> {
    let export = FullExport::from_ledger(ledger);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| LedgerError::Export(e.to_string()))
}
