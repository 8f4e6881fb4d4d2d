//! CSV export of the withdrawal history
//!
//! One row per entry, oldest first. Amounts are whole-đồng figures without
//! grouping so spreadsheets read them as numbers.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{EnvelopeName, LedgerEntry};
use crate::services::EnvelopeLedger;

const HEADER: [&str; 10] = [
    "ID",
    "Time",
    "Envelope",
    "Type",
    "Purpose",
    "Location",
    "Amount",
    "From Self Investment",
    "From Emergency",
    "Detail",
];

/// Write the history as CSV
pub fn export_history_csv<W: Write>(ledger: &EnvelopeLedger, writer: W) -> LedgerResult<()> {
    let mut csv = ::csv::Writer::from_writer(writer);

    csv.write_record(HEADER).map_err(export_error)?;
    for entry in ledger.history() {
        csv.write_record(row(entry)).map_err(export_error)?;
    }

    csv.flush().map_err(|e| LedgerError::Export(e.to_string()))
}

fn row(entry: &LedgerEntry) -> Vec<String> {
    let kind = match entry.investment_kind() {
        Some(kind) => kind.key().to_string(),
        None => "expense".to_string(),
    };

    let detail = match &entry.kind {
        crate::models::EntryKind::Investment { detail, .. } => detail
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("; "),
        crate::models::EntryKind::Expense => String::new(),
    };

    vec![
        entry.id.as_uuid().to_string(),
        entry.timestamp_display(),
        entry.envelope.key().to_string(),
        kind,
        entry.purpose.clone(),
        entry.location.clone(),
        entry.amount.whole_dong().to_string(),
        entry.drawn_from(EnvelopeName::SelfInvestment).whole_dong().to_string(),
        entry.drawn_from(EnvelopeName::Emergency).whole_dong().to_string(),
        detail,
    ]
}

fn export_error(e: ::csv::Error) -> LedgerError {
    LedgerError::Export(e.to_string())
}
