//! Audit logging for the ledger
//!
//! Every change to the ledger is recorded in an append-only JSONL file with
//! its before/after state.
//!
//! - `AuditEntry`: one operation with timestamp, entity information and the
//!   affected state.
//! - `AuditLogger`: appends entries to the log and reads them back.
//! - `balance_change_summary` / `draw_summary`: short human-readable change
//!   descriptions.
//!
//! # Example
//!
//! ```rust,ignore
//! use rockefeller_ledger::audit::{balance_change_summary, AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(audit_log_path);
//! let entry = AuditEntry::update(
//!     EntityType::Balances,
//!     "balances",
//!     None,
//!     &before,
//!     &after,
//!     balance_change_summary(&before, &after),
//! );
//! logger.log(&entry)?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::{balance_change_summary, draw_summary};
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
