//! CLI command handlers
//!
//! Bridges clap argument parsing with the ledger engine: each handler loads
//! the ledger, applies one operation, saves it and records an audit entry.

pub mod audit;
pub mod expense;
pub mod export;
pub mod invest;
pub mod ledger;

pub use audit::handle_audit;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export, ExportFormat};
pub use invest::{handle_invest, InvestArgs};
pub use ledger::{handle_balance, handle_deposit, handle_history, handle_words, HistoryArgs};
