//! Rockefeller ledger - envelope budgeting for đồng
//!
//! Every deposit is split across five fixed envelopes (essentials 50%,
//! savings 20%, self-investment 15%, charity 5%, emergency 10%). Expenses are
//! drawn from a single envelope; investments draw on self-investment first
//! and fall back to the emergency envelope. Each withdrawal is kept in an
//! append-only history and can be deleted, refunding exactly what it drew.
//!
//! # Architecture
//!
//! - `models`: money, envelopes, balances, ledger entries
//! - `services`: the allocation policy, the ledger engine and history queries
//! - `display`: vi-VN currency, amounts in Vietnamese words, text views
//! - `config`: path resolution and user settings
//! - `storage`: atomic JSON persistence of the ledger snapshot
//! - `audit`: append-only JSONL audit trail
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: command handlers for the `rockefeller` binary
//!
//! # Example
//!
//! ```
//! use rockefeller_ledger::models::{EnvelopeName, Money};
//! use rockefeller_ledger::services::EnvelopeLedger;
//!
//! let mut ledger = EnvelopeLedger::new();
//! ledger.deposit(Money::from_dong(1_000_000))?;
//! ledger.withdraw(EnvelopeName::Essentials, Money::from_dong(30_000), "Phở", "Hà Nội")?;
//!
//! assert_eq!(ledger.balances()[EnvelopeName::Essentials], Money::from_dong(470_000));
//! # Ok::<(), rockefeller_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
