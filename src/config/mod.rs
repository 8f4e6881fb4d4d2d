//! Configuration for the Rockefeller ledger
//!
//! - Platform-aware path resolution for the data directory
//! - User display preferences persisted as JSON

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
