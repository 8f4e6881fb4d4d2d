//! Core data models
//!
//! Envelopes, balances, ledger entries and the money type they are measured in.

pub mod balances;
pub mod entry;
pub mod envelope;
pub mod ids;
pub mod investment;
pub mod money;
pub mod month;
pub mod snapshot;

pub use balances::Balances;
pub use entry::{EntryKind, LedgerEntry, Split};
pub use envelope::{AllocationWeights, EnvelopeName};
pub use ids::EntryId;
pub use investment::{InvestmentDetail, InvestmentKind, InvestmentRequest};
pub use money::Money;
pub use month::MonthKey;
pub use snapshot::LedgerSnapshot;
