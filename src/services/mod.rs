//! Service layer for the Rockefeller ledger
//!
//! The engine lives here: the allocation policy, the envelope ledger with
//! its cascading withdrawals, and read-only history queries. Nothing in this
//! layer touches the filesystem; callers persist the returned state.

pub mod allocation;
pub mod cascade;
pub mod history;
pub mod ledger;

#[cfg(test)]
mod props;

pub use allocation::AllocationPolicy;
pub use cascade::{apply_investment, invest_split, Available, Cascade, CascadePlan, InvestSplit};
pub use history::{HistoryFilter, HistoryPage};
pub use ledger::EnvelopeLedger;
