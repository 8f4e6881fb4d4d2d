//! Ledger snapshot exchanged with the store of record

use serde::{Deserialize, Serialize};

use super::balances::Balances;
use super::entry::LedgerEntry;

/// Balances plus insertion-ordered history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub balances: Balances,
    #[serde(default)]
    pub history: Vec<LedgerEntry>,
}

impl LedgerSnapshot {
    pub fn new(balances: Balances, history: Vec<LedgerEntry>) -> Self {
        Self { balances, history }
    }
}
