//! Snapshot repository
//!
//! Loads and saves the ledger snapshot in data/ledger.json.

use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::models::LedgerSnapshot;

use super::file_io::{read_json, write_json_atomic};

/// Persistence for the balances and history snapshot
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The stored snapshot, or an empty one before the first save
    pub fn load(&self) -> LedgerResult<LedgerSnapshot> {
        read_json(&self.path)
    }

    pub fn save(&self, snapshot: &LedgerSnapshot) -> LedgerResult<()> {
        write_json_atomic(&self.path, snapshot)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::EnvelopeLedger;
    use crate::models::{EnvelopeName, Money};
    use tempfile::TempDir;

    #[test]
    fn test_empty_before_first_save() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SnapshotRepository::new(temp_dir.path().join("ledger.json"));

        assert!(!repo.exists());
        assert_eq!(repo.load().unwrap(), LedgerSnapshot::default());
    }

    #[test]
    fn test_save_and_load_ledger_state() {
        let temp_dir = TempDir::new().unwrap();
        let repo = SnapshotRepository::new(temp_dir.path().join("data").join("ledger.json"));

        let mut ledger = EnvelopeLedger::new();
        ledger.deposit(Money::from_dong(1_000_000)).unwrap();
        ledger
            .withdraw(EnvelopeName::Essentials, Money::from_dong(30_000), "Phở", "Hà Nội")
            .unwrap();

        repo.save(&ledger.snapshot()).unwrap();
        let loaded = repo.load().unwrap();

        assert_eq!(loaded, ledger.snapshot());
        assert_eq!(loaded.history[0].purpose, "Phở");
    }
}
