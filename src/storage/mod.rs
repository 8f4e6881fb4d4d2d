//! Storage layer
//!
//! JSON file storage with atomic writes, plus the audit trail. The ledger
//! engine never touches the filesystem; `Storage` loads it, saves it and
//! records what changed.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use snapshot::SnapshotRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::services::EnvelopeLedger;

/// Coordinates the snapshot repository and the audit log
pub struct Storage {
    paths: LedgerPaths,
    pub snapshots: SnapshotRepository,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Open storage under the given paths, creating directories as needed
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            snapshots: SnapshotRepository::new(paths.ledger_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load the ledger; empty before the first save
    pub fn load_ledger(&self) -> LedgerResult<EnvelopeLedger> {
        EnvelopeLedger::from_snapshot(self.snapshots.load()?)
    }

    pub fn save_ledger(&self, ledger: &EnvelopeLedger) -> LedgerResult<()> {
        self.snapshots.save(&ledger.snapshot())
    }

    pub fn is_initialized(&self) -> bool {
        self.snapshots.exists()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        self.log_entry(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> LedgerResult<()> {
        self.log_entry(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> LedgerResult<()> {
        self.log_entry(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Append a prepared entry unless auditing is off
    pub fn log_entry(&self, entry: AuditEntry) -> LedgerResult<()> {
        if self.audit_enabled {
            self.audit.log(&entry)
        } else {
            Ok(())
        }
    }
}
