//! Audit log CLI command

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit(storage: &Storage, count: usize) -> LedgerResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    println!();
    println!(
        "Showing {} of {} entries from {}",
        entries.len(),
        storage.audit().entry_count()?,
        storage.audit().path().display()
    );

    Ok(())
}
