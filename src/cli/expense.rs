//! Expense CLI commands

use clap::Subcommand;

use crate::audit::{draw_summary, AuditEntry, EntityType};
use crate::config::Settings;
use crate::display::{format_entry_details, money_to_words};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{EntryId, EnvelopeName, LedgerEntry, Money};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Spend from one envelope
    Add {
        /// Envelope key or label (essentials, savings, selfInvestment, charity, emergency)
        envelope: String,
        /// Amount in đồng, e.g. 30000 or 30_000
        amount: String,
        /// What the money was for
        #[arg(short, long)]
        purpose: String,
        /// Where it was spent
        #[arg(short, long)]
        location: String,
    },
    /// Delete an entry and refund the envelopes it drew from
    Delete {
        /// Entry number as shown by `history` (1 = newest)
        number: usize,
        /// Only delete if the entry still has this ID (e.g. ent-1a2b3c4d)
        #[arg(long)]
        id: Option<String>,
    },
    /// Show one entry in full
    Show {
        /// Entry number as shown by `history` (1 = newest)
        number: usize,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            envelope,
            amount,
            purpose,
            location,
        } => {
            let envelope: EnvelopeName = envelope.parse()?;
            let amount = Money::parse(&amount)?;

            let mut ledger = storage.load_ledger()?;
            let entry = ledger.withdraw(envelope, amount, &purpose, &location)?;
            storage.save_ledger(&ledger)?;
            storage.log_create(
                EntityType::Expense,
                entry.id.to_string(),
                Some(entry.purpose.clone()),
                &entry,
            )?;

            println!("Spent {} from {}", entry.amount, envelope.label());
            if settings.show_amount_in_words {
                println!("  ({})", money_to_words(entry.amount));
            }
            println!(
                "  {} left in {}",
                ledger.balances()[envelope],
                envelope.label()
            );
        }

        ExpenseCommands::Delete { number, id } => {
            let mut ledger = storage.load_ledger()?;
            let position = ledger.position_from_newest(display_index(number)?)?;
            let current = &ledger.history()[position];
            let expected = match id {
                Some(given) => expected_id(current, position, ledger.len(), &given)?,
                None => current.id,
            };
            let removed = ledger.delete_entry_checked(position, &expected)?;
            storage.save_ledger(&ledger)?;

            let mut audit = AuditEntry::delete(
                entity_type(&removed),
                removed.id.to_string(),
                Some(removed.purpose.clone()),
                &removed,
            );
            audit.diff_summary = Some(format!("refunded {}", draw_summary(&removed)));
            storage.log_entry(audit)?;

            println!("Deleted entry: {} ({})", removed.purpose, removed.amount);
            for split in &removed.splits {
                println!("  Refunded {} to {}", split.amount, split.envelope.label());
            }
        }

        ExpenseCommands::Show { number } => {
            let ledger = storage.load_ledger()?;
            let position = ledger.position_from_newest(display_index(number)?)?;
            print!("{}", format_entry_details(&ledger.history()[position]));
        }
    }

    Ok(())
}

/// Convert a 1-based entry number to a newest-first index
fn display_index(number: usize) -> LedgerResult<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| LedgerError::InvalidInput("Entry numbers start at 1".into()))
}

/// Resolve `--id` against the entry currently at `position`
///
/// Accepts a full UUID or the short `ent-xxxxxxxx` form shown by `history`.
/// A short form naming some other entry is a stale position.
fn expected_id(
    current: &LedgerEntry,
    position: usize,
    len: usize,
    given: &str,
) -> LedgerResult<EntryId> {
    let given = given.trim();
    if let Ok(id) = given.parse::<EntryId>() {
        return Ok(id);
    }

    let shown = current.id.to_string();
    let short = shown.strip_prefix("ent-").unwrap_or(&shown);
    if given.eq_ignore_ascii_case(&shown) || given.eq_ignore_ascii_case(short) {
        Ok(current.id)
    } else {
        Err(LedgerError::IndexOutOfRange { position, len })
    }
}

pub(crate) fn entity_type(entry: &LedgerEntry) -> EntityType {
    if entry.is_investment() {
        EntityType::Investment
    } else {
        EntityType::Expense
    }
}
