//! Envelope ledger
//!
//! Owns the per-envelope balances and the append-only withdrawal history.
//! Every operation either applies completely or leaves the ledger untouched:
//! changes are computed on a copy of the balances and swapped in only once
//! they are known to be valid.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime, Timelike};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    Balances, EntryId, EnvelopeName, InvestmentRequest, LedgerEntry, LedgerSnapshot, Money,
    MonthKey, Split,
};

use super::allocation::AllocationPolicy;
use super::cascade::{apply_investment, Cascade};

/// Balances plus withdrawal history for one account
#[derive(Debug, Clone, Default)]
pub struct EnvelopeLedger {
    balances: Balances,
    history: Vec<LedgerEntry>,
    policy: AllocationPolicy,
}

impl EnvelopeLedger {
    /// An empty ledger using the fixed allocation weights
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty ledger with a custom allocation policy
    pub fn with_policy(policy: AllocationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Resume from a snapshot supplied by the store of record
    ///
    /// Rejects negative balances, a total too large to represent, and
    /// entries whose splits don't add up.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> LedgerResult<Self> {
        if let Some((envelope, amount)) = snapshot.balances.first_negative() {
            return Err(LedgerError::InvalidAmount(format!(
                "Snapshot balance for '{}' is negative ({})",
                envelope, amount
            )));
        }
        if snapshot.balances.checked_total().is_none() {
            return Err(LedgerError::InvalidAmount(
                "Snapshot balances overflow their total".into(),
            ));
        }

        for entry in &snapshot.history {
            entry.validate().map_err(LedgerError::InvalidAmount)?;
        }

        Ok(Self {
            balances: snapshot.balances,
            history: snapshot.history,
            policy: AllocationPolicy::default(),
        })
    }

    /// Copy of the current state, for persisting
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::new(self.balances, self.history.clone())
    }

    pub fn balances(&self) -> &Balances {
        &self.balances
    }

    /// History in insertion (chronological) order
    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    /// History newest first
    pub fn recent(&self) -> impl Iterator<Item = &LedgerEntry> + '_ {
        self.history.iter().rev()
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn policy(&self) -> &AllocationPolicy {
        &self.policy
    }

    /// Sum of all envelope balances
    pub fn total_balance(&self) -> Money {
        self.balances.total()
    }

    /// Split a deposit across the envelopes and add it to the balances
    ///
    /// Deposits are not recorded in the history. A deposit that would push
    /// any balance, or the total, past the representable range is refused.
    pub fn deposit(&mut self, amount: Money) -> LedgerResult<Balances> {
        let deltas = self.policy.allocate(amount)?;

        let mut updated = self.balances;
        for (envelope, delta) in deltas.iter() {
            let slot = updated.get_mut(envelope);
            *slot = slot.checked_add(delta).ok_or_else(|| {
                LedgerError::InvalidAmount(format!(
                    "Deposit of {} overflows the '{}' balance",
                    amount, envelope
                ))
            })?;
        }
        if updated.checked_total().is_none() {
            return Err(LedgerError::InvalidAmount(format!(
                "Deposit of {} overflows the total balance",
                amount
            )));
        }

        self.balances = updated;
        Ok(self.balances)
    }

    /// Spend from a single envelope
    pub fn withdraw(
        &mut self,
        envelope: EnvelopeName,
        amount: Money,
        purpose: &str,
        location: &str,
    ) -> LedgerResult<LedgerEntry> {
        ensure_positive(amount, "Withdrawal")?;
        let purpose = required_text(purpose, "purpose")?;
        let location = required_text(location, "location")?;

        self.withdraw_through(&Cascade::single(envelope), amount, |envelope, _, at| {
            LedgerEntry::expense(envelope, amount, purpose, location, at)
        })
    }

    /// Spend from an envelope given by name
    pub fn withdraw_by_name(
        &mut self,
        envelope: &str,
        amount: Money,
        purpose: &str,
        location: &str,
    ) -> LedgerResult<LedgerEntry> {
        let envelope: EnvelopeName = envelope.parse()?;
        self.withdraw(envelope, amount, purpose, location)
    }

    /// Invest, drawing on selfInvestment then emergency
    pub fn invest(&mut self, request: InvestmentRequest) -> LedgerResult<LedgerEntry> {
        apply_investment(self, request)
    }

    /// Withdraw through a cascade, recording one entry built by `build`
    ///
    /// `build` receives the cascade's primary envelope, the planned draws and
    /// the capture time.
    pub(crate) fn withdraw_through<F>(
        &mut self,
        cascade: &Cascade,
        amount: Money,
        build: F,
    ) -> LedgerResult<LedgerEntry>
    where
        F: FnOnce(EnvelopeName, Vec<Split>, NaiveDateTime) -> LedgerEntry,
    {
        ensure_positive(amount, "Withdrawal")?;

        let plan = cascade.plan(&self.balances, amount);
        if !plan.is_funded() {
            return Err(LedgerError::insufficient(
                cascade.describe(),
                amount,
                cascade.available(&self.balances),
            ));
        }

        let entry = build(cascade.primary(), plan.draws, now());
        self.commit(entry)
    }

    /// Apply an entry's draws and append it
    fn commit(&mut self, entry: LedgerEntry) -> LedgerResult<LedgerEntry> {
        entry.validate().map_err(LedgerError::InvalidAmount)?;

        let mut updated = self.balances;
        for split in &entry.splits {
            let available = updated[split.envelope];
            if available < split.amount {
                return Err(LedgerError::insufficient(
                    split.envelope.key(),
                    split.amount,
                    available,
                ));
            }
            *updated.get_mut(split.envelope) -= split.amount;
        }

        self.balances = updated;
        self.history.push(entry.clone());
        Ok(entry)
    }

    /// Remove the entry at an insertion-order position and refund its draws
    ///
    /// Returns the removed entry.
    pub fn delete_entry(&mut self, position: usize) -> LedgerResult<LedgerEntry> {
        let entry = self
            .history
            .get(position)
            .ok_or(LedgerError::IndexOutOfRange {
                position,
                len: self.history.len(),
            })?;

        let mut restored = self.balances;
        for split in &entry.splits {
            let slot = restored.get_mut(split.envelope);
            *slot = slot.checked_add(split.amount).ok_or_else(|| {
                LedgerError::InvalidAmount(format!(
                    "Refund of {} overflows the '{}' balance",
                    split.amount, split.envelope
                ))
            })?;
        }
        if restored.checked_total().is_none() {
            return Err(LedgerError::InvalidAmount(format!(
                "Refund of {} overflows the total balance",
                entry.amount
            )));
        }

        self.balances = restored;
        Ok(self.history.remove(position))
    }

    /// Like [`EnvelopeLedger::delete_entry`], but only if the entry at
    /// `position` is still the one identified by `expected`
    ///
    /// A position gone stale because the history shifted fails with
    /// `IndexOutOfRange` and leaves the ledger untouched, so repeating a
    /// delete never removes a second entry.
    pub fn delete_entry_checked(
        &mut self,
        position: usize,
        expected: &EntryId,
    ) -> LedgerResult<LedgerEntry> {
        match self.history.get(position) {
            Some(entry) if entry.id == *expected => self.delete_entry(position),
            _ => Err(LedgerError::IndexOutOfRange {
                position,
                len: self.history.len(),
            }),
        }
    }

    /// Entries grouped by calendar month, oldest month first
    ///
    /// Within a month entries keep their ledger order.
    pub fn group_by_month(&self) -> BTreeMap<MonthKey, Vec<&LedgerEntry>> {
        let mut groups: BTreeMap<MonthKey, Vec<&LedgerEntry>> = BTreeMap::new();
        for entry in &self.history {
            groups.entry(entry.month_key()).or_default().push(entry);
        }
        groups
    }
}

fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

fn ensure_positive(amount: Money, what: &str) -> LedgerResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidAmount(format!(
            "{} amount must be positive, got {}",
            what, amount
        )))
    }
}

fn required_text(value: &str, field: &str) -> LedgerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(LedgerError::InvalidInput(format!("{} is required", field)))
    } else {
        Ok(trimmed.to_string())
    }
}
