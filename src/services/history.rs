//! History queries
//!
//! Read-only views over a ledger's withdrawal history: filtering, month
//! listings, pagination and recent spending per envelope. Everything here is
//! presented newest first.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Balances, EnvelopeName, LedgerEntry, Money, MonthKey};

use super::ledger::EnvelopeLedger;

/// Filter options for history queries
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Smallest amount to include
    pub min_amount: Option<Money>,
    /// Largest amount to include
    pub max_amount: Option<Money>,
    /// Case-insensitive substring of the purpose
    pub purpose: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Envelope the entry was filed under
    pub envelope: Option<EnvelopeName>,
    /// Calendar month of the entry
    pub month: Option<MonthKey>,
}

impl HistoryFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_amount(mut self, amount: Money) -> Self {
        self.min_amount = Some(amount);
        self
    }

    pub fn max_amount(mut self, amount: Money) -> Self {
        self.max_amount = Some(amount);
        self
    }

    /// Filter by purpose text
    pub fn purpose(mut self, text: impl Into<String>) -> Self {
        self.purpose = Some(text.into());
        self
    }

    /// Filter by location text
    pub fn location(mut self, text: impl Into<String>) -> Self {
        self.location = Some(text.into());
        self
    }

    pub fn envelope(mut self, envelope: EnvelopeName) -> Self {
        self.envelope = Some(envelope);
        self
    }

    pub fn month(mut self, month: MonthKey) -> Self {
        self.month = Some(month);
        self
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.min_amount.is_none()
            && self.max_amount.is_none()
            && self.purpose.is_none()
            && self.location.is_none()
            && self.envelope.is_none()
            && self.month.is_none()
    }

    /// Check an entry against every set criterion
    pub fn matches(&self, entry: &LedgerEntry) -> bool {
        if self.min_amount.is_some_and(|min| entry.amount < min) {
            return false;
        }
        if self.max_amount.is_some_and(|max| entry.amount > max) {
            return false;
        }
        if self.envelope.is_some_and(|e| entry.envelope != e) {
            return false;
        }
        if self.month.is_some_and(|m| entry.month_key() != m) {
            return false;
        }
        if let Some(text) = &self.purpose {
            if !contains_ignore_case(&entry.purpose, text) {
                return false;
            }
        }
        if let Some(text) = &self.location {
            if !contains_ignore_case(&entry.location, text) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// One page of newest-first history
#[derive(Debug, Clone)]
pub struct HistoryPage<'a> {
    /// Entries on this page, newest first
    pub entries: Vec<&'a LedgerEntry>,
    /// 1-based page number
    pub page: usize,
    pub total_pages: usize,
    pub total_entries: usize,
}

impl HistoryPage<'_> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

impl EnvelopeLedger {
    /// Entries matching a filter, newest first
    pub fn search(&self, filter: &HistoryFilter) -> Vec<&LedgerEntry> {
        self.recent().filter(|e| filter.matches(e)).collect()
    }

    /// Like [`EnvelopeLedger::search`], paired with each entry's newest-first
    /// index in the unfiltered history
    pub fn search_indexed(&self, filter: &HistoryFilter) -> Vec<(usize, &LedgerEntry)> {
        self.recent()
            .enumerate()
            .filter(|(_, e)| filter.matches(e))
            .collect()
    }

    /// Months that have at least one entry, newest first
    pub fn available_months(&self) -> Vec<MonthKey> {
        self.group_by_month().into_keys().rev().collect()
    }

    /// A 1-based page of the newest-first history
    pub fn page(&self, page: usize, per_page: usize) -> LedgerResult<HistoryPage<'_>> {
        if page == 0 || per_page == 0 {
            return Err(LedgerError::InvalidInput(
                "Page number and page size start at 1".into(),
            ));
        }

        let total_entries = self.len();
        let total_pages = total_entries.div_ceil(per_page);
        let entries = self
            .recent()
            .skip((page - 1).saturating_mul(per_page))
            .take(per_page)
            .collect();

        Ok(HistoryPage {
            entries,
            page,
            total_pages,
            total_entries,
        })
    }

    /// Spending per envelope over the `last_n` most recent entries
    ///
    /// Investments count against each envelope they drew from.
    pub fn spending_by_envelope(&self, last_n: usize) -> Balances {
        let mut totals = Balances::zero();
        for entry in self.recent().take(last_n) {
            for split in &entry.splits {
                let slot = totals.get_mut(split.envelope);
                *slot = slot.saturating_add(split.amount);
            }
        }
        totals
    }

    /// Convert a newest-first display index into an insertion position
    pub fn position_from_newest(&self, display_index: usize) -> LedgerResult<usize> {
        let len = self.len();
        if display_index >= len {
            return Err(LedgerError::IndexOutOfRange {
                position: display_index,
                len,
            });
        }
        Ok(len - 1 - display_index)
    }
}
