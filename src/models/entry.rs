//! Ledger entry model
//!
//! One immutable record per successful withdrawal. An entry keeps the
//! per-envelope draws that funded it, so deleting it puts the money back
//! exactly where it came from.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::envelope::EnvelopeName;
use super::ids::EntryId;
use super::investment::{InvestmentDetail, InvestmentKind};
use super::money::Money;
use super::month::MonthKey;

/// vi-VN date-time rendering used for entry timestamps
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %d/%m/%Y";

/// The portion of an entry drawn from one envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub envelope: EnvelopeName,
    pub amount: Money,
}

impl Split {
    pub fn new(envelope: EnvelopeName, amount: Money) -> Self {
        Self { envelope, amount }
    }
}

/// What kind of withdrawal an entry records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EntryKind {
    /// A plain expense against one envelope
    Expense,
    /// An investment, possibly spanning selfInvestment and emergency
    Investment {
        kind: InvestmentKind,
        #[serde(default)]
        detail: InvestmentDetail,
    },
}

/// A recorded withdrawal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: EntryId,

    /// Envelope the withdrawal was made against (first in its cascade)
    pub envelope: EnvelopeName,

    /// Total amount withdrawn
    pub amount: Money,

    /// What the money was for
    pub purpose: String,

    /// Where it was spent; empty for investments
    #[serde(default)]
    pub location: String,

    /// Per-envelope draws; they sum to `amount`
    pub splits: Vec<Split>,

    pub kind: EntryKind,

    /// Local time the entry was recorded
    pub created_at: NaiveDateTime,
}

impl LedgerEntry {
    /// An expense drawn entirely from one envelope
    pub fn expense(
        envelope: EnvelopeName,
        amount: Money,
        purpose: impl Into<String>,
        location: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: EntryId::new(),
            envelope,
            amount,
            purpose: purpose.into(),
            location: location.into(),
            splits: vec![Split::new(envelope, amount)],
            kind: EntryKind::Expense,
            created_at,
        }
    }

    /// An investment funded by the given draws
    pub fn investment(
        envelope: EnvelopeName,
        splits: Vec<Split>,
        kind: InvestmentKind,
        detail: InvestmentDetail,
        purpose: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: EntryId::new(),
            envelope,
            amount: splits.iter().map(|s| s.amount).sum(),
            purpose: purpose.into(),
            location: String::new(),
            splits,
            kind: EntryKind::Investment { kind, detail },
            created_at,
        }
    }

    /// Month this entry is grouped under
    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(&self.created_at)
    }

    /// Timestamp rendered as "HH:MM:SS dd/mm/yyyy"
    pub fn timestamp_display(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn is_investment(&self) -> bool {
        matches!(self.kind, EntryKind::Investment { .. })
    }

    pub fn investment_kind(&self) -> Option<InvestmentKind> {
        match self.kind {
            EntryKind::Investment { kind, .. } => Some(kind),
            EntryKind::Expense => None,
        }
    }

    /// Amount this entry drew from one envelope
    pub fn drawn_from(&self, envelope: EnvelopeName) -> Money {
        self.splits
            .iter()
            .filter(|s| s.envelope == envelope)
            .map(|s| s.amount)
            .sum()
    }

    /// Check the entry's internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_positive() {
            return Err(format!("entry {} has non-positive amount", self.id));
        }
        if self.splits.is_empty() {
            return Err(format!("entry {} has no splits", self.id));
        }
        if self.splits.iter().any(|s| s.amount.is_negative()) {
            return Err(format!("entry {} has a negative split", self.id));
        }
        let total: Money = self.splits.iter().map(|s| s.amount).sum();
        if total != self.amount {
            return Err(format!(
                "entry {} splits total {} but amount is {}",
                self.id, total, self.amount
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_expense_entry() {
        let entry = LedgerEntry::expense(
            EnvelopeName::Essentials,
            Money::from_dong(30_000),
            "food",
            "market",
            at(2026, 10, 18),
        );

        assert_eq!(entry.splits, vec![Split::new(EnvelopeName::Essentials, Money::from_dong(30_000))]);
        assert!(!entry.is_investment());
        assert!(entry.validate().is_ok());
        assert_eq!(entry.timestamp_display(), "14:05:09 18/10/2026");
        assert_eq!(entry.month_key(), MonthKey::new(2026, 10).unwrap());
    }

    #[test]
    fn test_investment_entry_amount_is_split_total() {
        let entry = LedgerEntry::investment(
            EnvelopeName::SelfInvestment,
            vec![
                Split::new(EnvelopeName::SelfInvestment, Money::from_dong(150_000)),
                Split::new(EnvelopeName::Emergency, Money::from_dong(50_000)),
            ],
            InvestmentKind::Gold,
            InvestmentDetail::new(),
            "Vàng",
            at(2026, 1, 2),
        );

        assert_eq!(entry.amount, Money::from_dong(200_000));
        assert_eq!(entry.investment_kind(), Some(InvestmentKind::Gold));
        assert_eq!(entry.drawn_from(EnvelopeName::Emergency), Money::from_dong(50_000));
        assert!(entry.location.is_empty());
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_mismatched_splits() {
        let mut entry = LedgerEntry::expense(
            EnvelopeName::Savings,
            Money::from_dong(10),
            "x",
            "y",
            at(2026, 1, 1),
        );
        entry.amount = Money::from_dong(11);
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_serde_tagging() {
        let entry = LedgerEntry::investment(
            EnvelopeName::SelfInvestment,
            vec![Split::new(EnvelopeName::SelfInvestment, Money::from_dong(1))],
            InvestmentKind::Bitcoin,
            InvestmentDetail::new(),
            "Bitcoin",
            at(2026, 1, 1),
        );
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"]["type"], "investment");
        assert_eq!(json["kind"]["kind"], "bitcoin");

        let back: LedgerEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
