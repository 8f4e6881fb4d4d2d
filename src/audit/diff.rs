//! Change summaries for audit logging
//!
//! Typed counterparts of a JSON diff: balances are compared envelope by
//! envelope and entries are summarized by the draws that funded them.

use crate::models::{Balances, LedgerEntry};

/// Describe how the balances changed, one clause per changed envelope
///
/// Returns `None` when nothing changed.
pub fn balance_change_summary(before: &Balances, after: &Balances) -> Option<String> {
    let changes: Vec<String> = before
        .iter()
        .zip(after.iter())
        .filter(|((_, b), (_, a))| b != a)
        .map(|((envelope, b), (_, a))| format!("{}: {} -> {}", envelope, b, a))
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Describe the draws an entry made, e.g. "selfInvestment -150.000 ₫"
pub fn draw_summary(entry: &LedgerEntry) -> String {
    entry
        .splits
        .iter()
        .map(|split| format!("{} -{}", split.envelope, split.amount))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EnvelopeName, InvestmentDetail, InvestmentKind, Money, Split};
    use chrono::NaiveDate;

    #[test]
    fn test_balance_change_summary() {
        let before = Balances::zero();
        let after: Balances = [
            (EnvelopeName::Essentials, Money::from_dong(500_000)),
            (EnvelopeName::Charity, Money::from_dong(50_000)),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            balance_change_summary(&before, &after).unwrap(),
            "essentials: 0\u{a0}₫ -> 500.000\u{a0}₫, charity: 0\u{a0}₫ -> 50.000\u{a0}₫"
        );
    }

    #[test]
    fn test_no_change() {
        let balances = Balances::zero();
        assert!(balance_change_summary(&balances, &balances).is_none());
    }

    #[test]
    fn test_draw_summary() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let entry = LedgerEntry::investment(
            EnvelopeName::SelfInvestment,
            vec![
                Split::new(EnvelopeName::SelfInvestment, Money::from_dong(150_000)),
                Split::new(EnvelopeName::Emergency, Money::from_dong(50_000)),
            ],
            InvestmentKind::Gold,
            InvestmentDetail::new(),
            "Vàng",
            at,
        );

        assert_eq!(
            draw_summary(&entry),
            "selfInvestment -150.000\u{a0}₫, emergency -50.000\u{a0}₫"
        );
    }
}
