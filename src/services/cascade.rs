//! Cascading withdrawals
//!
//! A cascade draws from an ordered list of envelopes: as much as possible
//! from the first, the rest from the next, and so on. A plain expense is a
//! one-envelope cascade; an investment draws from selfInvestment and spills
//! into emergency.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Balances, EnvelopeName, InvestmentRequest, LedgerEntry, Money, Split};

use super::ledger::EnvelopeLedger;

/// Ordered envelopes a withdrawal may draw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    order: Vec<EnvelopeName>,
}

/// How a cascade would fund an amount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadePlan {
    /// Non-zero draws in cascade order
    pub draws: Vec<Split>,
    /// Part of the amount no envelope could cover
    pub unfunded: Money,
}

impl CascadePlan {
    pub fn is_funded(&self) -> bool {
        self.unfunded.is_zero()
    }

    /// Amount the plan draws from one envelope
    pub fn drawn(&self, envelope: EnvelopeName) -> Money {
        self.draws
            .iter()
            .filter(|d| d.envelope == envelope)
            .map(|d| d.amount)
            .sum()
    }
}

impl Cascade {
    /// Build a cascade; envelopes must be non-empty and distinct
    pub fn new(order: Vec<EnvelopeName>) -> LedgerResult<Self> {
        if order.is_empty() {
            return Err(LedgerError::InvalidInput("A cascade needs at least one envelope".into()));
        }
        for (i, envelope) in order.iter().enumerate() {
            if order[..i].contains(envelope) {
                return Err(LedgerError::InvalidInput(format!(
                    "Envelope '{}' appears twice in cascade",
                    envelope
                )));
            }
        }
        Ok(Self { order })
    }

    /// Draw from one envelope only
    pub fn single(envelope: EnvelopeName) -> Self {
        Self {
            order: vec![envelope],
        }
    }

    /// selfInvestment first, then emergency
    pub fn investment() -> Self {
        Self {
            order: vec![EnvelopeName::SelfInvestment, EnvelopeName::Emergency],
        }
    }

    pub fn envelopes(&self) -> &[EnvelopeName] {
        &self.order
    }

    /// Envelope an entry made through this cascade is filed under
    pub fn primary(&self) -> EnvelopeName {
        self.order[0]
    }

    /// Total the cascade could draw from the given balances
    pub fn available(&self, balances: &Balances) -> Money {
        self.order
            .iter()
            .map(|e| balances[*e].max(Money::zero()))
            .sum()
    }

    /// Envelope names joined for messages, e.g. "selfInvestment, emergency"
    pub fn describe(&self) -> String {
        self.order
            .iter()
            .map(|e| e.key())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Work out the draws for an amount without touching any balance
    ///
    /// Never draws more than an envelope holds. A non-positive amount yields
    /// an empty, fully funded plan.
    pub fn plan(&self, balances: &Balances, amount: Money) -> CascadePlan {
        let mut remaining = amount.max(Money::zero());
        let mut draws = Vec::new();

        for envelope in &self.order {
            if remaining.is_zero() {
                break;
            }
            let take = balances[*envelope].max(Money::zero()).min(remaining);
            if take.is_positive() {
                draws.push(Split::new(*envelope, take));
                remaining -= take;
            }
        }

        CascadePlan {
            draws,
            unfunded: remaining,
        }
    }
}

/// Balances an investment can draw on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Available {
    pub self_investment: Money,
    pub emergency: Money,
}

impl Available {
    pub fn new(self_investment: Money, emergency: Money) -> Self {
        Self {
            self_investment,
            emergency,
        }
    }

    pub fn from_balances(balances: &Balances) -> Self {
        Self {
            self_investment: balances[EnvelopeName::SelfInvestment],
            emergency: balances[EnvelopeName::Emergency],
        }
    }

    fn to_balances(self) -> Balances {
        [
            (EnvelopeName::SelfInvestment, self.self_investment),
            (EnvelopeName::Emergency, self.emergency),
        ]
        .into_iter()
        .collect()
    }
}

/// How an investment amount divides between the two envelopes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvestSplit {
    pub deduct_self: Money,
    pub deduct_emergency: Money,
    pub remainder_unfunded: Money,
}

/// Split an investment: selfInvestment first, the shortfall from emergency
pub fn invest_split(available: Available, amount: Money) -> InvestSplit {
    let plan = Cascade::investment().plan(&available.to_balances(), amount);
    InvestSplit {
        deduct_self: plan.drawn(EnvelopeName::SelfInvestment),
        deduct_emergency: plan.drawn(EnvelopeName::Emergency),
        remainder_unfunded: plan.unfunded,
    }
}

/// Record an investment against the ledger as one withdrawal
///
/// Rejected with `InsufficientFunds` when selfInvestment and emergency
/// together cannot cover the amount; nothing changes in that case.
pub fn apply_investment(
    ledger: &mut EnvelopeLedger,
    request: InvestmentRequest,
) -> LedgerResult<LedgerEntry> {
    let purpose = request.purpose();
    let InvestmentRequest {
        amount,
        kind,
        detail,
        ..
    } = request;

    ledger.withdraw_through(&Cascade::investment(), amount, |envelope, splits, at| {
        LedgerEntry::investment(envelope, splits, kind, detail, purpose, at)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvestmentKind;

    #[test]
    fn test_invest_split_within_self_investment() {
        let split = invest_split(
            Available::new(Money::from_dong(100), Money::from_dong(50)),
            Money::from_dong(80),
        );
        assert_eq!(split.deduct_self, Money::from_dong(80));
        assert_eq!(split.deduct_emergency, Money::zero());
        assert_eq!(split.remainder_unfunded, Money::zero());
    }

    #[test]
    fn test_invest_split_spills_into_emergency() {
        let split = invest_split(
            Available::new(Money::from_dong(100), Money::from_dong(50)),
            Money::from_dong(120),
        );
        assert_eq!(split.deduct_self, Money::from_dong(100));
        assert_eq!(split.deduct_emergency, Money::from_dong(20));
        assert_eq!(split.remainder_unfunded, Money::zero());
    }

    #[test]
    fn test_invest_split_reports_unfunded() {
        let split = invest_split(
            Available::new(Money::from_dong(100), Money::from_dong(50)),
            Money::from_dong(200),
        );
        assert_eq!(split.deduct_self, Money::from_dong(100));
        assert_eq!(split.deduct_emergency, Money::from_dong(50));
        assert_eq!(split.remainder_unfunded, Money::from_dong(50));
    }

    #[test]
    fn test_invest_split_with_empty_self_investment() {
        let split = invest_split(
            Available::new(Money::zero(), Money::from_dong(50)),
            Money::from_dong(30),
        );
        assert_eq!(split.deduct_self, Money::zero());
        assert_eq!(split.deduct_emergency, Money::from_dong(30));
    }

    #[test]
    fn test_cascade_validation() {
        assert!(Cascade::new(vec![]).is_err());
        assert!(Cascade::new(vec![EnvelopeName::Savings, EnvelopeName::Savings]).is_err());
        let cascade = Cascade::new(vec![EnvelopeName::Savings, EnvelopeName::Charity]).unwrap();
        assert_eq!(cascade.primary(), EnvelopeName::Savings);
        assert_eq!(cascade.describe(), "savings, charity");
    }

    #[test]
    fn test_single_cascade_plan() {
        let balances: Balances = [(EnvelopeName::Essentials, Money::from_dong(10))]
            .into_iter()
            .collect();
        let cascade = Cascade::single(EnvelopeName::Essentials);

        let plan = cascade.plan(&balances, Money::from_dong(4));
        assert!(plan.is_funded());
        assert_eq!(plan.draws, vec![Split::new(EnvelopeName::Essentials, Money::from_dong(4))]);

        let plan = cascade.plan(&balances, Money::from_dong(15));
        assert_eq!(plan.unfunded, Money::from_dong(5));
    }

    #[test]
    fn test_apply_investment_scenario() {
        let mut ledger = EnvelopeLedger::new();
        ledger.deposit(Money::from_dong(1_000_000)).unwrap();

        let request = InvestmentRequest::new(InvestmentKind::Gold, Money::from_dong(200_000))
            .with_detail("goldType", "24K");
        let entry = apply_investment(&mut ledger, request).unwrap();

        assert_eq!(ledger.balances()[EnvelopeName::SelfInvestment], Money::zero());
        assert_eq!(ledger.balances()[EnvelopeName::Emergency], Money::from_dong(50_000));
        assert_eq!(entry.investment_kind(), Some(InvestmentKind::Gold));
        assert_eq!(entry.envelope, EnvelopeName::SelfInvestment);
        assert_eq!(entry.drawn_from(EnvelopeName::SelfInvestment), Money::from_dong(150_000));
        assert_eq!(entry.drawn_from(EnvelopeName::Emergency), Money::from_dong(50_000));
        assert_eq!(entry.purpose, "Vàng");
        assert_eq!(ledger.history().len(), 1);
    }

    #[test]
    fn test_apply_investment_rejects_unfunded() {
        let mut ledger = EnvelopeLedger::new();
        ledger.deposit(Money::from_dong(1_000_000)).unwrap();
        let before = *ledger.balances();

        let request = InvestmentRequest::new(InvestmentKind::Bitcoin, Money::from_dong(250_001));
        let err = apply_investment(&mut ledger, request).unwrap_err();

        assert!(err.is_insufficient_funds());
        assert_eq!(*ledger.balances(), before);
        assert!(ledger.history().is_empty());
    }

    #[test]
    fn test_apply_investment_rejects_non_positive() {
        let mut ledger = EnvelopeLedger::new();
        let request = InvestmentRequest::new(InvestmentKind::SelfInvestment, Money::zero());
        assert!(matches!(
            apply_investment(&mut ledger, request),
            Err(LedgerError::InvalidAmount(_))
        ));
    }
}
