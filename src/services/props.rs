//! Property-based tests for the envelope ledger.
//!
//! - Conservation: balances equal deposits minus live withdrawals
//! - Allocation sums exactly to the deposit
//! - No operation sequence leaves a negative balance
//! - Deleting an entry restores the balances it drew from

use proptest::prelude::*;

use super::allocation::AllocationPolicy;
use super::cascade::{invest_split, Available};
use super::ledger::EnvelopeLedger;
use crate::models::{
    AllocationWeights, EnvelopeName, InvestmentKind, InvestmentRequest, Money,
};

/// Strategy for positive amounts (0.01 to 10,000,000.00 đồng).
fn positive_amount() -> impl Strategy<Value = Money> {
    (1i64..1_000_000_000i64).prop_map(Money::from_minor)
}

fn envelope() -> impl Strategy<Value = EnvelopeName> {
    (0usize..EnvelopeName::ALL.len()).prop_map(|i| EnvelopeName::ALL[i])
}

/// Strategy for basis-point weights with no zero entry that sum to 10,000.
fn weights() -> impl Strategy<Value = AllocationWeights> {
    prop::collection::vec(1u32..1_000, 4).prop_map(|mut parts| {
        let used: u32 = parts.iter().sum();
        parts.push(10_000 - used);
        let mut basis_points = [0u32; 5];
        basis_points.copy_from_slice(&parts);
        AllocationWeights::from_basis_points(basis_points)
            .expect("generated weights are valid")
    })
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(Money),
    Withdraw(EnvelopeName, Money),
    Invest(Money),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        positive_amount().prop_map(Op::Deposit),
        (envelope(), positive_amount()).prop_map(|(e, m)| Op::Withdraw(e, m)),
        positive_amount().prop_map(Op::Invest),
        (0usize..20).prop_map(Op::Delete),
    ]
}

/// Apply an operation; returns the deposit amount for deposits that succeed
fn apply(ledger: &mut EnvelopeLedger, op: &Op) -> Money {
    match op {
        Op::Deposit(amount) => {
            ledger.deposit(*amount).expect("positive deposit succeeds");
            *amount
        }
        Op::Withdraw(envelope, amount) => {
            let _ = ledger.withdraw(*envelope, *amount, "purchase", "shop");
            Money::zero()
        }
        Op::Invest(amount) => {
            let _ = ledger.invest(InvestmentRequest::new(InvestmentKind::Gold, *amount));
            Money::zero()
        }
        Op::Delete(position) => {
            let _ = ledger.delete_entry(*position);
            Money::zero()
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Allocation sum: *for any* deposit and weights, the per-envelope
    /// deltas SHALL add up to exactly the deposit.
    #[test]
    fn prop_allocation_sums_to_deposit(
        amount in positive_amount(),
        weights in weights(),
    ) {
        let deltas = AllocationPolicy::new(weights).allocate(amount).unwrap();
        prop_assert_eq!(deltas.total(), amount);
        prop_assert!(deltas.first_negative().is_none());
    }

    /// Conservation: *for any* operation sequence, the total balance SHALL
    /// equal deposits minus the amounts of entries still in the history.
    #[test]
    fn prop_conservation(ops in prop::collection::vec(op(), 1..40)) {
        let mut ledger = EnvelopeLedger::new();
        let mut deposited = Money::zero();

        for op in &ops {
            deposited += apply(&mut ledger, op);
        }

        let live: Money = ledger.history().iter().map(|e| e.amount).sum();
        prop_assert_eq!(ledger.total_balance(), deposited - live);
    }

    /// Non-negativity: *for any* operation sequence, no envelope SHALL hold
    /// a negative balance.
    #[test]
    fn prop_balances_never_negative(ops in prop::collection::vec(op(), 1..40)) {
        let mut ledger = EnvelopeLedger::new();
        for op in &ops {
            apply(&mut ledger, op);
            prop_assert!(
                ledger.balances().first_negative().is_none(),
                "negative balance after {:?}",
                op
            );
        }
    }

    /// Delete/restore symmetry: withdrawing then deleting the new entry SHALL
    /// leave the balances exactly as they were.
    #[test]
    fn prop_delete_restores_withdrawal(
        deposit in positive_amount(),
        envelope in envelope(),
        amount in positive_amount(),
        invest in any::<bool>(),
    ) {
        let mut ledger = EnvelopeLedger::new();
        ledger.deposit(deposit).unwrap();
        let before = *ledger.balances();

        let result = if invest {
            ledger.invest(InvestmentRequest::new(InvestmentKind::Bitcoin, amount))
        } else {
            ledger.withdraw(envelope, amount, "purchase", "shop")
        };

        match result {
            Ok(_) => {
                ledger.delete_entry(ledger.len() - 1).unwrap();
                prop_assert_eq!(*ledger.balances(), before);
            }
            Err(err) => {
                prop_assert!(err.is_insufficient_funds());
                prop_assert_eq!(*ledger.balances(), before);
            }
        }
        prop_assert!(ledger.history().is_empty());
    }

    /// Cascading: the split SHALL drain selfInvestment before emergency and
    /// account for every minor unit of the amount.
    #[test]
    fn prop_invest_split_accounts_for_amount(
        self_investment in 0i64..1_000_000,
        emergency in 0i64..1_000_000,
        amount in 1i64..3_000_000,
    ) {
        let available = Available::new(Money::from_minor(self_investment), Money::from_minor(emergency));
        let split = invest_split(available, Money::from_minor(amount));

        prop_assert_eq!(
            split.deduct_self + split.deduct_emergency + split.remainder_unfunded,
            Money::from_minor(amount)
        );
        prop_assert!(split.deduct_self <= available.self_investment);
        prop_assert!(split.deduct_emergency <= available.emergency);
        if split.deduct_emergency.is_positive() {
            prop_assert_eq!(split.deduct_self, available.self_investment);
        }
    }
}
