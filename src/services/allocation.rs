//! Allocation policy
//!
//! Splits a deposit across the envelopes by weight using the largest
//! remainder method, so the parts always add back up to the deposit.

use crate::error::{LedgerError, LedgerResult};
use crate::models::envelope::BASIS_POINTS_TOTAL;
use crate::models::{AllocationWeights, Balances, EnvelopeName, Money};

/// Maps an inflow to a per-envelope delta
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationPolicy {
    weights: AllocationWeights,
}

impl AllocationPolicy {
    /// Create a policy with custom (already validated) weights
    pub fn new(weights: AllocationWeights) -> Self {
        Self { weights }
    }

    /// The policy's weights
    pub fn weights(&self) -> &AllocationWeights {
        &self.weights
    }

    /// Split a deposit into per-envelope deltas
    ///
    /// Each envelope gets `amount * weight` rounded down to a minor unit; the
    /// leftover minor units go one each to the envelopes with the largest
    /// discarded fractions (ties in envelope order).
    pub fn allocate(&self, amount: Money) -> LedgerResult<Balances> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(format!(
                "Deposit must be positive, got {}",
                amount
            )));
        }

        let total = i128::from(amount.minor());
        let denominator = i128::from(BASIS_POINTS_TOTAL);

        let mut shares: Vec<(EnvelopeName, i128, i128)> = self
            .weights
            .iter()
            .map(|(envelope, bp)| {
                let exact = total * i128::from(bp);
                (envelope, exact / denominator, exact % denominator)
            })
            .collect();

        let allocated: i128 = shares.iter().map(|(_, base, _)| base).sum();
        let mut leftover = total - allocated;

        // Stable sort keeps envelope order among equal remainders
        let mut order: Vec<usize> = (0..shares.len()).collect();
        order.sort_by(|a, b| shares[*b].2.cmp(&shares[*a].2));
        for i in order {
            if leftover == 0 {
                break;
            }
            shares[i].1 += 1;
            leftover -= 1;
        }

        // Each share is at most `total`, which came from an i64
        Ok(shares
            .into_iter()
            .map(|(envelope, minor, _)| (envelope, Money::from_minor(minor as i64)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_one_million() {
        let deltas = AllocationPolicy::default()
            .allocate(Money::from_dong(1_000_000))
            .unwrap();

        assert_eq!(deltas[EnvelopeName::Essentials], Money::from_dong(500_000));
        assert_eq!(deltas[EnvelopeName::Savings], Money::from_dong(200_000));
        assert_eq!(deltas[EnvelopeName::SelfInvestment], Money::from_dong(150_000));
        assert_eq!(deltas[EnvelopeName::Charity], Money::from_dong(50_000));
        assert_eq!(deltas[EnvelopeName::Emergency], Money::from_dong(100_000));
    }

    #[test]
    fn test_allocate_odd_amount_is_exact() {
        // 0.07 đồng: 3.5 / 1.4 / 1.05 / 0.35 / 0.7 minor units
        let deltas = AllocationPolicy::default()
            .allocate(Money::from_minor(7))
            .unwrap();

        assert_eq!(deltas.total(), Money::from_minor(7));
        assert_eq!(deltas[EnvelopeName::Essentials], Money::from_minor(4));
        assert_eq!(deltas[EnvelopeName::Savings], Money::from_minor(1));
        assert_eq!(deltas[EnvelopeName::SelfInvestment], Money::from_minor(1));
        assert_eq!(deltas[EnvelopeName::Charity], Money::from_minor(0));
        assert_eq!(deltas[EnvelopeName::Emergency], Money::from_minor(1));
    }

    #[test]
    fn test_allocate_rejects_non_positive() {
        let policy = AllocationPolicy::default();
        assert!(matches!(
            policy.allocate(Money::zero()),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(policy.allocate(Money::from_dong(-10)).is_err());
    }

    #[test]
    fn test_custom_weights() {
        let weights = AllocationWeights::from_basis_points([2_000; 5]).unwrap();
        let deltas = AllocationPolicy::new(weights)
            .allocate(Money::from_minor(3))
            .unwrap();

        // 0.6 each; the three leftover units go to the first three envelopes
        assert_eq!(deltas[EnvelopeName::Essentials], Money::from_minor(1));
        assert_eq!(deltas[EnvelopeName::Savings], Money::from_minor(1));
        assert_eq!(deltas[EnvelopeName::SelfInvestment], Money::from_minor(1));
        assert_eq!(deltas[EnvelopeName::Charity], Money::zero());
        assert_eq!(deltas.total(), Money::from_minor(3));
    }
}
