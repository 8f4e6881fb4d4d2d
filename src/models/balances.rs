//! Per-envelope balances
//!
//! Serialized with one camelCase key per envelope. Values are integer
//! hundredths of a đồng, like every [`Money`] on the wire, so a store that
//! keeps whole đồng must multiply by 100 before handing a snapshot over.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::envelope::EnvelopeName;
use super::money::Money;

/// One amount per envelope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    #[serde(default)]
    essentials: Money,
    #[serde(default)]
    savings: Money,
    #[serde(default)]
    self_investment: Money,
    #[serde(default)]
    charity: Money,
    #[serde(default)]
    emergency: Money,
}

impl Balances {
    /// All envelopes at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Amount held by an envelope
    pub fn get(&self, envelope: EnvelopeName) -> Money {
        self[envelope]
    }

    /// Mutable access, reserved for the ledger and allocation policy
    pub(crate) fn get_mut(&mut self, envelope: EnvelopeName) -> &mut Money {
        match envelope {
            EnvelopeName::Essentials => &mut self.essentials,
            EnvelopeName::Savings => &mut self.savings,
            EnvelopeName::SelfInvestment => &mut self.self_investment,
            EnvelopeName::Charity => &mut self.charity,
            EnvelopeName::Emergency => &mut self.emergency,
        }
    }

    /// Iterate over (envelope, amount) in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (EnvelopeName, Money)> + '_ {
        EnvelopeName::ALL.into_iter().map(move |e| (e, self[e]))
    }

    /// Sum across all envelopes, clamped to the representable range
    ///
    /// Exact for every ledger's balances, which keep their total
    /// representable.
    pub fn total(&self) -> Money {
        self.iter()
            .fold(Money::zero(), |acc, (_, amount)| acc.saturating_add(amount))
    }

    /// Sum across all envelopes, or `None` if it does not fit in a [`Money`]
    pub fn checked_total(&self) -> Option<Money> {
        self.iter()
            .try_fold(Money::zero(), |acc, (_, amount)| acc.checked_add(amount))
    }

    /// First envelope holding a negative amount, if any
    pub fn first_negative(&self) -> Option<(EnvelopeName, Money)> {
        self.iter().find(|(_, amount)| amount.is_negative())
    }
}

impl Index<EnvelopeName> for Balances {
    type Output = Money;

    fn index(&self, envelope: EnvelopeName) -> &Money {
        match envelope {
            EnvelopeName::Essentials => &self.essentials,
            EnvelopeName::Savings => &self.savings,
            EnvelopeName::SelfInvestment => &self.self_investment,
            EnvelopeName::Charity => &self.charity,
            EnvelopeName::Emergency => &self.emergency,
        }
    }
}

impl FromIterator<(EnvelopeName, Money)> for Balances {
    /// Later pairs for the same envelope replace earlier ones
    fn from_iter<I: IntoIterator<Item = (EnvelopeName, Money)>>(iter: I) -> Self {
        let mut balances = Balances::zero();
        for (envelope, amount) in iter {
            *balances.get_mut(envelope) = amount;
        }
        balances
    }
}
