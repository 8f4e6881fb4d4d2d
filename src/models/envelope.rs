//! Envelope model
//!
//! The five spending envelopes and the fixed weights each deposit is split by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};

/// Basis points in a whole (100%)
pub const BASIS_POINTS_TOTAL: u32 = 10_000;

/// One of the fixed spending envelopes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnvelopeName {
    /// Day-to-day necessities (50%)
    Essentials,
    /// Mandatory savings (20%)
    Savings,
    /// Education and personal growth (15%)
    SelfInvestment,
    /// Giving (5%)
    Charity,
    /// Flexible reserve (10%)
    Emergency,
}

impl EnvelopeName {
    /// All envelopes in canonical order
    pub const ALL: [EnvelopeName; 5] = [
        EnvelopeName::Essentials,
        EnvelopeName::Savings,
        EnvelopeName::SelfInvestment,
        EnvelopeName::Charity,
        EnvelopeName::Emergency,
    ];

    /// Wire key used in snapshots and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            Self::Essentials => "essentials",
            Self::Savings => "savings",
            Self::SelfInvestment => "selfInvestment",
            Self::Charity => "charity",
            Self::Emergency => "emergency",
        }
    }

    /// Vietnamese label, as stored by the remote finance API
    pub fn label(&self) -> &'static str {
        match self {
            Self::Essentials => "Tiêu dùng thiết yếu",
            Self::Savings => "Tiết kiệm bắt buộc",
            Self::SelfInvestment => "Đầu tư bản thân",
            Self::Charity => "Từ thiện",
            Self::Emergency => "Dự phòng linh hoạt",
        }
    }

    /// Position in [`EnvelopeName::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Essentials => 0,
            Self::Savings => 1,
            Self::SelfInvestment => 2,
            Self::Charity => 3,
            Self::Emergency => 4,
        }
    }
}

impl fmt::Display for EnvelopeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EnvelopeName {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        EnvelopeName::ALL
            .into_iter()
            .find(|e| e.key().to_lowercase() == normalized || e.label() == trimmed)
            .ok_or_else(|| LedgerError::UnknownEnvelope(s.to_string()))
    }
}

/// Fraction of every deposit assigned to each envelope, in basis points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationWeights {
    basis_points: [u32; 5],
}

impl AllocationWeights {
    /// essentials 50%, savings 20%, selfInvestment 15%, charity 5%, emergency 10%
    pub const FIXED: AllocationWeights = AllocationWeights {
        basis_points: [5_000, 2_000, 1_500, 500, 1_000],
    };

    /// Build weights from basis points in canonical envelope order
    ///
    /// Every weight must be non-zero and together they must make exactly 100%.
    pub fn from_basis_points(basis_points: [u32; 5]) -> LedgerResult<Self> {
        if basis_points.iter().any(|bp| *bp == 0) {
            return Err(LedgerError::InvalidInput(
                "Every envelope weight must be greater than zero".into(),
            ));
        }

        let total: u32 = basis_points.iter().sum();
        if total != BASIS_POINTS_TOTAL {
            return Err(LedgerError::InvalidInput(format!(
                "Envelope weights must sum to {} basis points, got {}",
                BASIS_POINTS_TOTAL, total
            )));
        }

        Ok(Self { basis_points })
    }

    /// Weight of an envelope in basis points
    pub fn basis_points(&self, envelope: EnvelopeName) -> u32 {
        self.basis_points[envelope.index()]
    }

    /// Weight of an envelope as a fraction in (0, 1]
    pub fn fraction(&self, envelope: EnvelopeName) -> f64 {
        f64::from(self.basis_points(envelope)) / f64::from(BASIS_POINTS_TOTAL)
    }

    /// Weight as a whole percentage label, e.g. "15%"
    pub fn percent_label(&self, envelope: EnvelopeName) -> String {
        let bp = self.basis_points(envelope);
        if bp % 100 == 0 {
            format!("{}%", bp / 100)
        } else {
            format!("{:.2}%", f64::from(bp) / 100.0)
        }
    }

    /// Iterate over (envelope, basis points) in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (EnvelopeName, u32)> + '_ {
        EnvelopeName::ALL
            .into_iter()
            .map(move |e| (e, self.basis_points(e)))
    }
}

impl Default for AllocationWeights {
    fn default() -> Self {
        Self::FIXED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!("essentials".parse::<EnvelopeName>().unwrap(), EnvelopeName::Essentials);
        assert_eq!(
            "selfInvestment".parse::<EnvelopeName>().unwrap(),
            EnvelopeName::SelfInvestment
        );
        assert_eq!(
            "self-investment".parse::<EnvelopeName>().unwrap(),
            EnvelopeName::SelfInvestment
        );
        assert_eq!("EMERGENCY".parse::<EnvelopeName>().unwrap(), EnvelopeName::Emergency);
    }

    #[test]
    fn test_parse_vietnamese_labels() {
        assert_eq!(
            "Dự phòng linh hoạt".parse::<EnvelopeName>().unwrap(),
            EnvelopeName::Emergency
        );
        assert_eq!("Từ thiện".parse::<EnvelopeName>().unwrap(), EnvelopeName::Charity);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "vacation".parse::<EnvelopeName>().unwrap_err();
        assert!(matches!(err, LedgerError::UnknownEnvelope(ref s) if s == "vacation"));
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&EnvelopeName::SelfInvestment).unwrap();
        assert_eq!(json, "\"selfInvestment\"");
        let back: EnvelopeName = serde_json::from_str("\"charity\"").unwrap();
        assert_eq!(back, EnvelopeName::Charity);
    }

    #[test]
    fn test_fixed_weights_sum_to_one() {
        let total: u32 = AllocationWeights::FIXED.iter().map(|(_, bp)| bp).sum();
        assert_eq!(total, BASIS_POINTS_TOTAL);

        let fractions: f64 = EnvelopeName::ALL
            .iter()
            .map(|e| AllocationWeights::FIXED.fraction(*e))
            .sum();
        assert!((fractions - 1.0).abs() < 1e-12);
        assert_eq!(AllocationWeights::FIXED.fraction(EnvelopeName::Essentials), 0.5);
    }

    #[test]
    fn test_custom_weights_validation() {
        assert!(AllocationWeights::from_basis_points([2_000; 5]).is_ok());
        assert!(AllocationWeights::from_basis_points([5_000, 2_000, 1_500, 500, 999]).is_err());
        assert!(AllocationWeights::from_basis_points([6_000, 2_000, 1_500, 500, 0]).is_err());
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(AllocationWeights::FIXED.percent_label(EnvelopeName::SelfInvestment), "15%");
        let odd = AllocationWeights::from_basis_points([4_950, 2_050, 1_500, 500, 1_000]).unwrap();
        assert_eq!(odd.percent_label(EnvelopeName::Essentials), "49.50%");
    }
}
