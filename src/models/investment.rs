//! Investment request model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// Kind-specific investment details, passed through untouched
pub type InvestmentDetail = BTreeMap<String, String>;

/// What an investment buys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentKind {
    Gold,
    Bitcoin,
    SelfInvestment,
}

impl InvestmentKind {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Bitcoin => "bitcoin",
            Self::SelfInvestment => "selfInvestment",
        }
    }

    /// Vietnamese label, used as the default entry purpose
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gold => "Vàng",
            Self::Bitcoin => "Bitcoin",
            Self::SelfInvestment => "Đầu tư bản thân",
        }
    }
}

impl fmt::Display for InvestmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InvestmentKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "gold" | "vàng" => Ok(Self::Gold),
            "bitcoin" | "btc" => Ok(Self::Bitcoin),
            "selfinvestment" | "self" => Ok(Self::SelfInvestment),
            _ => Err(LedgerError::InvalidInput(format!(
                "Unknown investment kind '{}' (expected gold, bitcoin or selfInvestment)",
                s
            ))),
        }
    }
}

/// A request to invest, funded from selfInvestment and then emergency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentRequest {
    pub amount: Money,
    pub kind: InvestmentKind,
    #[serde(default)]
    pub detail: InvestmentDetail,
    /// Free-text description; defaults to the kind's label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InvestmentRequest {
    pub fn new(kind: InvestmentKind, amount: Money) -> Self {
        Self {
            amount,
            kind,
            detail: InvestmentDetail::new(),
            description: None,
        }
    }

    /// Attach one detail field
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.detail.insert(key.into(), value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Description recorded as the entry purpose
    pub fn purpose(&self) -> String {
        match &self.description {
            Some(d) if !d.trim().is_empty() => d.trim().to_string(),
            _ => self.kind.label().to_string(),
        }
    }
}
