//! Custom error types for the ledger
//!
//! Engine failures are classified so callers can react to each kind
//! (re-prompt for an amount, pick another envelope, refresh a stale index).
//! Ambient failures from storage, configuration and export share the same enum.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Non-positive, non-finite, non-numeric or out-of-range amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A required free-text field is missing or malformed
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Envelope name outside the fixed set
    #[error("Unknown envelope: {0}")]
    UnknownEnvelope(String),

    /// Withdrawal or investment exceeds the available balance(s)
    #[error("Insufficient funds in '{envelope}': need {needed}, have {available}")]
    InsufficientFunds {
        envelope: String,
        needed: Money,
        available: Money,
    },

    /// Deletion of a history position that does not exist
    #[error("History position {position} out of range (history has {len} entries)")]
    IndexOutOfRange { position: usize, len: usize },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create an insufficient funds error for a single envelope or a cascade
    pub fn insufficient(envelope: impl Into<String>, needed: Money, available: Money) -> Self {
        Self::InsufficientFunds {
            envelope: envelope.into(),
            needed,
            available,
        }
    }

    /// Check if this is an insufficient funds error
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }

    /// Check if this error was caused by bad caller input rather than state
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_) | Self::InvalidInput(_) | Self::UnknownEnvelope(_)
        )
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
