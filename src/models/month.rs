//! Calendar month key for grouping history
//!
//! Ordering is by (year, month) so keys sort chronologically regardless of
//! how they are rendered.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// A calendar month of a given year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMonthKey")]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
struct RawMonthKey {
    year: i32,
    month: u32,
}

impl TryFrom<RawMonthKey> for MonthKey {
    type Error = LedgerError;

    fn try_from(raw: RawMonthKey) -> Result<Self, Self::Error> {
        MonthKey::new(raw.year, raw.month).ok_or_else(|| {
            LedgerError::InvalidInput(format!("Month {} is not between 1 and 12", raw.month))
        })
    }
}

impl MonthKey {
    /// Create a month key; `month` is 1-based
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month a timestamp falls in
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }

    /// Sortable "YYYY-MM" form, the one accepted on the command line
    pub fn iso(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

impl fmt::Display for MonthKey {
    /// vi-VN long month with year, e.g. "tháng 10 năm 2026"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tháng {} năm {}", self.month, self.year)
    }
}

impl FromStr for MonthKey {
    type Err = LedgerError;

    /// Accepts "2026-10" or "10/2026"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LedgerError::InvalidInput(format!("'{}' is not a month (use YYYY-MM)", s));
        let s = s.trim();

        let (year, month) = if let Some((y, m)) = s.split_once('-') {
            (y, m)
        } else if let Some((m, y)) = s.split_once('/') {
            (y, m)
        } else {
            return Err(invalid());
        };

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        MonthKey::new(year, month).ok_or_else(invalid)
    }
}
