//! Money type for representing đồng amounts
//!
//! Internally stores amounts in hundredths of a đồng (i64) so that weighted
//! splits of odd amounts stay exact. Display always rounds to whole đồng.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::{LedgerError, LedgerResult};

/// Minor units per đồng
pub const MINOR_PER_DONG: i64 = 100;

/// Largest magnitude accepted from floating-point or text input
const MAX_INPUT_MINOR: i64 = i64::MAX / 4;

/// A monetary amount stored as hundredths of a đồng
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units (hundredths of a đồng)
    ///
    /// # Examples
    /// ```
    /// use rockefeller_ledger::models::Money;
    /// let amount = Money::from_minor(150); // 1.5 đồng
    /// assert_eq!(amount.minor(), 150);
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole đồng
    ///
    /// # Examples
    /// ```
    /// use rockefeller_ledger::models::Money;
    /// let amount = Money::from_dong(30_000);
    /// assert_eq!(amount.minor(), 3_000_000);
    /// ```
    pub const fn from_dong(dong: i64) -> Self {
        Self(dong * MINOR_PER_DONG)
    }

    /// Convert a floating-point amount, rejecting NaN, infinities and values
    /// too large to represent
    pub fn from_f64(value: f64) -> LedgerResult<Self> {
        if !value.is_finite() {
            return Err(LedgerError::InvalidAmount(format!(
                "{} is not a finite number",
                value
            )));
        }

        let minor = (value * MINOR_PER_DONG as f64).round();
        if minor.abs() > MAX_INPUT_MINOR as f64 {
            return Err(LedgerError::InvalidAmount(format!("{} is too large", value)));
        }

        Ok(Self(minor as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Whole đồng, truncated toward zero
    pub const fn whole_dong(&self) -> i64 {
        self.0 / MINOR_PER_DONG
    }

    /// Whole đồng, rounded half away from zero
    pub const fn rounded_dong(&self) -> i64 {
        let whole = self.0 / MINOR_PER_DONG;
        let rest = self.0 % MINOR_PER_DONG;
        if rest >= MINOR_PER_DONG / 2 {
            whole + 1
        } else if rest <= -MINOR_PER_DONG / 2 {
            whole - 1
        } else {
            whole
        }
    }

    /// Approximate value in đồng as a float (for interop only)
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / MINOR_PER_DONG as f64
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Addition that reports overflow instead of wrapping
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction that reports overflow instead of wrapping
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Addition clamped to the representable range
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "30000", "30000.5", "-5", "30_000", "30,000", "30000đ" and
    /// "30000 ₫". A dot is always the decimal point; at most two fractional
    /// digits are kept.
    pub fn parse(s: &str) -> LedgerResult<Self> {
        let invalid = || LedgerError::InvalidAmount(format!("'{}' is not a valid amount", s));

        let trimmed = s.trim();
        let trimmed = trimmed
            .strip_suffix('₫')
            .or_else(|| trimmed.strip_suffix('đ'))
            .unwrap_or(trimmed)
            .trim_end();

        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let body: String = body.chars().filter(|c| *c != '_' && *c != ',').collect();
        let (whole, fraction) = match body.split_once('.') {
            Some((w, f)) => (w, f),
            None => (body.as_str(), ""),
        };

        if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        if !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let minor = whole
            .checked_mul(MINOR_PER_DONG)
            .and_then(|m| m.checked_add(fraction))
            .filter(|m| *m <= MAX_INPUT_MINOR)
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -minor } else { minor }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::display::format_currency(*self))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dong() {
        let m = Money::from_dong(30_000);
        assert_eq!(m.minor(), 3_000_000);
        assert_eq!(m.whole_dong(), 30_000);
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Money::from_f64(1_000_000.0).unwrap(), Money::from_dong(1_000_000));
        assert_eq!(Money::from_f64(2.5).unwrap().minor(), 250);
        assert_eq!(Money::from_f64(-5.0).unwrap(), Money::from_dong(-5));
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(matches!(
            Money::from_f64(f64::NAN),
            Err(LedgerError::InvalidAmount(_))
        ));
        assert!(Money::from_f64(f64::INFINITY).is_err());
        assert!(Money::from_f64(f64::NEG_INFINITY).is_err());
        assert!(Money::from_f64(1e30).is_err());
    }

    #[test]
    fn test_rounded_dong() {
        assert_eq!(Money::from_minor(150).rounded_dong(), 2);
        assert_eq!(Money::from_minor(149).rounded_dong(), 1);
        assert_eq!(Money::from_minor(-150).rounded_dong(), -2);
        assert_eq!(Money::from_minor(-149).rounded_dong(), -1);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dong(1000);
        let b = Money::from_dong(500);

        assert_eq!(a + b, Money::from_dong(1500));
        assert_eq!(a - b, Money::from_dong(500));
        assert_eq!(-a, Money::from_dong(-1000));
        assert_eq!(a.min(b), b);
        assert!(Money::from_minor(i64::MAX).checked_add(a).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("30000").unwrap(), Money::from_dong(30_000));
        assert_eq!(Money::parse("30_000").unwrap(), Money::from_dong(30_000));
        assert_eq!(Money::parse("1,000,000").unwrap(), Money::from_dong(1_000_000));
        assert_eq!(Money::parse("30000đ").unwrap(), Money::from_dong(30_000));
        assert_eq!(Money::parse("30000 ₫").unwrap(), Money::from_dong(30_000));
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("10.567").unwrap().minor(), 1056);
        assert_eq!(Money::parse("-5").unwrap(), Money::from_dong(-5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "NaN", "12a", "1.2.3", "-", ".5", "99999999999999999999"] {
            assert!(
                matches!(Money::parse(input), Err(LedgerError::InvalidAmount(_))),
                "expected '{}' to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_dong(1), Money::from_dong(2), Money::from_dong(3)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_dong(6));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
