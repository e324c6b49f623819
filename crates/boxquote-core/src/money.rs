//! # Money Module
//!
//! Provides the `Money` type for ringgit amounts read from the price tables.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing spreadsheet prices as f64:                                     │
//! │    120.10 + 35.20 = 155.29999999999998  ❌                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer sen                                              │
//! │    12010 + 3520 = 15530 → "155.30"  ✅                                  │
//! │                                                                         │
//! │  Price cells are parsed straight from text into sen, never via f64.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxquote_core::money::Money;
//!
//! let printing: Money = "120.00".parse().unwrap();
//! let discount = Money::from_major(150);
//! assert_eq!((printing - discount).to_string(), "-30.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in sen (1/100 ringgit).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts can push a total below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from sen.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole ringgit.
    ///
    /// ## Example
    /// ```rust
    /// use boxquote_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(250).cents(), 25_000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in sen.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-ringgit portion (truncated toward zero).
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the sen portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that returns `None` instead of wrapping.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Subtraction that returns `None` instead of wrapping.
    #[inline]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Text that is not a two-decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid amount: '{0}'")]
pub struct ParseMoneyError(pub String);

/// Parses spreadsheet amounts.
///
/// ## Accepted Forms
/// ```text
/// "120"      → 120.00
/// "120.5"    → 120.50
/// "1,200.00" → 1200.00   (thousands separators are ignored)
/// "-150.00"  → -150.00
/// " 35.20 "  → 35.20     (surrounding whitespace is ignored)
///
/// "12.345", "RM12", "", "abc" → ParseMoneyError
/// ```
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError(s.to_string());

        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let digits: String = unsigned.chars().filter(|c| *c != ',').collect();

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(err());
        }
        if fraction.len() > 2 {
            return Err(err());
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(err());
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| err())?
        };
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| err())? * 10,
            _ => fraction.parse().map_err(|_| err())?,
        };

        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(err)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Two-decimal form without currency, e.g. `120.00`, `-30.50`.
///
/// The quotation renderer adds the `RM` prefix itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.major().abs(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major() {
        let money = Money::from_major(250);
        assert_eq!(money.cents(), 25_000);
        assert_eq!(money.major(), 250);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(12000).to_string(), "120.00");
        assert_eq!(Money::from_cents(505).to_string(), "5.05");
        assert_eq!(Money::from_cents(-3050).to_string(), "-30.50");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        assert_eq!("120".parse::<Money>().unwrap().cents(), 12000);
        assert_eq!("120.5".parse::<Money>().unwrap().cents(), 12050);
        assert_eq!("120.05".parse::<Money>().unwrap().cents(), 12005);
        assert_eq!("1,200.00".parse::<Money>().unwrap().cents(), 120_000);
        assert_eq!("-150.00".parse::<Money>().unwrap().cents(), -15000);
        assert_eq!(" 35.20 ".parse::<Money>().unwrap().cents(), 3520);
        assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
    }

    #[test]
    fn test_parse_rejected_forms() {
        assert!("".parse::<Money>().is_err());
        assert!("-".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("RM12".parse::<Money>().is_err());
        assert!("not available".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
    }

    #[test]
    fn test_decimal_sum_is_exact() {
        let a: Money = "120.10".parse().unwrap();
        let b: Money = "35.20".parse().unwrap();
        assert_eq!((a + b).to_string(), "155.30");
    }

    #[test]
    fn test_arithmetic() {
        let mut total = Money::from_major(100);
        total += Money::from_cents(50);
        total -= Money::from_major(150);
        assert_eq!(total.cents(), -4950);
        assert!(total.is_negative());
        assert_eq!((-total).cents(), 4950);
    }

    #[test]
    fn test_checked_arithmetic() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!(big.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(big.checked_add(Money::from_cents(2)), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_major(100).checked_sub(Money::from_major(150)),
            Some(Money::from_major(-50))
        );
    }
}
