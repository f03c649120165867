//! Money type for representing currency amounts
//!
//! Internally stores amounts in pence (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as pence (hundredths of a pound)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from pence
    ///
    /// # Examples
    /// ```
    /// use growbank::models::Money;
    /// let amount = Money::from_pence(1050); // £10.50
    /// assert_eq!(amount.to_string(), "£10.50");
    /// ```
    pub const fn from_pence(pence: i64) -> Self {
        Self(pence)
    }

    /// Create a Money amount from whole pounds
    pub const fn from_pounds(pounds: i64) -> Self {
        Self(pounds * 100)
    }

    /// Create a Money amount from pounds and pence
    pub const fn from_pounds_pence(pounds: i64, pence: i64) -> Self {
        Self(pounds * 100 + pence)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in pence
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Get the whole pounds portion (truncated toward zero)
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Get the pence portion (0-99)
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
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

    /// This amount as a percentage of `whole`, or 0 when `whole` is not positive
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_positive() {
            self.0 as f64 / whole.0 as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "£10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('£').unwrap_or(s);

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (pounds_str, pence_str) = match s.split_once('.') {
            Some((pounds, pence)) => (pounds, Some(pence)),
            None => (s, None),
        };

        let pounds = parse_digits(pounds_str, s)?;

        // The fraction must be exactly one or two ASCII digits
        let pence = match pence_str {
            None => 0,
            Some(fraction) => {
                let digits = parse_digits(fraction, s)?;
                match fraction.len() {
                    1 => digits * 10,
                    2 => digits,
                    _ => return Err(invalid()),
                }
            }
        };

        let pence = pounds
            .checked_mul(100)
            .and_then(|p| p.checked_add(pence))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -pence } else { pence }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.pounds().abs(), self.pence_part())
        } else {
            format!("{}{}.{:02}", symbol, self.pounds(), self.pence_part())
        }
    }
}

/// Only ASCII digits are accepted, so "+5" or "1e3" are rejected
fn parse_digits(digits: &str, original: &str) -> Result<i64, MoneyParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MoneyParseError::InvalidFormat(original.to_string()));
    }
    digits
        .parse()
        .map_err(|_| MoneyParseError::InvalidFormat(original.to_string()))
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("£"))
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

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let m = Money::from_pence(1050);
        assert_eq!(m.pence(), 1050);
        assert_eq!(m.pounds(), 10);
        assert_eq!(m.pence_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pence(24550).to_string(), "£245.50");
        assert_eq!(Money::from_pence(0).to_string(), "£0.00");
        assert_eq!(Money::from_pence(-750).to_string(), "-£7.50");
        assert_eq!(Money::from_pence(5).to_string(), "£0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().pence(), 1050);
        assert_eq!(Money::parse("£10.50").unwrap().pence(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().pence(), -1050);
        assert_eq!(Money::parse("10").unwrap().pence(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().pence(), 1050);
        assert_eq!(Money::parse(" 0.05 ").unwrap().pence(), 5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in [
            "", "abc", "1.2.3", "1e3", "+5", ".", "10.x", "10.", "1.5£", "1.50£", "10.509",
            "£", "1£.50", "99999999999999999", "92233720368547758.07",
        ] {
            assert!(Money::parse(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_percent_of() {
        let saved = Money::from_pounds(150);
        assert!((saved.percent_of(Money::from_pounds(600)) - 25.0).abs() < f64::EPSILON);
        assert_eq!(saved.percent_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_pounds(10);
        let b = Money::from_pence(250);
        assert_eq!((a - b).pence(), 750);
        assert_eq!((-a).pence(), -1000);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_pounds(15));
    }
}
