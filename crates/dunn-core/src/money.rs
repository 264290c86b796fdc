//! # Money Module
//!
//! Provides the `Money` type for handling menu prices and order totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    4.99 + 2.99 = 7.9799999999999995  ❌                                 │
//! │    17.98 * 0.9 = 16.182000000000002  ❌                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    499 + 299 = 798 cents                                               │
//! │    round(1798 * 90%) = round(1618.2) = 1618 cents                      │
//! │    Displayed with two decimals: $16.18                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dunn_core::money::Money;
//!
//! let latte = Money::from_cents(499);
//! let bagel = Money::from_cents(299);
//! assert_eq!((latte + bagel).to_string(), "$7.98");
//! ```
//!
//! ## Serialization
//! Money serializes as a two-decimal string without the symbol (`"7.98"`),
//! so JSON receipts show the same amounts as printed ones.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// Signed so that intermediate arithmetic (discount amounts) never needs a
/// separate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::money::Money;
    ///
    /// let price = Money::from_cents(899); // $8.99
    /// assert_eq!(price.cents(), 899);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a dollar amount typed at a prompt.
    ///
    /// Accepts an optional leading `$`, whole dollars, or up to two decimal
    /// places. Negative amounts are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::money::Money;
    ///
    /// assert_eq!(Money::parse_dollars("3").unwrap().cents(), 300);
    /// assert_eq!(Money::parse_dollars("$4.5").unwrap().cents(), 450);
    /// assert_eq!(Money::parse_dollars("2.99").unwrap().cents(), 299);
    /// assert!(Money::parse_dollars("1.999").is_err());
    /// assert!(Money::parse_dollars("-1").is_err());
    /// assert!(Money::parse_dollars("cheap").is_err());
    /// ```
    pub fn parse_dollars(input: &str) -> Result<Money, ValidationError> {
        let trimmed = input.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: "price".to_string(),
            });
        }

        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let (major_str, minor_str) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, ""),
        };

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(major_str) || !all_digits(minor_str) || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(invalid("must be a non-negative dollar amount like 3.50"));
        }
        if minor_str.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let major: i64 = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse()
                .map_err(|_| invalid("amount is too large"))?
        };
        // "4.5" means 50 cents, not 5
        let minor: i64 = match minor_str.len() {
            0 => 0,
            1 => minor_str.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => minor_str.parse().map_err(|_| invalid("bad cents"))?,
        };

        major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discounted amount is rounded half-up to the nearest cent, so a
    /// total landing on a half cent goes up ($19.95 at 10% off is $17.96).
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (1000 = 10%)
    ///
    /// ## Example
    /// ```rust
    /// use dunn_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(1798); // $17.98
    /// let discounted = subtotal.apply_percentage_discount(1000); // 10% off
    /// assert_eq!(discounted.cents(), 1618); // $16.182 → $16.18
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        let kept_bps = 10000 - discount_bps.min(10000) as i128;
        Money::from_cents(((self.0 as i128 * kept_bps + 5000) / 10000) as i64)
    }

    /// Two-decimal amount without the currency symbol: `7.98`, `-5.50`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$D.CC`, the format used on menus and receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (negative, digits) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.as_str()),
        };
        let amount = Money::parse_dollars(digits).map_err(de::Error::custom)?;
        Ok(if negative { Money(-amount.0) } else { amount })
    }
}

/// Lets order subtotals be written as `prices.sum()`.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
