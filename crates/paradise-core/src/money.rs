//! # Money
//!
//! Prices and totals as whole cents.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Spider Plant, quantity 5                                               │
//! │                                                                         │
//! │    as f64:   14.99 * 5.0  = 74.94999999999999                           │
//! │    as cents: 1499  * 5    = 7495  ──► "$74.95"                          │
//! │                                                                         │
//! │  Cents stay integers until the very last step (Display or               │
//! │  ConfigState::format_money in the terminal app).                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use paradise_core::money::Money;
//!
//! let snake_plant = Money::from_cents(2999);
//! assert_eq!((snake_plant * 2).cents(), 5998);
//!
//! let total: Money = [snake_plant, Money::from_cents(1999)].into_iter().sum();
//! assert_eq!(total.to_string(), "$49.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

/// Cents per dollar.
const MINOR_PER_MAJOR: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in cents.
///
/// Serializes as the bare integer (`2999`), so JSON consumers never see a
/// float.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds an amount from dollars and cents, e.g. `(24, 99)` for $24.99.
    ///
    /// `cents` is added away from zero, so `(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(dollars: i64, cents: i64) -> Self {
        let cents = if dollars < 0 { -cents } else { cents };
        Money(dollars * MINOR_PER_MAJOR + cents)
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Unit price times quantity.
    ///
    /// ## Example
    /// ```rust
    /// use paradise_core::money::Money;
    ///
    /// let spider_plant = Money::from_cents(1499);
    /// assert_eq!(spider_plant.multiply_quantity(5).cents(), 7495);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed USD rendering: `$59.98`, `-$5.50`.
///
/// The terminal app formats through `ConfigState::format_money` instead so
/// the symbol can be configured.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let minor = MINOR_PER_MAJOR.unsigned_abs();

        if self.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "${}.{:02}", abs / minor, abs % minor)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(19, 99).cents(), 1999);
        assert_eq!(Money::from_major_minor(0, 5).cents(), 5);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(5998).to_string(), "$59.98");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_add_and_mul() {
        let aloe = Money::from_cents(1999);
        let lavender = Money::from_cents(2499);

        assert_eq!((aloe + lavender).cents(), 4498);
        assert_eq!((lavender * 3).cents(), 7497);

        let mut running = Money::default();
        running += aloe;
        running += lavender;
        assert_eq!(running, aloe + lavender);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
        assert!(!total.is_negative());
    }

    #[test]
    fn test_multiply_quantity_is_exact() {
        let line_total = Money::from_cents(1499).multiply_quantity(5);
        assert_eq!(line_total.to_string(), "$74.95");
    }
}
