//! Money type for menu prices and totals.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in price arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Currencies a menu can be priced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a whole number of currency units.
    ///
    /// ```
    /// use tavolo_menu::money::{Currency, Money};
    /// let price = Money::from_units(14, Currency::USD);
    /// assert_eq!(price.amount_cents, 1400);
    /// ```
    pub const fn from_units(units: i64, currency: Currency) -> Self {
        Self::new(units * 100, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value (display only).
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_cents + other.amount_cents,
            self.currency,
        ))
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Multiply by a scalar quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor, self.currency)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_units() {
        let m = Money::from_units(14, Currency::USD);
        assert_eq!(m.amount_cents, 1400);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4850, Currency::USD);
        assert_eq!(m.display(), "$48.50");

        let m = Money::from_units(8, Currency::GBP);
        assert_eq!(m.display(), "\u{00a3}8.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1400, Currency::USD);
        let b = Money::new(4800, Currency::USD);
        assert_eq!((a + b).amount_cents, 6200);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::from_units(48, Currency::USD);
        assert_eq!(m.multiply(2).amount_cents, 9600);
        assert_eq!((m * 3).amount_cents, 14400);
    }

    #[test]
    fn test_money_sum() {
        let prices = [
            Money::from_units(14, Currency::USD),
            Money::from_units(48, Currency::USD),
        ];
        let total = Money::sum(prices.iter(), Currency::USD);
        assert_eq!(total.amount_cents, 6200);
    }

    #[test]
    fn test_money_sum_empty() {
        let prices: [Money; 0] = [];
        let total = Money::sum(prices.iter(), Currency::USD);
        assert!(total.is_zero());
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let eur = Money::new(1000, Currency::EUR);
        assert_eq!(usd.try_add(&eur), None);
    }
}
