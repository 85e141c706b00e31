//! Prices and totals.
//!
//! Amounts are integer minor units. Catalog files carry decimal prices and
//! are converted once, on load, with [`Money::try_from_decimal`]. Cart
//! arithmetic saturates instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};

/// Largest decimal amount a catalog or config file may state.
pub const MAX_DECIMAL_AMOUNT: f64 = 1e12;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Every supported currency, in the order the settings screen lists them.
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CAD,
    ];

    /// ISO code, also the config file spelling.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Prefix used by [`Money::display`].
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Long name shown in the currency picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::USD => "US Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound",
            Currency::JPY => "Japanese Yen",
            Currency::CAD => "Canadian Dollar",
        }
    }

    /// Minor units per major unit: 0 decimals for yen, 2 otherwise.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An amount in one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Minor units (cents; whole yen for JPY).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Convert a decimal price, rounding to the nearest minor unit.
    ///
    /// ```
    /// use shophub_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(199.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 19999);
    /// ```
    ///
    /// Amounts outside the `i64` range saturate. File input goes through
    /// [`Money::try_from_decimal`].
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_cents = (amount * multiplier as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Convert a decimal price read from a file.
    ///
    /// Returns `None` for NaN, infinities, negative amounts and anything
    /// above [`MAX_DECIMAL_AMOUNT`].
    ///
    /// ```
    /// use shophub_commerce::money::{Money, Currency};
    /// assert!(Money::try_from_decimal(1e30, Currency::USD).is_none());
    /// assert!(Money::try_from_decimal(-0.001, Currency::USD).is_none());
    /// ```
    pub fn try_from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() || !(0.0..=MAX_DECIMAL_AMOUNT).contains(&amount) {
            return None;
        }
        Some(Self::from_decimal(amount, currency))
    }

    /// The largest amount [`Money::try_from_decimal`] accepts in `currency`.
    pub fn max_for(currency: Currency) -> Self {
        Self::from_decimal(MAX_DECIMAL_AMOUNT, currency)
    }

    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Symbol plus amount with the currency's decimals, e.g. "$49.99".
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_i64.pow(places) as f64;
        format!(
            "{}{:.*}",
            self.currency.symbol(),
            places as usize,
            self.amount_cents as f64 / divisor
        )
    }

    /// Whole-number percentage saved relative to `original`, if any.
    ///
    /// Returns `None` unless `original` is strictly greater than `self`.
    pub fn percent_off(&self, original: &Money) -> Option<u8> {
        if original.currency != self.currency || original.amount_cents <= self.amount_cents {
            return None;
        }
        let savings = (original.amount_cents - self.amount_cents) as f64;
        let percent = (savings / original.amount_cents as f64 * 100.0).round();
        Some(percent.clamp(0.0, 100.0) as u8)
    }

    /// Sum in `currency`; an empty iterator gives zero.
    pub fn sum(iter: impl Iterator<Item = Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + m)
    }
}

impl Add for Money {
    type Output = Money;

    /// # Panics
    /// Panics if currencies differ. A `Catalog` only holds one currency, so
    /// cart arithmetic never mixes them.
    fn add(self, other: Money) -> Money {
        assert!(
            self.currency == other.currency,
            "currency mismatch: {} + {}",
            self.currency,
            other.currency
        );
        Money::new(
            self.amount_cents.saturating_add(other.amount_cents),
            self.currency,
        )
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money::new(
            self.amount_cents.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
