//! Prices in the smallest currency unit.
//!
//! The catalog never mixes currencies, so a price is just a non-negative count of
//! cents. Storing integers keeps price comparisons total, which the sort engine
//! relies on, and keeps bracket edges exact (`20.00` is never `19.999...`).

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units, e.g. `Price::from_units(20)` is `20.00`.
    pub const fn from_units(units: u64) -> Self {
        Self(units * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Convert a JSON-style floating point amount (`24.9`) into cents.
    pub fn from_f64(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number, got {amount}"
            )));
        }
        Ok(Self((amount * 100.0).round() as u64))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Line total for `quantity` units.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// The amount taken off by a percentage discount, rounded to the nearest cent.
    pub fn percent(self, percent: u8) -> Self {
        Self((self.0 * u64::from(percent) + 50) / 100)
    }

    pub fn saturating_sub(self, other: Price) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    /// Parses decimal strings as the backend sends them (`"24.90"`, `"24.9"`, `"24"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DomainError::validation(format!("invalid price: {s:?}"));

        let (units, fraction) = match s.split_once('.') {
            Some((units, fraction)) => (units, fraction),
            None => (s, ""),
        };
        if units.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits(units) || !digits(fraction) {
            return Err(invalid());
        }

        // Sub-cent digits are only accepted when they carry no value ("24.900").
        let (cents_digits, rest) = fraction.split_at(fraction.len().min(2));
        if rest.bytes().any(|b| b != b'0') {
            return Err(invalid());
        }

        let units: u64 = if units.is_empty() { 0 } else { units.parse().map_err(|_| invalid())? };
        let cents: u64 = match cents_digits.len() {
            0 => 0,
            1 => cents_digits.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => cents_digits.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Price)
            .ok_or_else(invalid)
    }
}
