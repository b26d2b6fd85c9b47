//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price amount in the currency's standard unit (e.g. dollars, not cents).
///
/// The whole shop trades in one currency, configured once at startup, so
/// records carry bare amounts and the [`CurrencyCode`] lives in
/// configuration. Serialized as a decimal string to avoid float drift in
/// stored snapshots.
///
/// ## Examples
///
/// ```
/// use lumina_core::Price;
///
/// let unit = Price::from_cents(12_999); // 129.99
/// assert_eq!(unit.times(2), Price::from_cents(25_998));
/// assert_eq!(format!("{unit}"), "129.99");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Scale a unit price by a quantity, yielding the line total.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// Format with a currency symbol, e.g. `"$129.99"`.
    #[must_use]
    pub fn display_with(&self, currency: CurrencyCode) -> String {
        format!("{}{self}", currency.symbol())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The symbol prefixed to displayed amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// The ISO 4217 code as a string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(format!("unknown currency code: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(format!("{}", Price::from_cents(12_999)), "129.99");
        assert_eq!(format!("{}", Price::from_cents(5000)), "50.00");
        assert_eq!(format!("{}", Price::ZERO), "0.00");
    }

    #[test]
    fn test_times_scales_exactly() {
        let unit = Price::from_cents(10_000);
        assert_eq!(unit.times(2), Price::from_cents(20_000));
        assert_eq!(unit.times(0), Price::ZERO);

        // No binary-float drift on awkward amounts.
        let awkward = Price::from_cents(1999);
        assert_eq!(awkward.times(3), Price::from_cents(5997));
    }

    #[test]
    fn test_add_and_sum() {
        let total = Price::from_cents(20_000) + Price::from_cents(5000);
        assert_eq!(total, Price::from_cents(25_000));

        let lines = [
            Price::from_cents(1000),
            Price::from_cents(2500),
            Price::from_cents(499),
        ];
        let sum: Price = lines.into_iter().sum();
        assert_eq!(sum, Price::from_cents(3999));
    }

    #[test]
    fn test_display_with_symbol() {
        let price = Price::from_cents(12_999);
        assert_eq!(price.display_with(CurrencyCode::USD), "$129.99");
        assert_eq!(price.display_with(CurrencyCode::EUR), "\u{20ac}129.99");
    }

    #[test]
    fn test_serde_as_decimal_string() {
        let price = Price::from_cents(12_999);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"129.99\"");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!("GBP".parse::<CurrencyCode>().unwrap(), CurrencyCode::GBP);
        assert!("doubloons".parse::<CurrencyCode>().is_err());
    }
}
