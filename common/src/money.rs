//! [`Price`]-related definitions.

use std::{fmt, iter::Sum, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};
use serde::{Deserialize, Serialize};

/// Non-negative, currency-agnostic amount of money.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(into = "Decimal", try_from = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A zero [`Price`].
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Price`] by checking the provided `amount` is not
    /// negative.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        (amount >= Decimal::ZERO).then_some(Self(amount))
    }

    /// Creates a new [`Price`] without performing any validation.
    ///
    /// # Safety
    ///
    /// The provided `amount` must not be negative.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the [`Decimal`] amount of this [`Price`].
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self(amount) = self;
        if amount.is_integer() {
            write!(f, "{}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}")
        }
    }
}

impl FromStr for Price {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid `Price`")
    }
}

impl TryFrom<Decimal> for Price {
    type Error = &'static str;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount).ok_or("`Price` cannot be negative")
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Sum<Price> for Decimal {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.map(Price::amount).sum()
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Price;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Price::from_str("15000").unwrap(),
            Price::new(decimal("15000")).unwrap(),
        );
        assert_eq!(
            Price::from_str("123.45").unwrap(),
            Price::new(decimal("123.45")).unwrap(),
        );
        assert_eq!(Price::from_str("0").unwrap(), Price::ZERO);

        assert!(Price::from_str("-1").is_err());
        assert!(Price::from_str("-0.01").is_err());
        assert!(Price::from_str("12 000").is_err());
        assert!(Price::from_str("").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Price::new(decimal("123.45")).unwrap().to_string(), "123.45");
        assert_eq!(Price::new(decimal("123.0")).unwrap().to_string(), "123");
        assert_eq!(Price::new(decimal("123")).unwrap().to_string(), "123");
        assert_eq!(Price::ZERO.to_string(), "0");
    }

    #[test]
    fn sums_into_decimal() {
        let total = [15_000, 20_000, 25_000]
            .into_iter()
            .map(|p| Price::new(Decimal::from(p)).unwrap())
            .sum::<Decimal>();

        assert_eq!(total, decimal("60000"));
    }
}
