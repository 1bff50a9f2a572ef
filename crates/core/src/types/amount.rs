//! Monetary amounts exchanged with the commerce API.
//!
//! Amounts use decimal arithmetic internally but travel over the wire as
//! plain JSON numbers: whole amounts as integers (`500`), fractional ones as
//! floats (`19.99`).

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize, Serializer};

/// An order or cart amount in the store currency's standard unit.
///
/// Negative values are representable; enforcing non-negative amounts is left
/// to the commerce API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(transparent)]
pub struct Amount(#[serde(deserialize_with = "rust_decimal::serde::float::deserialize")] Decimal);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create an amount from minor units (e.g., cents).
    #[must_use]
    pub fn from_minor_units(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let normalized = self.0.normalize();
        match normalized.to_i64().filter(|_| normalized.scale() == 0) {
            Some(whole) => serializer.serialize_i64(whole),
            None => rust_decimal::serde::float::serialize(&self.0, serializer),
        }
    }
}

impl From<Decimal> for Amount {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<u32> for Amount {
    fn from(amount: u32) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
