//! Monetary amounts with precise decimal arithmetic
//!
//! This module provides a type-safe representation of rupee amounts
//! using rust_decimal for precise calculations without floating-point errors.
//! The ledger works in a single currency, so unlike a multi-currency money
//! type there is no currency tag; the invariant carried here instead is
//! non-negativity, which every amount in the system satisfies.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use thiserror::Error;

/// Errors that can occur when constructing or combining amounts
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Negative amount: {0}")]
    Negative(Decimal),

    #[error("Invalid amount: {0}")]
    Invalid(String),

    #[error("Overflow during calculation")]
    Overflow,
}

/// A non-negative monetary amount in whole rupee units
///
/// Amounts are stored as decimals for precise summation. Every constructor
/// rejects negative values, so sums of amounts are always well-defined.
/// On the wire an amount is a plain JSON number, matching the statement
/// payloads the dashboard exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole-rupee amounts are the norm; anything else falls back to the
        // decimal's string form rather than a lossy float
        match self.0.to_u64() {
            Some(value) if self.0.is_integer() => serializer.serialize_u64(value),
            _ => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl Amount {
    /// Creates an amount, rejecting negative values
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        Ok(Self(value))
    }

    /// Creates an amount from whole rupees
    pub fn rupees(rupees: u64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Returns the underlying decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition that reports overflow instead of panicking
    pub fn checked_add(&self, other: &Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Checked subtraction; fails if the result would be negative
    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, AmountError> {
        let result = self
            .0
            .checked_sub(other.0)
            .ok_or(AmountError::Overflow)?;
        Amount::new(result)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(&other)
            .expect("Overflow in Amount::add")
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}
