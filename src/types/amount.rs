use crate::formatting::format_currency;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A newtype wrapper for money amounts stored in cents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Create a new Amount from a number of cents
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    /// Get the raw value in cents
    #[inline]
    pub fn cents(&self) -> i64 {
        self.0
    }

    /// Format as currency string (e.g., "$1,234.56")
    pub fn to_formatted_string(&self) -> String {
        format_currency(self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_formatted_string())
    }
}

impl From<i64> for Amount {
    fn from(cents: i64) -> Self {
        Amount(cents)
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::default(), Add::add)
    }
}
