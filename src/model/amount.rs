//! Amount type for handling monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal`. Amounts are persisted as JSON
//! numbers, except for values that an `f64` cannot hold exactly, which are persisted as decimal
//! strings. Values that were stored as strings, optionally with a dollar sign and commas, are
//! accepted when reading.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Represents an amount of money in currency units.
///
/// Equality and ordering are numeric, so `5` and `5.00` are the same amount. Addition saturates at
/// the largest representable amount instead of overflowing.
///
/// # Examples
///
/// ```
/// # use expense_tracker::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("$1,005.5").unwrap();
/// assert_eq!(amount.to_string(), "$1,005.50");
/// assert_eq!(amount, Amount::from_str("1005.50").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the amount is greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.0.is_sign_positive()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.0.is_sign_negative()
    }
}

/// An error that can occur when parsing strings into `Amount` values.
pub struct AmountError(rust_decimal::Error);

impl Debug for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for AmountError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid amount: {}", self.0)
    }
}

impl Error for AmountError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // "-$50.00", "$50.00" or "50.00"
        let without_dollar = match trimmed.strip_prefix('-') {
            Some(after_minus) => match after_minus.strip_prefix('$') {
                Some(after_dollar) => format!("-{after_dollar}"),
                None => trimmed.to_string(),
            },
            None => trimmed.strip_prefix('$').unwrap_or(trimmed).to_string(),
        };

        let without_commas = without_dollar.replace(',', "");
        let value = Decimal::from_str(&without_commas).map_err(AmountError)?;
        Ok(Amount(value))
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let num = self.0.abs().to_f64().unwrap_or_default();
        write!(f, "{sign}${}", format_num::format_num!(",.2", num))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Whole amounts are written as integers so that `1000` does not become `1000.0`.
        if self.0.fract().is_zero() {
            if let Some(i) = self.0.to_i64() {
                return serializer.serialize_i64(i);
            }
        }
        match self.0.to_f64() {
            Some(f) if decimal_from_f64(f) == Some(self.0) => serializer.serialize_f64(f),
            _ => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
        decimal_from_f64(v)
            .map(Amount)
            .ok_or_else(|| E::custom(format!("{v} cannot be represented as an amount")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        Amount::from_str(v).map_err(E::custom)
    }
}

/// Converts through the shortest decimal text that reads back as `v`, so `15.99` is `15.99`.
fn decimal_from_f64(v: f64) -> Option<Decimal> {
    Decimal::from_str(&v.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(v))
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AmountVisitor)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<Amount> for Decimal {
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

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_with_dollar_sign() {
        assert_eq!(amt("$50.00").value(), Decimal::from_str("50.00").unwrap());
    }

    #[test]
    fn test_parse_negative_with_dollar_sign() {
        assert_eq!(amt("-$50.00").value(), Decimal::from_str("-50.00").unwrap());
    }

    #[test]
    fn test_parse_with_commas_and_whitespace() {
        assert_eq!(
            amt("  $1,234,567.89 ").value(),
            Decimal::from_str("1234567.89").unwrap()
        );
    }

    #[test]
    fn test_parse_garbage_is_an_error() {
        assert!(Amount::from_str("twelve").is_err());
        assert!(Amount::from_str("").is_err());
    }

    #[test]
    fn test_numeric_equality() {
        assert_eq!(amt("5"), amt("5.00"));
        assert!(amt("30") < amt("50"));
    }

    #[test]
    fn test_display() {
        assert_eq!(amt("1005").to_string(), "$1,005.00");
        assert_eq!(amt("-4.5").to_string(), "-$4.50");
        assert_eq!(Amount::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_zero_is_not_positive_or_negative() {
        assert!(!Amount::ZERO.is_positive());
        assert!(!Amount::ZERO.is_negative());
        assert!(amt("0.01").is_positive());
        assert!(amt("-0.01").is_negative());
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&amt("1000.00")).unwrap(), "1000");
        assert_eq!(serde_json::to_string(&amt("120.50")).unwrap(), "120.5");
        assert_eq!(serde_json::to_string(&amt("15.99")).unwrap(), "15.99");
    }

    #[test]
    fn test_deserialize_numbers_and_strings() {
        let a: Amount = serde_json::from_str("15.99").unwrap();
        assert_eq!(a, amt("15.99"));
        let b: Amount = serde_json::from_str("1200").unwrap();
        assert_eq!(b, amt("1200"));
        let c: Amount = serde_json::from_str("\"-$5,000.00\"").unwrap();
        assert_eq!(c, amt("-5000"));
        assert!(serde_json::from_str::<Amount>("true").is_err());
    }

    #[test]
    fn test_serialize_keeps_precision_f64_cannot_hold() {
        let precise = amt("12345678901234567.89");
        let json = serde_json::to_string(&precise).unwrap();
        assert_eq!(json, "\"12345678901234567.89\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, precise);
        assert_eq!(back.value().to_string(), "12345678901234567.89");
    }

    #[test]
    fn test_large_whole_amount_round_trips() {
        let big: Amount = serde_json::from_str("5e28").unwrap();
        assert_eq!(big, amt("50000000000000000000000000000"));
        let back: Amount = serde_json::from_str(&serde_json::to_string(&big).unwrap()).unwrap();
        assert_eq!(back, big);
    }

    #[test]
    fn test_addition_saturates() {
        let big = amt("50000000000000000000000000000");
        let max = Amount::new(Decimal::MAX);
        assert_eq!(big + big, max);
        let mut total = big;
        total += big;
        assert_eq!(total, max);
        let summed: Amount = [big, big, amt("1")].iter().sum();
        assert_eq!(summed, max);
        assert_eq!(amt("-5") + amt("5"), Amount::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [amt("5"), amt("1000"), amt("0.25")].iter().sum();
        assert_eq!(total, amt("1005.25"));
    }
}
