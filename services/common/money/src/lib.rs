use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("invalid monetary amount: {0}")]
    Invalid(String),
    #[error("monetary amount must not be negative: {0}")]
    Negative(String),
}

/// Normalize a monetary value to 2 decimal places (with_scale truncates extra digits)
pub fn normalize_scale(value: &BigDecimal) -> BigDecimal {
    value.with_scale(2)
}

/// Non-negative price held at scale 2.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(BigDecimal);

impl Money {
    pub fn new(raw: BigDecimal) -> Result<Self, MoneyError> {
        if raw < BigDecimal::zero() {
            return Err(MoneyError::Negative(raw.to_string()));
        }
        Ok(Self(normalize_scale(&raw)))
    }

    /// Whole cents; cannot fail since `u64` is never negative.
    pub fn from_cents(cents: u64) -> Self {
        Self(normalize_scale(&(BigDecimal::from(cents) / BigDecimal::from(100u64))))
    }

    pub fn inner(&self) -> &BigDecimal { &self.0 }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Exponents would let a short string expand into an arbitrarily large scale-2 value.
        if trimmed.contains(['e', 'E']) {
            return Err(MoneyError::Invalid(trimmed.to_string()));
        }
        let raw = BigDecimal::from_str(trimmed).map_err(|_| MoneyError::Invalid(trimmed.to_string()))?;
        Self::new(raw)
    }
}

impl TryFrom<BigDecimal> for Money {
    type Error = MoneyError;

    fn try_from(value: BigDecimal) -> Result<Self, Self::Error> { Self::new(value) }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Prices travel as decimal strings so clients never see float rounding.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let v = BigDecimal::parse_bytes(b"12.3456", 10).unwrap();
        assert_eq!(normalize_scale(&v).to_string(), "12.34");
    }

    #[test]
    fn parses_and_pads_to_two_places() {
        let m: Money = "275".parse().unwrap();
        assert_eq!(m.to_string(), "275.00");
        let m: Money = " 48.95 ".parse().unwrap();
        assert_eq!(m.to_string(), "48.95");
    }

    #[test]
    fn from_cents_matches_parse() {
        assert_eq!(Money::from_cents(4895), "48.95".parse().unwrap());
        assert_eq!(Money::from_cents(27500).to_string(), "275.00");
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert_eq!("-1.00".parse::<Money>(), Err(MoneyError::Negative("-1.00".into())));
        assert!(matches!("abc".parse::<Money>(), Err(MoneyError::Invalid(_))));
    }

    #[test]
    fn rejects_exponent_notation() {
        assert_eq!("1e999999999".parse::<Money>(), Err(MoneyError::Invalid("1e999999999".into())));
        assert!(matches!("2.5E3".parse::<Money>(), Err(MoneyError::Invalid(_))));
    }
}
