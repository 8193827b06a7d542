//! Fixed-point money values.
//!
//! The backend stores salary components as `DECIMAL(10, 2)` and renders
//! them as strings (`"5000.00"`), though numbers are accepted too. Amounts
//! are held as integer cents so previews such as net salary never pick up
//! floating point drift.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::ParseError;

/// A money value with two decimal places, stored as cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    /// `None` when the sum does not fit.
    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl FromStr for Amount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError {
            kind: "amount",
            value: s.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        // Two decimal places, like the backend column
        if frac.len() > 2 {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(invalid)?;
        Ok(Amount(if negative { -cents } else { cents }))
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl de::Visitor<'_> for AmountVisitor {
            type Value = Amount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal amount as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
                v.checked_mul(100)
                    .map(Amount)
                    .ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
                i64::try_from(v)
                    .ok()
                    .and_then(|v| v.checked_mul(100))
                    .map(Amount)
                    .ok_or_else(|| E::custom("amount out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Amount, E> {
                Ok(Amount((v * 100.0).round() as i64))
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_strings() {
        assert_eq!("5000.00".parse::<Amount>().unwrap().cents(), 500_000);
        assert_eq!("12.5".parse::<Amount>().unwrap().cents(), 1250);
        assert_eq!("7".parse::<Amount>().unwrap().cents(), 700);
        assert_eq!("-3.05".parse::<Amount>().unwrap().cents(), -305);
        assert_eq!(" .75 ".parse::<Amount>().unwrap().cents(), 75);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1.234".parse::<Amount>().is_err());
        assert!("1,000".parse::<Amount>().is_err());
        assert!(".".parse::<Amount>().is_err());
    }

    #[test]
    fn test_display_pads_cents() {
        assert_eq!(Amount::from_cents(500_000).to_string(), "5000.00");
        assert_eq!(Amount::from_cents(1205).to_string(), "12.05");
        assert_eq!(Amount::from_cents(-50).to_string(), "-0.50");
    }

    #[test]
    fn test_deserialize_string_or_number() {
        let a: Amount = serde_json::from_str("\"1500.25\"").unwrap();
        assert_eq!(a.cents(), 150_025);
        let b: Amount = serde_json::from_str("300").unwrap();
        assert_eq!(b.cents(), 30_000);
        let c: Amount = serde_json::from_str("99.99").unwrap();
        assert_eq!(c.cents(), 9999);
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Amount::from_cents(420_000)).unwrap();
        assert_eq!(json, "\"4200.00\"");
    }

    #[test]
    fn test_arithmetic_is_exact() {
        let basic: Amount = "1000.10".parse().unwrap();
        let bonus: Amount = "0.20".parse().unwrap();
        let deduction: Amount = "0.30".parse().unwrap();
        let net = basic
            .checked_add(bonus)
            .and_then(|a| a.checked_sub(deduction))
            .unwrap();
        assert_eq!(net.to_string(), "1000.00");
    }

    #[test]
    fn test_arithmetic_reports_overflow() {
        let max: Amount = "92233720368547758.07".parse().unwrap();
        let cent: Amount = "0.01".parse().unwrap();
        assert_eq!(max.checked_add(cent), None);
        assert_eq!(Amount::from_cents(i64::MIN).checked_sub(cent), None);
        assert_eq!(max.checked_sub(cent), Some(Amount::from_cents(i64::MAX - 1)));
    }
}
