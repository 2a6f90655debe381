//! Numeric values accepted by the grammar and formatters

use crate::error::{NumeralError, Result};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A value to be spelled out
///
/// Integers keep full `i128` precision so the grammar can reach its scale
/// ceiling; fractional values use [`Decimal`] so that currency and
/// percentage rounding is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// Whole number
    Integer(i128),
    /// Number with a fractional part
    Decimal(Decimal),
}

impl Magnitude {
    /// Collapse decimals without a fractional part into integers and strip
    /// trailing fractional zeros.
    pub fn normalized(self) -> Self {
        match self {
            Magnitude::Integer(_) => self,
            Magnitude::Decimal(d) => {
                let d = d.normalize();
                if d.fract().is_zero() {
                    d.to_i128().map_or(Magnitude::Decimal(d), Magnitude::Integer)
                } else {
                    Magnitude::Decimal(d)
                }
            }
        }
    }

    /// Whether the value is below zero
    pub fn is_negative(&self) -> bool {
        match self {
            Magnitude::Integer(n) => *n < 0,
            Magnitude::Decimal(d) => d.is_sign_negative() && !d.is_zero(),
        }
    }

    /// Absolute value
    pub fn abs(self) -> Self {
        match self {
            // i128::MIN has no positive counterpart; it is far beyond the
            // scale ceiling anyway and is rejected there.
            Magnitude::Integer(n) => Magnitude::Integer(n.checked_abs().unwrap_or(i128::MAX)),
            Magnitude::Decimal(d) => Magnitude::Decimal(d.abs()),
        }
    }

    /// The value as an integer, if it has no fractional part
    pub fn as_integer(&self) -> Option<i128> {
        match self.normalized() {
            Magnitude::Integer(n) => Some(n),
            Magnitude::Decimal(_) => None,
        }
    }

    /// The value as a decimal, if it fits the decimal range
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            Magnitude::Integer(n) => Decimal::try_from_i128_with_scale(*n, 0).ok(),
            Magnitude::Decimal(d) => Some(*d),
        }
    }

    /// Parse a number written with either "," or "." as the decimal
    /// separator.
    pub fn parse(text: &str) -> Result<Self> {
        let parse_error = || NumeralError::Parse {
            input: text.to_string(),
        };
        let trimmed = text.trim();
        let unsigned = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
        let numeric = unsigned
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c == '.');
        if unsigned.is_empty() || !numeric {
            return Err(parse_error());
        }

        let canonical = trimmed.replace(',', ".");
        if canonical.matches('.').count() > 1 {
            return Err(parse_error());
        }
        if canonical.contains('.') {
            Decimal::from_str(&canonical)
                .map(Magnitude::Decimal)
                .map_err(|_| parse_error())
        } else {
            canonical
                .parse::<i128>()
                .map(Magnitude::Integer)
                .map_err(|_| parse_error())
        }
    }
}

impl FromStr for Magnitude {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self> {
        Magnitude::parse(s)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Integer(n) => write!(f, "{n}"),
            Magnitude::Decimal(d) => write!(f, "{d}"),
        }
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Magnitude {
                fn from(value: $t) -> Self {
                    Magnitude::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<Decimal> for Magnitude {
    fn from(value: Decimal) -> Self {
        Magnitude::Decimal(value)
    }
}

impl TryFrom<f64> for Magnitude {
    type Error = NumeralError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(NumeralError::Parse {
                input: value.to_string(),
            });
        }
        Decimal::try_from(value)
            .map(|d| Magnitude::Decimal(d).normalized())
            .map_err(|_| NumeralError::Range {
                value: value.to_string(),
                limit: Decimal::MAX.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_both_separators() {
        assert_eq!(
            Magnitude::parse("12,5").unwrap(),
            Magnitude::Decimal(Decimal::new(125, 1))
        );
        assert_eq!(
            Magnitude::parse("12.5").unwrap(),
            Magnitude::Decimal(Decimal::new(125, 1))
        );
        assert_eq!(Magnitude::parse(" 42 ").unwrap(), Magnitude::Integer(42));
        assert_eq!(Magnitude::parse("-7").unwrap(), Magnitude::Integer(-7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "abc", "1.2.3", "12a", "-", "1,2,3"] {
            assert!(
                matches!(Magnitude::parse(input), Err(NumeralError::Parse { .. })),
                "{input} should not parse"
            );
        }
    }

    #[test]
    fn test_normalized_collapses_whole_decimals() {
        let m = Magnitude::Decimal(Decimal::new(5000, 2));
        assert_eq!(m.normalized(), Magnitude::Integer(50));
        assert_eq!(m.as_integer(), Some(50));

        let m = Magnitude::Decimal(Decimal::new(1250, 3));
        assert_eq!(m.normalized(), Magnitude::Decimal(Decimal::new(125, 2)));
        assert_eq!(m.as_integer(), None);
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(Magnitude::try_from(2.0).unwrap(), Magnitude::Integer(2));
        assert!(Magnitude::try_from(f64::NAN).is_err());
        assert!(Magnitude::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_sign() {
        assert!(Magnitude::from(-3).is_negative());
        assert!(!Magnitude::from(0).is_negative());
        assert_eq!(Magnitude::from(-3).abs(), Magnitude::Integer(3));
    }
}
