//! Fixed-point monetary type with 2 decimal places of precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so amounts render
//! exactly as OFX requires, without floating-point errors.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A monetary amount that maintains exactly 2 decimal places.
///
/// This type wraps `rust_decimal::Decimal` and normalizes every value to
/// scale 2, the precision the TRNAMT field carries.
///
/// # Examples
///
/// ```
/// use statement2ofx::Amount;
///
/// let amount = Amount::from_localized("1.234,56").unwrap();
/// assert_eq!(amount.to_string(), "1234.56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Creates a new `Amount` from a `Decimal`, normalizing to 2 decimal places.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Parses a statement-formatted amount: optional sign, `.` as thousands
    /// separator, `,` as decimal separator (e.g. `-1.234,56`).
    ///
    /// Normalization removes the thousands separators and converts the
    /// decimal comma to a point before parsing, so `1.500,00` and `1500,00`
    /// yield equal values.
    pub fn from_localized(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        let normalized = s.trim().replace('.', "").replace(',', ".");
        Amount::from_str(&normalized)
    }

    /// Returns `true` if this amount is strictly below zero.
    ///
    /// A negative-zero input compares equal to zero and is not negative.
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_normalizes_scale() {
        let a = Amount::from_str("10").unwrap();
        assert_eq!(a.to_string(), "10.00");

        let a = Amount::from_str("10.5").unwrap();
        assert_eq!(a.to_string(), "10.50");

        let a = Amount::from_str("  -2.5  ").unwrap();
        assert_eq!(a.to_string(), "-2.50");
    }

    #[test]
    fn test_from_localized_thousands_and_comma() {
        let a = Amount::from_localized("1.234,56").unwrap();
        assert_eq!(a.to_string(), "1234.56");

        let a = Amount::from_localized("-12,00").unwrap();
        assert_eq!(a.to_string(), "-12.00");

        let a = Amount::from_localized("1.234.567,89").unwrap();
        assert_eq!(a.to_string(), "1234567.89");
    }

    #[test]
    fn test_from_localized_without_thousands_separator() {
        let with = Amount::from_localized("1.500,00").unwrap();
        let without = Amount::from_localized("1500,00").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn test_from_localized_rejects_garbage() {
        assert!(Amount::from_localized("abc").is_err());
        assert!(Amount::from_localized("").is_err());
    }

    #[test]
    fn test_is_negative() {
        assert!(Amount::from_localized("-0,01").unwrap().is_negative());
        assert!(!Amount::from_localized("0,00").unwrap().is_negative());
        assert!(!Amount::from_localized("-0,00").unwrap().is_negative());
        assert!(!Amount::from_localized("200,50").unwrap().is_negative());
    }

    #[test]
    fn test_zero_constant() {
        assert!(!Amount::ZERO.is_negative());
        assert_eq!(Amount::ZERO, Amount::from_str("0").unwrap());
    }
}
