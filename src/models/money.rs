//! Money type for representing budget amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact and the
//! over-budget and critical-overrun thresholds compare in integer arithmetic.
//! Arithmetic saturates at the i64 bounds, so absurdly large cells clamp
//! instead of overflowing. Serialized as a plain dollar number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of a dollar)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use edubudget::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Create a Money amount from a fractional dollar value, rounded to cents
    ///
    /// Values beyond the representable range saturate.
    pub fn from_dollars_f64(dollars: f64) -> Self {
        Self((dollars * 100.0).round() as i64)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount in dollars as a float, for ratios and charts
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// `self / other * 100`, or `None` when `other` is zero
    pub fn percent_of(&self, other: Money) -> Option<f64> {
        if other.is_zero() {
            None
        } else {
            Some(self.0 as f64 / other.0 as f64 * 100.0)
        }
    }

    /// True when `self > other * numerator / denominator`, evaluated exactly
    pub fn exceeds_fraction_of(&self, other: Money, numerator: i64, denominator: i64) -> bool {
        (self.0 as i128) * (denominator as i128) > (other.0 as i128) * (numerator as i128)
    }

    /// Parse a numeric cell leniently
    ///
    /// Accepts plain decimal numbers, with or without sign, fraction or
    /// exponent ("1250", "-3.5", "1.2e5"). Anything else, including blanks,
    /// currency symbols, thousands separators and non-finite values, yields
    /// zero.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from_dollars_f64(value),
            _ => Self::zero(),
        }
    }

    /// Format as plain numeric text without currency symbol or padding
    ///
    /// Whole amounts have no fraction; otherwise trailing zeros are dropped
    /// ("1250", "1250.5", "-3.25").
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let dollars = self.dollars().abs();
        match self.cents_part() {
            0 => format!("{}{}", sign, dollars),
            c if c % 10 == 0 => format!("{}{}.{}", sign, dollars, c / 10),
            c => format!("{}{}.{:02}", sign, dollars, c),
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dollars = f64::deserialize(deserializer)?;
        Ok(Self::from_dollars_f64(dollars))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Money::parse_lenient("10.50").cents(), 1050);
        assert_eq!(Money::parse_lenient(" 1250 ").cents(), 125000);
        assert_eq!(Money::parse_lenient("-3.25").cents(), -325);
        assert_eq!(Money::parse_lenient("1.5e3").cents(), 150000);
        assert_eq!(Money::parse_lenient("0.005").cents(), 1);
    }

    #[test]
    fn test_parse_lenient_coerces_to_zero() {
        assert!(Money::parse_lenient("").is_zero());
        assert!(Money::parse_lenient("n/a").is_zero());
        assert!(Money::parse_lenient("$10.50").is_zero());
        assert!(Money::parse_lenient("1,000").is_zero());
        assert!(Money::parse_lenient("NaN").is_zero());
        assert!(Money::parse_lenient("inf").is_zero());
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(125000).to_plain_string(), "1250");
        assert_eq!(Money::from_cents(125050).to_plain_string(), "1250.5");
        assert_eq!(Money::from_cents(-325).to_plain_string(), "-3.25");
        assert_eq!(Money::from_cents(-5).to_plain_string(), "-0.05");
        assert_eq!(Money::zero().to_plain_string(), "0");
    }

    #[test]
    fn test_plain_string_reparses() {
        for cents in [0, 1, 10, 99, 100, 12345, -1, -250, 987654321] {
            let m = Money::from_cents(cents);
            assert_eq!(Money::parse_lenient(&m.to_plain_string()), m);
        }
    }

    #[test]
    fn test_percent_of() {
        let cash = Money::from_dollars(150);
        let modified = Money::from_dollars(180);
        let pct = cash.percent_of(modified).unwrap();
        assert!((pct - 83.333).abs() < 0.001);
        assert_eq!(cash.percent_of(Money::zero()), None);
    }

    #[test]
    fn test_exceeds_fraction_of() {
        let modified = Money::from_dollars(100);
        assert!(Money::from_dollars(111).exceeds_fraction_of(modified, 11, 10));
        assert!(!Money::from_dollars(110).exceeds_fraction_of(modified, 11, 10));
        assert!(!Money::from_dollars(109).exceeds_fraction_of(modified, 11, 10));
    }

    #[test]
    fn test_huge_cells_saturate() {
        let huge = Money::parse_lenient("6e16");
        assert_eq!(huge.cents(), 6_000_000_000_000_000_000);
        assert_eq!(Money::parse_lenient("1e30").cents(), i64::MAX);

        let mut total = huge;
        total += huge;
        assert_eq!(total.cents(), i64::MAX);
        assert_eq!((huge + huge).cents(), i64::MAX);
        assert_eq!((-huge - huge).cents(), i64::MIN);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);
        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);

        let total: Money = [huge, huge, Money::from_dollars(1)].iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
