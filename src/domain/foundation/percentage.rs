//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a Percentage from a count ratio, rounding half-up.
    ///
    /// A zero denominator yields zero percent by policy rather than an error,
    /// so empty response sets score 0 instead of failing.
    pub fn from_ratio(numerator: u32, denominator: u32) -> Self {
        if denominator == 0 {
            return Self::ZERO;
        }
        let pct = (f64::from(numerator) / f64::from(denominator) * 100.0).round();
        Self::new(pct as u8)
    }

    /// Returns the mean of the given percentages, rounding half-up.
    ///
    /// An empty input yields zero percent.
    pub fn mean(values: &[Percentage]) -> Self {
        if values.is_empty() {
            return Self::ZERO;
        }
        let sum: u32 = values.iter().map(|p| u32::from(p.0)).sum();
        let avg = (f64::from(sum) / values.len() as f64).round();
        Self::new(avg as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        let result = Percentage::try_new(101);
        assert!(result.is_err());
        match result {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn percentage_from_ratio_rounds_half_up() {
        assert_eq!(Percentage::from_ratio(6, 10).value(), 60);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
    }

    #[test]
    fn percentage_from_ratio_with_zero_denominator_is_zero() {
        assert_eq!(Percentage::from_ratio(0, 0), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_from_ratio_full_agreement_is_100() {
        assert_eq!(Percentage::from_ratio(25, 25), Percentage::HUNDRED);
    }

    #[test]
    fn percentage_mean_rounds_half_up() {
        let scores = [Percentage::new(60), Percentage::new(80)];
        assert_eq!(Percentage::mean(&scores).value(), 70);

        let scores = [Percentage::new(60), Percentage::new(61)];
        assert_eq!(Percentage::mean(&scores).value(), 61);
    }

    #[test]
    fn percentage_mean_of_empty_is_zero() {
        assert_eq!(Percentage::mean(&[]), Percentage::ZERO);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(0).as_fraction() - 0.0).abs() < f64::EPSILON);
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
        assert!((Percentage::new(100).as_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        let pct = Percentage::new(42);
        assert_eq!(serde_json::to_string(&pct).unwrap(), "42");
    }

    #[test]
    fn percentage_deserializes_from_json() {
        let pct: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(pct.value(), 75);
    }
}
