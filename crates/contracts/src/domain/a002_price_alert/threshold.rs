use std::fmt;
use thiserror::Error;

/// Minimum absolute change, in percent, an alert must reach to be listed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertThreshold(f64);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold is empty")]
    Empty,
    #[error("threshold {0:?} is not a number")]
    NotANumber(String),
    #[error("threshold {0} is negative")]
    Negative(f64),
    #[error("threshold is not finite")]
    NotFinite,
}

impl AlertThreshold {
    pub const DEFAULT_PERCENT: f64 = 5.0;

    /// Parses user input; only finite, non-negative decimals are accepted.
    pub fn parse(input: &str) -> Result<Self, ThresholdError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ThresholdError::Empty);
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ThresholdError::NotANumber(trimmed.to_string()))?;
        if !value.is_finite() {
            return Err(ThresholdError::NotFinite);
        }
        if value < 0.0 {
            return Err(ThresholdError::Negative(value));
        }
        // "-0" parses to negative zero, which would print as "-0"
        Ok(Self(value.abs()))
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Value sent as the `threshold` query parameter
    pub fn as_query_value(&self) -> String {
        self.to_string()
    }
}

impl Default for AlertThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_PERCENT)
    }
}

impl fmt::Display for AlertThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display is already the shortest round-trip form: 5, 7.5, 100
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five_percent() {
        assert_eq!(AlertThreshold::default().percent(), 5.0);
        assert_eq!(AlertThreshold::default().to_string(), "5");
    }

    #[test]
    fn test_parse_accepts_non_negative_decimals() {
        assert_eq!(AlertThreshold::parse("7.5").unwrap().percent(), 7.5);
        assert_eq!(AlertThreshold::parse(" 100 ").unwrap().to_string(), "100");
        assert_eq!(AlertThreshold::parse("0").unwrap().percent(), 0.0);
        assert_eq!(AlertThreshold::parse("-0").unwrap().to_string(), "0");
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        assert_eq!(AlertThreshold::parse(""), Err(ThresholdError::Empty));
        assert_eq!(AlertThreshold::parse("   "), Err(ThresholdError::Empty));
        assert_eq!(
            AlertThreshold::parse("abc"),
            Err(ThresholdError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            AlertThreshold::parse("-1.5"),
            Err(ThresholdError::Negative(-1.5))
        );
        assert_eq!(AlertThreshold::parse("inf"), Err(ThresholdError::NotFinite));
        assert_eq!(AlertThreshold::parse("NaN"), Err(ThresholdError::NotFinite));
    }

    #[test]
    fn test_query_value_matches_display() {
        let t = AlertThreshold::parse("12.25").unwrap();
        assert_eq!(t.as_query_value(), "12.25");
    }
}
