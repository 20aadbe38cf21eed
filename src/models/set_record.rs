use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form reps/weight value as typed by the user.
///
/// Persisted either as a JSON number or as a JSON string; an empty string
/// means "not entered yet". Values are only interpreted numerically at
/// aggregation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LogValue {
    Number(f64),
    Text(String),
}

impl Default for LogValue {
    fn default() -> Self {
        LogValue::Text(String::new())
    }
}

impl LogValue {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a value from raw user input: numeric text becomes a number,
    /// anything else is kept verbatim.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => LogValue::Number(n),
            _ => LogValue::Text(trimmed.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, LogValue::Text(s) if s.trim().is_empty())
    }

    /// Numeric view of the value; `None` for empty or non-numeric text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            LogValue::Number(n) => Some(*n),
            LogValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Numeric view with the aggregation fallback (non-numeric counts as 0).
    pub fn number_or_zero(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            LogValue::Number(n) => write!(f, "{}", n),
            LogValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for LogValue {
    fn from(v: u32) -> Self {
        LogValue::Number(v as f64)
    }
}

impl From<f64> for LogValue {
    fn from(v: f64) -> Self {
        LogValue::Number(v)
    }
}

/// Which field of a set an edit addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Reps,
    Weight,
}

/// One logged set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    #[serde(default)]
    pub reps: LogValue,
    #[serde(default)]
    pub weight: LogValue,
    #[serde(default)]
    pub completed: bool,
}

impl SetRecord {
    /// A prescribed set: rep target filled in, weight left for the user.
    pub fn prescribed(reps: u32) -> Self {
        Self {
            reps: reps.into(),
            weight: LogValue::empty(),
            completed: false,
        }
    }

    pub fn field_mut(&mut self, field: SetField) -> &mut LogValue {
        match field {
            SetField::Reps => &mut self.reps,
            SetField::Weight => &mut self.weight,
        }
    }

    /// `(reps, weight)` when both are present and numeric.
    pub fn reps_and_weight(&self) -> Option<(f64, f64)> {
        if self.reps.is_empty() || self.weight.is_empty() {
            return None;
        }
        Some((self.reps.number_or_zero(), self.weight.number_or_zero()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_round_trip_keeps_shape() {
        let set: SetRecord =
            serde_json::from_str(r#"{"reps":8,"weight":"","completed":false}"#).unwrap();
        assert_eq!(set.reps, LogValue::Number(8.0));
        assert!(set.weight.is_empty());

        let set: SetRecord = serde_json::from_str(r#"{"reps":"10","weight":"62.5"}"#).unwrap();
        assert_eq!(set.reps.as_number(), Some(10.0));
        assert_eq!(set.weight.as_number(), Some(62.5));
        assert!(!set.completed);
    }

    #[test]
    fn test_from_input() {
        assert_eq!(LogValue::from_input(" 12 "), LogValue::Number(12.0));
        assert_eq!(LogValue::from_input("4:30"), LogValue::Text("4:30".into()));
        assert!(LogValue::from_input("").is_empty());
    }

    #[test]
    fn test_non_numeric_counts_as_zero() {
        let v = LogValue::Text("max".into());
        assert_eq!(v.as_number(), None);
        assert_eq!(v.number_or_zero(), 0.0);
    }

    #[test]
    fn test_display_drops_integer_fraction() {
        assert_eq!(LogValue::Number(100.0).to_string(), "100");
        assert_eq!(LogValue::Number(62.5).to_string(), "62.5");
    }
}
