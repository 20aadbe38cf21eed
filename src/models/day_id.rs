use crate::errors::AppError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Label of the single day of the baseline assessment week.
pub const BASELINE_DAY: &str = "Start";

/// Fixed display order of day labels inside a week.
const DAY_ORDER: [&str; 8] = ["Start", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Identifies one scheduled session: week number plus day label.
///
/// Week 0 is the baseline week. The textual form is `"{week}_{day}"`, which is
/// also the key used in the persisted JSON maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutDayId {
    pub week: u32,
    pub day: String,
}

impl WorkoutDayId {
    pub fn new(week: u32, day: impl Into<String>) -> Self {
        Self {
            week,
            day: day.into(),
        }
    }

    /// The baseline assessment session (`0_Start`).
    pub fn baseline() -> Self {
        Self::new(0, BASELINE_DAY)
    }

    pub fn is_baseline_week(&self) -> bool {
        self.week == 0
    }

    /// Position of the day label in the Start..Sun order, `None` for labels
    /// outside the usual calendar.
    fn day_rank(&self) -> Option<usize> {
        DAY_ORDER
            .iter()
            .position(|d| d.eq_ignore_ascii_case(&self.day))
    }

    /// Short chart label, e.g. `W3 Mon`.
    pub fn short_label(&self) -> String {
        format!("W{} {}", self.week, self.day)
    }
}

impl fmt::Display for WorkoutDayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.week, self.day)
    }
}

impl FromStr for WorkoutDayId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, day) = s
            .trim()
            .split_once('_')
            .ok_or_else(|| AppError::InvalidDayId(s.to_string()))?;

        // legacy keys were written as "week3_Mon"
        let week = week.trim_start_matches("week");
        let week: u32 = week
            .parse()
            .map_err(|_| AppError::InvalidDayId(s.to_string()))?;

        if day.trim().is_empty() {
            return Err(AppError::InvalidDayId(s.to_string()));
        }

        Ok(Self::new(week, day.trim()))
    }
}

impl Ord for WorkoutDayId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.week
            .cmp(&other.week)
            .then_with(|| match (self.day_rank(), other.day_rank()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.day.cmp(&other.day))
    }
}

impl PartialOrd for WorkoutDayId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for WorkoutDayId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WorkoutDayId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = WorkoutDayId::new(3, "Mon");
        assert_eq!(id.to_string(), "3_Mon");
        assert_eq!("3_Mon".parse::<WorkoutDayId>().unwrap(), id);
        assert_eq!("week3_Mon".parse::<WorkoutDayId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Mon".parse::<WorkoutDayId>().is_err());
        assert!("x_Mon".parse::<WorkoutDayId>().is_err());
        assert!("2_".parse::<WorkoutDayId>().is_err());
    }

    #[test]
    fn test_ordering_uses_calendar_order() {
        let mut ids = vec![
            WorkoutDayId::new(1, "Fri"),
            WorkoutDayId::new(1, "Mon"),
            WorkoutDayId::baseline(),
            WorkoutDayId::new(0, "Extra"),
            WorkoutDayId::new(1, "Wed"),
        ];
        ids.sort();
        let labels: Vec<String> = ids.iter().map(|i| i.to_string()).collect();
        assert_eq!(labels, vec!["0_Start", "0_Extra", "1_Mon", "1_Wed", "1_Fri"]);
    }

    #[test]
    fn test_serializes_as_map_key() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(WorkoutDayId::new(2, "Tue"), true);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2_Tue":true}"#);
        let back: std::collections::BTreeMap<WorkoutDayId, bool> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
