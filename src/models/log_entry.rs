use super::day_id::WorkoutDayId;
use super::exercise::ExerciseRecord;
use super::timer_state::TimerState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything logged for one workout day.
///
/// Created the first time the day is started and never deleted, so that
/// later weeks can compare against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLogEntry {
    pub day_id: WorkoutDayId,
    #[serde(default)]
    pub workout_started: bool,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exercises: Vec<ExerciseRecord>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub timer: Option<TimerState>,
}

impl WorkoutLogEntry {
    pub fn new(day_id: WorkoutDayId) -> Self {
        Self {
            day_id,
            workout_started: false,
            start_time: None,
            end_time: None,
            exercises: Vec::new(),
            notes: String::new(),
            timer: None,
        }
    }

    pub fn has_exercises(&self) -> bool {
        !self.exercises.is_empty()
    }

    pub fn exercise(&self, name: &str) -> Option<&ExerciseRecord> {
        self.exercises.iter().find(|e| e.name == name)
    }

    /// Session length in seconds once both ends are known.
    pub fn duration_seconds(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if end >= start => Some((end - start).num_seconds()),
            _ => None,
        }
    }
}
