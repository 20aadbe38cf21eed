use super::day_id::WorkoutDayId;
use super::log_entry::WorkoutLogEntry;
use super::weight_unit::WeightUnit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted blob for one program selection.
///
/// Completion flags and log entries are kept apart: a day may be marked done
/// without logged sets, and logged sets do not mark a day done.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramState {
    #[serde(default)]
    pub completion: BTreeMap<WorkoutDayId, bool>,
    #[serde(default)]
    pub logs: BTreeMap<WorkoutDayId, WorkoutLogEntry>,
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

impl ProgramState {
    pub fn is_completed(&self, id: &WorkoutDayId) -> bool {
        self.completion.get(id).copied().unwrap_or(false)
    }
}
