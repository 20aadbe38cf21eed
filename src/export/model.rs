use crate::models::{ProgramState, WeightUnit};
use serde::Serialize;

/// One exported row: a single logged set with its day context.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SetExport {
    pub day_id: String,
    pub week: u32,
    pub day: String,
    pub exercise: String,
    pub set: usize,
    pub reps: String,
    pub weight: String,
    pub unit: WeightUnit,
    pub completed: bool,
    pub day_completed: bool,
    pub notes: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "day_id",
        "week",
        "day",
        "exercise",
        "set",
        "reps",
        "weight",
        "unit",
        "completed",
        "day_completed",
        "notes",
    ]
}

pub(crate) fn to_record(row: &SetExport) -> Vec<String> {
    vec![
        row.day_id.clone(),
        row.week.to_string(),
        row.day.clone(),
        row.exercise.clone(),
        row.set.to_string(),
        row.reps.clone(),
        row.weight.clone(),
        row.unit.to_string(),
        row.completed.to_string(),
        row.day_completed.to_string(),
        row.notes.clone(),
    ]
}

/// Flatten the persisted logs, in week/day order. Sets are numbered from 1.
pub fn collect_rows(state: &ProgramState) -> Vec<SetExport> {
    let unit = state.weight_unit;
    let mut rows = Vec::new();

    for entry in state.logs.values() {
        let day_completed = state.is_completed(&entry.day_id);
        for ex in &entry.exercises {
            for (i, set) in ex.sets.iter().enumerate() {
                rows.push(SetExport {
                    day_id: entry.day_id.to_string(),
                    week: entry.day_id.week,
                    day: entry.day_id.day.clone(),
                    exercise: ex.name.clone(),
                    set: i + 1,
                    reps: set.reps.to_string(),
                    weight: set.weight.to_string(),
                    unit,
                    completed: set.completed,
                    day_completed,
                    notes: entry.notes.clone(),
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseRecord, SetRecord, WorkoutDayId, WorkoutLogEntry};

    #[test]
    fn test_rows_follow_day_order() {
        let mut state = ProgramState::default();
        for id in [WorkoutDayId::new(2, "Mon"), WorkoutDayId::baseline()] {
            let mut entry = WorkoutLogEntry::new(id.clone());
            entry.exercises.push(ExerciseRecord::new(
                "Push-ups",
                "2x8",
                vec![SetRecord::prescribed(8), SetRecord::prescribed(8)],
            ));
            state.logs.insert(id, entry);
        }
        state.completion.insert(WorkoutDayId::baseline(), true);

        let rows = collect_rows(&state);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].day_id, "0_Start");
        assert!(rows[0].day_completed);
        assert_eq!(rows[1].set, 2);
        assert_eq!(rows[3].day_id, "2_Mon");
        assert_eq!(rows[3].reps, "8");
        assert_eq!(rows[3].weight, "");
        assert_eq!(to_record(&rows[0]).len(), get_headers().len());
    }
}
