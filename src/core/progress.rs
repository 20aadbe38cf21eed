//! Previous-session lookup used for "last time" hints.

use crate::models::day_id::BASELINE_DAY;
use crate::models::{SetRecord, WeightUnit, WorkoutDayId};
use crate::store::{KvBackend, WorkoutLogStore};

/// The session a day is compared against.
///
/// Week N looks at week N-1 with the same label; week 1 looks at the single
/// baseline day; the baseline week has no predecessor.
pub fn predecessor(id: &WorkoutDayId) -> Option<WorkoutDayId> {
    match id.week {
        0 => None,
        1 => Some(WorkoutDayId::new(0, BASELINE_DAY)),
        n => Some(WorkoutDayId::new(n - 1, id.day.clone())),
    }
}

/// Sets logged for `exercise` in the predecessor session, if any.
pub fn previous_sets<B: KvBackend>(
    store: &WorkoutLogStore<B>,
    id: &WorkoutDayId,
    exercise: &str,
) -> Option<Vec<SetRecord>> {
    let prev = predecessor(id)?;
    let entry = store.get(&prev)?;
    if !entry.has_exercises() {
        return None;
    }
    entry.exercise(exercise).map(|e| e.sets.clone())
}

/// `previous: 100 lbs × 8`, or `None` when nothing usable was logged.
pub fn previous_hint(set: &SetRecord, unit: WeightUnit) -> Option<String> {
    match (set.weight.is_empty(), set.reps.is_empty()) {
        (true, true) => None,
        (false, false) => Some(format!("previous: {} {} × {}", set.weight, unit, set.reps)),
        (false, true) => Some(format!("previous: {} {}", set.weight, unit)),
        (true, false) => Some(format!("previous: {} reps", set.reps)),
    }
}
