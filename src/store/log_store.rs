//! Workout log store: day id → log entry, plus completion flags and the
//! weight unit, all persisted as one JSON blob per program selection.

use super::backend::KvBackend;
use crate::errors::AppResult;
use crate::models::{
    LogValue, ProgramState, SetField, SetRecord, WeightUnit, WorkoutDayId, WorkoutLogEntry,
};

pub struct WorkoutLogStore<B: KvBackend> {
    backend: B,
    key: String,
    state: ProgramState,
}

impl<B: KvBackend> WorkoutLogStore<B> {
    /// Load the blob stored under `key`.
    ///
    /// A missing or unreadable blob yields an empty state; it is never an
    /// error, the next write simply replaces it.
    pub fn open(backend: B, key: impl Into<String>) -> AppResult<Self> {
        let key = key.into();
        let state = match backend.read_raw(&key)? {
            None => ProgramState::default(),
            Some(raw) => match serde_json::from_str::<ProgramState>(&raw) {
                Ok(state) => state,
                Err(e) => {
                    log::warn!("discarding unreadable workout log '{key}': {e}");
                    ProgramState::default()
                }
            },
        };

        log::debug!(
            "opened '{}' with {} log entries and {} completion flags",
            key,
            state.logs.len(),
            state.completion.len()
        );

        Ok(Self {
            backend,
            key,
            state,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> &ProgramState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    fn persist(&mut self) -> AppResult<()> {
        let raw = serde_json::to_string(&self.state)?;
        self.backend.write_raw(&self.key, &raw)
    }

    // ---------------------------
    // Entries
    // ---------------------------

    pub fn get(&self, id: &WorkoutDayId) -> Option<&WorkoutLogEntry> {
        self.state.logs.get(id)
    }

    /// Entries in week/day order.
    pub fn entries(&self) -> impl Iterator<Item = &WorkoutLogEntry> {
        self.state.logs.values()
    }

    /// Full overwrite of the entry for `id`.
    pub fn put(&mut self, id: WorkoutDayId, mut entry: WorkoutLogEntry) -> AppResult<()> {
        entry.day_id = id.clone();
        self.state.logs.insert(id, entry);
        self.persist()
    }

    /// Apply `f` to an existing entry and persist. `false` when the day was
    /// never logged.
    pub fn update_entry<F>(&mut self, id: &WorkoutDayId, f: F) -> AppResult<bool>
    where
        F: FnOnce(&mut WorkoutLogEntry),
    {
        let Some(entry) = self.state.logs.get_mut(id) else {
            return Ok(false);
        };
        f(entry);
        self.persist()?;
        Ok(true)
    }

    fn set_mut(&mut self, id: &WorkoutDayId, exercise: usize, set: usize) -> Option<&mut SetRecord> {
        self.state
            .logs
            .get_mut(id)?
            .exercises
            .get_mut(exercise)?
            .sets
            .get_mut(set)
    }

    /// Write one field of a set. Returns `false` (nothing written) when the
    /// day, exercise or set does not exist.
    pub fn update_set_field(
        &mut self,
        id: &WorkoutDayId,
        exercise: usize,
        set: usize,
        field: SetField,
        value: LogValue,
    ) -> AppResult<bool> {
        let Some(record) = self.set_mut(id, exercise, set) else {
            log::debug!("ignoring edit of {id} exercise {exercise} set {set}: not logged");
            return Ok(false);
        };
        *record.field_mut(field) = value;
        self.persist()?;
        Ok(true)
    }

    pub fn toggle_set_completion(
        &mut self,
        id: &WorkoutDayId,
        exercise: usize,
        set: usize,
    ) -> AppResult<bool> {
        let Some(record) = self.set_mut(id, exercise, set) else {
            log::debug!("ignoring toggle of {id} exercise {exercise} set {set}: not logged");
            return Ok(false);
        };
        record.completed = !record.completed;
        self.persist()?;
        Ok(true)
    }

    /// Append an empty set to an exercise. Sets are never removed or reordered.
    pub fn append_set(&mut self, id: &WorkoutDayId, exercise: usize) -> AppResult<bool> {
        let Some(ex) = self
            .state
            .logs
            .get_mut(id)
            .and_then(|e| e.exercises.get_mut(exercise))
        else {
            log::debug!("ignoring new set for {id} exercise {exercise}: not logged");
            return Ok(false);
        };
        ex.sets.push(SetRecord::default());
        self.persist()?;
        Ok(true)
    }

    /// Replace the notes of a day, creating its entry when needed.
    pub fn update_notes(&mut self, id: &WorkoutDayId, notes: &str) -> AppResult<()> {
        self.state
            .logs
            .entry(id.clone())
            .or_insert_with(|| WorkoutLogEntry::new(id.clone()))
            .notes = notes.to_string();
        self.persist()
    }

    // ---------------------------
    // Completion flags
    // ---------------------------

    pub fn is_completed(&self, id: &WorkoutDayId) -> bool {
        self.state.is_completed(id)
    }

    pub fn set_completed(&mut self, id: &WorkoutDayId, done: bool) -> AppResult<()> {
        self.state.completion.insert(id.clone(), done);
        self.persist()
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle_completed(&mut self, id: &WorkoutDayId) -> AppResult<bool> {
        let done = !self.is_completed(id);
        self.set_completed(id, done)?;
        Ok(done)
    }

    // ---------------------------
    // Preferences
    // ---------------------------

    pub fn weight_unit(&self) -> WeightUnit {
        self.state.weight_unit
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) -> AppResult<()> {
        self.state.weight_unit = unit;
        self.persist()
    }
}
