//! Workout session lifecycle: start/resume, live timers bound to log entries,
//! finish and close.

use crate::core::aggregate;
use crate::core::parser;
use crate::core::progress::{previous_hint, previous_sets};
use crate::core::timer::{self, CompleteCallback, SharedTimer, TickCallback, TimerEngine, TimerHandle};
use crate::errors::{AppError, AppResult};
use crate::models::{
    ProgramDefinition, SetRecord, TimerState, WeightUnit, WorkoutDayId, WorkoutLogEntry,
};
use crate::store::{KvBackend, WorkoutLogStore};
use crate::utils::time::format_elapsed;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Timer of one day: the shared state plus its tick source, if running.
struct BoundTimer {
    state: SharedTimer,
    handle: Option<TimerHandle>,
}

/// One set row ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SetView {
    pub index: usize,
    pub record: SetRecord,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseView {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub freeform: bool,
    pub sets: Vec<SetView>,
}

/// Outcome of [`SessionController::finish_workout`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinishSummary {
    pub duration_seconds: Option<i64>,
    pub week_completed: bool,
}

pub struct SessionController<B: KvBackend> {
    store: WorkoutLogStore<B>,
    program: ProgramDefinition,
    engine: TimerEngine,
    timers: HashMap<WorkoutDayId, BoundTimer>,
}

impl<B: KvBackend> SessionController<B> {
    /// Build a controller and restart every timer persisted as running.
    pub fn new(store: WorkoutLogStore<B>, program: ProgramDefinition) -> Self {
        let mut controller = Self {
            store,
            program,
            engine: TimerEngine::new(),
            timers: HashMap::new(),
        };
        let restored = controller.restore_running_timers();
        if restored > 0 {
            log::info!("restored {restored} running timer(s)");
        }
        controller
    }

    pub fn store(&self) -> &WorkoutLogStore<B> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WorkoutLogStore<B> {
        &mut self.store
    }

    pub fn program(&self) -> &ProgramDefinition {
        &self.program
    }

    pub fn into_store(mut self) -> WorkoutLogStore<B> {
        let ids: Vec<WorkoutDayId> = self.timers.keys().cloned().collect();
        for id in ids {
            self.detach(&id);
        }
        self.store
    }

    // ---------------------------
    // Lifecycle
    // ---------------------------

    /// Start or resume the workout of `id`.
    ///
    /// Exercises are parsed from the prescription only the first time; a
    /// resume keeps both the logged sets and the original start time.
    pub fn start_workout(&mut self, id: &WorkoutDayId, now: DateTime<Utc>) -> AppResult<&WorkoutLogEntry> {
        let day = self
            .program
            .day(id)
            .ok_or_else(|| AppError::UnknownDay(id.to_string()))?;

        let mut entry = self
            .store
            .get(id)
            .cloned()
            .unwrap_or_else(|| WorkoutLogEntry::new(id.clone()));

        if !entry.has_exercises() {
            entry.exercises = parser::parse(&day.details);
            log::debug!("parsed {} exercise(s) for {id}", entry.exercises.len());
        }
        entry.workout_started = true;
        if entry.start_time.is_none() {
            entry.start_time = Some(now);
        }

        self.store.put(id.clone(), entry)?;
        self.store
            .get(id)
            .ok_or_else(|| AppError::NoWorkoutForDay(id.to_string()))
    }

    /// Mark the day complete and close its session.
    pub fn finish_workout(&mut self, id: &WorkoutDayId, now: DateTime<Utc>) -> AppResult<FinishSummary> {
        if self.store.get(id).is_none() {
            return Err(AppError::NoWorkoutForDay(id.to_string()));
        }

        self.detach(id);
        self.timers.remove(id);
        self.store.set_completed(id, true)?;
        self.store.update_entry(id, |entry| {
            entry.end_time = Some(now);
            entry.workout_started = false;
            entry.timer = None;
        })?;

        let duration_seconds = self.store.get(id).and_then(|e| e.duration_seconds());
        let week_completed = aggregate::is_week_complete(&self.program, self.store.state(), id.week);
        log::info!("finished {id} (week complete: {week_completed})");

        Ok(FinishSummary {
            duration_seconds,
            week_completed,
        })
    }

    /// Stop every timer without finishing; started workouts stay resumable.
    pub fn close_session(&mut self) -> AppResult<()> {
        let ids: Vec<WorkoutDayId> = self.timers.keys().cloned().collect();
        for id in &ids {
            self.stop_timer(id)?;
        }
        self.timers.clear();
        Ok(())
    }

    /// Restart tick sources for timers persisted as running. Returns how
    /// many were restarted.
    pub fn restore_running_timers(&mut self) -> usize {
        let running: Vec<(WorkoutDayId, TimerState)> = self
            .store
            .entries()
            .filter_map(|e| {
                e.timer
                    .as_ref()
                    .filter(|t| t.running)
                    .map(|t| (e.day_id.clone(), t.clone()))
            })
            .collect();

        let count = running.len();
        for (id, state) in running {
            let shared = timer::shared(state);
            let handle = self.engine.start(&shared, None, None);
            self.timers.insert(
                id,
                BoundTimer {
                    state: shared,
                    handle: Some(handle),
                },
            );
        }
        count
    }

    /// `HH:MM:SS` since the start of the workout; frozen at the end time
    /// once finished.
    pub fn elapsed_display(&self, id: &WorkoutDayId, now: DateTime<Utc>) -> Option<String> {
        let entry = self.store.get(id)?;
        let start = entry.start_time?;
        let end = if entry.workout_started {
            now
        } else {
            entry.end_time?
        };
        let secs = (end - start).num_seconds().max(0) as u64;
        Some(format_elapsed(secs))
    }

    /// Exercises of a logged day with last session's hint on each set.
    pub fn renderable_exercises(&self, id: &WorkoutDayId) -> Vec<ExerciseView> {
        let Some(entry) = self.store.get(id) else {
            return Vec::new();
        };
        let unit = self.store.weight_unit();

        entry
            .exercises
            .iter()
            .enumerate()
            .map(|(index, ex)| {
                let previous = previous_sets(&self.store, id, &ex.name).unwrap_or_default();
                let sets = ex
                    .sets
                    .iter()
                    .enumerate()
                    .map(|(i, record)| SetView {
                        index: i,
                        record: record.clone(),
                        previous: previous.get(i).and_then(|p| previous_hint(p, unit)),
                    })
                    .collect();
                ExerciseView {
                    index,
                    name: ex.name.clone(),
                    description: ex.description.clone(),
                    freeform: ex.is_freeform(),
                    sets,
                }
            })
            .collect()
    }

    // ---------------------------
    // Timers
    // ---------------------------

    fn bound_state(&mut self, id: &WorkoutDayId) -> SharedTimer {
        let persisted = self.store.get(id).and_then(|e| e.timer.clone());
        let bound = self.timers.entry(id.clone()).or_insert_with(|| BoundTimer {
            state: timer::shared(persisted.unwrap_or_default()),
            handle: None,
        });
        SharedTimer::clone(&bound.state)
    }

    /// Cancel the tick source of a day, leaving the state in place.
    fn detach(&mut self, id: &WorkoutDayId) {
        if let Some(bound) = self.timers.get_mut(id)
            && let Some(handle) = bound.handle.take()
        {
            self.engine.stop(&bound.state, handle);
        }
    }

    /// Copy the in-memory timer into the day's entry. Days that were never
    /// started keep a transient timer.
    fn save_timer(&mut self, id: &WorkoutDayId) -> AppResult<()> {
        let Some(bound) = self.timers.get(id) else {
            return Ok(());
        };
        let snapshot = bound.state.borrow().clone();
        self.store.update_entry(id, |entry| entry.timer = Some(snapshot))?;
        Ok(())
    }

    /// Persist every bound timer.
    pub fn save_timers(&mut self) -> AppResult<()> {
        let ids: Vec<WorkoutDayId> = self.timers.keys().cloned().collect();
        for id in &ids {
            self.save_timer(id)?;
        }
        Ok(())
    }

    pub fn start_timer(
        &mut self,
        id: &WorkoutDayId,
        is_stopwatch: bool,
        on_tick: Option<TickCallback>,
        on_complete: Option<CompleteCallback>,
    ) -> AppResult<()> {
        self.detach(id);
        let state = self.bound_state(id);
        state.borrow_mut().is_stopwatch = is_stopwatch;

        let handle = self.engine.start(&state, on_tick, on_complete);
        if let Some(bound) = self.timers.get_mut(id) {
            bound.handle = Some(handle);
        }
        self.save_timer(id)
    }

    pub fn stop_timer(&mut self, id: &WorkoutDayId) -> AppResult<()> {
        if !self.timers.contains_key(id) {
            return Ok(());
        }
        self.detach(id);
        if let Some(bound) = self.timers.get(id) {
            bound.state.borrow_mut().running = false;
        }
        self.save_timer(id)
    }

    pub fn reset_timer(&mut self, id: &WorkoutDayId, is_stopwatch: bool) -> AppResult<()> {
        self.detach(id);
        let state = self.bound_state(id);
        state.borrow_mut().reset(is_stopwatch);
        state.borrow_mut().is_stopwatch = is_stopwatch;
        self.save_timer(id)
    }

    /// Stop the day's timer and turn it into a countdown of `minutes`.
    pub fn set_countdown(&mut self, id: &WorkoutDayId, minutes: i64) -> AppResult<()> {
        if minutes < 0 {
            return Err(AppError::InvalidInput(format!(
                "countdown minutes must not be negative (got {minutes})"
            )));
        }
        if (minutes as u64).checked_mul(60).is_none() {
            return Err(AppError::InvalidInput(format!(
                "countdown of {minutes} minutes is too long"
            )));
        }
        self.detach(id);
        let state = self.bound_state(id);
        {
            let mut st = state.borrow_mut();
            st.set_countdown(minutes as u64);
            st.running = false;
        }
        self.save_timer(id)
    }

    /// One cooperative second for all running timers. Nothing is persisted
    /// here; call [`Self::save_timers`] or stop the timer to write it back.
    pub fn tick(&mut self) {
        self.engine.tick();
    }

    pub fn timer_state(&self, id: &WorkoutDayId) -> Option<TimerState> {
        match self.timers.get(id) {
            Some(bound) => Some(bound.state.borrow().clone()),
            None => self.store.get(id).and_then(|e| e.timer.clone()),
        }
    }

    pub fn is_timer_running(&self, id: &WorkoutDayId) -> bool {
        self.timers
            .get(id)
            .and_then(|b| b.handle)
            .is_some_and(|h| self.engine.is_active(h))
    }

    // ---------------------------
    // Day-level edits
    // ---------------------------

    pub fn update_notes(&mut self, id: &WorkoutDayId, notes: &str) -> AppResult<()> {
        self.store.update_notes(id, notes)
    }

    /// Manual completion toggle, independent of any logging.
    pub fn toggle_done(&mut self, id: &WorkoutDayId) -> AppResult<bool> {
        if self.program.day(id).is_none() {
            return Err(AppError::UnknownDay(id.to_string()));
        }
        self.store.toggle_completed(id)
    }

    pub fn set_weight_unit(&mut self, unit: WeightUnit) -> AppResult<()> {
        self.store.set_weight_unit(unit)
    }
}
