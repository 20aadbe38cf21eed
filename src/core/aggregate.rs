//! Progress analytics over the program definition and the persisted state.
//!
//! Completion of a day is read from the completion flags only; logged sets
//! never mark a day done.

use crate::errors::{AppError, AppResult};
use crate::models::{LogValue, ProgramDefinition, ProgramState, WorkoutDayId};
use crate::utils::time::parse_clock;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

/// First distance in a prescription; a range keeps its lower bound.
static DISTANCE_KM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:-\s*\d+(?:\.\d+)?\s*)?km").unwrap()
});

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct OverallProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u32,
}

/// Weekly debrief numbers.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct WeekStats {
    pub workouts: usize,
    pub reps: f64,
    pub volume: f64,
    pub distance: f64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    fn push(&mut self, label: String, value: f64) {
        self.labels.push(label);
        self.values.push(value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One row per program week, for the per-week charts.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct WeeklySeries {
    pub labels: Vec<String>,
    pub workouts: Vec<usize>,
    pub volume: Vec<f64>,
    pub distance: Vec<f64>,
}

fn percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u32
}

fn completed_days(program: &ProgramDefinition, state: &ProgramState, week: u32) -> (usize, usize) {
    let Some(w) = program.week(week) else {
        return (0, 0);
    };
    let done = w
        .days
        .iter()
        .filter(|d| state.is_completed(&WorkoutDayId::new(week, &d.day)))
        .count();
    (done, w.days.len())
}

pub fn week_progress(program: &ProgramDefinition, state: &ProgramState, week: u32) -> u32 {
    let (done, total) = completed_days(program, state, week);
    percentage(done, total)
}

pub fn overall_progress(program: &ProgramDefinition, state: &ProgramState) -> OverallProgress {
    let (completed, total) = program
        .weeks()
        .iter()
        .map(|w| completed_days(program, state, w.week))
        .fold((0, 0), |(c, t), (dc, dt)| (c + dc, t + dt));

    OverallProgress {
        completed,
        total,
        percentage: percentage(completed, total),
    }
}

/// `true` when the week exists, has days, and all of them are done.
pub fn is_week_complete(program: &ProgramDefinition, state: &ProgramState, week: u32) -> bool {
    let (done, total) = completed_days(program, state, week);
    total > 0 && done == total
}

/// Kilometres announced by a prescription text, if any.
pub fn distance_km(prescription: &str) -> Option<f64> {
    DISTANCE_KM
        .captures(prescription)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn week_stats(program: &ProgramDefinition, state: &ProgramState, week: u32) -> WeekStats {
    let mut stats = WeekStats::default();
    let Some(w) = program.week(week) else {
        return stats;
    };

    for day in &w.days {
        let id = WorkoutDayId::new(week, &day.day);
        if !state.is_completed(&id) {
            continue;
        }
        stats.workouts += 1;

        if let Some(entry) = state.logs.get(&id) {
            for set in entry.exercises.iter().flat_map(|e| e.sets.iter()) {
                if !set.completed {
                    continue;
                }
                if let Some((reps, weight)) = set.reps_and_weight() {
                    stats.reps += reps;
                    stats.volume += reps * weight;
                }
            }
        }

        if day.focus.to_lowercase().contains("run")
            && let Some(km) = distance_km(&day.details)
        {
            stats.distance += km;
        }
    }

    log::debug!("week {week} stats: {stats:?}");
    stats
}

/// Epley estimate, rounded to a whole unit.
pub fn estimate_one_rep_max(weight: f64, reps: f64) -> AppResult<u32> {
    if !weight.is_finite() || !reps.is_finite() || weight <= 0.0 || reps <= 0.0 {
        return Err(AppError::InvalidOneRepMax);
    }
    Ok((weight * (1.0 + reps / 30.0)).round() as u32)
}

/// Same as [`estimate_one_rep_max`] for raw text input.
pub fn one_rep_max_from_input(weight: &str, reps: &str) -> AppResult<u32> {
    let w = weight.trim().parse::<f64>().map_err(|_| AppError::InvalidOneRepMax)?;
    let r = reps.trim().parse::<f64>().map_err(|_| AppError::InvalidOneRepMax)?;
    estimate_one_rep_max(w, r)
}

/// Score of a free-form entry: a logged time (`MM:SS` → seconds) or a number.
fn freeform_score(value: &LogValue) -> Option<f64> {
    match value {
        LogValue::Number(n) => Some(*n),
        LogValue::Text(s) => parse_clock(s)
            .map(|secs| secs as f64)
            .or_else(|| value.as_number()),
    }
}

/// Progress of one exercise across every logged day, in week/day order.
///
/// Strength exercises plot the heaviest completed set; free-form entries
/// plot the score of their single set. Days without a positive value are
/// left out.
pub fn exercise_time_series(state: &ProgramState, exercise: &str) -> TimeSeries {
    let mut series = TimeSeries::default();

    for entry in state.logs.values() {
        let Some(ex) = entry.exercise(exercise) else {
            continue;
        };

        let value = if ex.is_freeform() {
            ex.sets
                .first()
                .and_then(|s| freeform_score(&s.weight).or_else(|| freeform_score(&s.reps)))
        } else {
            ex.sets
                .iter()
                .filter(|s| s.completed)
                .filter_map(|s| s.weight.as_number())
                .fold(None, |best: Option<f64>, w| Some(best.map_or(w, |b| b.max(w))))
        };

        if let Some(v) = value.filter(|v| *v > 0.0) {
            series.push(entry.day_id.short_label(), v);
        }
    }

    series
}

/// Names of exercises with a completed set or an entered weight/result,
/// sorted. Prescribed rep targets alone do not count.
pub fn logged_exercise_names(state: &ProgramState) -> Vec<String> {
    let names: BTreeSet<&str> = state
        .logs
        .values()
        .flat_map(|e| e.exercises.iter())
        .filter(|ex| {
            ex.sets
                .iter()
                .any(|s| s.completed || !s.weight.is_empty())
        })
        .map(|ex| ex.name.as_str())
        .collect();
    names.into_iter().map(String::from).collect()
}

/// Workouts, volume and distance for every program week.
pub fn weekly_series(program: &ProgramDefinition, state: &ProgramState) -> WeeklySeries {
    let mut series = WeeklySeries::default();
    for w in program.weeks() {
        let stats = week_stats(program, state, w.week);
        series.labels.push(if w.week == 0 {
            "Baseline".to_string()
        } else {
            format!("Week {}", w.week)
        });
        series.workouts.push(stats.workouts);
        series.volume.push(stats.volume);
        series.distance.push(stats.distance);
    }
    series
}
