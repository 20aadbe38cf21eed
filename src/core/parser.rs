//! Turns a day's prescription text into structured exercise records.
//!
//! The grammar is loose on purpose and stays in this module: everything
//! downstream works on [`ExerciseRecord`]s only.

use crate::models::exercise::FREEFORM_DESCRIPTION;
use crate::models::{ExerciseRecord, SetRecord};
use once_cell::sync::Lazy;
use regex::Regex;

static SETS_X_REPS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)x(\d+)").unwrap());

/// Larger set counts are treated like an unrecognised prescription.
pub const MAX_SETS: usize = 50;

/// Structural lines (round headers, bullet sub-steps, chaining notes).
fn is_structural(line: &str) -> bool {
    line.is_empty()
        || line.contains("Rounds")
        || line.starts_with('-')
        || line.contains("Followed by")
}

/// Sets for a description: `NxM` gives N sets of M reps, anything else
/// ("max", "5km", "45s", or more than [`MAX_SETS`] sets) gives a single
/// empty set.
pub fn parse_sets(description: &str) -> Vec<SetRecord> {
    let prescribed = SETS_X_REPS.captures(description).and_then(|caps| {
        let sets: usize = caps[1].parse().ok().filter(|n| *n <= MAX_SETS)?;
        let reps: u32 = caps[2].parse().ok()?;
        Some((sets, reps))
    });

    match prescribed {
        Some((sets, reps)) => (0..sets).map(|_| SetRecord::prescribed(reps)).collect(),
        None => vec![SetRecord::default()],
    }
}

pub fn parse_line(line: &str) -> Option<ExerciseRecord> {
    let line = line.trim();
    if is_structural(line) {
        return None;
    }

    let record = match line.split_once(':') {
        Some((name, description)) => {
            let description = description.trim();
            ExerciseRecord::new(name.trim(), description, parse_sets(description))
        }
        None => ExerciseRecord::new(line, FREEFORM_DESCRIPTION, vec![SetRecord::default()]),
    };
    Some(record)
}

/// Parse a whole prescription, one exercise per meaningful line.
pub fn parse(prescription: &str) -> Vec<ExerciseRecord> {
    prescription.lines().filter_map(parse_line).collect()
}
