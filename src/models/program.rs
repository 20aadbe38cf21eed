use super::day_id::WorkoutDayId;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Training goal chosen by the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    #[default]
    HybridAthlete,
    TacticalAthlete,
    ForceTestPrep,
}

impl Goal {
    pub fn slug(&self) -> &'static str {
        match self {
            Goal::HybridAthlete => "hybridAthlete",
            Goal::TacticalAthlete => "tacticalAthlete",
            Goal::ForceTestPrep => "forceTestPrep",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Goal::HybridAthlete => "Hybrid Athlete",
            Goal::TacticalAthlete => "Tactical Athlete",
            Goal::ForceTestPrep => "Force Test Prep",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn slug(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// A (goal, difficulty) pair selects one program and one persisted log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramSelection {
    pub goal: Goal,
    pub difficulty: Difficulty,
}

impl ProgramSelection {
    pub fn new(goal: Goal, difficulty: Difficulty) -> Self {
        Self { goal, difficulty }
    }

    /// Key of the persisted blob in the key-value store.
    pub fn storage_key(&self) -> String {
        format!("log_{}_{}", self.goal.slug(), self.difficulty.slug())
    }

    /// File name of the program definition inside the programs directory.
    pub fn program_file_name(&self) -> String {
        format!("{}_{}.yaml", self.goal.slug(), self.difficulty.slug())
    }
}

impl fmt::Display for ProgramSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.goal.title(), self.difficulty.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDay {
    pub day: String,
    pub focus: String,
    /// Prescription text, one exercise or structural note per line.
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramWeek {
    pub week: u32,
    #[serde(default)]
    pub days: Vec<ProgramDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    #[serde(default)]
    pub weeks: Vec<ProgramWeek>,
}

/// Read-only program tree: phases, weeks, days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl ProgramDefinition {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let program: ProgramDefinition = serde_yaml::from_str(content)?;
        program.validate()?;
        Ok(program)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::InvalidProgram(format!(
                "program file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Week numbers and day labels must be unique, otherwise day ids would
    /// collide.
    fn validate(&self) -> AppResult<()> {
        let mut weeks = HashSet::new();
        for w in self.phases.iter().flat_map(|p| p.weeks.iter()) {
            if !weeks.insert(w.week) {
                return Err(AppError::InvalidProgram(format!(
                    "week {} is defined twice",
                    w.week
                )));
            }
            let mut days = HashSet::new();
            for d in &w.days {
                if d.day.trim().is_empty() || d.day.contains('_') {
                    return Err(AppError::InvalidProgram(format!(
                        "invalid day label '{}' in week {}",
                        d.day, w.week
                    )));
                }
                if !days.insert(d.day.as_str()) {
                    return Err(AppError::InvalidProgram(format!(
                        "day {} is defined twice in week {}",
                        d.day, w.week
                    )));
                }
            }
        }
        Ok(())
    }

    /// All weeks in ascending week order, across phases.
    pub fn weeks(&self) -> Vec<&ProgramWeek> {
        let mut weeks: Vec<&ProgramWeek> =
            self.phases.iter().flat_map(|p| p.weeks.iter()).collect();
        weeks.sort_by_key(|w| w.week);
        weeks
    }

    pub fn week(&self, week: u32) -> Option<&ProgramWeek> {
        self.phases
            .iter()
            .flat_map(|p| p.weeks.iter())
            .find(|w| w.week == week)
    }

    pub fn get_day(&self, week: u32, day: &str) -> Option<&ProgramDay> {
        self.week(week)?.days.iter().find(|d| d.day == day)
    }

    pub fn day(&self, id: &WorkoutDayId) -> Option<&ProgramDay> {
        self.get_day(id.week, &id.day)
    }

    /// Every scheduled session of the program, in week/day order.
    pub fn day_ids(&self) -> Vec<WorkoutDayId> {
        let mut ids: Vec<WorkoutDayId> = self
            .weeks()
            .into_iter()
            .flat_map(|w| w.days.iter().map(move |d| WorkoutDayId::new(w.week, &d.day)))
            .collect();
        ids.sort();
        ids
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ProgramDefinition;

    pub const SAMPLE_PROGRAM: &str = r#"
name: Hybrid Athlete - Beginner
description: Build a foundation of strength and endurance
phases:
  - phase: Baseline
    weeks:
      - week: 0
        days:
          - day: Start
            focus: Baseline Assessment
            icon: test
            details: |
              Push-ups: max
              2.4km Run
  - phase: Foundation
    weeks:
      - week: 1
        days:
          - day: Mon
            focus: Upper Body Strength
            icon: strength
            details: |
              Push-ups: 3x8
              Bench Press: 4x5
          - day: Wed
            focus: Easy Run
            icon: run
            details: |
              Run: 5km easy pace
          - day: Fri
            focus: Conditioning
            icon: conditioning
            details: |
              3 Rounds:
              - 10 Burpees
              - 20 Mountain Climbers
              Plank: 3x45
      - week: 2
        days:
          - day: Mon
            focus: Upper Body Strength
            icon: strength
            details: |
              Push-ups: 3x9
              Bench Press: 4x5
          - day: Wed
            focus: Tempo Run
            icon: run
            details: |
              Run: 8-10km steady
"#;

    pub fn sample() -> ProgramDefinition {
        ProgramDefinition::from_yaml_str(SAMPLE_PROGRAM).expect("sample program")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_and_file_name() {
        let sel = ProgramSelection::new(Goal::TacticalAthlete, Difficulty::Advanced);
        assert_eq!(sel.storage_key(), "log_tacticalAthlete_advanced");
        assert_eq!(sel.program_file_name(), "tacticalAthlete_advanced.yaml");
    }

    #[test]
    fn test_lookup_days() {
        let p = fixtures::sample();
        assert_eq!(p.weeks().len(), 3);
        assert_eq!(p.get_day(1, "Wed").unwrap().focus, "Easy Run");
        assert!(p.get_day(1, "Tue").is_none());
        assert_eq!(p.day_ids().first(), Some(&WorkoutDayId::baseline()));
        assert_eq!(p.day_ids().len(), 6);
    }

    #[test]
    fn test_duplicate_week_is_rejected() {
        let yaml = r#"
name: Broken
phases:
  - phase: A
    weeks:
      - week: 1
  - phase: B
    weeks:
      - week: 1
"#;
        assert!(matches!(
            ProgramDefinition::from_yaml_str(yaml),
            Err(AppError::InvalidProgram(_))
        ));
    }
}
