use crate::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Reference entries shipped with the binary.
const BUNDLED_LIBRARY: &str = include_str!("../../library/exercises.yaml");

/// How-to card for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub name: String,
    /// Other names the same movement appears under in programs.
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl ExerciseInfo {
    fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLibrary {
    #[serde(default)]
    pub exercises: Vec<ExerciseInfo>,
}

impl ExerciseLibrary {
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn bundled() -> AppResult<Self> {
        Self::from_yaml_str(BUNDLED_LIBRARY)
    }

    /// Case-insensitive lookup by name or alias.
    pub fn lookup(&self, name: &str) -> Option<&ExerciseInfo> {
        let name = name.trim();
        self.exercises.iter().find(|e| e.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_library_has_program_exercises() {
        let lib = ExerciseLibrary::bundled().unwrap();
        for name in ["Push-ups", "Pull-ups", "Squats", "Burpees", "Mountain Climbers", "Plank", "Running"] {
            let info = lib.lookup(name).unwrap();
            assert!(!info.instructions.is_empty(), "{name} has no instructions");
            assert!(!info.tips.is_empty(), "{name} has no tips");
        }
        assert_eq!(lib.lookup("Push-ups").unwrap().category, "Strength");
    }

    #[test]
    fn test_lookup_ignores_case_and_uses_aliases() {
        let lib = ExerciseLibrary::bundled().unwrap();
        assert_eq!(lib.lookup(" push-UPS ").unwrap().name, "Push-ups");
        assert_eq!(lib.lookup("Run").unwrap().name, "Running");
    }

    #[test]
    fn test_unknown_exercise_is_none() {
        let lib = ExerciseLibrary::bundled().unwrap();
        assert!(lib.lookup("Bench Press").is_none());
        assert!(ExerciseLibrary::default().lookup("Push-ups").is_none());
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let lib = ExerciseLibrary::from_yaml_str("exercises:\n  - name: Row\n    category: Strength\n").unwrap();
        let row = lib.lookup("row").unwrap();
        assert!(row.primary_muscles.is_empty());
        assert!(row.aliases.is_empty());
    }
}
