use super::set_record::SetRecord;
use serde::{Deserialize, Serialize};

/// Description given to prescription lines that carry no `Name: detail` split.
pub const FREEFORM_DESCRIPTION: &str = "Log your time/reps";

/// One exercise of a logged workout, in prescription order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sets: Vec<SetRecord>,
}

impl ExerciseRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>, sets: Vec<SetRecord>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            sets,
        }
    }

    /// Time- or score-based entry logged as a single free-form set.
    pub fn is_freeform(&self) -> bool {
        self.description == FREEFORM_DESCRIPTION
    }
}
