pub mod day_id;
pub mod exercise;
pub mod exercise_info;
pub mod log_entry;
pub mod program;
pub mod set_record;
pub mod state;
pub mod timer_state;
pub mod weight_unit;

pub use day_id::WorkoutDayId;
pub use exercise::ExerciseRecord;
pub use exercise_info::{ExerciseInfo, ExerciseLibrary};
pub use log_entry::WorkoutLogEntry;
pub use program::{Difficulty, Goal, ProgramDefinition, ProgramSelection};
pub use set_record::{LogValue, SetField, SetRecord};
pub use state::ProgramState;
pub use timer_state::TimerState;
pub use weight_unit::WeightUnit;
