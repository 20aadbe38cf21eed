pub mod backend;
pub mod log_store;

pub use backend::{KvBackend, MemoryBackend};
pub use log_store::WorkoutLogStore;
