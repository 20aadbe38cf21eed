pub mod aggregate;
pub mod backup;
pub mod log;
pub mod parser;
pub mod progress;
pub mod session;
pub mod timer;
