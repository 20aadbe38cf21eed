use crate::cli::commands::load_program;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Persist the goal/difficulty pair; the program file must exist.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Select { goal, difficulty } = cmd {
        let mut updated = Config::load()?;
        updated.goal = *goal;
        updated.difficulty = *difficulty;

        let mut candidate = cfg.clone();
        candidate.goal = *goal;
        candidate.difficulty = *difficulty;
        candidate.program_override = None;
        let program = load_program(&candidate)?;

        updated.save()?;
        success(format!("Active program: {}", program.name));
        info(format!("Progress is stored under '{}'", updated.selection().storage_key()));
    }
    Ok(())
}
