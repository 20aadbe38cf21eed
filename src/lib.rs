//! hybridops library root.
//! Exposes the CLI parser, the high-level run() function and the training
//! core (timer engine, parser, log store, analytics, session controller).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Select { .. } => cli::commands::select::handle(&cli.command, cfg),
        Commands::Program { .. } => cli::commands::program::handle(&cli.command, cfg),
        Commands::Start { .. }
        | Commands::Show { .. }
        | Commands::Set { .. }
        | Commands::Check { .. }
        | Commands::AddSet { .. }
        | Commands::Notes { .. }
        | Commands::Finish { .. }
        | Commands::Close
        | Commands::Mark { .. } => cli::commands::workout::handle(&cli.command, cfg),
        Commands::Timer { .. } => cli::commands::timer::handle(&cli.command, cfg),
        Commands::Stats { .. }
        | Commands::Progress
        | Commands::History { .. }
        | Commands::OneRm { .. } => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Info { .. } => cli::commands::info::handle(&cli.command, cfg),
        Commands::Unit { .. } => cli::commands::unit::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Apply the global command-line overrides on top of the loaded config.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(goal) = cli.goal {
        cfg.goal = goal;
    }
    if let Some(difficulty) = cli.difficulty {
        cfg.difficulty = difficulty;
    }
    if let Some(program) = &cli.program {
        cfg.program_override = Some(program.clone());
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    apply_overrides(&cli, &mut cfg);

    // 4️⃣ logging: RUST_LOG wins over the configured level
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.log_level.clone()),
    )
    .try_init();
    log::debug!("database: {}", cfg.database);

    // 5️⃣ dispatch
    dispatch(&cli, &cfg)
}
