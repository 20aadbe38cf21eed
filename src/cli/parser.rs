use crate::export::ExportFormat;
use crate::models::{Difficulty, Goal, WeightUnit};
use clap::{Parser, Subcommand};

/// Command-line interface definition for hybridops
/// CLI application to follow a multi-week training program with SQLite
#[derive(Parser)]
#[command(
    name = "hybridops",
    version = env!("CARGO_PKG_VERSION"),
    about = "Follow a multi-week hybrid training program: log sets, run session timers and track progress",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this program YAML file instead of the configured selection
    #[arg(global = true, long = "program", value_name = "FILE")]
    pub program: Option<String>,

    /// Override the configured goal for this run
    #[arg(global = true, long = "goal", value_enum)]
    pub goal: Option<Goal>,

    /// Override the configured difficulty for this run
    #[arg(global = true, long = "difficulty", value_enum)]
    pub difficulty: Option<Difficulty>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, configuration and bundled programs
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Choose the active program (saved in the configuration file)
    Select {
        #[arg(value_enum)]
        goal: Goal,

        #[arg(value_enum)]
        difficulty: Difficulty,
    },

    /// Show the program: weeks with progress, or the days of one week
    Program {
        #[arg(long, short, help = "Show the days of this week")]
        week: Option<u32>,
    },

    /// Start or resume the workout of a day (e.g. 3_Mon)
    Start { day: String },

    /// Show the logged exercises of a day with last session's values
    Show { day: String },

    /// Record reps and/or weight of a set
    Set {
        day: String,

        /// Exercise number as shown by `show` (1-based)
        exercise: usize,

        /// Set number as shown by `show` (1-based)
        set: usize,

        #[arg(long, help = "Reps, or a time such as 12:30")]
        reps: Option<String>,

        #[arg(long, help = "Weight in the selected unit, or a free-form score")]
        weight: Option<String>,
    },

    /// Toggle the done mark of a set
    Check {
        day: String,
        exercise: usize,
        set: usize,
    },

    /// Append an empty set to an exercise
    AddSet { day: String, exercise: usize },

    /// Replace the notes of a day
    Notes { day: String, text: String },

    /// Finish the workout: mark the day complete and stop its timer
    Finish { day: String },

    /// Stop all running timers without finishing any workout
    Close,

    /// Toggle the completion mark of a day without logging
    Mark { day: String },

    /// Run the live stopwatch or countdown of a day
    Timer {
        day: String,

        #[arg(long, value_name = "MINUTES", allow_negative_numbers = true)]
        countdown: Option<i64>,

        #[arg(long, value_name = "SECONDS", help = "Stop after this many seconds")]
        seconds: Option<u64>,

        #[arg(long, help = "Reset the timer instead of running it")]
        reset: bool,

        #[arg(long, hide = true)]
        fast: bool,
    },

    /// Weekly debrief: workouts, reps, volume and distance
    Stats { week: u32 },

    /// Overall progress with per-week charts
    Progress,

    /// Progress of one exercise over time (no name: list logged exercises)
    History { exercise: Option<String> },

    /// Show how to perform an exercise (category, muscles, instructions, tips)
    Info { exercise: String },

    /// Estimate a one-rep max (Epley)
    OneRm { weight: String, reps: String },

    /// Show or change the weight unit
    Unit {
        #[arg(value_enum)]
        unit: Option<WeightUnit>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export logged sets of the active program
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
