use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{overall_progress, week_progress};
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutDayId;
use crate::ui::messages::{header, hint};
use crate::utils::colors::{GREY, RESET, color_for_progress};
use crate::utils::formatting::{check_mark, progress_bar};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Program { week } = cmd {
        let ctl = open_session(cfg)?;
        let program = ctl.program();
        let state = ctl.store().state();

        header(&program.name);
        if !program.description.is_empty() {
            hint(&program.description);
        }
        println!();

        match week {
            None => {
                let mut table = Table::new(vec!["Week", "Phase", "Days", "Progress"]);
                for phase in &program.phases {
                    for w in &phase.weeks {
                        let pct = week_progress(program, state, w.week);
                        let color = color_for_progress(pct);
                        table.add_row(vec![
                            format!("{color}{}{RESET}", w.week),
                            phase.phase.clone(),
                            w.days.len().to_string(),
                            progress_bar(pct, 20),
                        ]);
                    }
                }
                print!("{}", table.render());

                let overall = overall_progress(program, state);
                println!(
                    "\nOverall: {}/{} sessions ({}%)",
                    overall.completed, overall.total, overall.percentage
                );
            }
            Some(n) => {
                let w = program
                    .week(*n)
                    .ok_or_else(|| AppError::InvalidInput(format!("week {n} is not part of the program")))?;

                for d in &w.days {
                    let id = WorkoutDayId::new(w.week, &d.day);
                    println!("{} {}  {}", check_mark(state.is_completed(&id)), id, d.focus);
                    for line in d.details.lines().filter(|l| !l.trim().is_empty()) {
                        println!("      {GREY}{}{RESET}", line.trim());
                    }
                }
                println!("\nWeek progress: {}", progress_bar(week_progress(program, state, *n), 20));
            }
        }
    }
    Ok(())
}
