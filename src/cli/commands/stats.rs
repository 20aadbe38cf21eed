use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::{
    exercise_time_series, is_week_complete, logged_exercise_names,
    one_rep_max_from_input, overall_progress, week_progress, week_stats, weekly_series,
};
use crate::core::session::SessionController;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::WeightUnit;
use crate::ui::messages::{header, hint, info, success};
use crate::utils::colors::{GREY, LIME, RESET};
use crate::utils::format_amount;
use crate::utils::formatting::progress_bar;
use crate::utils::table::Table;
use crate::utils::time::format_time;

pub(crate) fn print_week_debrief(ctl: &SessionController<DbPool>, week: u32) {
    let state = ctl.store().state();
    let stats = week_stats(ctl.program(), state, week);
    let unit = state.weight_unit;

    if is_week_complete(ctl.program(), state, week) {
        header(format!("🏆 Week {week} complete!"));
    } else {
        header(format!("Week {week} debrief"));
    }
    println!("  Workouts  {LIME}{}{RESET}", stats.workouts);
    println!("  Reps      {LIME}{}{RESET}", format_amount(stats.reps));
    println!("  Volume    {LIME}{}{RESET} {unit}", format_amount(stats.volume));
    println!("  Distance  {LIME}{}{RESET} km", format_amount(stats.distance));
    println!(
        "  Progress  {}",
        progress_bar(week_progress(ctl.program(), state, week), 20)
    );
}

/// Bar of `value` relative to `max`, for the text charts.
fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    format!("{LIME}{}{RESET}", "█".repeat(filled.min(width)))
}

fn print_progress(ctl: &SessionController<DbPool>) {
    let state = ctl.store().state();
    let overall = overall_progress(ctl.program(), state);
    header(format!("{} progress", ctl.program().name));
    println!(
        "{} {}/{} sessions\n",
        progress_bar(overall.percentage, 30),
        overall.completed,
        overall.total
    );

    let series = weekly_series(ctl.program(), state);
    let max_volume = series.volume.iter().cloned().fold(0.0, f64::max);
    let unit = state.weight_unit;

    let mut table = Table::new(vec![
        "Week".to_string(),
        "Workouts".to_string(),
        format!("Volume ({unit})"),
        "Distance (km)".to_string(),
        String::new(),
    ]);
    for i in 0..series.labels.len() {
        table.add_row(vec![
            series.labels[i].clone(),
            series.workouts[i].to_string(),
            format_amount(series.volume[i]),
            format_amount(series.distance[i]),
            bar(series.volume[i], max_volume, 20),
        ]);
    }
    print!("{}", table.render());
}

fn print_history(ctl: &SessionController<DbPool>, exercise: &str, unit: WeightUnit) -> AppResult<()> {
    let series = exercise_time_series(ctl.store().state(), exercise);
    if series.is_empty() {
        return Err(AppError::InvalidInput(format!(
            "no logged values for '{exercise}'"
        )));
    }

    // free-form results are times or scores, not weights
    let freeform = ctl
        .store()
        .entries()
        .filter_map(|e| e.exercise(exercise))
        .any(|e| e.is_freeform());

    header(format!("{exercise} history"));
    let max = series.values.iter().cloned().fold(0.0, f64::max);
    for (label, value) in series.labels.iter().zip(&series.values) {
        let shown = if freeform {
            format_time(*value as u64)
        } else {
            format!("{} {unit}", format_amount(*value))
        };
        println!("{label:<8} {shown:>10}  {}", bar(*value, max, 30));
    }
    if freeform {
        hint("Results shown as MM:SS; plain numbers are counted as seconds.");
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Stats { week } => {
            let ctl = open_session(cfg)?;
            if ctl.program().week(*week).is_none() {
                return Err(AppError::InvalidInput(format!(
                    "week {week} is not part of the program"
                )));
            }
            print_week_debrief(&ctl, *week);
        }

        Commands::Progress => {
            let ctl = open_session(cfg)?;
            print_progress(&ctl);
        }

        Commands::History { exercise } => {
            let ctl = open_session(cfg)?;
            match exercise {
                Some(name) => print_history(&ctl, name, ctl.store().weight_unit())?,
                None => {
                    let names = logged_exercise_names(ctl.store().state());
                    if names.is_empty() {
                        info("No exercises logged yet.");
                    } else {
                        header("Logged exercises");
                        for n in names {
                            println!("  {n}");
                        }
                        println!("\n{GREY}Run `hybridops history \"<name>\"` for a chart.{RESET}");
                    }
                }
            }
        }

        Commands::OneRm { weight, reps } => {
            let estimate = one_rep_max_from_input(weight, reps)?;
            success(format!("Estimated 1RM: {estimate}"));
            for pct in [90u32, 80, 70] {
                hint(format!("  {pct}%  {}", format_amount((estimate * pct) as f64 / 100.0)));
            }
        }

        _ => {}
    }
    Ok(())
}
