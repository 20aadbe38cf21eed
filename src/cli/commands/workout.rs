use crate::cli::commands::stats::print_week_debrief;
use crate::cli::commands::{audit, open_session, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionController;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{ExerciseLibrary, LogValue, SetField, WorkoutDayId};
use crate::ui::messages::{header, hint, info, success, warning};
use crate::utils::colors::{GREY, RESET, colorize_optional};
use crate::utils::formatting::{bold, check_mark};
use crate::utils::table::Table;
use crate::utils::time::{format_elapsed, format_time};
use chrono::Utc;

/// 1-based CLI position → index.
fn position(n: usize, what: &str) -> AppResult<usize> {
    n.checked_sub(1)
        .ok_or_else(|| AppError::InvalidInput(format!("{what} numbers start at 1")))
}

fn print_day(ctl: &SessionController<DbPool>, id: &WorkoutDayId) {
    let focus = ctl
        .program()
        .day(id)
        .map(|d| d.focus.as_str())
        .unwrap_or("unscheduled");
    header(format!("Week {} · {} · {}", id.week, id.day, focus));

    let Some(entry) = ctl.store().get(id) else {
        hint("Not started yet. Run `hybridops start` for this day.");
        return;
    };

    let mut status = vec![format!("done: {}", check_mark(ctl.store().is_completed(id)))];
    if let Some(elapsed) = ctl.elapsed_display(id, Utc::now()) {
        status.push(format!("session: {elapsed}"));
    }
    if let Some(t) = &entry.timer {
        let mode = if t.is_stopwatch { "stopwatch" } else { "countdown" };
        status.push(format!("{mode}: {}", format_time(t.time)));
    }
    println!("{}\n", status.join("   "));

    let unit = ctl.store().weight_unit();
    let library = ExerciseLibrary::bundled().unwrap_or_default();
    let mut with_info = false;
    for ex in ctl.renderable_exercises(id) {
        let marker = if library.lookup(&ex.name).is_some() {
            with_info = true;
            " ℹ"
        } else {
            ""
        };
        println!(
            "{}. {}{marker} {GREY}{}{RESET}",
            ex.index + 1,
            bold(&ex.name),
            ex.description
        );
        let weight_header = if ex.freeform {
            "Result".to_string()
        } else {
            format!("Weight ({unit})")
        };
        let mut table = Table::new(vec![
            "Set".to_string(),
            "Reps".to_string(),
            weight_header,
            "Done".to_string(),
            "Previous".to_string(),
        ]);
        for set in &ex.sets {
            table.add_row(vec![
                (set.index + 1).to_string(),
                colorize_optional(&set.record.reps.to_string()),
                colorize_optional(&set.record.weight.to_string()),
                check_mark(set.record.completed),
                set.previous
                    .as_deref()
                    .map(|p| format!("{GREY}{p}{RESET}"))
                    .unwrap_or_default(),
            ]);
        }
        print!("{}", table.render());
        println!();
    }

    if !entry.notes.is_empty() {
        println!("📝 {}", entry.notes);
    }
    if with_info {
        hint("ℹ Run `hybridops info \"<exercise>\"` for instructions and tips.");
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut ctl = open_session(cfg)?;

    match cmd {
        Commands::Start { day } => {
            let id = parse_day(day)?;
            let resumed = ctl.store().get(&id).is_some_and(|e| e.start_time.is_some());
            ctl.start_workout(&id, Utc::now())?;
            audit(&ctl, "start", &id.to_string(), if resumed { "Workout resumed" } else { "Workout started" });
            if resumed {
                info(format!("Resuming workout {id}"));
            } else {
                success(format!("Workout {id} started"));
            }
            print_day(&ctl, &id);
        }

        Commands::Show { day } => {
            let id = parse_day(day)?;
            print_day(&ctl, &id);
        }

        Commands::Set {
            day,
            exercise,
            set,
            reps,
            weight,
        } => {
            let id = parse_day(day)?;
            let (ex, st) = (position(*exercise, "exercise")?, position(*set, "set")?);
            if reps.is_none() && weight.is_none() {
                return Err(AppError::InvalidInput(
                    "nothing to record: pass --reps and/or --weight".into(),
                ));
            }

            let mut applied = true;
            for (field, value) in [(SetField::Reps, reps), (SetField::Weight, weight)] {
                if let Some(v) = value {
                    applied &= ctl.store_mut().update_set_field(
                        &id,
                        ex,
                        st,
                        field,
                        LogValue::from_input(v),
                    )?;
                }
            }

            if applied {
                audit(&ctl, "set", &id.to_string(), &format!("exercise {exercise} set {set} updated"));
                success(format!("Set {set} of exercise {exercise} recorded for {id}"));
            } else {
                warning(format!("No set {set} for exercise {exercise} on {id}; nothing recorded"));
            }
        }

        Commands::Check { day, exercise, set } => {
            let id = parse_day(day)?;
            let (ex, st) = (position(*exercise, "exercise")?, position(*set, "set")?);
            if ctl.store_mut().toggle_set_completion(&id, ex, st)? {
                let done = ctl
                    .store()
                    .get(&id)
                    .and_then(|e| e.exercises.get(ex))
                    .and_then(|e| e.sets.get(st))
                    .is_some_and(|s| s.completed);
                audit(&ctl, "check", &id.to_string(), &format!("exercise {exercise} set {set} done={done}"));
                success(format!("Set {set} {}", if done { "done" } else { "not done" }));
            } else {
                warning(format!("No set {set} for exercise {exercise} on {id}"));
            }
        }

        Commands::AddSet { day, exercise } => {
            let id = parse_day(day)?;
            let ex = position(*exercise, "exercise")?;
            if ctl.store_mut().append_set(&id, ex)? {
                audit(&ctl, "add_set", &id.to_string(), &format!("set added to exercise {exercise}"));
                success(format!("Set added to exercise {exercise}"));
            } else {
                warning(format!("No exercise {exercise} on {id}"));
            }
        }

        Commands::Notes { day, text } => {
            let id = parse_day(day)?;
            ctl.update_notes(&id, text)?;
            audit(&ctl, "notes", &id.to_string(), "Notes updated");
            success(format!("Notes saved for {id}"));
        }

        Commands::Finish { day } => {
            let id = parse_day(day)?;
            let summary = ctl.finish_workout(&id, Utc::now())?;
            audit(&ctl, "finish", &id.to_string(), "Workout finished");

            success(format!("Workout {id} complete"));
            if let Some(secs) = summary.duration_seconds {
                info(format!("Duration: {}", format_elapsed(secs.max(0) as u64)));
            }
            if summary.week_completed {
                println!();
                print_week_debrief(&ctl, id.week);
            }
        }

        Commands::Close => {
            ctl.close_session()?;
            audit(&ctl, "close", "", "Timers stopped");
            success("All timers stopped; started workouts can be resumed");
        }

        Commands::Mark { day } => {
            let id = parse_day(day)?;
            let done = ctl.toggle_done(&id)?;
            audit(&ctl, "mark", &id.to_string(), &format!("done={done}"));
            if done {
                success(format!("{id} marked as done"));
            } else {
                info(format!("{id} marked as not done"));
            }
        }

        _ => {}
    }

    Ok(())
}
