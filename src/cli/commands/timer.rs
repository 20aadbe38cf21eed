use crate::cli::commands::{audit, open_session, parse_day};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, status_line, success};
use crate::utils::time::format_time;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

/// Persist the running timer every this many ticks.
const SAVE_EVERY: u64 = 10;

/// Stopwatch runs need an explicit end.
const DEFAULT_STOPWATCH_SECONDS: u64 = 60;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timer {
        day,
        countdown,
        seconds,
        reset,
        fast,
    } = cmd
    {
        let id = parse_day(day)?;
        let mut ctl = open_session(cfg)?;

        if *reset {
            let is_stopwatch = ctl.timer_state(&id).is_none_or(|t| t.is_stopwatch);
            ctl.reset_timer(&id, is_stopwatch)?;
            audit(&ctl, "timer", &id.to_string(), "Timer reset");
            success(format!("Timer of {id} reset"));
            return Ok(());
        }

        let is_stopwatch = match countdown {
            Some(minutes) => {
                ctl.set_countdown(&id, *minutes)?;
                false
            }
            None => {
                // keep an existing countdown, otherwise count up
                ctl.timer_state(&id).is_none_or(|t| t.is_stopwatch)
            }
        };

        let limit = match (seconds, is_stopwatch) {
            (Some(s), _) => *s,
            (None, true) => DEFAULT_STOPWATCH_SECONDS,
            (None, false) => ctl.timer_state(&id).map_or(0, |t| t.time),
        };

        let done = Rc::new(Cell::new(false));
        let flag = Rc::clone(&done);
        ctl.start_timer(
            &id,
            is_stopwatch,
            Some(Box::new(|t: u64| status_line(format!("⏱  {}", format_time(t))))),
            Some(Box::new(move || flag.set(true))),
        )?;
        info(format!(
            "{} started for {id}",
            if is_stopwatch { "Stopwatch" } else { "Countdown" }
        ));

        let mut ticks = 0;
        while ticks < limit && !done.get() {
            if !*fast {
                thread::sleep(Duration::from_secs(1));
            }
            ctl.tick();
            ticks += 1;
            if ticks % SAVE_EVERY == 0 {
                ctl.save_timers()?;
            }
        }
        println!();

        ctl.stop_timer(&id)?;
        let final_time = ctl.timer_state(&id).map_or(0, |t| t.time);
        audit(
            &ctl,
            "timer",
            &id.to_string(),
            &format!("Timer stopped at {}", format_time(final_time)),
        );

        if done.get() {
            success("⏰ Time's up!");
        } else {
            success(format!("Timer stopped at {}", format_time(final_time)));
        }
    }
    Ok(())
}
