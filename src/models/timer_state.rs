use serde::{Deserialize, Serialize};

/// Persistable state of a stopwatch or countdown.
///
/// `initial_time` remembers the countdown target so that a reset can restore
/// it. `time` is unsigned, a countdown never goes below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub time: u64,
    pub running: bool,
    pub is_stopwatch: bool,
    pub initial_time: u64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(0, true)
    }
}

impl TimerState {
    pub fn new(initial_seconds: u64, is_stopwatch: bool) -> Self {
        Self {
            time: initial_seconds,
            running: false,
            is_stopwatch,
            initial_time: initial_seconds,
        }
    }

    /// Back to zero (stopwatch) or to the countdown target.
    ///
    /// Only flips `running`; a tick source still registered for this state
    /// keeps mutating it until it is stopped.
    pub fn reset(&mut self, is_stopwatch: bool) {
        self.time = if is_stopwatch { 0 } else { self.initial_time };
        self.running = false;
    }

    /// Turn the timer into a countdown of `minutes`. Saturates; callers
    /// taking user input reject oversized values first.
    pub fn set_countdown(&mut self, minutes: u64) {
        self.time = minutes.saturating_mul(60);
        self.initial_time = self.time;
        self.is_stopwatch = false;
    }

    /// One elapsed second. Returns `true` when the completion callback is due.
    ///
    /// A countdown fires on the tick that reaches zero and on every tick
    /// spent at zero afterwards.
    pub fn advance(&mut self) -> bool {
        if self.is_stopwatch {
            self.time += 1;
            false
        } else if self.time > 0 {
            self.time -= 1;
            self.time == 0
        } else {
            true
        }
    }
}
