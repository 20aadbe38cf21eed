//! Stopwatch/countdown engine.
//!
//! Tick sources are cooperative: nothing runs in the background, a driver
//! calls [`TimerEngine::tick`] once per elapsed second (the CLI sleeps
//! between calls, tests call it directly). Each registered source advances
//! the [`TimerState`] it was started with and then runs its callbacks.

use crate::models::TimerState;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Timer state shared between its owner and the engine.
pub type SharedTimer = Rc<RefCell<TimerState>>;

pub type TickCallback = Box<dyn FnMut(u64)>;
pub type CompleteCallback = Box<dyn FnMut()>;

pub fn shared(state: TimerState) -> SharedTimer {
    Rc::new(RefCell::new(state))
}

/// Cancellation handle returned by [`TimerEngine::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

struct TickSource {
    state: SharedTimer,
    on_tick: Option<TickCallback>,
    on_complete: Option<CompleteCallback>,
}

#[derive(Default)]
pub struct TimerEngine {
    next_id: u64,
    sources: BTreeMap<TimerHandle, TickSource>,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the state running and register a 1-second tick source for it.
    ///
    /// The engine does not look for an existing source on the same state;
    /// starting twice without a stop makes the state advance twice per tick.
    pub fn start(
        &mut self,
        state: &SharedTimer,
        on_tick: Option<TickCallback>,
        on_complete: Option<CompleteCallback>,
    ) -> TimerHandle {
        state.borrow_mut().running = true;

        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.sources.insert(
            handle,
            TickSource {
                state: Rc::clone(state),
                on_tick,
                on_complete,
            },
        );
        log::debug!("timer {:?} started", handle);
        handle
    }

    /// Cancel the tick source and mark the state stopped. Safe to repeat.
    pub fn stop(&mut self, state: &SharedTimer, handle: TimerHandle) {
        if self.sources.remove(&handle).is_some() {
            log::debug!("timer {:?} stopped", handle);
        }
        state.borrow_mut().running = false;
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.sources.contains_key(&handle)
    }

    pub fn active_count(&self) -> usize {
        self.sources.len()
    }

    /// One second for every registered source, in start order.
    pub fn tick(&mut self) {
        for source in self.sources.values_mut() {
            // release the borrow before the callbacks read the state
            let (time, completed) = {
                let mut st = source.state.borrow_mut();
                let completed = st.advance();
                (st.time, completed)
            };

            if completed && let Some(cb) = source.on_complete.as_mut() {
                cb();
            }
            if let Some(cb) = source.on_tick.as_mut() {
                cb(time);
            }
        }
    }

    pub fn advance(&mut self, seconds: u64) {
        for _ in 0..seconds {
            self.tick();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, CompleteCallback) {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        (hits, Box::new(move || h.set(h.get() + 1)))
    }

    #[test]
    fn test_stopwatch_counts_up() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::new(0, true));
        let handle = engine.start(&state, None, None);
        assert!(state.borrow().running);

        engine.advance(3);
        assert_eq!(state.borrow().time, 3);

        engine.stop(&state, handle);
        assert!(!state.borrow().running);
    }

    #[test]
    fn test_countdown_stops_at_zero_and_completes() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::new(5, false));
        let (hits, on_complete) = counter();
        let handle = engine.start(&state, None, Some(on_complete));

        engine.advance(4);
        assert_eq!(hits.get(), 0);
        engine.tick();
        assert_eq!(state.borrow().time, 0);
        assert_eq!(hits.get(), 1);

        // still registered at zero: completion fires on every tick
        engine.tick();
        assert_eq!(state.borrow().time, 0);
        assert_eq!(hits.get(), 2);

        engine.stop(&state, handle);
        engine.advance(3);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_countdown_started_at_zero_fires_every_tick() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::new(0, false));
        let (hits, on_complete) = counter();
        engine.start(&state, None, Some(on_complete));
        engine.advance(3);
        assert_eq!(hits.get(), 3);
        assert_eq!(state.borrow().time, 0);
    }

    #[test]
    fn test_on_tick_reports_time_every_tick() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::new(2, false));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        engine.start(&state, Some(Box::new(move |t: u64| s.borrow_mut().push(t))), None);
        engine.advance(3);
        assert_eq!(*seen.borrow(), vec![1, 0, 0]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::default());
        let handle = engine.start(&state, None, None);
        engine.stop(&state, handle);
        engine.stop(&state, handle);
        assert!(!state.borrow().running);
        assert!(!engine.is_active(handle));
        assert_eq!(engine.active_count(), 0);
    }

    #[test]
    fn test_reset_without_stop_leaves_source_running() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::new(0, true));
        let handle = engine.start(&state, None, None);
        engine.advance(3);

        state.borrow_mut().reset(true);
        assert_eq!(state.borrow().time, 0);
        assert!(!state.borrow().running);

        engine.advance(2);
        assert_eq!(state.borrow().time, 2);
        assert!(engine.is_active(handle));
    }

    #[test]
    fn test_countdown_reset_restores_target() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::default());
        state.borrow_mut().set_countdown(1);
        let handle = engine.start(&state, None, None);
        engine.advance(3);
        assert_eq!(state.borrow().time, 57);

        engine.stop(&state, handle);
        state.borrow_mut().reset(false);
        assert_eq!(state.borrow().time, 60);
    }

    #[test]
    fn test_double_start_doubles_rate() {
        let mut engine = TimerEngine::new();
        let state = shared(TimerState::new(0, true));
        engine.start(&state, None, None);
        engine.start(&state, None, None);
        engine.advance(2);
        assert_eq!(state.borrow().time, 4);
    }
}
