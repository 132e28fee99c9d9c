//! Deterministic virtual-time [`IntervalHost`].
//!
//! [`ManualClock`] keeps a registry of repeating timers and fires them only
//! when [`ManualClock::advance`] moves virtual time past their due time. It
//! is single-threaded (`Rc`), like the browser event loop it stands in for.
//!
//! Callbacks run with the registry borrow released, so a tick may start or
//! cancel timers on the same clock (including its own).

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::timer::IntervalHost;

type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

struct Scheduled {
    period_ms: u64,
    due_ms: u64,
    tick: Tick,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u64,
    timers: BTreeMap<u64, Scheduled>,
    fired: u64,
}

impl ClockState {
    /// Earliest due timer at or before `until`, ties broken by start order.
    fn next_due(&self, until: u64) -> Option<(u64, u64)> {
        self.timers
            .iter()
            .filter(|(_, timer)| timer.due_ms <= until)
            .min_by_key(|(id, timer)| (timer.due_ms, **id))
            .map(|(id, timer)| (*id, timer.due_ms))
    }
}

/// Virtual clock shared by cloning.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl std::fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ManualClock")
            .field("now_ms", &state.now_ms)
            .field("active_timers", &state.timers.len())
            .field("fired", &state.fired)
            .finish()
    }
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Number of timers currently scheduled.
    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Total callbacks fired since the clock was created.
    #[must_use]
    pub fn ticks_fired(&self) -> u64 {
        self.state.borrow().fired
    }

    /// Move virtual time forward by `ms`, firing every timer that comes due
    /// in chronological order. Returns the number of callbacks fired.
    pub fn advance(&self, ms: u64) -> u64 {
        let until = self.state.borrow().now_ms.saturating_add(ms);
        let mut fired = 0;

        loop {
            let tick = {
                let mut state = self.state.borrow_mut();
                let Some((id, due_ms)) = state.next_due(until) else {
                    break;
                };
                state.now_ms = due_ms;
                state.fired += 1;
                let Some(timer) = state.timers.get_mut(&id) else {
                    break;
                };
                timer.due_ms = due_ms + timer.period_ms;
                Rc::clone(&timer.tick)
            };
            fired += 1;
            // A timer cancelled by an earlier callback in this same pass is
            // already gone from the registry and never reaches here.
            (tick.borrow_mut())();
        }

        self.state.borrow_mut().now_ms = until;
        fired
    }
}

/// Handle to a timer on a [`ManualClock`]; dropping it cancels the timer.
#[derive(Debug)]
pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        let Some(state) = self.clock.upgrade() else {
            return;
        };
        // The removed tick may own further handles on this clock, so it is
        // dropped only after the registry borrow ends.
        let removed = state.borrow_mut().timers.remove(&self.id);
        drop(removed);
    }
}

impl IntervalHost for ManualClock {
    type Handle = ManualTimer;

    fn start_interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualTimer {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id += 1;
        let period_ms = u64::from(period_ms.max(1));
        let due_ms = state.now_ms + period_ms;
        state.timers.insert(
            id,
            Scheduled {
                period_ms,
                due_ms,
                tick: Rc::new(RefCell::new(tick)),
            },
        );
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }
}
