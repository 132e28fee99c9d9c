//! Repeating-timer seam and the single-timer slot.
//!
//! A host starts a repeating callback and hands back a handle; dropping the
//! handle cancels the timer. `gloo_timers::callback::Interval` already has
//! exactly these semantics, and [`crate::clock::ManualTimer`] mirrors them
//! for tests.
//!
//! [`TimerSlot`] owns at most one handle. Arming always disarms first, so a
//! mounted instance can never have two live timers.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Something that can run a callback every `period_ms` milliseconds.
pub trait IntervalHost {
    /// Cancels the timer when dropped.
    type Handle;

    fn start_interval(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Holds zero or one live timer handle.
#[derive(Debug)]
pub struct TimerSlot<T> {
    handle: Option<T>,
    period_ms: Option<u32>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self {
            handle: None,
            period_ms: None,
        }
    }
}

impl<T> TimerSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running timer with a new one on `host`.
    pub fn arm<H>(&mut self, host: &H, period_ms: u32, tick: Box<dyn FnMut()>)
    where
        H: IntervalHost<Handle = T>,
    {
        self.disarm();
        self.handle = Some(host.start_interval(period_ms, tick));
        self.period_ms = Some(period_ms);
    }

    /// Cancel the running timer. Returns `true` if one was running.
    pub fn disarm(&mut self) -> bool {
        self.period_ms = None;
        self.handle.take().is_some()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Period of the running timer, if any.
    #[must_use]
    pub fn period_ms(&self) -> Option<u32> {
        self.period_ms
    }
}
