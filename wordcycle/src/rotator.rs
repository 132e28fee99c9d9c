//! A mounted rotating-word instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser host builds one [`Rotator`] per on-screen component. The
//! rotator owns the single repeating timer for that component, the cycle
//! state machine it drives, and the memoized container width. Hosts feed it
//! frame deltas through [`Rotator::animate`] and read back a [`Frame`].
//!
//! LIFECYCLE
//! =========
//! `mount` arms the timer. `reconfigure` re-arms it only when the word list
//! or the interval actually changes. `unmount` (or dropping the rotator)
//! cancels it; no tick is delivered afterwards.

#[cfg(test)]
#[path = "rotator_test.rs"]
mod rotator_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::CycleConfig;
use crate::cycle::{Frame, Phase, WordCycle};
use crate::measure::{TextMeasure, WidthCache};
use crate::timer::{IntervalHost, TimerSlot};

type Listener = Rc<RefCell<Option<Box<dyn FnMut(usize)>>>>;

/// Outcome of [`Rotator::reconfigure`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reconfigured {
    /// Nothing changed.
    Unchanged,
    /// Only the presentation class changed; the timer kept running.
    Restyled,
    /// Words or interval changed; the timer was restarted.
    Rearmed,
}

/// One live word cycle bound to a timer host.
pub struct Rotator<H: IntervalHost> {
    host: H,
    config: CycleConfig,
    cycle: Rc<RefCell<WordCycle>>,
    listener: Listener,
    timer: TimerSlot<H::Handle>,
    widths: WidthCache,
}

impl<H: IntervalHost> Rotator<H> {
    /// Start cycling `config` on `host`. The first word shows immediately and
    /// the first tick arrives one interval later.
    pub fn mount(config: CycleConfig, host: H) -> Self {
        let cycle = WordCycle::new(config.words().clone());
        let mut rotator = Self {
            host,
            config,
            cycle: Rc::new(RefCell::new(cycle)),
            listener: Rc::new(RefCell::new(None)),
            timer: TimerSlot::new(),
            widths: WidthCache::new(),
        };
        rotator.arm();
        rotator
    }

    fn arm(&mut self) {
        let cycle = Rc::clone(&self.cycle);
        let listener = Rc::clone(&self.listener);
        let period_ms = self.config.interval_ms();
        self.timer.arm(
            &self.host,
            period_ms,
            Box::new(move || {
                // Release the cycle before notifying so the listener may read it.
                let index = cycle.borrow_mut().advance();
                if let Some(listener) = listener.borrow_mut().as_mut() {
                    listener(index);
                }
            }),
        );
        log::debug!(
            "word cycle armed: {} words every {period_ms} ms",
            self.config.words().len()
        );
    }

    /// Register a callback invoked with the new index after every tick.
    pub fn on_advance(&self, listener: impl FnMut(usize) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    /// Apply new options. Re-arms the timer only if words or interval differ.
    pub fn reconfigure(&mut self, config: CycleConfig) -> Reconfigured {
        if config == self.config {
            return Reconfigured::Unchanged;
        }
        let rearm =
            config.words() != self.config.words() || config.interval_ms() != self.config.interval_ms();
        if config.words() != self.config.words() {
            self.cycle.borrow_mut().set_words(config.words().clone());
        }
        self.config = config;
        if !rearm {
            log::debug!("word cycle restyled: class={:?}", self.config.class());
            return Reconfigured::Restyled;
        }
        log::debug!("word cycle reconfigured");
        self.arm();
        Reconfigured::Rearmed
    }

    /// Measure the word list (only if it changed since the last call) and
    /// hand the stabilized width to the cycle.
    pub fn stabilize_width(&mut self, measure: &dyn TextMeasure) -> f64 {
        let width = self.widths.stabilize(self.config.words(), measure);
        self.cycle.borrow_mut().set_target_width(width);
        width
    }

    /// Advance motion by `dt_ms`. Returns `true` while a further frame is
    /// needed.
    pub fn animate(&self, dt_ms: f64) -> bool {
        self.cycle.borrow_mut().step(dt_ms)
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        self.cycle.borrow().frame()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cycle.borrow().current_index()
    }

    #[must_use]
    pub fn current_word(&self) -> String {
        self.cycle.borrow().current_word().to_owned()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.cycle.borrow().phase()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.cycle.borrow().is_animating()
    }

    #[must_use]
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Number of measurement passes taken so far.
    #[must_use]
    pub fn measurements(&self) -> u32 {
        self.widths.measurements()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Period of the running timer, if armed.
    #[must_use]
    pub fn interval_ms(&self) -> Option<u32> {
        self.timer.period_ms()
    }

    /// Cancel the timer and drop the listener. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.timer.disarm() {
            log::debug!("word cycle unmounted at index {}", self.current_index());
        }
        self.listener.borrow_mut().take();
    }
}

impl<H: IntervalHost> std::fmt::Debug for Rotator<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rotator")
            .field("config", &self.config)
            .field("index", &self.current_index())
            .field("phase", &self.phase())
            .field("armed", &self.is_armed())
            .finish_non_exhaustive()
    }
}
