#![allow(clippy::float_cmp)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::clock::ManualClock;
use crate::measure::GlyphMetrics;
use crate::{CycleError, WIDTH_BUFFER};

fn config(words: &[&str], interval_ms: u32) -> CycleConfig {
    CycleConfig::new(words.iter().copied())
        .and_then(|config| config.with_interval(interval_ms))
        .expect("valid config")
}

struct CountingMeasure {
    inner: GlyphMetrics,
    calls: Cell<u32>,
}

impl TextMeasure for CountingMeasure {
    fn width_of(&self, word: &str) -> f64 {
        self.calls.set(self.calls.get() + 1);
        self.inner.width_of(word)
    }
}

// --- mount / ticking ---

#[test]
fn mount_shows_first_word_and_arms_one_timer() {
    let clock = ManualClock::new();
    let rotator = Rotator::mount(config(&["A", "B", "C"], 100), clock.clone());

    assert_eq!(rotator.current_index(), 0);
    assert_eq!(rotator.current_word(), "A");
    assert_eq!(rotator.phase(), Phase::Idle);
    assert!(rotator.is_armed());
    assert_eq!(rotator.interval_ms(), Some(100));
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn k_ticks_select_word_k_mod_len() {
    let words = ["Call Operations", "Customer Service", "Business Growth", "Voice AI"];
    let clock = ManualClock::new();
    let rotator = Rotator::mount(config(&words, 3000), clock.clone());

    for k in 1..=9_usize {
        clock.advance(3000);
        assert_eq!(rotator.current_index(), k % words.len());
        assert_eq!(rotator.current_word(), words[k % words.len()]);
    }
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn default_interval_is_three_seconds() {
    let clock = ManualClock::new();
    let rotator = Rotator::mount(CycleConfig::new(["A", "B"]).expect("valid"), clock.clone());
    assert_eq!(rotator.interval_ms(), Some(3000));

    clock.advance(2999);
    assert_eq!(rotator.current_index(), 0);
    clock.advance(1);
    assert_eq!(rotator.current_index(), 1);
}

#[test]
fn short_word_then_long_word_scenario() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "Longword"], 100), clock.clone());
    let measure = CountingMeasure {
        inner: GlyphMetrics::default(),
        calls: Cell::new(0),
    };

    let width = rotator.stabilize_width(&measure);
    let expected = GlyphMetrics::default().width_of("Longword") + WIDTH_BUFFER;
    assert_eq!(width, expected);
    assert_eq!(rotator.frame().width, Some(expected));
    assert_eq!(rotator.frame().word, "A");

    clock.advance(100);
    assert_eq!(rotator.current_word(), "Longword");
    rotator.stabilize_width(&measure);
    rotator.animate(700.0);
    assert_eq!(rotator.frame().word, "Longword");

    clock.advance(100);
    assert_eq!(rotator.current_word(), "A");
    rotator.stabilize_width(&measure);

    // Two words measured exactly once, container width never changed.
    assert_eq!(rotator.measurements(), 1);
    assert_eq!(measure.calls.get(), 2);
    assert_eq!(rotator.frame().width, Some(expected));
}

#[test]
fn transition_returns_to_idle_after_seven_hundred_ms() {
    let clock = ManualClock::new();
    let rotator = Rotator::mount(config(&["A", "B"], 3000), clock.clone());
    clock.advance(3000);

    assert_eq!(rotator.phase(), Phase::Exiting);
    assert!(rotator.animate(300.0));
    assert_eq!(rotator.phase(), Phase::Entering);
    assert!(!rotator.animate(400.0));
    assert_eq!(rotator.phase(), Phase::Idle);
    assert!(!rotator.is_animating());
}

#[test]
fn listener_sees_each_new_index() {
    let clock = ManualClock::new();
    let rotator = Rotator::mount(config(&["A", "B", "C"], 50), clock.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    rotator.on_advance(move |index| sink.borrow_mut().push(index));

    clock.advance(200);
    assert_eq!(*seen.borrow(), vec![1, 2, 0, 1]);
}

#[test]
fn empty_word_list_cannot_be_mounted() {
    let words: [&str; 0] = [];
    assert_eq!(CycleConfig::new(words).unwrap_err(), CycleError::EmptyWords);
}

// --- unmount ---

#[test]
fn no_ticks_after_unmount() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B"], 100), clock.clone());
    let ticks = Rc::new(Cell::new(0));
    let sink = Rc::clone(&ticks);
    rotator.on_advance(move |_| sink.set(sink.get() + 1));

    clock.advance(250);
    assert_eq!(ticks.get(), 2);

    rotator.unmount();
    assert!(!rotator.is_armed());
    assert_eq!(clock.active_timers(), 0);

    clock.advance(10_000);
    assert_eq!(ticks.get(), 2);
    assert_eq!(rotator.current_index(), 0);

    rotator.unmount();
}

#[test]
fn dropping_rotator_cancels_timer() {
    let clock = ManualClock::new();
    let rotator = Rotator::mount(config(&["A", "B"], 100), clock.clone());
    assert_eq!(clock.active_timers(), 1);
    drop(rotator);
    assert_eq!(clock.active_timers(), 0);
    assert_eq!(clock.advance(1000), 0);
}

// --- reconfigure ---

#[test]
fn identical_config_is_unchanged() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B"], 100), clock.clone());
    clock.advance(60);

    assert_eq!(rotator.reconfigure(config(&["A", "B"], 100)), Reconfigured::Unchanged);
    // The original timer keeps its schedule.
    clock.advance(40);
    assert_eq!(rotator.current_index(), 1);
}

#[test]
fn class_change_keeps_timer_running() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B"], 100), clock.clone());
    clock.advance(60);

    let restyled = config(&["A", "B"], 100).with_class("text-blue-600");
    assert_eq!(rotator.reconfigure(restyled), Reconfigured::Restyled);
    assert_eq!(rotator.config().class(), "text-blue-600");

    clock.advance(40);
    assert_eq!(rotator.current_index(), 1);
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn interval_change_rearms_single_timer() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B", "C"], 100), clock.clone());
    let ticks = Rc::new(Cell::new(0));
    let sink = Rc::clone(&ticks);
    rotator.on_advance(move |_| sink.set(sink.get() + 1));

    assert_eq!(rotator.reconfigure(config(&["A", "B", "C"], 250)), Reconfigured::Rearmed);
    assert_eq!(clock.active_timers(), 1);
    assert_eq!(rotator.interval_ms(), Some(250));

    clock.advance(1000);
    assert_eq!(ticks.get(), 4);
}

#[test]
fn word_change_remeasures_and_wraps_index() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B", "C"], 100), clock.clone());
    let measure = GlyphMetrics::default();
    rotator.stabilize_width(&measure);
    clock.advance(200);
    assert_eq!(rotator.current_index(), 2);

    assert_eq!(rotator.reconfigure(config(&["Wide words", "X"], 100)), Reconfigured::Rearmed);
    assert_eq!(rotator.current_index(), 0);
    assert_eq!(rotator.current_word(), "Wide words");

    let width = rotator.stabilize_width(&measure);
    assert_eq!(rotator.measurements(), 2);
    assert_eq!(width, measure.width_of("Wide words") + WIDTH_BUFFER);
}

#[test]
fn word_change_leaves_one_timer_and_no_stale_ticks() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B", "C"], 100), clock.clone());
    let ticks = Rc::new(Cell::new(0));
    let sink = Rc::clone(&ticks);
    rotator.on_advance(move |_| sink.set(sink.get() + 1));
    clock.advance(60);

    assert_eq!(rotator.reconfigure(config(&["Wide words", "X"], 100)), Reconfigured::Rearmed);
    assert_eq!(clock.active_timers(), 1);

    // The old schedule would have fired at 100 ms; the new one fires at 160 ms.
    clock.advance(99);
    assert_eq!(ticks.get(), 0);
    clock.advance(1);
    assert_eq!(ticks.get(), 1);
    assert_eq!(rotator.current_word(), "X");
    assert_eq!(clock.active_timers(), 1);
}

#[test]
fn non_finite_frame_delta_returns_without_advancing() {
    let clock = ManualClock::new();
    let mut rotator = Rotator::mount(config(&["A", "B"], 100), clock.clone());
    let measure = GlyphMetrics::default();
    rotator.stabilize_width(&measure);
    assert_eq!(
        rotator.reconfigure(config(&["A much wider word", "B"], 100)),
        Reconfigured::Rearmed
    );
    rotator.stabilize_width(&measure);
    assert!(rotator.is_animating());

    let before = rotator.frame();
    assert!(rotator.animate(f64::INFINITY));
    assert!(rotator.animate(f64::NAN));
    assert_eq!(rotator.frame(), before);

    assert!(!rotator.animate(1e9));
    assert_eq!(
        rotator.frame().width,
        Some(measure.width_of("A much wider word") + WIDTH_BUFFER)
    );
}

#[test]
fn dropping_rotator_also_drops_rotators_its_listener_owns() {
    let clock = ManualClock::new();
    let outer = Rotator::mount(config(&["A", "B"], 1000), clock.clone());
    let inner = Rotator::mount(config(&["C", "D"], 10), clock.clone());
    let inner_ticks = Rc::new(Cell::new(0));
    let sink = Rc::clone(&inner_ticks);
    inner.on_advance(move |_| sink.set(sink.get() + 1));
    outer.on_advance(move |_| {
        let _owned = &inner;
    });
    assert_eq!(clock.active_timers(), 2);

    drop(outer);
    assert_eq!(clock.active_timers(), 0);
    clock.advance(100);
    assert_eq!(inner_ticks.get(), 0);
}
