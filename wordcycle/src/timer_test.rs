use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::clock::ManualClock;

fn counter() -> (Rc<Cell<u32>>, Box<dyn FnMut()>) {
    let count = Rc::new(Cell::new(0));
    let inner = Rc::clone(&count);
    (count, Box::new(move || inner.set(inner.get() + 1)))
}

#[test]
fn new_slot_is_disarmed() {
    let slot: TimerSlot<()> = TimerSlot::new();
    assert!(!slot.is_armed());
    assert_eq!(slot.period_ms(), None);
}

#[test]
fn arm_starts_one_timer() {
    let clock = ManualClock::new();
    let mut slot = TimerSlot::new();
    let (count, tick) = counter();
    slot.arm(&clock, 100, tick);

    assert!(slot.is_armed());
    assert_eq!(slot.period_ms(), Some(100));
    assert_eq!(clock.active_timers(), 1);

    clock.advance(250);
    assert_eq!(count.get(), 2);
}

#[test]
fn rearm_replaces_previous_timer() {
    let clock = ManualClock::new();
    let mut slot = TimerSlot::new();
    let (old_count, old_tick) = counter();
    let (new_count, new_tick) = counter();

    slot.arm(&clock, 100, old_tick);
    slot.arm(&clock, 40, new_tick);
    assert_eq!(clock.active_timers(), 1);
    assert_eq!(slot.period_ms(), Some(40));

    clock.advance(200);
    assert_eq!(old_count.get(), 0);
    assert_eq!(new_count.get(), 5);
}

#[test]
fn disarm_cancels_and_reports() {
    let clock = ManualClock::new();
    let mut slot = TimerSlot::new();
    let (count, tick) = counter();
    slot.arm(&clock, 10, tick);

    assert!(slot.disarm());
    assert!(!slot.disarm());
    assert_eq!(clock.active_timers(), 0);
    assert_eq!(slot.period_ms(), None);

    clock.advance(1000);
    assert_eq!(count.get(), 0);
}
