//! Cycle state machine: which word is current and how it is moving.
//!
//! STATES
//! ======
//! `Idle` shows the current word at rest. A tick moves to `Exiting`, where the
//! previously shown word slides down and fades out, then to `Entering`, where
//! the new current word drops in from above. The exit always finishes before
//! the enter starts, so exactly one word is on screen at any time.
//!
//! The logical index advances immediately on every tick; the motion only
//! lags behind it visually.

#[cfg(test)]
#[path = "cycle_test.rs"]
mod cycle_test;

use crate::consts::{ENTER_DURATION_MS, ENTER_OFFSET_Y, EXIT_DURATION_MS, EXIT_OFFSET_Y};
use crate::motion::{Easing, Spring, SpringParams, Tween};
use crate::words::WordList;

/// Public view of the state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Word at rest, waiting for the next tick.
    #[default]
    Idle,
    /// Previous word animating out.
    Exiting,
    /// Current word animating in.
    Entering,
}

impl Phase {
    #[must_use]
    pub fn is_transitioning(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Vertical offset and opacity of the visible word.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub offset_y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Self = Self {
        offset_y: 0.0,
        opacity: 1.0,
    };
    pub const ABOVE: Self = Self {
        offset_y: ENTER_OFFSET_Y,
        opacity: 0.0,
    };
    pub const BELOW: Self = Self {
        offset_y: EXIT_OFFSET_Y,
        opacity: 0.0,
    };

    #[must_use]
    pub fn lerp(from: Self, to: Self, t: f64) -> Self {
        Self {
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
            opacity: from.opacity + (to.opacity - from.opacity) * t,
        }
    }
}

/// Everything a host needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The single word present in the layout.
    pub word: String,
    pub offset_y: f64,
    pub opacity: f64,
    /// Container width; `None` until a measurement has been applied.
    pub width: Option<f64>,
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Exiting { shown: usize, from: Pose, tween: Tween },
    Entering { tween: Tween },
}

/// Index state plus transition motion for one word list.
#[derive(Clone, Debug)]
pub struct WordCycle {
    words: WordList,
    index: usize,
    motion: Motion,
    width: Spring,
    width_known: bool,
}

impl WordCycle {
    /// Start at the first word, at rest. There is no entrance animation on
    /// mount.
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            words,
            index: 0,
            motion: Motion::Idle,
            width: Spring::new(0.0, SpringParams::default()),
            width_known: false,
        }
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The word the cycle is on, regardless of animation lag.
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.words.wrapped(self.index)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.motion {
            Motion::Idle => Phase::Idle,
            Motion::Exiting { .. } => Phase::Exiting,
            Motion::Entering { .. } => Phase::Entering,
        }
    }

    /// Move to the next word, wrapping at the end, and start the exit of the
    /// word on screen. Returns the new index.
    pub fn advance(&mut self) -> usize {
        let previous = self.index;
        let next = (previous + 1) % self.words.len();
        if next == previous {
            // Single-word list: nothing changes, nothing animates.
            return next;
        }
        self.index = next;
        self.motion = match self.motion {
            Motion::Idle => Motion::Exiting {
                shown: previous,
                from: Pose::REST,
                tween: exit_tween(),
            },
            // The word on screen keeps leaving; whichever index is current
            // when it is gone will enter.
            exiting @ Motion::Exiting { .. } => exiting,
            Motion::Entering { tween } => Motion::Exiting {
                shown: previous,
                from: Pose::lerp(Pose::ABOVE, Pose::REST, tween.eased()),
                tween: exit_tween(),
            },
        };
        next
    }

    /// Advance animations by `dt_ms`. Returns `true` while anything (word
    /// transition or container width) is still moving. A non-finite delta
    /// advances nothing.
    pub fn step(&mut self, dt_ms: f64) -> bool {
        if !dt_ms.is_finite() {
            return self.is_animating();
        }
        self.width.step(dt_ms);

        let mut budget = dt_ms.max(0.0);
        loop {
            match &mut self.motion {
                Motion::Idle => break,
                Motion::Exiting { tween, .. } => {
                    budget = tween.step(budget);
                    if !tween.is_finished() {
                        break;
                    }
                    self.motion = Motion::Entering { tween: enter_tween() };
                }
                Motion::Entering { tween } => {
                    tween.step(budget);
                    if tween.is_finished() {
                        self.motion = Motion::Idle;
                    }
                    break;
                }
            }
        }

        self.is_animating()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.phase().is_transitioning() || !self.width.is_settled()
    }

    /// Apply a stabilized container width. The first width is applied
    /// immediately; later ones are approached with the spring.
    pub fn set_target_width(&mut self, width: f64) {
        if self.width_known {
            self.width.set_target(width);
        } else {
            self.width.snap_to(width);
            self.width_known = true;
        }
    }

    /// Replace the word list. The index wraps into the new list and any
    /// in-flight transition is dropped, since it may refer to words that no
    /// longer exist.
    pub fn set_words(&mut self, words: WordList) {
        if words == self.words {
            return;
        }
        self.index %= words.len();
        self.words = words;
        self.motion = Motion::Idle;
    }

    #[must_use]
    pub fn frame(&self) -> Frame {
        let (shown, pose) = match self.motion {
            Motion::Idle => (self.index, Pose::REST),
            Motion::Exiting { shown, from, tween } => (shown, Pose::lerp(from, Pose::BELOW, tween.eased())),
            Motion::Entering { tween } => (self.index, Pose::lerp(Pose::ABOVE, Pose::REST, tween.eased())),
        };
        Frame {
            word: self.words.wrapped(shown).to_owned(),
            offset_y: pose.offset_y,
            opacity: pose.opacity,
            width: self.width_known.then_some(self.width.value()),
        }
    }
}

fn exit_tween() -> Tween {
    Tween::new(EXIT_DURATION_MS, Easing::EaseIn)
}

fn enter_tween() -> Tween {
    Tween::new(ENTER_DURATION_MS, Easing::EaseOut)
}
