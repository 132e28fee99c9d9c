//! Rotating-word engine for animated headline text.
//!
//! This crate is UI-framework agnostic. It owns the cycle state machine, the
//! timer lifecycle, width stabilization and the enter/exit motion. A host (the
//! Leptos landing page, or [`clock::ManualClock`] in tests) supplies the
//! repeating timer and the text measurements; the engine hands back a
//! [`cycle::Frame`] describing what to draw.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`words`] | Non-empty, immutable word list |
//! | [`config`] | Validated construction options (`words`, `interval`, `class`) |
//! | [`cycle`] | Index advance plus the idle/exit/enter state machine |
//! | [`motion`] | Tweens, CSS cubic-bezier easing and the width spring |
//! | [`measure`] | Text measurement seam and the memoized stabilized width |
//! | [`timer`] | Repeating-timer host trait and the single-timer slot |
//! | [`clock`] | Deterministic virtual-time host |
//! | [`rotator`] | A mounted instance tying the pieces together |
//! | [`consts`] | Shared timing and geometry constants |

pub mod clock;
pub mod config;
pub mod consts;
pub mod cycle;
pub mod measure;
pub mod motion;
pub mod rotator;
pub mod timer;
pub mod words;

pub use clock::{ManualClock, ManualTimer};
pub use config::CycleConfig;
pub use consts::{DEFAULT_INTERVAL_MS, WIDTH_BUFFER};
pub use cycle::{Frame, Phase, Pose, WordCycle};
pub use measure::{GlyphMetrics, TextMeasure, WidthCache, stabilized_width};
pub use motion::{Easing, Spring, SpringParams, Tween};
pub use rotator::{Reconfigured, Rotator};
pub use timer::{IntervalHost, TimerSlot};
pub use words::WordList;

/// Error returned when a word cycle cannot be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CycleError {
    /// The word list was empty; there is nothing to cycle through.
    #[error("word list must contain at least one word")]
    EmptyWords,
    /// A zero-millisecond tick would spin the host timer.
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}
