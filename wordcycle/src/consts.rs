//! Shared numeric constants for the word cycle.

// ── Cycling ─────────────────────────────────────────────────────

/// Tick period used when the host does not supply one.
pub const DEFAULT_INTERVAL_MS: u32 = 3000;

// ── Width ───────────────────────────────────────────────────────

/// Added to the widest measured word so glyph overhang never clips.
pub const WIDTH_BUFFER: f64 = 10.0;

// ── Motion ──────────────────────────────────────────────────────

/// Duration of the outgoing word's slide-down fade.
pub const EXIT_DURATION_MS: f64 = 300.0;

/// Duration of the incoming word's slide-in fade.
pub const ENTER_DURATION_MS: f64 = 400.0;

/// Vertical distance the outgoing word travels (downwards, CSS pixels).
pub const EXIT_OFFSET_Y: f64 = 20.0;

/// Vertical start offset of the incoming word (above the baseline).
pub const ENTER_OFFSET_Y: f64 = -20.0;

/// Container width spring, matching a snappy physical feel.
pub const SPRING_STIFFNESS: f64 = 200.0;
pub const SPRING_DAMPING: f64 = 20.0;
pub const SPRING_MASS: f64 = 1.0;

/// A spring closer than this to its target (px) may come to rest.
pub const SPRING_REST_DELTA: f64 = 0.5;

/// A spring slower than this (px/s) may come to rest.
pub const SPRING_REST_SPEED: f64 = 2.0;

/// Largest integration step for the spring, in milliseconds.
pub const SPRING_MAX_STEP_MS: f64 = 1.0;

/// A single step longer than this (ms) lands the spring on its target
/// instead of being integrated.
pub const SPRING_SETTLE_HORIZON_MS: f64 = 5000.0;
