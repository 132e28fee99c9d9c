//! Time-based motion primitives: eased tweens and a damped spring.
//!
//! Both are advanced explicitly with a delta in milliseconds, so the host
//! decides the frame cadence and tests can step them deterministically.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use crate::consts::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_STEP_MS, SPRING_REST_DELTA, SPRING_REST_SPEED, SPRING_SETTLE_HORIZON_MS,
    SPRING_STIFFNESS,
};

/// Easing curves, using the CSS cubic-bezier definitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
        }
    }
}

// Control points are (0,0), (x1,y1), (x2,y2), (1,1). Solve x(s) = x for the
// curve parameter s, then return y(s).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_sample(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return bezier_sample(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s = (s - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..40 {
        let value = bezier_sample(x1, x2, s);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_sample(y1, y2, s)
}

fn bezier_coefficients(p1: f64, p2: f64) -> (f64, f64, f64) {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (a, b, c)
}

fn bezier_sample(p1: f64, p2: f64, s: f64) -> f64 {
    let (a, b, c) = bezier_coefficients(p1, p2);
    ((a * s + b) * s + c) * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let (a, b, c) = bezier_coefficients(p1, p2);
    (3.0 * a * s + 2.0 * b) * s + c
}

/// Fixed-duration progress tracker with an easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Advance by `dt_ms`. Returns the part of `dt_ms` left over after the
    /// tween finished (zero while it is still running).
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        let dt_ms = dt_ms.max(0.0);
        let remaining = self.duration_ms - self.elapsed_ms;
        if dt_ms >= remaining {
            self.elapsed_ms = self.duration_ms;
            dt_ms - remaining.max(0.0)
        } else {
            self.elapsed_ms += dt_ms;
            0.0
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn eased(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
        }
    }
}

/// A value pulled toward a target by a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    params: SpringParams,
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Spring at rest on `value`.
    #[must_use]
    pub fn new(value: f64, params: SpringParams) -> Self {
        Self {
            params,
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Retarget, keeping the current position and velocity.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `value` and rest there.
    pub fn snap_to(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        (self.position - self.target).abs() <= SPRING_REST_DELTA && self.velocity.abs() <= SPRING_REST_SPEED
    }

    /// Integrate for `dt_ms` using semi-implicit Euler in sub-steps of at
    /// most [`SPRING_MAX_STEP_MS`]. Snaps onto the target once settled, or
    /// straight away for steps beyond [`SPRING_SETTLE_HORIZON_MS`].
    /// Non-finite deltas are ignored.
    pub fn step(&mut self, dt_ms: f64) {
        if !dt_ms.is_finite() {
            return;
        }
        if self.is_settled() || dt_ms > SPRING_SETTLE_HORIZON_MS {
            self.snap_to(self.target);
            return;
        }
        let mut remaining = dt_ms.max(0.0);
        while remaining > 0.0 {
            let h_ms = remaining.min(SPRING_MAX_STEP_MS);
            remaining -= h_ms;
            let h = h_ms / 1000.0;
            let displacement = self.position - self.target;
            let force = -self.params.stiffness * displacement - self.params.damping * self.velocity;
            self.velocity += force / self.params.mass * h;
            self.position += self.velocity * h;
        }
        if self.is_settled() {
            self.snap_to(self.target);
        }
    }
}
