#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-4;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Easing ---

#[test]
fn easing_endpoints_are_fixed() {
    for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut] {
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert_eq!(easing.apply(-3.0), 0.0);
        assert_eq!(easing.apply(4.0), 1.0);
    }
}

#[test]
fn ease_out_leads_and_ease_in_lags_linear() {
    for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
        assert!(Easing::EaseOut.apply(t) > t, "ease-out at {t}");
        assert!(Easing::EaseIn.apply(t) < t, "ease-in at {t}");
    }
}

#[test]
fn easing_is_monotonic() {
    let mut prev = 0.0;
    for i in 1..=100 {
        let t = f64::from(i) / 100.0;
        let v = Easing::EaseOut.apply(t);
        assert!(v >= prev - EPSILON);
        prev = v;
    }
}

#[test]
fn linear_control_points_match_linear_easing() {
    for t in [0.1, 0.3, 0.6, 0.95] {
        assert!(approx_eq(cubic_bezier(0.25, 0.25, 0.75, 0.75, t), t));
    }
}

// --- Tween ---

#[test]
fn tween_progress_and_leftover() {
    let mut tween = Tween::new(300.0, Easing::Linear);
    assert_eq!(tween.step(100.0), 0.0);
    assert!(approx_eq(tween.progress(), 1.0 / 3.0));
    assert!(!tween.is_finished());

    let spill = tween.step(250.0);
    assert!(approx_eq(spill, 50.0));
    assert!(tween.is_finished());
    assert_eq!(tween.eased(), 1.0);
}

#[test]
fn zero_duration_tween_finishes_immediately() {
    let mut tween = Tween::new(0.0, Easing::EaseOut);
    assert_eq!(tween.progress(), 1.0);
    assert_eq!(tween.step(16.0), 16.0);
    assert!(tween.is_finished());
}

#[test]
fn negative_delta_is_ignored() {
    let mut tween = Tween::new(100.0, Easing::Linear);
    tween.step(-50.0);
    assert_eq!(tween.progress(), 0.0);
}

// --- Spring ---

#[test]
fn spring_defaults_match_width_animation() {
    let params = SpringParams::default();
    assert_eq!(params.stiffness, 200.0);
    assert_eq!(params.damping, 20.0);
    assert_eq!(params.mass, 1.0);
}

#[test]
fn spring_at_rest_stays_put() {
    let mut spring = Spring::new(120.0, SpringParams::default());
    assert!(spring.is_settled());
    spring.step(16.0);
    assert_eq!(spring.value(), 120.0);
}

#[test]
fn spring_moves_toward_target_and_settles() {
    let mut spring = Spring::new(100.0, SpringParams::default());
    spring.set_target(200.0);
    assert!(!spring.is_settled());

    spring.step(16.0);
    assert!(spring.value() > 100.0);
    assert!(spring.value() < 200.0);

    for _ in 0..200 {
        spring.step(16.0);
    }
    assert!(spring.is_settled());
    assert_eq!(spring.value(), 200.0);
    assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn spring_is_not_linear() {
    let mut spring = Spring::new(0.0, SpringParams::default());
    spring.set_target(100.0);
    spring.step(50.0);
    let first = spring.value();
    spring.step(50.0);
    let second = spring.value() - first;
    assert!((first - second).abs() > 1.0, "first={first} second={second}");
}

#[test]
fn snap_to_rests_immediately() {
    let mut spring = Spring::new(0.0, SpringParams::default());
    spring.set_target(50.0);
    spring.step(10.0);
    spring.snap_to(80.0);
    assert_eq!(spring.value(), 80.0);
    assert_eq!(spring.target(), 80.0);
    assert!(spring.is_settled());
}

#[test]
fn spring_ignores_non_finite_steps() {
    let mut spring = Spring::new(100.0, SpringParams::default());
    spring.set_target(200.0);

    spring.step(f64::INFINITY);
    spring.step(f64::NAN);
    spring.step(f64::NEG_INFINITY);
    assert_eq!(spring.value(), 100.0);
    assert_eq!(spring.velocity(), 0.0);
    assert!(!spring.is_settled());
}

#[test]
fn spring_lands_on_target_after_very_long_step() {
    let mut spring = Spring::new(100.0, SpringParams::default());
    spring.set_target(200.0);
    spring.step(1e9);
    assert_eq!(spring.value(), 200.0);
    assert!(spring.is_settled());
}
