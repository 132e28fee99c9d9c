#![allow(clippy::float_cmp)]

use super::*;

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|w| (*w).to_owned()).collect()
}

#[test]
fn build_config_defaults_interval_and_class() {
    let config = build_config(words(&["A", "B"]), None, None).expect("valid");
    assert_eq!(config.interval_ms(), 3000);
    assert_eq!(config.class(), "");
}

#[test]
fn build_config_passes_props_through() {
    let config = build_config(words(&["A"]), Some(1200), Some("gradient-text".to_owned())).expect("valid");
    assert_eq!(config.interval_ms(), 1200);
    assert_eq!(config.class(), "gradient-text");
}

#[test]
fn build_config_rejects_empty_words_and_zero_interval() {
    assert_eq!(build_config(Vec::new(), None, None).unwrap_err(), CycleError::EmptyWords);
    assert_eq!(build_config(words(&["A"]), Some(0), None).unwrap_err(), CycleError::ZeroInterval);
}

#[test]
fn word_class_appends_extra_classes() {
    assert_eq!(word_class(""), "word-cycle__word");
    assert_eq!(word_class("  "), "word-cycle__word");
    assert_eq!(word_class("gradient-text text-4xl"), "word-cycle__word gradient-text text-4xl");
}

#[test]
fn word_style_renders_offset_and_opacity() {
    let frame = Frame {
        word: "Voice AI".to_owned(),
        offset_y: -7.5,
        opacity: 0.25,
        width: Some(120.0),
    };
    assert_eq!(word_style(&frame), "transform: translateY(-7.50px); opacity: 0.250;");
}

#[test]
fn container_width_is_auto_until_measured() {
    assert_eq!(container_width(None), "auto");
    assert_eq!(container_width(Some(182.34)), "182.3px");
}

#[test]
fn resting_frame_shows_first_word() {
    let config = build_config(words(&["Call Operations", "Voice AI"]), None, None).expect("valid");
    let frame = resting_frame(&config);
    assert_eq!(frame.word, "Call Operations");
    assert_eq!(frame.offset_y, 0.0);
    assert_eq!(frame.opacity, 1.0);
    assert_eq!(frame.width, None);
}
