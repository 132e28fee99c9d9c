#![allow(clippy::float_cmp)]

use super::*;
use wordcycle::{WIDTH_BUFFER, WordList, stabilized_width};

#[test]
fn first_frame_of_a_run_does_not_advance() {
    assert_eq!(frame_delta(None, 12_345.0), 0.0);
}

#[test]
fn frame_delta_is_timestamp_difference() {
    assert_eq!(frame_delta(Some(1000.0), 1016.5), 16.5);
}

#[test]
fn frame_delta_clamps_long_gaps_and_clock_skew() {
    assert_eq!(frame_delta(Some(1000.0), 9000.0), MAX_FRAME_DELTA_MS);
    assert_eq!(frame_delta(Some(1000.0), 990.0), 0.0);
}

#[test]
fn measured_widths_feed_stabilized_width() {
    let measured = MeasuredWidths::from_pairs([("A", 11.0), ("Longword", 92.5)]);
    assert_eq!(measured.len(), 2);
    let words = WordList::new(["A", "Longword"]).expect("non-empty");
    assert_eq!(stabilized_width(&words, &measured), 92.5 + WIDTH_BUFFER);
}

#[test]
fn unmeasured_word_counts_as_zero() {
    let measured = MeasuredWidths::default();
    assert!(measured.is_empty());
    assert_eq!(measured.width_of("missing"), 0.0);
}

#[test]
fn duplicate_words_keep_widest_measurement() {
    let measured = MeasuredWidths::from_pairs([("Voice AI", 80.0), ("Voice AI", 84.0)]);
    assert_eq!(measured.len(), 1);
    assert_eq!(measured.width_of("Voice AI"), 84.0);
}
