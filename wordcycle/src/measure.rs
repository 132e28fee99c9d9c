//! Text measurement and container width stabilization.
//!
//! DESIGN
//! ======
//! The visible container is sized to the widest word in the whole list, not
//! the word currently shown, so surrounding layout never reflows on a tick.
//! Measuring is the expensive part; [`WidthCache`] re-measures only when the
//! word list itself changes.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use crate::consts::WIDTH_BUFFER;
use crate::words::WordList;

/// Something that can report the rendered width of a word.
///
/// Browser hosts read the bounding boxes of an invisible measurement pass;
/// other hosts use [`GlyphMetrics`].
pub trait TextMeasure {
    fn width_of(&self, word: &str) -> f64;
}

/// Widest word in `words` plus [`WIDTH_BUFFER`]. Non-finite or negative
/// measurements count as zero.
#[must_use]
pub fn stabilized_width(words: &WordList, measure: &dyn TextMeasure) -> f64 {
    let widest = words
        .iter()
        .map(|word| measure.width_of(word))
        .filter(|width| width.is_finite())
        .fold(0.0_f64, f64::max);
    widest + WIDTH_BUFFER
}

/// Memoized stabilized width keyed by the word list fingerprint.
#[derive(Clone, Debug, Default)]
pub struct WidthCache {
    key: Option<u64>,
    width: f64,
    measurements: u32,
}

impl WidthCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stabilized width for `words`, measuring only if the list differs from
    /// the one measured last.
    pub fn stabilize(&mut self, words: &WordList, measure: &dyn TextMeasure) -> f64 {
        let key = words.fingerprint();
        if self.key == Some(key) {
            return self.width;
        }
        self.width = stabilized_width(words, measure);
        self.key = Some(key);
        self.measurements += 1;
        log::debug!("measured {} words, stabilized width {:.1}", words.len(), self.width);
        self.width
    }

    /// Last stabilized width, if anything has been measured.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        self.key.map(|_| self.width)
    }

    /// Number of measurement passes performed so far.
    #[must_use]
    pub fn measurements(&self) -> u32 {
        self.measurements
    }
}

/// Font-metrics table used where no layout engine is available.
///
/// Advances are approximate em fractions for a geometric sans-serif; good
/// enough to size a container, not to typeset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphMetrics {
    pub font_size_px: f64,
    pub bold: bool,
}

impl GlyphMetrics {
    /// Bold faces run slightly wider than regular ones.
    pub const BOLD_FACTOR: f64 = 1.06;

    #[must_use]
    pub fn new(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: false,
        }
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub fn advance_em(ch: char) -> f64 {
        match ch {
            ' ' => 0.28,
            'i' | 'j' | 'l' | 'I' | '!' | '|' | '.' | ',' | ':' | ';' | '\'' => 0.26,
            'f' | 't' | 'r' => 0.36,
            'm' | 'w' => 0.86,
            'M' | 'W' => 0.94,
            '0'..='9' => 0.56,
            'A'..='Z' => 0.68,
            'a'..='z' => 0.54,
            c if c.is_ascii() => 0.5,
            _ => 0.9,
        }
    }
}

impl Default for GlyphMetrics {
    fn default() -> Self {
        Self::new(16.0)
    }
}

impl TextMeasure for GlyphMetrics {
    fn width_of(&self, word: &str) -> f64 {
        let ems: f64 = word.chars().map(Self::advance_em).sum();
        let weight = if self.bold { Self::BOLD_FACTOR } else { 1.0 };
        ems * self.font_size_px * weight
    }
}
