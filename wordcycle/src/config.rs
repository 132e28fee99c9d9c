//! Construction options for a word cycle.
//!
//! Every path into a [`CycleConfig`] (builder or serde) goes through the same
//! validation, so a config in hand is always mountable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::DEFAULT_INTERVAL_MS;
use crate::words::WordList;
use crate::CycleError;

/// Validated options for one rotating-word instance.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCycleConfig")]
pub struct CycleConfig {
    words: WordList,
    interval_ms: u32,
    class: String,
}

impl CycleConfig {
    /// Config with the default interval and no extra presentation class.
    pub fn new<I, S>(words: I) -> Result<Self, CycleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::from_words(WordList::new(words)?))
    }

    #[must_use]
    pub fn from_words(words: WordList) -> Self {
        Self {
            words,
            interval_ms: DEFAULT_INTERVAL_MS,
            class: String::new(),
        }
    }

    pub fn with_interval(mut self, interval_ms: u32) -> Result<Self, CycleError> {
        if interval_ms == 0 {
            return Err(CycleError::ZeroInterval);
        }
        self.interval_ms = interval_ms;
        Ok(self)
    }

    /// Presentation class applied to every rendered word. Never affects timing.
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCycleConfig {
    words: Vec<String>,
    #[serde(default = "default_interval")]
    interval: u32,
    #[serde(default, alias = "class")]
    class_name: String,
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL_MS
}

impl TryFrom<RawCycleConfig> for CycleConfig {
    type Error = CycleError;

    fn try_from(raw: RawCycleConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.words)?.with_interval(raw.interval)?.with_class(raw.class_name))
    }
}
