//! Site configuration with an optional inline override.
//!
//! DESIGN
//! ======
//! Defaults reproduce the published page. `index.html` may carry a
//! `<script id="site-config" type="application/json">` block that overrides
//! the hero word cycle and page timings; any field left out keeps its default.
//! A malformed block is logged and ignored so the page always renders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use wordcycle::{CycleConfig, CycleError, DEFAULT_INTERVAL_MS};

use crate::content::HERO_WORDS;

/// Element id of the inline JSON override.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("hero word cycle rejected: {0}")]
    Hero(#[from] CycleError),
    #[error("waitlist reset delay must be greater than zero")]
    ZeroResetDelay,
    #[error("nav hide threshold must be a finite, non-negative number of pixels")]
    InvalidNavThreshold,
}

/// Options for the rotating headline words.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroConfig {
    pub words: Vec<String>,
    pub interval: u32,
    #[serde(alias = "class")]
    pub class_name: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            words: HERO_WORDS.iter().map(|w| (*w).to_owned()).collect(),
            interval: DEFAULT_INTERVAL_MS,
            class_name: "gradient-text".to_owned(),
        }
    }
}

impl HeroConfig {
    /// Validated cycle options for the headline.
    pub fn cycle_config(&self) -> Result<CycleConfig, CycleError> {
        Ok(CycleConfig::new(self.words.iter().cloned())?
            .with_interval(self.interval)?
            .with_class(self.class_name.clone()))
    }
}

/// Page-wide settings provided as context by the root component.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub hero: HeroConfig,
    /// How long the waitlist button shows its confirmation.
    pub waitlist_reset_ms: u32,
    /// Scroll depth below which the nav bar never hides.
    pub nav_hide_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            waitlist_reset_ms: 3000,
            nav_hide_threshold: 80.0,
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.hero.cycle_config()?;
        if self.waitlist_reset_ms == 0 {
            return Err(ConfigError::ZeroResetDelay);
        }
        if !self.nav_hide_threshold.is_finite() || self.nav_hide_threshold < 0.0 {
            return Err(ConfigError::InvalidNavThreshold);
        }
        Ok(())
    }
}

/// Parse an inline override. Blank input means "no override".
pub fn parse_site_config(json: &str) -> Result<SiteConfig, ConfigError> {
    if json.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    let config: SiteConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Like [`parse_site_config`], but logs the failure and falls back to the
/// defaults.
pub fn parse_or_default(json: &str) -> SiteConfig {
    match parse_site_config(json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring site config: {e}");
            SiteConfig::default()
        }
    }
}

/// Load the site configuration from the document, if present.
pub fn load() -> SiteConfig {
    #[cfg(feature = "csr")]
    {
        let inline = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match inline {
            Some(json) => parse_or_default(&json),
            None => SiteConfig::default(),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        SiteConfig::default()
    }
}
