//! Page configuration: the DOM contract the behaviors bind against.
//!
//! Defaults match the server-rendered templates. A page may override any field
//! by embedding a JSON object in `<script type="application/json"
//! id="vp-page-config">`; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Errors raised while reading page configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Selectors, storage key, and timing used by the page behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub storage_key: String,
    pub theme_attribute: String,
    pub toggle_id: String,
    pub toast_selector: String,
    pub toast_delay_ms: u32,
    pub preview_selector: String,
    pub video_selector: String,
    pub overlay_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::STORAGE_KEY.to_owned(),
            theme_attribute: consts::THEME_ATTRIBUTE.to_owned(),
            toggle_id: consts::TOGGLE_ID.to_owned(),
            toast_selector: consts::TOAST_SELECTOR.to_owned(),
            toast_delay_ms: consts::TOAST_DELAY_MS,
            preview_selector: consts::PREVIEW_SELECTOR.to_owned(),
            video_selector: consts::VIDEO_SELECTOR.to_owned(),
            overlay_selector: consts::OVERLAY_SELECTOR.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse overrides from a JSON object. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `raw` is not a JSON object matching
    /// the config shape.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`PageConfig::from_json`], but logs and falls back to defaults.
    #[must_use]
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; using default page config");
                Self::default()
            }
        }
    }
}
