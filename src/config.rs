//! Site configuration.
//!
//! The page may embed a `<script type="application/json" id="site-config">`
//! block to override the defaults. Every field is optional; missing fields
//! keep their default value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use web_sys::Document;

use crate::consts::{
    CONFIG_ELEMENT_ID, DEFAULT_IMAGES, DEFAULT_LOG_LEVEL, DEFAULT_SIGNUP_ENDPOINT,
    DEFAULT_SLIDE_INTERVAL_MS,
};
use crate::error::UiError;

/// How a signup form submission that passed the password check is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignupMode {
    /// Let the browser perform the normal form submission.
    #[default]
    Native,
    /// Cancel the browser submission and POST the fields as JSON.
    Json,
}

/// Runtime configuration for every behavior unit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Image references cycled by the slideshow, in display order.
    pub images: Vec<String>,
    /// Milliseconds between slide changes.
    pub slide_interval_ms: u32,
    pub signup_mode: SignupMode,
    /// Used by [`SignupMode::Json`] when the form carries no `action`.
    pub signup_endpoint: String,
    /// `log` level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            images: DEFAULT_IMAGES.iter().map(|s| (*s).to_owned()).collect(),
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            signup_mode: SignupMode::Native,
            signup_endpoint: DEFAULT_SIGNUP_ENDPOINT.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] for malformed JSON, [`UiError::EmptyImageList`]
    /// for an empty `images` array, and [`UiError::InvalidInterval`] for a zero
    /// interval.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config block from `document`, or the defaults when the page
    /// does not carry one.
    ///
    /// # Errors
    ///
    /// Propagates [`SiteConfig::from_json`] errors for a block that is present
    /// but invalid.
    pub fn from_document(document: &Document) -> Result<Self, UiError> {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        match element.text_content() {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), UiError> {
        if self.images.is_empty() {
            return Err(UiError::EmptyImageList);
        }
        if self.slide_interval_ms == 0 {
            return Err(UiError::InvalidInterval);
        }
        Ok(())
    }

    /// The configured log level, falling back to `info` for unknown names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
