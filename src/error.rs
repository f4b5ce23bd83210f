//! Errors raised while mounting and driving the page behaviors.
//!
//! None of these ever reach the visitor. The shells log them and fall back to
//! doing nothing, which keeps a page with partial markup usable.

use wasm_bindgen::JsValue;

/// Error returned by mount code and the DOM helpers.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// `window` is not available (not running in a browser).
    #[error("no global window")]
    NoWindow,
    /// The window has no document attached.
    #[error("window has no document")]
    NoDocument,
    /// A selector or id from the markup contract matched nothing.
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A `web-sys` call threw; the payload is the debug form of the thrown value.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The slideshow was given no images to cycle.
    #[error("image list is empty")]
    EmptyImageList,
    /// The slide interval was configured as zero.
    #[error("slide interval must be greater than zero")]
    InvalidInterval,
    /// The page's config block is not valid JSON for [`crate::config::SiteConfig`].
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
