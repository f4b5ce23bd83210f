//! Selectors, class names, and defaults shared across the crate.
//!
//! Everything here is part of the contract with the page markup and its
//! stylesheet.

// ── Slideshow ───────────────────────────────────────────────────

/// Container that receives the two slide layers.
pub const SLIDESHOW_SECTION: &str = ".section-1";

/// Class carried by both slide layers.
pub const SLIDE_LAYER_CLASS: &str = "slide-layer";

/// Class marking the slide layer that is faded in.
pub const VISIBLE_CLASS: &str = "visible";

/// Milliseconds between slide changes.
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 3000;

/// Images cycled when the page does not configure its own list.
pub const DEFAULT_IMAGES: [&str; 4] = [
    "static/img/brown-chickens-farm.jpg",
    "static/img/b-cole-tZDQqzD3EqI-unsplash.jpg",
    "static/img/muhammad-qasim-ali-NddUYwQ_7xI-unsplash.jpg",
    "static/img/tattooed-roaster-hand-holds-metal-scoop-with-raw-fresh-green-coffee-beans-plastic-basket.jpg",
];

// ── Dialogs ─────────────────────────────────────────────────────

pub const LOGIN_TRIGGER: &str = ".login-btn";
pub const SIGNUP_TRIGGER: &str = ".signup-btn";
pub const LOGIN_MODAL_ID: &str = "login-modal";
pub const SIGNUP_MODAL_ID: &str = "signup-modal";

/// Class shared by both overlays; a click landing on it hit the backdrop.
pub const MODAL_CLASS: &str = "modal";

/// Selector for the nearest enclosing overlay.
pub const MODAL_SELECTOR: &str = ".modal";

/// Close controls inside any overlay.
pub const MODAL_CLOSE_SELECTOR: &str = ".modal .close";

/// First focus target when an overlay opens.
pub const FIRST_INPUT_SELECTOR: &str = "input";

pub const ESCAPE_KEY: &str = "Escape";

// ── Signup ──────────────────────────────────────────────────────

pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const PASSWORD_FIELD: &str = "[name=\"password\"]";
pub const CONFIRM_PASSWORD_FIELD: &str = "[name=\"confirm_password\"]";

/// Fallback target for the JSON signup mode when the form has no `action`.
pub const DEFAULT_SIGNUP_ENDPOINT: &str = "/signup";

// ── Navigation ──────────────────────────────────────────────────

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_ICON_SELECTOR: &str = "i";
pub const NAV_LINK_SELECTOR: &str = "a";

/// Class marking the navigation panel as shown.
pub const ACTIVE_CLASS: &str = "active";

pub const ICON_BARS_CLASS: &str = "fa-bars";
pub const ICON_CLOSE_CLASS: &str = "fa-times";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_LOG_LEVEL: &str = "info";
