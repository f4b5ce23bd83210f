//! Page behaviors for the static marketing site.
//!
//! This crate is compiled to WebAssembly and loaded by the site's single page.
//! On page-ready it attaches three independent units to the existing markup:
//! a crossfade slideshow, the login/signup dialogs, and the mobile navigation
//! toggle. Each unit owns a plain state core that never touches the DOM, plus
//! a thin shell that translates DOM events into core calls and renders the
//! result back into classes and inline styles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Entry point and the [`site::Site`] that owns every mounted unit |
//! | [`slideshow`] | Two-layer crossfade slideshow and its [`slideshow::SlideshowCore`] |
//! | [`dialog`] | Login/signup overlays and the [`dialog::DialogCore`] visibility model |
//! | [`signup`] | Password confirmation and the opt-in JSON signup submission |
//! | [`nav`] | Mobile menu toggle and the [`nav::NavCore`] state machine |
//! | [`config`] | [`config::SiteConfig`] loaded from the page's JSON config block |
//! | [`dom`] | Small `web-sys` helpers shared by the shells |
//! | [`error`] | [`error::UiError`] |
//! | [`consts`] | Selectors, class names, and default values |

pub mod config;
pub mod consts;
pub mod dialog;
pub mod dom;
pub mod error;
pub mod nav;
pub mod signup;
pub mod site;
pub mod slideshow;
