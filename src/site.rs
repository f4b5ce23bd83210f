//! Page entry point.
//!
//! [`start`] runs when the wasm module is instantiated. It starts logging and
//! mounts a [`Site`] once the document has been parsed. The config block is
//! read at mount time, so it is found even when the script runs from `<head>`.
//! The mounted site lives in a thread-local slot until the page goes away.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::dialog::Dialogs;
use crate::dom;
use crate::error::UiError;
use crate::nav::NavToggle;
use crate::signup::{BrowserAlert, Notifier, SignupForm};
use crate::slideshow::Slideshow;

thread_local! {
    static MOUNTED: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Every behavior unit attached to the page. Units whose markup is missing are
/// `None`; dropping the site detaches all listeners and stops the slideshow.
pub struct Site {
    pub slideshow: Option<Slideshow>,
    pub dialogs: Dialogs,
    pub signup: Option<SignupForm>,
    pub nav: Option<NavToggle>,
}

impl Site {
    /// Attach every unit to `document`.
    ///
    /// Each unit mounts on its own; a unit that cannot find its markup is
    /// logged and skipped so the rest of the page still works.
    #[must_use]
    pub fn mount(
        window: &Window,
        document: &Document,
        config: &SiteConfig,
        notifier: Rc<dyn Notifier>,
    ) -> Self {
        let slideshow = skip_missing("slideshow", Slideshow::mount(document, config));
        let dialogs = Dialogs::mount(window, document);
        let signup = skip_missing(
            "signup form",
            SignupForm::mount(document, config, dialogs.handle().clone(), notifier),
        );
        let nav = skip_missing("navigation toggle", NavToggle::mount(document));
        Self { slideshow, dialogs, signup, nav }
    }

    /// Read the config block from `document`, apply its log level, and mount.
    ///
    /// A malformed block is logged and the defaults are used.
    #[must_use]
    pub fn mount_page(window: &Window, document: &Document, notifier: Rc<dyn Notifier>) -> Self {
        let config = SiteConfig::from_document(document).unwrap_or_else(|err| {
            log::error!("using default config: {err}");
            SiteConfig::default()
        });
        log::set_max_level(config.level().to_level_filter());
        log::debug!(
            "config loaded: {} images, {} ms",
            config.images.len(),
            config.slide_interval_ms
        );
        Self::mount(window, document, &config, notifier)
    }
}

fn skip_missing<T>(unit: &str, result: Result<T, UiError>) -> Option<T> {
    match result {
        Ok(mounted) => Some(mounted),
        Err(err @ UiError::MissingElement(_)) => {
            log::warn!("{unit} not mounted: {err}");
            None
        }
        Err(err) => {
            log::error!("{unit} failed to mount: {err}");
            None
        }
    }
}

/// Wasm start function.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            web_sys::console::error_1(&format!("page behaviors disabled: {err}").into());
            return;
        }
    };

    if console_log::init_with_level(log::Level::Trace).is_err() {
        web_sys::console::warn_1(&"logger was already initialized".into());
    }
    // Narrowed to the configured level once the config block is parsed.
    log::set_max_level(SiteConfig::default().level().to_level_filter());

    if document.ready_state() == "loading" {
        log::debug!("document still loading; waiting for DOMContentLoaded");
        EventListener::once(&document, "DOMContentLoaded", |_| mount_global()).forget();
    } else {
        mount_global();
    }
}

fn mount_global() {
    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            log::error!("cannot mount site: {err}");
            return;
        }
    };
    let Some(document) = window.document() else {
        log::error!("cannot mount site: {}", UiError::NoDocument);
        return;
    };
    let site = Site::mount_page(&window, &document, Rc::new(BrowserAlert));
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(site));
    log::info!("site mounted");
}
