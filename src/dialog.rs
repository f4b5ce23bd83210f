//! Login and signup overlays.
//!
//! Each overlay's visibility lives in [`DialogCore`] and reaches the page only
//! through [`render`], which writes the inline `display` and the `aria-hidden`
//! attribute together.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

use crate::consts::{
    ESCAPE_KEY, FIRST_INPUT_SELECTOR, LOGIN_MODAL_ID, LOGIN_TRIGGER, MODAL_CLASS,
    MODAL_CLOSE_SELECTOR, MODAL_SELECTOR, SIGNUP_MODAL_ID, SIGNUP_TRIGGER,
};
use crate::dom;

/// The two overlays on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogId {
    Login,
    Signup,
}

impl DialogId {
    pub const ALL: [Self; 2] = [Self::Login, Self::Signup];

    /// The overlay element's `id`.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Login => LOGIN_MODAL_ID,
            Self::Signup => SIGNUP_MODAL_ID,
        }
    }

    /// Selector of the button that opens this overlay.
    #[must_use]
    pub fn trigger_selector(self) -> &'static str {
        match self {
            Self::Login => LOGIN_TRIGGER,
            Self::Signup => SIGNUP_TRIGGER,
        }
    }

    #[must_use]
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.element_id() == id)
    }
}

/// Whether an overlay is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Inline `display` value for this visibility.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Shown => "flex",
        }
    }

    /// `aria-hidden` attribute value for this visibility.
    #[must_use]
    pub fn aria_hidden(self) -> &'static str {
        match self {
            Self::Hidden => "true",
            Self::Shown => "false",
        }
    }

    /// Interpret an inline `display` value found in the markup.
    #[must_use]
    pub fn from_display(display: &str) -> Self {
        if display == "flex" { Self::Shown } else { Self::Hidden }
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Self::Shown
    }
}

/// Visibility of both overlays.
#[derive(Debug, Clone, Default)]
pub struct DialogCore {
    login: Visibility,
    signup: Visibility,
}

impl DialogCore {
    #[must_use]
    pub fn new(login: Visibility, signup: Visibility) -> Self {
        Self { login, signup }
    }

    #[must_use]
    pub fn visibility(&self, id: DialogId) -> Visibility {
        match id {
            DialogId::Login => self.login,
            DialogId::Signup => self.signup,
        }
    }

    pub fn open(&mut self, id: DialogId) {
        *self.slot(id) = Visibility::Shown;
    }

    pub fn close(&mut self, id: DialogId) {
        *self.slot(id) = Visibility::Hidden;
    }

    /// Replace the tracked visibility of `id` with what the page shows.
    pub fn sync(&mut self, id: DialogId, visibility: Visibility) {
        *self.slot(id) = visibility;
    }

    /// Close every shown overlay and return the ones that were closed.
    pub fn escape(&mut self) -> Vec<DialogId> {
        let closed: Vec<DialogId> = DialogId::ALL
            .into_iter()
            .filter(|id| self.visibility(*id).is_shown())
            .collect();
        for id in &closed {
            self.close(*id);
        }
        closed
    }

    fn slot(&mut self, id: DialogId) -> &mut Visibility {
        match id {
            DialogId::Login => &mut self.login,
            DialogId::Signup => &mut self.signup,
        }
    }
}

/// Write `visibility` into `panel`.
pub fn render(panel: &HtmlElement, visibility: Visibility) {
    dom::set_style(panel, "display", visibility.display());
    dom::set_attribute(panel, "aria-hidden", visibility.aria_hidden());
}

struct Panels {
    login: Option<HtmlElement>,
    signup: Option<HtmlElement>,
}

impl Panels {
    fn get(&self, id: DialogId) -> Option<&HtmlElement> {
        match id {
            DialogId::Login => self.login.as_ref(),
            DialogId::Signup => self.signup.as_ref(),
        }
    }
}

/// Shared handle to the overlay state and elements, cloned into each listener.
#[derive(Clone)]
pub struct DialogHandle {
    core: Rc<RefCell<DialogCore>>,
    panels: Rc<Panels>,
}

impl DialogHandle {
    fn new(document: &Document) -> Self {
        let panels = Panels {
            login: dom::by_id(document, LOGIN_MODAL_ID),
            signup: dom::by_id(document, SIGNUP_MODAL_ID),
        };
        let seed = |panel: Option<&HtmlElement>| panel.map_or(Visibility::Hidden, live_visibility);
        let core = DialogCore::new(seed(panels.login.as_ref()), seed(panels.signup.as_ref()));
        Self { core: Rc::new(RefCell::new(core)), panels: Rc::new(panels) }
    }

    /// Whether the page carries the overlay element for `id`.
    #[must_use]
    pub fn has_panel(&self, id: DialogId) -> bool {
        self.panels.get(id).is_some()
    }

    #[must_use]
    pub fn visibility(&self, id: DialogId) -> Visibility {
        self.core.borrow().visibility(id)
    }

    /// Show the overlay and focus its first input.
    pub fn open(&self, id: DialogId) {
        let Some(panel) = self.panels.get(id) else {
            return;
        };
        self.core.borrow_mut().open(id);
        render(panel, Visibility::Shown);
        if let Some(input) = dom::find_within(panel, FIRST_INPUT_SELECTOR) {
            dom::focus(&input);
        }
    }

    pub fn close(&self, id: DialogId) {
        let Some(panel) = self.panels.get(id) else {
            return;
        };
        self.core.borrow_mut().close(id);
        render(panel, Visibility::Hidden);
    }

    /// Close whichever overlay `element` is.
    ///
    /// Overlays other than login and signup have no tracked state and are only
    /// rendered hidden.
    pub fn close_element(&self, element: &Element) {
        if let Some(id) = DialogId::from_element_id(&element.id()) {
            self.close(id);
        } else if let Some(panel) = element.dyn_ref::<HtmlElement>() {
            render(panel, Visibility::Hidden);
        }
    }

    /// Close every overlay whose inline `display` is `flex`.
    ///
    /// Tracked state is resynced from the page first, since other script on
    /// the page may show or hide a panel directly.
    pub fn escape(&self) {
        let mut core = self.core.borrow_mut();
        for id in DialogId::ALL {
            if let Some(panel) = self.panels.get(id) {
                core.sync(id, live_visibility(panel));
            }
        }
        let closed = core.escape();
        drop(core);
        for id in closed {
            if let Some(panel) = self.panels.get(id) {
                render(panel, Visibility::Hidden);
            }
        }
    }
}

fn live_visibility(panel: &HtmlElement) -> Visibility {
    let display = panel.style().get_property_value("display").unwrap_or_default();
    Visibility::from_display(&display)
}

/// The mounted dialog controller.
pub struct Dialogs {
    handle: DialogHandle,
    _listeners: Vec<EventListener>,
}

impl Dialogs {
    /// Wire triggers, close buttons, backdrop clicks, and Escape.
    ///
    /// Parts of the markup that are missing are skipped.
    #[must_use]
    pub fn mount(window: &Window, document: &Document) -> Self {
        let handle = DialogHandle::new(document);
        let mut listeners = Vec::new();

        for id in DialogId::ALL {
            let Some(trigger) = dom::find(document, id.trigger_selector()) else {
                log::debug!("no {} on page", id.trigger_selector());
                continue;
            };
            if !handle.has_panel(id) {
                log::debug!("no #{} on page", id.element_id());
                continue;
            }
            let handle = handle.clone();
            listeners.push(EventListener::new_with_options(
                &trigger,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    handle.open(id);
                },
            ));
        }

        for button in dom::find_all(document, MODAL_CLOSE_SELECTOR) {
            let handle = handle.clone();
            listeners.push(EventListener::new(&button, "click", move |event| {
                let modal = event.target().and_then(|t| dom::closest(&t, MODAL_SELECTOR));
                if let Some(modal) = modal {
                    handle.close_element(&modal);
                }
            }));
        }

        {
            let handle = handle.clone();
            listeners.push(EventListener::new(window, "click", move |event| {
                let Some(target) = event.target() else {
                    return;
                };
                if dom::has_class(&target, MODAL_CLASS) {
                    if let Some(backdrop) = target.dyn_ref::<Element>() {
                        handle.close_element(backdrop);
                    }
                }
            }));
        }

        {
            let handle = handle.clone();
            listeners.push(EventListener::new(window, "keydown", move |event| {
                let is_escape = event
                    .dyn_ref::<KeyboardEvent>()
                    .is_some_and(|key| key.key() == ESCAPE_KEY);
                if is_escape {
                    handle.escape();
                }
            }));
        }

        log::info!("dialogs mounted with {} listeners", listeners.len());
        Self { handle, _listeners: listeners }
    }

    /// Handle used by other units that need to open or close an overlay.
    #[must_use]
    pub fn handle(&self) -> &DialogHandle {
        &self.handle
    }
}
