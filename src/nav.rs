//! Mobile navigation menu.
//!
//! Two states, closed and open. The toggle flips them; a link click or a click
//! outside the navbar closes the menu. The icon glyph is derived from the state
//! and written in the same step as the panel class.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use web_sys::{Document, HtmlElement};

use crate::consts::{
    ACTIVE_CLASS, ICON_BARS_CLASS, ICON_CLOSE_CLASS, MENU_TOGGLE_SELECTOR, NAVBAR_SELECTOR,
    NAV_ICON_SELECTOR, NAV_LINK_SELECTOR, NAV_MENU_SELECTOR,
};
use crate::dom;
use crate::error::UiError;

/// Whether the navigation panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Glyph the toggle shows in this state.
    #[must_use]
    pub fn icon(self) -> NavIcon {
        match self {
            Self::Closed => NavIcon::Bars,
            Self::Open => NavIcon::Close,
        }
    }
}

/// The toggle's two glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Bars,
    Close,
}

impl NavIcon {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Bars => ICON_BARS_CLASS,
            Self::Close => ICON_CLOSE_CLASS,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Bars => Self::Close,
            Self::Close => Self::Bars,
        }
    }
}

/// Navigation state machine.
#[derive(Debug, Clone, Default)]
pub struct NavCore {
    state: NavState,
}

impl NavCore {
    #[must_use]
    pub fn new(state: NavState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Flip the menu and return the new state.
    pub fn toggle(&mut self) -> NavState {
        self.state = self.state.toggled();
        self.state
    }

    /// A link inside the menu was followed. Returns whether the state changed.
    pub fn link_activated(&mut self) -> bool {
        self.close()
    }

    /// A click landed somewhere on the page. Returns whether the state changed.
    pub fn outside_click(&mut self, inside_navbar: bool) -> bool {
        if inside_navbar { false } else { self.close() }
    }

    fn close(&mut self) -> bool {
        let changed = self.state.is_open();
        self.state = NavState::Closed;
        changed
    }
}

#[derive(Clone)]
struct NavView {
    menu: HtmlElement,
    toggle: HtmlElement,
}

impl NavView {
    fn render(&self, state: NavState) {
        dom::set_class(&self.menu, ACTIVE_CLASS, state.is_open());
        match dom::find_within(&self.toggle, NAV_ICON_SELECTOR) {
            Some(icon) => {
                let glyph = state.icon();
                dom::set_class(&icon, glyph.other().class_name(), false);
                dom::set_class(&icon, glyph.class_name(), true);
            }
            None => log::debug!("menu toggle has no icon"),
        }
    }
}

/// The mounted navigation toggle.
pub struct NavToggle {
    core: Rc<RefCell<NavCore>>,
    _listeners: Vec<EventListener>,
}

impl NavToggle {
    /// Wire the toggle, the menu links, and the outside-click handler.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the toggle or the menu is absent.
    pub fn mount(document: &Document) -> Result<Self, UiError> {
        let toggle = dom::find(document, MENU_TOGGLE_SELECTOR)
            .ok_or_else(|| UiError::MissingElement(MENU_TOGGLE_SELECTOR.to_owned()))?;
        let menu = dom::find(document, NAV_MENU_SELECTOR)
            .ok_or_else(|| UiError::MissingElement(NAV_MENU_SELECTOR.to_owned()))?;

        let initial = if menu.class_list().contains(ACTIVE_CLASS) {
            NavState::Open
        } else {
            NavState::Closed
        };
        let core = Rc::new(RefCell::new(NavCore::new(initial)));
        let view = NavView { menu, toggle };
        let mut listeners = Vec::new();

        {
            let core = Rc::clone(&core);
            let view = view.clone();
            let target = view.toggle.clone();
            listeners.push(EventListener::new(&target, "click", move |_| {
                let state = core.borrow_mut().toggle();
                view.render(state);
            }));
        }

        for link in dom::find_all_within(&view.menu, NAV_LINK_SELECTOR) {
            let core = Rc::clone(&core);
            let view = view.clone();
            listeners.push(EventListener::new(&link, "click", move |_| {
                if core.borrow_mut().link_activated() {
                    view.render(NavState::Closed);
                }
            }));
        }

        {
            let core = Rc::clone(&core);
            let view = view.clone();
            listeners.push(EventListener::new(document, "click", move |event| {
                let inside = event
                    .target()
                    .and_then(|t| dom::closest(&t, NAVBAR_SELECTOR))
                    .is_some();
                if core.borrow_mut().outside_click(inside) {
                    view.render(NavState::Closed);
                }
            }));
        }

        log::info!("navigation toggle mounted with {} listeners", listeners.len());
        Ok(Self { core, _listeners: listeners })
    }

    #[must_use]
    pub fn state(&self) -> NavState {
        self.core.borrow().state()
    }
}
