use super::*;

// =============================================================
// NavState / NavIcon
// =============================================================

#[test]
fn default_state_is_closed() {
    assert_eq!(NavState::default(), NavState::Closed);
    assert_eq!(NavCore::default().state(), NavState::Closed);
}

#[test]
fn icon_matches_state() {
    assert_eq!(NavState::Closed.icon(), NavIcon::Bars);
    assert_eq!(NavState::Open.icon(), NavIcon::Close);
}

#[test]
fn icon_class_names_match_stylesheet() {
    assert_eq!(NavIcon::Bars.class_name(), "fa-bars");
    assert_eq!(NavIcon::Close.class_name(), "fa-times");
}

#[test]
fn icon_other_flips() {
    assert_eq!(NavIcon::Bars.other(), NavIcon::Close);
    assert_eq!(NavIcon::Close.other(), NavIcon::Bars);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn toggle_opens_then_closes() {
    let mut core = NavCore::default();
    assert_eq!(core.toggle(), NavState::Open);
    assert_eq!(core.state().icon(), NavIcon::Close);
    assert_eq!(core.toggle(), NavState::Closed);
    assert_eq!(core.state().icon(), NavIcon::Bars);
}

#[test]
fn link_click_closes_an_open_menu() {
    let mut core = NavCore::new(NavState::Open);
    assert!(core.link_activated());
    assert_eq!(core.state(), NavState::Closed);
}

#[test]
fn link_click_on_closed_menu_changes_nothing() {
    let mut core = NavCore::default();
    assert!(!core.link_activated());
    assert_eq!(core.state(), NavState::Closed);
}

#[test]
fn outside_click_closes_an_open_menu() {
    let mut core = NavCore::new(NavState::Open);
    assert!(core.outside_click(false));
    assert_eq!(core.state(), NavState::Closed);
}

#[test]
fn outside_click_on_closed_menu_changes_nothing() {
    let mut core = NavCore::default();
    assert!(!core.outside_click(false));
    assert_eq!(core.state(), NavState::Closed);
}

#[test]
fn click_inside_navbar_keeps_menu_open() {
    let mut core = NavCore::new(NavState::Open);
    assert!(!core.outside_click(true));
    assert_eq!(core.state(), NavState::Open);
}

#[test]
fn toggle_then_link_returns_to_closed() {
    let mut core = NavCore::default();
    core.toggle();
    assert!(core.link_activated());
    assert_eq!(core.state().icon(), NavIcon::Bars);
}
