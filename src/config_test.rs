use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_uses_the_four_site_images() {
    let config = SiteConfig::default();
    assert_eq!(config.images.len(), 4);
    assert_eq!(config.images[0], "static/img/brown-chickens-farm.jpg");
}

#[test]
fn default_interval_is_three_seconds() {
    assert_eq!(SiteConfig::default().slide_interval_ms, 3000);
}

#[test]
fn default_signup_mode_is_native() {
    let config = SiteConfig::default();
    assert_eq!(config.signup_mode, SignupMode::Native);
    assert_eq!(config.signup_endpoint, "/signup");
}

#[test]
fn default_level_is_info() {
    assert_eq!(SiteConfig::default().level(), log::Level::Info);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "slide_interval_ms": 500 }"#).unwrap();
    assert_eq!(config.slide_interval_ms, 500);
    assert_eq!(config.images, SiteConfig::default().images);
}

#[test]
fn images_override_replaces_list() {
    let config = SiteConfig::from_json(r#"{ "images": ["a.jpg", "b.jpg"] }"#).unwrap();
    assert_eq!(config.images, vec!["a.jpg".to_owned(), "b.jpg".to_owned()]);
}

#[test]
fn json_signup_mode_parses() {
    let config =
        SiteConfig::from_json(r#"{ "signup_mode": "json", "signup_endpoint": "/api/signup" }"#)
            .unwrap();
    assert_eq!(config.signup_mode, SignupMode::Json);
    assert_eq!(config.signup_endpoint, "/api/signup");
}

#[test]
fn unknown_signup_mode_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "signup_mode": "ajax" }"#).unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = SiteConfig::from_json("{ images: ").unwrap_err();
    assert!(matches!(err, UiError::Config(_)));
}

#[test]
fn empty_image_list_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "images": [] }"#).unwrap_err();
    assert!(matches!(err, UiError::EmptyImageList));
}

#[test]
fn zero_interval_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "slide_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, UiError::InvalidInterval));
}

// =============================================================
// level
// =============================================================

#[test]
fn level_parses_known_names() {
    let config = SiteConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
    assert_eq!(config.level(), log::Level::Debug);
}

#[test]
fn level_falls_back_to_info() {
    let config = SiteConfig::from_json(r#"{ "log_level": "loud" }"#).unwrap();
    assert_eq!(config.level(), log::Level::Info);
}
