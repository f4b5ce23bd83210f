use super::*;

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("static/img/{i}.jpg")).collect()
}

// =============================================================
// Layer
// =============================================================

#[test]
fn layer_other_flips() {
    assert_eq!(Layer::A.other(), Layer::B);
    assert_eq!(Layer::B.other(), Layer::A);
}

#[test]
fn layer_slots_are_distinct() {
    assert_eq!(Layer::A.slot(), 0);
    assert_eq!(Layer::B.slot(), 1);
}

// =============================================================
// SlideshowCore::new
// =============================================================

#[test]
fn new_rejects_empty_list() {
    assert!(matches!(SlideshowCore::new(Vec::new()), Err(UiError::EmptyImageList)));
}

#[test]
fn new_starts_on_first_image_with_a_on_top() {
    let core = SlideshowCore::new(images(4)).unwrap();
    assert_eq!(core.index(), 0);
    assert_eq!(core.current_image(), "static/img/0.jpg");
    assert_eq!(core.top(), Layer::A);
}

// =============================================================
// advance
// =============================================================

#[test]
fn first_tick_shows_second_image_on_layer_b() {
    let mut core = SlideshowCore::new(images(4)).unwrap();
    let step = core.advance();
    assert_eq!(
        step,
        SlideStep {
            index: 1,
            image: "static/img/1.jpg".to_owned(),
            show: Layer::B,
            hide: Layer::A,
        }
    );
    assert_eq!(core.top(), Layer::B);
}

#[test]
fn visible_layer_alternates_every_tick() {
    let mut core = SlideshowCore::new(images(4)).unwrap();
    let mut expected = Layer::B;
    for _ in 0..10 {
        let step = core.advance();
        assert_eq!(step.show, expected);
        assert_eq!(step.hide, expected.other());
        assert_eq!(core.top(), expected);
        expected = expected.other();
    }
}

#[test]
fn index_after_n_ticks_is_n_mod_len() {
    let mut core = SlideshowCore::new(images(4)).unwrap();
    for n in 1..=13 {
        core.advance();
        assert_eq!(core.index(), n % 4, "after {n} ticks");
    }
}

#[test]
fn wraps_back_to_first_image() {
    let mut core = SlideshowCore::new(images(4)).unwrap();
    for _ in 0..3 {
        core.advance();
    }
    let step = core.advance();
    assert_eq!(step.index, 0);
    assert_eq!(step.image, "static/img/0.jpg");
}

#[test]
fn single_image_keeps_crossfading_onto_itself() {
    let mut core = SlideshowCore::new(images(1)).unwrap();
    let first = core.advance();
    let second = core.advance();
    assert_eq!(first.index, 0);
    assert_eq!(second.index, 0);
    assert_ne!(first.show, second.show);
}

// =============================================================
// background_value
// =============================================================

#[test]
fn background_value_wraps_in_url() {
    assert_eq!(background_value("static/img/a.jpg"), "url('static/img/a.jpg')");
}
