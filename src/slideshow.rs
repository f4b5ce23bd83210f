//! Two-layer crossfade slideshow.
//!
//! Two stacked `div`s are appended to the slideshow section. On every tick the
//! hidden layer receives the next image and the stylesheet fades it in while the
//! visible layer fades out; then the two swap roles. [`SlideshowCore`] tracks
//! the index and which layer is on top, and [`Slideshow`] applies each
//! [`SlideStep`] to the DOM.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::config::SiteConfig;
use crate::consts::{SLIDESHOW_SECTION, SLIDE_LAYER_CLASS, VISIBLE_CLASS};
use crate::dom;
use crate::error::UiError;

/// One of the two stacked slide layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    A,
    B,
}

impl Layer {
    /// The layer that is not `self`.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Position of this layer in a two-element array.
    #[must_use]
    pub fn slot(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Rendering instructions for a single tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideStep {
    /// Index of the image now being shown.
    pub index: usize,
    /// Image reference to assign to `show` before it fades in.
    pub image: String,
    /// Layer that becomes visible (the previous bottom layer).
    pub show: Layer,
    /// Layer that fades out (the previous top layer).
    pub hide: Layer,
}

/// Slideshow state: the image list, current index, and which layer is on top.
#[derive(Debug, Clone)]
pub struct SlideshowCore {
    images: Vec<String>,
    index: usize,
    top: Layer,
}

impl SlideshowCore {
    /// Start at the first image with layer A on top.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::EmptyImageList`] if `images` is empty.
    pub fn new(images: Vec<String>) -> Result<Self, UiError> {
        if images.is_empty() {
            return Err(UiError::EmptyImageList);
        }
        Ok(Self { images, index: 0, top: Layer::A })
    }

    /// Advance to the next image, wrapping at the end of the list.
    pub fn advance(&mut self) -> SlideStep {
        let next = (self.index + 1) % self.images.len();
        let show = self.top.other();
        let step = SlideStep {
            index: next,
            image: self.images[next].clone(),
            show,
            hide: self.top,
        };
        self.top = show;
        self.index = next;
        step
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_image(&self) -> &str {
        &self.images[self.index]
    }

    /// The layer currently faded in.
    #[must_use]
    pub fn top(&self) -> Layer {
        self.top
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }
}

/// CSS `background-image` value for an image reference.
#[must_use]
pub fn background_value(image: &str) -> String {
    format!("url('{image}')")
}

/// The mounted slideshow. Dropping it stops the timer.
pub struct Slideshow {
    core: Rc<RefCell<SlideshowCore>>,
    layers: Rc<[HtmlElement; 2]>,
    preloaded: Vec<HtmlImageElement>,
    _timer: Interval,
}

impl Slideshow {
    /// Preload the images, insert both layers into the slideshow section, and
    /// start the timer.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] when the page has no slideshow
    /// section, or any error from building the layers.
    pub fn mount(document: &Document, config: &SiteConfig) -> Result<Self, UiError> {
        let section = dom::find(document, SLIDESHOW_SECTION)
            .ok_or_else(|| UiError::MissingElement(SLIDESHOW_SECTION.to_owned()))?;
        let core = SlideshowCore::new(config.images.clone())?;

        let preloaded = preload(core.images())?;

        let layer_a = create_layer(document)?;
        let layer_b = create_layer(document)?;
        dom::set_class(&layer_a, VISIBLE_CLASS, true);
        dom::set_style(&layer_a, "background-image", &background_value(core.current_image()));
        section.append_child(&layer_a)?;
        section.append_child(&layer_b)?;

        let core = Rc::new(RefCell::new(core));
        let layers = Rc::new([layer_a, layer_b]);

        let timer = {
            let core = Rc::clone(&core);
            let layers = Rc::clone(&layers);
            Interval::new(config.slide_interval_ms, move || {
                let step = core.borrow_mut().advance();
                apply_step(&layers, &step);
            })
        };

        log::info!(
            "slideshow mounted: {} images every {} ms",
            config.images.len(),
            config.slide_interval_ms
        );
        Ok(Self { core, layers, preloaded, _timer: timer })
    }

    /// Index of the image currently faded in.
    #[must_use]
    pub fn index(&self) -> usize {
        self.core.borrow().index()
    }

    /// The layer element for `layer`.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> &HtmlElement {
        &self.layers[layer.slot()]
    }

    /// Image elements created to warm the browser cache, one per reference.
    #[must_use]
    pub fn preloaded(&self) -> &[HtmlImageElement] {
        &self.preloaded
    }
}

fn preload(images: &[String]) -> Result<Vec<HtmlImageElement>, UiError> {
    images
        .iter()
        .map(|src| {
            let img = HtmlImageElement::new()?;
            img.set_src(src);
            Ok::<_, UiError>(img)
        })
        .collect()
}

fn create_layer(document: &Document) -> Result<HtmlElement, UiError> {
    let layer = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|el| UiError::Dom(format!("created element is not an HtmlElement: {el:?}")))?;
    layer.set_class_name(SLIDE_LAYER_CLASS);
    Ok(layer)
}

fn apply_step(layers: &[HtmlElement; 2], step: &SlideStep) {
    let show = &layers[step.show.slot()];
    let hide = &layers[step.hide.slot()];

    dom::set_style(show, "background-image", &background_value(&step.image));

    // Flush layout so the class change below animates instead of jumping.
    std::hint::black_box(show.offset_height());

    dom::set_class(show, VISIBLE_CLASS, true);
    dom::set_class(hide, VISIBLE_CLASS, false);
    log::trace!("slide {} on layer {:?}", step.index, step.show);
}
