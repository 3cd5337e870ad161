//! DOM-backed display surfaces
//!
//! Elements are looked up once by id (or selector, for thumbnails) and held by
//! the gallery. DOM call failures are logged and otherwise ignored.

use tracing::{debug, warn};
use vitrine_common::{DisplaySurfaces, ImageSurface, OverlaySurface, ThumbnailSurface};
use wasm_bindgen_x::JsCast;
use web_sys_x::{Document, Element, HtmlElement};

use crate::config::GalleryConfig;

/// `<img>` (or anything with a `src`) showing a gallery image
#[derive(Clone, Debug)]
pub struct DomImage {
    element: Element,
}

impl DomImage {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ImageSurface for DomImage {
    fn set_source(&mut self, url: &str) {
        if self.element.set_attribute("src", url).is_err() {
            warn!("Failed to set src on #{}", self.element.id());
        }
    }
}

/// Thumbnail marked active through a CSS class
#[derive(Clone, Debug)]
pub struct DomThumbnail {
    element: Element,
    active_class: String,
}

impl DomThumbnail {
    pub fn new(element: Element, active_class: impl Into<String>) -> Self {
        Self {
            element,
            active_class: active_class.into(),
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// URL this thumbnail stands for: `data-src`, else its own `src`
    pub fn url(&self) -> Option<String> {
        self.element
            .get_attribute("data-src")
            .or_else(|| self.element.get_attribute("src"))
    }
}

impl ThumbnailSurface for DomThumbnail {
    fn set_active(&mut self, active: bool) {
        if self
            .element
            .class_list()
            .toggle_with_force(&self.active_class, active)
            .is_err()
        {
            warn!("Failed to toggle {} on thumbnail", self.active_class);
        }
    }
}

/// Modal container shown and hidden through its inline `display` style
#[derive(Clone, Debug)]
pub struct DomOverlay {
    element: Element,
    visible_display: String,
    visible: bool,
}

impl DomOverlay {
    /// The container starts out hidden.
    pub fn new(element: Element, visible_display: impl Into<String>) -> Self {
        Self {
            element,
            visible_display: visible_display.into(),
            visible: false,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Only the `display` property is touched; other inline styles survive.
    fn set_display(&self, display: &str) {
        let Some(element) = self.element.dyn_ref::<HtmlElement>() else {
            warn!("#{} is not an HTML element", self.element.id());
            return;
        };
        if element.style().set_property("display", display).is_err() {
            warn!("Failed to set display on #{}", self.element.id());
        }
    }
}

impl OverlaySurface for DomOverlay {
    fn show(&mut self) {
        self.set_display(&self.visible_display);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.set_display("none");
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

pub type DomSurfaces = DisplaySurfaces<DomImage, DomThumbnail, DomOverlay>;

/// Collect every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        warn!("Invalid selector {:?}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Look up the gallery's elements once.
pub fn resolve_surfaces(document: &Document, config: &GalleryConfig) -> DomSurfaces {
    let main_image = document
        .get_element_by_id(&config.main_image_id)
        .map(DomImage::new);
    let modal = document
        .get_element_by_id(&config.modal_id)
        .map(|el| DomOverlay::new(el, config.visible_display.clone()));
    let modal_image = document
        .get_element_by_id(&config.modal_image_id)
        .map(DomImage::new);
    let thumbnails: Vec<DomThumbnail> = query_all(document, &config.thumbnail_selector)
        .into_iter()
        .map(|el| DomThumbnail::new(el, config.active_class.clone()))
        .collect();

    debug!(
        "Resolved gallery surfaces: main={} modal={} modal_image={} thumbnails={}",
        main_image.is_some(),
        modal.is_some(),
        modal_image.is_some(),
        thumbnails.len()
    );

    DisplaySurfaces {
        main_image,
        thumbnails,
        modal,
        modal_image,
    }
}
