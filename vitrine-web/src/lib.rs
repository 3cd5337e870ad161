//! vitrine-web - Browser front end for the product gallery
//!
//! Two ways in: [`mount`] attaches the gallery to server-rendered markup, and
//! [`App`] renders a standalone demo page with the Dioxus component.

pub mod config;
pub mod dom;
pub mod error;
pub mod input;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, info, warn};
use vitrine_common::{bind_input, ImageGallery};
use vitrine_ui::ProductGallery;
use web_sys_x::Document;

pub use config::{parse_image_list, GalleryConfig};
pub use dom::{resolve_surfaces, DomImage, DomOverlay, DomSurfaces, DomThumbnail};
pub use error::GalleryError;
pub use input::DomInputSource;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub type DomGallery = ImageGallery<DomImage, DomThumbnail, DomOverlay>;

/// A gallery bound to the page. Dropping it detaches its listeners.
pub struct MountedGallery {
    gallery: Rc<RefCell<DomGallery>>,
    // Owns the document listeners
    _input: DomInputSource,
}

thread_local! {
    static PAGE_GALLERY: RefCell<Option<MountedGallery>> = const { RefCell::new(None) };
}

/// Keep `mounted` alive for the rest of the page's life.
pub fn install(mounted: MountedGallery) {
    debug!(
        "Installing page gallery at image {} of {}",
        mounted.gallery.borrow().current_index(),
        mounted.gallery.borrow().len()
    );
    PAGE_GALLERY.with(|slot| *slot.borrow_mut() = Some(mounted));
}

pub fn page_document() -> Result<Document, GalleryError> {
    web_sys_x::window()
        .ok_or(GalleryError::NoWindow)?
        .document()
        .ok_or(GalleryError::NoDocument)
}

fn element_text(document: &Document, id: &str) -> Option<String> {
    document
        .get_element_by_id(id)
        .map(|el| el.text_content().unwrap_or_default())
}

/// Page config from the `gallery-config` element, or defaults.
pub fn read_config(document: &Document) -> Result<GalleryConfig, GalleryError> {
    match element_text(document, GalleryConfig::ELEMENT_ID) {
        Some(json) => GalleryConfig::from_json(&json),
        None => Ok(GalleryConfig::default()),
    }
}

/// Whether the page carries server-rendered gallery markup.
pub fn has_gallery_markup(document: &Document, config: &GalleryConfig) -> bool {
    document.get_element_by_id(&config.images_element_id).is_some()
        || document.get_element_by_id(&config.modal_id).is_some()
}

/// Attach the gallery to the page's existing elements.
///
/// Reads the image list, resolves the surfaces once, initializes the gallery
/// and binds keyboard and click input.
pub fn mount(document: &Document, config: &GalleryConfig) -> Result<MountedGallery, GalleryError> {
    let images = match element_text(document, &config.images_element_id) {
        Some(json) => parse_image_list(&json)?,
        None => {
            warn!("No #{} element, gallery is empty", config.images_element_id);
            Vec::new()
        }
    };

    let surfaces = resolve_surfaces(document, config);
    if !images.is_empty() && surfaces.thumbnails.len() != images.len() {
        warn!(
            "{} thumbnails for {} images",
            surfaces.thumbnails.len(),
            images.len()
        );
    }

    let mut input = DomInputSource::new(document, &surfaces, config);

    let mut gallery = ImageGallery::new(surfaces);
    gallery.initialize(images);
    let gallery = Rc::new(RefCell::new(gallery));

    bind_input(&gallery, &mut input);
    info!("Gallery mounted with {} images", gallery.borrow().len());

    Ok(MountedGallery {
        gallery,
        _input: input,
    })
}

/// Sample product images for the demo page
pub fn demo_images() -> Vec<String> {
    [10, 20, 30, 40, 50]
        .iter()
        .map(|id| format!("https://picsum.photos/id/{id}/900/900"))
        .collect()
}

/// Demo product page
#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-950 text-white",
            div { class: "max-w-xl mx-auto p-6 flex flex-col gap-4",
                h1 { class: "text-2xl font-semibold", "Field Camera" }
                ProductGallery { images: demo_images(), alt: "Field Camera" }
            }
        }
    }
}
