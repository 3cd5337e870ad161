//! Image gallery state
//!
//! Holds the ordered image URLs and the selected index, and renders the
//! selection onto the main image, thumbnail strip and modal surfaces.

use tracing::debug;

use crate::surfaces::{DisplaySurfaces, ImageSurface, OverlaySurface, ThumbnailSurface};

/// One gallery per page: image list, selected index and the surfaces it renders to.
pub struct ImageGallery<I, T, O> {
    images: Vec<String>,
    current_index: usize,
    surfaces: DisplaySurfaces<I, T, O>,
}

impl<I, T, O> ImageGallery<I, T, O>
where
    I: ImageSurface,
    T: ThumbnailSurface,
    O: OverlaySurface,
{
    /// Create an empty gallery over already-resolved surfaces. Modal starts hidden.
    pub fn new(surfaces: DisplaySurfaces<I, T, O>) -> Self {
        Self {
            images: Vec::new(),
            current_index: 0,
            surfaces,
        }
    }

    /// Replace the image list and reset the selection to the first image.
    ///
    /// Does not touch any surface.
    pub fn initialize(&mut self, urls: Vec<String>) {
        debug!("Gallery initialized with {} images", urls.len());
        self.images = urls;
        self.current_index = 0;
    }

    /// Show `url` as the main image and mark thumbnail `index` active.
    ///
    /// `index` is not validated; out of range leaves every thumbnail inactive.
    pub fn select_thumbnail(&mut self, url: &str, index: usize) {
        if let Some(main) = self.surfaces.main_image.as_mut() {
            main.set_source(url);
        }

        for (i, thumbnail) in self.surfaces.thumbnails.iter_mut().enumerate() {
            thumbnail.set_active(i == index);
        }

        self.current_index = index;
    }

    /// Show image `index` in the modal and make the modal visible.
    ///
    /// No-op on an empty gallery.
    pub fn open_overlay(&mut self, index: usize) {
        if self.images.is_empty() {
            return;
        }

        self.current_index = index;
        self.write_modal_image();

        if let Some(modal) = self.surfaces.modal.as_mut() {
            modal.show();
        }
        debug!("Overlay opened at {}", index);
    }

    /// Hide the modal. Closing a closed modal is a no-op.
    pub fn close_overlay(&mut self) {
        if let Some(modal) = self.surfaces.modal.as_mut() {
            modal.hide();
        }
    }

    /// Move the selection by `step` and show the new image in the modal.
    ///
    /// Past the end resets to 0 and before the start resets to the last image.
    /// This wraps unit steps correctly; a larger step is not reduced modulo the
    /// length (stepping 3 forward from the last of 5 lands on 0, not 2).
    pub fn advance(&mut self, step: isize) {
        let len = self.images.len();
        if len == 0 {
            return;
        }

        self.current_index = match self.current_index.checked_add_signed(step) {
            Some(next) if next < len => next,
            Some(_) => 0,
            None if step < 0 => len - 1,
            None => 0,
        };

        self.write_modal_image();
        debug!("Gallery advanced by {} to {}", step, self.current_index);
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.surfaces
            .modal
            .as_ref()
            .is_some_and(|modal| modal.is_visible())
    }

    fn write_modal_image(&mut self) {
        let Some(url) = self.images.get(self.current_index) else {
            return;
        };
        if let Some(modal_image) = self.surfaces.modal_image.as_mut() {
            modal_image.set_source(url);
        }
    }
}

impl<I, T, O> ImageGallery<I, T, O> {
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Selected index. Meaningless while the gallery is empty.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Counter text like "2 / 5", only when there is more than one image.
    pub fn position_label(&self) -> Option<String> {
        if self.images.len() > 1 && self.current_index < self.images.len() {
            Some(format!("{} / {}", self.current_index + 1, self.images.len()))
        } else {
            None
        }
    }

    pub fn surfaces(&self) -> &DisplaySurfaces<I, T, O> {
        &self.surfaces
    }
}
