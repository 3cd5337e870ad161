//! Display surfaces the gallery writes to
//!
//! The page owns these elements; the gallery only writes their visual
//! attributes. A surface the page doesn't provide is `None` and every write to
//! it is skipped.

/// An element that shows an image by URL (main image, modal image)
pub trait ImageSurface {
    fn set_source(&mut self, url: &str);
}

/// A thumbnail element that can be marked active
pub trait ThumbnailSurface {
    fn set_active(&mut self, active: bool);
}

/// The modal container
pub trait OverlaySurface {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}

/// The set of surfaces a gallery renders onto, resolved once at construction
#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySurfaces<I, T, O> {
    pub main_image: Option<I>,
    /// Ordered, one per image
    pub thumbnails: Vec<T>,
    pub modal: Option<O>,
    pub modal_image: Option<I>,
}

impl<I, T, O> Default for DisplaySurfaces<I, T, O> {
    fn default() -> Self {
        Self {
            main_image: None,
            thumbnails: Vec::new(),
            modal: None,
            modal_image: None,
        }
    }
}

impl DisplaySurfaces<ImageSlot, ThumbnailSlot, OverlaySlot> {
    /// Every surface present, backed by plain values.
    pub fn in_memory(thumbnail_count: usize) -> Self {
        Self {
            main_image: Some(ImageSlot::default()),
            thumbnails: vec![ThumbnailSlot::default(); thumbnail_count],
            modal: Some(OverlaySlot::default()),
            modal_image: Some(ImageSlot::default()),
        }
    }
}

// =============================================================================
// In-memory surfaces
// =============================================================================

/// Image surface that records the last source written to it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSlot {
    source: Option<String>,
}

impl ImageSlot {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl ImageSurface for ImageSlot {
    fn set_source(&mut self, url: &str) {
        self.source = Some(url.to_string());
    }
}

/// Thumbnail surface that records its active flag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThumbnailSlot {
    active: bool,
}

impl ThumbnailSlot {
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl ThumbnailSurface for ThumbnailSlot {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Overlay surface that records its visibility. Starts hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlaySlot {
    visible: bool,
}

impl OverlaySurface for OverlaySlot {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_has_every_surface() {
        let surfaces = DisplaySurfaces::in_memory(3);
        assert!(surfaces.main_image.is_some());
        assert!(surfaces.modal.is_some());
        assert!(surfaces.modal_image.is_some());
        assert_eq!(surfaces.thumbnails.len(), 3);
        assert!(surfaces.thumbnails.iter().all(|t| !t.is_active()));
    }

    #[test]
    fn test_overlay_slot_starts_hidden() {
        let mut overlay = OverlaySlot::default();
        assert!(!overlay.is_visible());
        overlay.show();
        assert!(overlay.is_visible());
        overlay.hide();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_default_record_is_empty() {
        let surfaces: DisplaySurfaces<ImageSlot, ThumbnailSlot, OverlaySlot> =
            DisplaySurfaces::default();
        assert!(surfaces.main_image.is_none());
        assert!(surfaces.thumbnails.is_empty());
        assert!(surfaces.modal.is_none());
        assert!(surfaces.modal_image.is_none());
    }
}
