//! Navigation input: key and click vocabulary, and handler binding
//!
//! Front ends translate their native events into [`GalleryKey`] and
//! [`ClickTarget`] through an [`InputSource`]; the gallery decides what each
//! one does.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;

use crate::gallery::ImageGallery;
use crate::surfaces::{ImageSurface, OverlaySurface, ThumbnailSurface};

/// Keys the gallery reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl GalleryKey {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => GalleryKey::Escape,
            "ArrowLeft" | "Left" => GalleryKey::ArrowLeft,
            "ArrowRight" | "Right" => GalleryKey::ArrowRight,
            _ => GalleryKey::Other,
        }
    }
}

/// What a click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The modal container itself, outside its content
    Backdrop,
    /// Anything inside the modal that isn't a control
    Content,
    /// Thumbnail at `index`, showing `url`
    Thumbnail { index: usize, url: String },
    /// An "open" trigger for image `index`
    Open(usize),
    Previous,
    Next,
    Close,
}

/// Something that delivers key-down and click events to registered handlers
pub trait InputSource {
    fn on_key_down(&mut self, handler: Box<dyn FnMut(GalleryKey)>);
    fn on_click(&mut self, handler: Box<dyn FnMut(ClickTarget)>);
}

impl<I, T, O> ImageGallery<I, T, O>
where
    I: ImageSurface,
    T: ThumbnailSurface,
    O: OverlaySurface,
{
    /// Handle a key press. Keys are ignored while the modal is hidden.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: GalleryKey) -> bool {
        if !self.is_overlay_visible() {
            return false;
        }

        match key {
            GalleryKey::Escape => self.close_overlay(),
            GalleryKey::ArrowLeft => self.advance(-1),
            GalleryKey::ArrowRight => self.advance(1),
            GalleryKey::Other => return false,
        }
        true
    }

    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Backdrop | ClickTarget::Close => self.close_overlay(),
            ClickTarget::Content => {}
            ClickTarget::Thumbnail { index, url } => self.select_thumbnail(&url, index),
            ClickTarget::Open(index) => self.open_overlay(index),
            ClickTarget::Previous => self.advance(-1),
            ClickTarget::Next => self.advance(1),
        }
    }
}

/// Register the gallery's key and click handlers on `source`.
///
/// Call once, after the page's surfaces have been resolved.
pub fn bind_input<I, T, O, S>(gallery: &Rc<RefCell<ImageGallery<I, T, O>>>, source: &mut S)
where
    I: ImageSurface + 'static,
    T: ThumbnailSurface + 'static,
    O: OverlaySurface + 'static,
    S: InputSource + ?Sized,
{
    let keys = Rc::clone(gallery);
    source.on_key_down(Box::new(move |key| match keys.try_borrow_mut() {
        Ok(mut gallery) => {
            gallery.handle_key(key);
        }
        Err(_) => warn!("Gallery busy, dropping key {:?}", key),
    }));

    let clicks = Rc::clone(gallery);
    source.on_click(Box::new(move |target| match clicks.try_borrow_mut() {
        Ok(mut gallery) => gallery.handle_click(target),
        Err(_) => warn!("Gallery busy, dropping click on {:?}", target),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surfaces::{DisplaySurfaces, ImageSlot, OverlaySlot, ThumbnailSlot};

    fn gallery(urls: &[&str]) -> ImageGallery<ImageSlot, ThumbnailSlot, OverlaySlot> {
        let mut g = ImageGallery::new(DisplaySurfaces::in_memory(urls.len()));
        g.initialize(urls.iter().map(|u| u.to_string()).collect());
        g
    }

    #[test]
    fn test_key_names() {
        assert_eq!(GalleryKey::from_key_name("Escape"), GalleryKey::Escape);
        assert_eq!(GalleryKey::from_key_name("ArrowLeft"), GalleryKey::ArrowLeft);
        assert_eq!(
            GalleryKey::from_key_name("ArrowRight"),
            GalleryKey::ArrowRight
        );
        assert_eq!(GalleryKey::from_key_name("Enter"), GalleryKey::Other);
        assert_eq!(GalleryKey::from_key_name("escape"), GalleryKey::Other);
    }

    #[test]
    fn test_keys_ignored_while_hidden() {
        let mut g = gallery(&["a.jpg", "b.jpg"]);
        assert!(!g.handle_key(GalleryKey::ArrowRight));
        assert_eq!(g.current_index(), 0);
        assert!(!g.handle_key(GalleryKey::Escape));
    }

    #[test]
    fn test_keys_navigate_while_visible() {
        let mut g = gallery(&["a.jpg", "b.jpg", "c.jpg"]);
        g.open_overlay(0);

        assert!(g.handle_key(GalleryKey::ArrowRight));
        assert_eq!(g.current_index(), 1);
        assert!(g.handle_key(GalleryKey::ArrowLeft));
        assert!(g.handle_key(GalleryKey::ArrowLeft));
        assert_eq!(g.current_index(), 2);

        assert!(!g.handle_key(GalleryKey::Other));
        assert_eq!(g.current_index(), 2);

        assert!(g.handle_key(GalleryKey::Escape));
        assert!(!g.is_overlay_visible());
    }

    #[test]
    fn test_backdrop_click_closes_content_click_does_not() {
        let mut g = gallery(&["a.jpg"]);
        g.open_overlay(0);

        g.handle_click(ClickTarget::Content);
        assert!(g.is_overlay_visible());

        g.handle_click(ClickTarget::Backdrop);
        assert!(!g.is_overlay_visible());
    }

    #[test]
    fn test_control_clicks() {
        let mut g = gallery(&["a.jpg", "b.jpg", "c.jpg"]);
        g.handle_click(ClickTarget::Open(1));
        assert!(g.is_overlay_visible());
        assert_eq!(g.current_index(), 1);

        g.handle_click(ClickTarget::Next);
        assert_eq!(g.current_index(), 2);
        g.handle_click(ClickTarget::Previous);
        assert_eq!(g.current_index(), 1);

        g.handle_click(ClickTarget::Close);
        assert!(!g.is_overlay_visible());
    }

    #[test]
    fn test_thumbnail_click_selects() {
        let mut g = gallery(&["a.jpg", "b.jpg"]);
        g.handle_click(ClickTarget::Thumbnail {
            index: 1,
            url: "b.jpg".into(),
        });
        assert_eq!(g.current_index(), 1);
        assert!(g.surfaces().thumbnails[1].is_active());
        assert_eq!(
            g.surfaces().main_image.as_ref().and_then(ImageSlot::source),
            Some("b.jpg")
        );
    }
}
