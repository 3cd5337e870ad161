//! Gallery driven end to end through a bound input source

use std::cell::RefCell;
use std::rc::Rc;

use vitrine_common::{
    bind_input, ClickTarget, DisplaySurfaces, GalleryKey, ImageGallery, ImageSlot, InputSource,
    OverlaySlot, ThumbnailSlot,
};

type Gallery = ImageGallery<ImageSlot, ThumbnailSlot, OverlaySlot>;

/// Input source that lets the test fire events by hand
#[derive(Default)]
struct FakeInput {
    key_handlers: Vec<Box<dyn FnMut(GalleryKey)>>,
    click_handlers: Vec<Box<dyn FnMut(ClickTarget)>>,
}

impl FakeInput {
    fn press(&mut self, name: &str) {
        let key = GalleryKey::from_key_name(name);
        for handler in &mut self.key_handlers {
            handler(key);
        }
    }

    fn click(&mut self, target: ClickTarget) {
        for handler in &mut self.click_handlers {
            handler(target.clone());
        }
    }
}

impl InputSource for FakeInput {
    fn on_key_down(&mut self, handler: Box<dyn FnMut(GalleryKey)>) {
        self.key_handlers.push(handler);
    }

    fn on_click(&mut self, handler: Box<dyn FnMut(ClickTarget)>) {
        self.click_handlers.push(handler);
    }
}

fn setup(urls: &[&str]) -> (Rc<RefCell<Gallery>>, FakeInput) {
    let mut gallery = ImageGallery::new(DisplaySurfaces::in_memory(urls.len()));
    gallery.initialize(urls.iter().map(|u| u.to_string()).collect());
    let gallery = Rc::new(RefCell::new(gallery));

    let mut input = FakeInput::default();
    bind_input(&gallery, &mut input);
    (gallery, input)
}

fn modal_source(gallery: &Rc<RefCell<Gallery>>) -> Option<String> {
    gallery
        .borrow()
        .surfaces()
        .modal_image
        .as_ref()
        .and_then(|slot| slot.source().map(str::to_string))
}

#[test]
fn test_bind_registers_one_handler_each() {
    let (_gallery, input) = setup(&["a.jpg"]);
    assert_eq!(input.key_handlers.len(), 1);
    assert_eq!(input.click_handlers.len(), 1);
}

#[test]
fn test_keys_do_nothing_until_opened() {
    let (gallery, mut input) = setup(&["a.jpg", "b.jpg", "c.jpg"]);

    input.press("ArrowRight");
    assert_eq!(gallery.borrow().current_index(), 0);
    assert_eq!(modal_source(&gallery), None);

    input.click(ClickTarget::Open(1));
    input.press("ArrowRight");
    assert_eq!(gallery.borrow().current_index(), 2);
    assert_eq!(modal_source(&gallery).as_deref(), Some("c.jpg"));
}

#[test]
fn test_full_session() {
    let (gallery, mut input) = setup(&["a.jpg", "b.jpg", "c.jpg"]);

    input.click(ClickTarget::Thumbnail {
        index: 2,
        url: "c.jpg".into(),
    });
    input.click(ClickTarget::Open(2));
    assert!(gallery.borrow().is_overlay_visible());

    input.press("ArrowRight");
    assert_eq!(gallery.borrow().current_index(), 0);
    assert_eq!(modal_source(&gallery).as_deref(), Some("a.jpg"));

    input.press("ArrowLeft");
    assert_eq!(modal_source(&gallery).as_deref(), Some("c.jpg"));

    input.click(ClickTarget::Content);
    assert!(gallery.borrow().is_overlay_visible());

    input.click(ClickTarget::Backdrop);
    assert!(!gallery.borrow().is_overlay_visible());

    input.press("Escape");
    assert!(!gallery.borrow().is_overlay_visible());
}

#[test]
fn test_escape_closes() {
    let (gallery, mut input) = setup(&["a.jpg", "b.jpg"]);
    input.click(ClickTarget::Open(0));
    input.press("Escape");
    assert!(!gallery.borrow().is_overlay_visible());
}

#[test]
fn test_event_while_borrowed_is_dropped() {
    let (gallery, mut input) = setup(&["a.jpg", "b.jpg"]);
    input.click(ClickTarget::Open(0));

    let held = gallery.borrow();
    input.press("ArrowRight");
    input.click(ClickTarget::Backdrop);
    assert_eq!(held.current_index(), 0);
    assert!(held.is_overlay_visible());
}

#[test]
fn test_empty_gallery_ignores_everything() {
    let (gallery, mut input) = setup(&[]);
    input.click(ClickTarget::Open(0));
    input.press("ArrowRight");
    input.click(ClickTarget::Next);
    assert!(!gallery.borrow().is_overlay_visible());
    assert_eq!(modal_source(&gallery), None);
}
