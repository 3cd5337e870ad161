//! Product gallery component
//!
//! Main image with a thumbnail strip underneath, plus a lightbox for full-size
//! viewing. All state lives in one [`ImageGallery`] over in-memory surfaces;
//! the view renders whatever those surfaces last recorded.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, ExpandIcon, XIcon};
use crate::components::LightboxModal;
use dioxus::prelude::*;
use vitrine_common::{
    ClickTarget, DisplaySurfaces, GalleryKey, ImageGallery, ImageSlot, OverlaySlot,
    ThumbnailSlot,
};

/// Gallery whose surfaces are plain values the view reads back
pub type ViewGallery = ImageGallery<ImageSlot, ThumbnailSlot, OverlaySlot>;

/// Build a gallery for `images` with the first image shown and its thumbnail active.
pub fn build_view_gallery(images: &[String]) -> ViewGallery {
    let mut gallery = ImageGallery::new(DisplaySurfaces::in_memory(images.len()));
    gallery.initialize(images.to_vec());
    if let Some(first) = images.first() {
        gallery.select_thumbnail(first, 0);
    }
    gallery
}

fn thumbnail_ring_class(is_active: bool) -> &'static str {
    if is_active {
        "ring-2 ring-white"
    } else {
        "ring-1 ring-gray-600 hover:ring-gray-500"
    }
}

fn key_from_event(key: &Key) -> GalleryKey {
    match key {
        Key::Escape => GalleryKey::Escape,
        Key::ArrowLeft => GalleryKey::ArrowLeft,
        Key::ArrowRight => GalleryKey::ArrowRight,
        _ => GalleryKey::Other,
    }
}

/// Product image gallery with lightbox
#[component]
pub fn ProductGallery(
    /// Image URLs in display order
    images: Vec<String>,
    /// Alt text prefix for the images
    #[props(default)]
    alt: String,
) -> Element {
    let mut gallery = use_signal(|| build_view_gallery(&images));
    let mut last_images = use_signal(|| images.clone());

    // Start over when the parent passes a different image list
    if images != *last_images.read() {
        last_images.set(images.clone());
        gallery.set(build_view_gallery(&images));
    }

    let is_open_memo = use_memo(move || gallery.read().is_overlay_visible());
    let is_open: ReadSignal<bool> = is_open_memo.into();

    let (main_src, modal_src, active, counter, current) = {
        let state = gallery.read();
        let surfaces = state.surfaces();
        (
            surfaces
                .main_image
                .as_ref()
                .and_then(ImageSlot::source)
                .map(str::to_string),
            surfaces
                .modal_image
                .as_ref()
                .and_then(ImageSlot::source)
                .map(str::to_string),
            surfaces
                .thumbnails
                .iter()
                .map(ThumbnailSlot::is_active)
                .collect::<Vec<_>>(),
            state.position_label(),
            state.current_index(),
        )
    };

    if images.is_empty() {
        return rsx! {
            div { class: "flex items-center justify-center aspect-square bg-gray-800 rounded-lg text-gray-400",
                "No images available"
            }
        };
    }

    let total = images.len();

    let on_keydown = move |evt: KeyboardEvent| {
        let key = key_from_event(&evt.key());
        if gallery.write().handle_key(key) {
            evt.prevent_default();
        }
    };

    rsx! {
        div { class: "flex flex-col gap-3",

            // Main image
            div { class: "relative group",
                if let Some(src) = main_src {
                    img {
                        src: "{src}",
                        alt: "{alt}",
                        class: "w-full aspect-square object-contain rounded-lg bg-gray-900",
                    }
                }
                button {
                    class: "absolute top-2 right-2 w-9 h-9 bg-gray-800/60 hover:bg-gray-700/80 text-gray-200 rounded-full flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity",
                    title: "View full size",
                    onclick: move |_| gallery.write().handle_click(ClickTarget::Open(current)),
                    ExpandIcon { class: "w-4 h-4" }
                }
            }

            // Thumbnail strip
            if total > 1 {
                div { class: "flex gap-2 overflow-x-auto p-1",
                    for (i , url) in images.iter().enumerate() {
                        {
                            let ring_class = thumbnail_ring_class(active.get(i).copied().unwrap_or(false));
                            let target_url = url.clone();
                            let label = format!("{alt} {}", i + 1);
                            rsx! {
                                button {
                                    key: "{url}-{i}",
                                    class: "flex-shrink-0 w-16 h-16 rounded-md overflow-clip {ring_class}",
                                    onclick: move |_| {
                                        gallery
                                            .write()
                                            .handle_click(ClickTarget::Thumbnail {
                                                index: i,
                                                url: target_url.clone(),
                                            })
                                    },
                                    ondoubleclick: move |_| gallery.write().handle_click(ClickTarget::Open(i)),
                                    img {
                                        src: "{url}",
                                        alt: "{label}",
                                        class: "w-full h-full object-cover",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        LightboxModal {
            is_open,
            on_close: move |_| gallery.write().close_overlay(),
            on_click: move |target: ClickTarget| gallery.write().handle_click(target),
            div { onkeydown: on_keydown, tabindex: "-1", class: "flex flex-col items-center outline-none",

                button {
                    class: "fixed top-4 right-4 text-gray-400 hover:text-white transition-colors z-10",
                    onclick: move |e| {
                        e.stop_propagation();
                        gallery.write().handle_click(ClickTarget::Close);
                    },
                    XIcon { class: "w-6 h-6" }
                }

                if let Some(counter) = counter {
                    div { class: "fixed top-4 left-4 text-gray-400 text-sm", "{counter}" }
                }

                if total > 1 {
                    button {
                        class: "fixed left-4 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                        onclick: move |e| {
                            e.stop_propagation();
                            gallery.write().handle_click(ClickTarget::Previous);
                        },
                        ChevronLeftIcon {
                            class: "w-8 h-8 text-gray-300 -translate-x-0.5",
                            stroke_width: "1.5",
                        }
                    }
                    button {
                        class: "fixed right-4 top-1/2 -translate-y-1/2 w-14 h-14 bg-gray-800/60 hover:bg-gray-700/80 rounded-full flex items-center justify-center transition-colors z-10",
                        onclick: move |e| {
                            e.stop_propagation();
                            gallery.write().handle_click(ClickTarget::Next);
                        },
                        ChevronRightIcon {
                            class: "w-8 h-8 text-gray-300 translate-x-0.5",
                            stroke_width: "1.5",
                        }
                    }
                }

                if let Some(src) = modal_src {
                    img {
                        src: "{src}",
                        alt: "{alt}",
                        class: "max-w-[90vw] max-h-[80vh] object-contain rounded-lg shadow-2xl",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_build_view_gallery_selects_first() {
        let gallery = build_view_gallery(&urls(&["a.jpg", "b.jpg"]));
        let surfaces = gallery.surfaces();
        assert_eq!(
            surfaces.main_image.as_ref().and_then(ImageSlot::source),
            Some("a.jpg")
        );
        assert!(surfaces.thumbnails[0].is_active());
        assert!(!surfaces.thumbnails[1].is_active());
        assert!(!gallery.is_overlay_visible());
    }

    #[test]
    fn test_build_view_gallery_empty() {
        let gallery = build_view_gallery(&[]);
        assert!(gallery.is_empty());
        assert_eq!(
            gallery.surfaces().main_image.as_ref().and_then(ImageSlot::source),
            None
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_from_event(&Key::Escape), GalleryKey::Escape);
        assert_eq!(key_from_event(&Key::ArrowLeft), GalleryKey::ArrowLeft);
        assert_eq!(key_from_event(&Key::ArrowRight), GalleryKey::ArrowRight);
        assert_eq!(key_from_event(&Key::Enter), GalleryKey::Other);
    }

    #[test]
    fn test_thumbnail_ring_class() {
        assert!(thumbnail_ring_class(true).contains("ring-white"));
        assert!(!thumbnail_ring_class(false).contains("ring-white"));
    }
}
