//! vitrine-common - Gallery state shared by the UI and web front ends
//!
//! Pure data and decision logic; rendering goes through the surface traits.

pub mod gallery;
pub mod input;
pub mod surfaces;

pub use gallery::ImageGallery;
pub use input::{bind_input, ClickTarget, GalleryKey, InputSource};
pub use surfaces::{
    DisplaySurfaces, ImageSlot, ImageSurface, OverlaySlot, OverlaySurface, ThumbnailSlot,
    ThumbnailSurface,
};
