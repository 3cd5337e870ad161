//! Shared UI components

pub mod icons;
pub mod lightbox_modal;
pub mod product_gallery;

pub use icons::{ChevronLeftIcon, ChevronRightIcon, ExpandIcon, XIcon};
pub use lightbox_modal::LightboxModal;
pub use product_gallery::{build_view_gallery, ProductGallery, ViewGallery};
