use thiserror::Error;

/// Failures mounting the gallery onto a page
///
/// Missing gallery elements are not errors; the gallery just skips them.
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("No browser window")]
    NoWindow,
    #[error("Window has no document")]
    NoDocument,
    #[error("Invalid gallery config: {0}")]
    InvalidConfig(serde_json::Error),
    #[error("Invalid image list: {0}")]
    InvalidImageList(serde_json::Error),
}
