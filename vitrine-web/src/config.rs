use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

fn default_main_image_id() -> String {
    "mainImage".to_string()
}

fn default_modal_id() -> String {
    "imageModal".to_string()
}

fn default_modal_image_id() -> String {
    "modalImage".to_string()
}

fn default_thumbnail_selector() -> String {
    ".thumbnail".to_string()
}

fn default_active_class() -> String {
    "active".to_string()
}

fn default_visible_display() -> String {
    "flex".to_string()
}

fn default_images_element_id() -> String {
    "gallery-images".to_string()
}

fn default_open_attribute() -> String {
    "data-gallery-open".to_string()
}

/// Where the gallery finds its elements in server-rendered markup.
///
/// Read from a `<script type="application/json">` element; every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_main_image_id")]
    pub main_image_id: String,
    #[serde(default = "default_modal_id")]
    pub modal_id: String,
    #[serde(default = "default_modal_image_id")]
    pub modal_image_id: String,
    /// CSS selector matching the thumbnails, in image order
    #[serde(default = "default_thumbnail_selector")]
    pub thumbnail_selector: String,
    /// Class toggled on the active thumbnail
    #[serde(default = "default_active_class")]
    pub active_class: String,
    /// `display` value used when showing the modal
    #[serde(default = "default_visible_display")]
    pub visible_display: String,
    /// Element whose text is the JSON array of image URLs
    #[serde(default = "default_images_element_id")]
    pub images_element_id: String,
    /// Attribute carrying the image index on "open" triggers
    #[serde(default = "default_open_attribute")]
    pub open_attribute: String,
    #[serde(default)]
    pub previous_control_id: Option<String>,
    #[serde(default)]
    pub next_control_id: Option<String>,
    #[serde(default)]
    pub close_control_id: Option<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            main_image_id: default_main_image_id(),
            modal_id: default_modal_id(),
            modal_image_id: default_modal_image_id(),
            thumbnail_selector: default_thumbnail_selector(),
            active_class: default_active_class(),
            visible_display: default_visible_display(),
            images_element_id: default_images_element_id(),
            open_attribute: default_open_attribute(),
            previous_control_id: None,
            next_control_id: None,
            close_control_id: None,
        }
    }
}

impl GalleryConfig {
    /// Id of the optional config element
    pub const ELEMENT_ID: &'static str = "gallery-config";

    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        serde_json::from_str(json).map_err(GalleryError::InvalidConfig)
    }
}

/// Parse the server-rendered image list (a JSON array of URL strings).
///
/// Blank input is an empty list.
pub fn parse_image_list(json: &str) -> Result<Vec<String>, GalleryError> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(json).map_err(GalleryError::InvalidImageList)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = GalleryConfig::from_json("{}").unwrap();
        assert_eq!(config, GalleryConfig::default());
        assert_eq!(config.modal_id, "imageModal");
        assert_eq!(config.thumbnail_selector, ".thumbnail");
    }

    #[test]
    fn test_partial_override() {
        let config = GalleryConfig::from_json(
            r#"{"modal_id": "lightbox", "active_class": "is-selected", "close_control_id": "lightbox-close"}"#,
        )
        .unwrap();
        assert_eq!(config.modal_id, "lightbox");
        assert_eq!(config.active_class, "is-selected");
        assert_eq!(config.close_control_id.as_deref(), Some("lightbox-close"));
        assert_eq!(config.main_image_id, "mainImage");
        assert_eq!(config.next_control_id, None);
    }

    #[test]
    fn test_invalid_config() {
        let err = GalleryConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, GalleryError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_image_list() {
        let images = parse_image_list(r#"["/img/a.jpg", "/img/b.jpg"]"#).unwrap();
        assert_eq!(images, vec!["/img/a.jpg", "/img/b.jpg"]);
    }

    #[test]
    fn test_parse_blank_image_list() {
        assert!(parse_image_list("").unwrap().is_empty());
        assert!(parse_image_list("  \n").unwrap().is_empty());
        assert!(parse_image_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_image_list_rejects_non_strings() {
        let err = parse_image_list("[1, 2]").unwrap_err();
        assert!(matches!(err, GalleryError::InvalidImageList(_)));
    }
}
