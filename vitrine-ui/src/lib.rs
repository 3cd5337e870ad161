//! vitrine-ui - Dioxus components for the product image gallery
//!
//! Pure view components over `vitrine-common` state, shared by the web
//! front end and its demo page.

pub mod components;
pub mod wasm_utils;

pub use components::*;
