//! vitrine - product gallery in the browser
//!
//! Mounts onto server-rendered gallery markup when the page has it, otherwise
//! launches the demo page.

use tracing::{error, warn, Level};
use vitrine_web::{has_gallery_markup, install, mount, page_document, read_config, App};

fn main() {
    // dioxus::launch keeps a logger that is already installed
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let document = match page_document() {
        Ok(document) => document,
        Err(e) => {
            warn!("{e}, launching demo");
            dioxus::launch(App);
            return;
        }
    };

    let config = match read_config(&document) {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}, using defaults");
            Default::default()
        }
    };

    if !has_gallery_markup(&document, &config) {
        dioxus::launch(App);
        return;
    }

    match mount(&document, &config) {
        Ok(mounted) => install(mounted),
        Err(e) => error!("Failed to mount gallery: {e}"),
    }
}
