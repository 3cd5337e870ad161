//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! All icons use stroke="currentColor" so they inherit text color from Tailwind classes.
//! Default size is w-4 h-4, override with the `class` prop.

use dioxus::prelude::*;

/// Chevron right icon (next image)
#[component]
pub fn ChevronRightIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

/// Chevron left icon (previous image)
#[component]
pub fn ChevronLeftIcon(
    #[props(default = "w-4 h-4")] class: &'static str,
    #[props(default = "2")] stroke_width: &'static str,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "{stroke_width}",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m15 18-6-6 6-6" }
        }
    }
}

/// X icon (close lightbox)
#[component]
pub fn XIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        }
    }
}

/// Expand icon (open the lightbox)
#[component]
pub fn ExpandIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m15 15 6 6" }
            path { d: "m15 9 6-6" }
            path { d: "M21 16v5h-5" }
            path { d: "M21 8V3h-5" }
            path { d: "M3 16v5h5" }
            path { d: "m3 21 6-6" }
            path { d: "M3 8V3h5" }
            path { d: "M9 9 3 3" }
        }
    }
}
