//! Lightbox modal using the native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, a focus trap and Escape handling.
//! The dialog handles its own display (none when closed), so layout lives on an
//! inner fixed container that also serves as the clickable backdrop.
//!
//! `showModal()` throws if the dialog is already open, so the `open` attribute
//! is checked first. `oncancel` only fires for Escape, never for programmatic
//! `close()`.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use vitrine_common::ClickTarget;
use wasm_bindgen_x::JsCast;

/// Counter for unique dialog ids
static LIGHTBOX_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Call a zero-argument method on the dialog element (`showModal` / `close`)
fn call_dialog_method(element: &web_sys_x::Element, method: &str) {
    let Ok(value) = js_sys_x::Reflect::get(element, &method.into()) else {
        return;
    };
    if let Some(func) = value.dyn_ref::<js_sys_x::Function>() {
        if func.call0(element).is_err() {
            tracing::warn!("dialog.{}() failed", method);
        }
    }
}

/// Full-screen modal for the gallery lightbox
///
/// Clicks are reported as [`ClickTarget::Backdrop`] when they land on the
/// backdrop and [`ClickTarget::Content`] when they come from inside `children`.
#[component]
pub fn LightboxModal(
    /// Whether the dialog is shown
    is_open: ReadSignal<bool>,
    /// Escape pressed (dialog cancel)
    on_close: EventHandler<()>,
    /// Backdrop or content click
    on_click: EventHandler<ClickTarget>,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = LIGHTBOX_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("lightbox-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = web_sys_x::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        // Effects can re-run; only act on an actual state change
        let is_dialog_open = element.has_attribute("open");
        if is_open && !is_dialog_open {
            call_dialog_method(&element, "showModal");
        } else if !is_open && is_dialog_open {
            call_dialog_method(&element, "close");
        }
    });

    let dialog_class = class.unwrap_or_default();

    // No display classes on the dialog itself: they would override the native
    // display:none of a closed dialog.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/90 {dialog_class}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center",
                    onclick: move |_| on_click.call(ClickTarget::Backdrop),
                    div {
                        onclick: move |evt| {
                            evt.stop_propagation();
                            on_click.call(ClickTarget::Content);
                        },
                        {children}
                    }
                }
            }
        }
    }
}
