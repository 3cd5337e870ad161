//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup
//!
//! A JavaScript listener backed by a Rust `Closure` must not outlive the
//! closure. Rather than `closure.forget()`, which leaks and leaves the listener
//! attached, [`EventListener`] owns the closure and removes the listener in
//! `Drop`:
//!
//! ```ignore
//! // Attached on creation
//! let listener = EventListener::new(&document, "keydown", callback);
//!
//! // Removed when dropped
//! drop(listener);
//! ```
//!
//! Keep the listeners in whatever owns the page's gallery so they live exactly
//! as long as it does.

use wasm_bindgen_x::prelude::*;

/// An event listener on any DOM event target, removed when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl EventListener {
    /// Attach `callback` to `target` for `event_name`.
    pub fn new(
        target: &impl AsRef<web_sys_x::EventTarget>,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let target: web_sys_x::EventTarget = target.as_ref().clone();
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach {} listener", event_name);
        }

        Self {
            target,
            event_name,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}
