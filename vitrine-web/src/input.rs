//! Document-level input source
//!
//! One `keydown` and one `click` listener on the document. Clicks are
//! classified against the gallery's elements before reaching the handler, so
//! the core never sees a DOM node.

use std::rc::Rc;

use tracing::debug;
use vitrine_common::{ClickTarget, GalleryKey, InputSource};
use vitrine_ui::wasm_utils::EventListener;
use wasm_bindgen_x::{JsCast, JsValue};
use web_sys_x::{Document, Element, Node};

use crate::config::GalleryConfig;
use crate::dom::DomSurfaces;

/// Turns a clicked element into a [`ClickTarget`]
struct ClickClassifier {
    modal: Option<Element>,
    controls: Vec<(Element, ClickTarget)>,
    thumbnails: Vec<(Element, Option<String>)>,
    open_selector: String,
    open_attribute: String,
}

impl ClickClassifier {
    fn new(document: &Document, surfaces: &DomSurfaces, config: &GalleryConfig) -> Self {
        let controls = [
            (&config.previous_control_id, ClickTarget::Previous),
            (&config.next_control_id, ClickTarget::Next),
            (&config.close_control_id, ClickTarget::Close),
        ]
        .into_iter()
        .filter_map(|(id, target)| {
            let element = document.get_element_by_id(id.as_deref()?)?;
            Some((element, target))
        })
        .collect();

        let thumbnails = surfaces
            .thumbnails
            .iter()
            .map(|thumb| (thumb.element().clone(), thumb.url()))
            .collect();

        Self {
            modal: surfaces.modal.as_ref().map(|m| m.element().clone()),
            controls,
            thumbnails,
            open_selector: format!("[{}]", config.open_attribute),
            open_attribute: config.open_attribute.clone(),
        }
    }

    /// What the clicked element hits, gathered from the DOM.
    fn hit_test(&self, target: &Element) -> ClickHit {
        let target_node: &Node = target;

        let control = self
            .controls
            .iter()
            .find(|(control, _)| control.contains(Some(target_node)))
            .map(|(_, click)| click.clone());

        let (on_modal, in_modal) = match &self.modal {
            Some(modal) => {
                let modal_node: &Node = modal;
                (
                    target_node.is_same_node(Some(modal_node)),
                    modal.contains(Some(target_node)),
                )
            }
            None => (false, false),
        };

        let open_index = match target.closest(&self.open_selector) {
            Ok(Some(trigger)) => {
                let index = trigger
                    .get_attribute(&self.open_attribute)
                    .and_then(|value| value.trim().parse::<usize>().ok());
                if index.is_none() {
                    debug!("Open trigger without a valid index");
                }
                index
            }
            _ => None,
        };

        let thumbnail = self
            .thumbnails
            .iter()
            .enumerate()
            .find(|(_, (thumb, _))| thumb.contains(Some(target_node)))
            .map(|(index, (_, url))| (index, url.clone()));

        ClickHit {
            control,
            on_modal,
            in_modal,
            open_index,
            thumbnail,
        }
    }

    fn classify(&self, target: &Element) -> Option<ClickTarget> {
        resolve_click(self.hit_test(target))
    }
}

/// Everything a click landed on, before precedence is applied
#[derive(Debug, Default)]
struct ClickHit {
    control: Option<ClickTarget>,
    /// The click hit the modal element itself, i.e. its backdrop
    on_modal: bool,
    /// The modal contains the clicked element (true for `on_modal` too)
    in_modal: bool,
    open_index: Option<usize>,
    thumbnail: Option<(usize, Option<String>)>,
}

/// Controls win, then the modal (backdrop before content), then open
/// triggers, then thumbnails. A thumbnail without a URL is ignored.
fn resolve_click(hit: ClickHit) -> Option<ClickTarget> {
    if let Some(control) = hit.control {
        return Some(control);
    }
    if hit.on_modal {
        return Some(ClickTarget::Backdrop);
    }
    if hit.in_modal {
        return Some(ClickTarget::Content);
    }
    if let Some(index) = hit.open_index {
        return Some(ClickTarget::Open(index));
    }
    match hit.thumbnail? {
        (index, Some(url)) => Some(ClickTarget::Thumbnail { index, url }),
        (index, None) => {
            debug!("Thumbnail {} has no src", index);
            None
        }
    }
}

fn event_target_element(value: &JsValue) -> Option<Element> {
    let event = value.dyn_ref::<web_sys_x::Event>()?;
    event.target()?.dyn_into::<Element>().ok()
}

/// [`InputSource`] backed by document listeners. Dropping it detaches them.
pub struct DomInputSource {
    document: Document,
    classifier: Rc<ClickClassifier>,
    listeners: Vec<EventListener>,
}

impl DomInputSource {
    pub fn new(document: &Document, surfaces: &DomSurfaces, config: &GalleryConfig) -> Self {
        Self {
            document: document.clone(),
            classifier: Rc::new(ClickClassifier::new(document, surfaces, config)),
            listeners: Vec::new(),
        }
    }
}

impl InputSource for DomInputSource {
    fn on_key_down(&mut self, mut handler: Box<dyn FnMut(GalleryKey)>) {
        let listener = EventListener::new(&self.document, "keydown", move |value: JsValue| {
            let Some(event) = value.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                return;
            };
            let key = GalleryKey::from_key_name(&event.key());
            if key != GalleryKey::Other {
                handler(key);
            }
        });
        self.listeners.push(listener);
    }

    fn on_click(&mut self, mut handler: Box<dyn FnMut(ClickTarget)>) {
        let classifier = Rc::clone(&self.classifier);
        let listener = EventListener::new(&self.document, "click", move |value: JsValue| {
            let Some(element) = event_target_element(&value) else {
                return;
            };
            if let Some(target) = classifier.classify(&element) {
                handler(target);
            }
        });
        self.listeners.push(listener);
    }
}
