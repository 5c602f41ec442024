use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use svgpatch::{Callback, Host, HostError, Listener};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, Document, Element, Event, Node, Window};

use crate::error::{WebError, host_error};

struct CachedClosure {
    _callback: Callback<Event>,
    closure: Closure<dyn FnMut(Event)>,
}

/// A browser document driven through `web-sys`.
///
/// Each distinct callback is wrapped in one JavaScript function, so registering
/// the same [`Listener`] twice hits the browser's duplicate suppression. The
/// wrappers live as long as the host (and its clones); keep it alive while the
/// rendered nodes can still fire events.
///
/// Wrappers are never evicted, not even when their node is removed. Passing a
/// fresh closure on every render adds one entry per render, so long-lived hosts
/// should reuse [`Listener`] values; [`cached_callbacks`](Self::cached_callbacks)
/// reports the current size.
#[derive(Clone)]
pub struct WebHost {
    document: Document,
    closures: Rc<RefCell<HashMap<usize, CachedClosure>>>,
}

impl WebHost {
    /// Binds to the document of the current window.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::DomUnavailable`] outside of a browser.
    pub fn new() -> Result<Self, WebError> {
        let window: Window = web_sys::window().ok_or(WebError::DomUnavailable)?;
        let document: Document = window.document().ok_or(WebError::DomUnavailable)?;
        Ok(Self::from_document(document))
    }

    /// Binds to an explicit document.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        Self {
            document,
            closures: Rc::default(),
        }
    }

    /// Returns the owning document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Number of callbacks currently wrapped for the browser.
    #[must_use]
    pub fn cached_callbacks(&self) -> usize {
        self.closures.borrow().len()
    }
}

impl fmt::Debug for WebHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHost")
            .field("document", &self.document)
            .field("cached_callbacks", &self.cached_callbacks())
            .finish()
    }
}

impl Host for WebHost {
    type Node = Element;
    type Event = Event;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn namespace_uri(&self, node: &Element) -> Option<String> {
        node.namespace_uri()
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name()
    }

    fn create_element(&self, namespace: &str, tag: &str) -> Result<Element, HostError> {
        self.document
            .create_element_ns(Some(namespace), tag)
            .map_err(|e| host_error("createElementNS", e))
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&self, node: &Element, name: &str, value: &str) -> Result<(), HostError> {
        node.set_attribute(name, value)
            .map_err(|e| host_error("setAttribute", e))
    }

    fn set_text_content(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn clear_text(&self, node: &Element) {
        let nodes = node.child_nodes();
        for index in (0..nodes.length()).rev() {
            let Some(child) = nodes.item(index) else {
                continue;
            };
            if child.node_type() == Node::TEXT_NODE {
                if let Err(e) = node.remove_child(&child) {
                    tracing::warn!(target: "svgpatch", "failed to clear text: {}", WebError::from(e));
                }
            }
        }
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        let collection = node.children();
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .collect()
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), HostError> {
        parent
            .append_child(child)
            .map(drop)
            .map_err(|e| host_error("appendChild", e))
    }

    fn remove_child(&self, parent: &Element, child: &Element) -> Result<(), HostError> {
        parent
            .remove_child(child)
            .map(drop)
            .map_err(|e| host_error("removeChild", e))
    }

    fn add_listener(
        &self,
        node: &Element,
        event: &str,
        listener: &Listener<Event>,
    ) -> Result<(), HostError> {
        let key = Rc::as_ptr(listener.callback()).cast::<()>() as usize;
        let mut closures = self.closures.borrow_mut();
        let cached = closures.entry(key).or_insert_with(|| {
            let callback = Rc::clone(listener.callback());
            let invoke = Rc::clone(&callback);
            CachedClosure {
                _callback: callback,
                closure: Closure::<dyn FnMut(Event)>::new(move |event: Event| invoke(&event)),
            }
        });

        let flags = listener.options();
        let options = AddEventListenerOptions::new();
        options.set_capture(flags.capture);
        options.set_once(flags.once);
        options.set_passive(flags.passive);

        node.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cached.closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(|e| host_error("addEventListener", e))
    }
}
