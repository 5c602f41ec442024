//! The document operations the renderer drives.
//!
//! The renderer never owns a document. It talks to one through [`Host`], which
//! both the in-memory [`Document`](crate::memory::Document) and the browser
//! backend implement.

use alloc::{string::String, vec::Vec};

use crate::{error::HostError, listener::Listener};

/// Namespace of SVG elements.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// A document that live graphics nodes can be created in and mutated through.
pub trait Host {
    /// Handle to a live element. Cloning yields another handle to the same element.
    type Node: Clone;
    /// The event type passed to listeners.
    type Event: 'static;

    /// Finds an attached element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// Namespace URI of `node`, if it has one.
    fn namespace_uri(&self, node: &Self::Node) -> Option<String>;

    /// Tag name of `node`.
    fn tag_name(&self, node: &Self::Node) -> String;

    /// Creates a detached element.
    ///
    /// # Errors
    ///
    /// Fails when the host refuses the namespace or tag.
    fn create_element(&self, namespace: &str, tag: &str) -> Result<Self::Node, HostError>;

    /// Reads an attribute.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Writes an attribute.
    ///
    /// # Errors
    ///
    /// Fails when the host rejects the attribute name.
    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), HostError>;

    /// Replaces all content of `node` with `text`.
    fn set_text_content(&self, node: &Self::Node, text: &str);

    /// Removes the direct text content of `node`, keeping element children.
    fn clear_text(&self, node: &Self::Node);

    /// Direct element children, in document order.
    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Appends `child` as the last child of `parent`.
    ///
    /// # Errors
    ///
    /// Fails when the host rejects the insertion.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Detaches `child` from `parent`.
    ///
    /// # Errors
    ///
    /// Fails when `child` is not a child of `parent`.
    fn remove_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError>;

    /// Registers a listener for `event` on `node`.
    ///
    /// Hosts may ignore a registration identical to an existing one.
    ///
    /// # Errors
    ///
    /// Fails when the host cannot register the listener.
    fn add_listener(
        &self,
        node: &Self::Node,
        event: &str,
        listener: &Listener<Self::Event>,
    ) -> Result<(), HostError>;
}

impl<H: Host + ?Sized> Host for &H {
    type Node = H::Node;
    type Event = H::Event;

    fn element_by_id(&self, id: &str) -> Option<Self::Node> {
        (**self).element_by_id(id)
    }

    fn namespace_uri(&self, node: &Self::Node) -> Option<String> {
        (**self).namespace_uri(node)
    }

    fn tag_name(&self, node: &Self::Node) -> String {
        (**self).tag_name(node)
    }

    fn create_element(&self, namespace: &str, tag: &str) -> Result<Self::Node, HostError> {
        (**self).create_element(namespace, tag)
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        (**self).attribute(node, name)
    }

    fn set_attribute(&self, node: &Self::Node, name: &str, value: &str) -> Result<(), HostError> {
        (**self).set_attribute(node, name, value)
    }

    fn set_text_content(&self, node: &Self::Node, text: &str) {
        (**self).set_text_content(node, text);
    }

    fn clear_text(&self, node: &Self::Node) {
        (**self).clear_text(node);
    }

    fn children(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).children(node)
    }

    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError> {
        (**self).append_child(parent, child)
    }

    fn remove_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), HostError> {
        (**self).remove_child(parent, child)
    }

    fn add_listener(
        &self,
        node: &Self::Node,
        event: &str,
        listener: &Listener<Self::Event>,
    ) -> Result<(), HostError> {
        (**self).add_listener(node, event, listener)
    }
}
