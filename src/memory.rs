//! An in-memory document implementing [`Host`].
//!
//! Elements behave like their DOM counterparts where the renderer can observe
//! the difference: appending moves a node out of its previous parent, setting
//! text content replaces every child, duplicate listener registrations are
//! ignored and `once` listeners drop themselves after firing.

use alloc::{
    rc::{Rc, Weak},
    string::{String, ToString},
    vec::Vec,
};
use core::{cell::RefCell, fmt, fmt::Write as _};

use crate::{
    error::HostError,
    host::{Host, SVG_NAMESPACE},
    listener::Listener,
    render::Target,
};

/// Namespace of the document body.
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// An event delivered to listeners of the in-memory document.
#[derive(Debug, Clone)]
pub struct Event {
    name: String,
    target: Node,
}

impl Event {
    /// Event name, e.g. `click`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The node the event was dispatched on.
    #[must_use]
    pub const fn target(&self) -> &Node {
        &self.target
    }
}

enum Content {
    Text(String),
    Element(Node),
}

struct NodeData {
    namespace: Option<String>,
    tag: String,
    attributes: Vec<(String, String)>,
    content: Vec<Content>,
    listeners: Vec<(String, Listener<Event>)>,
    parent: Weak<RefCell<NodeData>>,
}

/// A handle to an element. Clones refer to the same element.
#[derive(Clone)]
pub struct Node(Rc<RefCell<NodeData>>);

impl Node {
    fn new(namespace: Option<&str>, tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            namespace: namespace.map(ToString::to_string),
            tag: tag.to_string(),
            attributes: Vec::new(),
            content: Vec::new(),
            listeners: Vec::new(),
            parent: Weak::new(),
        })))
    }

    /// Tag name.
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// Namespace URI.
    #[must_use]
    pub fn namespace_uri(&self) -> Option<String> {
        self.0.borrow().namespace.clone()
    }

    /// Reads an attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.clone()
    }

    /// Writes an attribute, keeping its position if it already exists.
    ///
    /// # Errors
    ///
    /// Fails for empty names and names containing whitespace or markup characters.
    pub fn set_attribute(&self, name: &str, value: &str) -> Result<(), HostError> {
        if !is_valid_name(name) {
            return Err(HostError::new(
                "setAttribute",
                format!("InvalidCharacterError: `{name}` is not a valid attribute name"),
            ));
        }

        let mut data = self.0.borrow_mut();
        if let Some((_, existing)) = data.attributes.iter_mut().find(|(key, _)| key == name) {
            value.clone_into(existing);
        } else {
            data.attributes.push((name.to_string(), value.to_string()));
        }
        Ok(())
    }

    /// Deletes an attribute. Returns whether it existed.
    pub fn remove_attribute(&self, name: &str) -> bool {
        let mut data = self.0.borrow_mut();
        let before = data.attributes.len();
        data.attributes.retain(|(key, _)| key != name);
        data.attributes.len() != before
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for content in &self.0.borrow().content {
            match content {
                Content::Text(text) => out.push_str(text),
                Content::Element(child) => child.collect_text(out),
            }
        }
    }

    /// Replaces all content with `text`. An empty string leaves the node empty.
    pub fn set_text_content(&self, text: &str) {
        let previous = core::mem::take(&mut self.0.borrow_mut().content);
        for content in previous {
            if let Content::Element(child) = content {
                child.0.borrow_mut().parent = Weak::new();
            }
        }
        if !text.is_empty() {
            self.0
                .borrow_mut()
                .content
                .push(Content::Text(text.to_string()));
        }
    }

    /// Drops direct text content, keeping element children.
    pub fn clear_text(&self) {
        self.0
            .borrow_mut()
            .content
            .retain(|content| matches!(content, Content::Element(_)));
    }

    /// Direct element children.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.0
            .borrow()
            .content
            .iter()
            .filter_map(|content| match content {
                Content::Element(child) => Some(child.clone()),
                Content::Text(_) => None,
            })
            .collect()
    }

    /// The parent element, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(Self)
    }

    /// Appends `child`, moving it out of its current parent.
    ///
    /// # Errors
    ///
    /// Fails when `child` is this node or one of its ancestors.
    pub fn append_child(&self, child: &Self) -> Result<(), HostError> {
        let mut ancestor = Some(self.clone());
        while let Some(node) = ancestor {
            if node == *child {
                return Err(HostError::new(
                    "appendChild",
                    "HierarchyRequestError: the new child is an ancestor of the parent",
                ));
            }
            ancestor = node.parent();
        }

        if let Some(previous) = child.parent() {
            previous.detach(child);
        }
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0
            .borrow_mut()
            .content
            .push(Content::Element(child.clone()));
        Ok(())
    }

    /// Detaches `child`.
    ///
    /// # Errors
    ///
    /// Fails when `child` is not a child of this node.
    pub fn remove_child(&self, child: &Self) -> Result<(), HostError> {
        if self.detach(child) {
            child.0.borrow_mut().parent = Weak::new();
            Ok(())
        } else {
            Err(HostError::new(
                "removeChild",
                "NotFoundError: the node is not a child of this node",
            ))
        }
    }

    fn detach(&self, child: &Self) -> bool {
        let mut data = self.0.borrow_mut();
        let before = data.content.len();
        data.content
            .retain(|content| !matches!(content, Content::Element(node) if node == child));
        data.content.len() != before
    }

    /// Registers `listener` for `event`. Returns `false` for a duplicate registration.
    pub fn add_listener(&self, event: &str, listener: &Listener<Event>) -> bool {
        let mut data = self.0.borrow_mut();
        let duplicate = data
            .listeners
            .iter()
            .any(|(name, existing)| name == event && existing.same_registration(listener));
        if !duplicate {
            data.listeners.push((event.to_string(), listener.clone()));
        }
        !duplicate
    }

    /// Number of listeners registered for `event`.
    #[must_use]
    pub fn listener_count(&self, event: &str) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(name, _)| name == event)
            .count()
    }

    /// Invokes the listeners for `event` in registration order and returns how
    /// many ran. `once` listeners are unregistered before they run.
    pub fn dispatch(&self, event: &str) -> usize {
        let matching: Vec<Listener<Event>> = {
            let mut data = self.0.borrow_mut();
            let matching = data
                .listeners
                .iter()
                .filter(|(name, _)| name == event)
                .map(|(_, listener)| listener.clone())
                .collect();
            data.listeners
                .retain(|(name, listener)| name != event || !listener.options().once);
            matching
        };

        let payload = Event {
            name: event.to_string(),
            target: self.clone(),
        };
        for listener in &matching {
            listener.call(&payload);
        }
        matching.len()
    }

    /// Serializes this node and its subtree as markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let data = self.0.borrow();
        out.push('<');
        out.push_str(&data.tag);
        for (name, value) in &data.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value, true));
        }
        if data.content.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        for content in &data.content {
            match content {
                Content::Text(text) => out.push_str(&escape(text, false)),
                Content::Element(child) => child.write_markup(out),
            }
        }
        let _ = write!(out, "</{}>", data.tag);
    }

    fn find_by_id(&self, id: &str) -> Option<Self> {
        if self.id().as_deref() == Some(id) {
            return Some(self.clone());
        }
        self.children()
            .into_iter()
            .find_map(|child| child.find_by_id(id))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        let id = data
            .attributes
            .iter()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.as_str());
        f.debug_struct("Node")
            .field("tag", &data.tag)
            .field("id", &id)
            .finish_non_exhaustive()
    }
}

impl From<Node> for Target<Node> {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}

impl From<&Node> for Target<Node> {
    fn from(value: &Node) -> Self {
        Self::Node(value.clone())
    }
}

/// An in-memory document rooted at a `<body>` element.
#[derive(Debug, Clone)]
pub struct Document {
    body: Node,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            body: Node::new(Some(XHTML_NAMESPACE), "body"),
        }
    }

    /// The root element. Only nodes attached below it can be found by id.
    #[must_use]
    pub const fn body(&self) -> &Node {
        &self.body
    }

    /// Creates a detached element.
    #[must_use]
    pub fn element(&self, namespace: Option<&str>, tag: &str) -> Node {
        Node::new(namespace, tag)
    }

    /// Appends an empty `<svg id="{id}">` to the body and returns it.
    pub fn mount_svg(&self, id: &str) -> Node {
        let svg = Node::new(Some(SVG_NAMESPACE), "svg");
        if !id.is_empty() {
            let named = svg.set_attribute("id", id);
            debug_assert!(named.is_ok());
        }
        let mounted = self.body.append_child(&svg);
        debug_assert!(mounted.is_ok());
        svg
    }

    /// Finds an attached element by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Node> {
        self.body.find_by_id(id)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for Document {
    type Node = Node;
    type Event = Event;

    fn element_by_id(&self, id: &str) -> Option<Node> {
        self.find(id)
    }

    fn namespace_uri(&self, node: &Node) -> Option<String> {
        node.namespace_uri()
    }

    fn tag_name(&self, node: &Node) -> String {
        node.tag()
    }

    fn create_element(&self, namespace: &str, tag: &str) -> Result<Node, HostError> {
        if !is_valid_name(tag) {
            return Err(HostError::new(
                "createElementNS",
                format!("InvalidCharacterError: `{tag}` is not a valid tag name"),
            ));
        }
        let namespace = (!namespace.is_empty()).then_some(namespace);
        Ok(self.element(namespace, tag))
    }

    fn attribute(&self, node: &Node, name: &str) -> Option<String> {
        node.attribute(name)
    }

    fn set_attribute(&self, node: &Node, name: &str, value: &str) -> Result<(), HostError> {
        node.set_attribute(name, value)
    }

    fn set_text_content(&self, node: &Node, text: &str) {
        node.set_text_content(text);
    }

    fn clear_text(&self, node: &Node) {
        node.clear_text();
    }

    fn children(&self, node: &Node) -> Vec<Node> {
        node.children()
    }

    fn append_child(&self, parent: &Node, child: &Node) -> Result<(), HostError> {
        parent.append_child(child)
    }

    fn remove_child(&self, parent: &Node, child: &Node) -> Result<(), HostError> {
        parent.remove_child(child)
    }

    fn add_listener(
        &self,
        node: &Node,
        event: &str,
        listener: &Listener<Event>,
    ) -> Result<(), HostError> {
        if !node.add_listener(event, listener) {
            tracing::trace!(target: "svgpatch", event, "ignored duplicate listener");
        }
        Ok(())
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '\'' | '/' | '='))
}

fn escape(raw: &str, attribute: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if attribute => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::ListenerOptions;
    use core::cell::Cell;

    #[test]
    fn append_moves_between_parents() {
        let document = Document::new();
        let first = document.mount_svg("first");
        let second = document.mount_svg("second");
        let circle = document.element(Some(SVG_NAMESPACE), "circle");

        first.append_child(&circle).expect("append");
        second.append_child(&circle).expect("append");

        assert!(first.children().is_empty());
        assert_eq!(second.children(), [circle.clone()]);
        assert_eq!(circle.parent(), Some(second));
    }

    #[test]
    fn attributes_keep_order_and_can_be_removed() {
        let document = Document::new();
        let rect = document.element(Some(SVG_NAMESPACE), "rect");
        rect.set_attribute("x", "1").expect("valid name");
        rect.set_attribute("y", "2").expect("valid name");
        rect.set_attribute("x", "3").expect("valid name");

        assert_eq!(
            rect.attributes(),
            [("x".to_string(), "3".to_string()), ("y".to_string(), "2".to_string())]
        );
        assert!(rect.remove_attribute("x"));
        assert!(!rect.remove_attribute("x"));
        assert_eq!(rect.attribute("x"), None);
        assert_eq!(rect.attributes().len(), 1);
    }

    #[test]
    fn append_rejects_cycles() {
        let document = Document::new();
        let svg = document.mount_svg("canvas");
        assert!(svg.append_child(&svg).is_err());
        assert!(svg.append_child(document.body()).is_err());
    }

    #[test]
    fn remove_requires_a_child() {
        let document = Document::new();
        let svg = document.mount_svg("canvas");
        let stray = document.element(Some(SVG_NAMESPACE), "rect");
        let error = svg.remove_child(&stray).expect_err("not a child");
        assert_eq!(error.operation(), "removeChild");
    }

    #[test]
    fn text_content_replaces_children_and_clear_text_keeps_them() {
        let document = Document::new();
        let group = document.mount_svg("canvas");
        let child = document.element(Some(SVG_NAMESPACE), "circle");
        group.append_child(&child).expect("append");

        group.set_text_content("hello");
        assert!(group.children().is_empty());
        assert_eq!(child.parent(), None);
        assert_eq!(group.text_content(), "hello");

        group.append_child(&child).expect("append");
        group.clear_text();
        assert_eq!(group.text_content(), "");
        assert_eq!(group.children(), [child]);
    }

    #[test]
    fn find_only_sees_attached_nodes() {
        let document = Document::new();
        let svg = document.mount_svg("canvas");
        let loose = document.element(Some(SVG_NAMESPACE), "g");
        loose.set_attribute("id", "loose").expect("valid name");

        assert_eq!(document.find("canvas"), Some(svg));
        assert_eq!(document.find("loose"), None);
    }

    #[test]
    fn invalid_names_are_rejected() {
        let document = Document::new();
        let svg = document.mount_svg("canvas");
        assert!(svg.set_attribute("", "x").is_err());
        assert!(svg.set_attribute("bad name", "x").is_err());
        assert!(document.create_element(SVG_NAMESPACE, "not a tag").is_err());
    }

    #[test]
    fn duplicate_listeners_are_suppressed() {
        let document = Document::new();
        let svg = document.mount_svg("canvas");
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let listener = Listener::new(move |_: &Event| sink.set(sink.get() + 1));

        assert!(svg.add_listener("click", &listener));
        assert!(!svg.add_listener("click", &listener.clone()));
        assert!(svg.add_listener("click", &Listener::new(|_: &Event| {})));

        assert_eq!(svg.dispatch("click"), 2);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn once_listeners_fire_once() {
        let document = Document::new();
        let svg = document.mount_svg("canvas");
        let hits = Rc::new(Cell::new(0));
        let sink = Rc::clone(&hits);
        let listener = Listener::with_options(
            move |event: &Event| {
                assert_eq!(event.name(), "click");
                sink.set(sink.get() + 1);
            },
            ListenerOptions::new().once(true),
        );
        svg.add_listener("click", &listener);

        assert_eq!(svg.dispatch("click"), 1);
        assert_eq!(svg.dispatch("click"), 0);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn markup_escapes_text_and_attributes() {
        let document = Document::new();
        let text = document.element(Some(SVG_NAMESPACE), "text");
        text.set_attribute("data-note", "a \"b\" & c").expect("valid name");
        text.set_text_content("1 < 2");

        assert_eq!(
            text.to_markup(),
            r#"<text data-note="a &quot;b&quot; &amp; c">1 &lt; 2</text>"#
        );
        assert_eq!(
            document.element(Some(SVG_NAMESPACE), "g").to_markup(),
            "<g/>"
        );
    }
}
