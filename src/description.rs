//! The description model: plain data describing one graphics node.
//!
//! A [`Description`] is what callers hand to [`render`](crate::render). It carries
//! no live state; the renderer reads it once and drops it.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, num::FpCategory};

use serde::{Deserialize, Serialize};

use crate::{
    kind::ElementKind,
    listener::{Listener, ListenerOptions},
};

/// Event name → listeners registered for it.
pub type Events<E> = BTreeMap<String, Vec<Listener<E>>>;

/// A primitive attribute value.
///
/// The host receives the value's string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// `true` / `false`
    Bool(bool),
    /// Any number, printed the way a browser stringifies it: integral values
    /// without a fraction, `NaN`, `Infinity`, and exponent form (`1e+21`) at or
    /// above 1e21 or below 1e-6.
    Number(f64),
    /// A string, passed through verbatim.
    Text(String),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => write_number(f, *value),
            Self::Text(value) => f.write_str(value),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    match value.classify() {
        FpCategory::Nan => f.write_str("NaN"),
        FpCategory::Infinite if value > 0.0 => f.write_str("Infinity"),
        FpCategory::Infinite => f.write_str("-Infinity"),
        FpCategory::Zero => f.write_str("0"),
        FpCategory::Normal | FpCategory::Subnormal => {
            let magnitude = value.abs();
            if !(1e-6..1e21).contains(&magnitude) {
                let exponential = format!("{value:e}");
                return match exponential.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                        write!(f, "{mantissa}e+{exponent}")
                    }
                    _ => f.write_str(&exponential),
                };
            }
            write!(f, "{value}")
        }
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A declarative description of one graphics node and its subtree.
///
/// `E` is the host's event type; it only matters for [`events`](Self::events).
#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Description<E> {
    /// Element kind. `None` (or an empty tag) never validates.
    #[serde(rename = "type", default)]
    pub kind: Option<ElementKind>,
    /// Attributes applied to the node.
    #[serde(default)]
    pub attrs: BTreeMap<String, AttrValue>,
    /// Identifier used to match this description against a live node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Text content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Nested descriptions, in construction order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Description<E>>,
    /// Listeners to attach, keyed by event name.
    #[serde(skip)]
    pub events: Events<E>,
}

impl<E> Description<E> {
    /// An empty description of the given kind.
    #[must_use]
    pub const fn new(kind: ElementKind) -> Self {
        Self {
            kind: Some(kind),
            attrs: BTreeMap::new(),
            id: None,
            text: None,
            children: Vec::new(),
            events: BTreeMap::new(),
        }
    }

    /// An empty description for an arbitrary tag.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self {
            kind: ElementKind::parse(tag),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets one attribute, replacing any previous value under that name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Sets the text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child description.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child descriptions.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Adds a listener for `event`. Earlier listeners for the same event are kept.
    #[must_use]
    pub fn on(mut self, event: impl Into<String>, listener: impl Into<Listener<E>>) -> Self {
        self.events
            .entry(event.into())
            .or_default()
            .push(listener.into());
        self
    }

    /// Adds a callback for `event` with explicit options.
    #[must_use]
    pub fn on_with(
        self,
        event: impl Into<String>,
        callback: impl Fn(&E) + 'static,
        options: ListenerOptions,
    ) -> Self {
        self.on(event, Listener::with_options(callback, options))
    }

    /// Returns a copy with `stroke` and `stroke-width` set.
    ///
    /// The receiver is consumed, so a shared base description has to be cloned
    /// explicitly before decorating it.
    #[must_use]
    pub fn with_stroke(self, color: impl Into<String>, width: impl Into<AttrValue>) -> Self {
        let color: String = color.into();
        self.attr("stroke", color).attr("stroke-width", width)
    }

    /// The identifier used for matching. An empty id counts as none.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The string form of an attribute, if present.
    #[must_use]
    pub fn attr_string(&self, name: &str) -> Option<String> {
        self.attrs.get(name).map(ToString::to_string)
    }
}

impl<E> Default for Description<E> {
    fn default() -> Self {
        Self {
            kind: None,
            attrs: BTreeMap::new(),
            id: None,
            text: None,
            children: Vec::new(),
            events: BTreeMap::new(),
        }
    }
}

impl<E> Clone for Description<E> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            attrs: self.attrs.clone(),
            id: self.id.clone(),
            text: self.text.clone(),
            children: self.children.clone(),
            events: self.events.clone(),
        }
    }
}

impl<E> fmt::Debug for Description<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Description")
            .field("kind", &self.kind)
            .field("attrs", &self.attrs)
            .field("id", &self.id)
            .field("text", &self.text)
            .field("children", &self.children)
            .field("events", &self.events)
            .finish()
    }
}

/// Anything [`render`](crate::render) accepts as its description argument.
pub trait IntoDescriptions<E> {
    /// Normalizes into an ordered list.
    fn into_descriptions(self) -> Vec<Description<E>>;
}

impl<E> IntoDescriptions<E> for Description<E> {
    fn into_descriptions(self) -> Vec<Description<E>> {
        alloc::vec![self]
    }
}

impl<E> IntoDescriptions<E> for Vec<Description<E>> {
    fn into_descriptions(self) -> Vec<Description<E>> {
        self
    }
}

impl<E, const N: usize> IntoDescriptions<E> for [Description<E>; N] {
    fn into_descriptions(self) -> Vec<Description<E>> {
        self.into_iter().collect()
    }
}

impl<E> IntoDescriptions<E> for Option<Description<E>> {
    fn into_descriptions(self) -> Vec<Description<E>> {
        self.into_iter().collect()
    }
}

/// Returns `description` with `stroke` and `stroke-width` added.
#[must_use]
pub fn with_stroke<E>(
    description: Description<E>,
    color: impl Into<String>,
    width: impl Into<AttrValue>,
) -> Description<E> {
    description.with_stroke(color, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    type Desc = Description<()>;

    #[test]
    fn numbers_print_like_attribute_strings() {
        assert_eq!(AttrValue::from(50).to_string(), "50");
        assert_eq!(AttrValue::from(0.5).to_string(), "0.5");
        assert_eq!(AttrValue::from(-3.25_f32).to_string(), "-3.25");
        assert_eq!(AttrValue::from(true).to_string(), "true");
        assert_eq!(AttrValue::from("red").to_string(), "red");
    }

    #[test]
    fn special_numbers_print_like_the_browser() {
        assert_eq!(AttrValue::from(f64::NAN).to_string(), "NaN");
        assert_eq!(AttrValue::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(AttrValue::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(AttrValue::from(-0.0).to_string(), "0");
        assert_eq!(AttrValue::from(1e21).to_string(), "1e+21");
        assert_eq!(AttrValue::from(-1.5e22).to_string(), "-1.5e+22");
        assert_eq!(AttrValue::from(1e20).to_string(), "100000000000000000000");
        assert_eq!(AttrValue::from(1e-7).to_string(), "1e-7");
        assert_eq!(AttrValue::from(0.000_001).to_string(), "0.000001");
    }

    #[test]
    fn builder_collects_fields() {
        let description = Desc::new(ElementKind::Rect)
            .with_id("box")
            .attr("x", 1)
            .attr("x", 2)
            .with_text("label")
            .child(Desc::tag("title"));

        assert_eq!(description.id.as_deref(), Some("box"));
        assert_eq!(description.attr_string("x").as_deref(), Some("2"));
        assert_eq!(description.attrs.len(), 1);
        assert_eq!(description.children.len(), 1);
        assert_eq!(
            description.children[0].kind,
            Some(ElementKind::Other("title".into()))
        );
    }

    #[test]
    fn listeners_accumulate_per_event() {
        let description = Desc::new(ElementKind::Circle)
            .on("click", |_: &()| {})
            .on("click", |_: &()| {})
            .on_with("mouseover", |_| {}, ListenerOptions::new().once(true));

        assert_eq!(description.events["click"].len(), 2);
        assert!(description.events["mouseover"][0].options().once);
    }

    #[test]
    fn with_stroke_leaves_base_untouched() {
        let base = Desc::new(ElementKind::Circle).attr("fill", "red");
        let outlined = with_stroke(base.clone(), "black", 2);

        assert!(!base.attrs.contains_key("stroke"));
        assert_eq!(outlined.attr_string("stroke").as_deref(), Some("black"));
        assert_eq!(outlined.attr_string("stroke-width").as_deref(), Some("2"));
        assert_eq!(outlined.attr_string("fill").as_deref(), Some("red"));
    }

    #[test]
    fn single_and_many_normalize_to_lists() {
        assert_eq!(Desc::tag("g").into_descriptions().len(), 1);
        assert_eq!([Desc::tag("g"), Desc::tag("g")].into_descriptions().len(), 2);
        assert!(Option::<Desc>::None.into_descriptions().is_empty());
    }

    #[test]
    fn deserializes_from_json() {
        let description: Desc = serde_json::from_str(
            r#"{
                "type": "circle",
                "id": "sun",
                "attrs": { "cx": 10, "cy": 10.5, "r": 4, "fill": "gold" },
                "children": [{ "type": "animate", "attrs": { "attributeName": "r" } }]
            }"#,
        )
        .expect("valid description json");

        assert_eq!(description.kind, Some(ElementKind::Circle));
        assert_eq!(description.id.as_deref(), Some("sun"));
        assert_eq!(description.attr_string("cy").as_deref(), Some("10.5"));
        assert_eq!(description.attr_string("fill").as_deref(), Some("gold"));
        assert_eq!(description.children[0].kind, Some(ElementKind::Animate));
        assert!(description.events.is_empty());
    }

    #[test]
    fn missing_type_deserializes_as_none() {
        let description: Desc =
            serde_json::from_str(r#"{ "attrs": { "x": 1 } }"#).expect("valid json");
        assert_eq!(description.kind, None);
    }
}
