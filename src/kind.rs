//! Element kinds and the attributes each kind requires.
//!
//! Every description names the kind of graphics element it produces. Known SVG
//! shapes carry a table of required attributes which the validator checks before
//! a node is built; any other tag is passed through to the host untouched.

use alloc::string::{String, ToString};
use core::fmt;

use serde::{Deserialize, Serialize};

/// The kind of graphics element a description renders into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementKind {
    /// `<circle>`
    Circle,
    /// `<rect>`
    Rect,
    /// `<line>`
    Line,
    /// `<polygon>`
    Polygon,
    /// `<path>`
    Path,
    /// `<image>`
    Image,
    /// `<ellipse>`
    Ellipse,
    /// `<text>`
    Text,
    /// `<animate>`, executed by the host's animation engine.
    Animate,
    /// Any other host tag, created as-is without validation.
    Other(String),
}

/// What a kind demands from a description before it can be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The attribute must be present.
    Attribute(&'static str),
    /// At least one of the listed attributes must be present.
    AnyOf(&'static [&'static str]),
    /// The description must carry non-empty text.
    Text,
}

const CIRCLE: &[Requirement] = &[
    Requirement::Attribute("cx"),
    Requirement::Attribute("cy"),
    Requirement::Attribute("r"),
];
const RECT: &[Requirement] = &[
    Requirement::Attribute("x"),
    Requirement::Attribute("y"),
    Requirement::Attribute("width"),
    Requirement::Attribute("height"),
];
const LINE: &[Requirement] = &[
    Requirement::Attribute("x1"),
    Requirement::Attribute("y1"),
    Requirement::Attribute("x2"),
    Requirement::Attribute("y2"),
];
const POLYGON: &[Requirement] = &[Requirement::Attribute("points")];
const PATH: &[Requirement] = &[Requirement::Attribute("d")];
const IMAGE: &[Requirement] = &[Requirement::AnyOf(&["href", "xlink:href"])];
const ELLIPSE: &[Requirement] = &[
    Requirement::Attribute("cx"),
    Requirement::Attribute("cy"),
    Requirement::Attribute("rx"),
    Requirement::Attribute("ry"),
];
const TEXT: &[Requirement] = &[Requirement::Text];

impl ElementKind {
    /// Parses a tag name. Returns `None` for an empty tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let kind = match tag {
            "" => return None,
            "circle" => Self::Circle,
            "rect" => Self::Rect,
            "line" => Self::Line,
            "polygon" => Self::Polygon,
            "path" => Self::Path,
            "image" => Self::Image,
            "ellipse" => Self::Ellipse,
            "text" => Self::Text,
            "animate" => Self::Animate,
            other => Self::Other(other.to_string()),
        };
        Some(kind)
    }

    /// The tag name handed to the host when the element is created.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Path => "path",
            Self::Image => "image",
            Self::Ellipse => "ellipse",
            Self::Text => "text",
            Self::Animate => "animate",
            Self::Other(tag) => tag,
        }
    }

    /// Requirements checked before a description of this kind is built.
    ///
    /// Pass-through kinds have none.
    #[must_use]
    pub const fn requirements(&self) -> &'static [Requirement] {
        match self {
            Self::Circle => CIRCLE,
            Self::Rect => RECT,
            Self::Line => LINE,
            Self::Polygon => POLYGON,
            Self::Path => PATH,
            Self::Image => IMAGE,
            Self::Ellipse => ELLIPSE,
            Self::Text => TEXT,
            Self::Animate | Self::Other(_) => &[],
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// An empty tag deserializes to `Other("")`; the validator treats that as a missing kind.
impl From<String> for ElementKind {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or(Self::Other(value))
    }
}

impl From<ElementKind> for String {
    fn from(value: ElementKind) -> Self {
        match value {
            ElementKind::Other(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tags() {
        assert_eq!(ElementKind::parse("circle"), Some(ElementKind::Circle));
        assert_eq!(ElementKind::parse("animate"), Some(ElementKind::Animate));
        assert_eq!(
            ElementKind::parse("g"),
            Some(ElementKind::Other("g".to_string()))
        );
        assert_eq!(ElementKind::parse(""), None);
    }

    #[test]
    fn tag_round_trips_through_string() {
        let kind = ElementKind::Other("foreignObject".to_string());
        assert_eq!(String::from(kind.clone()), "foreignObject");
        assert_eq!(ElementKind::from(String::from("ellipse")), ElementKind::Ellipse);
    }

    #[test]
    fn pass_through_kinds_have_no_requirements() {
        assert!(ElementKind::Animate.requirements().is_empty());
        assert!(ElementKind::Other("g".into()).requirements().is_empty());
        assert_eq!(ElementKind::Text.requirements(), &[Requirement::Text]);
    }
}
