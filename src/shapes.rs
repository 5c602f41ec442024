//! Factory helpers producing descriptions for common SVG elements.
//!
//! Each helper fills in exactly the attributes its element needs; anything else
//! can be chained on with [`Description::attr`].

use alloc::string::String;

use crate::{
    description::{AttrValue, Description},
    kind::ElementKind,
};

/// `<circle cx cy r fill>`
pub fn circle<E>(cx: f64, cy: f64, r: f64, fill: impl Into<String>) -> Description<E> {
    let fill: String = fill.into();
    Description::new(ElementKind::Circle)
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("r", r)
        .attr("fill", fill)
}

/// `<rect x y width height fill>`
pub fn rect<E>(x: f64, y: f64, width: f64, height: f64, fill: impl Into<String>) -> Description<E> {
    let fill: String = fill.into();
    Description::new(ElementKind::Rect)
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
        .attr("fill", fill)
}

/// `<text x y fill>content</text>`
pub fn text<E>(
    x: f64,
    y: f64,
    content: impl Into<String>,
    fill: impl Into<String>,
) -> Description<E> {
    let fill: String = fill.into();
    Description::new(ElementKind::Text)
        .attr("x", x)
        .attr("y", y)
        .attr("fill", fill)
        .with_text(content)
}

/// `<line x1 y1 x2 y2 stroke>`
pub fn line<E>(x1: f64, y1: f64, x2: f64, y2: f64, stroke: impl Into<String>) -> Description<E> {
    let stroke: String = stroke.into();
    Description::new(ElementKind::Line)
        .attr("x1", x1)
        .attr("y1", y1)
        .attr("x2", x2)
        .attr("y2", y2)
        .attr("stroke", stroke)
}

/// `<polygon points fill>`; `points` is the raw SVG point list, e.g. `"0,0 10,0 5,8"`.
pub fn polygon<E>(points: impl Into<String>, fill: impl Into<String>) -> Description<E> {
    let points: String = points.into();
    let fill: String = fill.into();
    Description::new(ElementKind::Polygon)
        .attr("points", points)
        .attr("fill", fill)
}

/// `<path d fill>`
pub fn path<E>(d: impl Into<String>, fill: impl Into<String>) -> Description<E> {
    let d: String = d.into();
    let fill: String = fill.into();
    Description::new(ElementKind::Path).attr("d", d).attr("fill", fill)
}

/// `<image href x y width height>`
pub fn image<E>(href: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Description<E> {
    let href: String = href.into();
    Description::new(ElementKind::Image)
        .attr("href", href)
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
}

/// `<ellipse cx cy rx ry fill>`
pub fn ellipse<E>(cx: f64, cy: f64, rx: f64, ry: f64, fill: impl Into<String>) -> Description<E> {
    let fill: String = fill.into();
    Description::new(ElementKind::Ellipse)
        .attr("cx", cx)
        .attr("cy", cy)
        .attr("rx", rx)
        .attr("ry", ry)
        .attr("fill", fill)
}

/// `<animate attributeName from to dur repeatCount>`, run by the host once attached.
///
/// `dur` is an SVG clock value such as `"2s"`; `repeat_count` is a count or `"indefinite"`.
pub fn animate<E>(
    attribute_name: impl Into<String>,
    from: impl Into<AttrValue>,
    to: impl Into<AttrValue>,
    dur: impl Into<String>,
    repeat_count: impl Into<AttrValue>,
) -> Description<E> {
    let attribute_name: String = attribute_name.into();
    let dur: String = dur.into();
    Description::new(ElementKind::Animate)
        .attr("attributeName", attribute_name)
        .attr("from", from)
        .attr("to", to)
        .attr("dur", dur)
        .attr("repeatCount", repeat_count)
}
