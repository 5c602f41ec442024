//! Builds values for the `transform` attribute.

use alloc::string::String;
use core::fmt::{self, Write as _};

/// SVG transform functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// `translate(x, y)`
    Translate,
    /// `rotate(angle, cx, cy)`
    Rotate,
    /// `scale(x, y)`
    Scale,
    /// `skewX(angle)`
    SkewX,
    /// `skewY(angle)`
    SkewY,
    /// `matrix(a, b, c, d, e, f)`
    Matrix,
}

impl TransformKind {
    /// The function name as written in SVG.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
            Self::Matrix => "matrix",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats `kind(v1,v2,...)`.
///
/// `kind` is anything displayable, so custom function names pass through.
///
/// ```
/// use svgpatch::transform::{transform, TransformKind};
///
/// assert_eq!(transform(TransformKind::Translate, &[10.0, 20.5]), "translate(10,20.5)");
/// assert_eq!(transform("rotate", &[45.0]), "rotate(45)");
/// ```
pub fn transform(kind: impl fmt::Display, values: &[f64]) -> String {
    let mut out = String::new();
    let _ = write!(out, "{kind}(");
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        let _ = write!(out, "{value}");
    }
    out.push(')');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_values_without_spaces() {
        assert_eq!(
            transform(TransformKind::Matrix, &[1.0, 0.0, 0.0, 1.0, 5.0, -2.5]),
            "matrix(1,0,0,1,5,-2.5)"
        );
        assert_eq!(transform(TransformKind::SkewX, &[]), "skewX()");
    }
}
