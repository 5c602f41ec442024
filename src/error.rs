//! Error types reported by the renderer.
//!
//! None of these reach the caller of [`render`](crate::render); they are logged
//! and the affected scope is skipped. [`try_render`](crate::try_render) returns
//! resolution failures as its error and collects the rest in
//! [`RenderStats::errors`](crate::RenderStats::errors). [`check`](crate::check)
//! returns validation failures directly.

use alloc::string::String;

use thiserror::Error;

use crate::kind::ElementKind;

/// The render target could not be resolved to a graphics container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// An empty id was given.
    #[error("render target id is empty")]
    EmptyId,
    /// No element carries the requested id.
    #[error("failed to find element with id `{0}`")]
    NotFound(String),
    /// The handle refers to something other than a graphics element.
    #[error("`{tag}` is not a graphics container (namespace: {namespace:?})")]
    NotGraphicsContainer {
        /// Tag of the rejected node.
        tag: String,
        /// Namespace of the rejected node, if any.
        namespace: Option<String>,
    },
}

/// A description failed its kind's requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The description has no element kind.
    #[error("description is missing its element type")]
    MissingType,
    /// A required attribute is absent.
    #[error("`{kind}` is missing required attribute `{attribute}`")]
    MissingAttribute {
        /// Kind being validated.
        kind: ElementKind,
        /// The absent attribute.
        attribute: &'static str,
    },
    /// None of several alternative attributes is present.
    #[error("`{kind}` requires one of {candidates:?}")]
    MissingAnyAttribute {
        /// Kind being validated.
        kind: ElementKind,
        /// Accepted attribute names.
        candidates: &'static [&'static str],
    },
    /// Text content is absent or empty.
    #[error("`{kind}` requires non-empty text content")]
    MissingText {
        /// Kind being validated.
        kind: ElementKind,
    },
}

/// A host document operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host operation `{operation}` failed: {message}")]
pub struct HostError {
    operation: &'static str,
    message: String,
}

impl HostError {
    /// Creates an error for the named operation.
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }

    /// The failed operation.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// The host's message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Any failure encountered while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Target resolution failed.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    /// A description was invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The host rejected an operation.
    #[error(transparent)]
    Host(#[from] HostError),
}
