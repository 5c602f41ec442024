//! Render entry point: resolves a container and syncs its identified children.

use alloc::{string::String, vec::Vec};

use crate::{
    config::RenderConfig,
    description::IntoDescriptions,
    error::{RenderError, ResolveError},
    host::Host,
};

/// Where a render call draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<N> {
    /// A handle to a graphics container.
    Node(N),
    /// The `id` of a container attached to the document.
    Id(String),
}

impl<N> Target<N> {
    /// Targets a container handle.
    pub const fn node(node: N) -> Self {
        Self::Node(node)
    }
}

impl<N> From<&str> for Target<N> {
    fn from(value: &str) -> Self {
        Self::Id(value.into())
    }
}

impl<N> From<String> for Target<N> {
    fn from(value: String) -> Self {
        Self::Id(value)
    }
}

/// What one render call changed and what it had to skip.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderStats {
    /// Nodes built, including nested children.
    pub created: usize,
    /// Nodes reconciled in place.
    pub updated: usize,
    /// Nodes detached because their id was omitted.
    pub removed: usize,
    /// Descriptions dropped by validation or a host failure.
    pub skipped: usize,
    /// Every validation and host failure, in the order it occurred.
    pub errors: Vec<RenderError>,
}

impl RenderStats {
    pub(crate) fn skip(&mut self, error: impl Into<RenderError>) {
        self.skipped += 1;
        self.errors.push(error.into());
    }
}

/// Renders descriptions into containers of one host.
#[derive(Debug)]
pub struct Renderer<H> {
    pub(crate) host: H,
    pub(crate) config: RenderConfig,
}

impl<H: Host> Renderer<H> {
    /// Creates a renderer with the default configuration.
    pub fn new(host: H) -> Self {
        Self::with_config(host, RenderConfig::default())
    }

    /// Creates a renderer with an explicit configuration.
    pub const fn with_config(host: H, config: RenderConfig) -> Self {
        Self { host, config }
    }

    /// The host being rendered into.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// The active configuration.
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolves `target` to a container.
    ///
    /// Any element found by id is accepted. A handle must be an element of the
    /// configured namespace.
    ///
    /// # Errors
    ///
    /// Fails when the id is empty or unknown, or the handle is not in the
    /// configured namespace.
    pub fn resolve(&self, target: Target<H::Node>) -> Result<H::Node, ResolveError> {
        let node = match target {
            Target::Node(node) => node,
            Target::Id(id) if id.is_empty() => return Err(ResolveError::EmptyId),
            Target::Id(id) => {
                return self
                    .host
                    .element_by_id(&id)
                    .ok_or(ResolveError::NotFound(id));
            }
        };

        let namespace = self.host.namespace_uri(&node);
        if namespace.as_deref() != Some(self.config.namespace()) {
            return Err(ResolveError::NotGraphicsContainer {
                tag: self.host.tag_name(&node),
                namespace,
            });
        }
        Ok(node)
    }

    /// Renders `descriptions` into `target`, returning what changed.
    ///
    /// Invalid descriptions and host failures are logged and skipped; they do
    /// not fail the call but are collected in [`RenderStats::errors`].
    ///
    /// # Errors
    ///
    /// Fails, without touching the document, when the target cannot be resolved.
    pub fn try_render(
        &self,
        target: impl Into<Target<H::Node>>,
        descriptions: impl IntoDescriptions<H::Event>,
    ) -> Result<RenderStats, RenderError> {
        let container = self.resolve(target.into())?;
        let descriptions = descriptions.into_descriptions();

        let mut stats = RenderStats::default();
        self.sync_children(&container, &descriptions, &mut stats);

        tracing::debug!(
            target: "svgpatch",
            created = stats.created,
            updated = stats.updated,
            removed = stats.removed,
            skipped = stats.skipped,
            errors = stats.errors.len(),
            "render complete"
        );
        Ok(stats)
    }

    /// Renders `descriptions` into `target`.
    ///
    /// Failures are logged; an unresolvable target leaves the document untouched.
    pub fn render(
        &self,
        target: impl Into<Target<H::Node>>,
        descriptions: impl IntoDescriptions<H::Event>,
    ) {
        if let Err(error) = self.try_render(target, descriptions) {
            tracing::error!(target: "svgpatch", "render aborted: {error}");
        }
    }
}

/// Renders `descriptions` into `target` with the default configuration.
///
/// Identified children of the container that no description mentions are
/// removed; identified descriptions that match a child update it in place;
/// everything else is built and appended.
pub fn render<H: Host>(
    host: &H,
    target: impl Into<Target<H::Node>>,
    descriptions: impl IntoDescriptions<H::Event>,
) {
    Renderer::new(host).render(target, descriptions);
}

/// Like [`render`], but reports failures and change counts to the caller.
///
/// Skipped descriptions land in [`RenderStats::errors`].
///
/// # Errors
///
/// Fails when the target cannot be resolved.
pub fn try_render<H: Host>(
    host: &H,
    target: impl Into<Target<H::Node>>,
    descriptions: impl IntoDescriptions<H::Event>,
) -> Result<RenderStats, RenderError> {
    Renderer::new(host).try_render(target, descriptions)
}
