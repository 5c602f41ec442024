//! Node builder: turns a validated description into a new live node.

use crate::{
    description::Description,
    error::HostError,
    host::Host,
    render::{RenderStats, Renderer},
    validate::{check, report_invalid},
};

impl<H: Host> Renderer<H> {
    /// Builds a detached node for `description`, including its children.
    ///
    /// Returns `None` when the description fails validation or the host rejects
    /// one of its own operations. Invalid children are skipped without failing
    /// the parent.
    pub fn build(&self, description: &Description<H::Event>) -> Option<H::Node> {
        self.build_counted(description, &mut RenderStats::default())
    }

    pub(crate) fn build_counted(
        &self,
        description: &Description<H::Event>,
        stats: &mut RenderStats,
    ) -> Option<H::Node> {
        if let Err(error) = check(description) {
            report_invalid(description, &error);
            stats.skip(error);
            return None;
        }

        match self.construct(description, stats) {
            Ok(node) => {
                stats.created += 1;
                Some(node)
            }
            Err(error) => {
                tracing::error!(
                    target: "svgpatch",
                    id = description.identifier().unwrap_or_default(),
                    "failed to build node: {error}"
                );
                stats.skip(error);
                None
            }
        }
    }

    fn construct(
        &self,
        description: &Description<H::Event>,
        stats: &mut RenderStats,
    ) -> Result<H::Node, HostError> {
        let tag = description.kind.as_ref().map_or("", |kind| kind.tag());
        let node = self.host.create_element(self.config.namespace(), tag)?;

        if let Some(id) = description.identifier() {
            self.host
                .set_attribute(&node, self.config.id_attribute(), id)?;
        }
        self.apply_attributes(&node, description)?;
        if let Some(text) = &description.text {
            self.host.set_text_content(&node, text);
        }
        self.attach_listeners(&node, description)?;

        for child in &description.children {
            let Some(child_node) = self.build_counted(child, stats) else {
                continue;
            };
            if let Err(error) = self.host.append_child(&node, &child_node) {
                tracing::error!(target: "svgpatch", tag, "failed to append child: {error}");
                stats.errors.push(error.into());
            }
        }

        tracing::trace!(target: "svgpatch", tag, id = description.identifier(), "built node");
        Ok(node)
    }

    /// Sets every attribute of `description` on `node`. Other attributes are kept.
    pub(crate) fn apply_attributes(
        &self,
        node: &H::Node,
        description: &Description<H::Event>,
    ) -> Result<(), HostError> {
        for (name, value) in &description.attrs {
            self.host.set_attribute(node, name, &value.to_string())?;
        }
        Ok(())
    }

    /// Registers every listener of `description` on `node`.
    pub(crate) fn attach_listeners(
        &self,
        node: &H::Node,
        description: &Description<H::Event>,
    ) -> Result<(), HostError> {
        for (event, listeners) in &description.events {
            for listener in listeners {
                self.host.add_listener(node, event, listener)?;
            }
        }
        Ok(())
    }
}

/// Builds a detached node for `description` with the default configuration.
pub fn build<H: Host>(host: &H, description: &Description<H::Event>) -> Option<H::Node> {
    Renderer::new(host).build(description)
}
