//! Reconciler: updates live nodes in place from new descriptions.
//!
//! Identity is the id attribute and nothing else. A child's position never
//! matters: matched children are updated where they stand, unmatched or id-less
//! descriptions are built and appended, and identified children nobody asked for
//! are removed.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{
    description::Description,
    error::HostError,
    host::Host,
    render::{RenderStats, Renderer},
};

/// What to do with one description during a child sync.
#[derive(Debug)]
enum Step<'d, N, E> {
    /// Reconcile the existing node.
    Update(N, &'d Description<E>),
    /// Build a new node and append it.
    Create(&'d Description<E>),
}

/// The split of one child sync into created, kept-updated and removed nodes.
#[derive(Debug)]
struct ChildPlan<'d, N, E> {
    steps: Vec<Step<'d, N, E>>,
    removed: Vec<N>,
}

impl<'d, N, E> ChildPlan<'d, N, E> {
    /// Matches `descriptions` against `previous`, consuming each id at most once.
    fn new(mut previous: BTreeMap<String, N>, descriptions: &'d [Description<E>]) -> Self {
        let steps = descriptions
            .iter()
            .map(|description| {
                match description.identifier().and_then(|id| previous.remove(id)) {
                    Some(node) => Step::Update(node, description),
                    None => Step::Create(description),
                }
            })
            .collect();

        Self {
            steps,
            removed: previous.into_values().collect(),
        }
    }
}

impl<H: Host> Renderer<H> {
    /// Mutates `node` to match `description`.
    ///
    /// No validation runs. Attributes are merged, text is always overwritten,
    /// listeners are added on top of existing ones and children are synced by id.
    pub fn reconcile(&self, node: &H::Node, description: &Description<H::Event>) {
        self.reconcile_counted(node, description, &mut RenderStats::default());
    }

    pub(crate) fn reconcile_counted(
        &self,
        node: &H::Node,
        description: &Description<H::Event>,
        stats: &mut RenderStats,
    ) {
        if let Err(error) = self.update(node, description, stats) {
            tracing::error!(
                target: "svgpatch",
                id = description.identifier().unwrap_or_default(),
                "failed to reconcile node: {error}"
            );
            stats.skip(error);
        }
    }

    fn update(
        &self,
        node: &H::Node,
        description: &Description<H::Event>,
        stats: &mut RenderStats,
    ) -> Result<(), HostError> {
        let id_attribute = self.config.id_attribute();
        if let Some(id) = description.identifier() {
            if self.host.attribute(node, id_attribute).as_deref() != Some(id) {
                self.host.set_attribute(node, id_attribute, id)?;
            }
        }

        self.apply_attributes(node, description)?;
        match &description.text {
            Some(text) => self.host.set_text_content(node, text),
            None => self.host.clear_text(node),
        }
        self.attach_listeners(node, description)?;

        stats.updated += 1;
        tracing::trace!(target: "svgpatch", id = description.identifier(), "updated node");

        self.sync_children(node, &description.children, stats);
        Ok(())
    }

    /// Syncs the identified children of `parent` against `descriptions`.
    pub(crate) fn sync_children(
        &self,
        parent: &H::Node,
        descriptions: &[Description<H::Event>],
        stats: &mut RenderStats,
    ) {
        let plan = ChildPlan::new(self.index_children(parent), descriptions);

        for step in plan.steps {
            match step {
                Step::Update(node, description) => {
                    self.reconcile_counted(&node, description, stats);
                }
                Step::Create(description) => {
                    let Some(node) = self.build_counted(description, stats) else {
                        continue;
                    };
                    if let Err(error) = self.host.append_child(parent, &node) {
                        tracing::error!(target: "svgpatch", "failed to append node: {error}");
                        stats.errors.push(error.into());
                    }
                }
            }
        }

        for node in plan.removed {
            match self.host.remove_child(parent, &node) {
                Ok(()) => {
                    stats.removed += 1;
                    tracing::trace!(target: "svgpatch", "removed node");
                }
                Err(error) => {
                    tracing::error!(target: "svgpatch", "failed to remove node: {error}");
                    stats.errors.push(error.into());
                }
            }
        }
    }

    /// Direct children of `parent` keyed by id. A later duplicate replaces an earlier one.
    fn index_children(&self, parent: &H::Node) -> BTreeMap<String, H::Node> {
        let id_attribute = self.config.id_attribute();
        self.host
            .children(parent)
            .into_iter()
            .filter_map(|child| {
                let id = self.host.attribute(&child, id_attribute)?;
                (!id.is_empty()).then_some((id, child))
            })
            .collect()
    }
}

/// Mutates `node` to match `description` with the default configuration.
pub fn reconcile<H: Host>(host: &H, node: &H::Node, description: &Description<H::Event>) {
    Renderer::new(host).reconcile(node, description);
}
