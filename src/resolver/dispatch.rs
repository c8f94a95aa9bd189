use super::UnknownComponentPolicy;
use super::context::{LayoutContext, child_spacing};
use super::{container, content, media, spacing};
use crate::error::ResolveError;
use crate::schema::FlexComponent;
use crate::tree::{ResolvedChild, ResolvedNode};

/// Picks the resolver for each node kind and threads the layout context down.
pub(crate) struct TreeDispatcher {
    policy: UnknownComponentPolicy,
}

impl TreeDispatcher {
    pub fn new(policy: UnknownComponentPolicy) -> Self {
        Self { policy }
    }

    /// Resolves one node. Returns `Ok(None)` for a skipped unknown kind.
    pub fn resolve(
        &self,
        component: &FlexComponent,
        ctx: &LayoutContext<'_>,
    ) -> Result<Option<ResolvedNode>, ResolveError> {
        let node = match component {
            FlexComponent::Box(node) => ResolvedNode::Box(container::resolve_box(self, node, ctx, None)?),
            FlexComponent::Button(node) => ResolvedNode::Button(content::resolve_button(node)),
            FlexComponent::Filler(node) => ResolvedNode::Filler(spacing::resolve_filler(node)),
            FlexComponent::Icon(node) => ResolvedNode::Icon(media::resolve_icon(node)),
            FlexComponent::Image(node) => ResolvedNode::Image(media::resolve_image(node)),
            FlexComponent::Separator(node) => {
                ResolvedNode::Separator(spacing::resolve_separator(node, ctx))
            }
            FlexComponent::Spacer(node) => ResolvedNode::Spacer(spacing::resolve_spacer(node)),
            FlexComponent::Text(node) => ResolvedNode::Text(content::resolve_text(self, node, ctx)?),
            FlexComponent::Span(node) => ResolvedNode::Span(content::resolve_span(node)),
            FlexComponent::Video(node) => ResolvedNode::Video(media::resolve_video(self, node, ctx)?),
            FlexComponent::Unknown(kind) => {
                self.unknown(kind, &ctx.path)?;
                return Ok(None);
            }
        };
        log::trace!("Resolved {} at {}", node.kind(), ctx.path);
        Ok(Some(node))
    }

    /// Resolves the children of a box, attaching the spacing margin of each.
    ///
    /// Spacing is keyed on the position in the input, so a skipped node still
    /// counts as a preceding sibling.
    pub fn resolve_children(
        &self,
        contents: &[FlexComponent],
        ctx: &LayoutContext<'_>,
    ) -> Result<Vec<ResolvedChild>, ResolveError> {
        let mut children = Vec::with_capacity(contents.len());
        for (index, component) in contents.iter().enumerate() {
            let child_ctx = ctx.child(index);
            if let Some(node) = self.resolve(component, &child_ctx)? {
                children.push(ResolvedChild {
                    spacing: child_spacing(ctx.spacing, ctx.axis, index, component.kind()),
                    node,
                });
            }
        }
        Ok(children)
    }

    /// Applies the unknown-component policy.
    pub fn unknown(&self, kind: &str, path: &str) -> Result<(), ResolveError> {
        match self.policy {
            UnknownComponentPolicy::Skip => {
                log::debug!("Skipping unknown component '{}' at {}", kind, path);
                Ok(())
            }
            UnknownComponentPolicy::Reject => Err(ResolveError::UnknownComponent {
                kind: kind.to_string(),
                path: path.to_string(),
            }),
        }
    }
}
