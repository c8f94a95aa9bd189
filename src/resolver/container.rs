use super::context::{LayoutContext, resolve_margin};
use super::dispatch::TreeDispatcher;
use crate::error::ResolveError;
use crate::geometry::{self, Padding, PaddingSpec};
use crate::schema::{FlexBox, Placement};
use crate::tokens;
use crate::tree::{Geometry, ResolvedBox, Side};

/// Geometry of a component from its flex, margin and placement attributes.
/// An absent `flex` means equal growth.
pub(crate) fn placed_geometry(
    flex: Option<f64>,
    margin: Option<&str>,
    side: Side,
    placement: &Placement,
) -> Geometry {
    Geometry {
        flex: geometry::classify_flex(flex).or_equal(),
        margin: resolve_margin(margin, side),
        position: placement.position,
        offsets: geometry::resolve_offsets(
            placement.offset_top.as_deref(),
            placement.offset_bottom.as_deref(),
            placement.offset_start.as_deref(),
            placement.offset_end.as_deref(),
        ),
    }
}

/// Resolves a box and, recursively, its children.
///
/// `default_padding` is used only when the author set none of the five
/// padding attributes.
pub(crate) fn resolve_box(
    dispatcher: &TreeDispatcher,
    node: &FlexBox,
    ctx: &LayoutContext<'_>,
    default_padding: Option<Padding>,
) -> Result<ResolvedBox, ResolveError> {
    let layout = node.layout.unwrap_or_default();
    let spec = PaddingSpec {
        all: node.padding_all.as_deref(),
        top: node.padding_top.as_deref(),
        bottom: node.padding_bottom.as_deref(),
        start: node.padding_start.as_deref(),
        end: node.padding_end.as_deref(),
    };
    let padding = match default_padding {
        Some(padding) if spec.is_unset() => padding,
        _ => geometry::resolve_padding(spec),
    };

    let child_ctx = ctx.for_children(layout, node.spacing.as_deref());
    let children = dispatcher.resolve_children(&node.contents, &child_ctx)?;

    let literal = |v: &Option<String>| v.as_deref().map(|s| tokens::Unit::Literal(s.to_string()));
    let width = literal(&node.width);
    let max_width = literal(&node.max_width).or_else(|| width.clone());

    Ok(ResolvedBox {
        layout,
        geometry: placed_geometry(node.flex, node.margin.as_deref(), Side::Top, &node.placement),
        padding,
        children,
        background_color: node.background_color.clone(),
        background: node.background.as_ref().map(geometry::format_gradient),
        border_color: node.border_color.clone(),
        border_width: node
            .border_width
            .as_deref()
            .and_then(|v| tokens::resolve_token(v, &tokens::BORDER_WIDTH)),
        corner_radius: node
            .corner_radius
            .as_deref()
            .and_then(|v| tokens::resolve_token(v, &tokens::CORNER_RADIUS)),
        width,
        max_width,
        height: literal(&node.height),
        max_height: literal(&node.max_height),
        justify_content: node.justify_content,
        align_items: node.align_items,
        action: node.action.clone(),
    })
}
