//! Components whose only role is to take up space.

use super::context::{LayoutContext, resolve_margin};
use crate::geometry::{self, FlexGrowth};
use crate::schema::{FlexFiller, FlexSeparator, FlexSpacer, Layout};
use crate::tokens::{self, Unit};
use crate::tree::{Orientation, ResolvedFiller, ResolvedSeparator, ResolvedSpacer};

pub const SEPARATOR_COLOR: &str = "#d4d6da";

/// A filler grows with weight 1 unless told otherwise.
pub(crate) fn resolve_filler(node: &FlexFiller) -> ResolvedFiller {
    let flex = match geometry::classify_flex(node.flex) {
        FlexGrowth::Default => FlexGrowth::Weight(1),
        other => other,
    };
    ResolvedFiller { flex }
}

pub(crate) fn resolve_separator(node: &FlexSeparator, ctx: &LayoutContext<'_>) -> ResolvedSeparator {
    let orientation = match ctx.axis {
        Layout::Vertical => Orientation::Horizontal,
        Layout::Horizontal | Layout::Baseline => Orientation::Vertical,
    };
    ResolvedSeparator {
        margin: resolve_margin(node.margin.as_deref(), ctx.cross_side()),
        orientation,
        thickness: Unit::Px(1.0),
        color: node
            .color
            .clone()
            .unwrap_or_else(|| SEPARATOR_COLOR.to_string()),
    }
}

pub(crate) fn resolve_spacer(node: &FlexSpacer) -> ResolvedSpacer {
    ResolvedSpacer {
        height: tokens::resolve_token_or(
            node.size.as_deref().unwrap_or("md"),
            &tokens::SPACER_SIZE,
            Unit::Px(8.0),
        ),
    }
}
