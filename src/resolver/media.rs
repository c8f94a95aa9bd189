use super::container::placed_geometry;
use super::context::LayoutContext;
use super::dispatch::TreeDispatcher;
use crate::error::ResolveError;
use crate::geometry::{self, FlexGrowth};
use crate::schema::{Align, FlexIcon, FlexImage, FlexVideo};
use crate::tokens::{self, Unit};
use crate::tree::{ResolvedIcon, ResolvedImage, ResolvedVideo, Side};

/// Aspect ratio of a video without an explicit one.
pub const DEFAULT_VIDEO_ASPECT: &str = "16:9";

pub(crate) fn resolve_icon(node: &FlexIcon) -> ResolvedIcon {
    let mut geometry = placed_geometry(None, node.margin.as_deref(), Side::Top, &node.placement);
    geometry.flex = FlexGrowth::None;
    ResolvedIcon {
        geometry,
        url: node.url.clone(),
        font_size: tokens::resolve_token(node.size.as_deref().unwrap_or("md"), &tokens::FONT_SIZE),
        width_em: geometry::aspect_width_factor(node.aspect_ratio.as_deref()),
    }
}

pub(crate) fn resolve_image(node: &FlexImage) -> ResolvedImage {
    ResolvedImage {
        geometry: placed_geometry(node.flex, node.margin.as_deref(), Side::Top, &node.placement),
        url: node.url.clone(),
        width: tokens::resolve_token_or(
            node.size.as_deref().unwrap_or("md"),
            &tokens::IMAGE_SIZE,
            Unit::Px(100.0),
        ),
        aspect_percent: geometry::parse_aspect_ratio(node.aspect_ratio.as_deref()),
        aspect_mode: node.aspect_mode.unwrap_or_default(),
        align: node.align.unwrap_or(Align::Center),
        gravity: node.gravity,
        background_color: node.background_color.clone(),
        action: node.action.clone(),
    }
}

/// Resolves a video. The alternative content is resolved like any other
/// node, in a vertical context.
pub(crate) fn resolve_video(
    dispatcher: &TreeDispatcher,
    node: &FlexVideo,
    ctx: &LayoutContext<'_>,
) -> Result<ResolvedVideo, ResolveError> {
    let alt_content = match node.alt_content.as_deref() {
        Some(alt) => {
            let alt_ctx = LayoutContext {
                path: format!("{}.altContent", ctx.path),
                ..LayoutContext::section(ctx.bubble_size, String::new())
            };
            dispatcher.resolve(alt, &alt_ctx)?.map(Box::new)
        }
        None => None,
    };
    Ok(ResolvedVideo {
        url: node.url.clone(),
        preview_url: node.preview_url.clone(),
        aspect_percent: geometry::parse_aspect_ratio(Some(
            node.aspect_ratio.as_deref().unwrap_or(DEFAULT_VIDEO_ASPECT),
        )),
        alt_content,
        action: node.action.clone(),
    })
}
