use super::container::placed_geometry;
use super::context::LayoutContext;
use super::dispatch::TreeDispatcher;
use crate::error::ResolveError;
use crate::schema::{Action, ButtonHeight, ButtonStyle, FlexButton, FlexComponent, FlexSpan, FlexText};
use crate::tokens::{self, Unit};
use crate::tree::{LineHeight, ResolvedButton, ResolvedSpan, ResolvedText, Side};

/// Label used when the action has none.
pub const DEFAULT_BUTTON_LABEL: &str = "Button";

/// Line height multiplier used when `lineSpacing` is absent or unparsable.
pub const DEFAULT_LINE_HEIGHT: f64 = 1.4;

/// Added to a numeric `lineSpacing` to get the line height in pixels.
const LINE_SPACING_BASE: f64 = 15.0;

/// Text and background colors of a button style.
fn palette(style: ButtonStyle) -> (&'static str, &'static str) {
    match style {
        ButtonStyle::Link => ("#42659a", "transparent"),
        ButtonStyle::Primary => ("#ffffff", "#17c950"),
        ButtonStyle::Secondary => ("#111111", "#dcdfe5"),
    }
}

fn button_height(height: ButtonHeight) -> Unit {
    match height {
        ButtonHeight::Sm => Unit::Px(40.0),
        ButtonHeight::Md => Unit::Px(52.0),
    }
}

pub(crate) fn resolve_button(node: &FlexButton) -> ResolvedButton {
    let style = node.style.unwrap_or_default();
    let (mut text_color, mut background_color): (&str, &str) = palette(style);
    // `color` tints the text of a link and the fill of the other styles.
    if let Some(color) = node.color.as_deref() {
        match style {
            ButtonStyle::Link => text_color = color,
            ButtonStyle::Primary | ButtonStyle::Secondary => background_color = color,
        }
    }
    ResolvedButton {
        geometry: placed_geometry(node.flex, node.margin.as_deref(), Side::Top, &node.placement),
        label: node
            .action
            .as_ref()
            .and_then(Action::label)
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_BUTTON_LABEL)
            .to_string(),
        style,
        height: button_height(node.height.unwrap_or_default()),
        text_color: text_color.to_string(),
        background_color: background_color.to_string(),
        gravity: node.gravity,
        adjust_mode: node.adjust_mode,
        external_link: matches!(node.action, Some(Action::Uri { .. })),
        action: node.action.clone(),
    }
}

fn font_size(size: Option<&str>) -> Option<Unit> {
    tokens::resolve_token(size.unwrap_or("md"), &tokens::FONT_SIZE)
}

pub(crate) fn resolve_span(node: &FlexSpan) -> ResolvedSpan {
    ResolvedSpan {
        text: node.text.clone(),
        font_size: node
            .size
            .as_deref()
            .and_then(|size| tokens::resolve_token(size, &tokens::FONT_SIZE)),
        color: node.color.clone(),
        weight: node.weight,
        style: node.style,
        decoration: node.decoration,
    }
}

/// Reads the leading integer of a `lineSpacing` value, so `"4px"` and
/// `"2.5em"` give 4 and 2. Trailing units are ignored.
fn parse_line_spacing(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let digits_from = usize::from(value.starts_with(['-', '+']));
    let end = value[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(value.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    value[..end].parse::<f64>().ok()
}

fn line_height(line_spacing: Option<&str>, path: &str) -> LineHeight {
    let Some(value) = line_spacing else {
        return LineHeight::Multiplier(DEFAULT_LINE_HEIGHT);
    };
    match parse_line_spacing(value) {
        Some(spacing) => LineHeight::Px(spacing + LINE_SPACING_BASE),
        None => {
            log::warn!(
                "Unparsable lineSpacing '{}' at {}, using {}x",
                value,
                path,
                DEFAULT_LINE_HEIGHT
            );
            LineHeight::Multiplier(DEFAULT_LINE_HEIGHT)
        }
    }
}

/// Resolves a text node. Its own text always precedes the spans.
pub(crate) fn resolve_text(
    dispatcher: &TreeDispatcher,
    node: &FlexText,
    ctx: &LayoutContext<'_>,
) -> Result<ResolvedText, ResolveError> {
    let mut spans = Vec::with_capacity(node.contents.len());
    for (index, component) in node.contents.iter().enumerate() {
        match component {
            FlexComponent::Span(span) => spans.push(resolve_span(span)),
            FlexComponent::Unknown(kind) => {
                dispatcher.unknown(kind, &format!("{}.contents[{}]", ctx.path, index))?
            }
            other => log::debug!(
                "Ignoring {} inside text at {}.contents[{}]",
                other.kind(),
                ctx.path,
                index
            ),
        }
    }

    Ok(ResolvedText {
        geometry: placed_geometry(
            node.flex,
            node.margin.as_deref(),
            ctx.cross_side(),
            &node.placement,
        ),
        lines: node.text.split('\n').map(str::to_string).collect(),
        spans,
        font_size: font_size(node.size.as_deref()),
        line_height: line_height(node.line_spacing.as_deref(), &ctx.path),
        wrap: node.wrap.unwrap_or(false),
        max_lines: node.max_lines.filter(|n| *n > 0),
        weight: node.weight,
        style: node.style,
        decoration: node.decoration,
        color: node.color.clone(),
        align: node.align,
        gravity: node.gravity,
        action: node.action.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_spacing_is_offset_by_base() {
        assert_eq!(line_height(Some("4px"), "body"), LineHeight::Px(19.0));
        assert_eq!(line_height(Some("10"), "body"), LineHeight::Px(25.0));
        assert_eq!(line_height(Some("2em"), "body"), LineHeight::Px(17.0));
        assert_eq!(line_height(Some(" 4.5px"), "body"), LineHeight::Px(19.0));
        assert_eq!(
            line_height(Some("tight"), "body"),
            LineHeight::Multiplier(DEFAULT_LINE_HEIGHT)
        );
        assert_eq!(line_height(None, "body"), LineHeight::Multiplier(DEFAULT_LINE_HEIGHT));
    }

    #[test]
    fn link_color_tints_text_only() {
        let button = FlexButton {
            color: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let resolved = resolve_button(&button);
        assert_eq!(resolved.text_color, "#ff0000");
        assert_eq!(resolved.background_color, "transparent");
        assert_eq!(resolved.label, DEFAULT_BUTTON_LABEL);
    }

    #[test]
    fn empty_action_label_uses_default() {
        let button = FlexButton {
            action: Some(Action::Message {
                label: Some(String::new()),
                text: "hi".to_string(),
            }),
            ..Default::default()
        };
        assert_eq!(resolve_button(&button).label, DEFAULT_BUTTON_LABEL);
    }
}
