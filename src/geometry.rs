//! Geometry helpers shared by the component resolvers.

use crate::schema::Background;
use crate::tokens::{self, Unit};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Percentage used when an aspect ratio is absent or malformed (a square).
pub const DEFAULT_ASPECT_PERCENT: f64 = 100.0;

/// Parses a `"W:H"` aspect ratio into `H / W * 100`, the percentage used for a
/// padding-bottom aspect box. Malformed or absent input yields `100`.
pub fn parse_aspect_ratio(ratio: Option<&str>) -> f64 {
    let Some(ratio) = ratio else {
        return DEFAULT_ASPECT_PERCENT;
    };
    let mut parts = ratio.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(w), Some(h), None) => match (w.trim().parse::<f64>(), h.trim().parse::<f64>()) {
            (Ok(width), Ok(height)) if width > 0.0 && height.is_finite() => height * 100.0 / width,
            _ => DEFAULT_ASPECT_PERCENT,
        },
        _ => DEFAULT_ASPECT_PERCENT,
    }
}

/// Parses a `"W:H"` aspect ratio into a width/height factor for icons.
pub fn aspect_width_factor(ratio: Option<&str>) -> f64 {
    let Some(ratio) = ratio else {
        return 1.0;
    };
    let mut parts = ratio.split(':');
    match (parts.next(), parts.next()) {
        (Some(w), Some(h)) => match (w.trim().parse::<f64>(), h.trim().parse::<f64>()) {
            (Ok(width), Ok(height)) if width > 0.0 && height > 0.0 => width / height,
            _ => 1.0,
        },
        _ => 1.0,
    }
}

/// Growth behavior of a component along its parent's main axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlexGrowth {
    /// Nothing specified; the component kind decides.
    Default,
    /// `flex: 0`, never grows.
    None,
    /// `flex: 1`, `2` or `3`.
    Weight(u8),
    /// Any larger value, applied as a raw grow factor.
    Factor(f64),
}

impl FlexGrowth {
    /// Replaces `Default` with the equal-growth weight used by boxes, buttons,
    /// images and texts.
    pub fn or_equal(self) -> Self {
        match self {
            FlexGrowth::Default => FlexGrowth::Weight(1),
            other => other,
        }
    }

    /// The numeric grow factor a box-model renderer should apply.
    pub fn grow(&self) -> f64 {
        match self {
            FlexGrowth::Default | FlexGrowth::None => 0.0,
            FlexGrowth::Weight(w) => f64::from(*w),
            FlexGrowth::Factor(f) => *f,
        }
    }
}

/// Classifies an optional `flex` value. Negative values behave like an absent one.
pub fn classify_flex(flex: Option<f64>) -> FlexGrowth {
    match flex {
        None => FlexGrowth::Default,
        Some(f) if f.is_nan() || f < 0.0 => FlexGrowth::Default,
        Some(f) if f == 0.0 => FlexGrowth::None,
        Some(f) if f == 1.0 => FlexGrowth::Weight(1),
        Some(f) if f == 2.0 => FlexGrowth::Weight(2),
        Some(f) if f == 3.0 => FlexGrowth::Weight(3),
        Some(f) => FlexGrowth::Factor(f),
    }
}

/// Resolved offsets of a positioned component. Absent offsets stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offsets {
    pub top: Option<Unit>,
    pub bottom: Option<Unit>,
    pub start: Option<Unit>,
    pub end: Option<Unit>,
}

impl Offsets {
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.bottom.is_none() && self.start.is_none() && self.end.is_none()
    }
}

fn resolve_offset(value: Option<&str>) -> Option<Unit> {
    value.map(|v| tokens::resolve_token_or(v, &tokens::OFFSET, Unit::Px(0.0)))
}

/// Resolves the four independent offsets. Unknown tokens resolve to zero.
pub fn resolve_offsets(
    top: Option<&str>,
    bottom: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Offsets {
    Offsets {
        top: resolve_offset(top),
        bottom: resolve_offset(bottom),
        start: resolve_offset(start),
        end: resolve_offset(end),
    }
}

/// Padding on each side of a box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: Option<Unit>,
    pub bottom: Option<Unit>,
    pub start: Option<Unit>,
    pub end: Option<Unit>,
}

impl Padding {
    pub fn uniform(unit: Unit) -> Self {
        Self {
            top: Some(unit.clone()),
            bottom: Some(unit.clone()),
            start: Some(unit.clone()),
            end: Some(unit),
        }
    }
}

/// The five padding attributes as written by the author.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddingSpec<'a> {
    pub all: Option<&'a str>,
    pub top: Option<&'a str>,
    pub bottom: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
}

impl PaddingSpec<'_> {
    pub fn is_unset(&self) -> bool {
        self.all.is_none()
            && self.top.is_none()
            && self.bottom.is_none()
            && self.start.is_none()
            && self.end.is_none()
    }
}

/// Resolves padding: `all` first, then the individual sides override it.
pub fn resolve_padding(spec: PaddingSpec<'_>) -> Padding {
    let side = |v: &str| tokens::resolve_token_or(v, &tokens::PADDING, Unit::Px(0.0));
    let mut padding = spec.all.map(|v| Padding::uniform(side(v))).unwrap_or_default();
    if let Some(v) = spec.top {
        padding.top = Some(side(v));
    }
    if let Some(v) = spec.bottom {
        padding.bottom = Some(side(v));
    }
    if let Some(v) = spec.start {
        padding.start = Some(side(v));
    }
    if let Some(v) = spec.end {
        padding.end = Some(side(v));
    }
    padding
}

/// Formats a linear-gradient descriptor.
///
/// With a center color the stops are `start 0%`, `center <centerPosition>`
/// (default `50%`) and `end 100%`.
pub fn format_gradient(background: &Background) -> String {
    let stops = match &background.center_color {
        Some(center) => vec![
            format!("{} 0%", background.start_color),
            format!(
                "{} {}",
                center,
                background.center_position.as_deref().unwrap_or("50%")
            ),
            format!("{} 100%", background.end_color),
        ],
        None => vec![
            format!("{} 0%", background.start_color),
            format!("{} 100%", background.end_color),
        ],
    };
    format!(
        "linear-gradient({}, {})",
        background.angle,
        stops.iter().join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_rejects_zero_width() {
        assert_eq!(parse_aspect_ratio(Some("0:3")), 100.0);
        assert_eq!(parse_aspect_ratio(Some("1:2:3")), 100.0);
        assert_eq!(parse_aspect_ratio(Some("16:9")), 56.25);
    }

    #[test]
    fn flex_growth_factor() {
        assert_eq!(classify_flex(Some(5.0)).grow(), 5.0);
        assert_eq!(classify_flex(None).or_equal().grow(), 1.0);
        assert_eq!(classify_flex(Some(0.0)).or_equal(), FlexGrowth::None);
    }

    #[test]
    fn padding_sides_override_all() {
        let padding = resolve_padding(PaddingSpec {
            all: Some("md"),
            top: Some("3px"),
            ..Default::default()
        });
        assert_eq!(padding.top, Some(Unit::Literal("3px".to_string())));
        assert_eq!(padding.bottom, Some(Unit::Px(8.0)));
        assert_eq!(padding.start, Some(Unit::Px(8.0)));
    }
}
