use crate::schema::{BubbleSize, Layout};
use crate::tokens::{self, Unit};
use crate::tree::{Margin, Side};

/// State passed from a container to its children during one resolution pass.
#[derive(Debug, Clone)]
pub struct LayoutContext<'a> {
    /// Main axis of the parent box.
    pub axis: Layout,
    /// Spacing token of the parent box, applied between children.
    pub spacing: Option<&'a str>,
    pub bubble_size: BubbleSize,
    /// Location of the node in the document, e.g. `body.contents[2]`.
    pub path: String,
}

impl<'a> LayoutContext<'a> {
    /// Context of a bubble section's root node.
    pub fn section(bubble_size: BubbleSize, path: String) -> Self {
        Self {
            axis: Layout::Vertical,
            spacing: None,
            bubble_size,
            path,
        }
    }

    /// Context for the children of a box.
    pub fn for_children<'b>(&self, axis: Layout, spacing: Option<&'b str>) -> LayoutContext<'b> {
        LayoutContext {
            axis,
            spacing,
            bubble_size: self.bubble_size,
            path: self.path.clone(),
        }
    }

    /// Context for the child at `index`, sharing axis and spacing.
    pub fn child(&self, index: usize) -> Self {
        Self {
            path: format!("{}.contents[{}]", self.path, index),
            ..self.clone()
        }
    }

    /// Side used by margins that follow the parent axis.
    pub fn cross_side(&self) -> Side {
        match self.axis {
            Layout::Vertical => Side::Top,
            Layout::Horizontal | Layout::Baseline => Side::Left,
        }
    }
}

/// Resolves a margin token on the given side. Unknown tokens give no margin.
pub fn resolve_margin(value: Option<&str>, side: Side) -> Option<Margin> {
    let amount = tokens::resolve_token(value?, &tokens::MARGIN)?;
    Some(Margin { side, amount })
}

/// The spacing margin added to the child at `index` of a box.
///
/// The first child gets none, nor do fillers and spacers at any position.
/// A `none` spacing adds nothing.
pub fn child_spacing(spacing: Option<&str>, axis: Layout, index: usize, kind: &str) -> Option<Margin> {
    if index == 0 || matches!(kind, "filler" | "spacer") {
        return None;
    }
    let spacing = spacing.filter(|s| *s != "none")?;
    let amount: Unit = tokens::resolve_token(spacing, &tokens::SPACING)?;
    let side = match axis {
        Layout::Vertical => Side::Top,
        Layout::Horizontal | Layout::Baseline => Side::Left,
    };
    Some(Margin { side, amount })
}
