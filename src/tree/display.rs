use super::{
    FlexGrowth, LineHeight, Margin, ResolvedBubble, ResolvedContainer, ResolvedMessage,
    ResolvedNode, ResolvedSection,
};
use crate::tokens::format_number;
use std::fmt;

/// A wrapper to display a resolved message as an indented tree.
/// Used by the CLI and handy when comparing resolver output by eye.
pub struct DisplayTree<'a> {
    pub message: &'a ResolvedMessage,
}

impl<'a> DisplayTree<'a> {
    pub fn new(message: &'a ResolvedMessage) -> Self {
        Self { message }
    }
}

impl fmt::Display for DisplayTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "flex \"{}\"", self.message.alt_text)?;
        match &self.message.contents {
            ResolvedContainer::Bubble(bubble) => self.fmt_bubble(bubble, f, "", true),
            ResolvedContainer::Carousel(carousel) => {
                writeln!(
                    f,
                    "└── carousel [{} bubbles, gap {}, width {}]",
                    carousel.bubbles.len(),
                    carousel.gap,
                    carousel.bubble_width
                )?;
                let count = carousel.bubbles.len();
                for (i, bubble) in carousel.bubbles.iter().enumerate() {
                    self.fmt_bubble(bubble, f, "    ", i + 1 == count)?;
                }
                Ok(())
            }
        }
    }
}

fn growth(flex: &FlexGrowth) -> String {
    match flex {
        FlexGrowth::Default => "default".to_string(),
        FlexGrowth::None => "0".to_string(),
        FlexGrowth::Weight(w) => w.to_string(),
        FlexGrowth::Factor(v) => format_number(*v),
    }
}

fn margin(margin: &Option<Margin>) -> String {
    match margin {
        Some(m) => format!(" margin-{:?}={}", m.side, m.amount).to_lowercase(),
        None => String::new(),
    }
}

impl DisplayTree<'_> {
    fn fmt_bubble(
        &self,
        bubble: &ResolvedBubble,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        writeln!(
            f,
            "{}{}bubble [{}, max-width {}, radius {}]",
            prefix,
            node_marker,
            bubble.size.as_str(),
            bubble.max_width,
            bubble.corner_radius
        )?;
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        let sections: Vec<_> = bubble.sections().collect();
        let count = sections.len();
        for (i, (name, section)) in sections.into_iter().enumerate() {
            self.fmt_section(name, section, f, &child_prefix, i + 1 == count)?;
        }
        Ok(())
    }

    fn fmt_section(
        &self,
        name: &str,
        section: &ResolvedSection,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}{} (flex {})", prefix, node_marker, name, growth(&section.flex))?;
        if let Some(color) = &section.background_color {
            write!(f, " bg={}", color)?;
        }
        writeln!(f)?;
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
        self.fmt_node(&section.content, None, f, &child_prefix, true)
    }

    /// Recursively formats a node and its children.
    fn fmt_node(
        &self,
        node: &ResolvedNode,
        spacing: Option<&Margin>,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        is_last: bool,
    ) -> fmt::Result {
        let node_marker = if is_last { "└── " } else { "├── " };
        write!(f, "{}{}", prefix, node_marker)?;
        let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });

        match node {
            ResolvedNode::Box(b) => write!(
                f,
                "box {:?} (flex {}){}",
                b.layout,
                growth(&b.geometry.flex),
                margin(&b.geometry.margin)
            )?,
            ResolvedNode::Button(b) => write!(
                f,
                "button \"{}\" {:?} height={} (flex {})",
                b.label,
                b.style,
                b.height,
                growth(&b.geometry.flex)
            )?,
            ResolvedNode::Filler(b) => write!(f, "filler (flex {})", growth(&b.flex))?,
            ResolvedNode::Icon(i) => write!(f, "icon {} width={}em", i.url, format_number(i.width_em))?,
            ResolvedNode::Image(i) => write!(
                f,
                "image {} width={} aspect={}%",
                i.url,
                i.width,
                format_number(i.aspect_percent)
            )?,
            ResolvedNode::Separator(s) => {
                write!(f, "separator {:?} {}{}", s.orientation, s.color, margin(&s.margin))?
            }
            ResolvedNode::Spacer(s) => write!(f, "spacer {}", s.height)?,
            ResolvedNode::Text(t) => {
                write!(f, "text {:?}", t.lines.join("\\n"))?;
                if let Some(size) = &t.font_size {
                    write!(f, " size={}", size)?;
                }
                if let LineHeight::Px(px) = t.line_height {
                    write!(f, " line-height={}px", format_number(px))?;
                }
                write!(f, "{}", margin(&t.geometry.margin))?;
            }
            ResolvedNode::Span(s) => write!(f, "span {:?}", s.text)?,
            ResolvedNode::Video(v) => write!(
                f,
                "video {} aspect={}%",
                v.url,
                format_number(v.aspect_percent)
            )?,
        }
        if let Some(spacing) = spacing {
            write!(f, " +spacing {}", spacing.amount)?;
        }
        if let Some(action) = node.action() {
            write!(f, " [{}]", action.kind())?;
        }
        writeln!(f)?;

        match node {
            ResolvedNode::Box(b) => {
                let count = b.children.len();
                for (i, child) in b.children.iter().enumerate() {
                    self.fmt_node(
                        &child.node,
                        child.spacing.as_ref(),
                        f,
                        &child_prefix,
                        i + 1 == count,
                    )?;
                }
            }
            ResolvedNode::Text(t) => {
                let count = t.spans.len();
                for (i, span) in t.spans.iter().enumerate() {
                    let marker = if i + 1 == count { "└── " } else { "├── " };
                    writeln!(f, "{}{}span {:?}", child_prefix, marker, span.text)?;
                }
            }
            ResolvedNode::Video(v) => {
                if let Some(alt) = &v.alt_content {
                    self.fmt_node(alt, None, f, &child_prefix, true)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
