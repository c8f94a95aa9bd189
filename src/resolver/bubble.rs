use super::container::resolve_box;
use super::context::LayoutContext;
use super::dispatch::TreeDispatcher;
use crate::error::ResolveError;
use crate::geometry::{FlexGrowth, Padding};
use crate::schema::{BubbleSize, CarouselEntry, FlexBubble, FlexCarousel, FlexComponent, SectionStyle};
use crate::tokens::Unit;
use crate::tree::{ResolvedBubble, ResolvedCarousel, ResolvedNode, ResolvedSection};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub const CAROUSEL_GAP: f64 = 9.0;
pub const CAROUSEL_INSET: f64 = 7.0;
pub const CAROUSEL_BUBBLE_WIDTH_PERCENT: f64 = 80.0;

/// The three boxed sections of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Body,
    Footer,
}

pub fn max_width(size: BubbleSize) -> Unit {
    Unit::Px(match size {
        BubbleSize::Nano => 120.0,
        BubbleSize::Micro => 160.0,
        BubbleSize::Deca => 220.0,
        BubbleSize::Hecto => 241.0,
        BubbleSize::Kilo => 260.0,
        BubbleSize::Mega => 300.0,
        BubbleSize::Giga => 500.0,
    })
}

pub fn corner_radius(size: BubbleSize) -> Unit {
    Unit::Px(match size {
        BubbleSize::Mega => 17.0,
        BubbleSize::Giga => 5.0,
        _ => 10.0,
    })
}

/// Padding injected into a section whose box sets no padding of its own.
pub fn default_padding(size: BubbleSize, section: Section, has_footer: bool) -> Padding {
    let base = match size {
        BubbleSize::Mega | BubbleSize::Giga => 20.0,
        BubbleSize::Kilo => 13.0,
        BubbleSize::Nano | BubbleSize::Micro => 10.0,
        BubbleSize::Deca | BubbleSize::Hecto => 11.0,
    };
    match section {
        Section::Header => Padding::uniform(Unit::Px(base)),
        Section::Footer => Padding::uniform(Unit::Px(10.0)),
        Section::Body => {
            let mut padding = Padding::uniform(Unit::Px(base));
            if matches!(size, BubbleSize::Mega | BubbleSize::Giga) {
                padding.top = Some(Unit::Px(19.0));
            }
            if has_footer {
                let bottom = match size {
                    BubbleSize::Kilo | BubbleSize::Hecto | BubbleSize::Deca => 17.0,
                    _ => 10.0,
                };
                padding.bottom = Some(Unit::Px(bottom));
            }
            padding
        }
    }
}

fn section_background(style: Option<&SectionStyle>) -> Option<String> {
    style.and_then(|s| s.background_color.clone())
}

impl TreeDispatcher {
    /// Resolves a header, body or footer. Only a box may fill these slots;
    /// any other kind goes through the unknown-component policy.
    fn resolve_section(
        &self,
        node: &FlexComponent,
        size: BubbleSize,
        section: Section,
        has_footer: bool,
        style: Option<&SectionStyle>,
        path: String,
    ) -> Result<Option<ResolvedSection>, ResolveError> {
        let FlexComponent::Box(node) = node else {
            self.unknown(node.kind(), &path)?;
            return Ok(None);
        };
        let ctx = LayoutContext::section(size, path);
        let padding = default_padding(size, section, has_footer);
        Ok(Some(ResolvedSection {
            background_color: section_background(style),
            flex: match section {
                Section::Body => FlexGrowth::Weight(1),
                Section::Header | Section::Footer => FlexGrowth::None,
            },
            content: ResolvedNode::Box(resolve_box(self, node, &ctx, Some(padding))?),
        }))
    }

    /// Resolves the four sections of a bubble independently.
    pub fn resolve_bubble(&self, bubble: &FlexBubble, path: &str) -> Result<ResolvedBubble, ResolveError> {
        let size = bubble.size.unwrap_or_default();
        let styles = bubble.styles.clone().unwrap_or_default();
        let has_footer = matches!(bubble.footer, Some(FlexComponent::Box(_)));
        log::debug!("Resolving {} bubble at {}", size.as_str(), path);

        let boxed = |node: &Option<FlexComponent>,
                     section: Section,
                     style: Option<&SectionStyle>,
                     name: &str| match node {
            Some(node) => self.resolve_section(
                node,
                size,
                section,
                has_footer,
                style,
                format!("{}.{}", path, name),
            ),
            None => Ok(None),
        };

        let header = boxed(&bubble.header, Section::Header, styles.header.as_ref(), "header")?;
        let hero = match &bubble.hero {
            Some(node) => {
                let ctx = LayoutContext::section(size, format!("{}.hero", path));
                self.resolve(node, &ctx)?.map(|content| ResolvedSection {
                    background_color: section_background(styles.hero.as_ref()),
                    flex: FlexGrowth::None,
                    content,
                })
            }
            None => None,
        };
        let body = boxed(&bubble.body, Section::Body, styles.body.as_ref(), "body")?;
        let footer = boxed(&bubble.footer, Section::Footer, styles.footer.as_ref(), "footer")?;

        Ok(ResolvedBubble {
            size,
            direction: bubble.direction.unwrap_or_default(),
            max_width: max_width(size),
            corner_radius: corner_radius(size),
            header,
            hero,
            body,
            footer,
            action: bubble.action.clone(),
        })
    }

    fn resolve_entry(&self, index: usize, entry: &CarouselEntry) -> Result<Option<ResolvedBubble>, ResolveError> {
        let path = format!("contents[{}]", index);
        match entry {
            CarouselEntry::Bubble(bubble) => self.resolve_bubble(bubble, &path).map(Some),
            CarouselEntry::Unknown(kind) => self.unknown(kind, &path).map(|_| None),
        }
    }

    /// Resolves every bubble of a carousel, keeping input order.
    pub fn resolve_carousel(&self, carousel: &FlexCarousel) -> Result<ResolvedCarousel, ResolveError> {
        #[cfg(feature = "parallel")]
        let entries = carousel
            .contents
            .par_iter()
            .enumerate()
            .map(|(i, entry)| self.resolve_entry(i, entry))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let entries = carousel
            .contents
            .iter()
            .enumerate()
            .map(|(i, entry)| self.resolve_entry(i, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let bubbles = entries.into_iter().flatten().collect();
        Ok(ResolvedCarousel {
            bubbles,
            gap: Unit::Px(CAROUSEL_GAP),
            inset_start: Unit::Px(CAROUSEL_INSET),
            inset_end: Unit::Px(CAROUSEL_INSET),
            bubble_width: Unit::Percent(CAROUSEL_BUBBLE_WIDTH_PERCENT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mega_body_with_footer() {
        let padding = default_padding(BubbleSize::Mega, Section::Body, true);
        assert_eq!(padding.top, Some(Unit::Px(19.0)));
        assert_eq!(padding.bottom, Some(Unit::Px(10.0)));
        assert_eq!(padding.start, Some(Unit::Px(20.0)));
    }

    #[test]
    fn kilo_body_with_footer() {
        let padding = default_padding(BubbleSize::Kilo, Section::Body, true);
        assert_eq!(padding.top, Some(Unit::Px(13.0)));
        assert_eq!(padding.bottom, Some(Unit::Px(17.0)));
    }

    #[test]
    fn footer_ignores_size() {
        for size in BubbleSize::ALL {
            assert_eq!(
                default_padding(size, Section::Footer, true),
                Padding::uniform(Unit::Px(10.0))
            );
        }
    }
}
