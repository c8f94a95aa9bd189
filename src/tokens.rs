//! Token tables mapping the format's semantic size tokens to absolute units.
//!
//! Every lookup follows the same contract: a value that already carries an
//! absolute unit marker is passed through untouched, a known token resolves to
//! its fixed pixel value, and anything else resolves to `None` ("no override").
//! Callers that need a concrete fallback apply it themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resolved length, either looked up from a table or passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Unit {
    /// A pixel value produced by a token table.
    Px(f64),
    /// A percentage produced by a token table (e.g. image size `full`).
    Percent(f64),
    /// An author-supplied absolute value (`"12px"`, `"50%"`), kept as written.
    Literal(String),
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Px(v) => write!(f, "{}px", format_number(*v)),
            Unit::Percent(v) => write!(f, "{}%", format_number(*v)),
            Unit::Literal(s) => write!(f, "{}", s),
        }
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Which absolute markers a table accepts as pass-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passthrough {
    /// `px` or `%`.
    PixelOrPercent,
    /// `px` only; a percentage is treated like an unknown token.
    PixelOnly,
}

/// A fixed enumeration of tokens and their absolute values.
#[derive(Debug, Clone, Copy)]
pub struct TokenTable {
    pub name: &'static str,
    entries: &'static [(&'static str, Unit)],
    passthrough: Passthrough,
}

impl TokenTable {
    /// Looks up a token without considering pass-through values.
    pub fn get(&self, token: &str) -> Option<Unit> {
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, unit)| unit.clone())
    }

    /// All tokens defined by this table, in ladder order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(name, _)| *name)
    }

    fn accepts_literal(&self, value: &str) -> bool {
        match self.passthrough {
            Passthrough::PixelOrPercent => is_absolute(value),
            Passthrough::PixelOnly => value.contains("px"),
        }
    }
}

/// True when the value carries an absolute unit marker (`px` or `%`).
pub fn is_absolute(value: &str) -> bool {
    value.contains("px") || value.contains('%')
}

/// Resolves a token against a table.
///
/// Absolute values are returned unchanged as [`Unit::Literal`]; unknown tokens
/// resolve to `None`.
pub fn resolve_token(token: &str, table: &TokenTable) -> Option<Unit> {
    if table.accepts_literal(token) {
        return Some(Unit::Literal(token.to_string()));
    }
    table.get(token)
}

/// Same as [`resolve_token`] but substitutes `fallback` for an unknown token.
pub fn resolve_token_or(token: &str, table: &TokenTable, fallback: Unit) -> Unit {
    resolve_token(token, table).unwrap_or(fallback)
}

/// Defines a `TokenTable` constant from a list of `token => value` pairs.
macro_rules! token_table {
    ( $(#[$meta:meta])* $const_name:ident, $name:expr, $passthrough:ident; $( $token:expr => $unit:ident($value:expr) ),* $(,)? ) => {
        $(#[$meta])*
        pub const $const_name: TokenTable = TokenTable {
            name: $name,
            entries: &[ $( ($token, Unit::$unit($value)) ),* ],
            passthrough: Passthrough::$passthrough,
        };
    };
}

token_table! {
    /// Spacing between box children.
    SPACING, "spacing", PixelOrPercent;
    "none" => Px(0.0), "xs" => Px(2.0), "sm" => Px(4.0), "md" => Px(8.0),
    "lg" => Px(12.0), "xl" => Px(16.0), "xxl" => Px(20.0),
}

token_table! {
    /// Component margins.
    MARGIN, "margin", PixelOrPercent;
    "none" => Px(0.0), "xs" => Px(2.0), "sm" => Px(4.0), "md" => Px(8.0),
    "lg" => Px(12.0), "xl" => Px(16.0), "xxl" => Px(20.0),
}

token_table! {
    /// Box padding on any side.
    PADDING, "padding", PixelOrPercent;
    "none" => Px(0.0), "xs" => Px(2.0), "sm" => Px(4.0), "md" => Px(8.0),
    "lg" => Px(12.0), "xl" => Px(16.0), "xxl" => Px(20.0),
}

token_table! {
    /// Offsets of positioned components.
    OFFSET, "offset", PixelOrPercent;
    "none" => Px(0.0), "xs" => Px(2.0), "sm" => Px(4.0), "md" => Px(8.0),
    "lg" => Px(12.0), "xl" => Px(16.0), "xxl" => Px(20.0),
}

token_table! {
    /// Font sizes for text, spans and icons.
    FONT_SIZE, "font-size", PixelOrPercent;
    "xxs" => Px(11.0), "xs" => Px(13.0), "sm" => Px(14.0), "md" => Px(16.0),
    "lg" => Px(19.0), "xl" => Px(22.0), "xxl" => Px(29.0), "3xl" => Px(35.0),
    "4xl" => Px(48.0), "5xl" => Px(74.0),
}

token_table! {
    /// Image widths.
    IMAGE_SIZE, "image-size", PixelOrPercent;
    "xxs" => Px(40.0), "xs" => Px(60.0), "sm" => Px(80.0), "md" => Px(100.0),
    "lg" => Px(120.0), "xl" => Px(140.0), "xxl" => Px(160.0), "3xl" => Px(180.0),
    "4xl" => Px(200.0), "5xl" => Px(220.0), "full" => Percent(100.0),
}

token_table! {
    /// Spacer heights. The ladder saturates at 20px.
    SPACER_SIZE, "spacer-size", PixelOnly;
    "xxs" => Px(2.0), "xs" => Px(2.0), "sm" => Px(4.0), "md" => Px(8.0),
    "lg" => Px(12.0), "xl" => Px(16.0), "xxl" => Px(20.0), "3xl" => Px(20.0),
    "4xl" => Px(20.0), "5xl" => Px(20.0),
}

token_table! {
    CORNER_RADIUS, "corner-radius", PixelOnly;
    "none" => Px(0.0), "xs" => Px(2.0), "sm" => Px(4.0), "md" => Px(8.0),
    "lg" => Px(12.0), "xl" => Px(16.0), "xxl" => Px(20.0),
}

token_table! {
    BORDER_WIDTH, "border-width", PixelOnly;
    "none" => Px(0.0), "light" => Px(0.5), "normal" => Px(1.0), "medium" => Px(2.0),
    "semi-bold" => Px(3.0), "bold" => Px(4.0),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_ladder_matches_design_values() {
        let expected = [0.0, 2.0, 4.0, 8.0, 12.0, 16.0, 20.0];
        for (token, px) in SPACING.tokens().zip(expected) {
            assert_eq!(resolve_token(token, &SPACING), Some(Unit::Px(px)));
        }
    }

    #[test]
    fn pixel_only_tables_reject_percentages() {
        assert_eq!(resolve_token("50%", &CORNER_RADIUS), None);
        assert_eq!(
            resolve_token("6px", &CORNER_RADIUS),
            Some(Unit::Literal("6px".to_string()))
        );
    }

    #[test]
    fn unit_display() {
        assert_eq!(Unit::Px(8.0).to_string(), "8px");
        assert_eq!(Unit::Px(0.5).to_string(), "0.5px");
        assert_eq!(Unit::Percent(100.0).to_string(), "100%");
        assert_eq!(Unit::Literal("3em".to_string()).to_string(), "3em");
    }
}
