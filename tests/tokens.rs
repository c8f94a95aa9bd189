//! Token table and geometry helper tests.
use fukidashi::geometry::{
    FlexGrowth, classify_flex, format_gradient, parse_aspect_ratio, resolve_offsets,
};
use fukidashi::resolver::child_spacing;
use fukidashi::schema::{ASPECT_RATIOS, Background, Layout, SIZE_TOKENS, SPACING_TOKENS};
use fukidashi::tokens::{self, Unit, resolve_token};

#[cfg(test)]
mod token_tests {
    use super::*;

    #[test]
    fn test_every_token_resolves_to_documented_value() {
        let expectations: [(&tokens::TokenTable, &[f64]); 5] = [
            (&tokens::SPACING, &[0.0, 2.0, 4.0, 8.0, 12.0, 16.0, 20.0]),
            (&tokens::MARGIN, &[0.0, 2.0, 4.0, 8.0, 12.0, 16.0, 20.0]),
            (
                &tokens::FONT_SIZE,
                &[11.0, 13.0, 14.0, 16.0, 19.0, 22.0, 29.0, 35.0, 48.0, 74.0],
            ),
            (
                &tokens::SPACER_SIZE,
                &[2.0, 2.0, 4.0, 8.0, 12.0, 16.0, 20.0, 20.0, 20.0, 20.0],
            ),
            (&tokens::BORDER_WIDTH, &[0.0, 0.5, 1.0, 2.0, 3.0, 4.0]),
        ];
        for (table, values) in expectations {
            let resolved: Vec<_> = table
                .tokens()
                .map(|token| resolve_token(token, table))
                .collect();
            let expected: Vec<_> = values.iter().map(|v| Some(Unit::Px(*v))).collect();
            assert_eq!(resolved, expected, "table {}", table.name);
        }
    }

    #[test]
    fn test_tables_cover_format_token_lists() {
        assert!(SPACING_TOKENS.iter().copied().eq(tokens::SPACING.tokens()));
        assert!(SIZE_TOKENS.iter().copied().eq(tokens::FONT_SIZE.tokens()));
        assert!(
            SIZE_TOKENS
                .iter()
                .all(|t| tokens::IMAGE_SIZE.get(t).is_some())
        );
    }

    #[test]
    fn test_absolute_values_pass_through() {
        for value in ["12px", "50%", "0px", "3.5px"] {
            for table in [&tokens::SPACING, &tokens::MARGIN, &tokens::PADDING, &tokens::IMAGE_SIZE] {
                assert_eq!(
                    resolve_token(value, table),
                    Some(Unit::Literal(value.to_string()))
                );
            }
        }
        assert_eq!(Unit::Literal("12px".to_string()).to_string(), "12px");
    }

    #[test]
    fn test_unknown_tokens_are_no_override() {
        assert_eq!(resolve_token("huge", &tokens::SPACING), None);
        assert_eq!(resolve_token("", &tokens::FONT_SIZE), None);
        assert_eq!(resolve_token("full", &tokens::FONT_SIZE), None);
    }

    #[test]
    fn test_image_full_is_percentage() {
        assert_eq!(
            resolve_token("full", &tokens::IMAGE_SIZE),
            Some(Unit::Percent(100.0))
        );
        assert_eq!(resolve_token("5xl", &tokens::IMAGE_SIZE), Some(Unit::Px(220.0)));
    }
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_parsing() {
        assert_eq!(parse_aspect_ratio(Some("2:3")), 150.0);
        assert_eq!(parse_aspect_ratio(Some("")), 100.0);
        assert_eq!(parse_aspect_ratio(None), 100.0);
        assert_eq!(parse_aspect_ratio(Some("bogus")), 100.0);
        assert_eq!(parse_aspect_ratio(Some("1:1")), 100.0);
        assert_eq!(parse_aspect_ratio(Some("20:13")), 65.0);
    }

    #[test]
    fn test_all_format_aspect_ratios_parse() {
        for ratio in ASPECT_RATIOS {
            assert!(parse_aspect_ratio(Some(ratio)) > 0.0, "ratio {}", ratio);
        }
    }

    #[test]
    fn test_flex_classification() {
        assert_eq!(classify_flex(None), FlexGrowth::Default);
        assert_eq!(classify_flex(Some(0.0)), FlexGrowth::None);
        assert_eq!(classify_flex(Some(1.0)), FlexGrowth::Weight(1));
        assert_eq!(classify_flex(Some(4.0)), FlexGrowth::Factor(4.0));
        assert_eq!(classify_flex(Some(-1.0)), classify_flex(None));
    }

    #[test]
    fn test_offsets() {
        let offsets = resolve_offsets(Some("xxl"), None, Some("5%"), Some("??"));
        assert_eq!(offsets.top, Some(Unit::Px(20.0)));
        assert_eq!(offsets.bottom, None);
        assert_eq!(offsets.start, Some(Unit::Literal("5%".to_string())));
        assert_eq!(offsets.end, Some(Unit::Px(0.0)));
        assert!(resolve_offsets(None, None, None, None).is_empty());
    }

    #[test]
    fn test_gradient_stops() {
        let background: Background = serde_json::from_value(serde_json::json!({
            "type": "linearGradient",
            "angle": "0deg",
            "startColor": "#000000",
            "endColor": "#ffffff",
            "centerColor": "#888888",
            "centerPosition": "30%"
        }))
        .expect("Invalid background");
        assert_eq!(
            format_gradient(&background),
            "linear-gradient(0deg, #000000 0%, #888888 30%, #ffffff 100%)"
        );

        let plain = Background {
            center_color: None,
            ..background
        };
        assert_eq!(
            format_gradient(&plain),
            "linear-gradient(0deg, #000000 0%, #ffffff 100%)"
        );
    }

    #[test]
    fn test_child_spacing_rules() {
        assert_eq!(child_spacing(Some("md"), Layout::Vertical, 0, "text"), None);
        assert_eq!(child_spacing(Some("md"), Layout::Vertical, 3, "filler"), None);
        assert_eq!(child_spacing(Some("md"), Layout::Vertical, 3, "spacer"), None);
        assert_eq!(child_spacing(Some("none"), Layout::Vertical, 3, "text"), None);
        assert_eq!(child_spacing(None, Layout::Vertical, 3, "text"), None);
        assert!(child_spacing(Some("md"), Layout::Baseline, 1, "text").is_some());
    }
}
