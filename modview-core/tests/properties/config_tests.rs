//! Property-based tests for layout settings
//!
//! **Feature: modview-config**

use modview_core::{ConfigError, LayoutSettings, Orientation};
use proptest::prelude::*;

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Row), Just(Orientation::Column)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Feature: modview-config, Property 1: Settings Survive TOML
    //
    // *For any* valid settings, serializing to TOML and parsing back yields
    // the same settings.

    /// Test that valid settings survive a TOML round trip
    #[test]
    fn prop_settings_survive_toml(
        max_depth in proptest::option::of(1usize..64),
        orientation in orientation_strategy(),
    ) {
        let mut settings = LayoutSettings::new().with_root_orientation(orientation);
        settings.max_depth = max_depth;

        let text = settings.to_toml_string();
        prop_assert!(text.is_ok());
        let parsed = LayoutSettings::from_toml_str(&text.unwrap_or_default());
        prop_assert_eq!(parsed.ok(), Some(settings));
    }

    /// Test that unknown orientation names are rejected
    #[test]
    fn prop_unknown_orientation_is_rejected(name in "[a-z]{3,10}") {
        prop_assume!(name != "row" && name != "column");
        let source = format!("root_orientation = \"{name}\"");
        let result = LayoutSettings::from_toml_str(&source);
        prop_assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

#[test]
fn orientation_aliases_parse_from_strings() {
    assert_eq!("Horizontal".parse::<Orientation>(), Ok(Orientation::Row));
    assert_eq!("vertical".parse::<Orientation>(), Ok(Orientation::Column));
}
