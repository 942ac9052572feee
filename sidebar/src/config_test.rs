use super::*;
use crate::size::bounds;

#[test]
fn default_config_matches_builtin_mapper() {
    let config = SidebarConfig::default();
    for side in [Side::Lhs, Side::Rhs] {
        for size in SidebarSize::ALL {
            assert_eq!(config.bounds(side, size), bounds(side, size));
        }
    }
    assert_eq!(config.limit_indicator_ms, 800);
}

#[test]
fn default_config_validates() {
    assert!(SidebarConfig::default().validate().is_ok());
}

#[test]
fn from_json_keeps_defaults_for_missing_fields() {
    let config = SidebarConfig::from_json(r#"{ "limitIndicatorMs": 250 }"#).unwrap();
    assert_eq!(config.limit_indicator_ms, 250);
    assert_eq!(config.lhs, SidebarConfig::default().lhs);
    assert_eq!(config.rhs, SidebarConfig::default().rhs);
}

#[test]
fn from_json_overrides_a_table() {
    let raw = r#"{
        "rhs": {
            "small":   { "min": 400, "max": 400, "default": 400 },
            "medium":  { "min": 240, "max": 500, "default": 320 },
            "large":   { "min": 304, "max": 464, "default": 400 },
            "xLarge":  { "min": 304, "max": 776, "default": 500 }
        }
    }"#;
    let config = SidebarConfig::from_json(raw).unwrap();
    assert_eq!(config.bounds(Side::Rhs, SidebarSize::Medium), WidthBounds::new(240, 500, 320));
    assert_eq!(config.bounds(Side::Lhs, SidebarSize::Medium), bounds(Side::Lhs, SidebarSize::Medium));
}

#[test]
fn from_json_rejects_inverted_bounds() {
    let raw = r#"{
        "lhs": {
            "small":   { "min": 240, "max": 240, "default": 240 },
            "medium":  { "min": 300, "max": 200, "default": 250 },
            "large":   { "min": 200, "max": 304, "default": 240 },
            "xLarge":  { "min": 200, "max": 440, "default": 240 }
        }
    }"#;
    match SidebarConfig::from_json(raw) {
        Err(ConfigError::InvalidBounds { side, size, .. }) => {
            assert_eq!(side, Side::Lhs);
            assert_eq!(size, SidebarSize::Medium);
        }
        other => panic!("expected InvalidBounds, got {other:?}"),
    }
}

#[test]
fn from_json_reports_parse_errors() {
    let err = SidebarConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse sidebar config"));
}

#[test]
fn bounds_table_lookup_is_total() {
    let table = BoundsTable::from_array([
        WidthBounds::new(1, 1, 1),
        WidthBounds::new(2, 2, 2),
        WidthBounds::new(3, 3, 3),
        WidthBounds::new(4, 4, 4),
    ]);
    assert_eq!(table.get(SidebarSize::Small).min, 1);
    assert_eq!(table.get(SidebarSize::Medium).min, 2);
    assert_eq!(table.get(SidebarSize::Large).min, 3);
    assert_eq!(table.get(SidebarSize::XLarge).min, 4);
}

#[test]
fn from_json_overrides_a_single_size_class() {
    let raw = r#"{ "rhs": { "medium": { "min": 240, "max": 500, "default": 320 } } }"#;
    let config = SidebarConfig::from_json(raw).unwrap();
    let defaults = SidebarConfig::default();
    assert_eq!(config.bounds(Side::Rhs, SidebarSize::Medium), WidthBounds::new(240, 500, 320));
    assert_eq!(config.rhs.small, defaults.rhs.small);
    assert_eq!(config.rhs.x_large, defaults.rhs.x_large);
    assert_eq!(config.lhs, defaults.lhs);
    assert_eq!(config.limit_indicator_ms, defaults.limit_indicator_ms);
}

#[test]
fn from_json_rejects_partial_entry() {
    let raw = r#"{ "lhs": { "large": { "min": 200 } } }"#;
    assert!(matches!(SidebarConfig::from_json(raw), Err(ConfigError::Parse(_))));
}
