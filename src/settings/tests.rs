//! Tests for the motion options registry

use super::*;
use crate::error::ErrorType;

fn registry() -> SettingsRegistry<MotionOptions> {
    create_settings_registry()
}

#[test]
fn test_defaults() {
    let options = MotionOptions::default();
    assert!(options.multi_line);
    assert!(options.must_move);
    assert!(options.stop_at_empty_line);
    assert_eq!(options.count, 1);
    assert_eq!(options.inclusive, None);
    assert!(options.subword);
}

#[test]
fn test_apply_boolean_values() {
    let mut options = MotionOptions::default();
    for (raw, expected) in [("off", false), ("ON", true), ("0", false), ("yes", true)] {
        registry().apply(&mut options, "multiline", raw).unwrap();
        assert_eq!(options.multi_line, expected, "value {raw}");
    }
}

#[test]
fn test_apply_by_alias_and_prefix() {
    let mut options = MotionOptions::default();
    registry().apply(&mut options, "mm", "false").unwrap();
    assert!(!options.must_move);

    registry().apply(&mut options, "stop", "false").unwrap();
    assert!(!options.stop_at_empty_line);

    registry().apply(&mut options, "Count", "4").unwrap();
    assert_eq!(options.count, 4);
}

#[test]
fn test_ambiguous_prefix() {
    let mut options = MotionOptions::default();
    let err = registry().apply(&mut options, "mu", "true").unwrap_err();
    match err {
        SettingError::Ambiguous { prefix, matches } => {
            assert_eq!(prefix, "mu");
            assert_eq!(matches, vec!["multiline", "mustmove"]);
        }
        other => panic!("expected ambiguity, got {other:?}"),
    }
}

#[test]
fn test_unknown_option() {
    let mut options = MotionOptions::default();
    let err = registry().apply(&mut options, "wrapscan", "true").unwrap_err();
    assert_eq!(err, SettingError::UnknownOption("wrapscan".to_string()));
}

#[test]
fn test_count_bounds() {
    let mut options = MotionOptions::default();
    let err = registry().apply(&mut options, "count", "0").unwrap_err();
    assert!(matches!(err, SettingError::ValidationError(_)));
    let err = registry().apply(&mut options, "count", "many").unwrap_err();
    assert!(matches!(err, SettingError::ParseError(_)));
    assert_eq!(options.count, 1);
}

#[test]
fn test_inclusive_modes() {
    let mut options = MotionOptions::default();
    registry().apply(&mut options, "inclusive", "Inclusive").unwrap();
    assert_eq!(options.inclusive, Some(true));
    registry().apply(&mut options, "incl", "exclusive").unwrap();
    assert_eq!(options.inclusive, Some(false));
    registry().apply(&mut options, "inclusive", "auto").unwrap();
    assert_eq!(options.inclusive, None);
    assert!(registry().apply(&mut options, "inclusive", "sometimes").is_err());
}

#[test]
fn test_vim_style_assignments() {
    let mut options = MotionOptions::default();
    registry()
        .apply_all(&mut options, ["nosubword", "noml", "count=2"])
        .unwrap();
    assert!(!options.subword);
    assert!(!options.multi_line);
    assert_eq!(options.count, 2);

    registry().apply_assignment(&mut options, "subword").unwrap();
    assert!(options.subword);
}

#[test]
fn test_bare_non_boolean_needs_value() {
    let mut options = MotionOptions::default();
    let err = registry().apply_assignment(&mut options, "count").unwrap_err();
    assert!(matches!(err, SettingError::ParseError(_)));
}

#[test]
fn test_with_overrides_converts_errors() {
    let options = MotionOptions::with_overrides(["count=3"]).unwrap();
    assert_eq!(options.count, 3);

    let err = MotionOptions::with_overrides(["bogus=1"]).unwrap_err();
    assert_eq!(err.kind, ErrorType::Settings);
    assert_eq!(err.code, "UNKNOWN_SETTING");

    let err = MotionOptions::with_overrides(["count=x"]).unwrap_err();
    assert_eq!(err.kind, ErrorType::Parse);
}

#[test]
fn test_descriptor_table_is_unique() {
    let descriptors = registry().descriptors();
    for (i, a) in descriptors.iter().enumerate() {
        for b in &descriptors[i + 1..] {
            assert_ne!(a.name, b.name);
            for alias in a.aliases {
                assert!(!b.aliases.contains(alias), "alias {alias} reused");
                assert_ne!(*alias, b.name);
            }
        }
    }
}
