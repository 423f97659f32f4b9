//! Settings definitions
//! Declarative registry of all motion options

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use super::MotionOptions;

// Setter functions for each setting

fn expect_bool(value: SettingValue) -> Result<bool, SettingError> {
    match value {
        SettingValue::Bool(b) => Ok(b),
        _ => Err(SettingError::ValidationError("Expected boolean".to_string())),
    }
}

fn set_multi_line(options: &mut MotionOptions, value: SettingValue) -> Result<(), SettingError> {
    options.multi_line = expect_bool(value)?;
    Ok(())
}

fn set_must_move(options: &mut MotionOptions, value: SettingValue) -> Result<(), SettingError> {
    options.must_move = expect_bool(value)?;
    Ok(())
}

fn set_stop_at_empty_line(
    options: &mut MotionOptions,
    value: SettingValue,
) -> Result<(), SettingError> {
    options.stop_at_empty_line = expect_bool(value)?;
    Ok(())
}

fn set_subword(options: &mut MotionOptions, value: SettingValue) -> Result<(), SettingError> {
    options.subword = expect_bool(value)?;
    Ok(())
}

fn set_count(options: &mut MotionOptions, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            if n == 0 {
                return Err(SettingError::ValidationError(
                    "count must be greater than 0".to_string(),
                ));
            }
            options.count = n;
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected integer".to_string())),
    }
}

fn set_inclusive(options: &mut MotionOptions, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Enum(mode) => {
            options.inclusive = match mode.as_str() {
                "auto" => None,
                "inclusive" | "true" | "on" => Some(true),
                "exclusive" | "false" | "off" => Some(false),
                _ => {
                    return Err(SettingError::ValidationError(format!(
                        "Unknown inclusive mode: {mode}"
                    )))
                }
            };
            Ok(())
        }
        _ => Err(SettingError::ValidationError("Expected enum".to_string())),
    }
}

/// All motion options
const MOTION_SETTINGS: &[SettingDescriptor<MotionOptions>] = &[
    SettingDescriptor {
        name: "multiline",
        aliases: &["ml"],
        ty: SettingType::Boolean,
        set: set_multi_line,
    },
    SettingDescriptor {
        name: "mustmove",
        aliases: &["mm"],
        ty: SettingType::Boolean,
        set: set_must_move,
    },
    SettingDescriptor {
        name: "stopatemptyline",
        aliases: &["sael"],
        ty: SettingType::Boolean,
        set: set_stop_at_empty_line,
    },
    SettingDescriptor {
        name: "count",
        aliases: &["n"],
        ty: SettingType::Integer {
            min: Some(1),
            max: None,
        },
        set: set_count,
    },
    SettingDescriptor {
        name: "inclusive",
        aliases: &["incl"],
        ty: SettingType::Enum {
            variants: &["auto", "inclusive", "exclusive", "true", "false", "on", "off"],
        },
        set: set_inclusive,
    },
    SettingDescriptor {
        name: "subword",
        aliases: &["sw"],
        ty: SettingType::Boolean,
        set: set_subword,
    },
];

/// Create the motion options registry
#[must_use]
pub fn create_settings_registry() -> SettingsRegistry<MotionOptions> {
    SettingsRegistry::new(MOTION_SETTINGS)
}
