//! Settings registry
//! Registry that holds setting descriptors and applies assignments

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Settings registry
///
/// Holds static setting descriptors and provides:
/// - Option name resolution (exact name, alias, unique prefix)
/// - Typed parsing of raw values
/// - Application of `name=value` assignments to an options value
pub struct SettingsRegistry<T: 'static> {
    /// Static array of setting descriptors
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    /// All descriptors, in declaration order
    #[must_use]
    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Resolve an option name.
    ///
    /// Exact names and aliases win; otherwise a prefix of exactly one
    /// canonical name is accepted.
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let name = name.trim().to_lowercase();
        if let Some(desc) = self
            .settings
            .iter()
            .find(|d| d.name == name || d.aliases.iter().any(|a| *a == name))
        {
            return Ok(desc);
        }

        let matches: Vec<&'static SettingDescriptor<T>> = self
            .settings
            .iter()
            .filter(|d| !name.is_empty() && d.name.starts_with(name.as_str()))
            .collect();
        match matches.as_slice() {
            [single] => Ok(*single),
            [] => Err(SettingError::UnknownOption(name)),
            many => Err(SettingError::Ambiguous {
                prefix: name,
                matches: many.iter().map(|d| d.name.to_string()).collect(),
            }),
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => {
                let val_lower = value.trim().to_lowercase();
                match val_lower.as_str() {
                    "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                    "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                    _ => Err(SettingError::ParseError(format!(
                        "Invalid boolean value: {value}"
                    ))),
                }
            }
            SettingType::Integer { min, max } => {
                let val = value.trim().parse::<usize>().map_err(|_| {
                    SettingError::ParseError(format!("Invalid integer value: {value}"))
                })?;

                if let Some(min_val) = min {
                    if val < *min_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is below minimum {min_val}"
                        )));
                    }
                }
                if let Some(max_val) = max {
                    if val > *max_val {
                        return Err(SettingError::ValidationError(format!(
                            "Value {val} is above maximum {max_val}"
                        )));
                    }
                }
                Ok(SettingValue::Integer(val))
            }
            SettingType::Enum { variants } => {
                let val_lower = value.trim().to_lowercase();
                // Find canonical variant (case-insensitive match)
                if let Some(canonical) = variants.iter().find(|v| v.to_lowercase() == val_lower) {
                    Ok(SettingValue::Enum(canonical.to_string()))
                } else {
                    Err(SettingError::ParseError(format!(
                        "Invalid enum value: {value}. Valid values: {variants:?}"
                    )))
                }
            }
        }
    }

    /// Apply one option by name with a string value
    pub fn apply(&self, target: &mut T, name: &str, value: &str) -> Result<(), SettingError> {
        let desc = self.resolve(name)?;
        let typed_value = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, typed_value)
    }

    /// Apply a vim-style assignment.
    ///
    /// Accepts `name=value`, and for boolean options the bare forms `name`
    /// (on) and `noname` (off).
    pub fn apply_assignment(&self, target: &mut T, assignment: &str) -> Result<(), SettingError> {
        if let Some((name, value)) = assignment.split_once('=') {
            return self.apply(target, name, value);
        }

        let name = assignment.trim();
        match self.resolve(name) {
            Ok(desc) if matches!(desc.ty, SettingType::Boolean) => {
                (desc.set)(target, SettingValue::Bool(true))
            }
            Ok(desc) => Err(SettingError::ParseError(format!(
                "Option '{}' needs a value",
                desc.name
            ))),
            Err(err) => {
                let negated = name
                    .strip_prefix("no")
                    .and_then(|rest| self.resolve(rest).ok())
                    .filter(|desc| matches!(desc.ty, SettingType::Boolean));
                match negated {
                    Some(desc) => (desc.set)(target, SettingValue::Bool(false)),
                    None => Err(err),
                }
            }
        }
    }

    /// Apply several assignments in order, stopping at the first failure
    pub fn apply_all<I, S>(&self, target: &mut T, assignments: I) -> Result<(), SettingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for assignment in assignments {
            self.apply_assignment(target, assignment.as_ref())?;
        }
        Ok(())
    }
}
