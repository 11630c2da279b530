use std::fmt;

use regex::Regex;
use serde_json::Value;

use crate::domain::error::CheckFault;
use crate::domain::key_path::KeyPath;

/// Pattern accepted by "not blank" checks: the value must start with a
/// character other than a parenthesis.
pub const NOT_BLANK: &str = r"[^()]";

/// Expected value for [`super::assert_dict_contains`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// Regular expression matched at the start of the value's string form.
    Pattern(String),
    /// Value must be equal to this one.
    Exact(Value),
}

impl Expected {
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern(pattern.into())
    }

    pub fn exact(value: impl Into<Value>) -> Self {
        Self::Exact(value.into())
    }

    pub fn not_blank() -> Self {
        Self::Pattern(NOT_BLANK.to_string())
    }

    pub fn matches(&self, actual: &Value, path: &KeyPath) -> Result<bool, CheckFault> {
        match self {
            Self::Pattern(pattern) => {
                let regex = Regex::new(pattern).map_err(|source| CheckFault::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                let text = string_form(actual, path)?;
                // Leftmost match starts at 0 iff some match is anchored there.
                Ok(regex.find(&text).is_some_and(|found| found.start() == 0))
            }
            Self::Exact(expected) => Ok(expected == actual),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pattern(pattern) => f.write_str(pattern),
            Self::Exact(value) => write!(f, "{value}"),
        }
    }
}

/// Text a pattern is matched against.
///
/// Null and empty containers read as empty text so a field left blank in a
/// YAML recipe (`Copyright:` or `Github: []`) fails "not blank" checks.
fn string_form(value: &Value, path: &KeyPath) -> Result<String, CheckFault> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Null => Ok(String::new()),
        Value::Array(items) if items.is_empty() => Ok(String::new()),
        Value::Object(map) if map.is_empty() => Ok(String::new()),
        other => serde_json::to_string(other).map_err(|source| CheckFault::RenderValue {
            path: path.clone(),
            source,
        }),
    }
}
