pub mod expected;

use std::fmt;

use serde_json::Value;

use crate::domain::error::CheckFault;
use crate::domain::key_path::KeyPath;
use crate::domain::report::{Severity, Verdict};

pub use expected::{Expected, NOT_BLANK};

/// Values that can be judged true or false by [`assert_true`].
pub trait Truthy: fmt::Display {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

/// Empty strings, collections and dictionaries are false, as are `null`,
/// `false` and zero.
impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(flag) => *flag,
            Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
            Value::String(text) => !text.is_empty(),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }
}

pub fn assert_true<T: Truthy + ?Sized>(expression: &T, severity: Severity) -> Verdict {
    Verdict::evaluate(
        expression.is_truthy(),
        severity,
        format!("{expression} is not true"),
    )
}

/// Asserts that `key_path` resolves inside the nested dictionary `document`.
///
/// Every key but the last must lead to a dictionary. When `expected` is
/// given the final value must also match it. An empty document never
/// passes.
pub fn assert_dict_contains(
    document: &Value,
    key_path: &KeyPath,
    expected: Option<&Expected>,
    severity: Severity,
) -> Result<Verdict, CheckFault> {
    let Some((last, parents)) = key_path.keys().split_last() else {
        return Err(CheckFault::EmptyKeyPath);
    };
    let root = match document.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => {
            return Ok(Verdict::evaluate(
                false,
                severity,
                format!("Key {key_path} not found: recipe is empty"),
            ));
        }
    };

    let mut current = root;
    for (index, key) in parents.iter().enumerate() {
        match current.get(key) {
            Some(Value::Object(next)) => current = next,
            Some(_) => {
                return Ok(Verdict::evaluate(
                    false,
                    severity,
                    format!(
                        "Key {key_path} not found: {} is not a dictionary",
                        key_path.prefix(index)
                    ),
                ));
            }
            None => {
                return Ok(Verdict::evaluate(
                    false,
                    severity,
                    format!("Key {key_path} not found"),
                ));
            }
        }
    }

    let Some(value) = current.get(last) else {
        return Ok(Verdict::evaluate(
            false,
            severity,
            format!("Key {key_path} not found"),
        ));
    };

    match expected {
        None => Ok(Verdict::pass()),
        Some(expected) => {
            let matched = expected.matches(value, key_path)?;
            Ok(Verdict::evaluate(
                matched,
                severity,
                format!("Key {key_path} found but does not match expected value {expected}"),
            ))
        }
    }
}
