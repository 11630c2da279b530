use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde_json::Value;

use crate::io::format::{plist, yaml};
use crate::io::{Format, IoError, resolve_format};

/// Reads a recipe document from `path`.
///
/// The file is read into memory and closed before parsing starts. The
/// document must be a dictionary at the top level.
pub fn read_document(path: &Path) -> Result<Value, IoError> {
    let bytes = fs::read(path)?;
    parse_document(&bytes, resolve_format(path))
}

pub fn parse_document(bytes: &[u8], format: Format) -> Result<Value, IoError> {
    let value = match format {
        Format::Plist => plist::read_plist(Cursor::new(bytes))?,
        Format::Yaml => yaml::read_yaml(bytes)?,
    };
    if !value.is_object() {
        return Err(IoError::NotADictionary {
            found: value_kind(&value),
        });
    }
    Ok(value)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "dictionary",
    }
}
