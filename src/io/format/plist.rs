use std::io::{Read, Seek};
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Number, Value};

use crate::io::IoError;

/// Reads an XML or binary property list into the document model.
pub fn read_plist<R: Read + Seek>(reader: R) -> Result<Value, IoError> {
    let value = plist::Value::from_reader(reader)?;
    Ok(plist_to_json(value))
}

fn plist_to_json(value: plist::Value) -> Value {
    match value {
        plist::Value::Dictionary(dict) => {
            let object: Map<String, Value> = dict
                .into_iter()
                .map(|(key, value)| (key, plist_to_json(value)))
                .collect();
            Value::Object(object)
        }
        plist::Value::Array(items) => Value::Array(items.into_iter().map(plist_to_json).collect()),
        plist::Value::Boolean(flag) => Value::Bool(flag),
        plist::Value::String(text) => Value::String(text),
        plist::Value::Integer(integer) => integer
            .as_signed()
            .map(Value::from)
            .or_else(|| integer.as_unsigned().map(Value::from))
            .unwrap_or(Value::Null),
        plist::Value::Real(real) => Number::from_f64(real)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        plist::Value::Date(date) => {
            let utc: DateTime<Utc> = SystemTime::from(date).into();
            Value::String(utc.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        plist::Value::Data(bytes) => Value::Array(bytes.into_iter().map(Value::from).collect()),
        plist::Value::Uid(uid) => Value::from(uid.get()),
        _ => Value::Null,
    }
}
