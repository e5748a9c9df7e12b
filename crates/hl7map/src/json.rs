//! JSON rendering for converted messages

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::convert::{message_to_map, Naming};
use crate::error::{Error, ErrorKind, Result};
use crate::value::{Array, Object, Value};

/// Output layout for [`to_json`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JsonStyle {
    /// Two-space indented output; compact when false
    pub pretty: bool,
    /// Emit object keys in byte order instead of insertion order
    pub sort_keys: bool,
}

impl Default for JsonStyle {
    fn default() -> Self {
        Self {
            pretty: true,
            sort_keys: true,
        }
    }
}

impl JsonStyle {
    /// Single-line output in document order
    pub const fn compact() -> Self {
        Self {
            pretty: false,
            sort_keys: false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(arr) => arr.serialize(serializer),
            Self::Object(obj) => obj.serialize(serializer),
        }
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Object {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Serializes a value with every nested object's keys sorted
struct Sorted<'a>(&'a Value);

impl Serialize for Sorted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0 {
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr.iter() {
                    seq.serialize_element(&Sorted(item))?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj.sorted_iter() {
                    map.serialize_entry(key, &Sorted(value))?;
                }
                map.end()
            }
        }
    }
}

/// Render a value as JSON text
pub fn to_json(value: &Value, style: JsonStyle) -> Result<String> {
    let rendered = match (style.pretty, style.sort_keys) {
        (true, true) => serde_json::to_string_pretty(&Sorted(value)),
        (true, false) => serde_json::to_string_pretty(value),
        (false, true) => serde_json::to_string(&Sorted(value)),
        (false, false) => serde_json::to_string(value),
    };
    rendered.map_err(|e| {
        Error::detached(ErrorKind::Serialize {
            reason: e.to_string(),
        })
    })
}

/// Parse, convert and render one message
pub fn message_to_json(raw: &str, naming: Naming, style: JsonStyle) -> Result<String> {
    let map = message_to_map(raw, naming)?;
    to_json(&Value::Object(map), style)
}
