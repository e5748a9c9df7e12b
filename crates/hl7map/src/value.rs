//! Result mapping produced by the converter
//!
//! A converted message is a tree of [`Object`]s whose leaves are strings.
//! Repeated sibling names become [`Array`]s. Keys keep their first-seen
//! order; sorting happens only at serialization time.

use indexmap::map::{IntoIter, Iter, Keys, Values};
use indexmap::IndexMap;
use std::ops::Index;

/// A converted node: leaf text, a sequence of repeated siblings, or a mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Literal leaf text
    String(String),
    /// Values of siblings that shared a key, in document order
    Array(Array),
    /// Mapping from chosen names to converted children
    Object(Object),
}

impl Value {
    /// Returns true if this value is a string
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if this value is an array
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    /// Returns true if this value is an object
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// Returns the string value if this is a string, None otherwise
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array if this is an array, None otherwise
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the object if this is an object, None otherwise
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Follow a chain of object keys, e.g. `["MSH", "MESSAGE_CONTROL_ID"]`
    ///
    /// Stops at the first missing key or non-object value.
    pub fn get_path<'a, I>(&self, path: I) -> Option<&Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter()
            .try_fold(self, |current, key| current.as_object()?.get(key))
    }

    /// Number of string leaves reachable from this value
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::String(_) => 1,
            Self::Array(arr) => arr.iter().map(Self::leaf_count).sum(),
            Self::Object(obj) => obj.values().map(Self::leaf_count).sum(),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Self::Array(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::Array(Array(values))
    }
}

/// An order-preserving object (map of string keys to values)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object(pub(crate) IndexMap<String, Value>);

impl Object {
    /// Creates a new empty object
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Creates a new object with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts a key-value pair, returning the previous value if the key existed
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over key-value pairs in insertion order
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns the entries ordered by key
    pub fn sorted_iter(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }
}

impl Index<&str> for Object {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, key: &str) -> &Self::Output {
        &self.0[key]
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(map: IndexMap<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}

/// An array of values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Array(pub(crate) Vec<Value>);

impl Array {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}

impl Index<usize> for Array {
    type Output = Value;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(Vec::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_methods() {
        assert!(Value::from("x").is_string());
        assert!(Value::Array(Array::new()).is_array());
        assert!(Value::Object(Object::new()).is_object());
        assert!(!Value::from("x").is_object());
    }

    #[test]
    fn test_object_order_preservation() {
        let mut obj = Object::new();
        obj.insert("PID", "b");
        obj.insert("MSH", "a");
        obj.insert("EVN", "c");

        let keys: Vec<_> = obj.keys().collect();
        assert_eq!(keys, vec!["PID", "MSH", "EVN"]);

        let sorted: Vec<_> = obj.sorted_iter().into_iter().map(|(k, _)| k).collect();
        assert_eq!(sorted, vec!["EVN", "MSH", "PID"]);
    }

    #[test]
    fn test_get_path() {
        let mut inner = Object::new();
        inner.insert("MESSAGE_CONTROL_ID", "MSG0001");
        let mut root = Object::new();
        root.insert("MSH", inner);
        let value = Value::Object(root);

        let id = value
            .get_path(["MSH", "MESSAGE_CONTROL_ID"])
            .and_then(Value::as_string);
        assert_eq!(id, Some("MSG0001"));
        assert!(value.get_path(["MSH", "MISSING"]).is_none());
        assert!(value
            .get_path(["MSH", "MESSAGE_CONTROL_ID", "DEEPER"])
            .is_none());
    }

    #[test]
    fn test_leaf_count() {
        let mut obj = Object::new();
        obj.insert("A", vec![Value::from("1"), Value::from("2")]);
        obj.insert("B", "3");
        assert_eq!(Value::Object(obj).leaf_count(), 3);
        assert_eq!(Value::from("solo").leaf_count(), 1);
    }

    #[test]
    fn test_array_basics() {
        let mut arr = Array::new();
        assert!(arr.is_empty());
        arr.push("first");
        arr.push("second");
        assert_eq!(arr.len(), 2);
        assert_eq!(arr[1], Value::from("second"));
        assert_eq!(arr.get(2), None);
    }
}
