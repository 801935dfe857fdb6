//! # Value Model: Decoded Payload Tree
//!
//! Defines the closed value tree the validation engine inspects. A request
//! body arrives already decoded; this module gives it a single, tagged shape:
//! `Null`, `Bool`, `Int`, `Float`, `String`, or `Array`.
//!
//! ## Containers
//!
//! There is one container type, [`Array`], an insertion-ordered mapping from
//! [`Key`] to [`Value`]. Whether a container is a *list* (keys exactly
//! `0..n-1`) or an *object* (every key textual) is decided at runtime by the
//! classifiers in [`crate::classify`], never by the static type. Decoding
//! `{"0": "a", "1": "b"}` and `["a", "b"]` yields the same container.
//!
//! ## Key Normalization
//!
//! A textual key that is the canonical decimal spelling of an `i64`
//! (`"0"`, `"42"`, `"-7"`) is stored as [`Key::Index`]. Lookups go through
//! the same normalization, so `payload.get("0")` finds an index key.
//! Non-canonical spellings (`"01"`, `"+1"`, `"-0"`, `"1.0"`) stay textual.
//!
//! ## Strict Equality
//!
//! `Value` equality is type-and-value strict: `Int(1) != Float(1.0)` and
//! `String("1") != Int(1)`. Container equality also requires the same key
//! order.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Key of a container entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key: list positions and canonical numeric object keys.
    Index(i64),
    /// Any other textual key.
    Name(String),
}

impl Key {
    /// Build a key from its textual form, normalizing canonical integers.
    pub fn from_name(name: &str) -> Self {
        if is_canonical_integer(name) {
            if let Ok(index) = name.parse::<i64>() {
                return Key::Index(index);
            }
        }
        Key::Name(name.to_string())
    }

    /// Returns the integer position when this is an index key.
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }
}

fn is_canonical_integer(s: &str) -> bool {
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    !(negative && digits == "0")
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::from_name(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::from_name(&name)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Insertion-ordered key/value container backing both lists and objects.
#[derive(Debug, Clone, Default)]
pub struct Array {
    entries: IndexMap<Key, Value>,
}

/// A decoded request body.
pub type Payload = Array;

impl Array {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container keyed `0..n-1` from a sequence of values.
    pub fn from_list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        values
            .into_iter()
            .enumerate()
            .map(|(position, value)| (Key::Index(position as i64), value))
            .collect()
    }

    /// Insert an entry, returning the previous value under the same key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up an entry by its textual key (normalized like decoded keys).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&Key::from_name(key))
    }

    /// Look up an entry by an already-built key.
    pub fn get_key(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Whether an entry exists under the textual key, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&Key::from_name(key))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// True when the keys are exactly `0..n-1` in order.
    pub fn is_sequential(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(position, key)| *key == Key::Index(position as i64))
    }

    /// Convert back into a `serde_json::Value`.
    ///
    /// Sequential containers become JSON arrays; anything else becomes a
    /// JSON object with stringified keys.
    pub fn to_json(&self) -> serde_json::Value {
        if self.is_sequential() {
            serde_json::Value::Array(self.values().map(Value::to_json).collect())
        } else {
            serde_json::Value::Object(
                self.iter()
                    .map(|(key, value)| (key.to_string(), value.to_json()))
                    .collect(),
            )
        }
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl FromIterator<(Key, Value)> for Array {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A decoded JSON value.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` / `false`.
    Bool(bool),
    /// A JSON number representable as `i64`.
    Int(i64),
    /// Any other JSON number.
    Float(f64),
    /// A JSON string.
    String(String),
    /// A JSON array or object.
    Array(Array),
}

impl Value {
    /// Human-readable type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the container, if this is an array/object.
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Take the container, if this is an array/object.
    pub fn into_array(self) -> Option<Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Convert back into a `serde_json::Value`. Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(array) => array.to_json(),
        }
    }
}

/// Message rendering: strings print raw, containers print as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Array(array) => write!(f, "{}", array.to_json()),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(Array::from_list(items.into_iter().map(Value::from)))
            }
            serde_json::Value::Object(map) => Value::Array(
                map.into_iter()
                    .map(|(key, value)| (Key::from(key), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}
