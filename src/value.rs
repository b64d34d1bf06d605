//! Dynamic Values
//!
//! The codec never talks to a host runtime directly. Everything it needs from the
//! host is the capability set in [`HostValue`], implemented by one adapter per host
//! environment. [`Value`] is the in-memory adapter: transports that carry plain data
//! use it, and so do the tests.

use crate::error::HostError;
use std::fmt;
use std::sync::Arc;

/// Host runtime capabilities consumed by the codec.
///
/// Accessors return owned handles because a foreign runtime generally cannot lend
/// out references into its heap.
pub trait HostValue: Clone + fmt::Debug {
    /// The absent/undefined sentinel.
    fn undefined() -> Self;
    fn null() -> Self;
    fn from_bool(value: bool) -> Self;
    fn from_f64(value: f64) -> Self;
    fn from_string(value: String) -> Self;
    fn new_array(items: Vec<Self>) -> Self;
    fn new_object() -> Self;
    fn from_binary(binary: OpaqueBinary) -> Self;

    fn is_undefined(&self) -> bool;
    fn is_null(&self) -> bool;
    fn as_bool(&self) -> Option<bool>;
    /// Numeric value, whatever the host's internal representation (int or double).
    fn as_f64(&self) -> Option<f64>;
    /// Native string contents. Boxed or wrapped strings do not count.
    fn as_string(&self) -> Option<String>;
    fn is_array(&self) -> bool;
    fn array_items(&self) -> Option<Vec<Self>>;
    /// True for plain objects: not null, not an array, not a binary object.
    fn is_object(&self) -> bool;
    /// The "is this an opaque binary object" predicate.
    fn as_binary(&self) -> Option<OpaqueBinary>;
    fn get_property(&self, key: &str) -> Option<Self>;
    fn set_property(&mut self, key: &str, value: Self) -> Result<(), HostError>;
    /// Own enumerable keys in host enumeration order.
    fn own_keys(&self) -> Vec<String>;

    fn is_bool(&self) -> bool {
        self.as_bool().is_some()
    }

    fn is_number(&self) -> bool {
        self.as_f64().is_some()
    }

    fn is_string(&self) -> bool {
        self.as_string().is_some()
    }

    /// Short type label used in decode errors.
    fn type_name(&self) -> &'static str {
        if self.is_undefined() {
            "undefined"
        } else if self.is_null() {
            "null"
        } else if self.is_bool() {
            "boolean"
        } else if self.is_number() {
            "number"
        } else if self.is_string() {
            "string"
        } else if self.is_array() {
            "array"
        } else if self.as_binary().is_some() {
            "binary"
        } else {
            "object"
        }
    }
}

/// Which kind of binary object the host handed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    /// A raw byte buffer.
    Buffer,
    /// A typed view over a byte buffer.
    View,
}

/// Binary payload carried through the codec without being inspected.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OpaqueBinary {
    kind: BinaryKind,
    data: Arc<[u8]>,
}

impl OpaqueBinary {
    pub fn buffer(data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            kind: BinaryKind::Buffer,
            data: data.into(),
        }
    }

    pub fn view(data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            kind: BinaryKind::View,
            data: data.into(),
        }
    }

    pub fn kind(&self) -> BinaryKind {
        self.kind
    }

    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Raw bytes, for host adapters. The codec itself never reads them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for OpaqueBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueBinary")
            .field("kind", &self.kind)
            .field("byte_length", &self.data.len())
            .finish()
    }
}

/// In-memory dynamic value.
///
/// Numbers keep the engine-style split between small integers and doubles;
/// [`HostValue::as_f64`] folds both into one numeric domain.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
    Binary(OpaqueBinary),
}

/// Property bag preserving insertion order. Setting an existing key replaces
/// its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl Value {
    /// Build an object value from `(key, value)` pairs, keeping their order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().collect())
    }

    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(items.into_iter().collect())
    }

    /// Number normalized the way script engines store it: integral values that
    /// fit in an `i32` (excluding `-0`) become `Int`, everything else `Double`.
    pub fn number(value: f64) -> Self {
        let is_small_int = value.fract() == 0.0
            && value >= f64::from(i32::MIN)
            && value <= f64::from(i32::MAX)
            && !(value == 0.0 && value.is_sign_negative());
        if is_small_int {
            Value::Int(value as i32)
        } else {
            Value::Double(value)
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// JSON rendering for inspection. Undefined properties are dropped,
    /// non-finite numbers become `null`, and binary objects are summarized by
    /// length only.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::{json, Value as Json};
        match self {
            Value::Undefined | Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => json!(i),
            Value::Double(d) => serde_json::Number::from_f64(*d)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(object) => Json::Object(
                object
                    .iter()
                    .filter(|(_, value)| !matches!(value, Value::Undefined))
                    .map(|(key, value)| (key.to_string(), value.to_json()))
                    .collect(),
            ),
            Value::Binary(binary) => json!({
                "binary": match binary.kind() {
                    BinaryKind::Buffer => "buffer",
                    BinaryKind::View => "view",
                },
                "byteLength": binary.byte_length(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl From<OpaqueBinary> for Value {
    fn from(binary: OpaqueBinary) -> Self {
        Value::Binary(binary)
    }
}

impl HostValue for Value {
    fn undefined() -> Self {
        Value::Undefined
    }

    fn null() -> Self {
        Value::Null
    }

    fn from_bool(value: bool) -> Self {
        Value::Bool(value)
    }

    fn from_f64(value: f64) -> Self {
        Value::number(value)
    }

    fn from_string(value: String) -> Self {
        Value::String(value)
    }

    fn new_array(items: Vec<Self>) -> Self {
        Value::Array(items)
    }

    fn new_object() -> Self {
        Value::Object(Object::new())
    }

    fn from_binary(binary: OpaqueBinary) -> Self {
        Value::Binary(binary)
    }

    fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(f64::from(*i)),
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }

    fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    fn array_items(&self) -> Option<Vec<Self>> {
        match self {
            Value::Array(items) => Some(items.clone()),
            _ => None,
        }
    }

    fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    fn as_binary(&self) -> Option<OpaqueBinary> {
        match self {
            Value::Binary(binary) => Some(binary.clone()),
            _ => None,
        }
    }

    fn get_property(&self, key: &str) -> Option<Self> {
        self.as_object()?.get(key).cloned()
    }

    fn set_property(&mut self, key: &str, value: Self) -> Result<(), HostError> {
        match self {
            Value::Object(object) => {
                object.insert(key, value);
                Ok(())
            }
            other => Err(HostError::NotAnObject {
                key: key.to_string(),
                target: other.type_name(),
            }),
        }
    }

    fn own_keys(&self) -> Vec<String> {
        self.as_object()
            .map(|object| object.keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }
}
