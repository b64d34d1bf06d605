//! String-keyed maps.

use super::Codec;
use crate::error::{DecodeError, EncodeError};
use crate::value::HostValue;

/// Map from unique string keys to `T`, iterated in insertion order.
///
/// On the wire it is an object whose own enumerable properties are the entries.
/// Decoding follows the host's enumeration order; encoding follows insertion
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<T> {
    entries: Vec<(String, T)>,
}

impl<T> Default for Record<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Record<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Record<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl<T: Codec> Codec for Record<T> {
    const EXPECTED: &'static str = "object";

    fn probe<V: HostValue>(value: &V) -> bool {
        value.is_object()
    }

    fn decode<V: HostValue>(value: &V) -> Result<Self, DecodeError> {
        if !value.is_object() {
            return Err(super::mismatch::<Self, V>(value));
        }
        let mut record = Record::new();
        for key in value.own_keys() {
            let entry = super::property(value, &key);
            let decoded = T::decode(&entry).map_err(|e| e.at_key(key.as_str()))?;
            record.insert(key, decoded);
        }
        Ok(record)
    }

    fn encode<V: HostValue>(&self) -> Result<V, EncodeError> {
        let mut object = V::new_object();
        for (key, value) in self.iter() {
            let encoded = value.encode::<V>().map_err(|e| e.at_key(key))?;
            object
                .set_property(key, encoded)
                .map_err(|e| EncodeError::from(e).at_key(key))?;
        }
        Ok(object)
    }
}
