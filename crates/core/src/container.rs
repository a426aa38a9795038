//! Array and dictionary nodes
//!
//! Containers are created empty, filled through a builder, then frozen into
//! an immutable [`Object`]. Because children must already exist when they
//! are added, a container can never contain itself.

use crate::object::{Object, Payload};
use std::collections::HashMap;

/// Builds an array node, preserving append order
#[derive(Debug, Default)]
pub struct ArrayBuilder {
    elements: Vec<Object>,
}

impl ArrayBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, value: Object) {
        self.elements.push(value);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn finish(self) -> Object {
        Object::from_payload(Payload::Array(self.elements.into_boxed_slice()))
    }
}

impl FromIterator<Object> for ArrayBuilder {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

/// Builds a dictionary node
///
/// Inserting an existing key replaces its value (last write wins).
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    entries: HashMap<Box<[u8]>, Object>,
}

impl DictionaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Insert under a UTF-8 key, returning the value it replaced
    pub fn insert(&mut self, key: &str, value: Object) -> Option<Object> {
        self.insert_bytes(key.as_bytes(), value)
    }

    /// Insert under a raw byte key
    ///
    /// Keys are length-delimited, so any byte sequence is accepted; readers
    /// decide what to do with keys that are not UTF-8.
    pub fn insert_bytes(&mut self, key: &[u8], value: Object) -> Option<Object> {
        self.entries.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn finish(self) -> Object {
        Object::from_payload(Payload::Dictionary(self.entries))
    }
}

impl Object {
    /// Child nodes of an array, in stored order
    pub fn array_elements(&self) -> Option<&[Object]> {
        match self.payload() {
            Payload::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn array_get(&self, index: usize) -> Option<&Object> {
        self.array_elements()?.get(index)
    }

    /// Entries of a dictionary in unspecified order
    pub fn dictionary_entries(&self) -> Option<impl Iterator<Item = (&[u8], &Object)>> {
        match self.payload() {
            Payload::Dictionary(entries) => Some(entries.iter().map(|(k, v)| (&k[..], v))),
            _ => None,
        }
    }

    pub fn dictionary_get(&self, key: &str) -> Option<&Object> {
        match self.payload() {
            Payload::Dictionary(entries) => entries.get(key.as_bytes()),
            _ => None,
        }
    }

    /// Number of children for containers, `None` for every other kind
    pub fn count(&self) -> Option<usize> {
        match self.payload() {
            Payload::Array(elements) => Some(elements.len()),
            Payload::Dictionary(entries) => Some(entries.len()),
            _ => None,
        }
    }
}
