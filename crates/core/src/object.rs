//! Object nodes
//!
//! An `Object` is a shared handle to one immutable node. The node's tag is
//! derived from its payload, so a node can never claim a kind whose payload
//! it does not carry.
//!
//! # Ownership
//!
//! Nodes are reference counted. Cloning an `Object` retains the node and
//! dropping the last handle releases it, along with any child nodes and any
//! descriptor it owns. No operation mutates a node after creation; containers
//! are assembled with the builders in [`crate::container`] and frozen by
//! `finish()`.

use crate::fd::Descriptor;
use crate::tag::{
    TYPE_ARRAY, TYPE_BOOL, TYPE_DATA, TYPE_DATE, TYPE_DICTIONARY, TYPE_DOUBLE, TYPE_ENDPOINT,
    TYPE_ERROR, TYPE_FD, TYPE_INT64, TYPE_NULL, TYPE_SHMEM, TYPE_STRING, TYPE_UINT64, TYPE_UUID,
    TypeTag,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Node payload, one arm per tag
#[derive(Debug)]
pub(crate) enum Payload {
    Null,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    /// Raw bytes as received; not guaranteed to be UTF-8
    String(Box<[u8]>),
    Double(f64),
    Data(Box<[u8]>),
    Array(Box<[Object]>),
    Dictionary(HashMap<Box<[u8]>, Object>),
    /// Signed count of nanoseconds since 1970-01-01T00:00:00Z
    Date(i64),
    Fd(Descriptor),
    Uuid([u8; 16]),
    Opaque { tag: TypeTag, bytes: Box<[u8]> },
}

/// Shared handle to an immutable tagged node
#[derive(Debug, Clone)]
pub struct Object(Arc<Payload>);

impl Object {
    pub(crate) fn from_payload(payload: Payload) -> Self {
        Object(Arc::new(payload))
    }

    pub(crate) fn payload(&self) -> &Payload {
        &self.0
    }

    /// Runtime type tag of this node
    pub fn type_tag(&self) -> TypeTag {
        match self.payload() {
            Payload::Null => TYPE_NULL,
            Payload::Bool(_) => TYPE_BOOL,
            Payload::Int64(_) => TYPE_INT64,
            Payload::UInt64(_) => TYPE_UINT64,
            Payload::String(_) => TYPE_STRING,
            Payload::Double(_) => TYPE_DOUBLE,
            Payload::Data(_) => TYPE_DATA,
            Payload::Array(_) => TYPE_ARRAY,
            Payload::Dictionary(_) => TYPE_DICTIONARY,
            Payload::Date(_) => TYPE_DATE,
            Payload::Fd(_) => TYPE_FD,
            Payload::Uuid(_) => TYPE_UUID,
            Payload::Opaque { tag, .. } => *tag,
        }
    }

    /// True if both handles refer to the same node
    pub fn ptr_eq(a: &Object, b: &Object) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    // Creation

    pub fn null() -> Self {
        Self::from_payload(Payload::Null)
    }

    pub fn bool(value: bool) -> Self {
        Self::from_payload(Payload::Bool(value))
    }

    pub fn int64(value: i64) -> Self {
        Self::from_payload(Payload::Int64(value))
    }

    pub fn uint64(value: u64) -> Self {
        Self::from_payload(Payload::UInt64(value))
    }

    pub fn double(value: f64) -> Self {
        Self::from_payload(Payload::Double(value))
    }

    pub fn string(value: &str) -> Self {
        Self::from_payload(Payload::String(value.as_bytes().into()))
    }

    /// Create a string node from raw bytes without validating them
    ///
    /// Peers are not required to send valid UTF-8; readers must check.
    pub fn string_from_bytes(bytes: &[u8]) -> Self {
        Self::from_payload(Payload::String(bytes.into()))
    }

    pub fn data(bytes: &[u8]) -> Self {
        Self::from_payload(Payload::Data(bytes.into()))
    }

    /// Create a date node from nanoseconds since the Unix epoch
    pub fn date(nanos: i64) -> Self {
        Self::from_payload(Payload::Date(nanos))
    }

    pub fn uuid(bytes: [u8; 16]) -> Self {
        Self::from_payload(Payload::Uuid(bytes))
    }

    /// Create a node of a transport-only kind
    ///
    /// Returns `None` for tags that have a dedicated constructor.
    pub fn opaque(tag: TypeTag, bytes: &[u8]) -> Option<Self> {
        if !matches!(tag, TYPE_ENDPOINT | TYPE_ERROR | TYPE_SHMEM) {
            return None;
        }
        Some(Self::from_payload(Payload::Opaque {
            tag,
            bytes: bytes.into(),
        }))
    }

    // Extraction

    pub fn is_null(&self) -> bool {
        matches!(self.payload(), Payload::Null)
    }

    pub fn bool_value(&self) -> Option<bool> {
        match self.payload() {
            Payload::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn int64_value(&self) -> Option<i64> {
        match self.payload() {
            Payload::Int64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn uint64_value(&self) -> Option<u64> {
        match self.payload() {
            Payload::UInt64(n) => Some(*n),
            _ => None,
        }
    }

    pub fn double_value(&self) -> Option<f64> {
        match self.payload() {
            Payload::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// Raw bytes of a string node, exactly as stored
    pub fn string_bytes(&self) -> Option<&[u8]> {
        match self.payload() {
            Payload::String(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn data_bytes(&self) -> Option<&[u8]> {
        match self.payload() {
            Payload::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn date_value(&self) -> Option<i64> {
        match self.payload() {
            Payload::Date(nanos) => Some(*nanos),
            _ => None,
        }
    }

    pub fn uuid_bytes(&self) -> Option<&[u8; 16]> {
        match self.payload() {
            Payload::Uuid(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn opaque_bytes(&self) -> Option<&[u8]> {
        match self.payload() {
            Payload::Opaque { bytes, .. } => Some(bytes),
            _ => None,
        }
    }
}
