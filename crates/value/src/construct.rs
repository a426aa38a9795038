//! Construction from host values
//!
//! Every constructor allocates exactly one new node (containers allocate one
//! node for themselves; their children are built by their own constructors)
//! and returns it already classified.
//!
//! # Timestamps
//!
//! Dates are stored as a signed count of nanoseconds since
//! 1970-01-01T00:00:00Z. Conversion is done in integer arithmetic, so any
//! `SystemTime` within roughly ±292 years of the epoch survives a round trip
//! exactly; times outside that range saturate.

use crate::error::ValueError;
use crate::value::{Handle, TaggedValue};
use std::collections::HashMap;
use std::ops::Deref;
use std::os::fd::AsFd;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;
use xobj_core::{ArrayBuilder, DictionaryBuilder, Object};

/// Opaque byte buffer
///
/// Wrapping bytes keeps `Vec<u8>` from being confused with an array of
/// small integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

pub(crate) fn timestamp_to_nanos(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_nanos()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_nanos())
            .map(|n| -n)
            .unwrap_or(i64::MIN),
    }
}

pub(crate) fn nanos_to_timestamp(nanos: i64) -> Option<SystemTime> {
    let offset = Duration::from_nanos(nanos.unsigned_abs());
    if nanos >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    }
}

impl TaggedValue {
    pub fn null() -> Self {
        TaggedValue::Null(Handle::new(Object::null()))
    }

    /// Wrap a duplicate of `source` in a descriptor value
    ///
    /// `source` stays open and owned by the caller. Fails only when the
    /// platform refuses to hand out another descriptor.
    pub fn from_fd<F: AsFd>(source: &F) -> Result<Self, ValueError> {
        match Object::fd_create(source) {
            Ok(object) => Ok(TaggedValue::ResourceHandle(Handle::new(object))),
            Err(e) => {
                tracing::debug!(error = %e, "descriptor duplication refused");
                Err(ValueError::ResourceUnavailable(e))
            }
        }
    }

    /// Build an array, keeping element order
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = TaggedValue>,
    {
        let builder: ArrayBuilder = elements.into_iter().map(TaggedValue::into_raw).collect();
        TaggedValue::Array(Handle::new(builder.finish()))
    }

    /// Build a map; a repeated key keeps the last value given for it
    pub fn map<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, TaggedValue)>,
    {
        let mut builder = DictionaryBuilder::new();
        for (key, value) in entries {
            builder.insert(key.as_ref(), value.into_raw());
        }
        TaggedValue::Map(Handle::new(builder.finish()))
    }

    /// Produce a value with independent ownership of any descriptor
    ///
    /// Descriptor values get a new node holding a new duplicate. Every other
    /// kind is immutable, so the node is simply shared.
    pub fn try_duplicate(&self) -> Result<Self, ValueError> {
        match self.raw().fd_dup() {
            Some(Ok(fd)) => TaggedValue::from_fd(&fd),
            Some(Err(e)) => {
                tracing::debug!(error = %e, "descriptor duplication refused");
                Err(ValueError::ResourceUnavailable(e))
            }
            None => Ok(self.clone()),
        }
    }
}

impl From<()> for TaggedValue {
    fn from(_: ()) -> Self {
        TaggedValue::null()
    }
}

impl From<bool> for TaggedValue {
    fn from(value: bool) -> Self {
        TaggedValue::Bool(Handle::new(Object::bool(value)))
    }
}

impl From<i64> for TaggedValue {
    fn from(value: i64) -> Self {
        TaggedValue::Int64(Handle::new(Object::int64(value)))
    }
}

// Unsuffixed integer literals infer as i32; they are signed 64-bit values.
impl From<i32> for TaggedValue {
    fn from(value: i32) -> Self {
        TaggedValue::from(i64::from(value))
    }
}

impl From<u64> for TaggedValue {
    fn from(value: u64) -> Self {
        TaggedValue::UInt64(Handle::new(Object::uint64(value)))
    }
}

impl From<f64> for TaggedValue {
    fn from(value: f64) -> Self {
        TaggedValue::Double(Handle::new(Object::double(value)))
    }
}

impl From<&str> for TaggedValue {
    fn from(value: &str) -> Self {
        TaggedValue::String(Handle::new(Object::string(value)))
    }
}

impl From<String> for TaggedValue {
    fn from(value: String) -> Self {
        TaggedValue::from(value.as_str())
    }
}

impl From<&[u8]> for TaggedValue {
    fn from(value: &[u8]) -> Self {
        TaggedValue::Bytes(Handle::new(Object::data(value)))
    }
}

impl From<Bytes> for TaggedValue {
    fn from(value: Bytes) -> Self {
        TaggedValue::from(&value[..])
    }
}

impl From<SystemTime> for TaggedValue {
    fn from(value: SystemTime) -> Self {
        TaggedValue::Timestamp(Handle::new(Object::date(timestamp_to_nanos(value))))
    }
}

impl From<Uuid> for TaggedValue {
    fn from(value: Uuid) -> Self {
        TaggedValue::Uuid(Handle::new(Object::uuid(value.into_bytes())))
    }
}

impl<T: Into<TaggedValue>> From<Option<T>> for TaggedValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => TaggedValue::null(),
        }
    }
}

impl From<Vec<TaggedValue>> for TaggedValue {
    fn from(elements: Vec<TaggedValue>) -> Self {
        TaggedValue::array(elements)
    }
}

impl From<HashMap<String, TaggedValue>> for TaggedValue {
    fn from(entries: HashMap<String, TaggedValue>) -> Self {
        TaggedValue::map(entries)
    }
}

impl FromIterator<TaggedValue> for TaggedValue {
    fn from_iter<I: IntoIterator<Item = TaggedValue>>(iter: I) -> Self {
        TaggedValue::array(iter)
    }
}

impl FromIterator<(String, TaggedValue)> for TaggedValue {
    fn from_iter<I: IntoIterator<Item = (String, TaggedValue)>>(iter: I) -> Self {
        TaggedValue::map(iter)
    }
}
