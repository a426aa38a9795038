//! Host values that can become tagged values
//!
//! `Native` is the closed set of host-side kinds a [`TaggedValue`] can be
//! built from. Generic construction matches on it exhaustively, so there is
//! no "unsupported kind" case to handle at runtime.

use crate::construct::Bytes;
use crate::error::ValueError;
use crate::value::{Handle, TaggedValue};
use std::collections::HashMap;
use std::fs::File;
use std::os::fd::OwnedFd;
use std::time::SystemTime;
use uuid::Uuid;
use xobj_core::{ArrayBuilder, DictionaryBuilder};

#[derive(Debug)]
pub enum Native {
    Null,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    String(String),
    Double(f64),
    Bytes(Vec<u8>),
    Array(Vec<Native>),
    Map(HashMap<String, Native>),
    Timestamp(SystemTime),
    ResourceHandle(OwnedFd),
    Uuid(Uuid),
    /// An already tagged value, passed through unchanged
    Value(TaggedValue),
}

impl TaggedValue {
    /// Convert any representable host value, recursing into containers
    ///
    /// Only descriptor duplication can fail; the first refusal aborts the
    /// whole conversion and nothing partially built is returned.
    pub fn from_native(value: Native) -> Result<Self, ValueError> {
        Ok(match value {
            Native::Null => TaggedValue::null(),
            Native::Bool(b) => TaggedValue::from(b),
            Native::Int64(n) => TaggedValue::from(n),
            Native::UInt64(n) => TaggedValue::from(n),
            Native::String(s) => TaggedValue::from(s.as_str()),
            Native::Double(d) => TaggedValue::from(d),
            Native::Bytes(bytes) => TaggedValue::from(&bytes[..]),
            Native::Array(items) => TaggedValue::try_from(items)?,
            Native::Map(entries) => TaggedValue::try_from(entries)?,
            Native::Timestamp(t) => TaggedValue::from(t),
            Native::ResourceHandle(fd) => TaggedValue::from_fd(&fd)?,
            Native::Uuid(u) => TaggedValue::from(u),
            Native::Value(v) => v,
        })
    }
}

impl TryFrom<Native> for TaggedValue {
    type Error = ValueError;

    fn try_from(value: Native) -> Result<Self, Self::Error> {
        TaggedValue::from_native(value)
    }
}

impl TryFrom<Vec<Native>> for TaggedValue {
    type Error = ValueError;

    fn try_from(items: Vec<Native>) -> Result<Self, Self::Error> {
        let mut builder = ArrayBuilder::with_capacity(items.len());
        for item in items {
            builder.append(TaggedValue::from_native(item)?.into_raw());
        }
        Ok(TaggedValue::Array(Handle::new(builder.finish())))
    }
}

impl TryFrom<HashMap<String, Native>> for TaggedValue {
    type Error = ValueError;

    fn try_from(entries: HashMap<String, Native>) -> Result<Self, Self::Error> {
        let mut builder = DictionaryBuilder::with_capacity(entries.len());
        for (key, value) in entries {
            builder.insert(&key, TaggedValue::from_native(value)?.into_raw());
        }
        Ok(TaggedValue::Map(Handle::new(builder.finish())))
    }
}

impl From<()> for Native {
    fn from(_: ()) -> Self {
        Native::Null
    }
}

impl From<bool> for Native {
    fn from(value: bool) -> Self {
        Native::Bool(value)
    }
}

impl From<i64> for Native {
    fn from(value: i64) -> Self {
        Native::Int64(value)
    }
}

impl From<i32> for Native {
    fn from(value: i32) -> Self {
        Native::Int64(i64::from(value))
    }
}

impl From<u64> for Native {
    fn from(value: u64) -> Self {
        Native::UInt64(value)
    }
}

impl From<f64> for Native {
    fn from(value: f64) -> Self {
        Native::Double(value)
    }
}

impl From<&str> for Native {
    fn from(value: &str) -> Self {
        Native::String(value.to_string())
    }
}

impl From<String> for Native {
    fn from(value: String) -> Self {
        Native::String(value)
    }
}

impl From<Bytes> for Native {
    fn from(value: Bytes) -> Self {
        Native::Bytes(value.0)
    }
}

impl From<&[u8]> for Native {
    fn from(value: &[u8]) -> Self {
        Native::Bytes(value.to_vec())
    }
}

impl From<Vec<Native>> for Native {
    fn from(value: Vec<Native>) -> Self {
        Native::Array(value)
    }
}

impl From<HashMap<String, Native>> for Native {
    fn from(value: HashMap<String, Native>) -> Self {
        Native::Map(value)
    }
}

impl From<SystemTime> for Native {
    fn from(value: SystemTime) -> Self {
        Native::Timestamp(value)
    }
}

impl From<OwnedFd> for Native {
    fn from(value: OwnedFd) -> Self {
        Native::ResourceHandle(value)
    }
}

impl From<File> for Native {
    fn from(value: File) -> Self {
        Native::ResourceHandle(OwnedFd::from(value))
    }
}

impl From<Uuid> for Native {
    fn from(value: Uuid) -> Self {
        Native::Uuid(value)
    }
}

impl From<TaggedValue> for Native {
    fn from(value: TaggedValue) -> Self {
        Native::Value(value)
    }
}
