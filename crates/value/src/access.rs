//! Typed accessors
//!
//! Each accessor answers only for its own variant and returns `None`
//! otherwise. Accessors never fail, never allocate new nodes and never
//! change the value they read.

use crate::construct::nanos_to_timestamp;
use crate::value::TaggedValue;
use std::collections::HashMap;
use std::os::fd::OwnedFd;
use std::time::SystemTime;
use uuid::Uuid;

impl TaggedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, TaggedValue::Null(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TaggedValue::Bool(h) => h.object().bool_value(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TaggedValue::Int64(h) => h.object().int64_value(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            TaggedValue::UInt64(h) => h.object().uint64_value(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TaggedValue::Double(h) => h.object().double_value(),
            _ => None,
        }
    }

    /// String contents, or `None` if the stored bytes are not valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TaggedValue::String(h) => {
                let bytes = h.object().string_bytes()?;
                match std::str::from_utf8(bytes) {
                    Ok(s) => Some(s),
                    Err(e) => {
                        tracing::debug!(error = %e, len = bytes.len(), "string payload is not UTF-8");
                        None
                    }
                }
            }
            _ => None,
        }
    }

    /// Byte buffer contents; an empty buffer is `Some(&[])`
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            TaggedValue::Bytes(h) => h.object().data_bytes(),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<SystemTime> {
        match self {
            TaggedValue::Timestamp(h) => nanos_to_timestamp(h.object().date_value()?),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            TaggedValue::Uuid(h) => h.object().uuid_bytes().map(|b| Uuid::from_bytes(*b)),
            _ => None,
        }
    }

    /// A fresh duplicate of the stored descriptor, owned by the caller
    ///
    /// The value keeps its own descriptor; closing the returned one affects
    /// nothing else. `None` for other kinds, or if duplication is refused.
    pub fn dup_fd(&self) -> Option<OwnedFd> {
        match self {
            TaggedValue::ResourceHandle(h) => match h.object().fd_dup()? {
                Ok(fd) => Some(fd),
                Err(e) => {
                    tracing::debug!(error = %e, "descriptor duplication refused");
                    None
                }
            },
            _ => None,
        }
    }

    /// Elements in stored order, each classified afresh
    pub fn as_array(&self) -> Option<Vec<TaggedValue>> {
        match self {
            TaggedValue::Array(h) => Some(
                h.object()
                    .array_elements()?
                    .iter()
                    .cloned()
                    .map(TaggedValue::classify)
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Entries keyed by UTF-8 key; enumeration order is unspecified
    ///
    /// Entries whose key is not valid UTF-8 are left out.
    pub fn as_map(&self) -> Option<HashMap<String, TaggedValue>> {
        let TaggedValue::Map(h) = self else {
            return None;
        };
        let entries = h.object().dictionary_entries()?;
        let mut result = HashMap::new();
        for (key, value) in entries {
            match std::str::from_utf8(key) {
                Ok(key) => {
                    result.insert(key.to_string(), TaggedValue::classify(value.clone()));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping dictionary entry with non-UTF-8 key");
                }
            }
        }
        Some(result)
    }

    /// Element count for arrays and maps
    pub fn len(&self) -> Option<usize> {
        match self {
            TaggedValue::Array(h) | TaggedValue::Map(h) => h.object().count(),
            _ => None,
        }
    }

    /// Look up one array element without materializing the rest
    pub fn get_index(&self, index: usize) -> Option<TaggedValue> {
        match self {
            TaggedValue::Array(h) => h
                .object()
                .array_get(index)
                .cloned()
                .map(TaggedValue::classify),
            _ => None,
        }
    }

    /// Look up one map entry without materializing the rest
    pub fn get_key(&self, key: &str) -> Option<TaggedValue> {
        match self {
            TaggedValue::Map(h) => h
                .object()
                .dictionary_get(key)
                .cloned()
                .map(TaggedValue::classify),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xobj_core::{ArrayBuilder, DictionaryBuilder, Object};

    #[test]
    fn test_tag_mismatch_is_absence() {
        let value = TaggedValue::from(true);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_i64(), None);
        assert_eq!(value.as_u64(), None);
        assert_eq!(value.as_f64(), None);
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_bytes(), None);
        assert!(value.as_timestamp().is_none());
        assert!(value.as_uuid().is_none());
        assert!(value.dup_fd().is_none());
        assert!(value.as_array().is_none());
        assert!(value.as_map().is_none());
        assert!(value.len().is_none());
        assert!(!value.is_null());
    }

    #[test]
    fn test_invalid_utf8_string_is_absence() {
        let value = TaggedValue::classify(Object::string_from_bytes(&[0x61, 0xc3, 0x28]));
        assert!(matches!(value, TaggedValue::String(_)));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_empty_bytes_are_present() {
        let value = TaggedValue::from(&[0u8; 0][..]);
        assert_eq!(value.as_bytes(), Some(&[][..]));
    }

    #[test]
    fn test_array_accessor_is_restartable() {
        let value = TaggedValue::array([TaggedValue::from(1), TaggedValue::from("two")]);
        let first = value.as_array().unwrap();
        let second = value.as_array().unwrap();
        assert_eq!(first, second);
        assert_eq!(first[1].as_str(), Some("two"));
    }

    #[test]
    fn test_map_skips_non_utf8_keys() {
        let mut builder = DictionaryBuilder::new();
        builder.insert("ok", Object::int64(1));
        builder.insert_bytes(&[0xff, 0xfe], Object::int64(2));
        let value = TaggedValue::classify(builder.finish());

        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["ok"].as_i64(), Some(1));
        assert_eq!(value.len(), Some(2));
    }

    #[test]
    fn test_point_lookups() {
        let mut builder = ArrayBuilder::new();
        builder.append(Object::bool(false));
        let value = TaggedValue::classify(builder.finish());
        assert_eq!(value.get_index(0).and_then(|v| v.as_bool()), Some(false));
        assert!(value.get_index(1).is_none());
        assert!(value.get_key("x").is_none());

        let map = TaggedValue::map([("x", TaggedValue::from(2.5))]);
        assert_eq!(map.get_key("x").and_then(|v| v.as_f64()), Some(2.5));
        assert!(map.get_index(0).is_none());
    }

    #[test]
    fn test_null_presence() {
        assert!(TaggedValue::null().is_null());
        assert!(TaggedValue::null().as_bool().is_none());
    }
}
