//! serde interop
//!
//! Lets a tagged value be written to or read from any serde data format,
//! for logging, snapshots and configuration. This is not the transport
//! encoding; descriptors and unrecognized nodes have no portable form and
//! refuse to serialize.
//!
//! # Mapping
//!
//! | Kind      | serde data model                     |
//! |-----------|--------------------------------------|
//! | Null      | unit                                 |
//! | Bool      | bool                                 |
//! | Int64     | i64                                  |
//! | UInt64    | u64                                  |
//! | Double    | f64                                  |
//! | String    | str                                  |
//! | Bytes     | bytes                                |
//! | Timestamp | i64 nanoseconds since the Unix epoch |
//! | Uuid      | hyphenated str                       |
//! | Array     | seq                                  |
//! | Map       | map, keys in sorted order            |
//!
//! Reading goes the other way through the normal constructors. Unsigned
//! integers that fit in `i64` read back as `Int64`, matching integer
//! literals; only larger ones become `UInt64`. Timestamps and UUIDs read
//! back as the integer and string they were written as.

use crate::error::ValueError;
use crate::value::{Kind, TaggedValue};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

fn refuse<E: ser::Error>(error: ValueError) -> E {
    E::custom(error)
}

fn missing<E: ser::Error>(kind: Kind) -> E {
    refuse(ValueError::NotSerializable { kind })
}

impl Serialize for TaggedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = self.raw();
        let kind = self.kind();
        let fail = || missing::<S::Error>(kind);
        match self {
            TaggedValue::Null(_) => serializer.serialize_unit(),
            TaggedValue::Bool(_) => {
                serializer.serialize_bool(self.as_bool().ok_or_else(fail)?)
            }
            TaggedValue::Int64(_) => {
                serializer.serialize_i64(self.as_i64().ok_or_else(fail)?)
            }
            TaggedValue::UInt64(_) => {
                serializer.serialize_u64(self.as_u64().ok_or_else(fail)?)
            }
            TaggedValue::Double(_) => {
                serializer.serialize_f64(self.as_f64().ok_or_else(fail)?)
            }
            TaggedValue::String(_) => serializer.serialize_str(
                self.as_str()
                    .ok_or_else(|| refuse::<S::Error>(ValueError::InvalidString))?,
            ),
            TaggedValue::Bytes(_) => {
                serializer.serialize_bytes(self.as_bytes().ok_or_else(fail)?)
            }
            TaggedValue::Timestamp(_) => {
                serializer.serialize_i64(raw.date_value().ok_or_else(fail)?)
            }
            TaggedValue::Uuid(_) => {
                let u = self.as_uuid().ok_or_else(fail)?;
                serializer.collect_str(&u.hyphenated())
            }
            TaggedValue::Array(_) => {
                let items = self.as_array().ok_or_else(fail)?;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in &items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            TaggedValue::Map(_) => {
                let mut entries: Vec<(String, TaggedValue)> = self
                    .as_map()
                    .ok_or_else(fail)?
                    .into_iter()
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in &entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            TaggedValue::ResourceHandle(_) | TaggedValue::Unrecognized(_) => Err(missing(kind)),
        }
    }
}

struct TaggedValueVisitor;

impl<'de> Visitor<'de> for TaggedValueVisitor {
    type Value = TaggedValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a null, bool, number, string, byte buffer, sequence or string-keyed map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<TaggedValue, E> {
        Ok(TaggedValue::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TaggedValue, E> {
        Ok(TaggedValue::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TaggedValue, E> {
        Ok(match i64::try_from(v) {
            Ok(signed) => TaggedValue::from(signed),
            Err(_) => TaggedValue::from(v),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TaggedValue, E> {
        Ok(TaggedValue::from(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TaggedValue, E> {
        Ok(TaggedValue::from(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<TaggedValue, E> {
        Ok(TaggedValue::from(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<TaggedValue, E> {
        Ok(TaggedValue::null())
    }

    fn visit_unit<E: de::Error>(self) -> Result<TaggedValue, E> {
        Ok(TaggedValue::null())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<TaggedValue, D::Error> {
        TaggedValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<TaggedValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<TaggedValue>()? {
            items.push(item);
        }
        Ok(TaggedValue::array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TaggedValue, A::Error> {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, TaggedValue>()? {
            entries.push((key, value));
        }
        Ok(TaggedValue::map(entries))
    }
}

impl<'de> Deserialize<'de> for TaggedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TaggedValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xobj;
    use std::time::{Duration, UNIX_EPOCH};
    use uuid::Uuid;
    use xobj_core::Object;

    #[test]
    fn test_serialize_nested_sorted() {
        let value = xobj!({"b": 2.5, "a": [1, true, null], "c": "x"});
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"a":[1,true,null],"b":2.5,"c":"x"}"#);
    }

    #[test]
    fn test_serialize_unsigned_and_extremes() {
        assert_eq!(
            serde_json::to_string(&TaggedValue::from(u64::MAX)).unwrap(),
            "18446744073709551615"
        );
        assert_eq!(
            serde_json::to_string(&xobj!(i64::MIN)).unwrap(),
            "-9223372036854775808"
        );
    }

    #[test]
    fn test_serialize_timestamp_and_uuid() {
        let t = UNIX_EPOCH + Duration::from_secs(3);
        assert_eq!(
            serde_json::to_string(&TaggedValue::from(t)).unwrap(),
            "3000000000"
        );
        let u = Uuid::from_u128(1);
        assert_eq!(
            serde_json::to_string(&TaggedValue::from(u)).unwrap(),
            "\"00000000-0000-0000-0000-000000000001\""
        );
    }

    #[test]
    fn test_serialize_bytes_as_sequence_in_json() {
        let value = TaggedValue::from(&[1u8, 2, 3][..]);
        assert_eq!(serde_json::to_string(&value).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_descriptor_refuses_to_serialize() {
        let file = tempfile::tempfile().unwrap();
        let value = xobj!([TaggedValue::from_fd(&file).unwrap()]);
        let err = serde_json::to_string(&value).unwrap_err();
        assert!(err.to_string().contains("fd values cannot be serialized"));
    }

    #[test]
    fn test_invalid_string_refuses_to_serialize() {
        let value = TaggedValue::classify(Object::string_from_bytes(&[0xff]));
        let err = serde_json::to_string(&value).unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_deserialize_kinds() {
        let value: TaggedValue = serde_json::from_str(
            r#"{"n": 5, "neg": -3, "big": 18446744073709551615, "f": 1.5,
                "s": "안녕", "l": [], "z": null, "t": true}"#,
        )
        .unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 8);
        assert_eq!(map["n"].as_i64(), Some(5));
        assert_eq!(map["neg"].as_i64(), Some(-3));
        assert_eq!(map["big"].as_u64(), Some(u64::MAX));
        assert_eq!(map["f"].as_f64(), Some(1.5));
        assert_eq!(map["s"].as_str(), Some("안녕"));
        assert_eq!(map["l"].as_array().map(|l| l.len()), Some(0));
        assert!(map["z"].is_null());
        assert_eq!(map["t"].as_bool(), Some(true));
    }

    #[test]
    fn test_json_round_trip_preserves_structure() {
        let value = xobj!([[1234, true], "more", {"key1": "val1", "key2": -2727}]);
        let json = serde_json::to_string(&value).unwrap();
        let back: TaggedValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_small_unsigned_reads_back_as_signed() {
        let small = TaggedValue::from(5u64);
        let back: TaggedValue =
            serde_json::from_str(&serde_json::to_string(&small).unwrap()).unwrap();
        assert_eq!(back.kind(), Kind::Int64);
        assert_eq!(back.as_i64(), Some(5));
        assert_ne!(back, small);

        let large = TaggedValue::from(u64::MAX);
        let back: TaggedValue =
            serde_json::from_str(&serde_json::to_string(&large).unwrap()).unwrap();
        assert_eq!(back, large);
    }
}
