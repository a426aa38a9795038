//! Runtime type tags for object nodes
//!
//! Every node carries exactly one tag, fixed when the node is created.
//! Tags are plain constants: there is no registry and nothing to initialize.

use std::fmt;

/// Runtime type tag of an [`Object`](crate::Object) node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(u8);

pub const TYPE_NULL: TypeTag = TypeTag(0);
pub const TYPE_BOOL: TypeTag = TypeTag(1);
pub const TYPE_INT64: TypeTag = TypeTag(2);
pub const TYPE_UINT64: TypeTag = TypeTag(3);
pub const TYPE_STRING: TypeTag = TypeTag(4);
pub const TYPE_DOUBLE: TypeTag = TypeTag(5);
pub const TYPE_DATA: TypeTag = TypeTag(6);
pub const TYPE_ARRAY: TypeTag = TypeTag(7);
pub const TYPE_DICTIONARY: TypeTag = TypeTag(8);
pub const TYPE_DATE: TypeTag = TypeTag(9);
pub const TYPE_FD: TypeTag = TypeTag(10);
pub const TYPE_UUID: TypeTag = TypeTag(11);

// Transport-only kinds. They travel through containers like any other node
// but carry no payload a host value can be decoded from.
pub const TYPE_ENDPOINT: TypeTag = TypeTag(32);
pub const TYPE_ERROR: TypeTag = TypeTag(33);
pub const TYPE_SHMEM: TypeTag = TypeTag(34);

impl TypeTag {
    /// Stable lowercase name, used in diagnostics and rendering
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "null",
            1 => "bool",
            2 => "int64",
            3 => "uint64",
            4 => "string",
            5 => "double",
            6 => "data",
            7 => "array",
            8 => "dictionary",
            9 => "date",
            10 => "fd",
            11 => "uuid",
            32 => "endpoint",
            33 => "error",
            34 => "shmem",
            _ => "unknown",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_distinct() {
        let all = [
            TYPE_NULL,
            TYPE_BOOL,
            TYPE_INT64,
            TYPE_UINT64,
            TYPE_STRING,
            TYPE_DOUBLE,
            TYPE_DATA,
            TYPE_ARRAY,
            TYPE_DICTIONARY,
            TYPE_DATE,
            TYPE_FD,
            TYPE_UUID,
            TYPE_ENDPOINT,
            TYPE_ERROR,
            TYPE_SHMEM,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(TYPE_UINT64.to_string(), "uint64");
        assert_eq!(TYPE_FD.to_string(), "fd");
    }
}
