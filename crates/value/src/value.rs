use std::fmt;
use std::hash::{Hash, Hasher};
use xobj_core::{
    Object, TYPE_ARRAY, TYPE_BOOL, TYPE_DATA, TYPE_DATE, TYPE_DICTIONARY, TYPE_DOUBLE, TYPE_FD,
    TYPE_INT64, TYPE_NULL, TYPE_STRING, TYPE_UINT64, TYPE_UUID,
};

/// Node wrapped by a [`TaggedValue`] variant
///
/// Only this crate can create one, and it only does so after checking the
/// node's tag, so a variant always agrees with the node it wraps.
#[derive(Clone)]
pub struct Handle(Object);

impl Handle {
    pub(crate) fn new(object: Object) -> Self {
        Handle(object)
    }

    pub fn object(&self) -> &Object {
        &self.0
    }
}

/// TaggedValue: a self-describing value backed by an object node
///
/// Exactly one variant is active and it is fixed for the life of the value.
/// Values are immutable; containers are built once and then only read.
///
/// # Cloning
///
/// Cloning shares the underlying node. A descriptor node never exposes its
/// own descriptor (readers always receive a fresh duplicate), so shared
/// descriptor values still have independent lifetimes. Use
/// [`TaggedValue::try_duplicate`] to mint a separate node.
#[derive(Clone)]
pub enum TaggedValue {
    Null(Handle),
    Bool(Handle),
    Int64(Handle),
    UInt64(Handle),
    String(Handle),
    Double(Handle),
    Bytes(Handle),
    Array(Handle),
    Map(Handle),
    Timestamp(Handle),
    ResourceHandle(Handle),
    Uuid(Handle),
    /// A node whose tag has no dedicated variant; kept as-is for pass-through
    Unrecognized(Handle),
}

/// Variant discriminant without the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int64,
    UInt64,
    String,
    Double,
    Bytes,
    Array,
    Map,
    Timestamp,
    ResourceHandle,
    Uuid,
    Unrecognized,
}

impl Kind {
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int64 => "int64",
            Kind::UInt64 => "uint64",
            Kind::String => "string",
            Kind::Double => "double",
            Kind::Bytes => "data",
            Kind::Array => "array",
            Kind::Map => "dictionary",
            Kind::Timestamp => "date",
            Kind::ResourceHandle => "fd",
            Kind::Uuid => "uuid",
            Kind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TaggedValue {
    /// Wrap an existing node, picking the variant from its runtime tag
    ///
    /// Total: tags without a dedicated variant become `Unrecognized`. The
    /// node itself is neither copied nor modified.
    pub fn classify(object: Object) -> Self {
        let tag = object.type_tag();
        let handle = Handle::new(object);
        match tag {
            TYPE_NULL => TaggedValue::Null(handle),
            TYPE_BOOL => TaggedValue::Bool(handle),
            TYPE_INT64 => TaggedValue::Int64(handle),
            TYPE_UINT64 => TaggedValue::UInt64(handle),
            TYPE_STRING => TaggedValue::String(handle),
            TYPE_DOUBLE => TaggedValue::Double(handle),
            TYPE_DATA => TaggedValue::Bytes(handle),
            TYPE_ARRAY => TaggedValue::Array(handle),
            TYPE_DICTIONARY => TaggedValue::Map(handle),
            TYPE_DATE => TaggedValue::Timestamp(handle),
            TYPE_FD => TaggedValue::ResourceHandle(handle),
            TYPE_UUID => TaggedValue::Uuid(handle),
            other => {
                tracing::trace!(tag = %other, "classifying node as unrecognized");
                TaggedValue::Unrecognized(handle)
            }
        }
    }

    fn handle(&self) -> &Handle {
        match self {
            TaggedValue::Null(h)
            | TaggedValue::Bool(h)
            | TaggedValue::Int64(h)
            | TaggedValue::UInt64(h)
            | TaggedValue::String(h)
            | TaggedValue::Double(h)
            | TaggedValue::Bytes(h)
            | TaggedValue::Array(h)
            | TaggedValue::Map(h)
            | TaggedValue::Timestamp(h)
            | TaggedValue::ResourceHandle(h)
            | TaggedValue::Uuid(h)
            | TaggedValue::Unrecognized(h) => h,
        }
    }

    /// The wrapped node, for pass-through to lower layers
    pub fn raw(&self) -> &Object {
        self.handle().object()
    }

    pub fn into_raw(self) -> Object {
        match self {
            TaggedValue::Null(h)
            | TaggedValue::Bool(h)
            | TaggedValue::Int64(h)
            | TaggedValue::UInt64(h)
            | TaggedValue::String(h)
            | TaggedValue::Double(h)
            | TaggedValue::Bytes(h)
            | TaggedValue::Array(h)
            | TaggedValue::Map(h)
            | TaggedValue::Timestamp(h)
            | TaggedValue::ResourceHandle(h)
            | TaggedValue::Uuid(h)
            | TaggedValue::Unrecognized(h) => h.0,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            TaggedValue::Null(_) => Kind::Null,
            TaggedValue::Bool(_) => Kind::Bool,
            TaggedValue::Int64(_) => Kind::Int64,
            TaggedValue::UInt64(_) => Kind::UInt64,
            TaggedValue::String(_) => Kind::String,
            TaggedValue::Double(_) => Kind::Double,
            TaggedValue::Bytes(_) => Kind::Bytes,
            TaggedValue::Array(_) => Kind::Array,
            TaggedValue::Map(_) => Kind::Map,
            TaggedValue::Timestamp(_) => Kind::Timestamp,
            TaggedValue::ResourceHandle(_) => Kind::ResourceHandle,
            TaggedValue::Uuid(_) => Kind::Uuid,
            TaggedValue::Unrecognized(_) => Kind::Unrecognized,
        }
    }
}

impl From<Object> for TaggedValue {
    fn from(object: Object) -> Self {
        TaggedValue::classify(object)
    }
}

impl From<TaggedValue> for Object {
    fn from(value: TaggedValue) -> Self {
        value.into_raw()
    }
}

// Equality and hashing are the node's structural primitives, applied once
// to the whole tree.
impl PartialEq for TaggedValue {
    fn eq(&self, other: &Self) -> bool {
        Object::equal(self.raw(), other.raw())
    }
}

impl Eq for TaggedValue {}

impl Hash for TaggedValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.raw().hash_value());
    }
}
