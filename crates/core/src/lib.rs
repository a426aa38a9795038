//! xobj core: tagged object nodes for process-boundary messages
//!
//! This crate is the representation layer that higher-level value types sit
//! on. It owns the node format and nothing else: no wire encoding, no
//! connections.
//!
//! Key design principles:
//! - Object: shared, immutable, reference-counted node with a runtime tag
//! - Containers are built bottom-up and frozen, so node trees are acyclic
//! - Equality and hashing are structural and always agree
//!
//! # Modules
//!
//! - `tag`: Runtime type tags (compile-time constants)
//! - `object`: Node handle plus scalar create/extract primitives
//! - `container`: Array and dictionary builders and enumeration
//! - `fd`: Descriptor nodes with copy-on-produce duplication
//! - `structural`: Deep equality and hash

pub mod container;
pub mod fd;
pub mod object;
pub mod structural;
pub mod tag;

pub use container::{ArrayBuilder, DictionaryBuilder};
pub use fd::FileIdentity;
pub use object::Object;
pub use tag::{
    TYPE_ARRAY, TYPE_BOOL, TYPE_DATA, TYPE_DATE, TYPE_DICTIONARY, TYPE_DOUBLE, TYPE_ENDPOINT,
    TYPE_ERROR, TYPE_FD, TYPE_INT64, TYPE_NULL, TYPE_SHMEM, TYPE_STRING, TYPE_UINT64, TYPE_UUID,
    TypeTag,
};
