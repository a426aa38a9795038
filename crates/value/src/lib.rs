//! xobj: a closed tagged-value type over object nodes
//!
//! Key design principles:
//! - TaggedValue: one variant per node kind, bound to its node at creation
//! - Native: the closed set of host values that can become a TaggedValue
//! - Accessors answer only for their own variant and otherwise return `None`
//! - Equality and hashing are structural, computed by the node layer
//!
//! # Example
//!
//! ```
//! use xobj::{TaggedValue, xobj};
//!
//! let value = xobj!([1, "test", false]);
//! assert_eq!(value, xobj!([1, "test", false]));
//! assert_ne!(value, xobj!([1, "test", true]));
//!
//! let items = value.as_array().unwrap();
//! assert_eq!(items[1].as_str(), Some("test"));
//! assert_eq!(TaggedValue::from(true).as_i64(), None);
//! ```
//!
//! # Modules
//!
//! - `value`: TaggedValue, Kind and classification of existing nodes
//! - `construct`: Conversions from host scalars, arrays and maps
//! - `native`: Closed host-value sum type and generic construction
//! - `access`: Typed, fallible accessors
//! - `literal`: The `xobj!` literal macro
//! - `render`: Text rendering (Display/Debug)
//! - `serialize`: serde Serialize/Deserialize
//! - `error`: ValueError

pub mod access;
pub mod construct;
pub mod error;
pub mod literal;
pub mod native;
pub mod render;
pub mod serialize;
pub mod value;

pub use construct::Bytes;
pub use error::ValueError;
pub use native::Native;
pub use render::{RenderConfig, render};
pub use value::{Handle, Kind, TaggedValue};

// Node layer, for callers that pass raw nodes through
pub use xobj_core as node;
pub use xobj_core::Object;
