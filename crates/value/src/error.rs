//! Error types
//!
//! Absence is not an error here: accessors return `Option`. Construction
//! can only fail on descriptor duplication; the remaining variants are
//! raised by serde interop.

use crate::value::Kind;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    /// The platform refused to duplicate a descriptor
    #[error("descriptor unavailable: {0}")]
    ResourceUnavailable(#[source] io::Error),

    /// A string payload that is not valid UTF-8 was asked to produce text
    #[error("string payload is not valid UTF-8")]
    InvalidString,

    /// The value holds a kind that has no portable serde representation
    #[error("{kind} values cannot be serialized")]
    NotSerializable { kind: Kind },
}
