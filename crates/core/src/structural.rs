//! Deep structural equality and hashing
//!
//! Both walk the node tree, never handle identity. Doubles compare by bit
//! pattern so that equality stays reflexive and agrees with the hash.
//! Dictionary entries are hashed one at a time and summed, which makes the
//! result independent of enumeration order.

use crate::object::{Object, Payload};
use std::hash::{DefaultHasher, Hash, Hasher};

impl Object {
    /// Deep structural equality
    pub fn equal(a: &Object, b: &Object) -> bool {
        if Object::ptr_eq(a, b) {
            return true;
        }
        match (a.payload(), b.payload()) {
            (Payload::Null, Payload::Null) => true,
            (Payload::Bool(x), Payload::Bool(y)) => x == y,
            (Payload::Int64(x), Payload::Int64(y)) => x == y,
            (Payload::UInt64(x), Payload::UInt64(y)) => x == y,
            (Payload::Double(x), Payload::Double(y)) => x.to_bits() == y.to_bits(),
            (Payload::String(x), Payload::String(y)) => x == y,
            (Payload::Data(x), Payload::Data(y)) => x == y,
            (Payload::Date(x), Payload::Date(y)) => x == y,
            (Payload::Uuid(x), Payload::Uuid(y)) => x == y,
            (Payload::Fd(x), Payload::Fd(y)) => x.identity == y.identity,
            (Payload::Array(x), Payload::Array(y)) => {
                x.len() == y.len() && x.iter().zip(y.iter()).all(|(l, r)| Object::equal(l, r))
            }
            (Payload::Dictionary(x), Payload::Dictionary(y)) => {
                x.len() == y.len()
                    && x
                        .iter()
                        .all(|(key, l)| y.get(key).is_some_and(|r| Object::equal(l, r)))
            }
            (
                Payload::Opaque {
                    tag: tag_a,
                    bytes: bytes_a,
                },
                Payload::Opaque {
                    tag: tag_b,
                    bytes: bytes_b,
                },
            ) => tag_a == tag_b && bytes_a == bytes_b,
            _ => false,
        }
    }

    /// Deep structural hash
    ///
    /// `Object::equal(a, b)` implies `a.hash_value() == b.hash_value()`.
    /// Stable for the life of the process.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash_structure(&mut hasher);
        hasher.finish()
    }

    fn hash_structure<H: Hasher>(&self, state: &mut H) {
        self.type_tag().hash(state);
        match self.payload() {
            Payload::Null => {}
            Payload::Bool(b) => b.hash(state),
            Payload::Int64(n) => n.hash(state),
            Payload::UInt64(n) => n.hash(state),
            Payload::Double(d) => d.to_bits().hash(state),
            Payload::String(bytes) | Payload::Data(bytes) => bytes.hash(state),
            Payload::Date(nanos) => nanos.hash(state),
            Payload::Uuid(bytes) => bytes.hash(state),
            Payload::Fd(descriptor) => descriptor.identity.hash(state),
            Payload::Array(elements) => {
                elements.len().hash(state);
                for element in elements.iter() {
                    element.hash_structure(state);
                }
            }
            Payload::Dictionary(entries) => {
                entries.len().hash(state);
                let combined = entries.iter().fold(0u64, |acc, (key, value)| {
                    let mut entry = DefaultHasher::new();
                    key.hash(&mut entry);
                    value.hash_structure(&mut entry);
                    acc.wrapping_add(entry.finish())
                });
                combined.hash(state);
            }
            Payload::Opaque { bytes, .. } => bytes.hash(state),
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        Object::equal(self, other)
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}
