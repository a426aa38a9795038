//! Literal syntax for tagged values
//!
//! ```
//! use xobj::xobj;
//!
//! let value = xobj!({
//!     "name": "worker",
//!     "pid": 4242,
//!     "tags": ["a", "b"],
//!     "parent": null,
//! });
//! assert_eq!(value.get_key("pid").and_then(|v| v.as_i64()), Some(4242));
//! ```
//!
//! Every literal goes through the ordinary constructors: `null` is
//! [`TaggedValue::null`](crate::TaggedValue::null), arrays and maps use
//! [`TaggedValue::array`](crate::TaggedValue::array) and
//! [`TaggedValue::map`](crate::TaggedValue::map), and anything else is
//! converted through [`IntoLiteral`]. Its only integer implementation is
//! `i64`, so a bare integer literal is typed as `i64` and becomes `Int64`
//! across the whole 64-bit range. Unsigned values are written explicitly
//! as `TaggedValue::from(7u64)`. A key repeated in a map literal keeps its
//! last value.

use crate::construct::Bytes;
use crate::value::TaggedValue;
use std::time::SystemTime;
use uuid::Uuid;
use xobj_core::Object;

/// Build a [`TaggedValue`](crate::TaggedValue) from literal syntax
#[macro_export]
macro_rules! xobj {
    (null) => {
        $crate::TaggedValue::null()
    };
    ([]) => {
        $crate::TaggedValue::array(::std::vec::Vec::new())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::TaggedValue::array($crate::xobj_internal!(@array [] $($tt)+))
    };
    ({}) => {
        $crate::TaggedValue::map(::std::vec::Vec::<(&str, $crate::TaggedValue)>::new())
    };
    ({ $($tt:tt)+ }) => {
        $crate::TaggedValue::map($crate::xobj_internal!(@map [] $($tt)+))
    };
    ($other:expr) => {
        $crate::literal::IntoLiteral::into_literal($other)
    };
}

// Token muncher behind `xobj!`. Splits comma-separated elements, sending
// nested `[...]`, `{...}` and `null` back through `xobj!` and everything
// else through `From`.
#[macro_export]
#[doc(hidden)]
macro_rules! xobj_internal {
    // Arrays

    (@array [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };
    (@array [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::xobj_internal!(@array [$($elems,)* $crate::xobj!(null),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::xobj_internal!(@array [$($elems,)* $crate::xobj!([$($inner)*]),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $crate::xobj_internal!(@array [$($elems,)* $crate::xobj!({$($inner)*}),] $($($rest)*)?)
    };
    (@array [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::xobj_internal!(@array [$($elems,)* $crate::xobj!($next),] $($rest)*)
    };
    (@array [$($elems:expr,)*] $last:expr) => {
        $crate::xobj_internal!(@array [$($elems,)* $crate::xobj!($last),])
    };

    // Maps

    (@map [$($entries:expr,)*]) => {
        ::std::vec![$($entries,)*]
    };
    (@map [$($entries:expr,)*] $key:literal : null $(, $($rest:tt)*)?) => {
        $crate::xobj_internal!(@map [$($entries,)* ($key, $crate::xobj!(null)),] $($($rest)*)?)
    };
    (@map [$($entries:expr,)*] $key:literal : [$($inner:tt)*] $(, $($rest:tt)*)?) => {
        $crate::xobj_internal!(@map [$($entries,)* ($key, $crate::xobj!([$($inner)*])),] $($($rest)*)?)
    };
    (@map [$($entries:expr,)*] $key:literal : {$($inner:tt)*} $(, $($rest:tt)*)?) => {
        $crate::xobj_internal!(@map [$($entries,)* ($key, $crate::xobj!({$($inner)*})),] $($($rest)*)?)
    };
    (@map [$($entries:expr,)*] $key:literal : $value:expr, $($rest:tt)*) => {
        $crate::xobj_internal!(@map [$($entries,)* ($key, $crate::xobj!($value)),] $($rest)*)
    };
    (@map [$($entries:expr,)*] $key:literal : $value:expr) => {
        $crate::xobj_internal!(@map [$($entries,)* ($key, $crate::xobj!($value)),])
    };
}

/// Conversion used for the leaves of an `xobj!` literal
///
/// `i64` is the only integer implementation, so an unsuffixed integer
/// literal infers as `i64`. Other kinds, `u64` included, are passed in as a
/// [`TaggedValue`].
pub trait IntoLiteral {
    fn into_literal(self) -> TaggedValue;
}

macro_rules! literal_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoLiteral for $ty {
                fn into_literal(self) -> TaggedValue {
                    TaggedValue::from(self)
                }
            }
        )*
    };
}

literal_via_from!(
    (),
    bool,
    i64,
    f64,
    &str,
    String,
    &[u8],
    Bytes,
    SystemTime,
    Uuid,
    Object,
);

impl IntoLiteral for TaggedValue {
    fn into_literal(self) -> TaggedValue {
        self
    }
}

impl IntoLiteral for &String {
    fn into_literal(self) -> TaggedValue {
        TaggedValue::from(self.as_str())
    }
}

impl<T: IntoLiteral> IntoLiteral for Option<T> {
    fn into_literal(self) -> TaggedValue {
        self.map_or_else(TaggedValue::null, IntoLiteral::into_literal)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Kind;
    use crate::TaggedValue;
    use xobj_core::Object;

    #[test]
    fn test_scalar_literals() {
        assert!(xobj!(null).is_null());
        assert_eq!(xobj!(true).as_bool(), Some(true));
        assert_eq!(xobj!(42).kind(), Kind::Int64);
        assert_eq!(xobj!(42).as_i64(), Some(42));
        assert_eq!(xobj!(TaggedValue::from(42u64)).as_u64(), Some(42));
        assert_eq!(xobj!(2.5).as_f64(), Some(2.5));
        assert_eq!(xobj!("hi").as_str(), Some("hi"));
    }

    #[test]
    fn test_array_literal() {
        let value = xobj!([1, "test", false]);
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_i64(), Some(1));
        assert_eq!(items[1].as_str(), Some("test"));
        assert_eq!(items[2].as_bool(), Some(false));
    }

    #[test]
    fn test_array_literal_with_negative_and_trailing_comma() {
        let value = xobj!([-1, 2 + 3, null,]);
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_i64(), Some(-1));
        assert_eq!(items[1].as_i64(), Some(5));
        assert!(items[2].is_null());
    }

    #[test]
    fn test_empty_literals() {
        assert_eq!(xobj!([]).len(), Some(0));
        assert_eq!(xobj!({}).len(), Some(0));
        assert_eq!(xobj!([]).kind(), Kind::Array);
        assert_eq!(xobj!({}).kind(), Kind::Map);
    }

    #[test]
    fn test_nested_literal() {
        let value = xobj!([[1234, true], "more", {"key1": "val1", "key2": -2727}]);
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].len(), Some(2));
        assert_eq!(items[1].as_str(), Some("more"));
        let map = items[2].as_map().unwrap();
        assert_eq!(map["key1"].as_str(), Some("val1"));
        assert_eq!(map["key2"].as_i64(), Some(-2727));
    }

    #[test]
    fn test_map_literal_last_key_wins() {
        let value = xobj!({"k": 1, "k": 2});
        assert_eq!(value.len(), Some(1));
        assert_eq!(value.get_key("k").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_literal_matches_constructor() {
        let literal = xobj!({"a": [1, 2], "b": null});
        let built = TaggedValue::map([
            (
                "a",
                TaggedValue::array([TaggedValue::from(1), TaggedValue::from(2)]),
            ),
            ("b", TaggedValue::null()),
        ]);
        assert_eq!(literal, built);
    }

    #[test]
    fn test_expression_elements() {
        let name = String::from("dynamic");
        let value = xobj!([name.clone(), name.len() as i64]);
        let items = value.as_array().unwrap();
        assert_eq!(items[0].as_str(), Some("dynamic"));
        assert_eq!(items[1].as_i64(), Some(7));
    }

    #[test]
    fn test_integer_literals_use_full_i64_range() {
        let big = xobj!(5_000_000_000);
        assert_eq!(big.kind(), Kind::Int64);
        assert_eq!(big.as_i64(), Some(5_000_000_000));

        let items = xobj!([9223372036854775807, -9223372036854775808, 1])
            .as_array()
            .unwrap();
        assert_eq!(items[0].as_i64(), Some(i64::MAX));
        assert_eq!(items[1].as_i64(), Some(i64::MIN));
        assert_eq!(items[2].kind(), Kind::Int64);

        let map = xobj!({"size": 4_294_967_296});
        assert_eq!(map.get_key("size").and_then(|v| v.as_i64()), Some(1 << 32));
    }

    #[test]
    fn test_unsigned_and_passthrough_leaves() {
        let value = xobj!([TaggedValue::from(u64::MAX), Object::string("raw"), None::<i64>]);
        let items = value.as_array().unwrap();
        assert_eq!(items[0].as_u64(), Some(u64::MAX));
        assert_eq!(items[1].as_str(), Some("raw"));
        assert!(items[2].is_null());
        assert_eq!(xobj!(Some(3)).as_i64(), Some(3));
    }
}
