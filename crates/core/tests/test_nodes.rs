//! Node-level tests: building trees bottom-up and comparing them

use std::collections::HashSet;
use xobj_core::{
    ArrayBuilder, DictionaryBuilder, Object, TYPE_ARRAY, TYPE_DICTIONARY, TYPE_ERROR, TYPE_STRING,
};

fn sample_tree(flag: bool) -> Object {
    let mut inner = DictionaryBuilder::new();
    inner.insert("otherKey", Object::double(27.38237));
    inner.insert("name", Object::string("안녕"));

    let mut list = ArrayBuilder::with_capacity(3);
    list.append(Object::int64(1));
    list.append(Object::string("test"));
    list.append(Object::bool(flag));

    let mut outer = DictionaryBuilder::new();
    outer.insert("someKey", list.finish());
    outer.insert("inner", inner.finish());
    outer.finish()
}

#[test]
fn test_tree_shape() {
    let tree = sample_tree(false);
    assert_eq!(tree.type_tag(), TYPE_DICTIONARY);
    assert_eq!(tree.count(), Some(2));

    let list = tree.dictionary_get("someKey").unwrap();
    assert_eq!(list.type_tag(), TYPE_ARRAY);
    assert_eq!(list.count(), Some(3));
    assert_eq!(list.array_get(1).unwrap().type_tag(), TYPE_STRING);
    assert!(list.array_get(3).is_none());

    let inner = tree.dictionary_get("inner").unwrap();
    assert_eq!(
        inner.dictionary_get("name").and_then(Object::string_bytes),
        Some("안녕".as_bytes())
    );
}

#[test]
fn test_structural_equality_across_builds() {
    let a = sample_tree(false);
    let b = sample_tree(false);
    let c = sample_tree(true);

    assert!(!Object::ptr_eq(&a, &b));
    assert_eq!(a, b);
    assert_eq!(a.hash_value(), b.hash_value());
    assert_ne!(a, c);
}

#[test]
fn test_equal_trees_collapse_in_a_set() {
    let set: HashSet<Object> = [sample_tree(false), sample_tree(false), sample_tree(true)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_dictionary_insertion_order_does_not_matter() {
    let mut forward = DictionaryBuilder::new();
    let mut backward = DictionaryBuilder::new();
    for i in 0..16 {
        forward.insert(&format!("k{}", i), Object::int64(i));
    }
    for i in (0..16).rev() {
        backward.insert(&format!("k{}", i), Object::int64(i));
    }
    let forward = forward.finish();
    let backward = backward.finish();
    assert_eq!(forward, backward);
    assert_eq!(forward.hash_value(), backward.hash_value());
}

#[test]
fn test_transport_only_kinds() {
    let err = Object::opaque(TYPE_ERROR, b"connection invalid").unwrap();
    assert_eq!(err.type_tag(), TYPE_ERROR);
    assert_eq!(err.opaque_bytes(), Some(&b"connection invalid"[..]));
    assert!(err.string_bytes().is_none());

    // Modeled kinds cannot be forged through the opaque constructor
    assert!(Object::opaque(TYPE_STRING, b"x").is_none());
}
