//! PathKey integration tests
//!
//! Covers the flat-list and composite-mapping surface forms, the round-trip laws between
//! them, and the dot notation used by the CLI.

use deeptree::{Key, PathError, PathKey, Value, path};

use crate::helpers::*;

#[test]
fn test_ancestry_lists_map_to_accessor_keys() {
    let key = |segments: &[&str]| PathKey::from_path(segments.iter().copied()).unwrap();

    assert_eq!(key(&["a"]).to_value(), Value::from("a"));
    assert_eq!(json_of(key(&["a", "b"]).to_value()), r#"{"a":"b"}"#);
    assert_eq!(json_of(key(&["a", "b", "c"]).to_value()), r#"{"a":{"b":"c"}}"#);
}

#[test]
fn test_round_trip_law() {
    let paths: Vec<Vec<Key>> = vec![
        vec![Key::from("a")],
        vec![Key::from(0)],
        vec![Key::from("events"), Key::from(3), Key::from("title")],
        vec![Key::from(1), Key::from(1), Key::from(0), Key::from(0)],
    ];

    for segments in paths {
        let key = PathKey::from_path(segments.clone()).unwrap();
        assert_eq!(key.to_path(), segments);
        assert_eq!(PathKey::from_path(key.to_path()).unwrap(), key);
        assert_eq!(key.len(), segments.len());
        assert_eq!(key.leaf_segment(), segments.last().unwrap());
    }
}

#[test]
fn test_empty_segment_list_fails_fast() {
    let err = PathKey::from_path(Vec::<Key>::new()).unwrap_err();
    assert_eq!(err, PathError::Empty);
    assert!(err.is_empty_path());

    let crate_err: deeptree::Error = err.into();
    assert!(crate_err.is_path_error());
    assert_eq!(crate_err.module(), "path");
}

#[test]
fn test_split_key() {
    let key = path!["a", "c", "d"];
    let (head, tail) = key.split();
    assert_eq!(head, &Key::from("a"));
    let tail = tail.unwrap();
    assert_eq!(tail, &path!["c", "d"]);

    let (head, tail) = tail.tail().unwrap().split();
    assert_eq!(head, &Key::from("d"));
    assert!(tail.is_none());
}

#[test]
fn test_raw_scalar_is_a_one_segment_path() {
    let from_scalar = PathKey::from("g");
    assert_eq!(from_scalar.to_path(), vec![Key::from("g")]);
    assert!(from_scalar.is_leaf());

    let from_value = PathKey::try_from(&Value::from(7)).unwrap();
    assert_eq!(from_value.to_path(), vec![Key::from(7)]);
}

#[test]
fn test_both_surface_forms_agree() {
    let composite = map_from_json(serde_json::json!({"events": {"items": "title"}}));
    let flat = list_from_json(serde_json::json!(["events", "items", "title"]));

    let from_composite = PathKey::try_from(&Value::Map(composite)).unwrap();
    let from_flat = PathKey::try_from(&Value::List(flat)).unwrap();

    assert_eq!(from_composite, from_flat);
    assert_eq!(from_flat, path!["events", "items", "title"]);
}

#[test]
fn test_composite_form_round_trips_through_value() {
    let key = path![1, "b", 2];
    assert_eq!(PathKey::try_from(&key.to_value()).unwrap(), key);
}

#[test]
fn test_invalid_segments_are_rejected() {
    let flat = list_from_json(serde_json::json!(["a", true]));
    let err = PathKey::try_from(&Value::List(flat)).unwrap_err();
    assert!(matches!(err, PathError::InvalidSegment { .. }));

    assert!(PathKey::try_from(&Value::Null).is_err());

    let mixed = map_from_json(serde_json::json!({"a": ["b", "c"]}));
    let err = PathKey::try_from(&Value::Map(mixed)).unwrap_err();
    assert!(matches!(err, PathError::InvalidSegment { .. }));
}

#[test]
fn test_dot_notation_round_trip() {
    let key: PathKey = "events.3.title".parse().unwrap();
    assert_eq!(key, path!["events", 3, "title"]);
    assert_eq!(key.to_string(), "events.3.title");
    assert_eq!(key.to_string().parse::<PathKey>().unwrap(), key);
}
