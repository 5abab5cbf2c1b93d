//! Accessor protocol integration tests
//!
//! deep_get never fails on a missing or blocked path; deep_set creates intermediate
//! containers on demand and extends lists with null filler.

use deeptree::{Container, DeepEnumerable, Intermediate, Key, List, Map, PathKey, Value, path};

use crate::helpers::*;

// ===== DEEP GET =====

#[test]
fn test_deep_get_every_leaf() {
    let map = nested_map();
    for pair in map.deep_each() {
        assert_eq!(map.deep_get(&pair.key), Some(pair.value));
    }
}

#[test]
fn test_deep_get_returns_containers_too() {
    let map = nested_map();
    let inner = map.deep_get(&path!["a", "c"]).and_then(Value::as_map).unwrap();
    assert_eq!(inner.len(), 2);
}

#[test]
fn test_deep_get_missing_paths() {
    let map = nested_map();
    assert_eq!(map.deep_get(&path!["zzz"]), None);
    assert_eq!(map.deep_get(&path!["a", "zzz"]), None);
    // Leaf in the middle of the path
    assert_eq!(map.deep_get(&path!["g", "h"]), None);
    assert_eq!(map.deep_get(&path!["a", "b", "c", "d"]), None);
}

#[test]
fn test_deep_get_mixed_key_kinds() {
    let list = nested_list();
    assert_eq!(list.deep_get(&path![1, 1, 0, 0]), Some(&Value::from("c")));
    // Names never address a list position
    assert_eq!(list.deep_get(&path!["1"]), None);
    assert_eq!(list.deep_get(&path![-1]), None);

    // Indexes are ordinary keys inside a map
    let mut map = Map::new();
    map.insert(0, "zero");
    assert_eq!(map.deep_get(&path![0]), Some(&Value::from("zero")));
}

#[test]
fn test_absent_is_distinct_from_null() {
    let map = map_from_json(serde_json::json!({"present": null}));
    assert_eq!(map.deep_get(&path!["present"]), Some(&Value::Null));
    assert_eq!(map.deep_get(&path!["absent"]), None);
}

#[test]
fn test_deep_get_mut() {
    let mut map = nested_map();
    if let Some(slot) = map.deep_get_mut(&path!["a", "c", "e"]) {
        *slot = Value::from("changed");
    }
    assert_eq!(map.deep_get(&path!["a", "c", "e"]), Some(&Value::from("changed")));
    assert!(map.deep_get_mut(&path!["a", "nope", "e"]).is_none());
}

// ===== DEEP SET =====

#[test]
fn test_deep_set_creates_map_intermediates() {
    let mut map = Map::new();
    map.deep_set(&path![1, 2], Value::from(3));

    let mut inner = Map::new();
    inner.insert(2, 3);
    let mut expected = Map::new();
    expected.insert(1, inner);
    assert_eq!(map, expected);
}

#[test]
fn test_deep_set_extends_lists_with_null_filler() {
    let mut list = List::new();
    list.deep_set(&path![1, 2], Value::from(3));
    assert_eq!(json_of(list), "[null,[null,null,3]]");
}

#[test]
fn test_deep_set_with_mapping_intermediates() {
    let mut list = List::new();
    list.deep_set_with(&path![1, 2], Value::from(3), Intermediate::Mapping);

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&Value::Null));
    let inner = list.get(1).and_then(Value::as_map).unwrap();
    assert_eq!(inner.get(2), Some(&Value::from(3)));
}

#[test]
fn test_deep_set_name_under_list_creates_map() {
    let mut list = List::new();
    list.deep_set(&path![0, "title"], Value::from("bowling"));
    assert_eq!(json_of(list), r#"[{"title":"bowling"}]"#);
}

#[test]
fn test_deep_set_replaces_leaf_intermediates() {
    let mut map = nested_map();
    map.deep_set(&path!["g", "h"], Value::from(6));
    assert_eq!(map.deep_get(&path!["g", "h"]), Some(&Value::from(6)));
    assert_eq!(map.deep_values().len(), 5);
}

#[test]
fn test_deep_set_overwrites_without_reordering() {
    let mut map = nested_map();
    map.deep_set(&path!["a", "b"], Value::from(10));
    let keys: Vec<String> = map.deep_keys().iter().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["a.b", "a.c.d", "a.c.e", "a.f", "g"]);
    assert_eq!(map.deep_get(&path!["a", "b"]), Some(&Value::from(10)));
}

#[test]
fn test_deep_set_returns_receiver_for_chaining() {
    let mut map = Map::new();
    map.deep_set(&path!["x"], Value::from(1))
        .deep_set(&path!["y", "z"], Value::from(2));
    assert_eq!(json_of(map), r#"{"x":1,"y":{"z":2}}"#);
}

#[test]
fn test_set_then_get_on_empty_like() {
    let sources: Vec<Box<dyn Fn() -> Value>> = vec![
        Box::new(|| Value::Map(nested_map())),
        Box::new(|| Value::List(nested_list())),
    ];
    let keys = [path!["a"], path![0], path![0, 1], path!["x", 3, "y"], path![2, 2]];

    for source in &sources {
        for key in &keys {
            let value = Value::from("v");
            match source() {
                Value::Map(map) => {
                    let mut empty = map.empty_like();
                    empty.deep_set(key, value.clone());
                    assert_eq!(empty.deep_get(key), Some(&value), "map, key {key}");
                }
                Value::List(list) => {
                    // Lists only take index heads
                    if key.head().as_index().is_none() {
                        continue;
                    }
                    let mut empty = list.empty_like();
                    empty.deep_set(key, value.clone());
                    assert_eq!(empty.deep_get(key), Some(&value), "list, key {key}");
                }
                other => panic!("unexpected source {other:?}"),
            }
        }
    }
}

#[test]
fn test_deep_set_through_dyn_container() {
    let mut value = Value::Map(Map::new());
    let key: PathKey = "a.b".parse().unwrap();
    if let Value::Map(map) = &mut value {
        map.deep_set(&key, Value::from(true));
    }
    let container = value.as_container().unwrap();
    assert_eq!(container.len(), 1);
    assert!(container.try_get(&Key::from("a")).is_some());
}
