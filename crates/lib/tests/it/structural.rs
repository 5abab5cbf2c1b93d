//! Structural combinator integration tests
//!
//! diff, symmetric diff (outersect), intersect and zip over maps, lists and mixed trees.

use deeptree::{DeepEnumerable, List, Map, Value, path};

use crate::helpers::*;

// ===== DIFF =====

#[test]
fn test_diff_keeps_differing_leaves() {
    let a = map_from_json(serde_json::json!({"a": {"b": "c"}}));
    let b = map_from_json(serde_json::json!({"a": {"b": "d"}}));
    assert_eq!(json_of(a.deep_diff(&b)), r#"{"a":{"b":"c"}}"#);
}

#[test]
fn test_diff_of_identical_trees_is_empty() {
    let a = nested_map();
    assert!(a.deep_diff(&nested_map()).is_empty());
    assert!(a.deep_diff_symmetric(&nested_map()).is_empty());
}

#[test]
fn test_diff_keeps_keys_missing_from_other() {
    let a = map_from_json(serde_json::json!({"x": 1, "y": {"z": 2}}));
    let b = map_from_json(serde_json::json!({"x": 1}));
    assert_eq!(json_of(a.deep_diff(&b)), r#"{"y":{"z":2}}"#);
    // Only the receiver's keys are visited
    assert!(b.deep_diff(&a).is_empty());
}

#[test]
fn test_diff_drops_emptied_children() {
    let a = map_from_json(serde_json::json!({"a": {"b": 1}, "c": 2}));
    let b = map_from_json(serde_json::json!({"a": {"b": 1}, "c": 3}));
    assert_eq!(json_of(a.deep_diff(&b)), r#"{"c":2}"#);
}

#[test]
fn test_diff_container_against_leaf() {
    let a = map_from_json(serde_json::json!({"k": {"x": 1}}));
    let b = map_from_json(serde_json::json!({"k": 5}));
    assert_eq!(json_of(a.deep_diff(&b)), r#"{"k":{"x":1}}"#);
}

#[test]
fn test_diff_null_is_not_absence() {
    let a = map_from_json(serde_json::json!({"k": null}));
    let b = Map::new();
    assert_eq!(json_of(a.deep_diff(&b)), r#"{"k":null}"#);
}

#[test]
fn test_diff_on_lists_compacts() {
    let a = list_from_json(serde_json::json!([1, 2, 3]));
    let b = list_from_json(serde_json::json!([1, 5, 3]));
    assert_eq!(a.deep_diff(&b), List::from(vec![2]));
}

#[test]
fn test_diff_by_custom_equality() {
    let a = map_from_json(serde_json::json!({"name": "Alice", "age": 30}));
    let b = map_from_json(serde_json::json!({"name": "alice", "age": 31}));

    let case_insensitive = |x: &Value, y: &Value| match (x.as_text(), y.as_text()) {
        (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
        _ => x == y,
    };
    assert_eq!(json_of(a.deep_diff_by(&b, case_insensitive)), r#"{"age":30}"#);
}

// ===== SYMMETRIC DIFF =====

#[test]
fn test_symmetric_diff_pairs_both_sides() {
    let a = map_from_json(serde_json::json!({"a": {"b": "c"}}));
    let b = map_from_json(serde_json::json!({"a": {"b": "d"}}));
    assert_eq!(json_of(a.deep_diff_symmetric(&b)), r#"{"a":{"b":["c","d"]}}"#);
}

#[test]
fn test_symmetric_diff_fills_missing_side_with_null() {
    let a = map_from_json(serde_json::json!({"a": 1, "same": true}));
    let b = map_from_json(serde_json::json!({"b": 2, "same": true}));
    assert_eq!(
        json_of(a.deep_outersect(&b)),
        r#"{"a":[1,null],"b":[null,2]}"#
    );
}

#[test]
fn test_symmetric_diff_container_against_leaf_is_a_pair() {
    let a = map_from_json(serde_json::json!({"k": {"x": 1}}));
    let b = map_from_json(serde_json::json!({"k": 5}));
    assert_eq!(json_of(a.deep_diff_symmetric(&b)), r#"{"k":[{"x":1},5]}"#);
}

#[test]
fn test_symmetric_diff_on_lists() {
    let a = list_from_json(serde_json::json!([1, 2]));
    let b = list_from_json(serde_json::json!([1, 2, 3]));
    assert_eq!(json_of(a.deep_diff_symmetric(&b)), "[[null,3]]");
}

#[test]
fn test_symmetric_diff_by_custom_equality() {
    let a = map_from_json(serde_json::json!({"n": 10, "m": 1}));
    let b = map_from_json(serde_json::json!({"n": 11, "m": 5}));
    let within_one = |x: &Value, y: &Value| match (x.as_int(), y.as_int()) {
        (Some(x), Some(y)) => (x - y).abs() <= 1,
        _ => x == y,
    };
    assert_eq!(
        json_of(a.deep_diff_symmetric_by(&b, within_one)),
        r#"{"m":[1,5]}"#
    );
}

// ===== INTERSECT =====

#[test]
fn test_intersect_keeps_equal_leaves() {
    let a = map_from_json(serde_json::json!({"name": "alice", "age": 25}));
    let b = map_from_json(serde_json::json!({"name": "bob", "age": 25}));
    assert_eq!(json_of(a.deep_intersect(&b)), r#"{"age":25}"#);
}

#[test]
fn test_intersect_recurses_and_drops_empty_children() {
    let a = map_from_json(serde_json::json!({
        "user": {"name": "alice", "tags": ["x", "y"]},
        "other": {"k": 1}
    }));
    let b = map_from_json(serde_json::json!({
        "user": {"name": "alice", "tags": ["x", "z"]},
        "other": {"k": 2}
    }));
    assert_eq!(
        json_of(a.deep_intersect(&b)),
        r#"{"user":{"name":"alice","tags":["x"]}}"#
    );
}

#[test]
fn test_intersect_missing_side_never_matches() {
    let a = map_from_json(serde_json::json!({"k": null}));
    assert!(a.deep_intersect(&Map::new()).is_empty());
    assert!(Map::new().deep_intersect(&a).is_empty());
}

#[test]
fn test_intersect_with_itself_is_identity() {
    let map = nested_map();
    assert_eq!(map.deep_intersect(&map), map);

    let list = nested_list();
    assert_eq!(list.deep_intersect(&list), list);
}

#[test]
fn test_intersect_by_custom_equality() {
    let a = map_from_json(serde_json::json!({"x": 1, "y": 2}));
    let b = map_from_json(serde_json::json!({"x": 100, "y": 200}));
    let always = |_: &Value, _: &Value| true;
    assert_eq!(a.deep_intersect_by(&b, always), a);
}

// ===== ZIP =====

#[test]
fn test_zip_pairs_leaves() {
    let a = map_from_json(serde_json::json!({"a": 1, "b": {"c": 2}}));
    let b = map_from_json(serde_json::json!({"a": 3, "b": {"c": 4}}));
    assert_eq!(
        json_of(a.deep_zip(&b)),
        r#"{"a":[1,3],"b":{"c":[2,4]}}"#
    );
}

#[test]
fn test_zip_only_visits_receiver_keys() {
    let a = map_from_json(serde_json::json!({"a": 1}));
    let b = map_from_json(serde_json::json!({"a": 2, "extra": 3}));
    assert_eq!(json_of(a.deep_zip(&b)), r#"{"a":[1,2]}"#);

    let short = list_from_json(serde_json::json!([1, 2]));
    let long = list_from_json(serde_json::json!([9]));
    assert_eq!(json_of(short.deep_zip(&long)), "[[1,9],[2,null]]");
}

#[test]
fn test_zip_container_against_leaf_pairs_whole_container() {
    let a = map_from_json(serde_json::json!({"k": [1, 2]}));
    let b = map_from_json(serde_json::json!({"k": "flat"}));
    assert_eq!(json_of(a.deep_zip(&b)), r#"{"k":[[1,2],"flat"]}"#);
}

#[test]
fn test_zip_across_container_kinds() {
    // A map receiver against a list uses index keys on both sides
    let mut a = Map::new();
    a.insert(0, "first");
    a.insert(1, "second");
    let b = list_from_json(serde_json::json!(["x"]));

    let zipped = a.deep_zip(&b);
    assert_eq!(
        zipped.deep_get(&path![0]),
        Some(&Value::from(vec!["first", "x"]))
    );
    assert_eq!(
        zipped.deep_get(&path![1]),
        Some(&Value::List(List::from(vec![Value::from("second"), Value::Null])))
    );
}

#[test]
fn test_combinators_leave_inputs_untouched() {
    let a = nested_map();
    let b = map_from_json(serde_json::json!({"a": {"b": 100}}));
    let _ = a.deep_diff(&b);
    let _ = a.deep_diff_symmetric(&b);
    let _ = a.deep_intersect(&b);
    let _ = a.deep_zip(&b);
    assert_eq!(a, nested_map());
    assert_eq!(json_of(b), r#"{"a":{"b":100}}"#);
}
