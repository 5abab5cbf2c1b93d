use deeptree::{List, Map, Value};

/// Builds a map `depth` levels deep with `width` entries per level.
///
/// Even-numbered entries are nested maps, odd-numbered entries alternate between lists of
/// integers and plain leaves, so every traversal sees both container shapes.
pub fn build_tree(depth: usize, width: usize) -> Map {
    let mut map = Map::new();
    for i in 0..width {
        let key = format!("key_{i}");
        let value = if depth > 1 && i % 2 == 0 {
            Value::Map(build_tree(depth - 1, width))
        } else if i % 4 == 1 {
            Value::List((0..width as i64).collect::<List>())
        } else {
            Value::from(format!("value_{depth}_{i}"))
        };
        map.insert(key, value);
    }
    map
}

/// Counts the leaves of a tree built by [`build_tree`].
pub fn leaf_count(map: &Map) -> u64 {
    use deeptree::DeepEnumerable;
    map.deep_each().len() as u64
}
