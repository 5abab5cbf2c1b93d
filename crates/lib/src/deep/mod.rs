//! Deep operations over nested containers.
//!
//! [`DeepEnumerable`] is implemented for every [`Container`] and provides:
//!
//! - **Traversal**: [`deep_each`](DeepEnumerable::deep_each),
//!   [`deep_flat_map`](DeepEnumerable::deep_flat_map),
//!   [`deep_inject`](DeepEnumerable::deep_inject), [`deep_values`](DeepEnumerable::deep_values),
//!   [`deep_keys`](DeepEnumerable::deep_keys)
//! - **Path access**: [`deep_get`](DeepEnumerable::deep_get),
//!   [`deep_get_mut`](DeepEnumerable::deep_get_mut), [`deep_set`](DeepEnumerable::deep_set),
//!   [`deep_set_with`](DeepEnumerable::deep_set_with)
//! - **Structural combinators**: [`deep_diff`](DeepEnumerable::deep_diff),
//!   [`deep_diff_symmetric`](DeepEnumerable::deep_diff_symmetric),
//!   [`deep_intersect`](DeepEnumerable::deep_intersect), [`deep_zip`](DeepEnumerable::deep_zip)
//! - **Filter/map combinators**: [`deep_select`](DeepEnumerable::deep_select),
//!   [`deep_reject`](DeepEnumerable::deep_reject), [`deep_map`](DeepEnumerable::deep_map),
//!   [`deep_map_values`](DeepEnumerable::deep_map_values) and their in-place and
//!   shallow counterparts
//! - **Copying**: [`deep_duplicate`](DeepEnumerable::deep_duplicate)
//!
//! Callbacks come in two named forms instead of an arity switch: value-only
//! (`deep_select`, `deep_map_values`) and key-and-value (`deep_select_with_key`,
//! `deep_map`), where the key is the leaf's full [`PathKey`].
//!
//! A callback that panics unwinds through the combinator untouched.

mod access;
mod filter;
mod structural;
mod traverse;

pub use traverse::LeafPair;

use crate::{
    container::{Container, Intermediate},
    path::PathKey,
    value::Value,
};

/// Deep traversal, access and combinators for any [`Container`].
///
/// # Examples
///
/// ```
/// use deeptree::{DeepEnumerable, Map, Value, path};
///
/// let mut a = Map::new();
/// a.deep_set(&path!["name"], Value::from("alice"));
/// a.deep_set(&path!["age"], Value::from(25));
///
/// let mut b = Map::new();
/// b.deep_set(&path!["name"], Value::from("bob"));
/// b.deep_set(&path!["age"], Value::from(25));
///
/// let common = a.deep_intersect(&b);
/// assert_eq!(common.get("age"), Some(&Value::from(25)));
/// assert!(common.get("name").is_none());
/// ```
pub trait DeepEnumerable: Container + Sized {
    // ===== TRAVERSAL =====

    /// Every leaf with its full path, depth first, in container order.
    ///
    /// ```
    /// # use deeptree::{DeepEnumerable, List, Value, path};
    /// let list: List = vec![Value::from("a"), Value::from(vec!["b", "c"])].into();
    /// let keys: Vec<_> = list.deep_each().into_iter().map(|pair| pair.key).collect();
    /// assert_eq!(keys, vec![path![0], path![1, 0], path![1, 1]]);
    /// ```
    fn deep_each(&self) -> Vec<LeafPair<'_>> {
        traverse::leaves(self)
    }

    /// Applies `f` to every leaf pair and concatenates the results.
    fn deep_flat_map<'a, F, I>(&'a self, f: F) -> Vec<I::Item>
    where
        F: FnMut(LeafPair<'a>) -> I,
        I: IntoIterator,
    {
        traverse::leaves(self).into_iter().flat_map(f).collect()
    }

    /// Left-folds over every leaf pair.
    fn deep_inject<'a, A, F>(&'a self, init: A, f: F) -> A
    where
        F: FnMut(A, LeafPair<'a>) -> A,
    {
        traverse::leaves(self).into_iter().fold(init, f)
    }

    /// Every leaf value in traversal order.
    fn deep_values(&self) -> Vec<&Value> {
        traverse::leaves(self).into_iter().map(|pair| pair.value).collect()
    }

    /// Every leaf path in traversal order.
    fn deep_keys(&self) -> Vec<PathKey> {
        traverse::leaves(self).into_iter().map(|pair| pair.key).collect()
    }

    // ===== PATH ACCESS =====

    /// Looks up the value at `key`. Returns `None` when any segment is missing or a leaf
    /// sits in the middle of the path; never panics.
    fn deep_get(&self, key: &PathKey) -> Option<&Value> {
        access::get(self, key)
    }

    /// Mutable counterpart of [`deep_get`](DeepEnumerable::deep_get).
    fn deep_get_mut(&mut self, key: &PathKey) -> Option<&mut Value> {
        access::get_mut(self, key)
    }

    /// Stores `value` at `key`, creating intermediate containers as needed.
    ///
    /// Missing or leaf intermediate slots are replaced using [`Intermediate::Auto`]: a list
    /// under a list when the next segment is an index, a map otherwise.
    ///
    /// ```
    /// # use deeptree::{DeepEnumerable, List, Value, path};
    /// let mut list = List::new();
    /// list.deep_set(&path![1, 2], Value::from(3));
    /// assert_eq!(list.to_json_string()?, "[null,[null,null,3]]");
    /// # Ok::<(), deeptree::Error>(())
    /// ```
    fn deep_set(&mut self, key: &PathKey, value: Value) -> &mut Self {
        self.deep_set_with(key, value, Intermediate::default())
    }

    /// Like [`deep_set`](DeepEnumerable::deep_set) with an explicit intermediate shape.
    fn deep_set_with(
        &mut self,
        key: &PathKey,
        value: Value,
        intermediate: Intermediate,
    ) -> &mut Self {
        access::set(self, key, value, intermediate);
        self
    }

    // ===== STRUCTURAL COMBINATORS =====

    /// Entries of `self` that `other` lacks or holds a different value for, compared with
    /// `==`. Only `self`'s keys are visited.
    fn deep_diff(&self, other: &dyn Container) -> Self {
        self.deep_diff_by(other, |a, b| a == b)
    }

    /// [`deep_diff`](DeepEnumerable::deep_diff) with a caller-supplied equality.
    fn deep_diff_by<F>(&self, other: &dyn Container, mut eq: F) -> Self
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        structural::diff(self, other, &mut eq)
    }

    /// Differences from both sides: every key of either container whose values differ is
    /// kept as a `[self_value, other_value]` list, with `Null` for a missing side.
    fn deep_diff_symmetric(&self, other: &dyn Container) -> Self {
        self.deep_diff_symmetric_by(other, |a, b| a == b)
    }

    /// [`deep_diff_symmetric`](DeepEnumerable::deep_diff_symmetric) with a caller-supplied
    /// equality.
    fn deep_diff_symmetric_by<F>(&self, other: &dyn Container, mut eq: F) -> Self
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        structural::outersect(self, other, &mut eq)
    }

    /// Alias of [`deep_diff_symmetric`](DeepEnumerable::deep_diff_symmetric).
    fn deep_outersect(&self, other: &dyn Container) -> Self {
        self.deep_diff_symmetric(other)
    }

    /// Entries present on both sides with equal values.
    fn deep_intersect(&self, other: &dyn Container) -> Self {
        self.deep_intersect_by(other, |a, b| a == b)
    }

    /// [`deep_intersect`](DeepEnumerable::deep_intersect) with a caller-supplied equality.
    fn deep_intersect_by<F>(&self, other: &dyn Container, mut eq: F) -> Self
    where
        F: FnMut(&Value, &Value) -> bool,
    {
        structural::intersect(self, other, &mut eq)
    }

    /// Pairs every leaf of `self` with the value `other` holds at the same key, as a
    /// `[self_value, other_value]` list (`Null` when `other` has nothing there).
    fn deep_zip(&self, other: &dyn Container) -> Self {
        structural::zip(self, other)
    }

    // ===== FILTER / MAP COMBINATORS =====

    /// Keeps the leaves for which `predicate(value)` holds.
    ///
    /// Child containers are always kept, possibly empty. Lists compact; maps keep the
    /// original keys.
    ///
    /// ```
    /// # use deeptree::{DeepEnumerable, List, Value};
    /// let list: List = vec![2, 3, 4].into();
    /// let even = list.deep_select(|v| v.as_int().is_some_and(|n| n % 2 == 0));
    /// assert_eq!(even, List::from(vec![2, 4]));
    /// ```
    fn deep_select<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Value) -> bool,
    {
        filter::select(self, &mut Vec::new(), true, &mut |_, v| predicate(v))
    }

    /// Keeps the leaves for which `predicate(path, value)` holds.
    fn deep_select_with_key<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&PathKey, &Value) -> bool,
    {
        filter::select(self, &mut Vec::new(), true, &mut predicate)
    }

    /// Drops the leaves for which `predicate(value)` holds.
    fn deep_reject<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Value) -> bool,
    {
        filter::select(self, &mut Vec::new(), false, &mut |_, v| predicate(v))
    }

    /// Drops the leaves for which `predicate(path, value)` holds.
    fn deep_reject_with_key<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&PathKey, &Value) -> bool,
    {
        filter::select(self, &mut Vec::new(), false, &mut predicate)
    }

    /// Replaces every leaf with `f(path, value)`.
    fn deep_map_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&PathKey, &Value) -> Value,
    {
        let updates: Vec<(PathKey, Value)> = traverse::leaves(self)
            .into_iter()
            .map(|pair| {
                let value = f(&pair.key, pair.value);
                (pair.key, value)
            })
            .collect();
        for (key, value) in updates {
            if let Some(slot) = access::get_mut(self, &key) {
                *slot = value;
            }
        }
        self
    }

    /// Returns a copy with every leaf replaced by `f(path, value)`.
    fn deep_map<F>(&self, f: F) -> Self
    where
        F: FnMut(&PathKey, &Value) -> Value,
    {
        let mut result = self.deep_duplicate();
        result.deep_map_in_place(f);
        result
    }

    /// Replaces every leaf with `f(value)`.
    fn deep_map_values_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&Value) -> Value,
    {
        self.deep_map_in_place(|_, v| f(v))
    }

    /// Returns a copy with every leaf replaced by `f(value)`.
    fn deep_map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        self.deep_map(|_, v| f(v))
    }

    /// Replaces every immediate value with `f(value)`, without recursing.
    fn map_values_in_place<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&Value) -> Value,
    {
        for key in self.shallow_keys() {
            if let Some(slot) = self.try_get_mut(&key) {
                *slot = f(slot);
            }
        }
        self
    }

    /// Returns a container of the same shape with every immediate value replaced by
    /// `f(value)`, without recursing.
    fn map_values<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Value) -> Value,
    {
        let mut result = self.empty_like();
        for (key, value) in self.shallow_entries() {
            result.append_or_set(key, f(value));
        }
        result
    }

    // ===== COPYING =====

    /// Independent copy at every depth.
    fn deep_duplicate(&self) -> Self {
        filter::select(self, &mut Vec::new(), true, &mut |_, _| true)
    }
}

impl<C: Container> DeepEnumerable for C {}
