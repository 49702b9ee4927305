use std::cmp::Ordering;
use std::fmt::{self, Debug};

use crate::data_types::{ArenaMap, Handles, Iter, TreeOps};
use crate::error::TreeError;
use crate::types::Side;

use super::types::{AvlNode, AvlNodeLike};
use super::util;

/// Rebalancing hooks that turn the plain tree surgery into AVL surgery.
pub struct AvlOps;

impl<K, V> TreeOps<K, V, AvlNode<K, V>> for AvlOps {
    fn after_link(arena: &mut [AvlNode<K, V>], root: &mut Option<u32>, node: u32) {
        util::rebalance_after_insert(arena, root, node);
    }

    fn after_splice(arena: &mut [AvlNode<K, V>], root: &mut Option<u32>, parent: u32, side: Side) {
        util::rebalance_after_remove(arena, root, parent, side);
    }

    fn node_swap(arena: &mut [AvlNode<K, V>], root: &mut Option<u32>, x: u32, y: u32) {
        util::node_swap(arena, root, x, y);
    }
}

fn new_node<K, V>(k: K, v: V) -> AvlNode<K, V> {
    AvlNode::new(k, v)
}

type Inner<K, V, C> = ArenaMap<K, V, AvlNode<K, V>, AvlOps, C, fn(K, V) -> AvlNode<K, V>>;

/// Ordered map backed by an AVL tree.
///
/// Insert, remove and lookup are O(log n): after every mutation each node's
/// subtree heights differ by at most one.
pub struct AvlMap<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: Inner<K, V, C>,
}

impl<K, V> AvlMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(K::cmp)
    }
}

impl<K, V> Default for AvlMap<K, V, fn(&K, &K) -> Ordering>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: ArenaMap::with(comparator, new_node::<K, V>),
        }
    }

    /// Inserts `value` under `key`, overwriting and returning any previous
    /// value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Removes `key`. Missing keys are ignored.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        self.inner.remove_entry(key)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    /// Like [`AvlMap::get`], but a missing key is an error.
    pub fn try_get(&self, key: &K) -> Result<&V, TreeError> {
        self.inner.try_get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn height(&self) -> usize {
        self.inner.height()
    }

    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        self.inner.get_or_next_lower(key)
    }

    pub fn first(&self) -> Option<u32> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<u32> {
        self.inner.last()
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        self.inner.next(curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        self.inner.prev(curr)
    }

    pub fn iter(&self) -> Iter<'_, K, V, AvlNode<K, V>> {
        self.inner.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn handles(&self) -> Handles<'_, AvlNode<K, V>> {
        self.inner.handles()
    }

    pub fn for_each<G: FnMut(u32, &AvlNode<K, V>)>(&self, f: G) {
        self.inner.for_each(f)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        self.inner.node(idx)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.inner.key(idx)
    }

    pub fn value(&self, idx: u32) -> &V {
        self.inner.value(idx)
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.inner.value_mut_by_index(idx)
    }

    pub fn balance(&self, idx: u32) -> i8 {
        self.inner.node(idx).bf()
    }

    pub fn assert_valid(&self) -> Result<(), TreeError> {
        util::assert_avl_tree(self.inner.arena(), self.inner.root_index(), self.inner.comparator())
    }

    /// Renders the tree structure, one node per line.
    pub fn print(&self, tab: &str) -> String
    where
        K: Debug,
        V: Debug,
    {
        format!("AvlMap\n{tab}└─ {}", util::print(self.inner.arena(), self.root_index(), &format!("{tab}   ")))
    }
}

impl<K: Debug, V: Debug, C> Debug for AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, AvlNode<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for AvlMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for AvlMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
