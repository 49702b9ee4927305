use std::cmp::Ordering;
use std::fmt::Display;

use crate::data_types::{ArenaMap, Iter, TreeOps};
use crate::error::TreeError;
use crate::types::Node;
use crate::util;

use super::tree_node::TreeNode;

/// Plain binary-search-tree surgery: every [`TreeOps`] hook keeps its
/// default.
pub struct BstOps;

impl<K, V> TreeOps<K, V, TreeNode<K, V>> for BstOps {}

fn new_node<K, V>(k: K, v: V) -> TreeNode<K, V> {
    TreeNode::new(k, v)
}

type Inner<K, V, C> = ArenaMap<K, V, TreeNode<K, V>, BstOps, C, fn(K, V) -> TreeNode<K, V>>;

/// Unbalanced ordered map. Shape depends on insertion order; a sorted
/// insertion sequence degrades it to a list.
pub struct Tree<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    inner: Inner<K, V, C>,
}

impl<K: Ord, V> Tree<K, V, fn(&K, &K) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(K::cmp)
    }
}

impl<K: Ord, V> Default for Tree<K, V, fn(&K, &K) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> Tree<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: ArenaMap::with(comparator, new_node::<K, V>),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn try_get(&self, key: &K) -> Result<&V, TreeError> {
        self.inner.try_get(key)
    }

    pub fn get_or_next_lower(&self, key: &K) -> Option<&V> {
        self.inner.get_or_next_lower(key).map(|i| self.inner.value(i))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(key)
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

    pub fn max(&self) -> Option<&V> {
        self.inner.last().map(|i| self.inner.value(i))
    }

    pub fn iter(&self) -> Iter<'_, K, V, TreeNode<K, V>> {
        self.inner.iter()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    pub fn node(&self, idx: u32) -> &TreeNode<K, V> {
        self.inner.node(idx)
    }

    /// `true` when every leaf sits at the same depth.
    pub fn equal_paths(&self) -> bool {
        util::equal_paths(self.inner.arena(), self.inner.root_index())
    }

    pub fn assert_valid(&self) -> Result<(), TreeError> {
        util::assert_tree(
            self.inner.arena(),
            self.inner.root_index(),
            |n| &n.k,
            self.inner.comparator(),
        )
    }

    fn to_string_node(&self, node: u32, tab: &str, side: &str) -> String
    where
        K: Display,
    {
        let n = self.inner.node(node);
        let mut s = format!("\n{tab}{side} TreeNode {}", n.k);
        if let Some(l) = n.l() {
            s.push_str(&self.to_string_node(l, &format!("{tab}  "), "←"));
        }
        if let Some(r) = n.r() {
            s.push_str(&self.to_string_node(r, &format!("{tab}  "), "→"));
        }
        s
    }

    pub fn to_string(&self, tab: &str) -> String
    where
        K: Display,
    {
        match self.inner.root_index() {
            Some(root) => format!("Tree{}", self.to_string_node(root, tab, "└─")),
            None => "Tree ∅".to_string(),
        }
    }
}
