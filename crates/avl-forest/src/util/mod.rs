//! Plain binary-search-tree utilities over a `Vec`-backed arena.
//!
//! These are the structural building blocks every tree flavour shares:
//! navigation (`first`, `next`, `prev`, ...), insertion-point search,
//! leaf attachment, splicing out a node with at most one child, structural
//! swap, and arena slot relocation. None of them look at balance factors.
//!
//! Key-based helpers take a `key_of` accessor closure so they work with any
//! node layout.

pub mod equal_paths;
pub mod swap;

use std::cmp::Ordering;

use crate::error::TreeError;
use crate::types::{Node, Side};

pub use equal_paths::equal_paths;
pub use swap::swap;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

#[inline]
pub(crate) fn get_child<N: Node>(arena: &[N], idx: u32, side: Side) -> Option<u32> {
    match side {
        Side::Left => get_l(arena, idx),
        Side::Right => get_r(arena, idx),
    }
}

#[inline]
pub(crate) fn set_child<N: Node>(arena: &mut [N], idx: u32, side: Side, v: Option<u32>) {
    match side {
        Side::Left => set_l(arena, idx, v),
        Side::Right => set_r(arena, idx, v),
    }
}

/// Which side of `parent` the node `child` hangs on.
#[inline]
pub fn side_of<N: Node>(arena: &[N], parent: u32, child: u32) -> Side {
    if get_l(arena, parent) == Some(child) {
        Side::Left
    } else {
        Side::Right
    }
}

/// Points whatever referenced `old` (its parent's child slot, or the root
/// handle) at `new` instead. Does not touch `new`'s parent link.
pub(crate) fn replace_in_parent<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    parent: Option<u32>,
    old: u32,
    new: Option<u32>,
) {
    match parent {
        Some(p) => {
            let side = side_of(arena, p, old);
            set_child(arena, p, side, new);
        }
        None => *root = new,
    }
}

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(l) = get_l(arena, curr) {
        curr = l;
    }
    Some(curr)
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root?;
    while let Some(r) = get_r(arena, curr) {
        curr = r;
    }
    Some(curr)
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_l(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

/// In-order predecessor.
///
/// For a node with a left subtree this is the rightmost node of that
/// subtree, which is what two-children removal swaps with.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            return Some(p);
        }
        curr = p;
    }
    None
}

fn size_inner<N: Node>(arena: &[N], root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes on the longest root-to-leaf path. Empty tree is 0.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |i| {
        1 + height(arena, get_l(arena, i)).max(height(arena, get_r(arena, i)))
    })
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    while let Some(i) = curr {
        curr = match comparator(key, key_of(&arena[i as usize])) {
            Ordering::Equal => return Some(i),
            Ordering::Less => get_l(arena, i),
            Ordering::Greater => get_r(arena, i),
        };
    }
    None
}

/// Finds node by key, or the next lower node if the exact key does not exist.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let mut curr = root;
    let mut result = None;
    while let Some(i) = curr {
        match comparator(key_of(&arena[i as usize]), key) {
            Ordering::Equal => return Some(i),
            Ordering::Greater => curr = get_l(arena, i),
            Ordering::Less => {
                result = Some(i);
                curr = get_r(arena, i);
            }
        }
    }
    result
}

/// Result of an insertion-point search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// A node with the key already exists.
    Occupied(u32),
    /// The key is absent. A new node belongs at `side` of `parent`, or at
    /// the root when `parent` is `None`.
    Vacant { parent: Option<u32>, side: Side },
}

/// Locates the existing node for `key` or the empty child slot where a node
/// with that key must be attached.
pub fn find_slot<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Slot
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = root else {
        return Slot::Vacant {
            parent: None,
            side: Side::Left,
        };
    };
    loop {
        let side = match comparator(key, key_of(&arena[curr as usize])) {
            Ordering::Equal => return Slot::Occupied(curr),
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        match get_child(arena, curr, side) {
            Some(child) => curr = child,
            None => {
                return Slot::Vacant {
                    parent: Some(curr),
                    side,
                }
            }
        }
    }
}

/// Links the detached `node` into an empty child slot (or as the root).
pub fn attach<N: Node>(
    arena: &mut [N],
    root: &mut Option<u32>,
    node: u32,
    parent: Option<u32>,
    side: Side,
) {
    set_p(arena, node, parent);
    set_l(arena, node, None);
    set_r(arena, node, None);
    match parent {
        Some(p) => {
            debug_assert!(get_child(arena, p, side).is_none());
            set_child(arena, p, side, Some(node));
        }
        None => *root = Some(node),
    }
}

/// Unlinks `node`, which must have at most one child; the child (if any)
/// takes its place. Returns the former parent and the side the node hung
/// on, or `None` when the node was the root.
pub fn splice<N: Node>(arena: &mut [N], root: &mut Option<u32>, node: u32) -> Option<(u32, Side)> {
    let p = get_p(arena, node);
    let l = get_l(arena, node);
    let r = get_r(arena, node);
    debug_assert!(l.is_none() || r.is_none(), "splice needs at most one child");
    let child = l.or(r);

    if let Some(c) = child {
        set_p(arena, c, p);
    }
    let slot = p.map(|p| (p, side_of(arena, p, node)));
    replace_in_parent(arena, root, p, node, child);

    set_p(arena, node, None);
    set_l(arena, node, None);
    set_r(arena, node, None);
    slot
}

/// Rewrites every link that refers to `from` so it refers to `to` instead.
///
/// Used right before `Vec::swap_remove(to)` moves the last arena node into
/// the freed slot. The node at `to` must already be detached.
pub fn relocate<N: Node>(arena: &mut [N], root: &mut Option<u32>, from: u32, to: u32) {
    let p = get_p(arena, from);
    match p {
        Some(p) => {
            let side = side_of(arena, p, from);
            set_child(arena, p, side, Some(to));
        }
        None => {
            if *root == Some(from) {
                *root = Some(to);
            }
        }
    }
    if let Some(l) = get_l(arena, from) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, from) {
        set_p(arena, r, Some(to));
    }
}

fn check_links<N: Node>(arena: &[N], node: u32) -> Result<(), TreeError> {
    for child in [get_l(arena, node), get_r(arena, node)].into_iter().flatten() {
        if get_p(arena, child) != Some(node) {
            return Err(TreeError::BrokenParentLink {
                parent: node,
                child,
            });
        }
        check_links(arena, child)?;
    }
    Ok(())
}

/// Checks parent/child link consistency and strict in-order key ordering.
pub fn assert_tree<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
    comparator: C,
) -> Result<(), TreeError>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err(TreeError::RootHasParent { root });
    }
    check_links(arena, root)?;

    let mut prev_node: Option<u32> = None;
    let mut curr = first(arena, Some(root));
    while let Some(i) = curr {
        if let Some(p) = prev_node {
            let cmp = comparator(key_of(&arena[p as usize]), key_of(&arena[i as usize]));
            if cmp != Ordering::Less {
                return Err(TreeError::OrderViolated { node: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }
    Ok(())
}
