use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::trace;

use crate::error::TreeError;
use crate::print::print_binary;
use crate::types::Side;
use crate::util::{self, get_child, get_l, get_p, get_r, replace_in_parent, set_l, set_p, set_r, side_of};

use super::types::AvlNodeLike;

#[inline]
fn bf<K, V, N>(arena: &[N], i: u32) -> i8
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].bf()
}

#[inline]
fn set_bf<K, V, N>(arena: &mut [N], i: u32, v: i8)
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].set_bf(v);
}

#[inline]
fn lean(side: Side) -> i8 {
    match side {
        Side::Left => -1,
        Side::Right => 1,
    }
}

/// Promotes `x`'s right child into `x`'s position.
///
/// Balance factors are recomputed from their previous values, without
/// measuring subtree heights. No-op when `x` has no right child.
pub fn rotate_left<K, V, N>(arena: &mut [N], root: &mut Option<u32>, x: u32)
where
    N: AvlNodeLike<K, V>,
{
    let Some(y) = get_r(arena, x) else {
        return;
    };
    let p = get_p(arena, x);
    let yl = get_l(arena, y);

    set_r(arena, x, yl);
    if let Some(yl) = yl {
        set_p(arena, yl, Some(x));
    }
    replace_in_parent(arena, root, p, x, Some(y));
    set_p(arena, y, p);
    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));

    let xbf = bf(arena, x) - 1 - bf(arena, y).max(0);
    let ybf = bf(arena, y) - 1 + xbf.min(0);
    set_bf(arena, x, xbf);
    set_bf(arena, y, ybf);
    trace!(x, y, x_bf = xbf, y_bf = ybf, "rotate left");
}

/// Promotes `x`'s left child into `x`'s position. Mirror of [`rotate_left`].
pub fn rotate_right<K, V, N>(arena: &mut [N], root: &mut Option<u32>, x: u32)
where
    N: AvlNodeLike<K, V>,
{
    let Some(y) = get_l(arena, x) else {
        return;
    };
    let p = get_p(arena, x);
    let yr = get_r(arena, y);

    set_l(arena, x, yr);
    if let Some(yr) = yr {
        set_p(arena, yr, Some(x));
    }
    replace_in_parent(arena, root, p, x, Some(y));
    set_p(arena, y, p);
    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));

    let xbf = bf(arena, x) + 1 - bf(arena, y).min(0);
    let ybf = bf(arena, y) + 1 + xbf.max(0);
    set_bf(arena, x, xbf);
    set_bf(arena, y, ybf);
    trace!(x, y, x_bf = xbf, y_bf = ybf, "rotate right");
}

/// Rotates `x` so that it moves down towards `dir`.
#[inline]
fn rotate<K, V, N>(arena: &mut [N], root: &mut Option<u32>, x: u32, dir: Side)
where
    N: AvlNodeLike<K, V>,
{
    match dir {
        Side::Left => rotate_left(arena, root, x),
        Side::Right => rotate_right(arena, root, x),
    }
}

/// Fixes balances after a fresh leaf `node` was attached under its parent.
pub fn rebalance_after_insert<K, V, N>(arena: &mut [N], root: &mut Option<u32>, node: u32)
where
    N: AvlNodeLike<K, V>,
{
    let Some(p) = get_p(arena, node) else {
        return;
    };
    if bf(arena, p) != 0 {
        // The parent already had the other child: its height is unchanged.
        set_bf(arena, p, 0);
        return;
    }
    set_bf(arena, p, lean(side_of(arena, p, node)));
    insert_fix(arena, root, p, node);
}

/// Walks up from `parent`, whose subtree just grew by one level through
/// `child`, until the growth is absorbed or resolved by a rotation.
pub fn insert_fix<K, V, N>(arena: &mut [N], root: &mut Option<u32>, mut parent: u32, mut child: u32)
where
    N: AvlNodeLike<K, V>,
{
    while let Some(g) = get_p(arena, parent) {
        let side = side_of(arena, g, parent);
        let gbf = arena[g as usize].update_bf(lean(side));
        match gbf {
            0 => return,
            -1 | 1 => {
                child = parent;
                parent = g;
            }
            _ => {
                if side_of(arena, parent, child) == side {
                    trace!(g, parent, "insert: single rotation");
                    rotate(arena, root, g, side.opposite());
                } else {
                    trace!(g, parent, child, "insert: double rotation");
                    rotate(arena, root, parent, side);
                    rotate(arena, root, g, side.opposite());
                }
                return;
            }
        }
    }
}

/// Rotates a node whose `heavy` side is two levels taller than the other.
///
/// Returns the new subtree root when the subtree lost height (the caller has
/// to keep ascending), or `None` when its height is unchanged.
fn rebalance<K, V, N>(arena: &mut [N], root: &mut Option<u32>, node: u32, heavy: Side) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    let c = get_child(arena, node, heavy)?;
    let cbf = bf(arena, c);
    if cbf * lean(heavy) >= 0 {
        trace!(node, c, c_bf = cbf, "remove: single rotation");
        rotate(arena, root, node, heavy.opposite());
        return (cbf != 0).then_some(c);
    }
    let g = get_child(arena, c, heavy.opposite())?;
    trace!(node, c, g, "remove: double rotation");
    rotate(arena, root, c, heavy);
    rotate(arena, root, node, heavy.opposite());
    Some(g)
}

/// Walks up from `node`, one of whose subtrees just lost a level, applying
/// `diff` (+1 when the left side shrank, -1 when the right side did) until
/// some ancestor keeps its height.
pub fn remove_fix<K, V, N>(arena: &mut [N], root: &mut Option<u32>, mut node: u32, mut diff: i8)
where
    N: AvlNodeLike<K, V>,
{
    loop {
        let nbf = arena[node as usize].update_bf(diff);
        let top = match nbf {
            -1 | 1 => return,
            0 => node,
            2 => match rebalance(arena, root, node, Side::Right) {
                Some(top) => top,
                None => return,
            },
            _ => match rebalance(arena, root, node, Side::Left) {
                Some(top) => top,
                None => return,
            },
        };
        let Some(p) = get_p(arena, top) else {
            return;
        };
        diff = -lean(side_of(arena, p, top));
        node = p;
    }
}

/// Fixes balances after a node was spliced out from `side` of `parent`.
pub fn rebalance_after_remove<K, V, N>(arena: &mut [N], root: &mut Option<u32>, parent: u32, side: Side)
where
    N: AvlNodeLike<K, V>,
{
    remove_fix(arena, root, parent, -lean(side));
}

/// Swaps the tree positions of `x` and `y`; balance factors stay with the
/// positions.
pub fn node_swap<K, V, N>(arena: &mut [N], root: &mut Option<u32>, x: u32, y: u32)
where
    N: AvlNodeLike<K, V>,
{
    util::swap(arena, root, x, y);
    let (xbf, ybf) = (bf(arena, x), bf(arena, y));
    set_bf(arena, x, ybf);
    set_bf(arena, y, xbf);
    trace!(x, y, "node swap");
}

fn check_balance<K, V, N>(arena: &[N], node: u32) -> Result<i32, TreeError>
where
    N: AvlNodeLike<K, V>,
{
    let lh = match get_l(arena, node) {
        Some(l) => check_balance(arena, l)?,
        None => 0,
    };
    let rh = match get_r(arena, node) {
        Some(r) => check_balance(arena, r)?,
        None => 0,
    };

    let expected = rh - lh;
    let actual = bf(arena, node);
    if i32::from(actual) != expected {
        return Err(TreeError::BalanceMismatch {
            node,
            expected,
            actual,
        });
    }
    if !(-1..=1).contains(&actual) {
        return Err(TreeError::Unbalanced {
            node,
            balance: actual,
        });
    }
    Ok(1 + lh.max(rh))
}

/// Checks links, key order, and balance factors of an AVL tree.
pub fn assert_avl_tree<K, V, N, C>(arena: &[N], root: Option<u32>, comparator: &C) -> Result<(), TreeError>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    util::assert_tree(arena, root, |n| n.key(), comparator)?;
    if let Some(root) = root {
        check_balance(arena, root)?;
    }
    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V>,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let n = &arena[i as usize];
    let label = format!("AvlNode[{i}] [bf={}] {{ {:?} = {:?} }}", n.bf(), n.key(), n.value());
    let (l, r) = (n.l(), n.r());
    if l.is_none() && r.is_none() {
        return label;
    }
    let left = |tab: &str| print::<K, V, N>(arena, l, tab);
    let right = |tab: &str| print::<K, V, N>(arena, r, tab);
    label + &print_binary(tab, &left, &right)
}
