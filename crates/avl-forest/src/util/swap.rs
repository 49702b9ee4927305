use crate::types::Node;

use super::{get_l, get_p, get_r, set_child, set_l, set_p, set_r, side_of};

/// Exchanges the positions of `x` and `y` in the tree.
///
/// Node identities (arena slots, keys, values) stay put; only links move.
/// Handles adjacent nodes (one the parent of the other) and siblings.
pub fn swap<N: Node>(arena: &mut [N], root: &mut Option<u32>, x: u32, y: u32) {
    if x == y {
        return;
    }

    let (xp, xl, xr) = (get_p(arena, x), get_l(arena, x), get_r(arena, x));
    let (yp, yl, yr) = (get_p(arena, y), get_l(arena, y), get_r(arena, y));
    let x_slot = xp.map(|p| (p, side_of(arena, p, x)));
    let y_slot = yp.map(|p| (p, side_of(arena, p, y)));

    // A link to x becomes a link to y and vice versa.
    let flip = |v: Option<u32>| match v {
        Some(i) if i == x => Some(y),
        Some(i) if i == y => Some(x),
        other => other,
    };

    set_p(arena, x, flip(yp));
    set_l(arena, x, flip(yl));
    set_r(arena, x, flip(yr));
    set_p(arena, y, flip(xp));
    set_l(arena, y, flip(xl));
    set_r(arena, y, flip(xr));

    for node in [x, y] {
        if let Some(l) = get_l(arena, node) {
            set_p(arena, l, Some(node));
        }
        if let Some(r) = get_r(arena, node) {
            set_p(arena, r, Some(node));
        }
    }

    match x_slot {
        None => *root = Some(y),
        Some((p, side)) if p != y => set_child(arena, p, side, Some(y)),
        Some(_) => {}
    }
    match y_slot {
        None => *root = Some(x),
        Some((p, side)) if p != x => set_child(arena, p, side, Some(x)),
        Some(_) => {}
    }
}
