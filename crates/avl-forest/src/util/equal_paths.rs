use crate::types::Node;

use super::{get_l, get_r};

/// Height of the subtree if every leaf in it sits at the same depth.
///
/// A node with a single child contributes no leaf of its own, so only the
/// child's subtree is checked.
fn uniform_height<N: Node>(arena: &[N], node: Option<u32>) -> Option<usize> {
    let Some(i) = node else {
        return Some(0);
    };
    match (get_l(arena, i), get_r(arena, i)) {
        (None, None) => Some(1),
        (Some(c), None) | (None, Some(c)) => uniform_height(arena, Some(c)).map(|h| h + 1),
        (Some(l), Some(r)) => {
            let lh = uniform_height(arena, Some(l))?;
            let rh = uniform_height(arena, Some(r))?;
            (lh == rh).then_some(lh + 1)
        }
    }
}

/// Returns `true` when all root-to-leaf paths have the same length.
///
/// The empty tree and a single node both qualify.
pub fn equal_paths<N: Node>(arena: &[N], root: Option<u32>) -> bool {
    uniform_height(arena, root).is_some()
}
