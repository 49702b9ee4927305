pub use super::types::{AvlNode, AvlNodeLike};
pub use super::util::{
    assert_avl_tree, insert_fix, node_swap, print, rebalance_after_insert, rebalance_after_remove,
    remove_fix, rotate_left, rotate_right,
};
