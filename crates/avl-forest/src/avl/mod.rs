//! AVL tree family: node type, rebalancing engine, map and set.

#[path = "AvlMap.rs"]
pub mod avl_map;
#[path = "AvlSet.rs"]
pub mod avl_set;
pub mod index;
pub mod types;
pub mod util;

pub use avl_map::{AvlMap, AvlOps};
pub use avl_set::AvlSet;
pub use index::*;
