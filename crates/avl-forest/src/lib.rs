//! Arena-based AVL tree map.
//!
//! All trees keep their nodes in a `Vec<N>` arena owned by the map; every
//! "pointer" is an `Option<u32>` handle into it. Rotations and swaps are
//! handle reassignment, never data copies.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] and [`KvNode`] link/payload traits, [`Side`] |
//! | [`util`] | Plain BST surgery: `find_slot`, `attach`, `splice`, `swap`, `prev`, `next`, [`equal_paths`] |
//! | [`avl`] | Rotations, insert/remove fix-up, [`AvlMap`], [`AvlSet`] |
//! | [`data_types`] | [`ArenaMap`] core and the [`TreeOps`] hook trait |
//! | [`tree`] | Unbalanced [`Tree`] over the same core |
//! | [`print`] | Text rendering of trees |
//!
//! ```
//! use avl_forest::AvlMap;
//!
//! let mut map = AvlMap::new();
//! map.insert(3, "c");
//! map.insert(1, "a");
//! map.insert(2, "b");
//! assert_eq!(map.get(&2), Some(&"b"));
//! assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//! map.assert_valid().unwrap();
//! ```

pub mod avl;
pub mod data_types;
pub mod error;
pub mod print;
#[cfg(feature = "serde")]
mod serde_impl;
#[path = "Tree.rs"]
pub mod tree;
#[path = "TreeNode.rs"]
pub mod tree_node;
pub mod types;
pub mod util;

pub use avl::{AvlMap, AvlNode, AvlSet};
pub use data_types::{ArenaMap, TreeOps};
pub use error::TreeError;
pub use tree::Tree;
pub use tree_node::TreeNode;
pub use types::{KvNode, Node, Side};
pub use util::equal_paths;
