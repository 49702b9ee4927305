//! Text rendering of trees for debugging.

#[path = "printTree.rs"]
mod print_tree;

pub use print_tree::{print_binary, print_tree};

/// Renders one child; receives the indentation prefix for nested lines.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;
