use thiserror::Error;

/// Errors reported by lookups and by the structural validators.
///
/// Only [`TreeError::KeyNotFound`] is a runtime condition. The remaining
/// variants come from `assert_valid` and mean a tree invariant was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("key not found")]
    KeyNotFound,
    #[error("root node {root} has a parent link")]
    RootHasParent { root: u32 },
    #[error("node {child} does not link back to its parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("node {node}: balance factor is {actual}, subtree heights give {expected}")]
    BalanceMismatch { node: u32, expected: i32, actual: i8 },
    #[error("node {node}: balance factor {balance} is outside [-1, 1]")]
    Unbalanced { node: u32, balance: i8 },
    #[error("node {node} is not greater than its in-order predecessor")]
    OrderViolated { node: u32 },
}
