//! Node trait definitions.
//!
//! Every tree in this crate stores its nodes in a caller-owned `Vec<N>`
//! arena. A "pointer" is an `Option<u32>` handle into that arena, so the
//! parent/left/right links never own anything: the arena does.

/// Parent/left/right links of a binary tree node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn into_entry(self) -> (K, V);
}

/// Which child slot of a parent a node occupies (or will occupy).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
