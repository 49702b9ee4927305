//! Generic map machinery shared by the tree flavours.

pub mod map;

pub use map::{handle_at, ArenaMap, Handles, Iter, TreeOps, MAX_LEN};
