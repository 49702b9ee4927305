//! avl-forest-util - test support for avl-forest
//!
//! A seeded [`Fuzzer`] and the [`TreeOp`] workloads it generates.

pub mod fuzzer;
pub mod workload;

pub use fuzzer::Fuzzer;
pub use workload::{TreeOp, Workload};
