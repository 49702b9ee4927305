use crate::fuzzer::Fuzzer;

/// A single mutation applied to a tree under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeOp {
    Insert(i64, i64),
    Remove(i64),
}

/// Generates random insert/remove sequences over a bounded key space.
///
/// Keeps track of which keys a model tree would hold, so removals hit live
/// keys most of the time and the tree size drifts around instead of only
/// growing.
pub struct Workload {
    fuzzer: Fuzzer,
    max_key: i64,
    live: Vec<i64>,
}

impl Workload {
    /// Keys are drawn from `0..=max_key`.
    pub fn new(fuzzer: Fuzzer, max_key: i64) -> Self {
        Self {
            fuzzer,
            max_key,
            live: Vec::new(),
        }
    }

    pub fn fuzzer(&self) -> &Fuzzer {
        &self.fuzzer
    }

    /// Keys currently present, in insertion order.
    pub fn live(&self) -> &[i64] {
        &self.live
    }

    /// Produces the next operation.
    pub fn next_op(&mut self) -> TreeOp {
        let grow = self.live.is_empty() || self.fuzzer.random_bool(0.6);
        if grow {
            let key = self.fuzzer.random_int(0, self.max_key);
            let value = self.fuzzer.random_int(i64::from(i32::MIN), i64::from(i32::MAX));
            if !self.live.contains(&key) {
                self.live.push(key);
            }
            return TreeOp::Insert(key, value);
        }
        if self.fuzzer.random_bool(0.9) {
            let idx = self.fuzzer.random_int(0, self.live.len() as i64 - 1) as usize;
            TreeOp::Remove(self.live.swap_remove(idx))
        } else {
            let key = self.fuzzer.random_int(0, self.max_key);
            self.live.retain(|k| *k != key);
            TreeOp::Remove(key)
        }
    }

    /// Produces `n` operations.
    pub fn take(&mut self, n: usize) -> Vec<TreeOp> {
        (0..n).map(|_| self.next_op()).collect()
    }
}
