use std::cmp::Ordering;
use std::marker::PhantomData;
use std::mem;

use tracing::trace;

use crate::error::TreeError;
use crate::types::{KvNode, Node, Side};
use crate::util::{self, find_or_next_lower, find_slot, first, last, next, prev, Slot};

/// Structural strategy of a tree flavour.
///
/// The provided `link`/`unlink` perform plain binary-search-tree surgery and
/// call the hooks afterwards. A balanced flavour overrides the hooks; the
/// plain flavour keeps the defaults.
pub trait TreeOps<K, V, N>
where
    N: KvNode<K, V>,
{
    /// Runs after the fresh leaf `node` was attached.
    fn after_link(_arena: &mut [N], _root: &mut Option<u32>, _node: u32) {}

    /// Runs after a node was spliced out from `side` of `parent`.
    fn after_splice(_arena: &mut [N], _root: &mut Option<u32>, _parent: u32, _side: Side) {}

    /// Exchanges the tree positions of `x` and `y`.
    fn node_swap(arena: &mut [N], root: &mut Option<u32>, x: u32, y: u32) {
        util::swap(arena, root, x, y);
    }

    /// Attaches the detached `node` at a vacant slot.
    fn link(arena: &mut [N], root: &mut Option<u32>, node: u32, parent: Option<u32>, side: Side) {
        util::attach(arena, root, node, parent, side);
        Self::after_link(arena, root, node);
    }

    /// Detaches `node` from the tree. The node stays in the arena with all
    /// links cleared.
    fn unlink(arena: &mut [N], root: &mut Option<u32>, node: u32) {
        let n = &arena[node as usize];
        if n.l().is_some() && n.r().is_some() {
            if let Some(pred) = prev(arena, node) {
                trace!(node, pred, "swap with predecessor");
                Self::node_swap(arena, root, node, pred);
            }
        }
        if let Some((parent, side)) = util::splice(arena, root, node) {
            Self::after_splice(arena, root, parent, side);
        }
    }
}

/// Most nodes an [`ArenaMap`] holds. Every handle is below this value.
pub const MAX_LEN: usize = u32::MAX as usize;

/// Handle for the arena slot at position `len`, `None` once the arena is
/// full.
pub fn handle_at(len: usize) -> Option<u32> {
    u32::try_from(len).ok().filter(|&idx| (idx as usize) < MAX_LEN)
}

/// Arena-backed sorted map core.
///
/// Nodes live in a `Vec<N>` and refer to each other by `u32` handle. The
/// arena holds exactly the nodes of the tree: removal frees the slot right
/// away by moving the last node into it, so handles stay valid only until
/// the next removal.
///
/// At most [`MAX_LEN`] nodes fit. Inserting a new key into a full map
/// panics.
pub struct ArenaMap<K, V, N, O, C, F>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
    F: Fn(K, V) -> N,
{
    arena: Vec<N>,
    root: Option<u32>,
    comparator: C,
    new_node: F,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O, C, F> ArenaMap<K, V, N, O, C, F>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> Ordering,
    F: Fn(K, V) -> N,
{
    pub fn with(comparator: C, new_node: F) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
            new_node,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    pub fn value_mut_by_index(&mut self, idx: u32) -> &mut V {
        self.arena[idx as usize].value_mut()
    }

    /// Inserts or overwrites. Returns the previous value of an existing key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let slot = find_slot(&self.arena, self.root, &key, |n| n.key(), &self.comparator);
        match slot {
            Slot::Occupied(idx) => Some(mem::replace(self.arena[idx as usize].value_mut(), value)),
            Slot::Vacant { parent, side } => {
                let Some(idx) = handle_at(self.arena.len()) else {
                    panic!("arena map is full ({MAX_LEN} nodes)");
                };
                self.arena.push((self.new_node)(key, value));
                O::link(&mut self.arena, &mut self.root, idx, parent, side);
                None
            }
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key, |n| n.key(), &self.comparator)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i as usize].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    pub fn try_get(&self, key: &K) -> Result<&V, TreeError> {
        self.get(key).ok_or(TreeError::KeyNotFound)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` and returns its entry; `None` when absent.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let idx = self.find(key)?;
        O::unlink(&mut self.arena, &mut self.root, idx);
        Some(self.release(idx).into_entry())
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Drops the detached node at `idx`, moving the last arena node into
    /// its slot.
    fn release(&mut self, idx: u32) -> N {
        let last = (self.arena.len() - 1) as u32;
        if idx != last {
            util::relocate(&mut self.arena, &mut self.root, last, idx);
        }
        self.arena.swap_remove(idx as usize)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> usize {
        util::height(&self.arena, self.root)
    }

    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        find_or_next_lower(&self.arena, self.root, key, |n| n.key(), &self.comparator)
    }

    pub fn first(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    pub fn last(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V, N> {
        Iter {
            arena: &self.arena,
            curr: self.first(),
            remaining: self.len(),
            _kv: PhantomData,
        }
    }

    /// Node handles in ascending key order.
    pub fn handles(&self) -> Handles<'_, N> {
        Handles {
            arena: &self.arena,
            curr: self.first(),
        }
    }

    pub fn for_each<G: FnMut(u32, &N)>(&self, mut f: G) {
        for i in self.handles() {
            f(i, &self.arena[i as usize]);
        }
    }
}

/// In-order iterator over `(&K, &V)`.
pub struct Iter<'a, K, V, N> {
    arena: &'a [N],
    curr: Option<u32>,
    remaining: usize,
    _kv: PhantomData<fn() -> (K, V)>,
}

impl<'a, K: 'a, V: 'a, N> Iterator for Iter<'a, K, V, N>
where
    N: KvNode<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        let node = &self.arena[i as usize];
        self.curr = next(self.arena, i);
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a, N> ExactSizeIterator for Iter<'a, K, V, N> where N: KvNode<K, V> {}

/// In-order iterator over node handles.
pub struct Handles<'a, N> {
    arena: &'a [N],
    curr: Option<u32>,
}

impl<N: Node> Iterator for Handles<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.curr?;
        self.curr = next(self.arena, out);
        Some(out)
    }
}
