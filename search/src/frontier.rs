//! Frontiers: FIFO and LIFO for the uninformed strategies, and a priority
//! frontier with per-state replacement for the best-first family.
//!
//! Membership is tracked in `BTreeMap`s (not `HashMap`s) so every frontier
//! iterates and breaks ties deterministically.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap, VecDeque};

use crate::node::NodeId;
use crate::problem::Cost;

/// Container of generated-but-unexpanded nodes for the uninformed searches.
pub trait Frontier<S> {
    fn push(&mut self, id: NodeId, state: S);

    /// Remove the next node in this frontier's discipline.
    fn pop(&mut self) -> Option<NodeId>;

    /// Whether a node with `state` is currently held.
    fn contains(&self, state: &S) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size reached so far.
    fn high_water(&self) -> usize;
}

/// Multiset of states held by a frontier.
#[derive(Debug, Clone)]
struct Membership<S> {
    counts: BTreeMap<S, usize>,
}

impl<S: Ord> Membership<S> {
    fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    fn add(&mut self, state: S) {
        *self.counts.entry(state).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &S) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &S) -> bool {
        self.counts.contains_key(state)
    }
}

/// First-in first-out frontier (breadth-first).
#[derive(Debug, Clone)]
pub struct FifoFrontier<S> {
    queue: VecDeque<(NodeId, S)>,
    members: Membership<S>,
    high_water: usize,
}

impl<S: Ord + Clone> FifoFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            members: Membership::new(),
            high_water: 0,
        }
    }
}

impl<S: Ord + Clone> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord + Clone> Frontier<S> for FifoFrontier<S> {
    fn push(&mut self, id: NodeId, state: S) {
        self.members.add(state.clone());
        self.queue.push_back((id, state));
        self.high_water = self.high_water.max(self.queue.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.queue.pop_front()?;
        self.members.remove(&state);
        Some(id)
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Last-in first-out frontier (depth-first).
#[derive(Debug, Clone)]
pub struct LifoFrontier<S> {
    stack: Vec<(NodeId, S)>,
    members: Membership<S>,
    high_water: usize,
}

impl<S: Ord + Clone> LifoFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            members: Membership::new(),
            high_water: 0,
        }
    }
}

impl<S: Ord + Clone> Default for LifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord + Clone> Frontier<S> for LifoFrontier<S> {
    fn push(&mut self, id: NodeId, state: S) {
        self.members.add(state.clone());
        self.stack.push((id, state));
        self.high_water = self.high_water.max(self.stack.len());
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.stack.pop()?;
        self.members.remove(&state);
        Some(id)
    }

    fn contains(&self, state: &S) -> bool {
        self.members.contains(state)
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn high_water(&self) -> usize {
        self.high_water
    }
}

/// Heap entry. Orders by `f`, then state, then insertion sequence.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse` to pop
/// the lowest `f` first.
#[derive(Debug, Clone)]
struct Entry<S> {
    f: Cost,
    state: S,
    seq: u64,
    id: NodeId,
}

impl<S: Ord> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for Entry<S> {}

impl<S: Ord> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.state.cmp(&other.state))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// What [`PriorityFrontier::offer`] did with a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The state was not held; the node was added.
    Inserted,
    /// The held entry had an equal or worse priority and was replaced.
    Replaced { previous: NodeId },
    /// The held entry had a strictly better priority; the offer was dropped.
    Discarded { kept: NodeId },
}

/// Min-priority frontier holding at most one live entry per state.
///
/// Replacement is lazy: the superseded heap entry stays in the heap and is
/// skipped at pop time because its sequence number no longer matches the
/// live entry for its state.
#[derive(Debug, Clone)]
pub struct PriorityFrontier<S> {
    heap: BinaryHeap<Reverse<Entry<S>>>,
    live: BTreeMap<S, (Cost, u64, NodeId)>,
    next_seq: u64,
    high_water: usize,
}

impl<S: Ord + Clone> PriorityFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: BTreeMap::new(),
            next_seq: 0,
            high_water: 0,
        }
    }

    /// Offer node `id` for `state` with priority `f`.
    ///
    /// If the state is already held with priority `>= f`, the held entry is
    /// replaced; if it is held with a strictly lower priority, the offer is
    /// discarded.
    pub fn offer(&mut self, id: NodeId, state: S, f: Cost) -> Offer {
        let outcome = match self.live.get(&state) {
            Some(&(held_f, _, held_id)) => {
                if held_f.total_cmp(&f) == Ordering::Less {
                    return Offer::Discarded { kept: held_id };
                }
                Offer::Replaced { previous: held_id }
            }
            None => Offer::Inserted,
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.live.insert(state.clone(), (f, seq, id));
        self.heap.push(Reverse(Entry { f, state, seq, id }));
        self.high_water = self.high_water.max(self.live.len());
        outcome
    }

    /// Remove and return the live node with the lowest priority.
    ///
    /// Ties on `f` go to the smaller state.
    pub fn pop(&mut self) -> Option<(NodeId, Cost)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            let is_live = self
                .live
                .get(&entry.state)
                .is_some_and(|&(_, seq, _)| seq == entry.seq);
            if is_live {
                self.live.remove(&entry.state);
                return Some((entry.id, entry.f));
            }
        }
        None
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.live.contains_key(state)
    }

    /// Priority of the live entry for `state`, if held.
    #[must_use]
    pub fn priority_of(&self, state: &S) -> Option<Cost> {
        self.live.get(state).map(|&(f, _, _)| f)
    }

    /// Number of live entries (stale heap entries are not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S: Ord + Clone> Default for PriorityFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
