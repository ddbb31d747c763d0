//! Search-tree nodes stored in an append-only arena.
//!
//! Parents are referenced by [`NodeId`] (an index into the arena), never by
//! ownership. Parent chains strictly decrease in depth, so they are acyclic
//! and path reconstruction is a plain index walk.

use std::hash::{Hash, Hasher};

use crate::problem::{Cost, Problem, ProblemError};

/// Index of a node inside its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena (also the creation order).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An immutable search-tree node.
///
/// Equality and hashing look at `state` only: two nodes reached along
/// different paths are the same node for duplicate suppression. Code that
/// cares about cost must compare `path_cost` explicitly.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    pub id: NodeId,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    pub state: S,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// Accumulated cost from the root (`g`).
    pub path_cost: Cost,
    /// Tree depth (root = 0).
    pub depth: u32,
}

impl<S, A> Node<S, A> {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S: PartialEq, A> PartialEq for Node<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for Node<S, A> {}

impl<S: Hash, A> Hash for Node<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Append-only node storage for one search call.
///
/// Nodes live until the arena is dropped; a [`NodeId`] is only meaningful
/// for the arena that issued it.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<S, A>> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a root node for `state`.
    pub fn root(&mut self, state: S) -> NodeId {
        self.push(None, state, None, 0.0, 0)
    }

    /// Create the child of `parent` reached by `action`.
    ///
    /// # Errors
    ///
    /// Propagates the problem's [`ProblemError`] from `result`.
    pub fn child_node<P>(
        &mut self,
        problem: &P,
        parent: NodeId,
        action: A,
    ) -> Result<NodeId, ProblemError>
    where
        P: Problem<State = S, Action = A> + ?Sized,
    {
        let from = &self[parent];
        let next_state = problem.result(&from.state, &action)?;
        let path_cost = problem.path_cost(from, &action, &next_state);
        let depth = from.depth + 1;
        Ok(self.push(Some(parent), next_state, Some(action), path_cost, depth))
    }

    /// Expand `id` into one child per applicable action.
    ///
    /// Children follow the problem's action order, except that the
    /// preferred action (if any) is moved to the front. The sort is stable,
    /// so every other action keeps its relative position.
    ///
    /// # Errors
    ///
    /// Propagates the problem's [`ProblemError`] from `actions` or `result`.
    pub fn expand<P>(&mut self, problem: &P, id: NodeId) -> Result<Vec<NodeId>, ProblemError>
    where
        P: Problem<State = S, Action = A> + ?Sized,
        A: PartialEq,
    {
        let mut actions = problem.actions(&self[id].state)?;
        if let Some(preferred) = problem.preferred_action() {
            actions.sort_by_key(|action| *action != preferred);
        }
        actions
            .into_iter()
            .map(|action| self.child_node(problem, id, action))
            .collect()
    }

    /// Node ids from the root to `id`, inclusive.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self[id].depth as usize + 1);
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self[node_id].parent;
        }
        path.reverse();
        path
    }

    /// Actions labelling the path from the root to `id`.
    #[must_use]
    pub fn solution(&self, id: NodeId) -> Vec<A> {
        self.path(id)
            .into_iter()
            .skip(1)
            .filter_map(|node_id| self[node_id].action.clone())
            .collect()
    }

    /// States along the path from the root to `id`, inclusive.
    #[must_use]
    pub fn path_states(&self, id: NodeId) -> Vec<S> {
        self.path(id)
            .into_iter()
            .map(|node_id| self[node_id].state.clone())
            .collect()
    }

    fn push(
        &mut self,
        parent: Option<NodeId>,
        state: S,
        action: Option<A>,
        path_cost: Cost,
        depth: u32,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            parent,
            state,
            action,
            path_cost,
            depth,
        });
        id
    }
}

impl<S: Clone, A: Clone> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// # Panics
///
/// Panics if `id` was issued by a different arena and is out of range.
impl<S, A> std::ops::Index<NodeId> for NodeArena<S, A> {
    type Output = Node<S, A>;

    fn index(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }
}
