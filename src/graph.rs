//! In-memory labeled multigraph.
//!
//! Nodes are kept in insertion order and addressed internally by a dense slot
//! index. Outgoing edges are stored per source slot, also in insertion order,
//! and a triple set rejects duplicate `(from, to, label)` insertions.

use std::{fmt::Debug, hash::Hash};

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Bounds shared by node identifiers and edge labels.
pub trait GraphKey: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> GraphKey for T {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabeledEdge<N, L> {
    pub from: N,
    pub to: N,
    pub label: L,
}

/// Borrowed view of a stored edge.
#[derive(Debug, PartialEq, Eq)]
pub struct EdgeRef<'g, N, L> {
    pub from: &'g N,
    pub to: &'g N,
    pub label: &'g L,
}

impl<N, L> Clone for EdgeRef<'_, N, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N, L> Copy for EdgeRef<'_, N, L> {}

impl<N: Clone, L: Clone> EdgeRef<'_, N, L> {
    pub fn to_edge(&self) -> LabeledEdge<N, L> {
        LabeledEdge {
            from: self.from.clone(),
            to: self.to.clone(),
            label: self.label.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Child<L> {
    pub(crate) to: usize,
    pub(crate) label: L,
}

#[derive(Debug, Clone)]
pub struct LabeledMultigraph<N, L> {
    nodes: Vec<N>,
    index: AHashMap<N, usize>,
    children: Vec<Vec<Child<L>>>,
    edges: AHashSet<(usize, usize, L)>,
}

impl<N, L> Default for LabeledMultigraph<N, L> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: AHashMap::new(),
            children: Vec::new(),
            edges: AHashSet::new(),
        }
    }
}

impl<N: GraphKey, L: GraphKey> LabeledMultigraph<N, L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `id` unless an identical identifier is already stored.
    /// Returns `true` when the node was new.
    pub fn add_node(&mut self, id: N) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        let slot = self.nodes.len();
        self.index.insert(id.clone(), slot);
        self.nodes.push(id);
        self.children.push(Vec::new());
        true
    }

    pub fn contains_node(&self, id: &N) -> bool {
        self.index.contains_key(id)
    }

    /// Adds the directed edge `from -> to` carrying `label`.
    ///
    /// Both endpoints must already be nodes; otherwise `NodeNotFound` is
    /// returned and nothing is stored. Re-adding an existing triple is a no-op
    /// and returns `Ok(false)`. Self loops are accepted.
    pub fn add_edge(&mut self, from: &N, to: &N, label: L) -> Result<bool, GraphError> {
        let source = self.require_slot(from)?;
        let target = self.require_slot(to)?;
        if !self.edges.insert((source, target, label.clone())) {
            return Ok(false);
        }
        self.children[source].push(Child { to: target, label });
        Ok(true)
    }

    /// Node identifiers in the order they were first added.
    pub fn list_nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Owned copies of every outgoing edge of `id`, in insertion order.
    pub fn list_children(&self, id: &N) -> Result<Vec<LabeledEdge<N, L>>, GraphError> {
        Ok(self.children(id)?.map(|edge| edge.to_edge()).collect())
    }

    /// Borrowed outgoing edges of `id`, in insertion order.
    pub fn children(
        &self,
        id: &N,
    ) -> Result<impl ExactSizeIterator<Item = EdgeRef<'_, N, L>> + '_, GraphError> {
        let slot = self.require_slot(id)?;
        Ok(self.edge_refs(slot))
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<N: GraphKey, L: GraphKey> LabeledMultigraph<N, L> {
    pub(crate) fn slot(&self, id: &N) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_at(&self, slot: usize) -> &N {
        &self.nodes[slot]
    }

    pub(crate) fn child_slots(&self, slot: usize) -> &[Child<L>] {
        &self.children[slot]
    }

    fn edge_refs(&self, slot: usize) -> impl ExactSizeIterator<Item = EdgeRef<'_, N, L>> + '_ {
        let from = &self.nodes[slot];
        self.children[slot].iter().map(move |child| EdgeRef {
            from,
            to: &self.nodes[child.to],
            label: &child.label,
        })
    }

    fn require_slot(&self, id: &N) -> Result<usize, GraphError> {
        self.slot(id)
            .ok_or_else(|| GraphError::not_found(format!("{id:?}")))
    }
}
