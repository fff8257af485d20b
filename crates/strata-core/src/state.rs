// SPDX-License-Identifier: Apache-2.0
//! Immutable snapshot of the full graph state.
//!
//! A snapshot is the triple (node table, edge table, adjacency index). It is
//! never mutated after construction: every command produces a new snapshot,
//! and each of the three tables sits behind an `Arc` so the tables a command
//! does not touch are shared with the prior snapshot instead of copied.
//! Sharing is an efficiency concern only; correctness needs nothing beyond
//! "the old snapshot remains valid and unchanged".
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::adjacency::AdjacencyIndex;
use crate::ident::{EdgeId, NodeId};
use crate::record::{EdgeRecord, NodeRecord};

/// One immutable instance of the full graph state.
///
/// `BTreeMap` tables keep iteration deterministic, which the snapshot digest
/// and replay tests rely on. The mapping order of the node and edge tables
/// carries no other meaning; only the adjacency sequences are ordered
/// (newest edge first).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    pub(crate) nodes: Arc<BTreeMap<NodeId, NodeRecord>>,
    pub(crate) edges: Arc<BTreeMap<EdgeId, EdgeRecord>>,
    pub(crate) adjacency: Arc<AdjacencyIndex>,
}

impl GraphState {
    /// Creates the empty snapshot (three empty tables).
    ///
    /// This is the initial/default state; there is no hidden process-wide
    /// singleton. Hosts call this once at session start and thread snapshots
    /// through their own dispatch loop from there.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node record for `id` when present.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.nodes.get(id)
    }

    /// Returns the edge record for `id` when present.
    #[must_use]
    pub fn edge(&self, id: &EdgeId) -> Option<&EdgeRecord> {
        self.edges.get(id)
    }

    /// Iterates over all nodes in ascending `NodeId` order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (&NodeId, &NodeRecord)> {
        self.nodes.iter()
    }

    /// Iterates over all edges in ascending `EdgeId` order.
    pub fn iter_edges(&self) -> impl Iterator<Item = (&EdgeId, &EdgeRecord)> {
        self.edges.iter()
    }

    /// Returns the derived adjacency index.
    ///
    /// Invariant: every edge id appears under both of its endpoints and
    /// nowhere else, and no entry witnesses zero edges. A node absent from
    /// the index has no edges.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Number of nodes in the snapshot.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the snapshot.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the snapshot holds no nodes and no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// New snapshot with a replaced node table; edge table and index shared.
    pub(crate) fn replace_nodes(&self, nodes: BTreeMap<NodeId, NodeRecord>) -> Self {
        GraphState {
            nodes: Arc::new(nodes),
            edges: Arc::clone(&self.edges),
            adjacency: Arc::clone(&self.adjacency),
        }
    }

    /// New snapshot with replaced edge table and index; node table shared.
    pub(crate) fn replace_links(
        &self,
        edges: BTreeMap<EdgeId, EdgeRecord>,
        adjacency: AdjacencyIndex,
    ) -> Self {
        GraphState {
            nodes: Arc::clone(&self.nodes),
            edges: Arc::new(edges),
            adjacency: Arc::new(adjacency),
        }
    }

    /// New snapshot with all three tables replaced.
    pub(crate) fn replace_all(
        nodes: BTreeMap<NodeId, NodeRecord>,
        edges: BTreeMap<EdgeId, EdgeRecord>,
        adjacency: AdjacencyIndex,
    ) -> Self {
        GraphState {
            nodes: Arc::new(nodes),
            edges: Arc::new(edges),
            adjacency: Arc::new(adjacency),
        }
    }

    /// Shares the node table `Arc`; used by tests to assert structural
    /// sharing between snapshots.
    #[must_use]
    pub fn shares_nodes_with(&self, other: &GraphState) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    /// Shares the edge table `Arc`; used by tests to assert structural
    /// sharing between snapshots.
    #[must_use]
    pub fn shares_edges_with(&self, other: &GraphState) -> bool {
        Arc::ptr_eq(&self.edges, &other.edges)
    }
}
