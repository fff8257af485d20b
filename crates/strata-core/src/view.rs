// SPDX-License-Identifier: Apache-2.0
//! Read-only lookup utilities over a snapshot.
//!
//! [`StateView`] exposes only queries; it cannot mutate the snapshot and it
//! never fails. Unknown nodes, unresolvable references, and unlinked pairs
//! all produce empty results or `None`, matching the engine's "lookups are
//! total" policy.
use crate::ident::NodeRef;
use crate::record::EdgeRecord;
use crate::state::GraphState;

/// Read-only view over a [`GraphState`].
///
/// Constructed via [`crate::Engine::view`] so the configured identifier key
/// is available for reference resolution, or directly with [`StateView::new`].
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a> {
    state: &'a GraphState,
    id_key: &'a str,
}

impl<'a> StateView<'a> {
    /// Creates a view over `state` resolving references through `id_key`.
    #[must_use]
    pub fn new(state: &'a GraphState, id_key: &'a str) -> Self {
        StateView { state, id_key }
    }

    /// All edges between `first` and `second`, in the index's stored order
    /// (newest first). Empty when either node is unknown or the pair is
    /// unlinked.
    #[must_use]
    pub fn edges_between(&self, first: &NodeRef, second: &NodeRef) -> Vec<&'a EdgeRecord> {
        let Some(first) = first.try_resolve(self.id_key) else {
            return Vec::new();
        };
        let Some(second) = second.try_resolve(self.id_key) else {
            return Vec::new();
        };
        self.state
            .adjacency()
            .get(&first)
            .and_then(|row| row.get(&second))
            .map(|ids| ids.iter().filter_map(|id| self.state.edge(id)).collect())
            .unwrap_or_default()
    }

    /// The first edge (in stored order) between `first` and `second` whose
    /// label matches. `None` is the not-found marker, never an error.
    #[must_use]
    pub fn edge_with_label_between(
        &self,
        label: &str,
        first: &NodeRef,
        second: &NodeRef,
    ) -> Option<&'a EdgeRecord> {
        self.edges_between(first, second)
            .into_iter()
            .find(|edge| edge.label.as_str() == label)
    }

    /// Every edge touching `node`, across all of its neighbors. Each incident
    /// edge appears exactly once in the node's index row, so no deduplication
    /// is needed. Empty for unknown nodes.
    #[must_use]
    pub fn edges_of(&self, node: &NodeRef) -> Vec<&'a EdgeRecord> {
        let Some(id) = node.try_resolve(self.id_key) else {
            return Vec::new();
        };
        self.state
            .adjacency()
            .get(&id)
            .map(|row| {
                row.values()
                    .flatten()
                    .filter_map(|edge_id| self.state.edge(edge_id))
                    .collect()
            })
            .unwrap_or_default()
    }
}
