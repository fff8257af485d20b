// SPDX-License-Identifier: Apache-2.0
//! Graph node and edge record types.
use serde::{Deserialize, Serialize};

use crate::ident::{EdgeId, Label, NodeId};
use crate::value::PropertyMap;

/// Materialised node record stored in a snapshot's node table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Canonical identifier (the value under the configured id key).
    pub id: NodeId,
    /// Ordered labels; duplicates allowed, order = most recent write.
    pub labels: Vec<Label>,
    /// Host-supplied properties, including the identifier value itself.
    pub properties: PropertyMap,
}

/// Materialised edge record stored in a snapshot's edge table.
///
/// The record keeps its fixed source/target orientation, but the adjacency
/// index treats every edge as undirected: it is discoverable from both
/// endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Engine-generated, time-ordered identifier.
    pub id: EdgeId,
    /// Resolved source endpoint.
    pub source: NodeId,
    /// Resolved target endpoint.
    pub target: NodeId,
    /// Relationship label (e.g. `"KNOWS"`).
    pub label: Label,
    /// Host-supplied edge properties.
    pub properties: PropertyMap,
}

impl EdgeRecord {
    /// Returns `true` when this edge's unordered endpoint pair is
    /// `{first, second}`.
    #[must_use]
    pub fn joins(&self, first: &NodeId, second: &NodeId) -> bool {
        (self.source == *first && self.target == *second)
            || (self.source == *second && self.target == *first)
    }

    /// Returns `true` when `node` is either endpoint.
    #[must_use]
    pub fn touches(&self, node: &NodeId) -> bool {
        self.source == *node || self.target == *node
    }
}
