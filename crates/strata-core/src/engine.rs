// SPDX-License-Identifier: Apache-2.0
//! Transition engine: the pure mapping from (snapshot, command) to the next
//! snapshot.
//!
//! The engine holds no state between calls beyond its configuration and the
//! edge-id provider; every command is handled independently against the
//! snapshot passed in. Callers serialize command application against a single
//! logical snapshot themselves (typically via the host's single-writer
//! dispatch loop); the engine never locks because it never mutates shared
//! storage.
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use uuid::Uuid;

use crate::adjacency;
use crate::cmd::{Command, Labels};
use crate::ident::{id_from_properties, EdgeId, Label, NodeRef};
use crate::record::{EdgeRecord, NodeRecord};
use crate::state::GraphState;
use crate::value::PropertyMap;
use crate::view::StateView;

/// Errors surfaced at the engine boundary.
///
/// There is no wider error taxonomy: every documented operation is total over
/// precondition-satisfying inputs. Operations on absent nodes or edges are
/// no-ops, and lookups on unknown nodes return empty results. The only thing
/// that surfaces is a caller contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// A node reference or command payload did not carry a usable value
    /// under the configured identifier key.
    #[error("node reference is missing the identifier property `{key}`")]
    MissingIdentifier {
        /// The configured identifier key that was absent.
        key: String,
    },
}

/// Supplies time-ordered, collision-free edge identifiers.
///
/// Any generator producing non-repeating (ideally sortable) ids satisfies
/// the contract. Implementations must be safe for concurrent callers; the
/// engine itself never synchronizes.
pub trait EdgeIdProvider: Send + Sync {
    /// Returns the next fresh edge id.
    fn next_edge_id(&self) -> EdgeId;
}

/// Default provider: UUID v7 (Unix-time-ordered, random-suffixed).
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Provider;

impl EdgeIdProvider for UuidV7Provider {
    fn next_edge_id(&self) -> EdgeId {
        EdgeId::new(Uuid::now_v7())
    }
}

/// Counter-backed provider for deterministic replay and tests.
///
/// Ids are monotone and collision-free within a process; two engines seeded
/// with fresh providers replay a command sequence to byte-identical
/// snapshots (and therefore identical digests).
#[derive(Debug, Default)]
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl SequentialIdProvider {
    /// Creates a provider counting from zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EdgeIdProvider for SequentialIdProvider {
    fn next_edge_id(&self) -> EdgeId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        EdgeId::new(Uuid::from_u64_pair(0, n))
    }
}

/// Engine configuration, fixed per engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateConfig {
    /// Name of the property that holds the canonical identifier in node and
    /// edge-endpoint references. Applies uniformly to all references.
    pub id_key: String,
}

impl Default for StateConfig {
    fn default() -> Self {
        StateConfig {
            id_key: "id".to_owned(),
        }
    }
}

/// The state-transition engine.
///
/// One handler per command kind keeps the node table, edge table, and
/// adjacency index mutually consistent after every transition.
pub struct Engine {
    id_key: String,
    edge_ids: Box<dyn EdgeIdProvider>,
}

impl Engine {
    /// Creates an engine with the default UUID v7 edge-id provider.
    #[must_use]
    pub fn new(config: StateConfig) -> Self {
        Self::with_id_provider(config, Box::new(UuidV7Provider))
    }

    /// Creates an engine with a caller-supplied edge-id provider.
    #[must_use]
    pub fn with_id_provider(config: StateConfig, edge_ids: Box<dyn EdgeIdProvider>) -> Self {
        Engine {
            id_key: config.id_key,
            edge_ids,
        }
    }

    /// Returns the configured identifier key.
    #[must_use]
    pub fn id_key(&self) -> &str {
        &self.id_key
    }

    /// Builds a read-only lookup view over `state`.
    #[must_use]
    pub fn view<'a>(&'a self, state: &'a GraphState) -> StateView<'a> {
        StateView::new(state, &self.id_key)
    }

    /// Applies one command and returns the next snapshot.
    ///
    /// The input snapshot is never mutated; unchanged tables are shared with
    /// the returned snapshot.
    ///
    /// # Errors
    ///
    /// [`StateError::MissingIdentifier`] when a command payload violates the
    /// identifier precondition. No other failure exists: absent-entity
    /// removals and unlinks are no-ops.
    pub fn apply(&self, state: &GraphState, command: Command) -> Result<GraphState, StateError> {
        #[cfg(feature = "telemetry")]
        let kind = command.kind();
        let next = match command {
            Command::AddNode { properties, labels } => self.add_node(state, properties, labels),
            Command::AddEdge {
                source,
                label,
                target,
                properties,
            } => self.add_edge(state, &source, label, &target, properties),
            Command::ModifyNode { properties, labels } => {
                self.modify_node(state, properties, labels)
            }
            Command::RemoveNode { node } => self.remove_node(state, &node),
            Command::UnlinkNode { node } => self.unlink_node(state, &node),
            Command::UnlinkTwo { first, second } => self.unlink_two(state, &first, &second),
        }?;
        #[cfg(feature = "telemetry")]
        crate::telemetry::applied(kind, next.node_count(), next.edge_count());
        Ok(next)
    }

    /// Insert/overwrite the node keyed by the id resolved from `properties`.
    fn add_node(
        &self,
        state: &GraphState,
        properties: PropertyMap,
        labels: Labels,
    ) -> Result<GraphState, StateError> {
        let id = id_from_properties(&properties, &self.id_key)?;
        let record = NodeRecord {
            id: id.clone(),
            labels: labels.into_labels(),
            properties,
        };
        let mut nodes = (*state.nodes).clone();
        nodes.insert(id, record);
        Ok(state.replace_nodes(nodes))
    }

    /// Generate a fresh edge id, insert the record, and link the index.
    ///
    /// The endpoints are not required to exist in the node table; the host
    /// contract only requires the references to be resolvable.
    fn add_edge(
        &self,
        state: &GraphState,
        source: &NodeRef,
        label: Label,
        target: &NodeRef,
        properties: PropertyMap,
    ) -> Result<GraphState, StateError> {
        let source = source.resolve(&self.id_key)?;
        let target = target.resolve(&self.id_key)?;
        let id = self.edge_ids.next_edge_id();
        let adjacency = adjacency::link(state.adjacency(), id, &source, &target);
        let record = EdgeRecord {
            id,
            source,
            target,
            label,
            properties,
        };
        let mut edges = (*state.edges).clone();
        edges.insert(id, record);
        Ok(state.replace_links(edges, adjacency))
    }

    /// Shallow-merge properties; replace labels only when supplied.
    ///
    /// The asymmetry is part of the contract: properties always merge,
    /// labels replace wholesale or stay untouched.
    /// Modifying a node that does not exist materializes it from the command
    /// payload (a merge over the empty record).
    fn modify_node(
        &self,
        state: &GraphState,
        properties: PropertyMap,
        labels: Option<Labels>,
    ) -> Result<GraphState, StateError> {
        let id = id_from_properties(&properties, &self.id_key)?;
        let mut nodes = (*state.nodes).clone();
        let (mut merged, existing_labels) = match nodes.remove(&id) {
            Some(existing) => (existing.properties, existing.labels),
            None => (PropertyMap::new(), Vec::new()),
        };
        merged.extend(properties);
        let labels = labels.map_or(existing_labels, Labels::into_labels);
        nodes.insert(
            id.clone(),
            NodeRecord {
                id,
                labels,
                properties: merged,
            },
        );
        Ok(state.replace_nodes(nodes))
    }

    /// Sever all incident edges, then drop the node record.
    fn remove_node(&self, state: &GraphState, node: &NodeRef) -> Result<GraphState, StateError> {
        let id = node.resolve(&self.id_key)?;
        let (adjacency, severed) = adjacency::unlink_all(state.adjacency(), &id);
        let edges = prune_edges(state, &severed);
        let mut nodes = (*state.nodes).clone();
        nodes.remove(&id);
        Ok(GraphState::replace_all(nodes, edges, adjacency))
    }

    /// Sever all incident edges; the node record survives.
    fn unlink_node(&self, state: &GraphState, node: &NodeRef) -> Result<GraphState, StateError> {
        let id = node.resolve(&self.id_key)?;
        let (adjacency, severed) = adjacency::unlink_all(state.adjacency(), &id);
        Ok(state.replace_links(prune_edges(state, &severed), adjacency))
    }

    /// Sever the edges between exactly two nodes; both records survive.
    fn unlink_two(
        &self,
        state: &GraphState,
        first: &NodeRef,
        second: &NodeRef,
    ) -> Result<GraphState, StateError> {
        let first = first.resolve(&self.id_key)?;
        let second = second.resolve(&self.id_key)?;
        let (adjacency, severed) = adjacency::unlink_between(state.adjacency(), &first, &second);
        Ok(state.replace_links(prune_edges(state, &severed), adjacency))
    }
}

/// Edge table minus the severed ids.
fn prune_edges(
    state: &GraphState,
    severed: &BTreeSet<EdgeId>,
) -> std::collections::BTreeMap<EdgeId, EdgeRecord> {
    let mut edges = (*state.edges).clone();
    for id in severed {
        edges.remove(id);
    }
    edges
}
