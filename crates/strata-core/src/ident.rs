// SPDX-License-Identifier: Apache-2.0
//! Identifier types and node-reference resolution.
//!
//! Node identity is the value the host stores under the configured identifier
//! property; the engine never generates node ids. Edge ids are generated by
//! the engine through an [`crate::EdgeIdProvider`].
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::StateError;
use crate::value::{PropertyMap, PropertyValue};

/// Strongly typed identifier for a node.
///
/// The inner string is the canonical form of whatever value the host supplied
/// under the identifier property. Integer identifiers are folded into their
/// decimal string form so that `1` and `"1"` address the same node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Returns the canonical string form of this id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_owned())
    }
}

/// Strongly typed identifier for an edge.
///
/// Edge ids are produced by the engine's id provider. The default provider
/// emits UUID v7 values, which are time-ordered and collision-free across
/// calls without any locking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EdgeId(Uuid);

impl EdgeId {
    /// Wraps an existing UUID as an edge id.
    #[must_use]
    pub fn new(id: Uuid) -> Self {
        EdgeId(id)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node label (e.g. `"Person"`).
///
/// Labels are an ordered sequence on the node record: duplicates are allowed
/// and order is the insertion order of the most recent write.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// Creates a label from any string-like value.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Label(label.into())
    }

    /// Returns the label text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Label(label)
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Label(label.to_owned())
    }
}

/// A flexible reference to a node: either a bare identifier or a property
/// record carrying the identifier under the configured key.
///
/// Hosts address nodes either way; resolution is a single match, never
/// runtime shape inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeRef {
    /// A bare, already-canonical identifier.
    Id(NodeId),
    /// A property record; the identifier lives under the configured key.
    Record(PropertyMap),
}

impl NodeRef {
    /// Builds a bare-identifier reference.
    #[must_use]
    pub fn id(id: impl Into<NodeId>) -> Self {
        NodeRef::Id(id.into())
    }

    /// Builds a record reference.
    #[must_use]
    pub fn record(properties: PropertyMap) -> Self {
        NodeRef::Record(properties)
    }

    /// Resolves this reference to its canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::MissingIdentifier`] when a record reference does
    /// not carry a usable value under `id_key`. That is a caller contract
    /// violation, not a recoverable graph condition.
    pub fn resolve(&self, id_key: &str) -> Result<NodeId, StateError> {
        match self {
            NodeRef::Id(id) => Ok(id.clone()),
            NodeRef::Record(properties) => id_from_properties(properties, id_key),
        }
    }

    /// Resolves without surfacing an error; used by read-only lookups, which
    /// are defined to return empty results instead of failing.
    pub(crate) fn try_resolve(&self, id_key: &str) -> Option<NodeId> {
        self.resolve(id_key).ok()
    }
}

impl From<NodeId> for NodeRef {
    fn from(id: NodeId) -> Self {
        NodeRef::Id(id)
    }
}

impl From<&str> for NodeRef {
    fn from(id: &str) -> Self {
        NodeRef::Id(NodeId::from(id))
    }
}

/// Extracts the canonical identifier stored under `id_key` in `properties`.
///
/// # Errors
///
/// Returns [`StateError::MissingIdentifier`] when the key is absent or its
/// value is not an identifier-shaped scalar.
pub(crate) fn id_from_properties(
    properties: &PropertyMap,
    id_key: &str,
) -> Result<NodeId, StateError> {
    properties
        .get(id_key)
        .and_then(id_from_value)
        .ok_or_else(|| StateError::MissingIdentifier {
            key: id_key.to_owned(),
        })
}

fn id_from_value(value: &PropertyValue) -> Option<NodeId> {
    match value {
        PropertyValue::String(s) => Some(NodeId::from(s.as_str())),
        PropertyValue::Integer(i) => Some(NodeId::new(i.to_string())),
        _ => None,
    }
}
