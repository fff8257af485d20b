// SPDX-License-Identifier: Apache-2.0
//! Command values describing one requested state transition.
//!
//! Constructing commands (and choosing a discriminant vocabulary on the wire)
//! is a host concern; this enum is the typed form the engine consumes. There
//! is no catch-all identity variant: the enum is closed, so every command is
//! recognized.
use serde::{Deserialize, Serialize};

use crate::ident::{Label, NodeRef};
use crate::value::PropertyMap;

/// Label payload for add/modify commands.
///
/// Hosts supply either a single string or a sequence; this sum type keeps
/// that shape explicit. A single string normalizes to a one-element
/// sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Labels {
    /// A single label, normalized to a one-element sequence.
    One(String),
    /// An ordered label sequence (duplicates allowed).
    Many(Vec<String>),
}

impl Labels {
    /// Normalizes into the stored label sequence.
    pub(crate) fn into_labels(self) -> Vec<Label> {
        match self {
            Labels::One(label) => vec![Label::from(label)],
            Labels::Many(labels) => labels.into_iter().map(Label::from).collect(),
        }
    }
}

impl From<&str> for Labels {
    fn from(label: &str) -> Self {
        Labels::One(label.to_owned())
    }
}

impl From<String> for Labels {
    fn from(label: String) -> Self {
        Labels::One(label)
    }
}

impl From<Vec<String>> for Labels {
    fn from(labels: Vec<String>) -> Self {
        Labels::Many(labels)
    }
}

impl From<Vec<&str>> for Labels {
    fn from(labels: Vec<&str>) -> Self {
        Labels::Many(labels.into_iter().map(str::to_owned).collect())
    }
}

/// A discriminated state-transition request.
///
/// Preconditions are caller contracts (see the crate-level error policy):
/// the engine validates nothing beyond the identifier lookup it needs to run
/// the transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Insert (or overwrite) a node. `properties` must contain the
    /// configured identifier key.
    AddNode {
        /// Host-supplied properties, identifier included.
        properties: PropertyMap,
        /// Labels for the node.
        labels: Labels,
    },
    /// Create a new edge between two resolvable endpoints. The edge id is
    /// generated by the engine; edges are never updated in place.
    AddEdge {
        /// Source endpoint reference.
        source: NodeRef,
        /// Relationship label.
        label: Label,
        /// Target endpoint reference.
        target: NodeRef,
        /// Host-supplied edge properties.
        properties: PropertyMap,
    },
    /// Shallow-merge `properties` over an existing node's properties and,
    /// only when `labels` is supplied, replace its labels wholesale.
    ModifyNode {
        /// Properties to merge (new keys overwrite, others are retained).
        properties: PropertyMap,
        /// Replacement labels; `None` keeps the existing labels unchanged.
        labels: Option<Labels>,
    },
    /// Sever all edges incident to the node, then delete the node record.
    RemoveNode {
        /// The node to remove.
        node: NodeRef,
    },
    /// Sever all edges incident to the node; the node record survives.
    UnlinkNode {
        /// The node to unlink.
        node: NodeRef,
    },
    /// Sever every edge whose unordered endpoint pair is `{first, second}`;
    /// both node records survive.
    UnlinkTwo {
        /// One endpoint of the pair.
        first: NodeRef,
        /// The other endpoint of the pair.
        second: NodeRef,
    },
}

impl Command {
    /// Stable short name of the command kind (telemetry and diagnostics).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Command::AddNode { .. } => "add_node",
            Command::AddEdge { .. } => "add_edge",
            Command::ModifyNode { .. } => "modify_node",
            Command::RemoveNode { .. } => "remove_node",
            Command::UnlinkNode { .. } => "unlink_node",
            Command::UnlinkTwo { .. } => "unlink_two",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_label_normalizes_to_one_element_sequence() {
        assert_eq!(
            Labels::from("Person").into_labels(),
            vec![Label::from("Person")]
        );
    }

    #[test]
    fn label_sequences_keep_order_and_duplicates() {
        let labels = Labels::from(vec!["A", "B", "A"]).into_labels();
        assert_eq!(
            labels,
            vec![Label::from("A"), Label::from("B"), Label::from("A")]
        );
    }

    #[test]
    fn kind_names_are_stable() {
        let command = Command::RemoveNode {
            node: NodeRef::from("1"),
        };
        assert_eq!(command.kind(), "remove_node");
    }
}
