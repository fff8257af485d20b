// SPDX-License-Identifier: Apache-2.0
//! Canonical snapshot digests.
//!
//! Determinism contract
//! - The digest is a BLAKE3 hash over a canonical byte stream encoding the
//!   entire snapshot triple.
//! - Ordering is explicit and stable: the node and edge tables iterate in
//!   ascending key order (`BTreeMap`), adjacency rows and neighbor entries in
//!   ascending id order, and each neighbor's edge sequence in its stored
//!   (newest-first) order.
//! - All counts and lengths are 8-byte little-endian; strings are
//!   length-prefixed UTF-8; edge ids are raw 16-byte UUID values.
//!
//! Two snapshots reached by replaying the same command sequence with the
//! same edge-id sequence hash identically, which is what replay verification
//! tests compare. Changing any encoding rule here is a breaking change to
//! snapshot identity.
use blake3::Hasher;

use crate::ident::{EdgeId, NodeId};
use crate::state::GraphState;
use crate::value::PropertyValue;

/// Canonical 256-bit snapshot digest.
pub type Digest = [u8; 32];

const HEADER: &[u8] = b"STRATA_STATE_V1\0";

/// Computes the canonical digest of a snapshot.
#[must_use]
pub fn state_digest(state: &GraphState) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(HEADER);

    hasher.update(&(state.node_count() as u64).to_le_bytes());
    for (id, node) in state.iter_nodes() {
        hasher.update(b"N\0");
        hash_node_id(&mut hasher, id);
        hasher.update(&(node.labels.len() as u64).to_le_bytes());
        for label in &node.labels {
            hash_str(&mut hasher, label.as_str());
        }
        hash_property_map(&mut hasher, &node.properties);
    }

    hasher.update(&(state.edge_count() as u64).to_le_bytes());
    for (id, edge) in state.iter_edges() {
        hasher.update(b"E\0");
        hash_edge_id(&mut hasher, id);
        hash_node_id(&mut hasher, &edge.source);
        hash_node_id(&mut hasher, &edge.target);
        hash_str(&mut hasher, edge.label.as_str());
        hash_property_map(&mut hasher, &edge.properties);
    }

    // The adjacency index is derived from the edge table, but its sequence
    // order (newest first) is observable through lookups, so it is part of
    // snapshot identity.
    hasher.update(&(state.adjacency().len() as u64).to_le_bytes());
    for (owner, row) in state.adjacency() {
        hasher.update(b"A\0");
        hash_node_id(&mut hasher, owner);
        hasher.update(&(row.len() as u64).to_le_bytes());
        for (neighbor, ids) in row {
            hash_node_id(&mut hasher, neighbor);
            hasher.update(&(ids.len() as u64).to_le_bytes());
            for id in ids {
                hash_edge_id(&mut hasher, id);
            }
        }
    }

    hasher.finalize().into()
}

/// Renders a digest as lowercase hex.
#[must_use]
pub fn digest_hex(digest: &Digest) -> String {
    hex::encode(digest)
}

fn hash_node_id(hasher: &mut Hasher, id: &NodeId) {
    hash_str(hasher, id.as_str());
}

fn hash_edge_id(hasher: &mut Hasher, id: &EdgeId) {
    hasher.update(id.as_uuid().as_bytes());
}

fn hash_str(hasher: &mut Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn hash_value(hasher: &mut Hasher, value: &PropertyValue) {
    match value {
        PropertyValue::String(s) => {
            hasher.update(&[1u8]);
            hash_str(hasher, s);
        }
        PropertyValue::Integer(i) => {
            hasher.update(&[2u8]);
            hasher.update(&i.to_le_bytes());
        }
        PropertyValue::Float(f) => {
            hasher.update(&[3u8]);
            hasher.update(&f.to_le_bytes());
        }
        PropertyValue::Boolean(b) => {
            hasher.update(&[4u8, u8::from(*b)]);
        }
        PropertyValue::Array(items) => {
            hasher.update(&[5u8]);
            hasher.update(&(items.len() as u64).to_le_bytes());
            for item in items {
                hash_value(hasher, item);
            }
        }
        PropertyValue::Map(map) => {
            hasher.update(&[6u8]);
            hasher.update(&(map.len() as u64).to_le_bytes());
            for (key, item) in map {
                hash_str(hasher, key);
                hash_value(hasher, item);
            }
        }
        PropertyValue::Null => {
            hasher.update(&[7u8]);
        }
    }
}

fn hash_property_map(
    hasher: &mut Hasher,
    properties: &std::collections::BTreeMap<String, PropertyValue>,
) {
    hasher.update(&(properties.len() as u64).to_le_bytes());
    for (key, value) in properties {
        hash_str(hasher, key);
        hash_value(hasher, value);
    }
}
