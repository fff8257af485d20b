// SPDX-License-Identifier: Apache-2.0
//! Adjacency index maintenance.
//!
//! The index is a derived structure: node -> neighbor -> edge ids, newest
//! first. It is bidirectional (every edge id appears under both endpoints and
//! nowhere else) and carries no entries that witness zero edges: a neighbor
//! entry whose sequence would become empty is deleted, and a row with no
//! neighbors left is deleted with it.
//!
//! All three operations are pure: they take the current index by reference
//! and return a new one, leaving the input untouched. Removal of something
//! that is not linked is a no-op, not an error.
use std::collections::{BTreeMap, BTreeSet};

use crate::ident::{EdgeId, NodeId};

/// Derived neighbor index: node -> neighbor -> edge ids, newest first.
pub type AdjacencyIndex = BTreeMap<NodeId, BTreeMap<NodeId, Vec<EdgeId>>>;

/// Returns a new index with `edge` prepended to the sequence for both
/// directions of the `source`/`target` pair, creating nested entries as
/// needed. A self-loop gets a single row entry.
pub(crate) fn link(
    index: &AdjacencyIndex,
    edge: EdgeId,
    source: &NodeId,
    target: &NodeId,
) -> AdjacencyIndex {
    let mut next = index.clone();
    prepend(&mut next, source, target, edge);
    if source != target {
        prepend(&mut next, target, source, edge);
    }
    next
}

/// Returns a new index with every edge incident to `node` severed, together
/// with the ids of the severed edges.
///
/// The node's entire row is dropped, and the node disappears as a neighbor
/// key under every other row; rows left without neighbors are dropped too.
pub(crate) fn unlink_all(
    index: &AdjacencyIndex,
    node: &NodeId,
) -> (AdjacencyIndex, BTreeSet<EdgeId>) {
    let mut removed = BTreeSet::new();
    let mut next = AdjacencyIndex::new();
    for (owner, row) in index {
        if owner == node {
            // Bidirectionality means this row alone names every incident edge.
            for ids in row.values() {
                removed.extend(ids.iter().copied());
            }
            continue;
        }
        if row.contains_key(node) {
            let mut pruned = row.clone();
            pruned.remove(node);
            if !pruned.is_empty() {
                next.insert(owner.clone(), pruned);
            }
        } else {
            next.insert(owner.clone(), row.clone());
        }
    }
    (next, removed)
}

/// Returns a new index with every edge between exactly `first` and `second`
/// severed, together with the ids of the severed edges.
///
/// Only the `second` entry under `first` and the `first` entry under `second`
/// are dropped (with row pruning when that empties a row); edges from either
/// node to any third node are untouched. The index is authoritative for the
/// pair, so the returned set is exactly the stored sequence.
pub(crate) fn unlink_between(
    index: &AdjacencyIndex,
    first: &NodeId,
    second: &NodeId,
) -> (AdjacencyIndex, BTreeSet<EdgeId>) {
    let mut removed = BTreeSet::new();
    let mut next = index.clone();
    drop_neighbor(&mut next, first, second, &mut removed);
    if first != second {
        drop_neighbor(&mut next, second, first, &mut removed);
    }
    (next, removed)
}

fn prepend(index: &mut AdjacencyIndex, owner: &NodeId, neighbor: &NodeId, edge: EdgeId) {
    index
        .entry(owner.clone())
        .or_default()
        .entry(neighbor.clone())
        .or_default()
        .insert(0, edge);
}

fn drop_neighbor(
    index: &mut AdjacencyIndex,
    owner: &NodeId,
    neighbor: &NodeId,
    removed: &mut BTreeSet<EdgeId>,
) {
    let Some(row) = index.get_mut(owner) else {
        return;
    };
    if let Some(ids) = row.remove(neighbor) {
        removed.extend(ids);
    }
    if row.is_empty() {
        index.remove(owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn eid(n: u64) -> EdgeId {
        EdgeId::new(Uuid::from_u64_pair(0, n))
    }

    fn nid(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn link_creates_both_directions() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        assert_eq!(index[&nid("a")][&nid("b")], vec![eid(1)]);
        assert_eq!(index[&nid("b")][&nid("a")], vec![eid(1)]);
    }

    #[test]
    fn link_prepends_newest_first() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let index = link(&index, eid(2), &nid("a"), &nid("b"));
        assert_eq!(index[&nid("a")][&nid("b")], vec![eid(2), eid(1)]);
        assert_eq!(index[&nid("b")][&nid("a")], vec![eid(2), eid(1)]);
    }

    #[test]
    fn link_self_loop_uses_a_single_entry() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("a"));
        assert_eq!(index.len(), 1);
        assert_eq!(index[&nid("a")][&nid("a")], vec![eid(1)]);
    }

    #[test]
    fn link_leaves_input_untouched() {
        let before = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let _after = link(&before, eid(2), &nid("a"), &nid("c"));
        assert_eq!(before[&nid("a")].len(), 1);
        assert!(!before.contains_key(&nid("c")));
    }

    #[test]
    fn unlink_all_drops_row_and_reverse_entries() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let index = link(&index, eid(2), &nid("b"), &nid("c"));
        let (next, removed) = unlink_all(&index, &nid("b"));
        assert_eq!(removed, BTreeSet::from([eid(1), eid(2)]));
        assert!(next.is_empty(), "a and c rows must collapse away: {next:?}");
    }

    #[test]
    fn unlink_all_keeps_unrelated_neighbors() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let index = link(&index, eid(2), &nid("a"), &nid("c"));
        let (next, removed) = unlink_all(&index, &nid("b"));
        assert_eq!(removed, BTreeSet::from([eid(1)]));
        assert_eq!(next[&nid("a")][&nid("c")], vec![eid(2)]);
        assert!(!next[&nid("a")].contains_key(&nid("b")));
        assert!(!next.contains_key(&nid("b")));
    }

    #[test]
    fn unlink_all_of_unknown_node_is_a_no_op() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let (next, removed) = unlink_all(&index, &nid("ghost"));
        assert!(removed.is_empty());
        assert_eq!(next, index);
    }

    #[test]
    fn unlink_between_is_scoped_to_the_pair() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("1"), &nid("2"));
        let index = link(&index, eid(2), &nid("2"), &nid("3"));
        let (next, removed) = unlink_between(&index, &nid("2"), &nid("3"));
        assert_eq!(removed, BTreeSet::from([eid(2)]));
        assert_eq!(next[&nid("1")][&nid("2")], vec![eid(1)]);
        assert_eq!(next[&nid("2")][&nid("1")], vec![eid(1)]);
        // No empty row survives for node 3.
        assert!(!next.contains_key(&nid("3")));
    }

    #[test]
    fn unlink_between_removes_multi_edges() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let index = link(&index, eid(2), &nid("a"), &nid("b"));
        let (next, removed) = unlink_between(&index, &nid("b"), &nid("a"));
        assert_eq!(removed, BTreeSet::from([eid(1), eid(2)]));
        assert!(next.is_empty());
    }

    #[test]
    fn unlink_between_unlinked_pair_is_a_no_op() {
        let index = link(&AdjacencyIndex::new(), eid(1), &nid("a"), &nid("b"));
        let (next, removed) = unlink_between(&index, &nid("a"), &nid("c"));
        assert!(removed.is_empty());
        assert_eq!(next, index);
    }
}
