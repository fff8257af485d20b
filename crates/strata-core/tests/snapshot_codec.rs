// SPDX-License-Identifier: Apache-2.0
//! The snapshot triple is the serialization unit.
//!
//! The core defines no wire format of its own; these tests pin down that a
//! populated snapshot survives a deterministic CBOR round trip unchanged,
//! which is what a persisting host relies on.

use strata_core::{state_digest, Command, GraphState, Labels, PropertyMap};

mod common;
use common::{apply, engine, three_people_two_edges};

fn encode(state: &GraphState) -> Vec<u8> {
    let mut buf = Vec::new();
    match ciborium::ser::into_writer(state, &mut buf) {
        Ok(()) => buf,
        Err(err) => unreachable!("snapshot encoding cannot fail: {err}"),
    }
}

fn decode(buf: &[u8]) -> GraphState {
    match ciborium::de::from_reader(buf) {
        Ok(state) => state,
        Err(err) => unreachable!("snapshot decoding cannot fail: {err}"),
    }
}

#[test]
fn populated_snapshot_round_trips_through_cbor() {
    let engine = engine();
    let state = three_people_two_edges(&engine);

    let decoded = decode(&encode(&state));
    assert_eq!(decoded, state);
    assert_eq!(state_digest(&decoded), state_digest(&state));
}

#[test]
fn round_trip_preserves_nested_property_values() {
    let engine = engine();
    let nested = PropertyMap::from([
        ("id".to_owned(), "1".into()),
        ("score".to_owned(), 2.5f64.into()),
        (
            "tags".to_owned(),
            vec!["a".into(), "b".into()].into(),
        ),
    ]);
    let state = apply(
        &engine,
        &GraphState::new(),
        Command::AddNode {
            properties: nested,
            labels: Labels::from(vec!["Person", "Employee"]),
        },
    );

    let decoded = decode(&encode(&state));
    assert_eq!(decoded, state);
}

#[test]
fn empty_snapshot_round_trips() {
    let state = GraphState::new();
    assert_eq!(decode(&encode(&state)), state);
    // A decoded snapshot keeps behaving like one: commands still apply.
    let engine = engine();
    let next = apply(
        &engine,
        &decode(&encode(&state)),
        Command::AddNode {
            properties: PropertyMap::from([("id".to_owned(), "1".into())]),
            labels: Labels::from("Person"),
        },
    );
    assert_eq!(next.node_count(), 1);
}
