// SPDX-License-Identifier: Apache-2.0
#![allow(dead_code)]

use strata_core::{
    Command, Engine, GraphState, Label, Labels, NodeRef, PropertyMap, SequentialIdProvider,
    StateConfig,
};

/// Engine wired to the deterministic counter provider so replayed command
/// sequences produce identical edge ids (and snapshot digests).
pub fn engine() -> Engine {
    Engine::with_id_provider(StateConfig::default(), Box::new(SequentialIdProvider::new()))
}

/// Applies a command that is expected to satisfy its preconditions.
pub fn apply(engine: &Engine, state: &GraphState, command: Command) -> GraphState {
    match engine.apply(state, command) {
        Ok(next) => next,
        Err(err) => unreachable!("command must satisfy preconditions: {err}"),
    }
}

/// Properties for a `Person` node: `{id, name}`.
pub fn person(id: &str, name: &str) -> PropertyMap {
    PropertyMap::from([
        ("id".to_owned(), id.into()),
        ("name".to_owned(), name.into()),
    ])
}

/// Adds a `Person` node.
pub fn add_person(engine: &Engine, state: &GraphState, id: &str, name: &str) -> GraphState {
    apply(
        engine,
        state,
        Command::AddNode {
            properties: person(id, name),
            labels: Labels::from("Person"),
        },
    )
}

/// Adds an edge with a `since: 2015` property.
pub fn add_edge(
    engine: &Engine,
    state: &GraphState,
    source: &str,
    label: &str,
    target: &str,
) -> GraphState {
    apply(
        engine,
        state,
        Command::AddEdge {
            source: NodeRef::from(source),
            label: Label::from(label),
            target: NodeRef::from(target),
            properties: PropertyMap::from([("since".to_owned(), 2015i64.into())]),
        },
    )
}

/// The fixture shared by most scenarios: Sam (1) and Lev (2), no edges.
pub fn two_people(engine: &Engine) -> GraphState {
    let state = add_person(engine, &GraphState::new(), "1", "Sam");
    add_person(engine, &state, "2", "Lev")
}

/// Sam (1), Lev (2), Steven (3) with edges 1-2 (KNOWS) and 2-3 (KNOWS).
pub fn three_people_two_edges(engine: &Engine) -> GraphState {
    let state = two_people(engine);
    let state = add_person(engine, &state, "3", "Steven");
    let state = add_edge(engine, &state, "1", "KNOWS", "2");
    add_edge(engine, &state, "2", "KNOWS", "3")
}
