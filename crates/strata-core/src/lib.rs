// SPDX-License-Identifier: Apache-2.0
//! strata-core: immutable, command-driven graph state container.
//!
//! Each applied [`Command`] produces a brand-new [`GraphState`] snapshot; the
//! previous snapshot is never mutated. Untouched tables are shared between
//! snapshots, which makes history/undo, time-travel debugging, and
//! deterministic replay cheap for the host's state-management loop.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions,
    clippy::use_self
)]

mod adjacency;
mod cmd;
mod digest;
mod engine;
mod ident;
mod record;
mod state;
#[cfg(feature = "telemetry")]
mod telemetry;
mod value;
mod view;

/// Derived neighbor index type (node -> neighbor -> edge ids, newest first).
pub use adjacency::AdjacencyIndex;
/// Command values describing one requested state transition.
pub use cmd::{Command, Labels};
/// Canonical snapshot digests for replay verification.
pub use digest::{digest_hex, state_digest, Digest};
/// Transition engine, configuration, and edge-id generation seams.
pub use engine::{
    EdgeIdProvider, Engine, SequentialIdProvider, StateConfig, StateError, UuidV7Provider,
};
/// Identifier types and the flexible node-reference sum type.
pub use ident::{EdgeId, Label, NodeId, NodeRef};
/// Graph node and edge record types.
pub use record::{EdgeRecord, NodeRecord};
/// Immutable snapshot of the full graph state.
pub use state::GraphState;
/// Property values attached to nodes and edges.
pub use value::{PropertyMap, PropertyValue};
/// Read-only lookup utilities over a snapshot.
pub use view::StateView;
