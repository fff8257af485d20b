// SPDX-License-Identifier: Apache-2.0

// Telemetry helpers for JSONL logging when the `telemetry` feature is
// enabled. JSON is formatted manually to keep the core free of a
// serialization dependency on the logging path.

fn ts_micros() -> u128 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros()
}

/// Emits one JSON line for an applied command.
///
/// Logs the command kind and the resulting snapshot's table sizes to stdout.
/// Best-effort: I/O errors are ignored and timestamps fall back to 0 on
/// clock errors.
pub(crate) fn applied(kind: &str, nodes: usize, edges: usize) {
    use std::io::Write as _;
    let mut out = std::io::stdout().lock();
    let _ = write!(
        out,
        r#"{{"timestamp_micros":{},"event":"applied","command":"{}","nodes":{},"edges":{}}}"#,
        ts_micros(),
        kind,
        nodes,
        edges
    );
    let _ = out.write_all(b"\n");
}
