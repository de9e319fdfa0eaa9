// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Loading captured trace event streams.
//!
//! Traces are consumed in their exported form: JSON-lines files (one
//! event object per line) as produced by running the captured CTF trace
//! through babeltrace. A trace directory may hold any number of `*.json`
//! files; they are read in walk order and the combined stream is sorted
//! by timestamp.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::AnalysisError;

/// One instrumentation event from a captured trace.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TraceEvent {
    /// Event name, e.g. `ros2:callback_start`.
    pub name: String,
    /// Monotonic timestamp in nanoseconds.
    pub timestamp: u64,
    /// Process the event was emitted from, when the exporter recorded it.
    #[serde(default)]
    pub vpid: Option<u32>,
    /// Payload value carried by the event (power probes report watts here).
    #[serde(default)]
    pub value: Option<f64>,
}

/// Read every `*.json` file under `trace_path` and return the combined
/// event stream sorted by timestamp.
///
/// Blank lines are tolerated; a malformed line is an error naming the
/// file and line it came from.
pub fn load_trace_dir(trace_path: &Path) -> Result<Vec<TraceEvent>, AnalysisError> {
    let mut events = Vec::new();

    for entry in WalkDir::new(trace_path).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().map_or(true, |ext| ext != "json") {
            continue;
        }
        let raw = fs::read_to_string(entry.path()).map_err(|source| AnalysisError::Io {
            path: entry.path().to_path_buf(),
            source,
        })?;
        for (index, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let event: TraceEvent =
                serde_json::from_str(line).map_err(|source| AnalysisError::Json {
                    path: entry.path().to_path_buf(),
                    line: index + 1,
                    source,
                })?;
            events.push(event);
        }
    }

    events.sort_by_key(|event| event.timestamp);
    tracing::debug!(
        count = events.len(),
        path = %trace_path.display(),
        "loaded trace events"
    );
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_sorts_across_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("b.json"),
            "{\"name\":\"second\",\"timestamp\":20}\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a.json"),
            "{\"name\":\"third\",\"timestamp\":30}\n\n{\"name\":\"first\",\"timestamp\":10}\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a trace\n").unwrap();

        let events = load_trace_dir(dir.path()).unwrap();
        let names: Vec<_> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_malformed_line_names_file_and_line() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("t.json"),
            "{\"name\":\"ok\",\"timestamp\":1}\nnot json\n",
        )
        .unwrap();

        match load_trace_dir(dir.path()) {
            Err(AnalysisError::Json { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_directory_is_empty_stream() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_trace_dir(dir.path()).unwrap().is_empty());
    }
}
