// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for trace analysis.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while configuring or running an analysis.
///
/// Unknown names are rejected here, at the library boundary; whether an
/// unknown metric or hardware type aborts a run or merely prints a
/// diagnostic is the caller's call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A chain references an event with no registered style.
    #[error("unknown trace target `{0}`")]
    UnknownTarget(String),

    /// A metric name outside the closed metric set.
    #[error("unknown metric `{0}`")]
    UnknownMetric(String),

    /// A hardware device type outside the supported set.
    #[error("unknown hardware device type `{0}`")]
    UnknownHardware(String),

    /// The trace directory yielded no events at all.
    #[error("no trace events found under {path}")]
    EmptyTrace {
        /// The trace directory that was searched.
        path: PathBuf,
    },

    /// A trace file could not be read.
    #[error("failed to read trace file {path}")]
    Io {
        /// The offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A trace file line is not a valid event record.
    #[error("invalid trace event at {path}:{line}")]
    Json {
        /// The offending file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}
