// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for descriptor parsing and markdown rendering.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a benchmark descriptor.
///
/// Empty or syntactically invalid YAML is reported distinctly from a
/// missing required field, so callers can tell a broken file apart from
/// an incomplete one.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The descriptor file could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path of the descriptor file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The descriptor file parsed to nothing at all.
    #[error("could not load data from {path}: file is empty")]
    Empty {
        /// Path of the descriptor file.
        path: PathBuf,
    },

    /// The descriptor file is not valid YAML.
    #[error("invalid YAML in {path}")]
    Yaml {
        /// Path of the descriptor file.
        path: PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A required descriptor field is absent.
    ///
    /// Only the six descriptor-level fields are required; result fields
    /// fall back to visible placeholders instead.
    #[error("missing required field `{field}` in {path}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
        /// Path of the descriptor file.
        path: PathBuf,
    },
}

/// Errors raised while rendering markdown output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The descriptor's graph path does not contain the assets segment
    /// the aggregate index rewrites paths around.
    #[error("graph path `{graph}` of benchmark `{id}` does not contain the `{marker}` assets segment")]
    GraphMarkerMissing {
        /// Benchmark id the graph belongs to.
        id: String,
        /// The offending graph path.
        graph: String,
        /// The expected assets-directory marker.
        marker: &'static str,
    },

    /// A rendered document could not be written.
    #[error("failed to write report to {path}")]
    Io {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
