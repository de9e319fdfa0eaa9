// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Benchmark descriptor parsing.
//!
//! A benchmark is described by a `benchmark.yaml` file carrying the
//! metadata needed to document and reproduce it, plus a list of measured
//! results. Descriptor-level fields are required and fail parsing when
//! absent; result-level fields fall back to a conspicuous
//! `default_<field>` placeholder so that missing data surfaces in the
//! generated documentation instead of aborting it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::ParseError;

/// Fixed filename of a benchmark descriptor.
pub const DESCRIPTOR_FILENAME: &str = "benchmark.yaml";

/// One measured data point attached to a benchmark.
///
/// All fields are strings except [`value`](Self::value), which is kept as
/// an opaque YAML scalar: measurements may be numeric or free-form text
/// and both must render without complaint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    /// Measured metric name (e.g. `latency`).
    pub metric: String,
    /// Unit the value is expressed in (e.g. `ms`).
    pub metric_unit: String,
    /// Result classification; `grey`/`black` get icon treatment when rendered.
    #[serde(rename = "type")]
    pub kind: String,
    /// Hardware the measurement was taken on.
    pub hardware: String,
    /// Measurement category (e.g. `workstation`, `edge`).
    pub category: String,
    /// Measurement timestamp. The upstream data files spell the key
    /// `timestampt`; the misspelling is part of the wire format.
    pub timestampt: String,
    /// The measured value, numeric or string.
    pub value: Value,
    /// Free-form annotation.
    pub note: String,
    /// Reference to the raw data the measurement came from.
    pub datasource: String,
}

impl ResultRecord {
    /// Build a record from the nested `result` mapping of one results entry,
    /// substituting `default_<field>` for anything absent.
    fn from_mapping(result: &Value) -> Self {
        Self {
            metric: field_or_default(result, "metric"),
            metric_unit: field_or_default(result, "metric_unit"),
            kind: field_or_default(result, "type"),
            hardware: field_or_default(result, "hardware"),
            category: field_or_default(result, "category"),
            timestampt: field_or_default(result, "timestampt"),
            value: result
                .get("value")
                .cloned()
                .unwrap_or_else(|| Value::String("default_value".to_owned())),
            note: field_or_default(result, "note"),
            datasource: field_or_default(result, "datasource"),
        }
    }
}

/// In-memory form of one `benchmark.yaml` descriptor.
///
/// Constructed once from a file and treated as immutable afterwards; the
/// renderers only ever read it.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkDescriptor {
    /// Unique benchmark identifier. Uniqueness across the catalog is the
    /// caller's responsibility.
    pub id: String,
    /// Human-readable benchmark name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// One-line description.
    pub short: String,
    /// Relative path to the image illustrating the computational graph.
    pub graph: String,
    /// Shell command documenting how to reproduce the benchmark.
    pub reproduction: String,
    /// Measured results, in YAML declaration order.
    pub results: Vec<ResultRecord>,
    /// Directory the descriptor was loaded from (filename stripped).
    #[serde(skip)]
    pub path: PathBuf,
}

impl BenchmarkDescriptor {
    /// Load and parse a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Empty`] or [`ParseError::Yaml`] for files
    /// that cannot be parsed at all, and [`ParseError::MissingField`]
    /// when any of the six required descriptor fields is absent.
    pub fn from_file(path: &Path) -> Result<Self, ParseError> {
        let raw = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw, path)
    }

    /// Parse descriptor YAML that was already read, attributing errors to
    /// `path`.
    pub fn from_yaml_str(raw: &str, path: &Path) -> Result<Self, ParseError> {
        if raw.trim().is_empty() {
            return Err(ParseError::Empty {
                path: path.to_path_buf(),
            });
        }
        let doc: Value = serde_yaml::from_str(raw).map_err(|source| ParseError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        // Comment-only or `---` documents parse to null; they carry no
        // data either.
        if doc.is_null() {
            return Err(ParseError::Empty {
                path: path.to_path_buf(),
            });
        }

        let mut results = Vec::new();
        match doc.get("results") {
            Some(Value::Sequence(entries)) => {
                for entry in entries {
                    match entry.get("result") {
                        Some(result) => results.push(ResultRecord::from_mapping(result)),
                        None => {
                            tracing::warn!(
                                path = %path.display(),
                                "skipping results entry without a `result` mapping"
                            );
                        }
                    }
                }
            }
            Some(Value::Null) | None => {}
            Some(_) => {
                tracing::warn!(path = %path.display(), "`results` is not a list, ignoring");
            }
        }

        Ok(Self {
            id: require_field(&doc, "id", path)?,
            name: require_field(&doc, "name", path)?,
            description: require_field(&doc, "description", path)?,
            short: require_field(&doc, "short", path)?,
            graph: require_field(&doc, "graph", path)?,
            reproduction: require_field(&doc, "reproduction", path)?,
            results,
            path: path.parent().unwrap_or_else(|| Path::new("")).to_path_buf(),
        })
    }

    /// Serialize the descriptor back to YAML in declaration key order,
    /// with each result nested under a `result` key, mirroring the input
    /// shape.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        let mut doc = Mapping::new();
        doc.insert("id".into(), Value::String(self.id.clone()));
        doc.insert("name".into(), Value::String(self.name.clone()));
        doc.insert("description".into(), Value::String(self.description.clone()));
        doc.insert("short".into(), Value::String(self.short.clone()));
        doc.insert("graph".into(), Value::String(self.graph.clone()));
        doc.insert("reproduction".into(), Value::String(self.reproduction.clone()));

        let mut entries = Vec::with_capacity(self.results.len());
        for record in &self.results {
            let mut wrapper = Mapping::new();
            wrapper.insert("result".into(), serde_yaml::to_value(record)?);
            entries.push(Value::Mapping(wrapper));
        }
        doc.insert("results".into(), Value::Sequence(entries));

        serde_yaml::to_string(&doc)
    }
}

/// Extract a required descriptor field, accepting any scalar value.
fn require_field(doc: &Value, field: &'static str, path: &Path) -> Result<String, ParseError> {
    match doc.get(field) {
        Some(value) if is_scalar(value) => Ok(scalar_to_string(value)),
        _ => Err(ParseError::MissingField {
            field,
            path: path.to_path_buf(),
        }),
    }
}

/// Extract an optional result field, falling back to the visible
/// `default_<field>` placeholder.
fn field_or_default(result: &Value, field: &str) -> String {
    match result.get(field) {
        Some(value) => scalar_to_string(value),
        None => format!("default_{field}"),
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::String(_) | Value::Number(_) | Value::Bool(_)
    )
}

/// Render a YAML scalar the way it would appear in documentation.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        // Non-scalar values should not appear here; fall back to their
        // YAML rendering rather than panicking.
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_owned(),
    }
}
