//! Trace analysis for robobench.
//!
//! A benchmark run leaves behind an instrumentation trace: a stream of
//! named events emitted at callback boundaries across the middleware,
//! userland and kernel/accelerator layers. This crate matches the chain
//! of events a benchmark is expected to produce against that stream and
//! aggregates the completed occurrences into latency, throughput and
//! power figures.
//!
//! # Modules
//!
//! - [`target`] - Trace targets and their visualization styles
//! - [`chain`] - Built-in target chains per hardware configuration
//! - [`trace`] - Loading captured event streams
//! - [`metrics`] - The closed metric set and numeric aggregation
//! - [`analyzer`] - The [`BenchmarkAnalyzer`] driving an analysis
//! - [`process`] - Bounded-wait external process invocation

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analyzer;
pub mod chain;
pub mod error;
pub mod metrics;
pub mod process;
pub mod target;
pub mod trace;

pub use analyzer::BenchmarkAnalyzer;
pub use chain::HardwareType;
pub use error::AnalysisError;
pub use metrics::Metric;
pub use target::TraceTarget;
