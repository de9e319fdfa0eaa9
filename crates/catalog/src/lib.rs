//! Benchmark descriptor catalog for robobench.
//!
//! This crate owns the declarative side of the benchmark suite: parsing
//! `benchmark.yaml` descriptors into memory, rendering them into markdown
//! documentation, and locating descriptors on disk.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use robobench_catalog::{discovery, render, BenchmarkDescriptor};
//!
//! for path in discovery::find_descriptors(Path::new("src")) {
//!     let descriptor = BenchmarkDescriptor::from_file(&path)?;
//!     println!("{}", render::detail_page(&descriptor));
//! }
//! # Ok::<(), robobench_catalog::ParseError>(())
//! ```
//!
//! # Modules
//!
//! - [`descriptor`] - `BenchmarkDescriptor` and `ResultRecord` parsing
//! - [`render`] - Markdown detail pages and aggregate summary rows
//! - [`discovery`] - Filesystem walks locating descriptors
//! - [`report`] - Writing rendered documentation back to disk

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod descriptor;
pub mod discovery;
pub mod error;
pub mod render;
pub mod report;

pub use descriptor::{BenchmarkDescriptor, ResultRecord};
pub use error::{ParseError, RenderError};
