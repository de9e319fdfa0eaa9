// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Locating benchmark descriptors on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::descriptor::DESCRIPTOR_FILENAME;

/// Directory name that marks the root of a benchmarks checkout.
pub const BENCHMARKS_DIR_NAME: &str = "benchmarks";

/// Recursively find every `benchmark.yaml` under `root`.
///
/// Order is whatever the directory traversal yields; callers that need a
/// stable order sort the result themselves. Unreadable entries are
/// skipped with a warning rather than aborting the walk.
pub fn find_descriptors(root: &Path) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable entry during descriptor walk");
                continue;
            }
        };
        if entry.file_type().is_file() && entry.file_name() == DESCRIPTOR_FILENAME {
            paths.push(entry.into_path());
        }
    }
    paths
}

/// Recursively search `root` for the first directory named `benchmarks`
/// and return its path, or `None` if the subtree contains no such
/// directory.
pub fn find_repo_root(root: &Path) -> Option<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .find(|entry| entry.file_type().is_dir() && entry.file_name() == BENCHMARKS_DIR_NAME)
        .map(|entry| entry.into_path())
}
