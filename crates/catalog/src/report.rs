// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Writing rendered documentation back to disk.
//!
//! Detail pages land next to their descriptors as `README.md`; the
//! aggregate index is a single markdown table collecting every result row
//! of every benchmark.

use std::fs;
use std::path::Path;

use crate::descriptor::BenchmarkDescriptor;
use crate::error::RenderError;
use crate::render;

/// Filename the per-benchmark detail page is written to, inside the
/// benchmark's own directory.
pub const DETAIL_FILENAME: &str = "README.md";

/// Write each descriptor's detail page to `README.md` next to its
/// `benchmark.yaml`.
pub fn write_detail_pages(descriptors: &[BenchmarkDescriptor]) -> Result<(), RenderError> {
    for descriptor in descriptors {
        let path = descriptor.path.join(DETAIL_FILENAME);
        fs::write(&path, render::detail_page(descriptor))
            .map_err(|source| RenderError::Io { path, source })?;
        tracing::debug!(id = %descriptor.id, "wrote detail page");
    }
    Ok(())
}

/// Write the aggregate index for all descriptors to `path`: a title, a
/// generation stamp, and the result table.
///
/// Rows appear in descriptor order, one row per result record. Fails on
/// the first descriptor whose summary cannot be rendered.
pub fn write_index(descriptors: &[BenchmarkDescriptor], path: &Path) -> Result<(), RenderError> {
    let mut index = String::from("# Benchmark results\n\n");
    index.push_str(&format!("Generated: {}\n\n", chrono::Utc::now().to_rfc3339()));
    index.push_str(render::INDEX_HEADER);
    for descriptor in descriptors {
        index.push_str(&render::summary_rows(descriptor)?);
    }
    fs::write(path, index).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor_in(dir: &Path) -> BenchmarkDescriptor {
        let raw = concat!(
            "id: a1\nname: n\ndescription: d\nshort: s\n",
            "graph: ../imgs/a1.svg\nreproduction: r\n",
            "results:\n  - result:\n      metric: latency\n",
        );
        fs::create_dir_all(dir).unwrap();
        let file = dir.join("benchmark.yaml");
        fs::write(&file, raw).unwrap();
        BenchmarkDescriptor::from_file(&file).unwrap()
    }

    #[test]
    fn test_detail_page_written_next_to_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let bench_dir = dir.path().join("a1");
        let descriptor = descriptor_in(&bench_dir);

        write_detail_pages(std::slice::from_ref(&descriptor)).unwrap();
        let page = fs::read_to_string(bench_dir.join(DETAIL_FILENAME)).unwrap();
        assert!(page.starts_with("# n"));
    }

    #[test]
    fn test_index_collects_rows_under_header() {
        let dir = tempfile::tempdir().unwrap();
        let descriptor = descriptor_in(&dir.path().join("a1"));
        let index = dir.path().join("index.md");

        write_index(std::slice::from_ref(&descriptor), &index).unwrap();
        let table = fs::read_to_string(&index).unwrap();
        assert!(table.starts_with("# Benchmark results"));
        assert!(table.contains("Generated: "));
        let table_start = table.find("| Benchmark |").unwrap();
        assert_eq!(table[table_start..].trim_end().lines().count(), 3);
    }
}
