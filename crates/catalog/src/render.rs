// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for benchmark descriptors.
//!
//! Two rendering modes: a per-benchmark detail page (the benchmark's own
//! `README.md`) and per-result summary rows for the aggregate index. The
//! column order and wording of both tables are external contract;
//! downstream documentation tooling matches on the exact headers.

use std::fmt::Write;

use crate::descriptor::{scalar_to_string, BenchmarkDescriptor};
use crate::error::RenderError;

/// Upstream page explaining the grey/black result classification.
pub const TYPE_LEGEND_URL: &str =
    "https://github.com/robotperf/benchmarks/blob/main/benchmarks/README.md#type";

/// Base URL of the rosbag store that `datasource` references resolve under.
pub const ROSBAGS_TREE_URL: &str = "https://github.com/robotperf/rosbags/tree/main";

/// Base URL benchmark directories are linked against in the index.
pub const BENCHMARKS_TREE_URL: &str = "https://github.com/robotperf/benchmarks/tree/main";

/// Path prefix stripped from descriptor paths when linking from the index.
pub const INDEX_PATH_PREFIX: &str = "src/benchmarks/";

/// Assets-directory segment that graph paths are rewritten around for the
/// index. A graph path without it cannot be rendered into a summary row.
pub const GRAPH_ASSET_MARKER: &str = "imgs";

/// Render the detail page for one benchmark.
///
/// Section order is fixed: title, short description, id, long
/// description, graph image, reproduction steps, results table.
pub fn detail_page(descriptor: &BenchmarkDescriptor) -> String {
    let mut md = String::new();

    writeln!(md, "# {}\n", descriptor.name).unwrap();
    writeln!(md, "{}\n", descriptor.short).unwrap();
    writeln!(md, "### ID\n{}\n", descriptor.id).unwrap();
    writeln!(md, "### Description\n{}\n", descriptor.description).unwrap();
    writeln!(md, "![]({})\n", descriptor.graph).unwrap();
    writeln!(
        md,
        "## Reproduction Steps\n\n```bash\n{}\n```\n",
        descriptor.reproduction
    )
    .unwrap();

    writeln!(md, "## Results\n").unwrap();
    writeln!(
        md,
        "| Type | Hardware | Metric | Value | Category | Timestamp | Note | Data Source |"
    )
    .unwrap();
    writeln!(md, "| --- | --- | --- | --- | --- | --- | --- | --- |").unwrap();

    for result in &descriptor.results {
        writeln!(
            md,
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            type_cell(&result.kind),
            result.hardware,
            result.metric,
            scalar_to_string(&result.value),
            result.category,
            result.timestampt,
            result.note,
            datasource_cell(&result.datasource),
        )
        .unwrap();
    }
    md.push('\n');

    md
}

/// Render the aggregate-index rows for one benchmark: one markdown table
/// row per result record, in parse order.
///
/// # Errors
///
/// Returns [`RenderError::GraphMarkerMissing`] when the descriptor's graph
/// path does not contain [`GRAPH_ASSET_MARKER`]; the rewrite has no
/// defined meaning without it.
pub fn summary_rows(descriptor: &BenchmarkDescriptor) -> Result<String, RenderError> {
    let path = descriptor.path.to_string_lossy();
    let relative = path.replacen(INDEX_PATH_PREFIX, "", 1);

    let marker_at = descriptor.graph.find(GRAPH_ASSET_MARKER).ok_or_else(|| {
        RenderError::GraphMarkerMissing {
            id: descriptor.id.clone(),
            graph: descriptor.graph.clone(),
            marker: GRAPH_ASSET_MARKER,
        }
    })?;
    let relative_graph = &descriptor.graph[marker_at..];

    let mut md = String::new();
    for result in &descriptor.results {
        writeln!(
            md,
            "| [{}]({}/{}) | ![]({}) | {} | {} ({}) | {} | {} | {} | {} | {} | {} |",
            descriptor.id,
            BENCHMARKS_TREE_URL,
            relative,
            relative_graph,
            descriptor.short,
            result.metric,
            result.metric_unit,
            result.hardware,
            scalar_to_string(&result.value),
            result.category,
            result.timestampt,
            result.note,
            result.datasource,
        )
        .unwrap();
    }
    Ok(md)
}

/// Header of the aggregate index table that [`summary_rows`] feeds into.
pub const INDEX_HEADER: &str = concat!(
    "| Benchmark | Graph | Description | Metric | Hardware ",
    "| Value | Category | Timestamp | Note | Data Source |\n",
    "| --- | --- | --- | --- | --- | --- | --- | --- | --- | --- |\n",
);

/// Grey and black results become linked classification icons; everything
/// else passes through unchanged.
fn type_cell(kind: &str) -> String {
    if kind.eq_ignore_ascii_case("grey") {
        format!("[:white_circle:]({TYPE_LEGEND_URL})")
    } else if kind.eq_ignore_ascii_case("black") {
        format!("[:black_circle:]({TYPE_LEGEND_URL})")
    } else {
        kind.to_owned()
    }
}

/// Data sources always render as a link whose text and path are the raw
/// datasource string.
fn datasource_cell(datasource: &str) -> String {
    format!("[{datasource}]({ROSBAGS_TREE_URL}/{datasource})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::BenchmarkDescriptor;
    use std::path::Path;

    fn descriptor(results: &str) -> BenchmarkDescriptor {
        let raw = format!(
            concat!(
                "id: a1\nname: Perception chain\ndescription: Long text.\n",
                "short: Short text.\ngraph: ../../imgs/a1.svg\nreproduction: ros2 launch a1\n",
                "{}"
            ),
            results
        );
        BenchmarkDescriptor::from_yaml_str(&raw, Path::new("src/benchmarks/perception/a1/benchmark.yaml"))
            .unwrap()
    }

    fn one_result(kind: &str) -> String {
        format!(
            concat!(
                "results:\n  - result:\n      metric: latency\n      metric_unit: ms\n",
                "      type: {}\n      hardware: i7\n      category: workstation\n",
                "      timestampt: '2023-06-01'\n      value: 66.82\n      note: n\n",
                "      datasource: a1/trace\n"
            ),
            kind
        )
    }

    #[test]
    fn test_detail_page_section_order() {
        let md = detail_page(&descriptor(&one_result("latency")));
        let title = md.find("# Perception chain").unwrap();
        let id = md.find("### ID").unwrap();
        let desc = md.find("### Description").unwrap();
        let repro = md.find("## Reproduction Steps").unwrap();
        let results = md.find("## Results").unwrap();
        assert!(title < id && id < desc && desc < repro && repro < results);
        assert!(md.contains("```bash\nros2 launch a1\n```"));
    }

    #[test]
    fn test_results_table_header_is_exact() {
        let md = detail_page(&descriptor(""));
        assert!(md.contains(
            "| Type | Hardware | Metric | Value | Category | Timestamp | Note | Data Source |"
        ));
    }

    #[test]
    fn test_zero_results_renders_header_only() {
        let md = detail_page(&descriptor(""));
        let table_start = md.find("| Type |").unwrap();
        let table = &md[table_start..];
        // Header row and separator row, nothing else.
        assert_eq!(table.trim_end().lines().count(), 2);
    }

    #[test]
    fn test_grey_type_becomes_white_circle_link() {
        let md = detail_page(&descriptor(&one_result("Grey")));
        assert!(md.contains(&format!("[:white_circle:]({TYPE_LEGEND_URL})")));
    }

    #[test]
    fn test_black_type_becomes_black_circle_link() {
        let md = detail_page(&descriptor(&one_result("BLACK")));
        assert!(md.contains(&format!("[:black_circle:]({TYPE_LEGEND_URL})")));
    }

    #[test]
    fn test_other_type_passes_through() {
        let md = detail_page(&descriptor(&one_result("latency")));
        assert!(md.contains("| latency | i7 |"));
        assert!(!md.contains(":white_circle:"));
    }

    #[test]
    fn test_datasource_is_always_linked() {
        let md = detail_page(&descriptor(&one_result("grey")));
        assert!(md.contains(&format!("[a1/trace]({ROSBAGS_TREE_URL}/a1/trace)")));
    }

    #[test]
    fn test_summary_rows_rewrite_paths() {
        let rows = summary_rows(&descriptor(&one_result("grey"))).unwrap();
        assert!(rows.contains(&format!("[a1]({BENCHMARKS_TREE_URL}/perception/a1)")));
        assert!(rows.contains("![](imgs/a1.svg)"));
        assert!(rows.contains("latency (ms)"));
        assert_eq!(rows.lines().count(), 1);
    }

    #[test]
    fn test_summary_rows_one_per_result() {
        let two = format!("{}  - result:\n      metric: power\n", one_result("grey"));
        let rows = summary_rows(&descriptor(&two)).unwrap();
        assert_eq!(rows.lines().count(), 2);
    }

    #[test]
    fn test_summary_fails_without_graph_marker() {
        let raw = concat!(
            "id: a1\nname: n\ndescription: d\nshort: s\n",
            "graph: ../../assets/a1.svg\nreproduction: r\n",
        );
        let descriptor =
            BenchmarkDescriptor::from_yaml_str(raw, Path::new("a1/benchmark.yaml")).unwrap();
        assert!(matches!(
            summary_rows(&descriptor),
            Err(RenderError::GraphMarkerMissing { .. })
        ));
    }
}
