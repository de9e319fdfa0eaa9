//! CLI for the robobench benchmark harness.
//!
//! This crate provides the `robobench` command: discovering benchmark
//! descriptors, regenerating their markdown documentation, and running
//! trace analyses.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod output;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use robobench_analysis::analyzer::{LatencyReport, ThroughputReport};
use robobench_analysis::chain::select_chain;
use robobench_analysis::metrics::parse_metric_list;
use robobench_analysis::{target, BenchmarkAnalyzer, HardwareType, Metric};
use robobench_catalog::{discovery, report, BenchmarkDescriptor};

/// robobench CLI.
#[derive(Parser, Debug)]
#[command(name = "robobench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover benchmark descriptors and print a catalog summary.
    List {
        /// Directory tree to search for `benchmark.yaml` files.
        #[arg(default_value = "src")]
        search_path: PathBuf,
    },

    /// Regenerate markdown documentation: a detail page per benchmark
    /// plus one aggregate index table.
    Report {
        /// Directory tree to search for `benchmark.yaml` files.
        #[arg(default_value = "src")]
        search_path: PathBuf,

        /// File the aggregate index table is written to.
        #[arg(long, default_value = "benchmarks_index.md")]
        index: PathBuf,
    },

    /// Analyze a captured trace against a benchmark's target chain.
    Analyze {
        /// Benchmark to analyze.
        #[arg(default_value = "a1_perception_2nodes")]
        benchmark_id: String,

        /// Hardware Device Type (e.g. cpu or fpga).
        #[arg(long = "hardware_device_type", default_value = "cpu")]
        hardware_device_type: String,

        /// Path to trace files (e.g. /tmp/analysis/trace).
        #[arg(long = "trace_path", default_value = "/tmp/analysis/trace")]
        trace_path: PathBuf,

        /// List of metrics to be analyzed (e.g. latency and/or throughput).
        #[arg(long, default_value = "[latency]")]
        metrics: String,

        /// Integrated or separated version of the Resize and Rectify
        /// nodes (only for fpga now).
        #[arg(long, default_value = "false")]
        integrated: String,
    },
}

/// Run the CLI with the given arguments.
///
/// # Errors
///
/// Returns an error when a command fails; unknown hardware device types
/// and metric names are diagnostics, not errors.
pub fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { search_path } => list(&search_path),
        Commands::Report { search_path, index } => write_reports(&search_path, &index),
        Commands::Analyze {
            benchmark_id,
            hardware_device_type,
            trace_path,
            metrics,
            integrated,
        } => analyze(
            &benchmark_id,
            &hardware_device_type,
            &trace_path,
            &metrics,
            &integrated,
        ),
    }
}

fn list(search_path: &std::path::Path) -> anyhow::Result<()> {
    if let Some(root) = discovery::find_repo_root(search_path) {
        output::info(&format!("benchmarks root: {}", root.display()));
    }

    let mut count = 0usize;
    for path in discovery::find_descriptors(search_path) {
        match BenchmarkDescriptor::from_file(&path) {
            Ok(descriptor) => {
                println!(
                    "{}  {} ({} results)",
                    descriptor.id.green().bold(),
                    descriptor.name,
                    descriptor.results.len()
                );
                count += 1;
            }
            Err(e) => output::error(&format!("{e:#}")),
        }
    }
    println!("{count} benchmarks");
    Ok(())
}

fn write_reports(search_path: &std::path::Path, index: &std::path::Path) -> anyhow::Result<()> {
    let mut descriptors = Vec::new();
    for path in discovery::find_descriptors(search_path) {
        match BenchmarkDescriptor::from_file(&path) {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(e) => output::error(&format!("{e:#}")),
        }
    }

    report::write_detail_pages(&descriptors).context("writing detail pages")?;
    report::write_index(&descriptors, index).context("writing aggregate index")?;

    output::ok(&format!(
        "wrote {} detail pages and {}",
        descriptors.len(),
        index.display()
    ));
    Ok(())
}

fn analyze(
    benchmark_id: &str,
    hardware_device_type: &str,
    trace_path: &std::path::Path,
    metrics_raw: &str,
    integrated_raw: &str,
) -> anyhow::Result<()> {
    let hardware: HardwareType = match hardware_device_type.parse() {
        Ok(hardware) => hardware,
        Err(_) => {
            output::warn(&format!(
                "The hardware device type {hardware_device_type} is not yet implemented"
            ));
            return Ok(());
        }
    };
    let integrated = integrated_raw.trim().eq_ignore_ascii_case("true");

    let (metrics, unknown) = parse_metric_list(metrics_raw);
    for name in &unknown {
        output::warn(&format!("The metric {name} is not yet implemented"));
    }

    let mut analyzer =
        BenchmarkAnalyzer::with_chain(benchmark_id, hardware, select_chain(hardware, integrated))?;

    let include_power = metrics.contains(&Metric::Power);
    if include_power {
        analyzer.add_power(target::power_target());
    }
    // Power runs standalone only when it is the sole requested metric;
    // otherwise its average rides along with the other analyses.
    let non_power_metrics = metrics.iter().filter(|m| **m != Metric::Power).count();

    for metric in &metrics {
        match metric {
            Metric::Latency => {
                let report = analyzer.analyze_latency(trace_path, include_power)?;
                print_latency(&report);
            }
            Metric::Throughput => {
                let report = analyzer.analyze_throughput(trace_path, include_power)?;
                print_throughput(&report);
            }
            Metric::Power => {
                if non_power_metrics == 0 {
                    let watts = analyzer.analyze_power(trace_path)?;
                    println!("The average consumption is {watts:.2} W");
                }
            }
        }
    }
    Ok(())
}

fn print_latency(report: &LatencyReport) {
    println!(
        "{}",
        format!(
            "{} latency ({} samples)",
            report.benchmark_id, report.latency.sample_count
        )
        .cyan()
        .bold()
    );
    println!(
        "  mean {:.3} ms  min {:.3} ms  max {:.3} ms  std-dev {:.3} ms",
        report.latency.mean_ms,
        report.latency.min_ms,
        report.latency.max_ms,
        report.latency.std_dev_ms
    );
    println!(
        "  p50 {:.3} ms  p90 {:.3} ms  p95 {:.3} ms  p99 {:.3} ms",
        report.latency.p50_ms, report.latency.p90_ms, report.latency.p95_ms, report.latency.p99_ms
    );
    if let Some(watts) = report.power_w {
        println!("  average consumption {watts:.2} W");
    }
}

fn print_throughput(report: &ThroughputReport) {
    println!(
        "{}",
        format!(
            "{} throughput ({} occurrences)",
            report.benchmark_id, report.throughput.occurrences
        )
        .cyan()
        .bold()
    );
    println!(
        "  {:.2} Hz over {:.3} s",
        report.throughput.rate_hz, report.throughput.span_s
    );
    if let Some(watts) = report.power_w {
        println!("  average consumption {watts:.2} W");
    }
}
