// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The analyzer driving one benchmark's trace analysis.
//!
//! Targets are appended in chain order; the analyzer then scans a loaded
//! event stream for complete in-order occurrences of that chain. Each
//! completed occurrence is one sample: its latency is the elapsed time
//! between its first and last event. Unrelated events in between are
//! ignored; an incomplete occurrence at stream end contributes nothing.

use std::path::Path;

use serde::Serialize;

use crate::chain::HardwareType;
use crate::error::AnalysisError;
use crate::metrics::{average_power, LatencySummary, ThroughputSummary};
use crate::target::{self, TraceTarget};
use crate::trace::{self, TraceEvent};

/// Latency analysis output for one benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct LatencyReport {
    /// Benchmark the analysis belongs to.
    pub benchmark_id: String,
    /// Aggregated occurrence latencies.
    pub latency: LatencySummary,
    /// Average power draw, when power was requested alongside.
    pub power_w: Option<f64>,
}

/// Throughput analysis output for one benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct ThroughputReport {
    /// Benchmark the analysis belongs to.
    pub benchmark_id: String,
    /// Occurrence rate over the trace.
    pub throughput: ThroughputSummary,
    /// Average power draw, when power was requested alongside.
    pub power_w: Option<f64>,
}

/// Matches a benchmark's target chain against captured traces and
/// aggregates the completed occurrences.
#[derive(Debug)]
pub struct BenchmarkAnalyzer {
    benchmark_id: String,
    hardware: HardwareType,
    targets: Vec<TraceTarget>,
    power_targets: Vec<TraceTarget>,
}

impl BenchmarkAnalyzer {
    /// Create an analyzer for one benchmark on one hardware device type.
    pub fn new(benchmark_id: impl Into<String>, hardware: HardwareType) -> Self {
        Self {
            benchmark_id: benchmark_id.into(),
            hardware,
            targets: Vec::new(),
            power_targets: Vec::new(),
        }
    }

    /// Create an analyzer preloaded with a chain of registered targets.
    ///
    /// # Errors
    ///
    /// Fails with [`AnalysisError::UnknownTarget`] if any chain entry is
    /// not in the style registry.
    pub fn with_chain(
        benchmark_id: impl Into<String>,
        hardware: HardwareType,
        chain: &[&str],
    ) -> Result<Self, AnalysisError> {
        let mut analyzer = Self::new(benchmark_id, hardware);
        for name in chain {
            analyzer.add_target(target::lookup(name)?);
        }
        Ok(analyzer)
    }

    /// Append the next target of the expected chain.
    pub fn add_target(&mut self, target: TraceTarget) {
        self.targets.push(target);
    }

    /// Register a power probe whose samples are averaged into the report.
    pub fn add_power(&mut self, target: TraceTarget) {
        self.power_targets.push(target);
    }

    /// Benchmark this analyzer was built for.
    pub fn benchmark_id(&self) -> &str {
        &self.benchmark_id
    }

    /// Hardware device type the chain was selected for.
    pub fn hardware(&self) -> HardwareType {
        self.hardware
    }

    /// Targets in chain order.
    pub fn targets(&self) -> &[TraceTarget] {
        &self.targets
    }

    /// Analyze occurrence latencies over the trace at `trace_path`.
    pub fn analyze_latency(
        &self,
        trace_path: &Path,
        include_power: bool,
    ) -> Result<LatencyReport, AnalysisError> {
        let events = self.load_events(trace_path)?;
        let occurrences = self.match_chain(&events);
        let samples: Vec<u64> = occurrences
            .iter()
            .map(|&(start, end)| end.saturating_sub(start))
            .collect();
        tracing::debug!(
            benchmark = %self.benchmark_id,
            occurrences = occurrences.len(),
            "latency analysis complete"
        );
        Ok(LatencyReport {
            benchmark_id: self.benchmark_id.clone(),
            latency: LatencySummary::from_samples_ns(&samples),
            power_w: include_power.then(|| self.power_average(&events)),
        })
    }

    /// Analyze occurrence throughput over the trace at `trace_path`.
    pub fn analyze_throughput(
        &self,
        trace_path: &Path,
        include_power: bool,
    ) -> Result<ThroughputReport, AnalysisError> {
        let events = self.load_events(trace_path)?;
        let occurrences = self.match_chain(&events);
        Ok(ThroughputReport {
            benchmark_id: self.benchmark_id.clone(),
            throughput: ThroughputSummary::from_occurrences_ns(&occurrences),
            power_w: include_power.then(|| self.power_average(&events)),
        })
    }

    /// Analyze only power: the mean consumption reported by the power
    /// probes, in watts.
    pub fn analyze_power(&self, trace_path: &Path) -> Result<f64, AnalysisError> {
        let events = self.load_events(trace_path)?;
        Ok(self.power_average(&events))
    }

    fn load_events(&self, trace_path: &Path) -> Result<Vec<TraceEvent>, AnalysisError> {
        let events = trace::load_trace_dir(trace_path)?;
        if events.is_empty() {
            return Err(AnalysisError::EmptyTrace {
                path: trace_path.to_path_buf(),
            });
        }
        Ok(events)
    }

    /// Scan the stream for complete in-order chain occurrences, returning
    /// `(start, end)` timestamps per occurrence.
    fn match_chain(&self, events: &[TraceEvent]) -> Vec<(u64, u64)> {
        if self.targets.is_empty() {
            return Vec::new();
        }
        let expected: Vec<&str> = self.targets.iter().map(|t| t.name.as_str()).collect();

        let mut occurrences = Vec::new();
        let mut cursor = 0usize;
        let mut start = 0u64;
        for event in events {
            if event.name != expected[cursor] {
                continue;
            }
            if cursor == 0 {
                start = event.timestamp;
            }
            cursor += 1;
            if cursor == expected.len() {
                occurrences.push((start, event.timestamp));
                cursor = 0;
            }
        }
        occurrences
    }

    fn power_average(&self, events: &[TraceEvent]) -> f64 {
        let samples: Vec<f64> = events
            .iter()
            .filter(|event| {
                self.power_targets
                    .iter()
                    .any(|target| target.name == event.name)
            })
            .filter_map(|event| event.value)
            .collect();
        if samples.is_empty() {
            tracing::warn!(benchmark = %self.benchmark_id, "no power samples in trace");
        }
        average_power(&samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{select_chain, CPU_CHAIN};
    use std::fmt::Write as _;
    use std::fs;

    fn event(name: &str, timestamp: u64) -> String {
        format!("{{\"name\":\"{name}\",\"timestamp\":{timestamp}}}\n")
    }

    fn analyzer() -> BenchmarkAnalyzer {
        BenchmarkAnalyzer::with_chain("a1_perception_2nodes", HardwareType::Cpu, CPU_CHAIN)
            .unwrap()
    }

    /// Write a trace with `n` complete cpu-chain occurrences, each taking
    /// 4ms end to end, one every 10ms.
    fn write_trace(dir: &Path, n: u64) {
        let mut raw = String::new();
        for i in 0..n {
            let base = i * 10_000_000;
            for (j, name) in CPU_CHAIN.iter().enumerate() {
                // Chain names equal event names for the cpu chain.
                write!(raw, "{}", event(name, base + j as u64 * 1_000_000)).unwrap();
            }
        }
        fs::write(dir.join("trace.json"), raw).unwrap();
    }

    #[test]
    fn test_chain_matching_counts_complete_occurrences() {
        let dir = tempfile::tempdir().unwrap();
        write_trace(dir.path(), 3);
        // Incomplete tail: the chain starts again but never finishes.
        let mut tail = event(CPU_CHAIN[0], 90_000_000);
        tail.push_str(&event(CPU_CHAIN[1], 91_000_000));
        fs::write(dir.path().join("tail.json"), tail).unwrap();

        let report = analyzer().analyze_latency(dir.path(), false).unwrap();
        assert_eq!(report.latency.sample_count, 3);
        assert!((report.latency.mean_ms - 3.0).abs() < 1e-9);
        assert!(report.power_w.is_none());
    }

    #[test]
    fn test_unrelated_events_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut raw = String::new();
        for (j, name) in CPU_CHAIN.iter().enumerate() {
            raw.push_str(&event(name, j as u64 * 1_000_000));
            raw.push_str(&event("dds:write", j as u64 * 1_000_000 + 500));
        }
        fs::write(dir.path().join("trace.json"), raw).unwrap();

        let report = analyzer().analyze_latency(dir.path(), false).unwrap();
        assert_eq!(report.latency.sample_count, 1);
    }

    #[test]
    fn test_empty_trace_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            analyzer().analyze_latency(dir.path(), false),
            Err(AnalysisError::EmptyTrace { .. })
        ));
    }

    #[test]
    fn test_throughput_over_occurrences() {
        let dir = tempfile::tempdir().unwrap();
        write_trace(dir.path(), 10);

        let report = analyzer().analyze_throughput(dir.path(), false).unwrap();
        assert_eq!(report.throughput.occurrences, 10);
        assert!(report.throughput.rate_hz > 0.0);
    }

    #[test]
    fn test_power_rides_along_when_requested() {
        let dir = tempfile::tempdir().unwrap();
        write_trace(dir.path(), 2);
        let probe = target::power_target();
        let power_lines = format!(
            "{{\"name\":\"{0}\",\"timestamp\":500,\"value\":10.0}}\n{{\"name\":\"{0}\",\"timestamp\":600,\"value\":14.0}}\n",
            probe.name
        );
        fs::write(dir.path().join("power.json"), power_lines).unwrap();

        let mut analyzer = analyzer();
        analyzer.add_power(probe);
        let report = analyzer.analyze_latency(dir.path(), true).unwrap();
        assert_eq!(report.power_w, Some(12.0));

        let watts = analyzer.analyze_power(dir.path()).unwrap();
        assert!((watts - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_fpga_chain_loads_from_registry() {
        let analyzer = BenchmarkAnalyzer::with_chain(
            "a1_perception_2nodes",
            HardwareType::Fpga,
            select_chain(HardwareType::Fpga, false),
        )
        .unwrap();
        assert_eq!(analyzer.targets().len(), 24);
    }
}
