// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! The closed metric set and numeric aggregation.
//!
//! Metrics are a closed enumeration: an unrecognized name is an explicit
//! error from [`Metric::from_str`], never a silent fall-through. The CLI
//! decides whether that error aborts anything; the library only rejects.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AnalysisError;

/// An analysis routine the harness can run over a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// End-to-end elapsed time per completed chain occurrence.
    Latency,
    /// Completed chain occurrences per second.
    Throughput,
    /// Average consumption reported by the power probes.
    Power,
}

impl FromStr for Metric {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latency" => Ok(Metric::Latency),
            "throughput" => Ok(Metric::Throughput),
            "power" => Ok(Metric::Power),
            _ => Err(AnalysisError::UnknownMetric(s.to_owned())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Latency => write!(f, "latency"),
            Metric::Throughput => write!(f, "throughput"),
            Metric::Power => write!(f, "power"),
        }
    }
}

/// Parse a `[latency, throughput]`-style metric list.
///
/// Returns the recognized metrics in order alongside the names that were
/// rejected, so the caller can report them without losing the rest.
pub fn parse_metric_list(raw: &str) -> (Vec<Metric>, Vec<String>) {
    let mut metrics = Vec::new();
    let mut unknown = Vec::new();
    for element in raw.trim().trim_matches(['[', ']']).split(',') {
        let element = element.trim();
        if element.is_empty() {
            continue;
        }
        match element.parse::<Metric>() {
            Ok(metric) => metrics.push(metric),
            Err(_) => unknown.push(element.to_owned()),
        }
    }
    (metrics, unknown)
}

/// Latency distribution over the matched chain occurrences, in
/// milliseconds.
#[derive(Debug, Clone, Serialize)]
pub struct LatencySummary {
    /// Minimum occurrence latency.
    pub min_ms: f64,
    /// Maximum occurrence latency.
    pub max_ms: f64,
    /// Mean occurrence latency.
    pub mean_ms: f64,
    /// Standard deviation.
    pub std_dev_ms: f64,
    /// 50th percentile (median).
    pub p50_ms: f64,
    /// 90th percentile.
    pub p90_ms: f64,
    /// 95th percentile.
    pub p95_ms: f64,
    /// 99th percentile.
    pub p99_ms: f64,
    /// Number of completed occurrences.
    pub sample_count: usize,
}

impl Default for LatencySummary {
    fn default() -> Self {
        Self {
            min_ms: 0.0,
            max_ms: 0.0,
            mean_ms: 0.0,
            std_dev_ms: 0.0,
            p50_ms: 0.0,
            p90_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            sample_count: 0,
        }
    }
}

const NANOS_PER_MILLI: f64 = 1_000_000.0;

impl LatencySummary {
    /// Aggregate a set of per-occurrence latencies given in nanoseconds.
    pub fn from_samples_ns(samples: &[u64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let sum: u128 = sorted.iter().map(|&s| u128::from(s)).sum();
        let mean = sum as f64 / n as f64;

        let variance = sorted
            .iter()
            .map(|&s| {
                let diff = s as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n as f64;

        let pct = |p: usize| sorted[(n * p / 100).min(n - 1)] as f64 / NANOS_PER_MILLI;

        Self {
            min_ms: sorted[0] as f64 / NANOS_PER_MILLI,
            max_ms: sorted[n - 1] as f64 / NANOS_PER_MILLI,
            mean_ms: mean / NANOS_PER_MILLI,
            std_dev_ms: variance.sqrt() / NANOS_PER_MILLI,
            p50_ms: pct(50),
            p90_ms: pct(90),
            p95_ms: pct(95),
            p99_ms: pct(99),
            sample_count: n,
        }
    }
}

/// Throughput over the matched chain occurrences.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThroughputSummary {
    /// Number of completed occurrences.
    pub occurrences: usize,
    /// Seconds between the first occurrence's start and the last
    /// occurrence's end.
    pub span_s: f64,
    /// Completed occurrences per second over that span.
    pub rate_hz: f64,
}

impl ThroughputSummary {
    /// Derive throughput from per-occurrence `(start, end)` timestamps in
    /// nanoseconds. Fewer than two occurrences have no measurable rate.
    pub fn from_occurrences_ns(occurrences: &[(u64, u64)]) -> Self {
        if occurrences.len() < 2 {
            return Self {
                occurrences: occurrences.len(),
                ..Self::default()
            };
        }
        let first_start = occurrences[0].0;
        let last_end = occurrences[occurrences.len() - 1].1;
        let span_s = last_end.saturating_sub(first_start) as f64 / 1e9;
        let rate_hz = if span_s > 0.0 {
            occurrences.len() as f64 / span_s
        } else {
            0.0
        };
        Self {
            occurrences: occurrences.len(),
            span_s,
            rate_hz,
        }
    }
}

/// Mean of the power-probe sample values, in watts. Samples without a
/// payload are ignored.
pub fn average_power(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parsing_is_closed() {
        assert_eq!("latency".parse::<Metric>().unwrap(), Metric::Latency);
        assert_eq!("Throughput".parse::<Metric>().unwrap(), Metric::Throughput);
        assert_eq!("power".parse::<Metric>().unwrap(), Metric::Power);
        assert!(matches!(
            "energy".parse::<Metric>(),
            Err(AnalysisError::UnknownMetric(_))
        ));
    }

    #[test]
    fn test_parse_metric_list_keeps_valid_reports_unknown() {
        let (metrics, unknown) = parse_metric_list("[latency, power, bogus]");
        assert_eq!(metrics, [Metric::Latency, Metric::Power]);
        assert_eq!(unknown, ["bogus"]);
    }

    #[test]
    fn test_parse_metric_list_default_form() {
        let (metrics, unknown) = parse_metric_list("[latency]");
        assert_eq!(metrics, [Metric::Latency]);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_latency_summary_aggregates() {
        let samples: Vec<u64> = (1..=100).map(|i| i * 1_000_000).collect();
        let summary = LatencySummary::from_samples_ns(&samples);
        assert_eq!(summary.sample_count, 100);
        assert!((summary.min_ms - 1.0).abs() < 1e-9);
        assert!((summary.max_ms - 100.0).abs() < 1e-9);
        assert!((summary.mean_ms - 50.5).abs() < 1e-9);
        assert!((summary.p50_ms - 51.0).abs() < 1e-9);
        assert!((summary.p99_ms - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_latency_summary_empty_is_zeroed() {
        let summary = LatencySummary::from_samples_ns(&[]);
        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.mean_ms, 0.0);
    }

    #[test]
    fn test_throughput_rate() {
        // Ten occurrences spread over one second.
        let occurrences: Vec<(u64, u64)> = (0..10)
            .map(|i| (i * 100_000_000, i * 100_000_000 + 50_000_000))
            .collect();
        let summary = ThroughputSummary::from_occurrences_ns(&occurrences);
        assert_eq!(summary.occurrences, 10);
        assert!((summary.span_s - 0.95).abs() < 1e-9);
        assert!((summary.rate_hz - 10.0 / 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_average_power() {
        assert_eq!(average_power(&[]), 0.0);
        assert!((average_power(&[10.0, 12.0, 14.0]) - 12.0).abs() < 1e-9);
    }
}
