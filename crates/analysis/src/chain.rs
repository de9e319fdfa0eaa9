// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Built-in target chains.
//!
//! A target chain is the ordered event sequence one benchmark iteration
//! is expected to leave in the trace. Which chain applies depends on the
//! hardware device type and, on fpga, on whether the rectify and resize
//! stages run as one integrated accelerator kernel or as separate nodes.
//!
//! Chains name targets by their disambiguated names; [`crate::target`]
//! resolves them to underlying event names and styles.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AnalysisError;

/// Hardware device type a benchmark ran on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HardwareType {
    /// General-purpose CPU.
    Cpu,
    /// FPGA accelerator.
    Fpga,
}

impl FromStr for HardwareType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(HardwareType::Cpu),
            "fpga" => Ok(HardwareType::Fpga),
            _ => Err(AnalysisError::UnknownHardware(s.to_owned())),
        }
    }
}

impl fmt::Display for HardwareType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareType::Cpu => write!(f, "cpu"),
            HardwareType::Fpga => write!(f, "fpga"),
        }
    }
}

/// CPU variant: input and output probes only.
pub const CPU_CHAIN: &[&str] = &[
    "robotperf_benchmarks:robotperf_image_input_cb_init",
    "robotperf_benchmarks:robotperf_image_input_cb_fini",
    "robotperf_benchmarks:robotperf_image_output_cb_init",
    "robotperf_benchmarks:robotperf_image_output_cb_fini",
];

/// FPGA variant with rectify and resize as separate nodes: middleware
/// callback brackets around each stage, kernel enqueues bracketing the
/// accelerator work.
pub const FPGA_CHAIN: &[&str] = &[
    "ros2:callback_start",
    "robotperf_benchmarks:robotperf_image_input_cb_init",
    "robotperf_benchmarks:robotperf_image_input_cb_fini",
    "ros2:callback_end",
    "ros2:callback_start (2)",
    "ros2_image_pipeline:image_proc_rectify_cb_init",
    "ros2_image_pipeline:image_proc_rectify_init",
    "ros2:kernel_enqueue:rectify_init",
    "ros2:kernel_enqueue:rectify_fini",
    "ros2_image_pipeline:image_proc_rectify_fini",
    "ros2_image_pipeline:image_proc_rectify_cb_fini",
    "ros2:callback_end (2)",
    "ros2:callback_start (3)",
    "ros2_image_pipeline:image_proc_resize_cb_init",
    "ros2_image_pipeline:image_proc_resize_init",
    "ros2:kernel_enqueue:resize_init",
    "ros2:kernel_enqueue:resize_fini",
    "ros2_image_pipeline:image_proc_resize_fini",
    "ros2_image_pipeline:image_proc_resize_cb_fini",
    "ros2:callback_end (3)",
    "ros2:callback_start (4)",
    "robotperf_benchmarks:robotperf_image_output_cb_init",
    "robotperf_benchmarks:robotperf_image_output_cb_fini",
    "ros2:callback_end (4)",
];

/// FPGA variant with rectify and resize integrated into one kernel.
pub const FPGA_INTEGRATED_CHAIN: &[&str] = &[
    "robotperf_benchmarks:robotperf_image_input_cb_init",
    "robotperf_benchmarks:robotperf_image_input_cb_fini",
    "ros2_image_pipeline:image_proc_rectify_cb_init",
    "ros2_image_pipeline:image_proc_rectify_init",
    "ros2_image_pipeline:image_proc_rectify_fini",
    "ros2_image_pipeline:image_proc_rectify_cb_fini",
    "robotperf_benchmarks:robotperf_image_output_cb_init",
    "robotperf_benchmarks:robotperf_image_output_cb_fini",
];

/// Select the chain for a hardware configuration. The integrated flag
/// only matters on fpga.
pub fn select_chain(hardware: HardwareType, integrated: bool) -> &'static [&'static str] {
    match (hardware, integrated) {
        (HardwareType::Cpu, _) => CPU_CHAIN,
        (HardwareType::Fpga, false) => FPGA_CHAIN,
        (HardwareType::Fpga, true) => FPGA_INTEGRATED_CHAIN,
    }
}
