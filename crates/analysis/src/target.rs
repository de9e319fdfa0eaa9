// Copyright 2026 Robobench Contributors
// SPDX-License-Identifier: Apache-2.0

//! Trace targets and their visualization styles.
//!
//! A trace target is one named instrumentation event delimiting a stage
//! in an execution chain. Each carries display metadata used when the
//! matched chains are plotted: a terminal color, a plot color, the layer
//! the event belongs to, and a marker shape.
//!
//! The style metadata lives in one static registry, keyed by the
//! disambiguated event name (the same underlying event can occur several
//! times in a chain with a distinct plot color per occurrence). Entry
//! points look targets up here instead of carrying their own literal
//! style tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::AnalysisError;

/// Instrumentation layer an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Kernel or accelerator runtime events.
    Kernel,
    /// ROS2 client-library callback brackets.
    Rclcpp,
    /// Application-level instrumentation.
    Userland,
    /// The benchmark's own input/output probes.
    Benchmark,
}

impl Layer {
    /// Row the layer's events are labeled on in plots.
    pub fn label_row(self) -> u8 {
        match self {
            Layer::Kernel => 1,
            Layer::Rclcpp => 3,
            Layer::Userland => 4,
            Layer::Benchmark => 5,
        }
    }
}

/// Marker shape used when plotting an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    /// Plus-sign marker, used for probe events.
    Plus,
    /// Diamond marker, used for middleware callback brackets.
    Diamond,
}

/// Visualization metadata for one target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TargetStyle {
    /// Terminal foreground color.
    pub colors_fg: &'static str,
    /// Plot color.
    pub colors_fg_bokeh: &'static str,
    /// Layer classification.
    pub layer: Layer,
    /// Marker shape.
    pub marker: Marker,
}

/// One named trace event with its display metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TraceTarget {
    /// Event name as it appears in the trace.
    pub name: String,
    /// Display name, unique even when the same event recurs in a chain.
    pub name_disambiguous: String,
    /// Visualization metadata.
    pub style: TargetStyle,
}

struct StyleEntry {
    name: &'static str,
    disambiguous: &'static str,
    colors_fg: &'static str,
    colors_fg_bokeh: &'static str,
    layer: Layer,
    marker: Marker,
}

macro_rules! style {
    ($name:expr, $disambiguous:expr, $fg:expr, $bokeh:expr, $layer:expr, $marker:expr) => {
        StyleEntry {
            name: $name,
            disambiguous: $disambiguous,
            colors_fg: $fg,
            colors_fg_bokeh: $bokeh,
            layer: $layer,
            marker: $marker,
        }
    };
}

/// Per-event visual metadata for every event the built-in chains name.
///
/// Recurring middleware brackets get one entry per occurrence so every
/// occurrence keeps its own plot color; accelerator kernel enqueues are
/// disambiguated by the operation they bracket.
static STYLE_TABLE: &[StyleEntry] = &[
    // Benchmark input/output probes.
    style!(
        "robotperf_benchmarks:robotperf_image_input_cb_init",
        "robotperf_benchmarks:robotperf_image_input_cb_init",
        "blue", "silver", Layer::Userland, Marker::Plus
    ),
    style!(
        "robotperf_benchmarks:robotperf_image_input_cb_fini",
        "robotperf_benchmarks:robotperf_image_input_cb_fini",
        "blue", "darkgray", Layer::Benchmark, Marker::Plus
    ),
    style!(
        "robotperf_benchmarks:robotperf_image_output_cb_init",
        "robotperf_benchmarks:robotperf_image_output_cb_init",
        "blue", "chocolate", Layer::Benchmark, Marker::Plus
    ),
    style!(
        "robotperf_benchmarks:robotperf_image_output_cb_fini",
        "robotperf_benchmarks:robotperf_image_output_cb_fini",
        "blue", "coral", Layer::Userland, Marker::Plus
    ),
    // Middleware callback brackets, one entry per chain occurrence.
    style!("ros2:callback_start", "ros2:callback_start", "blue", "lightgray", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_start", "ros2:callback_start (2)", "blue", "lightsalmon", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_start", "ros2:callback_start (3)", "blue", "lavender", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_start", "ros2:callback_start (4)", "blue", "chartreuse", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_end", "ros2:callback_end", "blue", "gray", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_end", "ros2:callback_end (2)", "blue", "red", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_end", "ros2:callback_end (3)", "blue", "mediumslateblue", Layer::Rclcpp, Marker::Diamond),
    style!("ros2:callback_end", "ros2:callback_end (4)", "blue", "cornflowerblue", Layer::Rclcpp, Marker::Diamond),
    // Image-pipeline rectify stage.
    style!(
        "ros2_image_pipeline:image_proc_rectify_cb_init",
        "ros2_image_pipeline:image_proc_rectify_cb_init",
        "yellow", "salmon", Layer::Userland, Marker::Plus
    ),
    style!(
        "ros2_image_pipeline:image_proc_rectify_init",
        "ros2_image_pipeline:image_proc_rectify_init",
        "red", "darksalmon", Layer::Userland, Marker::Plus
    ),
    style!(
        "ros2_image_pipeline:image_proc_rectify_fini",
        "ros2_image_pipeline:image_proc_rectify_fini",
        "red", "lightcoral", Layer::Userland, Marker::Plus
    ),
    style!(
        "ros2_image_pipeline:image_proc_rectify_cb_fini",
        "ros2_image_pipeline:image_proc_rectify_cb_fini",
        "yellow", "darkred", Layer::Userland, Marker::Plus
    ),
    // Image-pipeline resize stage.
    style!(
        "ros2_image_pipeline:image_proc_resize_cb_init",
        "ros2_image_pipeline:image_proc_resize_cb_init",
        "yellow", "thistle", Layer::Userland, Marker::Plus
    ),
    style!(
        "ros2_image_pipeline:image_proc_resize_init",
        "ros2_image_pipeline:image_proc_resize_init",
        "red", "plum", Layer::Userland, Marker::Plus
    ),
    style!(
        "ros2_image_pipeline:image_proc_resize_fini",
        "ros2_image_pipeline:image_proc_resize_fini",
        "red", "fuchsia", Layer::Userland, Marker::Plus
    ),
    style!(
        "ros2_image_pipeline:image_proc_resize_cb_fini",
        "ros2_image_pipeline:image_proc_resize_cb_fini",
        "yellow", "indigo", Layer::Userland, Marker::Plus
    ),
    // Accelerator kernel enqueues, disambiguated by the operation they bracket.
    style!("ros2:vitis_profiler:kernel_enqueue", "ros2:kernel_enqueue:rectify_init", "green", "indianred", Layer::Kernel, Marker::Plus),
    style!("ros2:vitis_profiler:kernel_enqueue", "ros2:kernel_enqueue:rectify_fini", "green", "crimson", Layer::Kernel, Marker::Plus),
    style!("ros2:vitis_profiler:kernel_enqueue", "ros2:kernel_enqueue:resize_init", "green", "fuchsia", Layer::Kernel, Marker::Plus),
    style!("ros2:vitis_profiler:kernel_enqueue", "ros2:kernel_enqueue:resize_fini", "green", "darkmagenta", Layer::Kernel, Marker::Plus),
    // Power probe.
    style!(
        "robotcore_power:robotcore_power_output_cb_fini",
        "robotcore_power:robotcore_power_output_cb_fini",
        "blue", "silver", Layer::Userland, Marker::Plus
    ),
];

static STYLE_INDEX: Lazy<HashMap<&'static str, &'static StyleEntry>> = Lazy::new(|| {
    STYLE_TABLE
        .iter()
        .map(|entry| (entry.disambiguous, entry))
        .collect()
});

/// Look a target up by its disambiguated event name.
///
/// # Errors
///
/// Returns [`AnalysisError::UnknownTarget`] for names outside the
/// registry; chains and registry are meant to move together.
pub fn lookup(disambiguous: &str) -> Result<TraceTarget, AnalysisError> {
    let entry = STYLE_INDEX
        .get(disambiguous)
        .ok_or_else(|| AnalysisError::UnknownTarget(disambiguous.to_owned()))?;
    Ok(TraceTarget {
        name: entry.name.to_owned(),
        name_disambiguous: entry.disambiguous.to_owned(),
        style: TargetStyle {
            colors_fg: entry.colors_fg,
            colors_fg_bokeh: entry.colors_fg_bokeh,
            layer: entry.layer,
            marker: entry.marker,
        },
    })
}

/// The power-consumption probe target.
pub fn power_target() -> TraceTarget {
    lookup("robotcore_power:robotcore_power_output_cb_fini")
        .expect("power probe is always registered")
}
