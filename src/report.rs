//! Text reports: comparison table, conclusions and Gantt charts.
//!
//! Rendering only reads scheduled records; it never fails on partially
//! scheduled input, it just leaves those processes out.

use std::fmt::Write as _;

use serde::Serialize;

use crate::comparison::AlgorithmOutcome;
use crate::models::{ProcessRecord, Timeline};
use crate::scheduler::Algorithm;

/// Padding added after the last completion on the chart's x-axis.
pub const X_AXIS_PADDING: i64 = 10;

/// Renders the cross-algorithm comparison table.
///
/// One row per outcome, fixed-width left-aligned columns, two decimals.
/// Missing transient metrics print as `0.00`.
pub fn comparison_table(outcomes: &[AlgorithmOutcome]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Comparison of Scheduling Algorithms ---");
    let _ = writeln!(
        out,
        "{:<25}{:<20}{:<20}{:<25}{:<25}",
        "Algorithm",
        "Avg Waiting Time",
        "Avg Turnaround Time",
        "Transient Waiting Time",
        "Transient Turnaround Time"
    );

    for outcome in outcomes {
        let m = &outcome.metrics;
        let _ = writeln!(
            out,
            "{:<25}{:<20.2}{:<20.2}{:<25.2}{:<25.2}",
            outcome.algorithm.name(),
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.transient_waiting_time.unwrap_or(0) as f64,
            m.transient_turnaround_time.unwrap_or(0) as f64,
        );
    }

    out
}

/// Renders the per-algorithm conclusion lines.
pub fn conclusions(algorithms: &[Algorithm]) -> String {
    let mut out = String::from("--- Conclusion ---\n");
    for algorithm in algorithms {
        let _ = writeln!(out, "{}: {}", algorithm.name(), algorithm.summary());
    }
    out
}

/// One horizontal bar of a Gantt chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GanttBar {
    pub pid: u32,
    pub start: i64,
    pub end: i64,
}

/// A per-process Gantt chart.
///
/// Each dispatched process is drawn as `[start_time, start_time + burst_time]`.
/// For preemptive disciplines this is a summary, not the exact execution;
/// use [`render_timeline`] for that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GanttChart {
    pub title: String,
    pub bars: Vec<GanttBar>,
    /// Right edge of the x-axis: latest completion + padding.
    pub x_max: i64,
}

impl GanttChart {
    /// Builds a chart, skipping processes that were never dispatched.
    pub fn from_processes(title: impl Into<String>, processes: &[ProcessRecord]) -> Self {
        let bars = processes
            .iter()
            .filter_map(|p| {
                p.start_time.map(|start| GanttBar {
                    pid: p.pid,
                    start,
                    end: start + p.burst_time,
                })
            })
            .collect();

        let x_max = processes
            .iter()
            .filter_map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
            + X_AXIS_PADDING;

        Self {
            title: title.into(),
            bars,
            x_max,
        }
    }

    /// Draws the chart as text, scaled to `width` columns.
    pub fn render(&self, width: usize) -> String {
        let intervals: Vec<(String, i64, i64)> = self
            .bars
            .iter()
            .map(|b| (format!("Process {}", b.pid), b.start, b.end))
            .collect();
        render_rows(&self.title, &intervals, self.x_max, width)
    }
}

/// Draws the actual execution slices, one row per slice.
pub fn render_timeline(title: &str, timeline: &Timeline, width: usize) -> String {
    let intervals: Vec<(String, i64, i64)> = timeline
        .slices
        .iter()
        .map(|s| (format!("P{}", s.pid), s.start, s.end))
        .collect();
    render_rows(title, &intervals, timeline.end_time() + X_AXIS_PADDING, width)
}

fn render_rows(title: &str, rows: &[(String, i64, i64)], x_max: i64, width: usize) -> String {
    let width = width.max(10);
    let label_width = rows.iter().map(|(l, _, _)| l.len()).max().unwrap_or(0);
    let scale = |t: i64| -> usize {
        if x_max <= 0 {
            0
        } else {
            ((t.max(0) as f64 / x_max as f64) * width as f64).round() as usize
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    for (label, start, end) in rows {
        let from = scale(*start).min(width);
        let to = scale(*end).clamp(from + 1, width.max(from + 1));
        let _ = writeln!(
            out,
            "{label:<label_width$} |{}{}{}| {start}-{end}",
            " ".repeat(from),
            "#".repeat(to - from),
            " ".repeat(width.saturating_sub(to)),
        );
    }
    let _ = writeln!(out, "{:<label_width$} 0{:>width$}", "Time", x_max);
    out
}
