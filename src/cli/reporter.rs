// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::GeometryStats;
use crate::tessellate::TessellationStats;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a finished render
    pub fn report_render(
        source: &str,
        stats: &GeometryStats,
        counters: &TessellationStats,
        duration: Duration,
    ) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Rendered:".bold(), source.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if stats.box_count == 0 {
            println!(
                "{} {}",
                "⚠️ ".yellow(),
                "No boxes accepted; the solid may be smaller than the resolution floor".yellow()
            );
        }

        println!("\n{}", "Result:".bold());
        Self::print_metric("Boxes", &stats.box_count.to_string());
        Self::print_metric("Triangles", &stats.triangle_count.to_string());
        Self::print_metric("Volume", &format!("{:.4}", stats.volume));
        Self::print_metric(
            "Extent",
            &format!(
                "({:.2}, {:.2}, {:.2}) .. ({:.2}, {:.2}, {:.2})",
                stats.bbox[0], stats.bbox[1], stats.bbox[2], stats.bbox[3], stats.bbox[4], stats.bbox[5]
            ),
        );

        println!("\n{}", "Octree:".bold());
        Self::print_metric("Visited", &counters.visited.to_string());
        Self::print_metric("Subdivided", &counters.subdivided.to_string());
        Self::print_metric("Dropped", &counters.dropped.to_string());
        Self::print_metric("Max depth", &counters.max_depth_reached.to_string());
        Self::print_metric("Samples", &counters.samples_evaluated.to_string());

        println!(
            "\n  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    fn print_metric(name: &str, value: &str) {
        println!(
            "  {} {}",
            format!("{}:", name).bright_black(),
            value.cyan()
        );
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }

    /// Print progress line
    pub fn progress(message: &str) {
        println!("{} {}...", "⏳".bright_blue(), message.bright_black());
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }
}
