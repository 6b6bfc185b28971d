//! Select command implementation
//!
//! Selects checkpoints on one path with the configured strategy.

use serde::Serialize;
use tracing::info;
use waypoint_core::math::DistanceMetric;
use waypoint_core::selection::{SearchReport, Selector};

use super::{format_checkpoints, load_path};
use crate::config::{max_path_length, OutputFormat, WaypointConfig};
use crate::{CliError, Result};

/// Everything printed by `waypoint select --format json`.
#[derive(Debug, Serialize)]
pub struct SelectOutput<'a> {
    /// Number of points searched
    pub points: usize,
    /// Requested budget
    pub budget: i64,
    /// Distance metric used
    pub metric: DistanceMetric,
    /// Search result
    #[serde(flatten)]
    pub report: &'a SearchReport,
}

/// Run the select command
pub fn run(config: &WaypointConfig, input: Option<&str>) -> Result<()> {
    info!("Starting selection...");
    info!("  Strategy: {}", config.strategy);
    info!("  Metric: {}", config.metric);
    info!("  Budget: {}", config.budget);

    let path = load_path(input, config)?;
    if let Some(limit) = max_path_length(config.strategy) {
        if path.len() > limit {
            return Err(CliError::InvalidArgument(format!(
                "{} search supports at most {} points, got {}; use tabulated",
                config.strategy,
                limit,
                path.len()
            )));
        }
    }

    let report = Selector::new(config.selector_config()).run(&path, config.budget)?;
    let output = SelectOutput {
        points: path.len(),
        budget: config.budget,
        metric: config.metric,
        report: &report,
    };
    println!("{}", render(&output, config.output_format)?);

    info!("Selection complete");
    Ok(())
}

/// Render a selection result in `format`.
pub fn render(output: &SelectOutput<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Table => Ok(render_table(output)),
    }
}

fn render_table(output: &SelectOutput<'_>) -> String {
    let report = output.report;
    let mut rows = vec![
        ("Strategy", report.strategy.to_string()),
        ("Metric", output.metric.to_string()),
        ("Points", output.points.to_string()),
        ("Budget", output.budget.to_string()),
        ("Checkpoints", format_checkpoints(&report.selection.checkpoints, 12)),
        ("Cost", format!("{:.6}", report.selection.cost)),
        ("Cost evaluations", report.stats.cost_evaluations.to_string()),
        ("Subproblems", report.stats.subproblems.to_string()),
    ];
    if let Some(cache) = report.stats.cache {
        rows.push(("Cache hit rate", format!("{:.1}%", cache.hit_rate() * 100.0)));
    }

    let width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0).max(10);
    let rule = "─".repeat(width + 2);
    let mut table = format!("┌──────────────────┬{}┐\n", rule);
    for (label, value) in &rows {
        table.push_str(&format!("│ {:<16} │ {:<width$} │\n", label, value, width = width));
    }
    table.push_str(&format!("└──────────────────┴{}┘", rule));
    table
}
