//! Compare command implementation
//!
//! Runs every search strategy on one path, checks that they agree and
//! reports how much work and time each took.

use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};
use waypoint_core::selection::{SearchReport, SearchStrategy, Selector, SelectorConfig};
use waypoint_core::types::Point;

use super::{format_checkpoints, load_path};
use crate::config::{max_path_length, OutputFormat, WaypointConfig};
use crate::{CliError, Result};

/// One strategy's result with its wall-clock time.
#[derive(Debug, Clone, Serialize)]
pub struct TimedReport {
    /// Search result
    #[serde(flatten)]
    pub report: SearchReport,
    /// Elapsed wall-clock time in milliseconds
    pub elapsed_ms: f64,
}

/// Run the compare command
pub fn run(config: &WaypointConfig, input: Option<&str>) -> Result<()> {
    info!("Starting comparison...");
    info!("  Metric: {}", config.metric);
    info!("  Budget: {}", config.budget);

    let path = load_path(input, config)?;
    let runs = compare(&path, config)?;
    println!("{}", render(&runs, config.output_format)?);

    info!("Comparison complete");
    Ok(())
}

/// Run each strategy on `path` and check that all selections agree.
///
/// Strategies are skipped for paths longer than their
/// [`max_path_length`].
pub fn compare(path: &[Point], config: &WaypointConfig) -> Result<Vec<TimedReport>> {
    let mut runs: Vec<TimedReport> = Vec::with_capacity(SearchStrategy::ALL.len());

    for strategy in SearchStrategy::ALL {
        if let Some(limit) = max_path_length(strategy).filter(|&limit| path.len() > limit) {
            warn!(
                "Skipping {} strategy: {} points exceeds {}",
                strategy,
                path.len(),
                limit
            );
            continue;
        }

        let selector = Selector::new(SelectorConfig {
            strategy,
            ..config.selector_config()
        });
        let start = Instant::now();
        let report = selector.run(path, config.budget)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1_000.0;
        info!("  {}: cost {} in {:.3} ms", strategy, report.selection.cost, elapsed_ms);

        runs.push(TimedReport { report, elapsed_ms });
    }

    if let Some((first, rest)) = runs.split_first() {
        let expected = &first.report.selection;
        for run in rest {
            let actual = &run.report.selection;
            if actual.checkpoints != expected.checkpoints
                || actual.cost.to_bits() != expected.cost.to_bits()
            {
                return Err(CliError::Mismatch(format!(
                    "{} chose {:?} (cost {}), {} chose {:?} (cost {})",
                    first.report.strategy,
                    expected.checkpoints,
                    expected.cost,
                    run.report.strategy,
                    actual.checkpoints,
                    actual.cost
                )));
            }
        }
    }

    Ok(runs)
}

/// Render comparison results in `format`.
pub fn render(runs: &[TimedReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(runs)?),
        OutputFormat::Table => Ok(render_table(runs)),
    }
}

fn render_table(runs: &[TimedReport]) -> String {
    let mut table = String::new();
    table.push_str("┌────────────┬────────────┬──────────────┬────────────┬──────────┬────────────┐\n");
    table.push_str("│ Strategy   │ Cost       │ Cost evals   │ Subprobs   │ Hit rate │ Time (ms)  │\n");
    table.push_str("├────────────┼────────────┼──────────────┼────────────┼──────────┼────────────┤\n");
    for run in runs {
        let report = &run.report;
        let hit_rate = report
            .stats
            .cache
            .map(|cache| format!("{:.1}%", cache.hit_rate() * 100.0))
            .unwrap_or_else(|| "-".to_string());
        table.push_str(&format!(
            "│ {:<10} │ {:>10.4} │ {:>12} │ {:>10} │ {:>8} │ {:>10.3} │\n",
            report.strategy.name(),
            report.selection.cost,
            report.stats.cost_evaluations,
            report.stats.subproblems,
            hit_rate,
            run.elapsed_ms
        ));
    }
    table.push_str("└────────────┴────────────┴──────────────┴────────────┴──────────┴────────────┘");
    if let Some(first) = runs.first() {
        table.push_str(&format!(
            "\nCheckpoints: {}",
            format_checkpoints(&first.report.selection.checkpoints, 20)
        ));
    }
    table
}
