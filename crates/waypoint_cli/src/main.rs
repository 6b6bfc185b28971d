//! Waypoint CLI - Optimal Checkpoint Selection over 2D Paths
//!
//! # Commands
//!
//! - `waypoint select` - Select checkpoints on a generated or loaded path
//! - `waypoint compare` - Run every strategy on one path and compare them
//! - `waypoint walk` - Generate a random walk as JSON
//!
//! Settings come from `waypoint.toml` (if present), then `WAYPOINT_*`
//! environment variables, then command line flags.

use clap::{Args, Parser, Subcommand};
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use waypoint_core::math::DistanceMetric;
use waypoint_core::rng::WalkKind;
use waypoint_core::selection::SearchStrategy;

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{OutputFormat, WaypointConfig};

/// Waypoint checkpoint selection CLI
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "waypoint.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

/// Options for generated walks.
#[derive(Args, Debug, Default)]
struct PathArgs {
    /// Number of points to generate
    #[arg(short = 'n', long)]
    length: Option<usize>,

    /// Seed for the generated walk
    #[arg(short, long)]
    seed: Option<u64>,

    /// Walk generator (random, lattice)
    #[arg(short, long)]
    walk: Option<WalkKind>,
}

/// Options shared by the selection commands.
#[derive(Args, Debug, Default)]
struct SearchArgs {
    /// Maximum number of checkpoints
    #[arg(short, long, allow_negative_numbers = true)]
    budget: Option<i64>,

    /// Distance metric (euclidean, squared-euclidean)
    #[arg(short, long)]
    metric: Option<DistanceMetric>,

    /// Entry limit for each memoisation cache
    #[arg(long)]
    cache_limit: Option<usize>,

    /// Output format (table, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Select checkpoints on one path
    Select {
        /// JSON file of [x, y] pairs; a walk is generated when omitted
        #[arg(short, long)]
        input: Option<String>,

        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        search: SearchArgs,

        /// Search strategy (exhaustive, memoized, tabulated); use tabulated for long paths
        #[arg(short = 't', long)]
        strategy: Option<SearchStrategy>,
    },

    /// Run every strategy on one path and compare results and timings
    Compare {
        /// JSON file of [x, y] pairs; a walk is generated when omitted
        #[arg(short, long)]
        input: Option<String>,

        #[command(flatten)]
        path: PathArgs,

        #[command(flatten)]
        search: SearchArgs,
    },

    /// Generate a walk and write it as JSON
    Walk {
        #[command(flatten)]
        path: PathArgs,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl PathArgs {
    fn apply(&self, config: &mut WaypointConfig) {
        if let Some(length) = self.length {
            config.path_length = length;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(walk) = self.walk {
            config.walk = walk;
        }
    }
}

impl SearchArgs {
    fn apply(&self, config: &mut WaypointConfig) {
        if let Some(budget) = self.budget {
            config.budget = budget;
        }
        if let Some(metric) = self.metric {
            config.metric = metric;
        }
        if let Some(limit) = self.cache_limit {
            config.cache_limit = Some(limit);
        }
        if let Some(format) = self.format {
            config.output_format = format;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = WaypointConfig::load_or_default(Path::new(&cli.config))?.with_env_override();
    match &cli.command {
        Commands::Select {
            path,
            search,
            strategy,
            ..
        } => {
            path.apply(&mut config);
            search.apply(&mut config);
            if let Some(strategy) = strategy {
                config.strategy = *strategy;
            }
        }
        Commands::Compare { path, search, .. } => {
            path.apply(&mut config);
            search.apply(&mut config);
        }
        Commands::Walk { path, .. } => path.apply(&mut config),
    }

    // Initialise tracing
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Effective configuration");

    if let Err(e) = config.validate() {
        error!("{}", e);
        return Err(e.into());
    }

    let result = match cli.command {
        Commands::Select { input, .. } => commands::select::run(&config, input.as_deref()),
        Commands::Compare { input, .. } => commands::compare::run(&config, input.as_deref()),
        Commands::Walk { output, .. } => commands::walk::run(&config, output.as_deref()),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_select_flags_override_config() {
        let cli = Cli::try_parse_from([
            "waypoint", "select", "-b", "6", "-t", "tabulated", "-m", "squared", "-n", "12",
            "--format", "json",
        ])
        .unwrap();
        let mut config = WaypointConfig::default();
        if let Commands::Select {
            path,
            search,
            strategy,
            ..
        } = &cli.command
        {
            path.apply(&mut config);
            search.apply(&mut config);
            assert_eq!(*strategy, Some(SearchStrategy::Tabulated));
        } else {
            panic!("Expected select command");
        }
        assert_eq!(config.budget, 6);
        assert_eq!(config.path_length, 12);
        assert_eq!(config.metric, DistanceMetric::SquaredEuclidean);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_input_file_flag() {
        let cli = Cli::try_parse_from(["waypoint", "compare", "-i", "path.json"]).unwrap();
        match cli.command {
            Commands::Compare { input, .. } => assert_eq!(input.as_deref(), Some("path.json")),
            _ => panic!("Expected compare command"),
        }
    }

    #[test]
    fn test_negative_budget_is_parsed() {
        let cli = Cli::try_parse_from(["waypoint", "compare", "--budget", "-3"]).unwrap();
        match cli.command {
            Commands::Compare { search, .. } => assert_eq!(search.budget, Some(-3)),
            _ => panic!("Expected compare command"),
        }
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!(Cli::try_parse_from(["waypoint", "select", "-t", "greedy"]).is_err());
    }

    #[test]
    fn test_walk_command() {
        let cli = Cli::try_parse_from(["waypoint", "walk", "-w", "lattice", "-o", "out.json"])
            .unwrap();
        match cli.command {
            Commands::Walk { path, output } => {
                assert_eq!(path.walk, Some(WalkKind::Lattice));
                assert_eq!(output.as_deref(), Some("out.json"));
            }
            _ => panic!("Expected walk command"),
        }
    }
}
