//! Walk command implementation
//!
//! Generates a path and writes it as a JSON array of `[x, y]` pairs, the
//! same format `select --input` reads.

use tracing::info;

use super::load_path;
use crate::config::WaypointConfig;
use crate::Result;

/// Run the walk command
pub fn run(config: &WaypointConfig, output: Option<&str>) -> Result<()> {
    let path = load_path(None, config)?;
    let json = serde_json::to_string_pretty(&path.to_pairs())?;

    match output {
        Some(file) => {
            std::fs::write(file, json)?;
            info!("Wrote {} points to {}", path.len(), file);
        }
        None => println!("{}", json),
    }

    Ok(())
}
