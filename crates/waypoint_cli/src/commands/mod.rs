//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Path input shared by
//! the commands lives here.

pub mod compare;
pub mod select;
pub mod walk;

use tracing::info;
use waypoint_core::rng::WalkRng;
use waypoint_core::types::Path;

use crate::config::WaypointConfig;
use crate::{CliError, Result};

/// Read the path from `input`, or generate one from the configuration.
///
/// Input files hold a JSON array of `[x, y]` pairs.
pub fn load_path(input: Option<&str>, config: &WaypointConfig) -> Result<Path> {
    match input {
        Some(file) => {
            if !std::path::Path::new(file).exists() {
                return Err(CliError::FileNotFound(file.to_string()));
            }
            let content = std::fs::read_to_string(file)?;
            let path = parse_pairs(&content)?;
            info!("Loaded {} points from {}", path.len(), file);
            Ok(path)
        }
        None => {
            let mut rng = WalkRng::from_seed(config.seed);
            let path = config.walk.generate(config.path_length, &mut rng);
            info!(
                "Generated {} walk of {} points (seed {})",
                config.walk,
                path.len(),
                rng.seed()
            );
            Ok(path)
        }
    }
}

/// Parse a JSON array of `[x, y]` pairs.
pub fn parse_pairs(json: &str) -> Result<Path> {
    let pairs: Vec<[f64; 2]> = serde_json::from_str(json)?;
    if let Some(position) = pairs.iter().position(|[x, y]| !x.is_finite() || !y.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "point {} has a non-finite coordinate",
            position
        )));
    }
    Ok(Path::from_pairs(&pairs))
}

/// Checkpoint list as `[a, b, c]`, shortened past `limit` entries.
pub fn format_checkpoints(checkpoints: &[usize], limit: usize) -> String {
    let shown: Vec<String> = checkpoints
        .iter()
        .take(limit)
        .map(|index| index.to_string())
        .collect();
    if checkpoints.len() > limit {
        format!("[{}, ... +{}]", shown.join(", "), checkpoints.len() - limit)
    } else {
        format!("[{}]", shown.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use waypoint_core::types::Point;

    #[test]
    fn test_parse_pairs() {
        let path = parse_pairs("[[0, 0], [1.5, -2]]").unwrap();
        assert_eq!(path.points(), &[Point::new(0.0, 0.0), Point::new(1.5, -2.0)]);
        assert!(parse_pairs("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_pairs_rejects_bad_shape() {
        assert!(matches!(parse_pairs("[[0, 0, 0]]"), Err(CliError::Json(_))));
        assert!(matches!(parse_pairs("{\"x\": 1}"), Err(CliError::Json(_))));
    }

    #[test]
    fn test_load_path_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[0, 0], [3, 4], [6, 8]]").unwrap();
        let input = file.path().to_str().unwrap();
        let path = load_path(Some(input), &WaypointConfig::default()).unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_load_path_missing_file() {
        let result = load_path(Some("/definitely/not/here.json"), &WaypointConfig::default());
        assert!(matches!(result, Err(CliError::FileNotFound(_))));
    }

    #[test]
    fn test_load_path_generates_reproducibly() {
        let config = WaypointConfig {
            path_length: 25,
            ..Default::default()
        };
        let a = load_path(None, &config).unwrap();
        let b = load_path(None, &config).unwrap();
        assert_eq!(a.len(), 25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_format_checkpoints() {
        assert_eq!(format_checkpoints(&[], 5), "[]");
        assert_eq!(format_checkpoints(&[1, 4, 9], 5), "[1, 4, 9]");
        assert_eq!(format_checkpoints(&[1, 2, 3, 4], 2), "[1, 2, ... +2]");
    }
}
