//! Random walk path sources.

use super::WalkRng;
use crate::types::{Path, Point};
use serde::{Deserialize, Serialize};

/// Standard deviation of the per-axis acceleration in [`random_walk`].
pub const ACCELERATION_STD_DEV: f64 = 0.001;

/// Mean of the multiplicative velocity noise in [`random_walk`].
pub const VELOCITY_NOISE_MEAN: f64 = 0.5;

/// Exclusive upper bound of the step acceleration in [`lattice_walk`].
pub const LATTICE_MAX_ACCELERATION: i64 = 5;

/// Which generator produces a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WalkKind {
    /// Smooth 2D walk, see [`random_walk`].
    #[default]
    Random,
    /// Integer 1D walk on the x axis, see [`lattice_walk`].
    Lattice,
}

impl WalkKind {
    /// Generate a path of `steps` points.
    pub fn generate(&self, steps: usize, rng: &mut WalkRng) -> Path {
        match self {
            WalkKind::Random => random_walk(steps, rng),
            WalkKind::Lattice => lattice_walk(steps, rng),
        }
    }

    /// Stable lowercase name, matching the serialised form.
    pub fn name(&self) -> &'static str {
        match self {
            WalkKind::Random => "random",
            WalkKind::Lattice => "lattice",
        }
    }
}

impl std::fmt::Display for WalkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for WalkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(WalkKind::Random),
            "lattice" | "simple" => Ok(WalkKind::Lattice),
            other => Err(format!(
                "Unknown walk: {}. Supported: random, lattice",
                other
            )),
        }
    }
}

/// Smooth 2D random walk of `steps` points starting at the origin.
///
/// Each step adds Gaussian acceleration to the velocity, scales the
/// velocity by an exponential factor, then moves by it. The scaling makes
/// the path alternate between slow stretches and jumps.
///
/// # Examples
///
/// ```
/// use waypoint_core::rng::{random_walk, WalkRng};
///
/// let path = random_walk(100, &mut WalkRng::from_seed(1));
/// assert_eq!(path.len(), 100);
/// assert_eq!(path[0].x, 0.0);
/// ```
pub fn random_walk(steps: usize, rng: &mut WalkRng) -> Path {
    let mut points = Vec::with_capacity(steps);
    if steps == 0 {
        return Path::new(points);
    }

    let mut position = Point::origin();
    let (mut vx, mut vy) = (0.0, 0.0);
    points.push(position);
    for _ in 1..steps {
        vx += rng.gen_normal_scaled(ACCELERATION_STD_DEV);
        vy += rng.gen_normal_scaled(ACCELERATION_STD_DEV);
        let noise = rng.gen_exponential(VELOCITY_NOISE_MEAN);
        vx *= noise;
        vy *= noise;
        position = Point::new(position.x + vx, position.y + vy);
        points.push(position);
    }
    Path::new(points)
}

/// Integer-valued 1D walk of `steps` points along the x axis.
///
/// The velocity changes each step by a uniform integer in
/// `[0, LATTICE_MAX_ACCELERATION)`, added when a standard normal draw
/// exceeds `0.5` and subtracted otherwise.
///
/// # Examples
///
/// ```
/// use waypoint_core::rng::{lattice_walk, WalkRng};
///
/// let path = lattice_walk(50, &mut WalkRng::from_seed(1));
/// assert!(path.iter().all(|p| p.x.fract() == 0.0 && p.y == 0.0));
/// ```
pub fn lattice_walk(steps: usize, rng: &mut WalkRng) -> Path {
    let mut points = Vec::with_capacity(steps);
    if steps == 0 {
        return Path::new(points);
    }

    let mut position: i64 = 0;
    let mut velocity: i64 = 0;
    points.push(Point::origin());
    for _ in 1..steps {
        let acceleration = rng.gen_below(LATTICE_MAX_ACCELERATION);
        if rng.gen_normal() > 0.5 {
            velocity += acceleration;
        } else {
            velocity -= acceleration;
        }
        position += velocity;
        points.push(Point::new(position as f64, 0.0));
    }
    Path::new(points)
}
