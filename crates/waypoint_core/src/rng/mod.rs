//! # Random Path Sources
//!
//! Seeded generators for the paths the selectors run on.
//!
//! ## Module Structure
//!
//! - [`prng`]: [`WalkRng`], a seeded PRNG wrapper around `rand::StdRng`
//! - [`walk`]: [`random_walk`], [`lattice_walk`] and the [`WalkKind`] switch
//!
//! All generators are reproducible: the same seed gives the same path.
//!
//! ## Usage Example
//!
//! ```rust
//! use waypoint_core::rng::{WalkKind, WalkRng};
//!
//! let mut rng = WalkRng::from_seed(12345);
//! let path = WalkKind::Random.generate(40, &mut rng);
//! assert_eq!(path.len(), 40);
//! ```

pub mod prng;
pub mod walk;

pub use prng::WalkRng;
pub use walk::{lattice_walk, random_walk, WalkKind};
