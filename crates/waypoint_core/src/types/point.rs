//! Planar points and paths.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// A point in the plane.
///
/// Equality is IEEE equality on both coordinates. Caching does not rely on
/// it: cache keys are built from the raw coordinate bytes (see
/// [`Point::to_le_bytes`]).
///
/// # Examples
/// ```
/// use waypoint_core::types::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.distance(&b), 5.0);
/// assert_eq!(a.squared_distance(&b), 25.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Size of the byte representation produced by [`Point::to_le_bytes`].
    pub const BYTES: usize = 16;

    /// Create a point from its coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0, 0)`.
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn squared_distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Raw little-endian byte content of both coordinates.
    ///
    /// Two points produce the same bytes only if their coordinates are
    /// bit-identical, so `0.0` and `-0.0` differ here even though they
    /// compare equal.
    #[inline]
    pub fn to_le_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..8].copy_from_slice(&self.x.to_le_bytes());
        bytes[8..].copy_from_slice(&self.y.to_le_bytes());
        bytes
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// An ordered, immutable sequence of points.
///
/// `Path` dereferences to `[Point]`, so sub-paths are plain slices:
/// `&path[a..b]` is the half-open range `[a, b)`.
///
/// Serialises as an array of `{ "x": .., "y": .. }` objects; use
/// [`Path::from_pairs`] for `[x, y]` input.
///
/// # Examples
/// ```
/// use waypoint_core::types::{Path, Point};
///
/// let path = Path::from_pairs(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[1], Point::new(1.0, 0.0));
///
/// let tail = &path[1..];
/// assert_eq!(tail.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Create a path that takes ownership of `points`.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Create a path from `[x, y]` pairs.
    pub fn from_pairs(pairs: &[[f64; 2]]) -> Self {
        pairs.iter().copied().map(Point::from).collect()
    }

    /// The points as a slice.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Coordinates as `[x, y]` pairs.
    pub fn to_pairs(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }

    /// Consume the path, returning its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl Deref for Path {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &[Point] {
        &self.points
    }
}

impl AsRef<[Point]> for Path {
    fn as_ref(&self) -> &[Point] {
        &self.points
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
