//! Point and bounding-box types
//!
//! Points are immutable values; transformation functions produce new points
//! rather than mutating in place.

use serde::{Deserialize, Serialize};

/// A point in 2-D space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Axis-aligned box enclosing a point sequence
///
/// `width` or `height` may be 0 when all points share a coordinate; callers
/// that divide by an edge must guard the degenerate case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
