//! Operations on ordered point sequences
//!
//! These are the building blocks of the stroke normalization pipeline.
//! All functions return new point vectors; inputs are never mutated.

use super::point::{BoundingBox, Point};

/// Bounding-box edges below this are treated as degenerate: the axis is
/// left unscaled rather than divided by a near-zero extent. A perfectly
/// straight stroke collapses onto one axis after the indicative-angle
/// rotation, leaving only floating-point noise on the other.
const MIN_BOX_EXTENT: f64 = 1e-6;

/// Total arc length of a path: the sum of distances between consecutive
/// points. Returns 0 for paths with fewer than two points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Arithmetic mean of the point coordinates.
///
/// Undefined for an empty slice (returns NaN components); callers guard.
pub fn centroid(points: &[Point]) -> Point {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Axis-aligned bounding box of a point sequence.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in points {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    BoundingBox {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Redistributes a path into exactly `n` points spaced at uniform
/// arc-length intervals, linearly interpolating between input samples.
///
/// Expects `n >= 2` and a non-empty input. A zero-length path (all samples
/// coincident) collapses to `n` copies of the first point.
pub fn resample(points: &[Point], n: usize) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    if n < 2 {
        return vec![first; n];
    }
    let total = path_length(points);
    if total <= 0.0 {
        return vec![first; n];
    }
    let interval = total / (n - 1) as f64;

    // The walk inserts each interpolated point back into the working copy so
    // that the next segment is measured from it; skipping that re-insertion
    // systematically undershoots the interval on curved paths.
    let mut working = points.to_vec();
    let mut resampled = Vec::with_capacity(n);
    resampled.push(first);

    let mut accumulated = 0.0;
    let mut i = 1;
    while i < working.len() {
        let d = working[i - 1].distance_to(&working[i]);
        if accumulated + d >= interval {
            let t = (interval - accumulated) / d;
            let q = Point::new(
                working[i - 1].x + t * (working[i].x - working[i - 1].x),
                working[i - 1].y + t * (working[i].y - working[i - 1].y),
            );
            resampled.push(q);
            working.insert(i, q);
            accumulated = 0.0;
        } else {
            accumulated += d;
        }
        i += 1;
    }

    // Floating-point rounding can leave the walk one point short; the final
    // resampled point is always the original endpoint.
    if resampled.len() == n - 1 {
        resampled.push(working[working.len() - 1]);
    }
    resampled
}

/// Rotates every point about the path's centroid by `radians`.
/// The centroid itself is unchanged.
pub fn rotate_by(points: &[Point], radians: f64) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let c = centroid(points);
    let (sin, cos) = radians.sin_cos();
    points
        .iter()
        .map(|p| {
            Point::new(
                (p.x - c.x) * cos - (p.y - c.y) * sin + c.x,
                (p.x - c.x) * sin + (p.y - c.y) * cos + c.y,
            )
        })
        .collect()
}

/// Angle from the first point to the centroid, in radians.
///
/// Rotating a path by the negated indicative angle puts it into a canonical
/// orientation before scaling and translation. Expects a non-empty input.
pub fn indicative_angle(points: &[Point]) -> f64 {
    let c = centroid(points);
    (c.y - points[0].y).atan2(c.x - points[0].x)
}

/// Rescales x and y independently so the bounding box becomes
/// `size` × `size`. The scaling is deliberately non-uniform per axis.
///
/// A degenerate axis (zero or near-zero extent) is left unscaled.
pub fn scale_to(points: &[Point], size: f64) -> Vec<Point> {
    let b = bounding_box(points);
    let sx = if b.width > MIN_BOX_EXTENT {
        size / b.width
    } else {
        1.0
    };
    let sy = if b.height > MIN_BOX_EXTENT {
        size / b.height
    } else {
        1.0
    };
    points
        .iter()
        .map(|p| Point::new(p.x * sx, p.y * sy))
        .collect()
}

/// Shifts every point so the path's centroid lands exactly on `target`.
pub fn translate_to(points: &[Point], target: Point) -> Vec<Point> {
    if points.is_empty() {
        return Vec::new();
    }
    let c = centroid(points);
    points
        .iter()
        .map(|p| Point::new(p.x + target.x - c.x, p.y + target.y - c.y))
        .collect()
}
