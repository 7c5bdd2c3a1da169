//! Stroke normalization pipeline
//!
//! Every path entering the matcher — template definitions at registration
//! time and candidate strokes at recognition time — passes through the same
//! four stages: resample to a fixed count, rotate the indicative angle away,
//! scale to a reference square, translate the centroid onto the origin.
//! Any asymmetry between template and candidate normalization silently
//! degrades match quality without raising an error.

use crate::geometry::{self, Point};

/// Parameters of the normalization pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeParams {
    /// Number of points every normalized path is resampled to
    pub resample_count: usize,
    /// Edge length of the reference square the path is scaled into
    pub square_size: f64,
    /// Where the path centroid ends up
    pub origin: Point,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            resample_count: 64,
            square_size: 250.0,
            origin: Point::new(0.0, 0.0),
        }
    }
}

/// Runs the full normalization pipeline over a raw path.
///
/// Expects at least 2 input points (enforced by the callers in
/// [`crate::recognition::recognizer`] and [`crate::recognition::template`]).
/// The output always has exactly `params.resample_count` points and its
/// centroid sits on `params.origin`.
pub fn normalize(points: &[Point], params: &NormalizeParams) -> Vec<Point> {
    let resampled = geometry::resample(points, params.resample_count);
    let angle = geometry::indicative_angle(&resampled);
    let rotated = geometry::rotate_by(&resampled, -angle);
    let scaled = geometry::scale_to(&rotated, params.square_size);
    geometry::translate_to(&scaled, params.origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{bounding_box, centroid};

    fn sampled_arc(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let angle = (i as f64 / n as f64) * 1.5 * std::f64::consts::PI;
                Point::new(100.0 + 40.0 * angle.cos(), 80.0 + 40.0 * angle.sin())
            })
            .collect()
    }

    #[test]
    fn test_output_count_and_centroid() {
        let params = NormalizeParams::default();
        let out = normalize(&sampled_arc(30), &params);
        assert_eq!(out.len(), 64);
        let c = centroid(&out);
        assert!(c.x.abs() < 1e-9);
        assert!(c.y.abs() < 1e-9);
    }

    #[test]
    fn test_output_fills_reference_square() {
        let params = NormalizeParams::default();
        let out = normalize(&sampled_arc(30), &params);
        let b = bounding_box(&out);
        assert!((b.width - params.square_size).abs() < 1e-6);
        assert!((b.height - params.square_size).abs() < 1e-6);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        // Re-normalizing an already-normalized path changes nothing:
        // same count, same scale, and each point stays put.
        let params = NormalizeParams::default();
        let once = normalize(&sampled_arc(30), &params);
        let twice = normalize(&once, &params);

        assert_eq!(twice.len(), once.len());
        let b = bounding_box(&twice);
        assert!((b.width - params.square_size).abs() < 1e-6);
        assert!((b.height - params.square_size).abs() < 1e-6);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!(a.distance_to(b) < 1e-7);
        }
    }

    #[test]
    fn test_custom_resample_count() {
        let params = NormalizeParams {
            resample_count: 32,
            ..Default::default()
        };
        assert_eq!(normalize(&sampled_arc(30), &params).len(), 32);
    }
}
