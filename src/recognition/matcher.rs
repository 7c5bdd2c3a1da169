//! Best-angle template matching
//!
//! Compares a normalized candidate path against normalized templates. The
//! residual rotation left after indicative-angle canonicalization is small
//! but nonzero for hand-drawn strokes, so the distance to each template is
//! minimized over a bounded angle window with a golden-section search
//! instead of an exhaustive sweep.

use crate::geometry::{rotate_by, Point};
use crate::recognition::template::Template;
use tracing::trace;

/// Golden ratio conjugate, (√5 − 1) / 2
fn golden_ratio() -> f64 {
    0.5 * (5.0_f64.sqrt() - 1.0)
}

/// Mean point-to-point distance between two index-aligned paths.
///
/// Both operands must come from the same fixed-count normalization
/// pipeline; a length mismatch is an internal pipeline bug, not a runtime
/// condition, and fails hard.
pub fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "path_distance requires equal-length paths"
    );
    assert!(!a.is_empty(), "path_distance requires non-empty paths");
    let total: f64 = a.iter().zip(b.iter()).map(|(p, q)| p.distance_to(q)).sum();
    total / a.len() as f64
}

/// Distance to `template_points` after rotating the candidate by `radians`
/// about its centroid.
pub fn distance_at_angle(points: &[Point], template_points: &[Point], radians: f64) -> f64 {
    path_distance(&rotate_by(points, radians), template_points)
}

/// Minimum distance to `template_points` over the angle window `[a, b]`,
/// found by golden-section search.
///
/// The bracket shrinks by replacing the worse-scoring end until it is no
/// wider than `precision`; the smaller of the two final probe values is
/// returned.
pub fn distance_at_best_angle(
    points: &[Point],
    template_points: &[Point],
    mut a: f64,
    mut b: f64,
    precision: f64,
) -> f64 {
    let phi = golden_ratio();
    let mut x1 = phi * a + (1.0 - phi) * b;
    let mut f1 = distance_at_angle(points, template_points, x1);
    let mut x2 = (1.0 - phi) * a + phi * b;
    let mut f2 = distance_at_angle(points, template_points, x2);

    while (b - a).abs() > precision {
        if f1 < f2 {
            b = x2;
            x2 = x1;
            f2 = f1;
            x1 = phi * a + (1.0 - phi) * b;
            f1 = distance_at_angle(points, template_points, x1);
        } else {
            a = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - phi) * a + phi * b;
            f2 = distance_at_angle(points, template_points, x2);
        }
    }
    f1.min(f2)
}

/// Scans the template set for the minimum achievable distance
#[derive(Debug, Clone, Copy)]
pub struct MatchEngine {
    /// Half-width of the angle search window, in radians
    pub angle_range: f64,
    /// Bracket width at which the angle search stops, in radians
    pub angle_precision: f64,
}

impl MatchEngine {
    pub fn new(angle_range: f64, angle_precision: f64) -> Self {
        Self {
            angle_range,
            angle_precision,
        }
    }

    /// Finds the template with the minimum best-angle distance to the
    /// normalized candidate.
    ///
    /// Templates are scanned in registration order and ties keep the first
    /// template encountered. Returns `None` for an empty template set.
    pub fn best_match<'a>(
        &self,
        candidate: &[Point],
        templates: &'a [Template],
    ) -> Option<(&'a Template, f64)> {
        let mut best: Option<(&Template, f64)> = None;
        for template in templates {
            let distance = distance_at_best_angle(
                candidate,
                template.points(),
                -self.angle_range,
                self.angle_range,
                self.angle_precision,
            );
            trace!(template = template.name(), distance, "template distance");
            if best.map_or(true, |(_, b)| distance < b) {
                best = Some((template, distance));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::normalize::{normalize, NormalizeParams};
    use crate::recognition::template::Template;

    fn triangle_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 10.0),
            Point::new(40.0, 90.0),
            Point::new(0.0, 0.0),
        ]
    }

    #[test]
    fn test_path_distance_identical_paths_is_zero() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 0.0),
        ];
        assert_eq!(path_distance(&path, &path), 0.0);
    }

    #[test]
    fn test_path_distance_constant_offset() {
        let a = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let b = vec![Point::new(0.0, 3.0), Point::new(10.0, 3.0)];
        assert!((path_distance(&a, &b) - 3.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "equal-length")]
    fn test_path_distance_length_mismatch_panics() {
        let a = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let b = vec![Point::new(0.0, 0.0)];
        path_distance(&a, &b);
    }

    #[test]
    fn test_distance_at_angle_zero_rotation() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
        ];
        assert!(distance_at_angle(&path, &path, 0.0) < 1e-12);
    }

    #[test]
    fn test_best_angle_search_compensates_rotation() {
        // A candidate rotated 10 degrees off a template: the search must
        // recover most of the distance an aligned comparison would see.
        let params = NormalizeParams::default();
        let template = normalize(&triangle_points(), &params);
        let ten_deg = 10.0_f64.to_radians();
        let candidate = rotate_by(&template, ten_deg);

        let misaligned = distance_at_angle(&candidate, &template, 0.0);
        let best = distance_at_best_angle(
            &candidate,
            &template,
            -45.0_f64.to_radians(),
            45.0_f64.to_radians(),
            2.0_f64.to_radians(),
        );
        assert!(best < misaligned / 2.0, "best {} misaligned {}", best, misaligned);
        assert!(best < 10.0);
    }

    #[test]
    fn test_best_match_prefers_closer_template() {
        let params = NormalizeParams::default();
        let engine = MatchEngine::new(45.0_f64.to_radians(), 2.0_f64.to_radians());

        let triangle =
            Template::new("triangle".to_string(), &triangle_points(), &params).unwrap();
        let line = Template::new(
            "line".to_string(),
            &[Point::new(0.0, 0.0), Point::new(100.0, 100.0)],
            &params,
        )
        .unwrap();
        let templates = vec![triangle, line];

        let candidate = normalize(&triangle_points(), &params);
        let (best, distance) = engine.best_match(&candidate, &templates).unwrap();
        assert_eq!(best.name(), "triangle");
        assert!(distance < 10.0);
    }

    #[test]
    fn test_best_match_empty_template_set() {
        let engine = MatchEngine::new(45.0_f64.to_radians(), 2.0_f64.to_radians());
        let candidate = normalize(&triangle_points(), &NormalizeParams::default());
        assert!(engine.best_match(&candidate, &[]).is_none());
    }

    #[test]
    fn test_best_match_tie_break_keeps_first() {
        // Two templates with identical geometry: registration order wins
        let params = NormalizeParams::default();
        let engine = MatchEngine::new(45.0_f64.to_radians(), 2.0_f64.to_radians());
        let first = Template::new("first".to_string(), &triangle_points(), &params).unwrap();
        let second = Template::new("second".to_string(), &triangle_points(), &params).unwrap();
        let templates = vec![first, second];

        let candidate = normalize(&triangle_points(), &params);
        let (best, _) = engine.best_match(&candidate, &templates).unwrap();
        assert_eq!(best.name(), "first");
    }
}
