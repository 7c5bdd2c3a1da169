//! Core types for stroke capture

use crate::geometry::Point;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// A single raw pointer sample as captured
///
/// Timestamps must be monotonically non-decreasing within a stroke; they
/// are carried for capture tooling and duration reporting but the matching
/// algorithm itself never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub x: f64,
    pub y: f64,
    /// Milliseconds since an arbitrary capture epoch
    pub timestamp_ms: u64,
}

impl RawSample {
    pub fn new(x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self { x, y, timestamp_ms }
    }

    /// The spatial position, with the timestamp stripped
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Euclidean distance to another sample's position
    pub fn distance_to(&self, other: &RawSample) -> f64 {
        self.position().distance_to(&other.position())
    }
}

/// A finished, temporally ordered stroke
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stroke {
    /// Unique stroke ID
    pub id: Uuid,
    /// Wall-clock time the stroke was captured
    pub captured_at: DateTime<Utc>,
    /// Ordered samples (insertion order = temporal order of capture)
    pub samples: Vec<RawSample>,
}

impl Stroke {
    /// Wrap a finished sample buffer as a stroke
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The sample positions with timestamps stripped
    pub fn points(&self) -> Vec<Point> {
        self.samples.iter().map(|s| s.position()).collect()
    }

    /// Time span covered by the samples, in milliseconds
    pub fn duration_ms(&self) -> u64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => last.timestamp_ms.saturating_sub(first.timestamp_ms),
            _ => 0,
        }
    }

    /// Save the stroke to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a stroke from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
