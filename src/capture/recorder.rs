//! Stroke recorder
//!
//! A small state machine mirroring the pointer-down / pointer-move /
//! pointer-up lifecycle: `begin` opens a stroke, `record` appends samples
//! while one is open, `finish` closes it and hands back the buffer. The
//! recorder never recognizes anything itself; partial strokes are never
//! exposed.

use crate::capture::types::{RawSample, Stroke};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Capture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Hard cap on samples kept per stroke; further samples are dropped
    pub max_points: usize,
    /// Samples closer than this to the previous kept sample are discarded
    /// (0.0 keeps everything)
    pub min_sample_distance: f64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            max_points: 4096,
            min_sample_distance: 0.0,
        }
    }
}

impl CaptureConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_points < 2 {
            return Err(crate::Error::Config(format!(
                "max_points must be >= 2, got {}",
                self.max_points
            )));
        }
        if !self.min_sample_distance.is_finite() || self.min_sample_distance < 0.0 {
            return Err(crate::Error::Config(format!(
                "min_sample_distance must be >= 0, got {}",
                self.min_sample_distance
            )));
        }
        Ok(())
    }
}

/// Accumulates pointer samples for one gesture at a time
#[derive(Debug)]
pub struct StrokeRecorder {
    config: CaptureConfig,
    samples: Vec<RawSample>,
    active: bool,
    dropped: usize,
}

impl StrokeRecorder {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            samples: Vec::new(),
            active: false,
            dropped: 0,
        }
    }

    /// Whether a stroke is currently open
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Samples kept so far in the open stroke
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Open a new stroke starting at `sample`.
    ///
    /// A stroke already in progress is discarded; pointer-down always wins.
    pub fn begin(&mut self, sample: RawSample) {
        if self.active {
            warn!(
                discarded = self.samples.len(),
                "begin() while a stroke was in progress; discarding it"
            );
        }
        self.samples.clear();
        self.samples.push(sample);
        self.active = true;
        self.dropped = 0;
    }

    /// Append a sample to the open stroke.
    ///
    /// Returns `true` if the sample was kept. Samples are ignored when no
    /// stroke is open, when the stroke is full, or when the sample is
    /// closer than `min_sample_distance` to the previous kept sample.
    pub fn record(&mut self, sample: RawSample) -> bool {
        if !self.active {
            return false;
        }
        if self.samples.len() >= self.config.max_points {
            if self.dropped == 0 {
                warn!(
                    max_points = self.config.max_points,
                    "stroke is full; dropping further samples"
                );
            }
            self.dropped += 1;
            return false;
        }
        if self.config.min_sample_distance > 0.0 {
            if let Some(last) = self.samples.last() {
                if last.distance_to(&sample) < self.config.min_sample_distance {
                    return false;
                }
            }
        }
        self.samples.push(sample);
        true
    }

    /// Close the open stroke and return it.
    ///
    /// Returns `None` when no stroke is open. Short strokes are returned
    /// as-is; rejecting them is the recognizer's decision.
    pub fn finish(&mut self) -> Option<Stroke> {
        if !self.active {
            return None;
        }
        self.active = false;
        let samples = std::mem::take(&mut self.samples);
        debug!(
            samples = samples.len(),
            dropped = self.dropped,
            "stroke finished"
        );
        Some(Stroke::new(samples))
    }

    /// Discard the open stroke, if any
    pub fn cancel(&mut self) {
        if self.active {
            debug!(discarded = self.samples.len(), "stroke cancelled");
        }
        self.samples.clear();
        self.active = false;
        self.dropped = 0;
    }
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new(CaptureConfig::default())
    }
}
