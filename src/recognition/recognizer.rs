//! Recognition façade
//!
//! [`Recognizer`] owns the template set and orchestrates registration and
//! recognition. `recognize` never fails: recoverable input conditions
//! (short stroke, empty template set) come back as a no-match result so the
//! gesture-completion path needs no error handling machinery.

use crate::capture::types::RawSample;
use crate::geometry::Point;
use crate::recognition::matcher::MatchEngine;
use crate::recognition::normalize::{normalize, NormalizeParams};
use crate::recognition::template::{Template, TemplateLibrary};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Recognition engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Number of points every path is resampled to
    pub resample_count: u32,
    /// Edge length of the normalization reference square
    pub square_size: f64,
    /// Half-width of the best-angle search window (degrees)
    pub angle_range_deg: f64,
    /// Convergence threshold of the best-angle search (degrees)
    pub angle_precision_deg: f64,
    /// Minimum number of captured samples for a stroke to be recognizable
    pub min_points: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            resample_count: 64,
            square_size: 250.0,
            angle_range_deg: 45.0,
            angle_precision_deg: 2.0,
            min_points: 10,
        }
    }
}

impl RecognizerConfig {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> crate::Result<()> {
        if self.resample_count < 2 {
            return Err(crate::Error::Config(format!(
                "resample_count must be >= 2, got {}",
                self.resample_count
            )));
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(crate::Error::Config(format!(
                "square_size must be positive, got {}",
                self.square_size
            )));
        }
        if !(0.0..=180.0).contains(&self.angle_range_deg) {
            return Err(crate::Error::Config(format!(
                "angle_range_deg must be in [0, 180], got {}",
                self.angle_range_deg
            )));
        }
        if !self.angle_precision_deg.is_finite() || self.angle_precision_deg <= 0.0 {
            return Err(crate::Error::Config(format!(
                "angle_precision_deg must be positive, got {}",
                self.angle_precision_deg
            )));
        }
        if self.min_points < 2 {
            return Err(crate::Error::Config(format!(
                "min_points must be >= 2, got {}",
                self.min_points
            )));
        }
        Ok(())
    }
}

/// Outcome of a recognition attempt
///
/// `template_name` is `None` when no usable result exists: the stroke was
/// too short, or no templates are registered. `score` is 1.0 for a perfect
/// match and trends toward 0 as distance grows. The raw conversion can go
/// negative for strokes far from every template; the score is clamped to a
/// 0.0 floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionResult {
    /// Name of the best-matching template, if any
    pub template_name: Option<String>,
    /// Confidence score in [0.0, 1.0]
    pub score: f64,
}

impl RecognitionResult {
    /// The "no usable result" value
    pub fn no_match() -> Self {
        Self {
            template_name: None,
            score: 0.0,
        }
    }

    /// Check whether a template was matched
    pub fn is_match(&self) -> bool {
        self.template_name.is_some()
    }
}

/// Trajectory-shape gesture recognizer
///
/// Owns its template list and all derived normalized paths. `recognize`
/// takes `&self` and mutates nothing, so a single instance can serve
/// concurrent recognitions; interleaving registration with in-flight
/// recognitions requires external synchronization (see
/// [`SharedRecognizer`]).
pub struct Recognizer {
    config: RecognizerConfig,
    normalize_params: NormalizeParams,
    engine: MatchEngine,
    half_diagonal: f64,
    templates: Vec<Template>,
}

impl Recognizer {
    /// Create a recognizer with the given configuration.
    pub fn new(config: RecognizerConfig) -> crate::Result<Self> {
        config.validate()?;
        let normalize_params = NormalizeParams {
            resample_count: config.resample_count as usize,
            square_size: config.square_size,
            origin: Point::new(0.0, 0.0),
        };
        let engine = MatchEngine::new(
            config.angle_range_deg.to_radians(),
            config.angle_precision_deg.to_radians(),
        );
        // Half the diagonal of the reference square: the fixed maximum
        // meaningful distance for score conversion.
        let half_diagonal =
            0.5 * (config.square_size * config.square_size * 2.0).sqrt();
        Ok(Self {
            config,
            normalize_params,
            engine,
            half_diagonal,
            templates: Vec::new(),
        })
    }

    /// Create a recognizer and register every definition in a library.
    pub fn with_library(
        config: RecognizerConfig,
        library: &TemplateLibrary,
    ) -> crate::Result<Self> {
        let mut recognizer = Self::new(config)?;
        for def in library.iter() {
            recognizer.register_template(def.name.clone(), &def.points)?;
        }
        Ok(recognizer)
    }

    /// Normalize `raw_points` and add the result to the template set.
    ///
    /// Fewer than 2 raw points is rejected with [`crate::Error::Template`].
    /// Duplicate names are allowed and act as additional examples of the
    /// same gesture class.
    pub fn register_template(
        &mut self,
        name: impl Into<String>,
        raw_points: &[Point],
    ) -> crate::Result<()> {
        let template = Template::new(name.into(), raw_points, &self.normalize_params)?;
        debug!(
            name = template.name(),
            raw_points = raw_points.len(),
            "registered template"
        );
        self.templates.push(template);
        Ok(())
    }

    /// The engine configuration
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Number of registered templates
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Registered template names, in registration order
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name()).collect()
    }

    /// Recognize a finished stroke of raw captured samples.
    ///
    /// Timestamps are accepted for interface compatibility but play no role
    /// in matching.
    pub fn recognize(&self, samples: &[RawSample]) -> RecognitionResult {
        let points: Vec<Point> = samples.iter().map(|s| s.position()).collect();
        self.recognize_points(&points)
    }

    /// Recognize a finished stroke of bare points.
    ///
    /// Strokes shorter than `min_points` and recognitions against an empty
    /// template set both yield [`RecognitionResult::no_match`]; neither is
    /// an error.
    pub fn recognize_points(&self, points: &[Point]) -> RecognitionResult {
        if points.len() < self.config.min_points as usize {
            debug!(
                samples = points.len(),
                min_points = self.config.min_points,
                "stroke too short to recognize"
            );
            return RecognitionResult::no_match();
        }
        if self.templates.is_empty() {
            warn!("recognize called with no registered templates");
            return RecognitionResult::no_match();
        }

        let candidate = normalize(points, &self.normalize_params);
        let Some((template, distance)) = self.engine.best_match(&candidate, &self.templates)
        else {
            return RecognitionResult::no_match();
        };

        let score = (1.0 - distance / self.half_diagonal).max(0.0);
        debug!(
            template = template.name(),
            distance, score, "gesture recognized"
        );
        RecognitionResult {
            template_name: Some(template.name().to_string()),
            score,
        }
    }
}

/// A clonable, thread-safe recognizer handle.
///
/// Registration takes the write lock and recognition the read lock, making
/// the register-vs-recognize synchronization requirement explicit instead
/// of leaving it to the caller.
#[derive(Clone)]
pub struct SharedRecognizer {
    inner: Arc<RwLock<Recognizer>>,
}

impl SharedRecognizer {
    pub fn new(recognizer: Recognizer) -> Self {
        Self {
            inner: Arc::new(RwLock::new(recognizer)),
        }
    }

    pub fn register_template(
        &self,
        name: impl Into<String>,
        raw_points: &[Point],
    ) -> crate::Result<()> {
        self.inner.write().register_template(name, raw_points)
    }

    pub fn recognize(&self, samples: &[RawSample]) -> RecognitionResult {
        self.inner.read().recognize(samples)
    }

    pub fn recognize_points(&self, points: &[Point]) -> RecognitionResult {
        self.inner.read().recognize_points(points)
    }

    pub fn template_count(&self) -> usize {
        self.inner.read().template_count()
    }
}
