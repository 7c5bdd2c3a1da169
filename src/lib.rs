//! # Gesture Recognizer
//!
//! A trajectory-shape gesture recognition engine for pointer and touch
//! strokes, based on the $1 unistroke recognizer (Wobbrock, Wilson and Li,
//! UIST '07).
//!
//! ## Overview
//!
//! A caller captures an ordered sequence of `(x, y, timestamp)` samples for
//! one gesture — typically between pointer-down and pointer-up — and hands
//! the finished buffer to a [`Recognizer`]. The recognizer normalizes the
//! stroke (resample, rotate to a canonical orientation, scale, translate),
//! compares it against every registered template with a rotation-tolerant
//! distance metric, and returns the best-matching template name together
//! with a confidence score in `[0, 1]`.
//!
//! ## Quick Start
//!
//! ```
//! use gesture_recognizer::geometry::Point;
//! use gesture_recognizer::recognition::{Recognizer, RecognizerConfig};
//!
//! let mut recognizer = Recognizer::new(RecognizerConfig::default()).expect("valid config");
//!
//! // Register a reference shape (normalized once, at registration time).
//! recognizer
//!     .register_template("line", &[Point::new(0.0, 0.0), Point::new(100.0, 100.0)])
//!     .expect("valid template");
//!
//! // Recognize a finished stroke.
//! let stroke: Vec<Point> = (0..20).map(|i| Point::new(i as f64 * 5.0, i as f64 * 5.0)).collect();
//! let result = recognizer.recognize_points(&stroke);
//! assert_eq!(result.template_name.as_deref(), Some("line"));
//! ```
//!
//! ## Architecture
//!
//! - [`geometry`]: Pure 2-D path math (length, centroid, resampling, affine transforms)
//! - [`recognition`]: Normalization pipeline, template store, golden-section matcher, façade
//! - [`capture`]: Stroke accumulation and persistence, independent of any windowing system
//! - [`app`]: CLI and configuration management
//!
//! ## Recognition Pipeline
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Raw stroke │───▶│  Resample   │───▶│ Rotate/Scale│───▶│  Best-angle │
//! │  (samples)  │    │  (N points) │    │ /Translate  │    │   search    │
//! └─────────────┘    └─────────────┘    └─────────────┘    └─────────────┘
//!                                                                 │
//!                                                                 ▼
//!                                                          ┌─────────────┐
//!                                                          │ name + score│
//!                                                          └─────────────┘
//! ```
//!
//! Templates run through the exact same normalization as candidate strokes;
//! that symmetry is what makes the distance metric meaningful.

pub mod app;
pub mod capture;
pub mod geometry;
pub mod recognition;

// Re-export commonly used types
pub use capture::types::{RawSample, Stroke};
pub use capture::StrokeRecorder;
pub use geometry::Point;
pub use recognition::{
    RecognitionResult, Recognizer, RecognizerConfig, SharedRecognizer, Template, TemplateLibrary,
};

/// Result type alias for the gesture recognizer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the gesture recognizer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
