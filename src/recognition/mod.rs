//! Gesture recognition engine
//!
//! This module turns finished strokes into template matches:
//! - A fixed normalization pipeline (resample, rotate, scale, translate)
//!   applied identically to templates and candidate strokes
//! - An immutable template store with JSON library persistence
//! - A golden-section best-angle matcher
//! - The [`Recognizer`] façade tying it all together

pub mod matcher;
pub mod normalize;
pub mod recognizer;
pub mod template;

pub use matcher::MatchEngine;
pub use normalize::{normalize, NormalizeParams};
pub use recognizer::{RecognitionResult, Recognizer, RecognizerConfig, SharedRecognizer};
pub use template::{Template, TemplateDef, TemplateLibrary};
