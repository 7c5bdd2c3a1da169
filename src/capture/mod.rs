//! Stroke capture
//!
//! Accumulates raw pointer samples for one gesture and hands the finished
//! buffer to the recognizer. This module is deliberately free of any
//! windowing-system or event-loop dependency: whatever produces pointer
//! positions (a touch layer, a replay file, a test) feeds samples in and
//! collects a [`types::Stroke`] when the gesture ends.

pub mod recorder;
pub mod types;

pub use recorder::{CaptureConfig, StrokeRecorder};
pub use types::{RawSample, Stroke};
