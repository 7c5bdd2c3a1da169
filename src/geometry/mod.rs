//! 2-D path geometry
//!
//! Pure, stateless functions over ordered point sequences: path length,
//! centroids, bounding boxes, arc-length resampling and the affine
//! transforms (rotate/scale/translate) the normalization pipeline is
//! built from. No I/O, no hidden state; deterministic given inputs.

pub mod path;
pub mod point;

pub use path::{
    bounding_box, centroid, indicative_angle, path_length, resample, rotate_by, scale_to,
    translate_to,
};
pub use point::{BoundingBox, Point};
