//! Classifier module - pose classification results and change detection
//!
//! Note: inference runs in JavaScript through the tmPose model.
//! Rust reads its per-class probabilities and decides when a pose changes.

mod detector;
mod prediction;

pub use detector::{detect_pose_change, PoseChangeDetector, PoseEvent};
pub use prediction::{ClassificationResult, Prediction, UNKNOWN_LABEL};
