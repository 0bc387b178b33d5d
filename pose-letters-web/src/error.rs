//! Error types for startup and per-frame processing

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that abort initialization; no frame loop starts
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("No element with id '{0}' found")]
    MissingElement(String),
    #[error("Canvas 2D context unavailable")]
    NoContext,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("Model load failed: {0}")]
    ModelLoad(String),
    #[error("Webcam setup failed: {0}")]
    Webcam(String),
    #[error("Could not schedule animation frame: {0}")]
    Scheduler(String),
    #[error("Already started")]
    AlreadyStarted,
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Errors in a single frame; the frame is skipped and the loop keeps going
#[derive(Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("Pose estimation failed: {0}")]
    Estimation(String),
    #[error("Classification failed: {0}")]
    Prediction(String),
    #[error("Malformed model output: {0}")]
    MalformedOutput(&'static str),
}
