//! Model output decoding - JS objects from tmPose into Rust types

use js_sys::{Array, Reflect};
use wasm_bindgen::JsValue;

use crate::classifier::{ClassificationResult, Prediction};
use crate::error::FrameError;
use crate::renderer::{Keypoint, Pose};

/// Decoded `estimatePose` result
pub struct Estimation {
    /// Skeleton keypoints; `None` when no person was found
    pub pose: Option<Pose>,
    /// Opaque PoseNet tensor handed back to `predict`
    pub posenet_output: JsValue,
}

pub fn parse_estimation(value: &JsValue) -> Result<Estimation, FrameError> {
    let posenet_output = field(value, "posenetOutput")?;
    if posenet_output.is_undefined() || posenet_output.is_null() {
        return Err(FrameError::MalformedOutput("posenetOutput"));
    }

    let pose = field(value, "pose")?;
    let pose = if pose.is_undefined() || pose.is_null() {
        None
    } else {
        Some(parse_pose(&pose)?)
    };

    Ok(Estimation { pose, posenet_output })
}

/// `{ keypoints: [{ part, score, position: { x, y } }] }`
///
/// Keypoints missing a field are dropped rather than failing the frame.
fn parse_pose(value: &JsValue) -> Result<Pose, FrameError> {
    let keypoints = field(value, "keypoints")?;
    if !Array::is_array(&keypoints) {
        return Err(FrameError::MalformedOutput("keypoints"));
    }

    let keypoints = Array::from(&keypoints)
        .iter()
        .filter_map(|kp| parse_keypoint(&kp))
        .collect();

    Ok(Pose::new(keypoints))
}

fn parse_keypoint(value: &JsValue) -> Option<Keypoint> {
    let number = |target: &JsValue, key| field(target, key).ok().and_then(|v| v.as_f64());
    let position = field(value, "position").ok();

    Keypoint::from_fields(
        field(value, "part").ok().and_then(|v| v.as_string()),
        number(value, "score"),
        position.as_ref().and_then(|p| number(p, "x")),
        position.as_ref().and_then(|p| number(p, "y")),
    )
}

/// `[{ className, probability }]`, kept in model order
pub fn parse_predictions(value: &JsValue) -> Result<ClassificationResult, FrameError> {
    if !Array::is_array(value) {
        return Err(FrameError::MalformedOutput("prediction list"));
    }

    Array::from(value)
        .iter()
        .map(|entry| {
            Prediction::from_fields(
                field(&entry, "className")?.as_string(),
                field(&entry, "probability")?.as_f64(),
            )
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ClassificationResult::new)
}

fn field(target: &JsValue, key: &'static str) -> Result<JsValue, FrameError> {
    Reflect::get(target, &JsValue::from_str(key)).map_err(|_| FrameError::MalformedOutput(key))
}
