//! Bindings to the Teachable Machine pose library (`tmPose` global)

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// Loaded pose model: PoseNet estimation plus the trained classifier
    #[derive(Clone)]
    pub type PoseModel;

    /// Fetch `model.json` + `metadata.json`; resolves to a [`PoseModel`]
    #[wasm_bindgen(js_namespace = tmPose, js_name = load, catch)]
    pub async fn load_model(model_url: &str, metadata_url: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = getTotalClasses)]
    pub fn total_classes(this: &PoseModel) -> u32;

    /// Resolves to `{ pose, posenetOutput }`
    #[wasm_bindgen(method, catch, js_name = estimatePose)]
    pub async fn estimate_pose(this: &PoseModel, input: &HtmlCanvasElement) -> Result<JsValue, JsValue>;

    /// Resolves to `[{ className, probability }]` in registration order
    #[wasm_bindgen(method, catch)]
    pub async fn predict(this: &PoseModel, posenet_output: &JsValue) -> Result<JsValue, JsValue>;

    /// Square webcam capture drawn into its own canvas
    #[wasm_bindgen(js_namespace = tmPose)]
    #[derive(Clone)]
    pub type Webcam;

    #[wasm_bindgen(constructor, js_namespace = tmPose)]
    pub fn new(width: u32, height: u32, flip: bool) -> Webcam;

    /// Requests camera access
    #[wasm_bindgen(method, catch)]
    pub async fn setup(this: &Webcam) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub async fn play(this: &Webcam) -> Result<JsValue, JsValue>;

    /// Copy the latest video frame into the webcam canvas
    #[wasm_bindgen(method)]
    pub fn update(this: &Webcam);

    #[wasm_bindgen(method, getter)]
    pub fn canvas(this: &Webcam) -> HtmlCanvasElement;
}

/// Best-effort readable message from a rejected promise
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
