//! Render loop - one tick per animation frame
//!
//! Each tick refreshes the webcam, awaits pose estimation and
//! classification, then hands the result to the [`Session`]. The next frame
//! is requested only once the current tick has finished, so ticks never
//! overlap and slow inference just drops frames.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Window;

use super::model_output::{parse_estimation, parse_predictions};
use super::page::{start_audio, LabelList};
use super::tm_pose::{js_error_message, load_model, PoseModel, Webcam};
use crate::classifier::ClassificationResult;
use crate::config::SessionConfig;
use crate::error::{FrameError, SetupError};
use crate::renderer::{CanvasSurface, Pose};
use crate::session::{claim_start, release_start, FrameGate, Session};

const CANVAS_ID: &str = "canvas";
const LABEL_CONTAINER_ID: &str = "label-container";
const AUDIO_ID: &str = "ymca-audio";

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Everything one tick touches
struct RenderLoop {
    session: Session,
    gate: FrameGate,
    surface: CanvasSurface,
    labels: LabelList,
    model: PoseModel,
    webcam: Webcam,
}

/// Handle returned to JavaScript once the loop is running
#[wasm_bindgen]
pub struct PoseLettersApp {
    inner: Rc<RefCell<RenderLoop>>,
}

#[wasm_bindgen]
impl PoseLettersApp {
    /// Label of the pose that last spawned letters
    pub fn last_pose(&self) -> Option<String> {
        self.inner.borrow().session.last_pose().map(str::to_string)
    }

    pub fn letter_count(&self) -> usize {
        self.inner.borrow().session.swarm().len()
    }

    pub fn frame_count(&self) -> f64 {
        self.inner.borrow().session.frame_index() as f64
    }

    pub fn debug_overlay_text(&self) -> String {
        self.inner.borrow().session.debug_overlay_text()
    }
}

/// Load the model, open the webcam, start the music and the frame loop
///
/// `model_url` overrides the default Teachable Machine export. Only one
/// loop runs per page; calling again while it runs rejects.
#[wasm_bindgen]
pub async fn start(model_url: Option<String>) -> Result<PoseLettersApp, JsValue> {
    claim_start()?;

    let mut config = SessionConfig::default();
    if let Some(url) = model_url {
        config = config.with_model_url(url);
    }

    match launch(config).await {
        Ok(app) => Ok(app),
        Err(e) => {
            release_start();
            Err(e.into())
        }
    }
}

async fn launch(config: SessionConfig) -> Result<PoseLettersApp, SetupError> {
    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let document = window.document().ok_or(SetupError::NoDocument)?;

    let model: PoseModel = load_model(&config.model_json_url(), &config.metadata_json_url())
        .await
        .map_err(|e| SetupError::ModelLoad(js_error_message(&e)))?
        .unchecked_into();
    let class_count = model.total_classes() as usize;

    let size = config.frame_size_px();
    let webcam = Webcam::new(size, size, config.flip_webcam);
    webcam
        .setup()
        .await
        .map_err(|e| SetupError::Webcam(js_error_message(&e)))?;
    webcam
        .play()
        .await
        .map_err(|e| SetupError::Webcam(js_error_message(&e)))?;

    let surface = CanvasSurface::attach(&document, CANVAS_ID, webcam.canvas(), size)?;
    let labels = LabelList::attach(&document, LABEL_CONTAINER_ID, class_count)?;
    start_audio(&document, AUDIO_ID);

    console_log!("✅ Pose model loaded with {} classes", class_count);

    let inner = Rc::new(RefCell::new(RenderLoop {
        session: Session::new(config),
        gate: FrameGate::new(),
        surface,
        labels,
        model,
        webcam,
    }));

    run(inner.clone(), window).map_err(|e| SetupError::Scheduler(js_error_message(&e)))?;

    Ok(PoseLettersApp { inner })
}

/// Install the animation-frame callback and request the first frame
fn run(state: Rc<RefCell<RenderLoop>>, window: Window) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let host = window.clone();

    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
        let state = state.clone();
        let next = next.clone();
        let host = host.clone();

        spawn_local(async move {
            tick(&state, timestamp).await;
            if let Err(e) = request_frame(&host, &next) {
                console_warn!("Frame loop stopped: {}", js_error_message(&e));
            }
        });
    }));

    request_frame(&window, &callback)
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<(), JsValue> {
    if let Some(closure) = callback.borrow().as_ref() {
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    }
    Ok(())
}

async fn tick(state: &Rc<RefCell<RenderLoop>>, timestamp: f64) {
    // Never hold the borrow across an await
    let (model, webcam) = {
        let mut render_loop = state.borrow_mut();
        if !render_loop.gate.try_enter() {
            return;
        }
        render_loop.session.metrics_mut().record_frame(timestamp);
        (render_loop.model.clone(), render_loop.webcam.clone())
    };

    webcam.update();
    let started = now_ms();
    let outcome = infer(&model, &webcam).await;
    let elapsed = now_ms() - started;

    let mut render_loop = state.borrow_mut();
    let RenderLoop { session, gate, surface, labels, .. } = &mut *render_loop;

    match outcome {
        Ok((result, pose)) => {
            session.metrics_mut().record_inference(elapsed as f32);
            let report = session.process_frame(&result, pose.as_ref(), surface);
            labels.update(&report.label_lines);
            if let Some(event) = report.event {
                console_log!("New pose {} at frame {}", event.label, event.triggered_at);
            }
        }
        Err(e) => session.skip_frame(&e),
    }

    gate.leave();
}

/// Pose estimation then classification on the current webcam frame
async fn infer(model: &PoseModel, webcam: &Webcam) -> Result<(ClassificationResult, Option<Pose>), FrameError> {
    let estimation = model
        .estimate_pose(&webcam.canvas())
        .await
        .map_err(|e| FrameError::Estimation(js_error_message(&e)))?;
    let estimation = parse_estimation(&estimation)?;

    let prediction = model
        .predict(&estimation.posenet_output)
        .await
        .map_err(|e| FrameError::Prediction(js_error_message(&e)))?;
    let result = parse_predictions(&prediction)?;

    Ok((result, estimation.pose))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
