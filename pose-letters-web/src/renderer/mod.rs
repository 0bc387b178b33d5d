//! Renderer module - canvas drawing for the webcam frame, skeleton and letters
//!
//! Re-exports only. All logic in submodules.

#[cfg(target_arch = "wasm32")]
mod canvas;
mod debug_ui;
mod skeleton;
pub(crate) mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use debug_ui::FrameMetrics;
pub use skeleton::{draw_pose, Keypoint, Pose, SKELETON};
pub use surface::DrawSurface;
