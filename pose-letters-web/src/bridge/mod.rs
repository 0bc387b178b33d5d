//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod model_output;
mod page;
mod render_loop;
mod tm_pose;

pub use render_loop::{start, PoseLettersApp};
