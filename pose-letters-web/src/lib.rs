//! Pose Letters Web - webcam pose classification with floating letters
//!
//! Entry point for WASM module. Only contains:
//! - Console logging macros
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Everything outside `bridge` and the canvas surface is plain Rust and
//! builds natively for tests.

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[cfg(target_arch = "wasm32")]
macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&format_args!($($t)*).to_string().into()))
}

#[cfg(target_arch = "wasm32")]
macro_rules! console_warn {
    ($($t:tt)*) => (web_sys::console::warn_1(&format_args!($($t)*).to_string().into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_log {
    ($($t:tt)*) => (eprintln!($($t)*))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! console_warn {
    ($($t:tt)*) => (eprintln!("WARN: {}", format_args!($($t)*)))
}

#[cfg(target_arch = "wasm32")]
mod bridge;
pub mod classifier;
pub mod config;
pub mod effects;
pub mod error;
pub mod renderer;
pub mod session;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use bridge::{start, PoseLettersApp};
pub use config::SessionConfig;
pub use session::{FrameReport, Session};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
