//! Effects module - floating letters spawned for each recognized pose
//!
//! Re-exports only. All logic in submodules.

mod color;
mod letter;
mod swarm;

pub use color::{ColorTable, Rgb, DEFAULT_COLOR};
pub use letter::{FloatingLetter, MAX_SPEED, MAX_RENDER_SIZE, MIN_RENDER_SIZE};
pub use swarm::LetterSwarm;
