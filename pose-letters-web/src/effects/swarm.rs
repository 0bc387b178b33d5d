//! Letter swarm - the batch of letters for the current pose
//!
//! Replaced wholesale on every pose event, never merged.

use rand::Rng;

use super::color::ColorTable;
use super::letter::FloatingLetter;
use crate::renderer::DrawSurface;

pub struct LetterSwarm {
    letters: Vec<FloatingLetter>,
    letters_per_pose: usize,
    domain: f32,
}

impl LetterSwarm {
    pub fn new(letters_per_pose: usize, domain: f32) -> Self {
        Self {
            letters: Vec::with_capacity(letters_per_pose),
            letters_per_pose,
            domain,
        }
    }

    /// Drop every letter and spawn a fresh batch for `label`
    pub fn on_pose_event(&mut self, label: &str, colors: &ColorTable, rng: &mut impl Rng) {
        let color = colors.resolve(label);

        self.letters.clear();
        for _ in 0..self.letters_per_pose {
            self.letters.push(FloatingLetter::spawn(label, color, self.domain, rng));
        }
    }

    /// Advance every letter one frame
    pub fn tick(&mut self) {
        for letter in &mut self.letters {
            letter.update();
        }
    }

    /// Advance and draw each letter, newest first
    ///
    /// Reverse insertion order, so the oldest letter of the batch is drawn
    /// last and ends up on top.
    pub fn draw(&mut self, surface: &mut impl DrawSurface) {
        for letter in self.letters.iter_mut().rev() {
            letter.update();
            letter.display(surface);
        }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FloatingLetter> {
        self.letters.iter()
    }

    /// Glyph of the current batch
    pub fn label(&self) -> Option<&str> {
        self.letters.first().map(FloatingLetter::glyph)
    }
}
