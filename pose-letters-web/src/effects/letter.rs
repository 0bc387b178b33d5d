//! Floating letter - a glyph drifting around the square frame
//!
//! Unit timestep per animation frame. A component of the velocity is
//! negated when the position ends up outside `[0, domain]` on that axis.
//! The position is not clamped, so a letter can sit up to one velocity step
//! outside the frame for a single tick before moving back in.

use rand::Rng;

use super::color::Rgb;
use crate::renderer::DrawSurface;

/// Largest absolute velocity component (pixels per frame)
pub const MAX_SPEED: f32 = 2.0;

pub const MIN_RENDER_SIZE: f32 = 20.0;
pub const MAX_RENDER_SIZE: f32 = 40.0;

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingLetter {
    glyph: String,
    color: Rgb,
    position: (f32, f32),
    velocity: (f32, f32),
    render_size: f32,
    domain: f32,
}

impl FloatingLetter {
    pub fn new(
        glyph: impl Into<String>,
        color: Rgb,
        position: (f32, f32),
        velocity: (f32, f32),
        render_size: f32,
        domain: f32,
    ) -> Self {
        Self {
            glyph: glyph.into(),
            color,
            position,
            velocity,
            render_size,
            domain,
        }
    }

    /// Random position in the frame, random drift and size
    pub fn spawn(glyph: impl Into<String>, color: Rgb, domain: f32, rng: &mut impl Rng) -> Self {
        let position = (rng.gen::<f32>() * domain, rng.gen::<f32>() * domain);
        let velocity = (
            (rng.gen::<f32>() - 0.5) * 2.0 * MAX_SPEED,
            (rng.gen::<f32>() - 0.5) * 2.0 * MAX_SPEED,
        );
        let render_size = rng.gen::<f32>() * (MAX_RENDER_SIZE - MIN_RENDER_SIZE) + MIN_RENDER_SIZE;

        Self::new(glyph, color, position, velocity, render_size, domain)
    }

    /// Advance one frame and bounce off the edges
    pub fn update(&mut self) {
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;

        if self.position.0 < 0.0 || self.position.0 > self.domain {
            self.velocity.0 = -self.velocity.0;
        }
        if self.position.1 < 0.0 || self.position.1 > self.domain {
            self.velocity.1 = -self.velocity.1;
        }
    }

    pub fn display(&self, surface: &mut impl DrawSurface) {
        surface.fill_text(&self.glyph, self.position, self.render_size, self.color);
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn velocity(&self) -> (f32, f32) {
        self.velocity
    }

    pub fn render_size(&self) -> f32 {
        self.render_size
    }
}
