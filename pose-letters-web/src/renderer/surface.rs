//! Drawing seam between the frame logic and the browser canvas

use crate::effects::Rgb;

/// Everything a frame needs to draw
///
/// Coordinates are canvas pixels, origin top-left.
pub trait DrawSurface {
    /// Paint the current webcam frame as the background
    fn draw_camera_frame(&mut self);

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb);

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb);

    /// Draw `text` centered on `center` both horizontally and vertically
    fn fill_text(&mut self, text: &str, center: (f32, f32), font_size: f32, color: Rgb);
}

/// Test double that records every draw call in order
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCall {
    CameraFrame,
    Circle { center: (f32, f32), radius: f32, color: Rgb },
    Line { from: (f32, f32), to: (f32, f32), color: Rgb },
    Text { text: String, center: (f32, f32), font_size: f32, color: Rgb },
}

#[cfg(test)]
impl RecordingSurface {
    pub fn texts(&self) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Text { .. }))
            .collect()
    }

    pub fn count_circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    pub fn count_lines(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Line { .. }))
            .count()
    }
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn draw_camera_frame(&mut self) {
        self.calls.push(DrawCall::CameraFrame);
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb) {
        self.calls.push(DrawCall::Circle { center, radius, color });
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), _width: f32, color: Rgb) {
        self.calls.push(DrawCall::Line { from, to, color });
    }

    fn fill_text(&mut self, text: &str, center: (f32, f32), font_size: f32, color: Rgb) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            center,
            font_size,
            color,
        });
    }
}
