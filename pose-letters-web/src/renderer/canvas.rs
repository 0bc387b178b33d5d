//! Canvas state - 2D context lookup and the browser [`DrawSurface`]

use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::surface::DrawSurface;
use crate::effects::Rgb;
use crate::error::SetupError;

/// Draws onto the page canvas, with the webcam canvas as background
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    camera: HtmlCanvasElement,
}

impl CanvasSurface {
    /// Find `canvas_id`, size it to `size`x`size` and grab its 2D context
    pub fn attach(
        document: &Document,
        canvas_id: &str,
        camera: HtmlCanvasElement,
        size: u32,
    ) -> Result<Self, SetupError> {
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| SetupError::MissingElement(canvas_id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| SetupError::MissingElement(canvas_id.to_string()))?;

        canvas.set_width(size);
        canvas.set_height(size);

        let ctx = canvas
            .get_context("2d")
            .map_err(|_| SetupError::NoContext)?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)?;

        Ok(Self { ctx, camera })
    }
}

impl DrawSurface for CanvasSurface {
    fn draw_camera_frame(&mut self) {
        if let Err(e) = self.ctx.draw_image_with_html_canvas_element(&self.camera, 0.0, 0.0) {
            console_warn!("Camera frame draw failed: {:?}", e);
        }
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Rgb) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.0 as f64, center.1 as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill();
        }
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb) {
        self.ctx.begin_path();
        self.ctx.move_to(from.0 as f64, from.1 as f64);
        self.ctx.line_to(to.0 as f64, to.1 as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, center: (f32, f32), font_size: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(&format!("{}px Arial", font_size));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Err(e) = self.ctx.fill_text(text, center.0 as f64, center.1 as f64) {
            console_warn!("Letter draw failed: {:?}", e);
        }
    }
}
