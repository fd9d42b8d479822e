//! HTML canvas backend (wasm32 only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::color::Color;
use super::surface::Surface;

/// 2D canvas context wrapped as a `Surface`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    /// Size the canvas and grab its 2D context.
    ///
    /// Returns `None` if the browser refuses a 2D context.
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Option<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            width: width as f64,
            height: height as f64,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            // Negative radius is the only failure mode
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
        self.ctx.close_path();
    }
}
