//! Canvas2D surface.
//!
//! Strokes segments straight onto an HTML `<canvas>` through
//! `CanvasRenderingContext2d`. The canvas bitmap is the drawing; nothing
//! else is kept.

use scribble_core::model::Segment;
use scribble_core::surface::{Surface, SurfaceSize};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas element. `None` if it has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let surface = Self { canvas, ctx };
        surface.apply_line_style();
        Some(surface)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Setting canvas dimensions resets all context state, so this runs
    /// after every resize.
    fn apply_line_style(&self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        self.apply_line_style();
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke_segment(&mut self, segment: &Segment) {
        // Canvas2D ignores a zero line width and keeps the previous one.
        if segment.style.width == 0 {
            return;
        }
        self.ctx.set_stroke_style_str(&segment.style.color.to_hex());
        self.ctx.set_line_width(segment.style.width as f64);

        self.ctx.begin_path();
        self.ctx.move_to(segment.from.x, segment.from.y);
        self.ctx.line_to(segment.to.x, segment.to.y);
        self.ctx.stroke();
    }
}
