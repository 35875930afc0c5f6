//! `Surface` backed by an HTML `<canvas>` 2D context.

use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use warp_engine::{BlendMode, Color, EngineError, Surface, Viewport};

/// A canvas element appended to a host container. Drawing happens in
/// logical pixels; the backing store is sized for `dpi`.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    dpi: f32,
    blend: BlendMode,
}

impl CanvasSurface {
    /// Create a canvas inside `container` sized to `viewport`.
    pub fn attach(container: &HtmlElement, viewport: Viewport, dpi: f32) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str(&EngineError::SurfaceUnavailable("2d context").to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        container.append_child(&canvas)?;

        let mut surface = Self {
            canvas,
            ctx,
            viewport,
            dpi,
            blend: BlendMode::Alpha,
        };
        if let Err(e) = surface.apply_size() {
            surface.remove();
            return Err(e);
        }
        Ok(surface)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Detach the canvas from the page.
    pub fn remove(&self) {
        self.canvas.remove();
    }

    /// Size the backing store, CSS box and context scale for the current
    /// viewport. Resizing a canvas resets its context state, so the blend is
    /// re-applied too.
    fn apply_size(&mut self) -> Result<(), JsValue> {
        let backing = self.viewport.backing(self.dpi);
        self.canvas.set_width(backing.width);
        self.canvas.set_height(backing.height);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", self.viewport.width))?;
        style.set_property("height", &format!("{}px", self.viewport.height))?;

        let s = backing.scale as f64;
        self.ctx.set_transform(s, 0.0, 0.0, s, 0.0, 0.0)?;
        self.ctx
            .set_global_composite_operation(self.blend.composite_op())?;
        Ok(())
    }

    fn fill_all(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.viewport.width, self.viewport.height)
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Err(e) = self.apply_size() {
            log::error!("canvas resize failed: {:?}", e);
        }
    }

    fn set_blend(&mut self, mode: BlendMode) {
        if mode == self.blend {
            return;
        }
        match self.ctx.set_global_composite_operation(mode.composite_op()) {
            Ok(()) => self.blend = mode,
            Err(e) => log::error!("composite op {} rejected: {:?}", mode.composite_op(), e),
        }
    }

    fn fade(&mut self, color: Color) {
        self.fill_all(color);
    }

    fn clear(&mut self, color: Color) {
        let blend = self.blend;
        self.set_blend(BlendMode::Alpha);
        self.fill_all(color.with_alpha(1.0));
        self.set_blend(blend);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_line_width(width as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.stroke();
    }
}
