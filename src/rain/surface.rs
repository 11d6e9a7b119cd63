//! Drawing seam between the rain engine and a 2D canvas.

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

/// The handful of 2D operations one rain frame needs.
pub trait RainSurface {
    /// Translucent full-surface fill that leaves fading trails.
    fn fade(&mut self, css_color: &str, width: f64, height: f64);
    fn set_font_px(&mut self, px: f64);
    fn draw_glyph(&mut self, glyph: &str, x: f64, y: f64, css_color: &str) -> Result<(), JsValue>;
    /// Same glyph again with a blurred shadow; shadow is cleared afterwards.
    fn draw_glow(
        &mut self,
        glyph: &str,
        x: f64,
        y: f64,
        shadow_color: &str,
        blur: f64,
    ) -> Result<(), JsValue>;
}

impl RainSurface for CanvasRenderingContext2d {
    fn fade(&mut self, css_color: &str, width: f64, height: f64) {
        self.set_fill_style_str(css_color);
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn set_font_px(&mut self, px: f64) {
        self.set_font(&format!("{px}px monospace"));
    }

    fn draw_glyph(&mut self, glyph: &str, x: f64, y: f64, css_color: &str) -> Result<(), JsValue> {
        self.set_fill_style_str(css_color);
        self.fill_text(glyph, x, y)
    }

    fn draw_glow(
        &mut self,
        glyph: &str,
        x: f64,
        y: f64,
        shadow_color: &str,
        blur: f64,
    ) -> Result<(), JsValue> {
        self.set_shadow_blur(blur);
        self.set_shadow_color(shadow_color);
        let res = self.fill_text(glyph, x, y);
        self.set_shadow_blur(0.0);
        res
    }
}
