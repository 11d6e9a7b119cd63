//! Matrix rain background.
//!
//! The surface is divided into `floor(width / font_size)` columns. Each column
//! has a head that falls at its own speed; every frame a fresh random glyph is
//! drawn at the head over a translucent fill, which leaves the fading streak.
//! Columns that have left the bottom edge restart at the top on a random
//! frame rather than immediately, so they drift out of phase.
//!
//! - `surface`: the drawing seam (`RainSurface`) and its canvas implementation
//! - `driver`: animation-frame chain, debounced resize and visibility re-arm

mod driver;
mod surface;

pub use driver::start_rain;
pub use surface::RainSurface;

use wasm_bindgen::prelude::*;

use crate::color::Rgb;
use crate::config::RainConfig;
use crate::rng::RandomSource;

const FALLBACK_COLOR: Rgb = Rgb::new(0, 212, 255);
/// Alpha of the palette colour used for the glow shadow.
const GLOW_ALPHA: f64 = 0.8;

/// One falling lane.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Head position in character cells; negative while still above the surface.
    pub y: f64,
    /// Cells per frame.
    pub speed: f64,
    pub color: Rgb,
    pub opacity: f64,
}

/// Number of columns that fit across `width` pixels.
pub fn column_count(width: f64, font_size: f64) -> usize {
    if font_size <= 0.0 || !width.is_finite() || width <= 0.0 {
        return 0;
    }
    (width / font_size).floor() as usize
}

pub struct RainEngine {
    config: RainConfig,
    alphabet: Vec<char>,
    columns: Vec<Column>,
    width: f64,
    height: f64,
}

impl RainEngine {
    pub fn new(config: RainConfig, width: f64, height: f64, rng: &mut impl RandomSource) -> Self {
        let alphabet = config.alphabet.chars().collect();
        let mut engine = Self {
            config,
            alphabet,
            columns: Vec::new(),
            width: 0.0,
            height: 0.0,
        };
        engine.resize(width, height, rng);
        engine
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &RainConfig {
        &self.config
    }

    /// Re-lay columns for a new surface size. Surviving indices keep their
    /// state, new ones start above the top edge, extra ones are dropped.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
        self.width = width;
        self.height = height;
        let count = column_count(width, self.config.font_size);
        if count <= self.columns.len() {
            self.columns.truncate(count);
        } else {
            let missing = count - self.columns.len();
            for _ in 0..missing {
                let mut col = self.fresh_column(rng);
                col.y = -rng.next_f64() * self.config.initial_depth;
                self.columns.push(col);
            }
        }
    }

    /// Paint one frame and advance every column.
    pub fn frame(
        &mut self,
        surface: &mut impl RainSurface,
        rng: &mut impl RandomSource,
    ) -> Result<(), JsValue> {
        let fs = self.config.font_size;
        surface.fade(
            &self.config.background.with_alpha(self.config.fade_opacity),
            self.width,
            self.height,
        );
        surface.set_font_px(fs);

        let mut buf = [0u8; 4];
        for i in 0..self.columns.len() {
            let glyph = self
                .alphabet
                .get(rng.index(self.alphabet.len()))
                .copied()
                .unwrap_or(' ');
            let glyph: &str = glyph.encode_utf8(&mut buf);

            let col = &self.columns[i];
            let x = i as f64 * fs;
            let y = col.y * fs;
            surface.draw_glyph(glyph, x, y, &col.color.with_alpha(col.opacity))?;
            if rng.next_f64() < self.config.glow_chance {
                surface.draw_glow(
                    glyph,
                    x,
                    y,
                    &col.color.with_alpha(GLOW_ALPHA),
                    self.config.glow_blur,
                )?;
            }

            self.columns[i].y += self.columns[i].speed;
            if self.columns[i].y * fs > self.height && rng.next_f64() < self.config.reset_chance {
                let fresh = self.fresh_column(rng);
                self.columns[i] = fresh;
            }
        }
        Ok(())
    }

    /// Column at the top edge with newly drawn speed, colour and opacity.
    fn fresh_column(&self, rng: &mut impl RandomSource) -> Column {
        let speed = rng.range(self.config.min_speed, self.config.max_speed);
        let color = self
            .config
            .palette
            .get(rng.index(self.config.palette.len()))
            .copied()
            .unwrap_or(FALLBACK_COLOR);
        let opacity = rng.range(0.5, 1.0);
        Column {
            y: 0.0,
            speed,
            color,
            opacity,
        }
    }
}
