// Integration tests (native) for the `portfolio-fx` engines.
// These drive the pure state machines through the public API with
// deterministic randomness and a recording surface.

use portfolio_fx::color::Rgb;
use portfolio_fx::rain::{Column, RainSurface, column_count};
use portfolio_fx::rng::{RandomSource, XorShiftRng};
use portfolio_fx::terminal::{LinePanel, RowSpec};
use portfolio_fx::{
    RainConfig, RainEngine, TerminalConfig, TerminalRevealer, Typewriter, TypewriterConfig,
};
use wasm_bindgen::JsValue;

struct NullSurface;

impl RainSurface for NullSurface {
    fn fade(&mut self, _: &str, _: f64, _: f64) {}
    fn set_font_px(&mut self, _: f64) {}
    fn draw_glyph(&mut self, _: &str, _: f64, _: f64, _: &str) -> Result<(), JsValue> {
        Ok(())
    }
    fn draw_glow(&mut self, _: &str, _: f64, _: f64, _: &str, _: f64) -> Result<(), JsValue> {
        Ok(())
    }
}

#[derive(Default)]
struct Rows(Vec<RowSpec>, usize);

impl LinePanel for Rows {
    fn append_row(&mut self, row: &RowSpec) -> Result<(), JsValue> {
        self.0.push(row.clone());
        Ok(())
    }
    fn scroll_to_bottom(&mut self) {
        self.1 += 1;
    }
}

#[test]
fn resize_scenario_1400_to_700() {
    let mut rng = XorShiftRng::new(2024);
    let mut engine = RainEngine::new(RainConfig::default(), 1400.0, 900.0, &mut rng);
    assert_eq!(engine.columns().len(), 100);

    for _ in 0..120 {
        engine.frame(&mut NullSurface, &mut rng).unwrap();
    }
    let kept: Vec<Column> = engine.columns()[..50].to_vec();
    engine.resize(700.0, 900.0, &mut rng);
    assert_eq!(engine.columns().len(), 50);
    assert_eq!(engine.columns(), kept.as_slice());
}

#[test]
fn column_count_tracks_width_across_resizes() {
    let mut rng = XorShiftRng::new(5);
    let mut engine = RainEngine::new(RainConfig::default(), 320.0, 240.0, &mut rng);
    for width in [1920.0, 13.0, 1024.5, 0.0, 777.0] {
        engine.resize(width, 600.0, &mut rng);
        assert_eq!(engine.columns().len(), column_count(width, 14.0));
    }
}

#[test]
fn custom_palette_is_used() {
    let mut cfg = RainConfig::default();
    cfg.palette = vec![Rgb::new(1, 2, 3)];
    let mut rng = XorShiftRng::new(11);
    let engine = RainEngine::new(cfg, 140.0, 140.0, &mut rng);
    assert!(engine.columns().iter().all(|c| c.color == Rgb::new(1, 2, 3)));
}

#[test]
fn default_typewriter_cycles_all_phrases() {
    let cfg = TypewriterConfig::default();
    let mut tw = Typewriter::new(&cfg).unwrap();
    for (i, phrase) in cfg.phrases.iter().enumerate() {
        assert_eq!(tw.text_index(), i);
        let mut full = String::new();
        let mut pause = 0;
        for _ in 0..phrase.chars().count() {
            let t = tw.tick();
            full = t.text;
            pause = t.next_delay_ms;
        }
        assert_eq!(&full, phrase);
        assert_eq!(pause, cfg.pause_ms);
        for _ in 0..phrase.chars().count() {
            tw.tick();
        }
    }
    assert_eq!(tw.text_index(), 0);
    assert_eq!(tw.char_index(), 0);
    assert!(!tw.is_deleting());
}

#[test]
fn default_terminal_script_reveals_in_order() {
    let cfg = TerminalConfig::default();
    let mut rev = TerminalRevealer::new(&cfg.lines);
    let mut rows = Rows::default();
    while rev.reveal_next(&mut rows).unwrap() {}
    assert_eq!(rows.0.len(), cfg.lines.len());
    assert_eq!(rows.1, cfg.lines.len());
    for (row, line) in rows.0.iter().zip(&cfg.lines) {
        assert_eq!(row.text, line.text);
    }
}

#[test]
fn xorshift_is_reproducible_per_seed() {
    let mut a = XorShiftRng::new(42);
    let mut b = XorShiftRng::new(42);
    for _ in 0..100 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}
