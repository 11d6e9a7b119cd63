//! Peripheral page wiring. Each piece looks up its own elements and does
//! nothing when they are absent; a failure in one does not stop the others.

pub mod cards;
pub mod mode;
pub mod nav;
pub mod reveal;
pub mod skills;
pub mod stats;

use wasm_bindgen::prelude::*;

type Starter = fn() -> Result<(), JsValue>;

const PIECES: &[(&str, Starter)] = &[
    ("navigation", nav::start),
    ("skills", skills::start),
    ("scroll reveal", reveal::start),
    ("project cards", cards::start),
    ("mode toggle", mode::start),
    ("stats", stats::start),
    ("lazy images", reveal::start_lazy_images),
];

/// Wire every peripheral behaviour; returns how many failed to start.
pub fn start_all() -> usize {
    let mut failed = 0;
    for (name, start) in PIECES {
        if let Err(e) = start() {
            log::error!("{name}: {:?}", e);
            failed += 1;
        }
    }
    failed
}
