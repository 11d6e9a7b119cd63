//! Portfolio FX core crate.
//!
//! Interactive layer of the portfolio page, compiled to WASM. Two animation
//! engines carry the state: the typewriter / terminal reveal and the matrix
//! rain canvas. The rest (`page`) is event wiring for navigation, filters and
//! small hover/scroll effects. `start_portfolio()` mounts all of it; each
//! engine also has its own entry point.

use wasm_bindgen::prelude::*;

pub mod color;
pub mod config;
mod dom;
pub mod page;
pub mod rain;
pub mod rng;
pub mod terminal;
pub mod typewriter;

pub use config::{PortfolioConfig, RainConfig, TerminalConfig, TerminalLine, TypewriterConfig};
pub use rain::{RainEngine, start_rain};
pub use terminal::{TerminalRevealer, start_terminal};
pub use typewriter::{Typewriter, start_typewriter};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

// -----------------------------------------------------------------------------
// Unified entrypoint
// -----------------------------------------------------------------------------

/// Mount every engine and page behaviour present in the document.
#[wasm_bindgen]
pub fn start_portfolio() -> Result<(), JsValue> {
    let engines: [(&str, fn() -> Result<(), JsValue>); 3] = [
        ("typewriter", start_typewriter),
        ("terminal", start_terminal),
        ("rain", start_rain),
    ];
    for (name, start) in engines {
        if let Err(e) = start() {
            log::error!("{name} failed to start: {:?}", e);
        }
    }
    let failed = page::start_all();
    log::info!("[✓] portfolio initialized ({failed} page pieces failed)");
    Ok(())
}

/// Compiled configuration as JSON, for inspecting from the browser console.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn config_json() -> Result<String, JsValue> {
    serde_json::to_string_pretty(&PortfolioConfig::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
