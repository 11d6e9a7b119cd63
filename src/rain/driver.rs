//! Browser wiring for the rain: canvas sizing, the frame chain, resize and
//! visibility listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::RainEngine;
use crate::config::RainConfig;
use crate::dom::{self, Debouncer};
use crate::rng::XorShiftRng;

struct RainState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    engine: RainEngine,
    rng: XorShiftRng,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// The frame closure plus the id of the one outstanding request, if any.
#[derive(Clone)]
struct FrameLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Chain that calls `on_frame` once per display refresh after `request`.
    fn new(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let frames = Self {
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        };
        let next = frames.clone();
        *frames.callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            next.pending.set(None);
            on_frame(ts);
            next.request();
        }) as Box<dyn FnMut(f64)>));
        frames
    }

    fn request(&self) {
        let Some(w) = web_sys::window() else {
            return;
        };
        if let Some(cb) = self.callback.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("rain: requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Drop any queued frame and start a fresh one, keeping a single chain.
    fn rearm(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web_sys::window()) {
            let _ = w.cancel_animation_frame(id);
        }
        self.request();
    }
}

/// Mount the rain on `#matrix-canvas`. Missing canvas: no-op.
#[wasm_bindgen]
pub fn start_rain() -> Result<(), JsValue> {
    let Some(el) = dom::mount_point("matrix-canvas")? else {
        log::debug!("rain: no #matrix-canvas element, skipping");
        return Ok(());
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    run(canvas, RainConfig::default())
}

pub fn run(canvas: HtmlCanvasElement, config: RainConfig) -> Result<(), JsValue> {
    let win = dom::window()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let (width, height) = fit_to_viewport(&win, &canvas)?;
    let debounce_ms = config.resize_debounce_ms;
    let mut rng = XorShiftRng::from_browser();
    let engine = RainEngine::new(config, width, height, &mut rng);
    log::info!(
        "rain: {}x{} surface, {} columns",
        width,
        height,
        engine.columns().len()
    );

    let state = Rc::new(RefCell::new(RainState {
        canvas,
        ctx,
        engine,
        rng,
    }));

    let frames = start_loop(state.clone());
    listen_resize(&win, state, debounce_ms)?;
    listen_visibility(frames)?;
    Ok(())
}

fn fit_to_viewport(win: &Window, canvas: &HtmlCanvasElement) -> Result<(f64, f64), JsValue> {
    let width = win.inner_width()?.as_f64().unwrap_or(0.0);
    let height = win.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Ok((width, height))
}

fn start_loop(state: Rc<RefCell<RainState>>) -> FrameLoop {
    let frames = FrameLoop::new(move |_ts| {
        let mut st = state.borrow_mut();
        let RainState {
            ctx, engine, rng, ..
        } = &mut *st;
        if let Err(e) = engine.frame(ctx, rng) {
            log::error!("rain: frame failed: {:?}", e);
        }
    });
    frames.request();
    frames
}

fn listen_resize(
    win: &Window,
    state: Rc<RefCell<RainState>>,
    debounce_ms: u32,
) -> Result<(), JsValue> {
    let debouncer = Debouncer::new();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let state = state.clone();
        let res = debouncer.call(debounce_ms, move || {
            let Ok(win) = dom::window() else {
                return;
            };
            let mut st = state.borrow_mut();
            let RainState {
                canvas, engine, rng, ..
            } = &mut *st;
            match fit_to_viewport(&win, canvas) {
                Ok((w, h)) => {
                    engine.resize(w, h, rng);
                    log::debug!("rain: resized to {} columns", engine.columns().len());
                }
                Err(e) => log::error!("rain: resize failed: {:?}", e),
            }
        });
        if let Err(e) = res {
            log::error!("rain: could not schedule resize: {:?}", e);
        }
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_visibility(frames: FrameLoop) -> Result<(), JsValue> {
    let doc = dom::document()?;
    let doc_inner = doc.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        // hidden tabs get no animation frames; nothing to do until we return
        if !doc_inner.hidden() {
            frames.rearm();
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use super::*;
    use wasm_bindgen_test::*;

    impl FrameLoop {
        /// Cancel the queued frame and release the closure (and its cycle).
        fn stop(&self) {
            if let (Some(id), Some(w)) = (self.pending.take(), web_sys::window()) {
                let _ = w.cancel_animation_frame(id);
            }
            self.callback.borrow_mut().take();
        }
    }

    #[wasm_bindgen_test]
    async fn rearm_leaves_a_single_chain() {
        let stamps = Rc::new(RefCell::new(Vec::<f64>::new()));
        let sink = stamps.clone();
        let frames = FrameLoop::new(move |ts| sink.borrow_mut().push(ts));

        frames.request();
        let first = frames.pending.get();
        frames.rearm();
        frames.rearm();
        assert!(first.is_some());
        assert!(frames.pending.get().is_some());
        assert_ne!(frames.pending.get(), first);

        dom::sleep(250).await.unwrap();
        frames.stop();

        let stamps = stamps.borrow();
        assert!(!stamps.is_empty(), "no frames delivered");
        // a second chain would be called again within the same refresh
        for pair in stamps.windows(2) {
            assert!(pair[1] > pair[0], "two callbacks in one refresh: {:?}", pair);
        }
    }

    #[wasm_bindgen_test]
    fn request_without_callback_is_a_no_op() {
        let frames = FrameLoop::new(|_| {});
        frames.stop();
        frames.request();
        assert_eq!(frames.pending.get(), None);
    }
}
