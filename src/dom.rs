//! Small wrappers over the browser timer and lookup APIs shared by every engine.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Element by id, or `None` when the page does not carry that mount point.
pub fn mount_point(id: &str) -> Result<Option<Element>, JsValue> {
    Ok(document()?.get_element_by_id(id))
}

/// All elements matching `selector`, skipping non-element nodes.
pub fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn as_html(el: &Element) -> Option<HtmlElement> {
    el.clone().dyn_into::<HtmlElement>().ok()
}

/// One-shot `setTimeout`; returns the handle for `clear_timeout`.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let cb = Closure::once_into_js(f);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    )
}

pub fn clear_timeout(handle: i32) {
    if let Some(w) = web_sys::window() {
        w.clear_timeout_with_handle(handle);
    }
}

/// Resolves after `ms` milliseconds; rejects if the timer cannot be set.
pub async fn sleep(ms: u32) -> Result<(), JsValue> {
    let win = window()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(e) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            &resolve,
            ms.min(i32::MAX as u32) as i32,
        ) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    wasm_bindgen_futures::JsFuture::from(promise).await?;
    Ok(())
}

type PendingTimeout = Rc<RefCell<Option<(i32, Closure<dyn FnMut()>)>>>;

/// Trailing-edge debounce: each `call` restarts the quiet period and only the
/// last call's action runs once the period elapses.
///
/// The timeout closure is owned here rather than leaked, so a cancelled
/// timeout frees its captures immediately.
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: PendingTimeout,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call(&self, wait_ms: u32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
        self.cancel();
        let slot = Rc::downgrade(&self.pending);
        let cb = Closure::once(move || {
            // wasm-bindgen defers freeing a closure dropped during its own call
            let fired = slot.upgrade().and_then(|p| p.borrow_mut().take());
            f();
            drop(fired);
        });
        let handle = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            wait_ms.min(i32::MAX as u32) as i32,
        )?;
        *self.pending.borrow_mut() = Some((handle, cb));
        Ok(())
    }

    /// Drop the queued action, if any, without running it.
    pub fn cancel(&self) {
        let queued = self.pending.borrow_mut().take();
        if let Some((handle, cb)) = queued {
            clear_timeout(handle);
            drop(cb);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod web_tests {
    use std::cell::Cell;

    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn debounce_runs_only_the_last_call() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let debouncer = Debouncer::new();
        for i in 0..3 {
            let hits = hits.clone();
            debouncer.call(40, move || hits.borrow_mut().push(i)).unwrap();
        }
        assert!(debouncer.is_pending());

        sleep(10).await.unwrap();
        assert!(hits.borrow().is_empty(), "fired before the quiet period");

        sleep(100).await.unwrap();
        assert_eq!(*hits.borrow(), vec![2]);
        assert!(!debouncer.is_pending());
    }

    #[wasm_bindgen_test]
    async fn cancelled_action_never_runs() {
        let hit = Rc::new(Cell::new(false));
        let debouncer = Debouncer::new();
        let flag = hit.clone();
        debouncer.call(20, move || flag.set(true)).unwrap();
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        sleep(60).await.unwrap();
        assert!(!hit.get());
        // the cancelled closure released its capture
        assert_eq!(Rc::strong_count(&hit), 1);
    }

    #[wasm_bindgen_test]
    async fn set_timeout_fires_once() {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        set_timeout(5, move || c.set(c.get() + 1)).unwrap();
        sleep(40).await.unwrap();
        assert_eq!(count.get(), 1);
    }
}
