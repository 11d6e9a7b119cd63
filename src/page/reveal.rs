//! Scroll reveal for sections and `[data-aos]` blocks, plus lazy images.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;

/// How far above the viewport bottom an element's top must rise to be revealed.
const REVEAL_MARGIN: f64 = 150.0;

pub fn should_reveal(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height - REVEAL_MARGIN
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub fn start() -> Result<(), JsValue> {
    for section in dom::query_all("section")? {
        section.class_list().add_1("reveal")?;
    }

    observe_aos()?;

    reveal_in_view();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        reveal_in_view();
    }) as Box<dyn FnMut(_)>);
    dom::window()?.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn reveal_in_view() {
    let Ok(win) = dom::window() else {
        return;
    };
    let height = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let Ok(items) = dom::query_all(".reveal") else {
        return;
    };
    for el in items {
        if should_reveal(el.get_bounding_client_rect().top(), height) {
            let _ = el.class_list().add_1("active");
        }
    }
}

fn intersecting(entries: &js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    entries
        .iter()
        .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|e| e.is_intersecting())
}

fn observe_aos() -> Result<(), JsValue> {
    let targets = dom::query_all("[data-aos]")?;
    if targets.is_empty() {
        return Ok(());
    }
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in intersecting(&entries) {
                let _ = entry.target().class_list().add_1("aos-animate");
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(0.1));
    init.set_root_margin("0px 0px -100px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    for el in &targets {
        observer.observe(el);
    }
    Ok(())
}

/// Swap `data-src` into `src` the first time each image scrolls into view.
pub fn start_lazy_images() -> Result<(), JsValue> {
    let images = dom::query_all("img[data-src]")?;
    if images.is_empty() {
        return Ok(());
    }
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in intersecting(&entries) {
                let target = entry.target();
                if let Ok(img) = target.clone().dyn_into::<HtmlImageElement>() {
                    if let Some(src) = img.dataset().get("src") {
                        img.set_src(&src);
                    }
                    let _ = img.class_list().add_1("loaded");
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();
    for img in &images {
        observer.observe(img);
    }
    log::debug!("lazy images: observing {}", images.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_threshold() {
        assert!(should_reveal(0.0, 800.0));
        assert!(should_reveal(649.0, 800.0));
        assert!(!should_reveal(650.0, 800.0));
        assert!(!should_reveal(100.0, 200.0));
    }
}
