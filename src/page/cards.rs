//! Hover lift on project cards.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;

pub const LIFTED: &str = "translateY(-10px) scale(1.02)";
pub const RESTING: &str = "translateY(0) scale(1)";

pub fn start() -> Result<(), JsValue> {
    for card in dom::query_all(".project-card")? {
        let Some(html) = dom::as_html(&card) else {
            continue;
        };
        for (event, transform) in [("mouseenter", LIFTED), ("mouseleave", RESTING)] {
            let target = html.clone();
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                let _ = target.style().set_property("transform", transform);
            }) as Box<dyn FnMut(_)>);
            card.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    Ok(())
}
