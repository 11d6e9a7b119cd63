//! Light/dark toggle on `#modeToggle`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::dom;

const LIGHT_CLASS: &str = "light-mode";

/// Icon classes for the toggle button in each mode.
pub fn icon_class(light: bool) -> &'static str {
    if light { "fas fa-moon" } else { "fas fa-shield-alt" }
}

pub fn start() -> Result<(), JsValue> {
    let doc = dom::document()?;
    let Some(button) = doc.get_element_by_id("modeToggle") else {
        return Ok(());
    };
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let button_inner = button.clone();
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let light = body.class_list().toggle(LIGHT_CLASS).unwrap_or(false);
        if let Ok(Some(icon)) = button_inner.query_selector("i") {
            icon.set_class_name(icon_class(light));
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
