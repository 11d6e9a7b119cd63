//! Skill-category filter: offensive / defensive / all.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;

const SHOW_ANIMATION: &str = "fadeInUp 0.6s ease";

/// Categories visible before any button is pressed.
pub fn visible_initially(category: &str) -> bool {
    category != "defensive"
}

/// Core skills (`all`) are always shown; otherwise the category must match.
pub fn visible_in_mode(mode: &str, category: &str) -> bool {
    mode == "all" || category == "all" || category == mode
}

pub fn start() -> Result<(), JsValue> {
    let buttons = dom::query_all(".toggle-btn")?;
    let categories = dom::query_all(".skill-category")?;
    log::debug!(
        "skills: {} buttons, {} categories",
        buttons.len(),
        categories.len()
    );

    for cat in &categories {
        let kind = cat.get_attribute("data-category").unwrap_or_default();
        set_shown(cat, visible_initially(&kind), false);
    }

    for btn in &buttons {
        let btn_inner = btn.clone();
        let buttons = buttons.clone();
        let categories = categories.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            let mode = btn_inner.get_attribute("data-mode").unwrap_or_default();
            log::debug!("skills: switching to {mode}");
            for b in &buttons {
                let _ = b.class_list().remove_1("active");
            }
            let _ = btn_inner.class_list().add_1("active");
            for cat in &categories {
                let kind = cat.get_attribute("data-category").unwrap_or_default();
                set_shown(cat, visible_in_mode(&mode, &kind), true);
            }
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn set_shown(el: &Element, shown: bool, animate: bool) {
    let Some(html) = dom::as_html(el) else {
        return;
    };
    let style = html.style();
    let _ = style.set_property("display", if shown { "block" } else { "none" });
    if shown && animate {
        let _ = style.set_property("animation", SHOW_ANIMATION);
    }
}
