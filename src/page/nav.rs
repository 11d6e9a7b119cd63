//! Navbar: smooth in-page scrolling, mobile menu, scroll styling and the
//! active-section highlight.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Clearance left above a section after jumping to it (fixed navbar height).
const JUMP_OFFSET: f64 = 80.0;
/// Sections count as current this far before their top reaches the viewport.
const ACTIVE_LEAD: f64 = 100.0;
/// Scroll depth after which the navbar turns solid.
const SOLID_AFTER: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub fn navbar_style(scroll_y: f64) -> NavbarStyle {
    if scroll_y > SOLID_AFTER {
        NavbarStyle {
            background: "rgba(10, 14, 39, 0.98)",
            box_shadow: "0 2px 20px rgba(0, 0, 0, 0.5)",
        }
    } else {
        NavbarStyle {
            background: "rgba(10, 14, 39, 0.95)",
            box_shadow: "none",
        }
    }
}

/// Layout of one `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the section containing `scroll_y`; later sections win on overlap.
pub fn active_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - ACTIVE_LEAD;
            scroll_y > top && scroll_y <= top + s.height
        })
        .map(|s| s.id.as_str())
}

pub fn start() -> Result<(), JsValue> {
    let doc = dom::document()?;
    let navbar = doc.query_selector(".navbar")?;
    let hamburger = doc.query_selector(".hamburger")?;
    let menu = doc.query_selector(".nav-menu")?;
    let links = dom::query_all(".nav-link")?;

    for link in &links {
        let link_inner = link.clone();
        let hamburger = hamburger.clone();
        let menu = menu.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            evt.prevent_default();
            if let Some(href) = link_inner.get_attribute("href") {
                scroll_to_target(&href);
            }
            if menu
                .as_ref()
                .is_some_and(|m| m.class_list().contains("active"))
            {
                toggle_menu(hamburger.as_ref(), menu.as_ref());
            }
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(burger) = &hamburger {
        let burger_inner = burger.clone();
        let menu = menu.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            toggle_menu(Some(&burger_inner), menu.as_ref());
        }) as Box<dyn FnMut(_)>);
        burger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    highlight_active(&links);
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let scroll_y = dom::window()
            .and_then(|w| w.scroll_y())
            .unwrap_or(0.0);
        if let Some(bar) = navbar.as_ref().and_then(dom::as_html) {
            let style = navbar_style(scroll_y);
            let css = bar.style();
            let _ = css.set_property("background", style.background);
            let _ = css.set_property("box-shadow", style.box_shadow);
        }
        highlight_active(&links);
    }) as Box<dyn FnMut(_)>);
    dom::window()?.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn toggle_menu(hamburger: Option<&Element>, menu: Option<&Element>) {
    for el in [hamburger, menu].into_iter().flatten() {
        let _ = el.class_list().toggle("active");
    }
}

fn scroll_to_target(href: &str) {
    let Ok(doc) = dom::document() else {
        return;
    };
    // hrefs that are not valid selectors simply do nothing
    let Some(target) = doc.query_selector(href).ok().flatten() else {
        return;
    };
    let Some(target) = dom::as_html(&target) else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(target.offset_top() as f64 - JUMP_OFFSET);
    opts.set_behavior(ScrollBehavior::Smooth);
    if let Ok(win) = dom::window() {
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

fn highlight_active(links: &[Element]) {
    let Ok(win) = dom::window() else {
        return;
    };
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let Ok(sections) = dom::query_all("section[id]") else {
        return;
    };
    let boxes: Vec<SectionBox> = sections
        .iter()
        .filter_map(|s| {
            let html = dom::as_html(s)?;
            Some(SectionBox {
                id: s.id(),
                top: html.offset_top() as f64,
                height: html.offset_height() as f64,
            })
        })
        .collect();
    let Some(active) = active_section(scroll_y, &boxes) else {
        return;
    };
    let wanted = format!("#{active}");
    for link in links {
        let list = link.class_list();
        let _ = list.remove_1("active");
        if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
            let _ = list.add_1("active");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBox> {
        vec![
            SectionBox {
                id: "home".into(),
                top: 0.0,
                height: 700.0,
            },
            SectionBox {
                id: "skills".into(),
                top: 700.0,
                height: 900.0,
            },
            SectionBox {
                id: "contact".into(),
                top: 1600.0,
                height: 400.0,
            },
        ]
    }

    #[test]
    fn navbar_turns_solid_past_threshold() {
        assert_eq!(navbar_style(0.0).box_shadow, "none");
        assert_eq!(navbar_style(100.0).background, "rgba(10, 14, 39, 0.95)");
        assert_eq!(navbar_style(101.0).background, "rgba(10, 14, 39, 0.98)");
    }

    #[test]
    fn active_section_leads_by_offset() {
        let s = sections();
        assert_eq!(active_section(10.0, &s), Some("home"));
        // skills window is (600, 1500]
        assert_eq!(active_section(601.0, &s), Some("skills"));
        assert_eq!(active_section(1500.0, &s), Some("skills"));
        assert_eq!(active_section(1501.0, &s), Some("contact"));
    }

    #[test]
    fn nothing_active_past_last_section() {
        assert_eq!(active_section(5000.0, &sections()), None);
        assert_eq!(active_section(10.0, &[]), None);
    }
}
