//! Hero stat counters: count up from zero the first time the hero is in view.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;

const STEPS: f64 = 50.0;
const STEP_MS: i32 = 40;

/// Integer prefix of a stat label, like JavaScript's `parseInt`.
pub fn leading_int(text: &str) -> Option<i64> {
    let t = text.trim_start();
    let (sign, digits) = match t.as_bytes().first() {
        Some(b'-') => (-1, &t[1..]),
        Some(b'+') => (1, &t[1..]),
        _ => (1, t),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// Count-up state for one stat.
#[derive(Clone, Debug, PartialEq)]
pub struct Counter {
    target: i64,
    percent: bool,
    current: f64,
    increment: f64,
}

impl Counter {
    /// `None` for labels without a leading number; those are left untouched.
    pub fn parse(label: &str) -> Option<Self> {
        let target = leading_int(label)?;
        Some(Self {
            target,
            percent: label.contains('%'),
            current: 0.0,
            increment: target as f64 / STEPS,
        })
    }

    /// Advance one step; returns the label to show and whether counting is done.
    pub fn step(&mut self) -> (String, bool) {
        self.current += self.increment;
        let done = self.current >= self.target as f64;
        if done {
            self.current = self.target as f64;
        }
        let suffix = if self.percent { "%" } else { "" };
        (format!("{}{}", self.current.floor() as i64, suffix), done)
    }
}

pub fn start() -> Result<(), JsValue> {
    let stats = dom::query_all(".stat-number")?;
    let animated = Rc::new(Cell::new(false));

    check_and_run(&stats, &animated);
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        check_and_run(&stats, &animated);
    }) as Box<dyn FnMut(_)>);
    dom::window()?.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn check_and_run(stats: &[Element], animated: &Cell<bool>) {
    if animated.get() {
        return;
    }
    let Ok(win) = dom::window() else {
        return;
    };
    let Some(hero) = dom::document()
        .ok()
        .and_then(|d| d.query_selector(".hero").ok().flatten())
    else {
        return;
    };
    let rect = hero.get_bounding_client_rect();
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    if rect.top() < viewport && rect.bottom() >= 0.0 {
        animated.set(true);
        for stat in stats {
            if let Err(e) = count_up(stat.clone()) {
                log::warn!("stats: {:?}", e);
            }
        }
    }
}

fn count_up(stat: Element) -> Result<(), JsValue> {
    let Some(mut counter) = stat.text_content().as_deref().and_then(Counter::parse) else {
        return Ok(());
    };
    let handle = Rc::new(Cell::new(None::<i32>));
    let handle_inner = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (label, done) = counter.step();
        stat.set_text_content(Some(&label));
        if done {
            if let (Some(id), Some(w)) = (handle_inner.take(), web_sys::window()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    let id = dom::window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        STEP_MS,
    )?;
    handle.set(Some(id));
    closure.forget();
    Ok(())
}
