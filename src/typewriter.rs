//! Typewriter rotation: type a phrase, dwell, delete it, move on, forever.
//!
//! `Typewriter` is a pure state machine; `start_typewriter` binds it to an
//! element and a self-rescheduling `setTimeout` chain (the delay differs per
//! phase, so a fixed interval would not do).

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::TypewriterConfig;
use crate::dom;

/// Result of one tick: what to display and when the next tick is due.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub next_delay_ms: u32,
}

#[derive(Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    type_speed_ms: u32,
    pause_ms: u32,
    gap_ms: u32,
    text_index: usize,
    char_index: usize,
    is_deleting: bool,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
            type_speed_ms: config.type_speed_ms,
            pause_ms: config.pause_ms,
            gap_ms: config.gap_ms,
            text_index: 0,
            char_index: 0,
            is_deleting: false,
        })
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    /// Advance one character in the current phase.
    pub fn tick(&mut self) -> Tick {
        let phrase = &self.phrases[self.text_index];
        let len = phrase.len();

        if self.is_deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = phrase[..self.char_index].iter().collect();

        let mut delay = if self.is_deleting {
            self.type_speed_ms / 2
        } else {
            self.type_speed_ms
        };

        if !self.is_deleting && self.char_index == len {
            self.is_deleting = true;
            delay = self.pause_ms;
        } else if self.is_deleting && self.char_index == 0 {
            self.is_deleting = false;
            self.text_index = (self.text_index + 1) % self.phrases.len();
            delay = self.gap_ms;
        }

        Tick {
            text,
            next_delay_ms: delay,
        }
    }
}

/// Mount the typewriter on `#typewriter`. Missing element: no-op.
#[wasm_bindgen]
pub fn start_typewriter() -> Result<(), JsValue> {
    let Some(el) = dom::mount_point("typewriter")? else {
        log::debug!("typewriter: no #typewriter element, skipping");
        return Ok(());
    };
    run(el, &TypewriterConfig::default())
}

pub fn run(el: Element, config: &TypewriterConfig) -> Result<(), JsValue> {
    let Some(machine) = Typewriter::new(config) else {
        log::warn!("typewriter: empty phrase list, not starting");
        return Ok(());
    };
    log::info!("typewriter: rotating {} phrases", config.phrases.len());
    step(Rc::new(RefCell::new(machine)), el)
}

fn step(machine: Rc<RefCell<Typewriter>>, el: Element) -> Result<(), JsValue> {
    let tick = machine.borrow_mut().tick();
    el.set_text_content(Some(&tick.text));
    dom::set_timeout(tick.next_delay_ms, move || {
        if let Err(e) = step(machine, el) {
            log::error!("typewriter: {:?}", e);
        }
    })?;
    Ok(())
}
