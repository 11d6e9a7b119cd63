//! Scripted terminal output, revealed one row at a time and never looped.

use std::collections::VecDeque;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::color::Rgb;
use crate::config::{TerminalConfig, TerminalLine};
use crate::dom;

const OFFENSIVE_ACCENT: Rgb = Rgb::new(255, 107, 157);
const DEFENSIVE_ACCENT: Rgb = Rgb::new(0, 212, 255);

/// A row ready to be appended to the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowSpec {
    pub text: String,
    /// Full class attribute of the row element.
    pub class_name: String,
    /// Inline colour override for the two accented categories.
    pub accent: Option<Rgb>,
}

impl RowSpec {
    pub fn from_line(line: &TerminalLine) -> Self {
        let accent = match line.style_class.as_str() {
            "offensive" => Some(OFFENSIVE_ACCENT),
            "defensive" => Some(DEFENSIVE_ACCENT),
            _ => None,
        };
        let class_name = if line.style_class.is_empty() {
            "terminal-line".to_string()
        } else {
            format!("terminal-line {}", line.style_class)
        };
        Self {
            text: line.text.clone(),
            class_name,
            accent,
        }
    }
}

/// Where rows go. The browser implementation is an element; tests record.
pub trait LinePanel {
    fn append_row(&mut self, row: &RowSpec) -> Result<(), JsValue>;
    /// Move the scroll position to its maximum offset.
    fn scroll_to_bottom(&mut self);
}

/// Hands out each scripted line exactly once, front to back.
#[derive(Debug)]
pub struct TerminalRevealer {
    pending: VecDeque<TerminalLine>,
}

impl TerminalRevealer {
    pub fn new(lines: &[TerminalLine]) -> Self {
        Self {
            pending: lines.iter().cloned().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }

    /// Append the next line to `panel` and keep it in view. `false` once exhausted.
    pub fn reveal_next(&mut self, panel: &mut impl LinePanel) -> Result<bool, JsValue> {
        let Some(line) = self.pending.pop_front() else {
            return Ok(false);
        };
        panel.append_row(&RowSpec::from_line(&line))?;
        panel.scroll_to_bottom();
        Ok(true)
    }
}

/// Browser panel: `div.terminal-line > span.output`.
pub struct ElementPanel {
    el: Element,
}

impl ElementPanel {
    pub fn new(el: Element) -> Self {
        Self { el }
    }
}

impl LinePanel for ElementPanel {
    fn append_row(&mut self, row: &RowSpec) -> Result<(), JsValue> {
        let doc = dom::document()?;
        let line_el = doc.create_element("div")?;
        line_el.set_class_name(&row.class_name);
        if let Some(accent) = row.accent {
            line_el.set_attribute("style", &format!("color: {accent}"))?;
        }
        let text_el = doc.create_element("span")?;
        text_el.set_class_name("output");
        text_el.set_text_content(Some(&row.text));
        line_el.append_child(&text_el)?;
        self.el.append_child(&line_el)?;
        Ok(())
    }

    fn scroll_to_bottom(&mut self) {
        self.el.set_scroll_top(self.el.scroll_height());
    }
}

/// Mount the terminal on `#terminal-output`. Missing element: no-op.
#[wasm_bindgen]
pub fn start_terminal() -> Result<(), JsValue> {
    let Some(el) = dom::mount_point("terminal-output")? else {
        log::debug!("terminal: no #terminal-output element, skipping");
        return Ok(());
    };
    run(el, TerminalConfig::default());
    Ok(())
}

pub fn run(el: Element, config: TerminalConfig) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = reveal_all(ElementPanel::new(el), &config).await {
            log::error!("terminal: {:?}", e);
        }
    });
}

async fn reveal_all(mut panel: ElementPanel, config: &TerminalConfig) -> Result<(), JsValue> {
    let mut revealer = TerminalRevealer::new(&config.lines);
    dom::sleep(config.start_delay_ms).await?;
    while !revealer.is_done() {
        dom::sleep(config.line_delay_ms).await?;
        revealer.reveal_next(&mut panel)?;
    }
    log::debug!("terminal: {} lines revealed", config.lines.len());
    Ok(())
}
