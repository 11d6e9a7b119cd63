//! Compiled-in page content and tuning constants.
//!
//! Every engine receives one of these structs at construction; nothing reads
//! configuration from globals. `Default` carries the portfolio's own text.

use crate::color::Rgb;

/// Typewriter rotation: phrases and tick timing (milliseconds).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_speed_ms: u32,
    /// Dwell on a fully typed phrase before deleting starts.
    pub pause_ms: u32,
    /// Breathing gap between the end of a deletion and the next phrase.
    pub gap_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: PHRASES.iter().map(|p| p.to_string()).collect(),
            type_speed_ms: 100,
            pause_ms: 2000,
            gap_ms: 500,
        }
    }
}

/// One scripted row of terminal output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalLine {
    pub text: String,
    pub style_class: String,
}

impl TerminalLine {
    pub fn new(text: &str, style_class: &str) -> Self {
        Self {
            text: text.to_string(),
            style_class: style_class.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminalConfig {
    pub lines: Vec<TerminalLine>,
    pub line_delay_ms: u32,
    /// Delay before the first line's own delay starts counting.
    pub start_delay_ms: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            lines: TERMINAL_SCRIPT
                .iter()
                .map(|(text, class)| TerminalLine::new(text, class))
                .collect(),
            line_delay_ms: 300,
            start_delay_ms: 500,
        }
    }
}

/// Matrix rain tuning. Speeds are in character cells per frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RainConfig {
    pub alphabet: String,
    pub font_size: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Alpha of the background overlay painted every frame (trail length).
    pub fade_opacity: f64,
    pub background: Rgb,
    pub palette: Vec<Rgb>,
    /// Per-glyph chance of a second, blurred draw.
    pub glow_chance: f64,
    pub glow_blur: f64,
    /// Per-frame chance that a column past the bottom edge restarts at the top.
    pub reset_chance: f64,
    pub resize_debounce_ms: u32,
    /// New columns start this many cells (at most) above the surface.
    pub initial_depth: f64,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            alphabet: RAIN_ALPHABET.to_string(),
            font_size: 14.0,
            min_speed: 0.5,
            max_speed: 1.5,
            fade_opacity: 0.05,
            background: Rgb::new(10, 14, 39),
            palette: vec![
                Rgb::new(0, 212, 255),  // cyan
                Rgb::new(255, 0, 85),   // pink
                Rgb::new(77, 255, 166), // green
            ],
            glow_chance: 0.02,
            glow_blur: 10.0,
            reset_chance: 0.025,
            resize_debounce_ms: 250,
            initial_depth: 100.0,
        }
    }
}

/// Everything the page mounts, bundled for `config_json`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioConfig {
    pub typewriter: TypewriterConfig,
    pub terminal: TerminalConfig,
    pub rain: RainConfig,
}

// -----------------------------------------------------------------------------
// Page content
// -----------------------------------------------------------------------------

pub const PHRASES: &[&str] = &[
    "Breaking systems securely...",
    "Hunting threats relentlessly...",
    "Defending digital frontiers...",
    "Securing applications...",
    "Analyzing CloudTrail events...",
    "Writing detection rules...",
    "Investigating incidents...",
];

pub const TERMINAL_SCRIPT: &[(&str, &str)] = &[
    ("[+] Initializing security scan...", "success"),
    ("[+] Loading threat intelligence...", "success"),
    ("[+] Calibrating detection systems...", "success"),
    ("", ""),
    ("=== OFFENSIVE CAPABILITIES ===", "offensive"),
    ("✓ Web/API Penetration Testing", "success"),
    ("✓ OWASP Top 10 Expertise", "success"),
    ("✓ Burp Suite Proficiency", "success"),
    ("✓ Vulnerability Assessment", "success"),
    ("", ""),
    ("=== DEFENSIVE CAPABILITIES ===", "defensive"),
    ("✓ SIEM Deployment (ELK Stack)", "success"),
    ("✓ Detection Engineering", "success"),
    ("✓ Threat Hunting", "success"),
    ("✓ Incident Response", "success"),
    ("", ""),
    ("[✓] All systems operational", "success"),
    ("[✓] Security status: ENHANCED", "success"),
];

pub const RAIN_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()_+-=[]{}|;:,.<>?/";
