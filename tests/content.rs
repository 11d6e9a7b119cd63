// Invariants on the compiled-in page content.
// Native-friendly: no wasm/browser APIs are touched.

use std::collections::HashSet;

use portfolio_fx::config::{PHRASES, RAIN_ALPHABET, TERMINAL_SCRIPT};

#[test]
fn phrases_are_unique_and_nonempty() {
    let mut seen = HashSet::new();
    for p in PHRASES {
        assert!(!p.trim().is_empty(), "blank phrase in rotation");
        assert!(seen.insert(*p), "duplicate phrase '{}'", p);
    }
}

#[test]
fn terminal_classes_are_known() {
    let known = ["success", "offensive", "defensive", ""];
    for (text, class) in TERMINAL_SCRIPT {
        assert!(known.contains(class), "unexpected class '{}' on '{}'", class, text);
        // spacer rows carry no class
        if text.is_empty() {
            assert!(class.is_empty(), "spacer row has class '{}'", class);
        }
    }
}

#[test]
fn terminal_ends_operational() {
    let (last, _) = TERMINAL_SCRIPT.last().unwrap();
    assert!(last.contains("ENHANCED"));
}

#[test]
fn rain_alphabet_is_ascii_without_repeats() {
    let mut seen = HashSet::new();
    for c in RAIN_ALPHABET.chars() {
        assert!(c.is_ascii_graphic(), "non-printable glyph {:?}", c);
        assert!(seen.insert(c), "glyph {:?} listed twice", c);
    }
}
