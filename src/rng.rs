//! Injectable randomness for the rain engine.
//!
//! Engines take `&mut impl RandomSource`, so tests can feed fixed sequences
//! while the browser build uses a seeded xorshift generator.

use web_sys::window;

/// Uniform source of floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index into a collection of `len` items; 0 when empty.
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

/// xorshift32; plenty for visual noise, not for anything secret.
#[derive(Clone, Debug)]
pub struct XorShiftRng {
    state: u32,
}

impl XorShiftRng {
    pub fn new(seed: u32) -> Self {
        // zero is a fixed point of xorshift
        Self {
            state: if seed == 0 { 0x9E37_79B9 } else { seed },
        }
    }

    /// Seed from the browser: crypto when the `rng` feature is on,
    /// otherwise the high-resolution clock.
    pub fn from_browser() -> Self {
        Self::new(browser_seed())
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShiftRng {
    fn next_f64(&mut self) -> f64 {
        // 24 high bits give an exact float in [0,1)
        let u = self.next_u32() >> 8;
        u as f64 / (1u32 << 24) as f64
    }
}

#[cfg(feature = "rng")]
fn browser_seed() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        Err(e) => {
            log::warn!("getrandom failed ({e}); seeding from clock");
            clock_seed()
        }
    }
}

#[cfg(not(feature = "rng"))]
fn browser_seed() -> u32 {
    clock_seed()
}

fn clock_seed() -> u32 {
    let now = window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    ((now * 1000.0) as u64 as u32)
        .wrapping_mul(1664525)
        .wrapping_add(1013904223)
}
