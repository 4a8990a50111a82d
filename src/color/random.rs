//! Pseudo-random colors for the color fade mode
//!
//! `no_std` friendly SplitMix64 generator. Firmware seeds it from the
//! hardware RNG, tests seed it with a constant.

use super::Rgb;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded color generator
#[derive(Debug, Clone)]
pub struct ColorRng {
    state: u64,
}

impl ColorRng {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the generator and return the next 64 random bits
    #[inline]
    pub const fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Draw a color with three independent, uniformly distributed channels
    #[allow(clippy::cast_possible_truncation)]
    pub const fn next_rgb(&mut self) -> Rgb {
        let bits = self.next_u64();
        Rgb {
            r: bits as u8,
            g: (bits >> 8) as u8,
            b: (bits >> 16) as u8,
        }
    }
}
