//! APA102 global brightness encoding
//!
//! Every LED frame on the wire starts with a brightness byte: the top three
//! bits are always set, the lower five bits carry the intensity level.

/// Fixed marker occupying the top three bits of an encoded brightness byte
pub const MARKER: u8 = 0b1110_0000;

/// Mask selecting the intensity level from an encoded byte
pub const LEVEL_MASK: u8 = 0b0001_1111;

/// Highest intensity level supported by the strip
pub const MAX_LEVEL: u8 = 31;

/// Clamp an intensity level into `0..=MAX_LEVEL`
#[inline]
pub const fn clamp_level(level: u8) -> u8 {
    if level > MAX_LEVEL { MAX_LEVEL } else { level }
}

/// Encode an intensity level into its on-wire byte.
///
/// Levels above [`MAX_LEVEL`] are clamped, so `encode(200) == encode(31)`.
#[inline]
pub const fn encode(level: u8) -> u8 {
    MARKER | clamp_level(level)
}

/// Decode an on-wire brightness byte back to its intensity level
#[inline]
pub const fn decode(byte: u8) -> u8 {
    byte & LEVEL_MASK
}
