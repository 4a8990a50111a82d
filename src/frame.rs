//! LED records and the frame buffer they live in

use heapless::Vec;

use crate::brightness::{decode, encode};
use crate::color::{BLACK, Rgb};

/// A single APA102 LED record
///
/// The brightness is kept in its encoded on-wire form, so the marker bits
/// are always present and the record can be streamed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Led {
    brightness: u8,
    color: Rgb,
}

impl Default for Led {
    fn default() -> Self {
        Self::new(0, BLACK)
    }
}

impl Led {
    /// Create a record, clamping `level` to the supported range
    pub const fn new(level: u8, color: Rgb) -> Self {
        Self {
            brightness: encode(level),
            color,
        }
    }

    /// Decoded intensity level (0-31)
    pub const fn level(&self) -> u8 {
        decode(self.brightness)
    }

    pub const fn set_level(&mut self, level: u8) {
        self.brightness = encode(level);
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Wire representation: brightness byte followed by blue, green, red
    pub const fn to_wire(&self) -> [u8; 4] {
        [self.brightness, self.color.b, self.color.g, self.color.r]
    }
}

/// Ordered LED records of a strip
///
/// `MAX_LEDS` is the storage capacity; the active length is fixed when the
/// buffer is created and never changes afterwards. Index 0 always exists and
/// serves as the reference record for state readback.
#[derive(Debug, Clone)]
pub struct FrameBuffer<const MAX_LEDS: usize> {
    leds: Vec<Led, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> FrameBuffer<MAX_LEDS> {
    /// Allocate `len` records filled with `initial`
    ///
    /// `len` is clamped to `1..=MAX_LEDS`. `MAX_LEDS` must be non-zero.
    pub fn new(len: usize, initial: Led) -> Self {
        const { assert!(MAX_LEDS > 0, "frame buffer needs at least one LED") };
        let len = len.clamp(1, MAX_LEDS);
        let mut leds = Vec::new();
        for _ in 0..len {
            if leds.push(initial).is_err() {
                break;
            }
        }
        Self { leds }
    }

    /// Number of active records
    pub fn len(&self) -> usize {
        self.leds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Index of the last record
    pub fn last_index(&self) -> usize {
        self.len().saturating_sub(1)
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    /// Read a record, indices past the end resolve to the last record
    pub fn get(&self, index: usize) -> Led {
        self.leds[self.clamp_index(index)]
    }

    /// Decoded brightness level of a record
    pub fn level(&self, index: usize) -> u8 {
        self.get(index).level()
    }

    pub fn set_level(&mut self, index: usize, level: u8) {
        let index = self.clamp_index(index);
        self.leds[index].set_level(level);
    }

    /// Overwrite every record with the same brightness and color
    pub fn set_all(&mut self, level: u8, color: Rgb) {
        let led = Led::new(level, color);
        for slot in &mut self.leds {
            *slot = led;
        }
    }

    /// Set the brightness of every record, keeping colors
    pub fn set_level_all(&mut self, level: u8) {
        for led in &mut self.leds {
            led.set_level(level);
        }
    }

    /// Set the color of every record, keeping brightness
    pub fn set_color_all(&mut self, color: Rgb) {
        for led in &mut self.leds {
            led.set_color(color);
        }
    }

    pub fn as_slice(&self) -> &[Led] {
        &self.leds
    }

    pub fn iter(&self) -> impl Iterator<Item = &Led> {
        self.leds.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Led> {
        self.leds.iter_mut()
    }
}
