//! APA102 strip transport
//!
//! A push is one-directional: a zeroed start frame, four bytes per LED and
//! an end frame long enough to clock the data through the last LED.

use core::iter;

use embedded_hal::spi::SpiBus;
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::frame::Led;

/// Start frame sent before the LED data
pub const START_FRAME: [u8; 4] = [0x00; 4];

/// Byte repeated in the end frame
pub const END_FRAME_BYTE: u8 = 0x01;

const END_FRAME_CHUNK: [u8; 16] = [END_FRAME_BYTE; 16];

/// Number of end frame bytes for a strip of `led_count` LEDs
pub const fn end_frame_len(led_count: usize) -> usize {
    led_count.div_ceil(2)
}

/// Total number of bytes in one push
pub const fn frame_len(led_count: usize) -> usize {
    START_FRAME.len() + led_count * 4 + end_frame_len(led_count)
}

/// Byte stream of a single push, in wire order
pub fn frame_bytes(leds: &[Led]) -> impl Iterator<Item = u8> + '_ {
    START_FRAME
        .into_iter()
        .chain(leds.iter().flat_map(Led::to_wire))
        .chain(iter::repeat_n(END_FRAME_BYTE, end_frame_len(leds.len())))
}

/// APA102 driver over a blocking SPI bus
///
/// Only MOSI and SCK are used, the strip never answers.
pub struct Apa102<SPI> {
    spi: SPI,
}

impl<SPI: SpiBus<u8>> Apa102<SPI> {
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Stream a frame to the strip and wait until the bus is idle
    pub fn write_frame(&mut self, leds: &[Led]) -> Result<(), SPI::Error> {
        self.spi.write(&START_FRAME)?;
        for led in leds {
            self.spi.write(&led.to_wire())?;
        }

        let mut remaining = end_frame_len(leds.len());
        while remaining > 0 {
            let chunk = remaining.min(END_FRAME_CHUNK.len());
            self.spi.write(&END_FRAME_CHUNK[..chunk])?;
            remaining -= chunk;
        }

        self.spi.flush()
    }

    /// Release the underlying bus
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiBus<u8>> OutputDriver for Apa102<SPI> {
    fn write(&mut self, leds: &[Led]) {
        // A lost frame only shows up as a stale strip until the next tick
        if let Err(_err) = self.write_frame(leds) {
            #[cfg(feature = "esp32-log")]
            println!("[apa102] frame push failed: {:?}", _err);
        }
    }
}
