#![allow(dead_code)]

use core::convert::Infallible;

use embedded_hal::spi::{ErrorKind, ErrorType, SpiBus};
use myrtio_apa102_light::{Led, OutputDriver};

/// Driver that keeps a copy of every pushed frame
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<Vec<Led>>,
}

impl RecordingDriver {
    pub fn pushes(&self) -> usize {
        self.frames.len()
    }

    pub fn last_levels(&self) -> Vec<u8> {
        self.frames
            .last()
            .map(|frame| frame.iter().map(Led::level).collect())
            .unwrap_or_default()
    }
}

impl OutputDriver for RecordingDriver {
    fn write(&mut self, leds: &[Led]) {
        self.frames.push(leds.to_vec());
    }
}

/// SPI bus that records every written byte
#[derive(Debug, Default)]
pub struct RecordingBus {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl ErrorType for RecordingBus {
    type Error = Infallible;
}

impl SpiBus<u8> for RecordingBus {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.bytes.extend_from_slice(words);
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.bytes.extend_from_slice(write);
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        self.bytes.extend_from_slice(words);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// SPI bus whose writes always fail
#[derive(Debug, Default)]
pub struct FailingBus {
    pub attempts: usize,
}

impl ErrorType for FailingBus {
    type Error = ErrorKind;
}

impl SpiBus<u8> for FailingBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err(ErrorKind::Other)
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
