//! Color fade ("breathing") animation
//!
//! All LEDs share one brightness that ramps up to the maximum and back down.
//! Each time it reaches zero a new random color is drawn for the whole strip.

use embassy_time::Duration;

use crate::brightness::MAX_LEVEL;
use crate::color::ColorRng;
use crate::frame::FrameBuffer;

/// Default step interval of the fade
pub const DEFAULT_FADE_INTERVAL: Duration = Duration::from_millis(50);

/// Direction of the brightness ramp
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadeDirection {
    #[default]
    Up,
    Down,
}

/// Color fade state machine
#[derive(Debug, Clone)]
pub struct ColorFade {
    direction: FadeDirection,
    interval: Duration,
}

impl Default for ColorFade {
    fn default() -> Self {
        Self::new(FadeDirection::Up, DEFAULT_FADE_INTERVAL)
    }
}

impl ColorFade {
    pub const fn new(direction: FadeDirection, interval: Duration) -> Self {
        Self {
            direction,
            interval,
        }
    }

    pub const fn direction(&self) -> FadeDirection {
        self.direction
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    pub const fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// Advance the fade by one step.
    ///
    /// The direction is decided once from the state before the step, so a
    /// turn at either end never applies the opposite step in the same call.
    pub fn step<const MAX_LEDS: usize>(
        &mut self,
        frame: &mut FrameBuffer<MAX_LEDS>,
        rng: &mut ColorRng,
    ) {
        let current = frame.level(0);

        let next = match self.direction {
            FadeDirection::Up => {
                let next = current.saturating_add(1).min(MAX_LEVEL);
                if next >= MAX_LEVEL {
                    self.direction = FadeDirection::Down;
                }
                next
            }
            FadeDirection::Down => {
                let next = current.saturating_sub(1);
                if next == 0 {
                    self.direction = FadeDirection::Up;
                    frame.set_color_all(rng.next_rgb());
                }
                next
            }
        };

        frame.set_level_all(next);
    }
}
