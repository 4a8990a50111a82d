//! Tick-driven animations
//!
//! Animations mutate the frame buffer in place. They carry no notion of
//! time themselves: the controller decides when a step is due through the
//! shared [`TickGate`] and pushes the frame afterwards.

mod fade;
mod spot;

use embassy_time::{Duration, Instant};

pub use fade::{ColorFade, DEFAULT_FADE_INTERVAL, FadeDirection};
pub use spot::{
    SPOT_INTERVAL_FAST, SPOT_INTERVAL_SLOW, SPOT_SPEED_MAX, SpotPhase, SpotScan, set_spot,
    speed_to_interval,
};

/// Non-blocking interval gate shared by all animations
///
/// Holds the instant of the last step that fired. Whichever animation ran
/// last owns the timestamp, so switching modes does not reset the cadence.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    last_tick: Instant,
}

impl Default for TickGate {
    fn default() -> Self {
        Self::new()
    }
}

impl TickGate {
    pub const fn new() -> Self {
        Self {
            last_tick: Instant::from_millis(0),
        }
    }

    /// Instant of the last step that fired
    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Check whether `interval` has elapsed since the last step.
    ///
    /// Records `now` as the new last step when it has.
    pub fn try_fire(&mut self, now: Instant, interval: Duration) -> bool {
        if now.saturating_duration_since(self.last_tick) < interval {
            return false;
        }
        self.last_tick = now;
        true
    }
}
