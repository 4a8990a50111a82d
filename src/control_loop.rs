//! Cooperative control loop
//!
//! Interleaves control surface updates with the animation tick without ever
//! waiting. The caller decides how often to poll; polling faster than the
//! shortest step interval only costs a time comparison.

use embassy_time::Instant;

use crate::OutputDriver;
use crate::control::IntentReceiver;
use crate::controller::LedController;

/// Result of a single poll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollResult {
    /// Intents drained from the queue and applied
    pub intents_applied: usize,
    /// Whether the animation tick pushed a frame
    pub frame_pushed: bool,
}

/// Drives a [`LedController`] from an intent queue.
///
/// # Usage
///
/// ```ignore
/// static INTENTS: IntentChannel<8> = IntentChannel::new();
///
/// let controller = LedController::<_, 100>::new(Apa102::new(spi), &config);
/// let mut control = ControlLoop::new(controller, INTENTS.receiver());
/// control.controller_mut().show();
///
/// loop {
///     http_server.poll(INTENTS.sender());
///     control.poll(Instant::now());
/// }
/// ```
pub struct ControlLoop<'a, D: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
{
    controller: LedController<D, MAX_LEDS>,
    intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize, const INTENT_CHANNEL_SIZE: usize>
    ControlLoop<'a, D, MAX_LEDS, INTENT_CHANNEL_SIZE>
{
    pub const fn new(
        controller: LedController<D, MAX_LEDS>,
        intents: IntentReceiver<'a, INTENT_CHANNEL_SIZE>,
    ) -> Self {
        Self {
            controller,
            intents,
        }
    }

    /// Apply every pending intent, then run one dispatch tick.
    ///
    /// A mode switch received here takes effect in the same poll.
    pub fn poll(&mut self, now: Instant) -> PollResult {
        let mut intents_applied = 0;
        while let Some(intent) = self.intents.try_receive() {
            self.controller.apply(intent);
            intents_applied += 1;
        }

        PollResult {
            intents_applied,
            frame_pushed: self.controller.tick(now),
        }
    }

    pub const fn controller(&self) -> &LedController<D, MAX_LEDS> {
        &self.controller
    }

    pub const fn controller_mut(&mut self) -> &mut LedController<D, MAX_LEDS> {
        &mut self.controller
    }
}
