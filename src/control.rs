//! Control surface intents and the queue that carries them
//!
//! The control surface (HTTP handlers, buttons, ...) may live in another
//! task or interrupt than the tick loop. It pushes [`ControlIntent`]s into an
//! [`IntentChannel`]; the loop drains them before every tick. The queue is
//! guarded by `critical-section` and backed by a fixed-size
//! `heapless::Deque`, so it works without an allocator.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::color::Rgb;
use crate::mode::Mode;

/// A parameter update requested by the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIntent {
    /// Switch mode without touching its parameters
    Mode(Mode),
    /// Fill the strip with one color
    StaticColor { brightness: u8, color: Rgb },
    /// Start the spot animation with new parameters
    Spot {
        position: usize,
        speed_raw: u8,
        brightness: u8,
    },
}

/// Returned by [`IntentChannel::try_send`] when the queue is full.
///
/// Carries the rejected intent back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ControlIntent);

/// Bounded intent queue shared between the control surface and the loop
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ControlIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    /// Queue an intent without blocking
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.queue.borrow(cs).borrow_mut();
            queue.push_back(intent).map_err(TrySendError)
        })
    }

    /// Take the oldest queued intent, if any
    pub fn try_receive(&self) -> Option<ControlIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }

    /// Number of intents waiting to be applied
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.queue.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    pub fn try_send(&self, intent: ControlIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }

    /// Request a mode switch
    pub fn set_mode(&self, mode: Mode) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Mode(mode))
    }

    /// Request a static color
    pub fn set_static_color(&self, brightness: u8, color: Rgb) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::StaticColor { brightness, color })
    }

    /// Request the spot animation
    pub fn set_spot(
        &self,
        position: usize,
        speed_raw: u8,
        brightness: u8,
    ) -> Result<(), TrySendError> {
        self.try_send(ControlIntent::Spot {
            position,
            speed_raw,
            brightness,
        })
    }
}

/// Consumer handle of an [`IntentChannel`]
#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<ControlIntent> {
        self.channel.try_receive()
    }
}
