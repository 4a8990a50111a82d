#![no_std]

pub mod animation;
pub mod brightness;
pub mod color;
pub mod control;
pub mod control_loop;
pub mod controller;
pub mod frame;
pub mod mode;
pub mod transport;

pub use animation::{ColorFade, FadeDirection, SpotPhase, SpotScan, TickGate};
pub use control::{ControlIntent, IntentChannel, IntentReceiver, IntentSender, TrySendError};
pub use control_loop::{ControlLoop, PollResult};
pub use controller::{ControllerConfig, LedController, LightState, SpotConfig};
pub use frame::{FrameBuffer, Led};
pub use mode::Mode;
pub use transport::Apa102;

pub use color::{ColorRng, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip output
///
/// Implement this trait to support different links. Writes are
/// fire-and-forget: an implementation reports failures on its own and the
/// next frame simply retries.
pub trait OutputDriver {
    /// Push a complete frame to the strip
    fn write(&mut self, leds: &[Led]);
}
