use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::{
    ColorFade, DEFAULT_FADE_INTERVAL, FadeDirection, SpotPhase, SpotScan, TickGate,
};
use crate::color::{BLACK, ColorRng, Rgb};
use crate::control::ControlIntent;
use crate::frame::{FrameBuffer, Led};
use crate::mode::Mode;

/// Default number of LEDs on the strip
pub const DEFAULT_LED_COUNT: usize = 100;

/// Initial spot parameters
#[derive(Debug, Clone, Copy)]
pub struct SpotConfig {
    pub position: usize,
    /// Raw speed (0-100), 0 pauses the scan
    pub speed_raw: u8,
    pub brightness: u8,
}

/// Configuration for the LED controller
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Number of LEDs, clamped to the buffer capacity
    pub led_count: usize,
    pub mode: Mode,
    /// Initial brightness of every LED (0-31)
    pub brightness: u8,
    pub color: Rgb,
    pub fade_interval: Duration,
    pub fade_direction: FadeDirection,
    pub spot: SpotConfig,
    /// Seed of the color fade palette
    pub seed: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LED_COUNT)
    }
}

impl ControllerConfig {
    pub const fn new(led_count: usize) -> Self {
        Self {
            led_count,
            mode: Mode::StaticColor,
            brightness: 10,
            color: BLACK,
            fade_interval: DEFAULT_FADE_INTERVAL,
            fade_direction: FadeDirection::Up,
            spot: SpotConfig {
                position: 0,
                // ~50ms step interval
                speed_raw: 56,
                brightness: 6,
            },
            seed: 0,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_fade(mut self, direction: FadeDirection, interval: Duration) -> Self {
        self.fade_direction = direction;
        self.fade_interval = interval;
        self
    }

    #[must_use]
    pub const fn with_spot(mut self, spot: SpotConfig) -> Self {
        self.spot = spot;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Snapshot of the controller state for UI reflection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub mode: Mode,
    /// Color of the reference LED (index 0)
    pub color: Rgb,
    /// Brightness of the reference LED (index 0)
    pub brightness: u8,
    pub spot_position: usize,
    pub spot_speed_raw: u8,
    pub spot_brightness: u8,
}

/// LED controller - owns the frame and every animation parameter
///
/// All state lives here and is only touched from the loop that owns the
/// controller, so no locking is involved. Every method that changes the
/// frame pushes it to the driver before returning.
pub struct LedController<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    frame: FrameBuffer<MAX_LEDS>,
    mode: Mode,
    fade: ColorFade,
    spot: SpotScan,
    gate: TickGate,
    rng: ColorRng,
}

impl<D: OutputDriver, const MAX_LEDS: usize> LedController<D, MAX_LEDS> {
    /// Create a controller. Nothing is pushed until [`Self::show`] is called.
    pub fn new(driver: D, config: &ControllerConfig) -> Self {
        let frame = FrameBuffer::new(config.led_count, Led::new(config.brightness, config.color));
        let spot = SpotScan::new(
            config.spot.position.min(frame.last_index()),
            config.spot.speed_raw,
            config.spot.brightness,
        );
        Self {
            driver,
            frame,
            mode: config.mode,
            fade: ColorFade::new(config.fade_direction, config.fade_interval),
            spot,
            gate: TickGate::new(),
            rng: ColorRng::new(config.seed),
        }
    }

    /// Push the current frame to the strip
    pub fn show(&mut self) {
        self.driver.write(self.frame.as_slice());
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn frame(&self) -> &FrameBuffer<MAX_LEDS> {
        &self.frame
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub const fn fade_direction(&self) -> FadeDirection {
        self.fade.direction()
    }

    pub const fn spot_phase(&self) -> SpotPhase {
        self.spot.phase()
    }

    /// Switch mode.
    ///
    /// `Off` darkens the strip but keeps colors. `Spot` redraws the spot
    /// with the stored parameters. `FadeColor` resumes from the current
    /// frame. `StaticColor` keeps and re-pushes the current frame.
    pub fn set_mode(&mut self, mode: Mode) {
        #[cfg(feature = "esp32-log")]
        println!("[light] mode: {} -> {}", self.mode.as_str(), mode.as_str());

        self.mode = mode;
        match mode {
            Mode::Off => {
                self.frame.set_level_all(0);
                self.show();
            }
            Mode::StaticColor => self.show(),
            Mode::Spot => {
                self.spot.draw(&mut self.frame);
                self.show();
            }
            Mode::FadeColor => {}
        }
    }

    /// Fill the strip with one color and switch to `StaticColor`
    pub fn set_static_color(&mut self, brightness: u8, color: Rgb) {
        self.mode = Mode::StaticColor;
        self.frame.set_all(brightness, color);
        self.show();
    }

    /// Switch to `Spot` with new parameters and draw the spot right away.
    ///
    /// Out of range values are clamped. The current spot phase is kept.
    pub fn set_spot(&mut self, position: usize, speed_raw: u8, brightness: u8) {
        self.mode = Mode::Spot;
        self.spot.configure(&self.frame, position, speed_raw, brightness);
        self.spot.draw(&mut self.frame);
        self.show();
    }

    /// Apply an intent received from the control surface
    pub fn apply(&mut self, intent: ControlIntent) {
        match intent {
            ControlIntent::Mode(mode) => self.set_mode(mode),
            ControlIntent::StaticColor { brightness, color } => {
                self.set_static_color(brightness, color);
            }
            ControlIntent::Spot {
                position,
                speed_raw,
                brightness,
            } => self.set_spot(position, speed_raw, brightness),
        }
    }

    /// Run one dispatch step of the active mode.
    ///
    /// Never blocks: if the step interval has not elapsed yet this returns
    /// immediately. Returns `true` when a frame was pushed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.mode {
            Mode::FadeColor => {
                if !self.gate.try_fire(now, self.fade.interval()) {
                    return false;
                }
                self.fade.step(&mut self.frame, &mut self.rng);
            }
            Mode::Spot => {
                let Some(interval) = self.spot.interval() else {
                    return false;
                };
                if !self.gate.try_fire(now, interval) {
                    return false;
                }
                self.spot.step(&mut self.frame);
            }
            Mode::Off | Mode::StaticColor => return false,
        }
        self.show();
        true
    }

    /// Color of the reference LED
    pub fn reference_color(&self) -> Rgb {
        self.frame.get(0).color()
    }

    /// Brightness level of the reference LED
    pub fn reference_brightness(&self) -> u8 {
        self.frame.level(0)
    }

    pub const fn spot_position(&self) -> usize {
        self.spot.position()
    }

    pub const fn spot_speed_raw(&self) -> u8 {
        self.spot.speed_raw()
    }

    pub const fn spot_brightness(&self) -> u8 {
        self.spot.max_brightness()
    }

    /// Collect everything the control surface reflects back to the user
    pub fn state(&self) -> LightState {
        LightState {
            mode: self.mode,
            color: self.reference_color(),
            brightness: self.reference_brightness(),
            spot_position: self.spot_position(),
            spot_speed_raw: self.spot_speed_raw(),
            spot_brightness: self.spot_brightness(),
        }
    }
}
