//! Scanning spot animation
//!
//! A bright spot travels from the start of the strip towards the end with a
//! linear brightness ramp on both sides. At the end of the strip every LED
//! fades out, then the strip refills from index 0 and the scan restarts.

use embassy_time::Duration;

use crate::brightness::clamp_level;
use crate::frame::FrameBuffer;

/// Highest raw speed accepted from the control surface
pub const SPOT_SPEED_MAX: u8 = 100;

/// Step interval at raw speed 1
pub const SPOT_INTERVAL_SLOW: Duration = Duration::from_millis(100);

/// Step interval at raw speed [`SPOT_SPEED_MAX`]
pub const SPOT_INTERVAL_FAST: Duration = Duration::from_millis(10);

const fn clamp_speed(speed_raw: u8) -> u8 {
    if speed_raw > SPOT_SPEED_MAX {
        SPOT_SPEED_MAX
    } else {
        speed_raw
    }
}

/// Map a raw speed (0-100) onto a step interval.
///
/// Speed 0 means paused and yields `None`. Speeds 1..=100 map linearly onto
/// 100..=10 ms, rounding towards the slower interval.
#[allow(clippy::cast_lossless)]
pub const fn speed_to_interval(speed_raw: u8) -> Option<Duration> {
    if speed_raw == 0 {
        return None;
    }
    let speed = clamp_speed(speed_raw) as u64;
    let slow = SPOT_INTERVAL_SLOW.as_millis();
    let span = slow - SPOT_INTERVAL_FAST.as_millis();
    let steps = (SPOT_SPEED_MAX - 1) as u64;

    Some(Duration::from_millis(slow - (speed - 1) * span / steps))
}

/// Draw a spot of brightness `level` at `position`.
///
/// Walks outwards from the spot in both directions, giving each LED one level
/// less than its already updated inner neighbour (floored at 0).
pub fn set_spot<const MAX_LEDS: usize>(
    frame: &mut FrameBuffer<MAX_LEDS>,
    position: usize,
    level: u8,
) {
    let position = position.min(frame.last_index());
    frame.set_level(position, level);

    for i in position + 1..frame.len() {
        let inner = frame.level(i - 1);
        frame.set_level(i, inner.saturating_sub(1));
    }

    for i in (0..position).rev() {
        let inner = frame.level(i + 1);
        frame.set_level(i, inner.saturating_sub(1));
    }
}

/// Phase of the spot animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SpotPhase {
    /// Spot moves one LED per step
    #[default]
    Scanning,
    /// Every LED loses one level per step
    FadingOut,
    /// The strip refills from index 0
    FadingIn,
}

/// Spot scan state machine
#[derive(Debug, Clone)]
pub struct SpotScan {
    position: usize,
    speed_raw: u8,
    max_brightness: u8,
    phase: SpotPhase,
}

impl SpotScan {
    pub const fn new(position: usize, speed_raw: u8, max_brightness: u8) -> Self {
        Self {
            position,
            speed_raw: clamp_speed(speed_raw),
            max_brightness: clamp_level(max_brightness),
            phase: SpotPhase::Scanning,
        }
    }

    pub const fn position(&self) -> usize {
        self.position
    }

    /// Raw speed as set by the control surface (0 = paused)
    pub const fn speed_raw(&self) -> u8 {
        self.speed_raw
    }

    pub const fn max_brightness(&self) -> u8 {
        self.max_brightness
    }

    pub const fn phase(&self) -> SpotPhase {
        self.phase
    }

    /// Step interval, `None` while paused
    pub const fn interval(&self) -> Option<Duration> {
        speed_to_interval(self.speed_raw)
    }

    pub const fn is_paused(&self) -> bool {
        self.speed_raw == 0
    }

    /// Replace the position, speed and brightness.
    ///
    /// The phase is kept, so a fade-out or refill in progress continues.
    pub fn configure<const MAX_LEDS: usize>(
        &mut self,
        frame: &FrameBuffer<MAX_LEDS>,
        position: usize,
        speed_raw: u8,
        max_brightness: u8,
    ) {
        self.position = position.min(frame.last_index());
        self.speed_raw = clamp_speed(speed_raw);
        self.max_brightness = clamp_level(max_brightness);
    }

    /// Draw the spot at the current position
    pub fn draw<const MAX_LEDS: usize>(&self, frame: &mut FrameBuffer<MAX_LEDS>) {
        set_spot(frame, self.position, self.max_brightness);
    }

    /// Advance the animation by one step
    pub fn step<const MAX_LEDS: usize>(&mut self, frame: &mut FrameBuffer<MAX_LEDS>) {
        match self.phase {
            SpotPhase::Scanning => self.scan(frame),
            SpotPhase::FadingOut => self.fade_out(frame),
            SpotPhase::FadingIn => self.fade_in(frame),
        }
    }

    fn scan<const MAX_LEDS: usize>(&mut self, frame: &mut FrameBuffer<MAX_LEDS>) {
        let last = frame.last_index();
        self.position = (self.position + 1).min(last);
        if self.position == last {
            self.phase = SpotPhase::FadingOut;
        } else {
            self.draw(frame);
        }
    }

    fn fade_out<const MAX_LEDS: usize>(&mut self, frame: &mut FrameBuffer<MAX_LEDS>) {
        for led in frame.iter_mut() {
            led.set_level(led.level().saturating_sub(1));
        }
        if frame.level(frame.last_index()) == 0 {
            self.phase = SpotPhase::FadingIn;
        }
    }

    fn fade_in<const MAX_LEDS: usize>(&mut self, frame: &mut FrameBuffer<MAX_LEDS>) {
        // Refill stops right after the first dark LED, so the strip lights
        // up from index 0 outwards.
        for led in frame.iter_mut() {
            let level = led.level();
            led.set_level(level + 1);
            if level == 0 {
                break;
            }
        }
        if frame.level(0) >= self.max_brightness {
            self.position = 0;
            self.phase = SpotPhase::Scanning;
        }
    }
}
