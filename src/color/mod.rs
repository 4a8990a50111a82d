mod random;

pub use random::ColorRng;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Black, used for freshly allocated frames
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Build a color from a packed `0xRRGGBB` value
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(value: u32) -> Rgb {
    Rgb {
        r: (value >> 16) as u8,
        g: (value >> 8) as u8,
        b: value as u8,
    }
}

/// Pack a color into a `0xRRGGBB` value
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
