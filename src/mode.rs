const MODE_NAME_OFF: &str = "off";
const MODE_NAME_STATIC_COLOR: &str = "color";
const MODE_NAME_SPOT: &str = "spot";
const MODE_NAME_FADE_COLOR: &str = "fade_color";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_STATIC_COLOR: u8 = 1;
const MODE_ID_SPOT: u8 = 2;
const MODE_ID_FADE_COLOR: u8 = 3;

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Lighting mode selected by the control surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    /// All LEDs dark, no per-tick work
    Off = MODE_ID_OFF,
    /// Single color written once, no per-tick work
    #[default]
    StaticColor = MODE_ID_STATIC_COLOR,
    /// Scanning spot with fade-out / fade-in reset
    Spot = MODE_ID_SPOT,
    /// Breathing brightness with a new random color each cycle
    FadeColor = MODE_ID_FADE_COLOR,
}

impl Mode {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_STATIC_COLOR => Self::StaticColor,
            MODE_ID_SPOT => Self::Spot,
            MODE_ID_FADE_COLOR => Self::FadeColor,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::StaticColor => MODE_NAME_STATIC_COLOR,
            Self::Spot => MODE_NAME_SPOT,
            Self::FadeColor => MODE_NAME_FADE_COLOR,
        }
    }

    pub const fn parse_from_str(s: &str) -> Option<Self> {
        if str_eq(s, MODE_NAME_OFF) {
            Some(Self::Off)
        } else if str_eq(s, MODE_NAME_STATIC_COLOR) {
            Some(Self::StaticColor)
        } else if str_eq(s, MODE_NAME_SPOT) {
            Some(Self::Spot)
        } else if str_eq(s, MODE_NAME_FADE_COLOR) {
            Some(Self::FadeColor)
        } else {
            None
        }
    }

    /// Returns if the mode needs the periodic tick driver
    pub const fn is_animated(self) -> bool {
        matches!(self, Self::Spot | Self::FadeColor)
    }
}
