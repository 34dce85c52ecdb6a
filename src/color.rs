//! Color handling for the line field.
//!
//! Colors are stored as 8-bit sRGB triples ([`Rgb`]) and combined with an
//! alpha at draw time ([`Rgba`]). [`hex_to_rgba`] produces the CSS
//! `rgba(r, g, b, a)` form of a `#RRGGBB` string.

use std::fmt;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parse a `#RRGGBB` string.
    ///
    /// Returns `None` if any channel is not two hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let [r, g, b] = hex_channels(hex);
        Some(Self::new(r?, g?, b?))
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Attach an alpha value.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// An [`Rgb`] color plus an alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// Normalized `[r, g, b, a]` for vertex data.
    pub fn to_array(self) -> [f32; 4] {
        [
            self.rgb.r as f32 / 255.0,
            self.rgb.g as f32 / 255.0,
            self.rgb.b as f32 / 255.0,
            self.alpha,
        ]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Convert a `#RRGGBB` string and an alpha into `rgba(r, g, b, a)`.
///
/// The input is not validated. A channel that is missing or not valid hex
/// is written as `NaN`:
///
/// ```
/// use interlines::color::hex_to_rgba;
///
/// assert_eq!(hex_to_rgba("#00d4ff", 0.5), "rgba(0, 212, 255, 0.5)");
/// assert_eq!(hex_to_rgba("#zzd4ff", 1.0), "rgba(NaN, 212, 255, 1)");
/// ```
pub fn hex_to_rgba(hex: &str, alpha: f32) -> String {
    let [r, g, b] = hex_channels(hex).map(|c| c.map_or(f32::NAN, f32::from));
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

/// Decode the byte ranges `1..3`, `3..5` and `5..7` as base-16 channels.
fn hex_channels(hex: &str) -> [Option<u8>; 3] {
    let channel = |start: usize| {
        hex.get(start..start + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    [channel(1), channel(3), channel(5)]
}
