//! Tunable parameters of the line field.
//!
//! [`FieldConfig::default`] is the stock teal/blue look. [`FieldConfig::randomize`]
//! rolls a new preset from fixed ranges and one of the [`RANDOM_PALETTES`].

use rand::Rng;

use crate::color::Rgb;

/// The three colors used for gradients, fills and strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Gradient start, point fill, pointer links and cursor.
    pub primary: Rgb,
    /// Gradient midpoint.
    pub secondary: Rgb,
    /// Gradient end and the pulsing cursor ring.
    pub accent: Rgb,
}

impl ColorScheme {
    /// Default teal/blue palette.
    pub const DEFAULT: Self = Self::from_u32s(0x00d4ff, 0x0099cc, 0x0066ff);

    pub const fn from_u32s(primary: u32, secondary: u32, accent: u32) -> Self {
        Self {
            primary: Rgb::from_u32(primary),
            secondary: Rgb::from_u32(secondary),
            accent: Rgb::from_u32(accent),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Palettes picked from by [`FieldConfig::randomize`].
pub const RANDOM_PALETTES: [ColorScheme; 6] = [
    ColorScheme::from_u32s(0xff6b6b, 0xff8e53, 0xff6b9d),
    ColorScheme::from_u32s(0x4ecdc4, 0x45b7d1, 0x96ceb4),
    ColorScheme::from_u32s(0xfeca57, 0xff9ff3, 0x54a0ff),
    ColorScheme::from_u32s(0x5f27cd, 0x00d2d3, 0xff9ff3),
    ColorScheme::from_u32s(0x10ac84, 0x1dd1a1, 0xfeca57),
    ColorScheme::from_u32s(0xff6348, 0xff7675, 0xfdcb6e),
];

/// Visual parameters read by the update and render steps every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Number of simulated points.
    pub point_count: u32,
    /// Pairs closer than this (pixels) are connected by a line.
    pub max_distance: f32,
    /// Radius (pixels) within which the pointer attracts points.
    pub mouse_influence: f32,
    /// Opacity multiplier for connection lines, in `[0, 1]`.
    pub line_opacity: f32,
    /// Radius of a drawn point.
    pub point_size: f32,
    /// Velocity magnitude scale, in pixels per frame.
    pub animation_speed: f32,
    /// Stroke width of connection lines.
    pub line_width: f32,
    pub colors: ColorScheme,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: 80,
            max_distance: 150.0,
            mouse_influence: 100.0,
            line_opacity: 0.3,
            point_size: 2.0,
            animation_speed: 0.5,
            line_width: 1.0,
            colors: ColorScheme::DEFAULT,
        }
    }
}

impl FieldConfig {
    /// Roll a random preset.
    ///
    /// Point count, max distance and mouse influence are whole numbers.
    /// Line opacity and point size are left as they are.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let palette = RANDOM_PALETTES[rng.gen_range(0..RANDOM_PALETTES.len())];

        self.point_count = rng.gen_range(40..160);
        self.max_distance = rng.gen_range(100..300) as f32;
        self.mouse_influence = rng.gen_range(80..230) as f32;
        self.animation_speed = rng.gen_range(0.3..2.3);
        self.line_width = rng.gen_range(0.5..3.5);
        self.colors = palette;
    }
}
