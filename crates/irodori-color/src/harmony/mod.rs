//! Color-harmony generation
//!
//! Derives palettes from a single base color using fixed hue-rotation rules.
//! The two building blocks are [`complementary`] (per-channel RGB inverse)
//! and [`rotate_hue`] (HSL hue rotation with saturation and lightness kept);
//! analogous and triadic colors are the same rotation at different angles.
//!
//! # Example
//!
//! ```
//! use irodori_color::{generate_palette, Rgb};
//!
//! let palette = generate_palette(Rgb::new(255, 0, 0));
//! let hex: Vec<String> = palette.to_hex_strings();
//! assert_eq!(hex[0], "#ff0000");
//! assert_eq!(hex[1], "#00ffff");
//! ```

mod modes;

pub use modes::HarmonyMode;

use crate::color::{Hsl, Rgb};

/// Hue offset for analogous colors, in degrees.
pub const ANALOGOUS_ANGLE: f32 = 30.0;
/// Hue offset for triadic colors, in degrees.
pub const TRIADIC_ANGLE: f32 = 120.0;

/// The complementary color: 255 minus each RGB channel.
///
/// This is the channel inverse, independent of HSL — black maps to white
/// and mid-grays map near themselves.
#[inline]
pub fn complementary(color: Rgb) -> Rgb {
    Rgb::new(255 - color.r, 255 - color.g, 255 - color.b)
}

/// Rotate the hue of a color by `angle` degrees, keeping saturation and
/// lightness.
///
/// The angle may be negative or exceed 360; the resulting hue is
/// normalized to a positive value. Analogous (±30°) and triadic
/// (120°/240°) colors are both produced by this one operation.
#[inline]
pub fn rotate_hue(color: Rgb, angle: f32) -> Rgb {
    Rgb::from(Hsl::from(color).with_hue_rotated(angle))
}

/// A fixed-recipe palette of six colors derived from one base color.
///
/// Order: base, complement, analogous(+30°), analogous(−30°),
/// triadic(+120°), triadic(+240°). Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarmonyPalette {
    colors: [Rgb; 6],
}

impl HarmonyPalette {
    /// The palette colors in recipe order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The base color the palette was derived from.
    #[inline]
    pub fn base(&self) -> Rgb {
        self.colors[0]
    }

    /// Canonical HEX strings in recipe order.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

/// Generate the fixed six-color harmony palette for a base color.
///
/// Deterministic: repeated calls with the same base always produce the
/// same palette.
pub fn generate_palette(base: Rgb) -> HarmonyPalette {
    HarmonyPalette {
        colors: [
            base,
            complementary(base),
            rotate_hue(base, ANALOGOUS_ANGLE),
            rotate_hue(base, -ANALOGOUS_ANGLE),
            rotate_hue(base, TRIADIC_ANGLE),
            rotate_hue(base, 2.0 * TRIADIC_ANGLE),
        ],
    }
}
