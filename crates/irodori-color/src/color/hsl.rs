//! Hue / saturation / lightness representation
//!
//! The cylindrical form used for hue rotation, the hair-band pixel filter
//! and brightness sorting. Components are plain sRGB-derived values with no
//! gamma correction.

use super::rgb::Rgb;

/// A color in HSL space.
///
/// - `h`: hue in degrees, [0, 360) after conversion from [`Rgb`]
/// - `s`: saturation in percent, [0, 100]
/// - `l`: lightness in percent, [0, 100]
///
/// Values are not validated at construction; conversions to [`Rgb`]
/// normalize out-of-range components (hue wraps, saturation and lightness
/// clamp), so adversarial inputs degrade instead of failing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    /// Saturation in percent
    pub s: f32,
    /// Lightness in percent
    pub l: f32,
}

impl Hsl {
    /// Create a new HSL color.
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Return the same color with the hue rotated by `angle` degrees.
    ///
    /// The resulting hue is normalized to a positive value in [0, 360).
    #[inline]
    pub fn with_hue_rotated(self, angle: f32) -> Self {
        Self {
            h: (self.h + angle).rem_euclid(360.0),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    /// Convert from RGB using the standard max/min formula.
    ///
    /// Lightness is `(max + min) / 2`; achromatic colors (`max == min`)
    /// report hue 0 and saturation 0; otherwise hue comes from the
    /// channel-specific piecewise formula scaled to degrees.
    fn from(rgb: Rgb) -> Self {
        let r = rgb.r as f32 / 255.0;
        let g = rgb.g as f32 / 255.0;
        let b = rgb.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let mut h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        h *= 60.0;

        Self::new(h, s * 100.0, l * 100.0)
    }
}
