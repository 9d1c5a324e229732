//! Harmony families beyond the fixed palette recipe.

use std::fmt;
use std::str::FromStr;

use super::{complementary, rotate_hue};
use crate::color::{Hsl, Rgb};

/// Lightness step between rungs of a monochromatic ladder, in percent.
const MONOCHROME_STEP: f32 = 12.5;

/// A color-harmony family expanding one base color into a small set.
///
/// Each mode mirrors one of the classic color-wheel schemes; rotation
/// modes share the [`rotate_hue`] core with per-mode hue offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HarmonyMode {
    /// Base plus its RGB-inverse complement (maximum contrast)
    #[default]
    Complementary,
    /// Base plus rotations of ±150° (softer contrast than complementary)
    SplitComplementary,
    /// Base plus rotations of 120° and 240° (balanced triangle)
    Triadic,
    /// Base plus rotations of ±30° (neighboring hues)
    Analogous,
    /// Base plus two lighter rungs at the same hue
    Monochromatic,
}

impl HarmonyMode {
    /// All supported modes, in display order.
    pub const ALL: [HarmonyMode; 5] = [
        Self::Complementary,
        Self::SplitComplementary,
        Self::Triadic,
        Self::Analogous,
        Self::Monochromatic,
    ];

    /// Hue offsets in degrees for rotation-based modes.
    ///
    /// Empty for modes that do not expand by rotation
    /// (complementary uses the RGB inverse, monochromatic a lightness ladder).
    pub fn offsets(&self) -> &'static [f32] {
        match self {
            Self::Complementary | Self::Monochromatic => &[],
            Self::SplitComplementary => &[150.0, 210.0],
            Self::Triadic => &[120.0, 240.0],
            Self::Analogous => &[30.0, 330.0],
        }
    }

    /// Expand a base color into its harmony set, base first.
    ///
    /// Deterministic; the result length is 2 for complementary and 3 for
    /// every other mode.
    pub fn expand(&self, base: Rgb) -> Vec<Rgb> {
        match self {
            Self::Complementary => vec![base, complementary(base)],
            Self::Monochromatic => {
                let hsl = Hsl::from(base);
                let mut colors = vec![base];
                for step in 1..=2 {
                    let l = (hsl.l + MONOCHROME_STEP * step as f32).min(100.0);
                    colors.push(Rgb::from(Hsl::new(hsl.h, hsl.s, l)));
                }
                colors
            }
            _ => {
                let mut colors = vec![base];
                colors.extend(self.offsets().iter().map(|&a| rotate_hue(base, a)));
                colors
            }
        }
    }

    /// The kebab-case name used in query parameters and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for HarmonyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complementary" => Ok(Self::Complementary),
            "split-complementary" => Ok(Self::SplitComplementary),
            "triadic" => Ok(Self::Triadic),
            "analogous" => Ok(Self::Analogous),
            "monochromatic" => Ok(Self::Monochromatic),
            _ => Err(()),
        }
    }
}
