//! Brightness-percentile role classification
//!
//! Maps a converged centroid set to the five semantic slots an illustrator
//! shades hair with: base, two shadow levels, a highlight and an accent.
//! Assignment is purely positional in the lightness sort — no hue logic
//! distinguishes shadow from highlight.

use std::cmp::Ordering;

use super::kmeans::Centroid;
use crate::color::{Hsl, Rgb};

/// Percentile positions (brightest-first) per role.
const BASE_PERCENTILE: f32 = 0.4;
const SHADOW1_PERCENTILE: f32 = 0.7;
const SHADOW2_PERCENTILE: f32 = 0.9;
const HIGHLIGHT_PERCENTILE: f32 = 0.1;
const ACCENT_PERCENTILE: f32 = 0.5;

/// A color assigned to one hair role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColor {
    /// The selected color
    pub color: Rgb,
    /// Position of the selection in the brightness sort, as a rounded
    /// percentage of the centroid count
    pub percentage: u8,
}

/// The five hair-color roles produced by classification.
///
/// Immutable once returned; every field is always populated (empty input
/// yields the all-black fallback).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HairColorSet {
    /// Mid-tone body color
    pub base: RoleColor,
    /// Lighter of the two shadow levels
    pub shadow1: RoleColor,
    /// Darker shadow level
    pub shadow2: RoleColor,
    /// Brightest selection
    pub highlight: RoleColor,
    /// Median selection, intended for hue-shifted accents
    pub accent: RoleColor,
}

impl HairColorSet {
    /// The defined fallback for empty input: black everywhere, 0%.
    pub fn fallback() -> Self {
        let black = RoleColor {
            color: Rgb::new(0, 0, 0),
            percentage: 0,
        };
        Self {
            base: black,
            shadow1: black,
            shadow2: black,
            highlight: black,
            accent: black,
        }
    }
}

/// Assign clustered centroids to the five hair roles.
///
/// Centroids are sorted descending by HSL lightness; each role selects the
/// entry at `floor(N · p)` for its percentile `p`, falling back to index 0
/// when that lands out of bounds. The percentage is `round(index / N · 100)`.
///
/// # Example
///
/// ```
/// use irodori_color::{classify, Centroid, Rgb};
///
/// let set = classify(&[Centroid::new(200.0, 160.0, 120.0)]);
/// assert_eq!(set.base.color, Rgb::new(200, 160, 120));
/// assert_eq!(set.base.percentage, 0);
/// ```
pub fn classify(centroids: &[Centroid]) -> HairColorSet {
    if centroids.is_empty() {
        return HairColorSet::fallback();
    }

    let mut by_lightness: Vec<(Rgb, f32)> = centroids
        .iter()
        .map(|c| {
            let rgb = c.to_rgb();
            (rgb, Hsl::from(rgb).l)
        })
        .collect();
    by_lightness
        .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let pick = |percentile: f32| -> RoleColor {
        let n = by_lightness.len();
        let mut index = (n as f32 * percentile).floor() as usize;
        if index >= n {
            index = 0;
        }
        RoleColor {
            color: by_lightness[index].0,
            percentage: (index as f32 / n as f32 * 100.0).round() as u8,
        }
    };

    HairColorSet {
        base: pick(BASE_PERCENTILE),
        shadow1: pick(SHADOW1_PERCENTILE),
        shadow2: pick(SHADOW2_PERCENTILE),
        highlight: pick(HIGHLIGHT_PERCENTILE),
        accent: pick(ACCENT_PERCENTILE),
    }
}
