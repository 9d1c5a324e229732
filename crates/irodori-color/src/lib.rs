//! irodori-color: color math and hair-color extraction for illustration tools
//!
//! This library provides the deterministic core behind the Irodori palette
//! tools: conversions among HEX, RGB and HSL representations, color-harmony
//! generation from a single base color, and extraction of representative
//! hair colors from raw image pixels via k-means clustering.
//!
//! # Quick Start
//!
//! Generate a harmony palette from a base color:
//!
//! ```
//! use irodori_color::{generate_palette, Rgb};
//!
//! let base: Rgb = "#ff0000".parse().unwrap();
//! let palette = generate_palette(base);
//!
//! assert_eq!(palette.colors().len(), 6);
//! assert_eq!(palette.colors()[1].to_hex(), "#00ffff"); // complement
//! ```
//!
//! Extract hair colors from an RGBA pixel buffer:
//!
//! ```
//! use irodori_color::HairExtractor;
//!
//! // A 2x2 image of a saturated auburn (hair-like) color
//! let rgba = [160u8, 80, 40, 255].repeat(4);
//! let set = HairExtractor::new().clusters(1).seed(7).extract(&rgba);
//!
//! assert_eq!(set.base.color.to_hex(), "#a05028");
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA bytes              (decoded image, 4 bytes per pixel)
//!     |
//!     v
//! hair-band filter         (keep saturated, mid-lightness pixels in
//!     |                     warm / pink-red / blue hue bands)
//!     v
//! index-stride downsample  (cap the sample set at 1000 points)
//!     |
//!     v
//! k-means clustering       (k representative centroids in RGB space,
//!     |                     seedable RNG, 100-round cap)
//!     v
//! role classification      (sort by lightness, assign base / shadows /
//!                           highlight / accent by percentile)
//! ```
//!
//! # Design Notes
//!
//! All operations are synchronous and CPU-bound; there is no I/O in this
//! crate. Malformed input degrades to sentinels or documented fallbacks
//! rather than panicking: invalid HEX parses to [`ParseColorError`],
//! out-of-range HSL components wrap or clamp, and empty sample sets flow
//! through clustering and classification as defined empty/fallback results.
//!
//! Hue/saturation/lightness here are the plain sRGB-derived HSL
//! approximation with no gamma correction; the crate is not a color
//! management system and is not calibrated to any display profile.

pub mod color;
pub mod extract;
pub mod harmony;


pub use color::{hex_to_hsl, hsl_to_hex, Hsl, ParseColorError, Rgb, FALLBACK_COLOR};
pub use extract::{cluster, classify, Centroid, HairColorSet, HairExtractor, RoleColor};
pub use harmony::{complementary, generate_palette, rotate_hue, HarmonyMode, HarmonyPalette};
