//! Color types and conversion utilities
//!
//! This module provides the two color representations the rest of the crate
//! works in:
//!
//! - **[`Rgb`]**: 8-bit sRGB channels, the storage and interchange form.
//!   Parses from and formats to 6-digit HEX strings.
//! - **[`Hsl`]**: hue (degrees), saturation and lightness (percent), the
//!   form used for hue rotation, filtering and brightness sorting.
//!
//! HSL is not a bijective re-encoding of RGB: a HEX → HSL → HEX round trip
//! reproduces the original within ±1 per channel due to floating-point
//! rounding in the conversion formulas.
//!
//! # Example
//!
//! ```
//! use irodori_color::{Hsl, Rgb};
//!
//! let color: Rgb = "#336699".parse().unwrap();
//! let hsl = Hsl::from(color);
//! assert!((hsl.h - 210.0).abs() < 0.5);
//!
//! let back = Rgb::from(hsl);
//! assert!((back.r as i16 - color.r as i16).abs() <= 1);
//! ```

mod error;
mod hsl;
mod rgb;

pub use error::ParseColorError;
pub use hsl::Hsl;
pub use rgb::Rgb;

/// Default color substituted when a caller must degrade instead of failing.
///
/// When a HEX string deep in a derived computation turns out to be invalid
/// (for example a user-supplied base color on the palette endpoint), callers
/// that cannot surface an error fall back to this blue instead of crashing.
pub const FALLBACK_COLOR: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

/// Parse a HEX string into HSL.
///
/// Returns `None` for anything [`Rgb::from_str`](std::str::FromStr) rejects;
/// callers that need a value regardless should use [`FALLBACK_COLOR`].
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex.parse::<Rgb>().ok().map(Hsl::from)
}

/// Format an HSL color as a canonical HEX string.
///
/// Out-of-range components are normalized the same way as [`Rgb::from`]:
/// hue wraps modulo 360, saturation and lightness clamp to [0, 100].
pub fn hsl_to_hex(hsl: Hsl) -> String {
    Rgb::from(hsl).to_hex()
}
