//! Hair-band pixel filter and deterministic downsampling
//!
//! A heuristic "looks like a plausible hair color, not skin or background"
//! filter. A pixel is kept when it is saturated enough, neither near-black
//! nor near-white, and its hue falls in one of three accepted bands:
//! warm yellows and oranges, pinks through reds, or blues. The bands are
//! fixed constants, not configuration — the filter is deliberately crude.

use crate::color::{Hsl, Rgb};

/// Minimum saturation (percent, exclusive) for a pixel to count as hair.
pub const MIN_SATURATION: f32 = 10.0;
/// Lightness bounds (percent, both exclusive); rejects near-black and
/// near-white pixels.
pub const LIGHTNESS_RANGE: (f32, f32) = (10.0, 90.0);
/// Accepted hue bands in degrees, inclusive on both ends.
pub const HUE_BANDS: [(f32, f32); 3] = [(0.0, 60.0), (300.0, 360.0), (180.0, 240.0)];
/// Cap on the sample set handed to clustering.
pub const MAX_SAMPLES: usize = 1000;

/// Whether an HSL value passes the hair-band heuristic.
#[inline]
pub fn is_hair_like(hsl: Hsl) -> bool {
    hsl.s > MIN_SATURATION
        && hsl.l > LIGHTNESS_RANGE.0
        && hsl.l < LIGHTNESS_RANGE.1
        && HUE_BANDS
            .iter()
            .any(|&(lo, hi)| (lo..=hi).contains(&hsl.h))
}

/// Scan an interleaved RGBA buffer and collect the hair-like pixels.
///
/// Four bytes per pixel; the alpha byte is ignored. A trailing partial
/// pixel (buffer length not a multiple of 4) is dropped. An empty result
/// is valid and flows through clustering unchanged.
pub fn filter_pixels(rgba: &[u8]) -> Vec<Rgb> {
    rgba.chunks_exact(4)
        .filter_map(|px| {
            let rgb = Rgb::new(px[0], px[1], px[2]);
            is_hair_like(Hsl::from(rgb)).then_some(rgb)
        })
        .collect()
}

/// Bound a sample set by taking every `ceil(N / cap)`-th point by index.
///
/// Selection is index-modulo, not random, so the same input always yields
/// the same sample. Sets at or under the cap pass through untouched.
pub fn downsample(points: Vec<Rgb>, cap: usize) -> Vec<Rgb> {
    if cap == 0 || points.len() <= cap {
        return points;
    }
    let step = points.len().div_ceil(cap);
    points.into_iter().step_by(step).collect()
}

/// Filter an RGBA buffer and cap the result: the full front half of the
/// extraction pipeline.
pub fn collect_samples(rgba: &[u8], cap: usize) -> Vec<Rgb> {
    downsample(filter_pixels(rgba), cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba_of(colors: &[Rgb]) -> Vec<u8> {
        colors
            .iter()
            .flat_map(|c| [c.r, c.g, c.b, 255])
            .collect()
    }

    #[test]
    fn test_warm_band_retained() {
        // h=30, s=50, l=50 sits squarely in the warm band
        assert!(is_hair_like(Hsl::new(30.0, 50.0, 50.0)));
    }

    #[test]
    fn test_green_rejected() {
        // h=100 is outside all three accepted bands
        assert!(!is_hair_like(Hsl::new(100.0, 50.0, 50.0)));
    }

    #[test]
    fn test_band_edges_inclusive() {
        assert!(is_hair_like(Hsl::new(60.0, 50.0, 50.0)));
        assert!(is_hair_like(Hsl::new(300.0, 50.0, 50.0)));
        assert!(is_hair_like(Hsl::new(180.0, 50.0, 50.0)));
        assert!(is_hair_like(Hsl::new(240.0, 50.0, 50.0)));
        assert!(!is_hair_like(Hsl::new(60.1, 50.0, 50.0)));
        assert!(!is_hair_like(Hsl::new(299.9, 50.0, 50.0)));
    }

    #[test]
    fn test_saturation_and_lightness_bounds_strict() {
        assert!(!is_hair_like(Hsl::new(30.0, 10.0, 50.0)));
        assert!(!is_hair_like(Hsl::new(30.0, 50.0, 10.0)));
        assert!(!is_hair_like(Hsl::new(30.0, 50.0, 90.0)));
        assert!(is_hair_like(Hsl::new(30.0, 10.1, 50.0)));
        assert!(is_hair_like(Hsl::new(30.0, 50.0, 89.9)));
    }

    #[test]
    fn test_filter_pixels_mixed_buffer() {
        let auburn = Rgb::new(160, 80, 40); // hair-like
        let gray = Rgb::new(128, 128, 128); // zero saturation
        let green = Rgb::new(60, 200, 60); // wrong hue
        let rgba = rgba_of(&[auburn, gray, green, auburn]);

        assert_eq!(filter_pixels(&rgba), vec![auburn, auburn]);
    }

    #[test]
    fn test_filter_pixels_ignores_alpha_and_tail() {
        let auburn = Rgb::new(160, 80, 40);
        let mut rgba = vec![auburn.r, auburn.g, auburn.b, 0]; // fully transparent
        rgba.extend([1, 2]); // partial trailing pixel

        // alpha is not consulted; the partial pixel is dropped
        assert_eq!(filter_pixels(&rgba), vec![auburn]);
    }

    #[test]
    fn test_filter_pixels_empty_result_is_valid() {
        let rgba = rgba_of(&[Rgb::new(0, 0, 0); 8]);
        assert!(filter_pixels(&rgba).is_empty());
    }

    #[test]
    fn test_downsample_under_cap_untouched() {
        let points: Vec<Rgb> = (0..100).map(|i| Rgb::new(i, 0, 0)).collect();
        assert_eq!(downsample(points.clone(), MAX_SAMPLES), points);
    }

    #[test]
    fn test_downsample_2500_takes_every_third() {
        let points: Vec<Rgb> = (0..2500).map(|i| Rgb::new((i % 256) as u8, 0, 0)).collect();
        let sampled = downsample(points.clone(), MAX_SAMPLES);

        // ceil(2500 / 1000) = 3: indices 0, 3, 6, ...
        assert_eq!(sampled.len(), 834);
        assert!(sampled.len() <= MAX_SAMPLES);
        assert_eq!(sampled[0], points[0]);
        assert_eq!(sampled[1], points[3]);
        assert_eq!(sampled[833], points[2499]);
    }

    #[test]
    fn test_downsample_deterministic() {
        let points: Vec<Rgb> = (0..5000).map(|i| Rgb::new((i % 256) as u8, 7, 7)).collect();
        assert_eq!(
            downsample(points.clone(), MAX_SAMPLES),
            downsample(points, MAX_SAMPLES)
        );
    }
}
