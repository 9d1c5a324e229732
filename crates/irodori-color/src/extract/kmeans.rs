//! K-means clustering over RGB color points
//!
//! Plain Lloyd iteration in 8-bit RGB space: seed k centroids by sampling
//! the input, then alternate nearest-centroid assignment and mean updates
//! until every centroid moves less than [`CONVERGENCE_THRESHOLD`] or the
//! round cap is hit. The randomness source is an injected [`Rng`] so
//! callers can choose between reproducible (seeded) and fresh runs.

use rand::Rng;

use crate::color::Rgb;

/// Upper bound on assignment/update rounds.
pub const MAX_ITERATIONS: usize = 100;
/// A round converges when no centroid moves at least this far (Euclidean
/// distance in RGB units).
pub const CONVERGENCE_THRESHOLD: f32 = 1.0;

/// The running mean of a cluster, in 0–255 channel space.
///
/// Kept as floats across iterations; convert with [`Centroid::to_rgb`]
/// (round and clamp) once clustering is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean red channel (0.0..=255.0)
    pub r: f32,
    /// Mean green channel (0.0..=255.0)
    pub g: f32,
    /// Mean blue channel (0.0..=255.0)
    pub b: f32,
}

impl Centroid {
    /// Create a centroid from float channels.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Round and clamp to an 8-bit color.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        Rgb::from_f32(self.r, self.g, self.b)
    }

    /// Euclidean distance to another centroid.
    #[inline]
    pub fn distance(self, other: Centroid) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Squared Euclidean distance to a sample point.
    ///
    /// Squared distances order the same as true distances, which is all
    /// nearest-centroid assignment needs.
    #[inline]
    fn distance_squared_to(self, point: Rgb) -> f32 {
        let dr = self.r - point.r as f32;
        let dg = self.g - point.g as f32;
        let db = self.b - point.b as f32;
        dr * dr + dg * dg + db * db
    }
}

impl From<Rgb> for Centroid {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r as f32, rgb.g as f32, rgb.b as f32)
    }
}

/// Cluster color points into `k` representative centroids.
///
/// - Empty input (or `k == 0`) returns an empty vector immediately.
/// - Seeding draws k points uniformly at random **with replacement**, so
///   duplicate seeds are possible and output depends on `rng`.
/// - Ties in assignment go to the lowest centroid index.
/// - A centroid that ends a round with no assigned points resets to
///   (0, 0, 0) for that round.
///
/// The returned vector always has length `k` for non-empty input.
///
/// # Example
///
/// ```
/// use irodori_color::{cluster, Rgb};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let points = vec![Rgb::new(200, 100, 50); 40];
/// let centroids = cluster(&points, 1, &mut StdRng::seed_from_u64(0));
/// assert_eq!(centroids[0].to_rgb(), Rgb::new(200, 100, 50));
/// ```
pub fn cluster<R: Rng + ?Sized>(points: &[Rgb], k: usize, rng: &mut R) -> Vec<Centroid> {
    if points.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut centroids: Vec<Centroid> = (0..k)
        .map(|_| Centroid::from(points[rng.gen_range(0..points.len())]))
        .collect();

    for _ in 0..MAX_ITERATIONS {
        // Accumulate per-centroid channel sums and counts in one pass.
        let mut sums = vec![(0.0f32, 0.0f32, 0.0f32, 0usize); k];
        for &point in points {
            let mut nearest = 0;
            let mut nearest_dist = f32::INFINITY;
            for (i, centroid) in centroids.iter().enumerate() {
                let dist = centroid.distance_squared_to(point);
                if dist < nearest_dist {
                    nearest_dist = dist;
                    nearest = i;
                }
            }
            let slot = &mut sums[nearest];
            slot.0 += point.r as f32;
            slot.1 += point.g as f32;
            slot.2 += point.b as f32;
            slot.3 += 1;
        }

        let next: Vec<Centroid> = sums
            .iter()
            .map(|&(r, g, b, n)| {
                if n == 0 {
                    // Orphaned centroid: reset to black for this round.
                    Centroid::new(0.0, 0.0, 0.0)
                } else {
                    Centroid::new(r / n as f32, g / n as f32, b / n as f32)
                }
            })
            .collect();

        let converged = centroids
            .iter()
            .zip(&next)
            .all(|(old, new)| old.distance(*new) < CONVERGENCE_THRESHOLD);

        centroids = next;
        if converged {
            break;
        }
    }

    centroids
}
