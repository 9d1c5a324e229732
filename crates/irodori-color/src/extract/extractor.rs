//! HairExtractor builder -- the ergonomic entry point for extraction.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::classify::{classify, HairColorSet};
use super::filter;
use super::kmeans;

/// Number of clusters used for the hair-extraction use case.
pub const DEFAULT_CLUSTERS: usize = 5;

/// End-to-end hair-color extraction from an RGBA pixel buffer.
///
/// Composes the pipeline stages (hair-band filter, deterministic
/// downsample, k-means clustering, role classification) behind a fluent
/// builder with sensible defaults.
///
/// # Design
///
/// - Configuration methods consume and return `self`
/// - [`extract()`](Self::extract) takes `&self`, so one configured
///   extractor is reusable across images
/// - Without a seed, clustering uses fresh thread-local entropy and the
///   output is run-dependent; with [`seed()`](Self::seed) it is fully
///   reproducible
///
/// # Example
///
/// ```
/// use irodori_color::HairExtractor;
///
/// let rgba = [160u8, 80, 40, 255].repeat(64);
/// let set = HairExtractor::new().clusters(1).seed(1).extract(&rgba);
///
/// assert_eq!(set.base.color.to_hex(), "#a05028");
/// ```
#[derive(Debug, Clone)]
pub struct HairExtractor {
    clusters: usize,
    sample_cap: usize,
    seed: Option<u64>,
}

impl Default for HairExtractor {
    fn default() -> Self {
        Self {
            clusters: DEFAULT_CLUSTERS,
            sample_cap: filter::MAX_SAMPLES,
            seed: None,
        }
    }
}

impl HairExtractor {
    /// Create an extractor with the defaults: 5 clusters, 1000-sample cap,
    /// unseeded clustering.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of clusters (k).
    #[inline]
    pub fn clusters(mut self, k: usize) -> Self {
        self.clusters = k;
        self
    }

    /// Set the cap on filtered samples fed to clustering.
    #[inline]
    pub fn sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    /// Seed the clustering RNG for reproducible output.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run the full pipeline on an interleaved RGBA buffer.
    ///
    /// An image with no hair-like pixels yields the all-black fallback set
    /// rather than an error.
    pub fn extract(&self, rgba: &[u8]) -> HairColorSet {
        let samples = filter::collect_samples(rgba, self.sample_cap);

        let centroids = match self.seed {
            Some(seed) => kmeans::cluster(
                &samples,
                self.clusters,
                &mut StdRng::seed_from_u64(seed),
            ),
            None => kmeans::cluster(&samples, self.clusters, &mut rand::thread_rng()),
        };

        classify(&centroids)
    }
}
