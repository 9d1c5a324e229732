//! Hair-color extraction pipeline
//!
//! Turns a decoded RGBA pixel buffer into five named hair-color roles:
//!
//! 1. [`filter`] keeps pixels whose HSL falls in hair-like bands and caps
//!    the sample set with a deterministic index stride.
//! 2. [`kmeans`] clusters the samples into k representative centroids.
//! 3. [`classify`] sorts centroids by lightness and assigns them to roles
//!    by percentile position.
//!
//! [`HairExtractor`] is the recommended entry point tying the stages
//! together with sensible defaults.

pub mod classify;
pub mod extractor;
pub mod filter;
pub mod kmeans;

pub use classify::{classify, HairColorSet, RoleColor};
pub use extractor::HairExtractor;
pub use kmeans::{cluster, Centroid};
