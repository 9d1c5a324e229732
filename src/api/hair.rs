use axum::{
    body::Bytes,
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::models::HairPreset;
use crate::server::AppState;
use irodori_color::{HairColorSet, HairExtractor, RoleColor};

/// Query parameters for hair-color extraction
#[derive(Debug, Deserialize)]
pub struct ExtractQuery {
    /// Number of clusters; defaults to the configured value (normally 5)
    pub k: Option<usize>,
    /// RNG seed for reproducible clustering; omitted means fresh entropy
    pub seed: Option<u64>,
}

/// One extracted color with its brightness-percentile position
#[derive(Debug, Serialize, ToSchema)]
pub struct RoleColorDto {
    /// HEX color for the role
    pub color: String,
    /// Brightness-percentile position as a rounded percentage
    pub percentage: u8,
}

impl From<RoleColor> for RoleColorDto {
    fn from(role: RoleColor) -> Self {
        Self {
            color: role.color.to_hex(),
            percentage: role.percentage,
        }
    }
}

/// Response from the /api/hair/extract endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct HairColorResponse {
    /// Mid-tone body color
    pub base: RoleColorDto,
    /// Lighter shadow level
    pub shadow1: RoleColorDto,
    /// Darker shadow level
    pub shadow2: RoleColorDto,
    /// Brightest extracted color
    pub highlight: RoleColorDto,
    /// Median color, intended for hue-shifted accents
    pub accent: RoleColorDto,
}

impl From<HairColorSet> for HairColorResponse {
    fn from(set: HairColorSet) -> Self {
        Self {
            base: set.base.into(),
            shadow1: set.shadow1.into(),
            shadow2: set.shadow2.into(),
            highlight: set.highlight.into(),
            accent: set.accent.into(),
        }
    }
}

/// Response from the /api/hair/presets endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PresetsResponse {
    /// Preset hair palettes, in display order
    pub presets: Vec<HairPreset>,
}

/// Extract hair colors from an uploaded image
///
/// The request body is the raw image file (PNG, JPEG, ...). Pixels are
/// filtered to hair-like hue/saturation/lightness bands, clustered with
/// k-means, and classified into five roles by brightness percentile.
/// An image with no hair-like pixels returns the all-black fallback set.
#[utoipa::path(
    post,
    path = "/api/hair/extract",
    request_body(content = Vec<u8>, description = "Image file bytes", content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Extracted hair-color roles", body = HairColorResponse),
        (status = 422, description = "Body is not a decodable image"),
    ),
    params(
        ("k" = Option<usize>, Query, description = "Number of clusters (default 5)"),
        ("seed" = Option<u64>, Query, description = "RNG seed for reproducible output"),
    ),
    tag = "Hair"
)]
pub async fn handle_extract(
    State(state): State<AppState>,
    Query(query): Query<ExtractQuery>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let image = image::load_from_memory(&body)?;
    let rgba = image.to_rgba8();

    let defaults = &state.config.extraction;
    let mut extractor = HairExtractor::new()
        .clusters(query.k.unwrap_or(defaults.clusters))
        .sample_cap(defaults.sample_cap);
    if let Some(seed) = query.seed {
        extractor = extractor.seed(seed);
    }

    let set = extractor.extract(rgba.as_raw());

    tracing::info!(
        width = rgba.width(),
        height = rgba.height(),
        k = query.k.unwrap_or(defaults.clusters),
        seeded = query.seed.is_some(),
        "Hair colors extracted"
    );

    Ok(Json(HairColorResponse::from(set)))
}

/// List the preset hair palettes
///
/// Curated swatch sets per hair-color family, as configured on the server.
#[utoipa::path(
    get,
    path = "/api/hair/presets",
    responses(
        (status = 200, description = "Preset hair palettes", body = PresetsResponse),
    ),
    tag = "Hair"
)]
pub async fn handle_presets(State(state): State<AppState>) -> impl IntoResponse {
    Json(PresetsResponse {
        presets: state.config.presets.clone(),
    })
}
