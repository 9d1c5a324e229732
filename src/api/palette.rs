use axum::{
    extract::Query,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use irodori_color::{generate_palette, HarmonyMode, Rgb, FALLBACK_COLOR};

/// Query parameters for palette generation
#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    /// Base color as a HEX string
    #[serde(rename = "baseColor")]
    pub base_color: Option<String>,
    /// Optional harmony family; omitted means the fixed six-color recipe
    pub mode: Option<String>,
}

/// Response from the /api/palette/generate endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteResponse {
    /// Generated palette as HEX strings, base color first
    pub palette: Vec<String>,
}

/// Generate a color palette from a base color
///
/// Returns a palette derived from `baseColor` by color-harmony rules. The
/// default recipe is six colors: base, complement, analogous ±30°, and the
/// two triadic rotations. Passing `mode` selects a single harmony family
/// instead (complementary, split-complementary, triadic, analogous,
/// monochromatic).
///
/// An unparseable `baseColor` does not fail the request: the palette is
/// generated from the default blue `#3b82f6` instead.
#[utoipa::path(
    get,
    path = "/api/palette/generate",
    responses(
        (status = 200, description = "Generated color palette", body = PaletteResponse),
        (status = 400, description = "Missing baseColor or unknown mode"),
    ),
    params(
        ("baseColor" = String, Query, description = "Base color as HEX, e.g. '#3B82F6'"),
        ("mode" = Option<String>, Query, description = "Harmony family (complementary, split-complementary, triadic, analogous, monochromatic)"),
    ),
    tag = "Palette"
)]
pub async fn handle_generate_palette(
    Query(query): Query<PaletteQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let raw = query
        .base_color
        .ok_or(ApiError::MissingParam("baseColor"))?;

    let base = raw.parse::<Rgb>().unwrap_or_else(|e| {
        tracing::warn!(base_color = %raw, %e, "Invalid base color, using fallback");
        FALLBACK_COLOR
    });

    let palette = match &query.mode {
        None => generate_palette(base).to_hex_strings(),
        Some(mode) => {
            let mode: HarmonyMode = mode
                .parse()
                .map_err(|_| ApiError::UnknownMode(mode.clone()))?;
            mode.expand(base).iter().map(|c| c.to_hex()).collect()
        }
    };

    tracing::debug!(base = %base, colors = palette.len(), "Palette generated");

    Ok(Json(PaletteResponse { palette }))
}
