//! Built-in hair-color preset palettes.
//!
//! Curated six-color swatch sets per hair-color family, served by the
//! presets endpoint as a starting point for illustrators. Deployments can
//! replace the table from config.yaml.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named hair-color family with its swatch colors.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HairPreset {
    /// Family name, e.g. "Blonde"
    pub name: String,
    /// Six HEX swatch colors, light to dark within the family
    pub colors: Vec<String>,
    /// Short guidance on the impression the family gives
    pub description: String,
}

impl HairPreset {
    fn new(name: &str, colors: [&str; 6], description: &str) -> Self {
        Self {
            name: name.to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            description: description.to_string(),
        }
    }
}

/// The built-in preset table.
pub fn default_presets() -> Vec<HairPreset> {
    vec![
        HairPreset::new(
            "Blonde",
            ["#f4e4bc", "#e6d3a3", "#d4c08a", "#c2ad71", "#b09a58", "#9e873f"],
            "Bright and clean; suits golden-haired characters.",
        ),
        HairPreset::new(
            "Brown",
            ["#8b4513", "#a0522d", "#cd853f", "#d2691e", "#b8860b", "#daa520"],
            "Natural and approachable; works for most characters.",
        ),
        HairPreset::new(
            "Red",
            ["#dc143c", "#b22222", "#cd5c5c", "#f08080", "#fa8072", "#e9967a"],
            "Passionate and eye-catching; suits strong personalities.",
        ),
        HairPreset::new(
            "Black",
            ["#000000", "#1c1c1c", "#2f2f2f", "#404040", "#525252", "#696969"],
            "Mysterious; suits cool, intellectual characters.",
        ),
        HairPreset::new(
            "Pink",
            ["#ffc0cb", "#ffb6c1", "#ff69b4", "#ff1493", "#db7093", "#ffb6c1"],
            "Sweet and dreamlike; suits fantasy characters.",
        ),
        HairPreset::new(
            "Blue",
            ["#87ceeb", "#4682b4", "#1e90ff", "#4169e1", "#0000cd", "#000080"],
            "Calm and intelligent; suits science-fiction characters.",
        ),
        HairPreset::new(
            "Pastel",
            ["#ffe4e1", "#e6e6fa", "#f0f8ff", "#f5f5dc", "#fffacd", "#f0fff0"],
            "Gentle and soft; suits soothing characters.",
        ),
        HairPreset::new(
            "Gradient",
            ["#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd"],
            "Fantastic, striking hair; for special characters.",
        ),
    ]
}
