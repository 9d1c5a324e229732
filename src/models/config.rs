use serde::Deserialize;
use std::path::Path;

use super::presets::{default_presets, HairPreset};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Hair-extraction defaults
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Preset hair palettes served by /api/hair/presets
    #[serde(default = "default_presets")]
    pub presets: Vec<HairPreset>,
}

/// Defaults for the extraction pipeline; per-request query parameters
/// override these.
#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionConfig {
    /// Number of k-means clusters
    #[serde(default = "default_clusters")]
    pub clusters: usize,

    /// Cap on filtered samples fed to clustering
    #[serde(default = "default_sample_cap")]
    pub sample_cap: usize,
}

fn default_clusters() -> usize {
    5
}

fn default_sample_cap() -> usize {
    1000
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            clusters: default_clusters(),
            sample_cap: default_sample_cap(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional YAML file.
    ///
    /// A missing or unparseable file degrades to the built-in defaults
    /// with a logged warning, so the server always comes up.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        presets = config.presets.len(),
                        clusters = config.extraction.clusters,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            presets: default_presets(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.extraction.clusters, 5);
        assert_eq!(config.extraction.sample_cap, 1000);
        assert_eq!(config.presets.len(), 8);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = AppConfig::load(None);
        assert_eq!(config.extraction.clusters, 5);
    }

    #[test]
    fn test_load_missing_file_degrades_to_defaults() {
        let config = AppConfig::load(Some(Path::new("/nonexistent/config.yaml")));
        assert_eq!(config.extraction.clusters, 5);
        assert_eq!(config.presets.len(), 8);
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = "extraction:\n  clusters: 7\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.extraction.clusters, 7);
        // unspecified fields fall back to serde defaults
        assert_eq!(config.extraction.sample_cap, 1000);
        assert_eq!(config.presets.len(), 8);
    }

    #[test]
    fn test_parse_custom_presets() {
        let yaml = r#"
presets:
  - name: Silver
    colors: ["#eeeeee", "#dddddd", "#cccccc", "#bbbbbb", "#aaaaaa", "#999999"]
    description: Cool metallic grey.
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.presets[0].name, "Silver");
    }
}
