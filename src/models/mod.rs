pub mod config;
pub mod presets;

pub use config::{AppConfig, ExtractionConfig};
pub use presets::HairPreset;
