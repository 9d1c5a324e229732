pub mod hair;
pub mod palette;

pub use hair::{handle_extract, handle_presets, HairColorResponse, PresetsResponse, RoleColorDto};
pub use hair::{__path_handle_extract, __path_handle_presets};
pub use palette::{handle_generate_palette, PaletteResponse, __path_handle_generate_palette};
