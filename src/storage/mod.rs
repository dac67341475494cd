pub mod expbin;
pub mod load_palettes;
pub mod write_png;
