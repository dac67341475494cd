use crate::core::data::pixel_grid::PixelGrid;
use image::ExtendedColorType;
use std::path::Path;

/// Encodes the pixel grid as a PNG file.
///
/// The grid buffer is already tightly packed RGB8, so it is handed to the
/// encoder as-is.
pub fn write_png(grid: &PixelGrid, filepath: impl AsRef<Path>) -> image::ImageResult<()> {
    image::save_buffer(
        filepath,
        grid.buffer(),
        grid.width() as u32,
        grid.height() as u32,
        ExtendedColorType::Rgb8,
    )
}
