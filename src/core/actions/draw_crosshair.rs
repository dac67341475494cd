use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};

/// Inverts a central cross of pixels in place.
///
/// The centre column is `width / 2`; on even widths the column to its left
/// is inverted too, making the line 2 px thick (likewise for rows).
pub fn draw_crosshair(grid: &mut PixelGrid) -> Result<(), PixelGridError> {
    let half_width = grid.width() / 2;
    let even_width = grid.width() % 2 == 0;
    let half_height = grid.height() / 2;
    let even_height = grid.height() % 2 == 0;

    for y in 0..grid.height() {
        grid.invert_pixel(half_width, y)?;
        if even_width {
            grid.invert_pixel(half_width - 1, y)?;
        }
    }

    for x in 0..grid.width() {
        grid.invert_pixel(x, half_height)?;
        if even_height {
            grid.invert_pixel(x, half_height - 1)?;
        }
    }

    Ok(())
}
