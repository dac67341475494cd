use crate::core::data::sector::Sector;

/// Partitions a `width` x `height` pixel grid into disjoint rectangular
/// sectors of at most `max_side` pixels per side.
///
/// Tiles are emitted row-major, top-to-bottom then left-to-right; the last
/// tile of a row or column is clipped to the remaining pixels. The order
/// only matters for progress reporting: sector jobs are independent.
#[must_use]
pub fn generate_sectors(width: usize, height: usize, max_side: usize) -> Vec<Sector> {
    let mut sectors = Vec::new();

    if width == 0 || height == 0 || max_side == 0 {
        return sectors;
    }

    for start_y in (0..height).step_by(max_side) {
        for start_x in (0..width).step_by(max_side) {
            let end_x = (start_x + max_side).min(width);
            let end_y = (start_y + max_side).min(height);

            // Bounds are non-degenerate by construction
            if let Ok(sector) = Sector::new(start_x, start_y, end_x, end_y) {
                sectors.push(sector);
            }
        }
    }

    sectors
}
