use crate::core::data::colour::Colour;
use crate::core::data::exponent_matrix::ExponentMatrix;
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::sector::Sector;
use crate::core::lyapunov::colour_mapping::map::ExponentColourMap;
use crate::core::threadpool::{JobFailed, ThreadPool};
use log::debug;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum ColourSectorsError {
    JobFailed(JobFailed),
    PixelGrid(PixelGridError),
}

impl fmt::Display for ColourSectorsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JobFailed(err) => write!(f, "colouring job failed: {}", err),
            Self::PixelGrid(err) => write!(f, "pixel grid error: {}", err),
        }
    }
}

impl Error for ColourSectorsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::JobFailed(err) => Some(err),
            Self::PixelGrid(err) => Some(err),
        }
    }
}

impl From<PixelGridError> for ColourSectorsError {
    fn from(err: PixelGridError) -> Self {
        Self::PixelGrid(err)
    }
}

/// Colours one sector's cells, row-major within the sector.
#[must_use]
pub fn colour_sector(
    matrix: &ExponentMatrix,
    mapper: &dyn ExponentColourMap,
    sector: Sector,
) -> Vec<Colour> {
    sector
        .coords()
        .map(|(x, y)| mapper.map(matrix.get(x, y)))
        .collect()
}

/// Runs one colouring job per sector on the pool and assembles the image
/// once every job has joined.
pub fn colour_exponent_matrix(
    matrix: Arc<ExponentMatrix>,
    mapper: Arc<dyn ExponentColourMap>,
    sectors: &[Sector],
    pool: &ThreadPool,
) -> Result<PixelGrid, ColourSectorsError> {
    let mut grid = PixelGrid::new(matrix.width(), matrix.height())?;

    let handles: Vec<_> = sectors
        .iter()
        .map(|&sector| {
            let matrix = Arc::clone(&matrix);
            let mapper = Arc::clone(&mapper);
            pool.enqueue(move || colour_sector(matrix.as_ref(), mapper.as_ref(), sector))
        })
        .collect();

    let total = handles.len();
    for (completed, (handle, &sector)) in handles.into_iter().zip(sectors).enumerate() {
        let colours = handle.join().map_err(ColourSectorsError::JobFailed)?;

        for (colour, (x, y)) in colours.into_iter().zip(sector.coords()) {
            grid.set_pixel(x, y, colour)?;
        }
        debug!("Completed sectors (color): {}/{}", completed + 1, total);
    }

    Ok(grid)
}
