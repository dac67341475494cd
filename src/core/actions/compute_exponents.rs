use crate::core::data::exponent_matrix::{ExponentMatrix, ExponentMatrixError};
use crate::core::data::sector::Sector;
use crate::core::lyapunov::algorithm::LyapunovAlgorithm;
use crate::core::lyapunov::maps::map::ParameterisedMap;
use crate::core::threadpool::{JobFailed, ThreadPool};
use log::debug;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

#[derive(Debug)]
pub enum ComputeExponentsError {
    JobFailed(JobFailed),
    Matrix(ExponentMatrixError),
}

impl fmt::Display for ComputeExponentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::JobFailed(err) => write!(f, "exponent job failed: {}", err),
            Self::Matrix(err) => write!(f, "exponent matrix error: {}", err),
        }
    }
}

impl Error for ComputeExponentsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::JobFailed(err) => Some(err),
            Self::Matrix(err) => Some(err),
        }
    }
}

impl From<ExponentMatrixError> for ComputeExponentsError {
    fn from(err: ExponentMatrixError) -> Self {
        Self::Matrix(err)
    }
}

/// Computes the exponents of one sector, row-major within the sector.
#[must_use]
pub fn compute_sector_exponents<M: ParameterisedMap>(
    algorithm: &LyapunovAlgorithm<M>,
    sector: Sector,
) -> Vec<f64> {
    sector
        .coords()
        .map(|(x, y)| algorithm.compute(x, y))
        .collect()
}

/// Runs one exponent job per sector on the pool and assembles the full
/// matrix once every job has joined.
///
/// Sectors are disjoint, so each matrix cell is written by exactly one job;
/// a failed job aborts the whole phase.
pub fn compute_exponent_matrix<M: ParameterisedMap + 'static>(
    algorithm: Arc<LyapunovAlgorithm<M>>,
    sectors: &[Sector],
    pool: &ThreadPool,
) -> Result<ExponentMatrix, ComputeExponentsError> {
    let mut matrix = ExponentMatrix::new(algorithm.image_width(), algorithm.image_height())?;

    let handles: Vec<_> = sectors
        .iter()
        .map(|&sector| {
            let algorithm = Arc::clone(&algorithm);
            pool.enqueue(move || compute_sector_exponents(algorithm.as_ref(), sector))
        })
        .collect();

    let total = handles.len();
    for (completed, (handle, &sector)) in handles.into_iter().zip(sectors).enumerate() {
        let values = handle.join().map_err(ComputeExponentsError::JobFailed)?;
        matrix.fill_sector(sector, &values)?;
        debug!("Completed sectors (exp): {}/{}", completed + 1, total);
    }

    Ok(matrix)
}

/// Structured parallel-for alternative to the pool, kept for cross-checking:
/// both strategies must produce bit-identical matrices.
#[allow(dead_code)]
pub fn compute_exponent_matrix_rayon<M: ParameterisedMap + Sync>(
    algorithm: &LyapunovAlgorithm<M>,
    sectors: &[Sector],
) -> Result<ExponentMatrix, ComputeExponentsError> {
    let mut matrix = ExponentMatrix::new(algorithm.image_width(), algorithm.image_height())?;

    let computed: Vec<(Sector, Vec<f64>)> = sectors
        .par_iter()
        .map(|&sector| (sector, compute_sector_exponents(algorithm, sector)))
        .collect();

    for (sector, values) in computed {
        matrix.fill_sector(sector, &values)?;
    }

    Ok(matrix)
}
