use crate::core::data::exponent_matrix::{ExponentMatrix, ExponentMatrixError};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Exponent matrix files carry this extension.
pub const EXPBIN_EXTENSION: &str = "expbin";

/// Three u64 fields: row count, column count, element size.
const HEADER_BYTES: u64 = 24;
const ELEMENT_BYTES: u64 = std::mem::size_of::<f64>() as u64;

#[derive(Debug)]
pub enum ExpbinError {
    Create { path: PathBuf, source: std::io::Error },
    Write { path: PathBuf, source: std::io::Error },
    Open { path: PathBuf, source: std::io::Error },
    Read { path: PathBuf, source: std::io::Error },
    ShortHeader { path: PathBuf, file_size: u64 },
    SizeMismatch { path: PathBuf, expected: u64, actual: u64 },
    UnsupportedElementSize { path: PathBuf, element_size: u64 },
    EmptyMatrix { path: PathBuf, rows: u64, cols: u64 },
    Matrix(ExponentMatrixError),
}

impl fmt::Display for ExpbinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { path, source } => {
                write!(
                    f,
                    "couldn't open exponent matrix file {} for saving: {}",
                    path.display(),
                    source
                )
            }
            Self::Write { path, source } => {
                write!(
                    f,
                    "couldn't write exponent matrix file {}: {}",
                    path.display(),
                    source
                )
            }
            Self::Open { path, source } => {
                write!(
                    f,
                    "couldn't open exponent matrix file {} for loading: {}",
                    path.display(),
                    source
                )
            }
            Self::Read { path, source } => {
                write!(
                    f,
                    "couldn't read exponent matrix file {}: {}",
                    path.display(),
                    source
                )
            }
            Self::ShortHeader { path, file_size } => {
                write!(
                    f,
                    "couldn't load header from exponent matrix file {} ({} bytes)",
                    path.display(),
                    file_size
                )
            }
            Self::SizeMismatch {
                path,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "exponent matrix file {} has invalid size: expected {} bytes, found {}",
                    path.display(),
                    expected,
                    actual
                )
            }
            Self::UnsupportedElementSize { path, element_size } => {
                write!(
                    f,
                    "exponent matrix file {} uses unsupported element size {}",
                    path.display(),
                    element_size
                )
            }
            Self::EmptyMatrix { path, rows, cols } => {
                write!(
                    f,
                    "exponent matrix file {} declares an empty {}x{} matrix",
                    path.display(),
                    rows,
                    cols
                )
            }
            Self::Matrix(err) => write!(f, "exponent matrix error: {}", err),
        }
    }
}

impl Error for ExpbinError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Create { source, .. }
            | Self::Write { source, .. }
            | Self::Open { source, .. }
            | Self::Read { source, .. } => Some(source),
            Self::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExponentMatrixError> for ExpbinError {
    fn from(err: ExponentMatrixError) -> Self {
        Self::Matrix(err)
    }
}

#[must_use]
pub fn expbin_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.{}", name, EXPBIN_EXTENSION))
}

/// Saves a matrix as `<name>.expbin`.
///
/// Layout: `[rows: u64][cols: u64][element size: u64]` followed by the cells
/// row-major, all in native byte order with the native f64 encoding.
pub fn save_exponent_matrix(matrix: &ExponentMatrix, name: &str) -> Result<(), ExpbinError> {
    let path = expbin_path(name);
    save_to_path(matrix, &path)
}

fn save_to_path(matrix: &ExponentMatrix, path: &Path) -> Result<(), ExpbinError> {
    let file = File::create(path).map_err(|source| ExpbinError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    let write_failed = |source| ExpbinError::Write {
        path: path.to_path_buf(),
        source,
    };

    writer
        .write_all(&(matrix.height() as u64).to_ne_bytes())
        .map_err(write_failed)?;
    writer
        .write_all(&(matrix.width() as u64).to_ne_bytes())
        .map_err(write_failed)?;
    writer
        .write_all(&ELEMENT_BYTES.to_ne_bytes())
        .map_err(write_failed)?;

    for cell in matrix.cells() {
        writer.write_all(&cell.to_ne_bytes()).map_err(write_failed)?;
    }

    writer.flush().map_err(write_failed)
}

/// Loads a matrix from `<name>.expbin`, verifying the file size against the
/// header before reading any cell.
pub fn load_exponent_matrix(name: &str) -> Result<ExponentMatrix, ExpbinError> {
    let path = expbin_path(name);
    load_from_path(&path)
}

fn load_from_path(path: &Path) -> Result<ExponentMatrix, ExpbinError> {
    let file = File::open(path).map_err(|source| ExpbinError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file_size = file
        .metadata()
        .map_err(|source| ExpbinError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    if file_size < HEADER_BYTES {
        return Err(ExpbinError::ShortHeader {
            path: path.to_path_buf(),
            file_size,
        });
    }

    let mut reader = BufReader::new(file);
    let read_failed = |source| ExpbinError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut field = [0u8; 8];
    reader.read_exact(&mut field).map_err(read_failed)?;
    let rows = u64::from_ne_bytes(field);
    reader.read_exact(&mut field).map_err(read_failed)?;
    let cols = u64::from_ne_bytes(field);
    reader.read_exact(&mut field).map_err(read_failed)?;
    let element_size = u64::from_ne_bytes(field);

    if element_size != ELEMENT_BYTES {
        return Err(ExpbinError::UnsupportedElementSize {
            path: path.to_path_buf(),
            element_size,
        });
    }
    if rows == 0 || cols == 0 {
        return Err(ExpbinError::EmptyMatrix {
            path: path.to_path_buf(),
            rows,
            cols,
        });
    }

    // Checked math: a corrupt header must fail the size test, not overflow
    let expected = rows
        .checked_mul(cols)
        .and_then(|cells| cells.checked_mul(element_size))
        .and_then(|body| body.checked_add(HEADER_BYTES));
    if expected != Some(file_size) {
        return Err(ExpbinError::SizeMismatch {
            path: path.to_path_buf(),
            expected: expected.unwrap_or(u64::MAX),
            actual: file_size,
        });
    }

    let cell_count = (rows * cols) as usize;
    let mut cells = Vec::with_capacity(cell_count);
    for _ in 0..cell_count {
        reader.read_exact(&mut field).map_err(read_failed)?;
        cells.push(f64::from_ne_bytes(field));
    }

    Ok(ExponentMatrix::from_cells(cols as usize, rows as usize, cells)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    struct TempName {
        name: String,
    }

    impl TempName {
        fn new(tag: &str) -> Self {
            let name = std::env::temp_dir()
                .join(format!("expbin_test_{}_{}", tag, std::process::id()))
                .to_string_lossy()
                .into_owned();
            Self { name }
        }

        fn path(&self) -> PathBuf {
            expbin_path(&self.name)
        }
    }

    impl Drop for TempName {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(self.path());
        }
    }

    #[test]
    fn test_round_trip_preserves_finite_values_exactly() {
        let temp = TempName::new("round_trip");
        let matrix = ExponentMatrix::from_cells(
            3,
            2,
            vec![0.0, -1.5, 3.25, f64::MIN_POSITIVE, 1.0e300, -7.125],
        )
        .unwrap();

        save_exponent_matrix(&matrix, &temp.name).unwrap();
        let loaded = load_exponent_matrix(&temp.name).unwrap();

        assert_eq!(loaded.width(), 3);
        assert_eq!(loaded.height(), 2);
        for (a, b) in matrix.cells().iter().zip(loaded.cells()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_round_trip_preserves_non_finite_values() {
        let temp = TempName::new("non_finite");
        let matrix = ExponentMatrix::from_cells(
            2,
            2,
            vec![f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 0.5],
        )
        .unwrap();

        save_exponent_matrix(&matrix, &temp.name).unwrap();
        let loaded = load_exponent_matrix(&temp.name).unwrap();

        assert!(matrix.equivalent(&loaded));
    }

    #[test]
    fn test_file_size_matches_header_plus_cells() {
        let temp = TempName::new("file_size");
        let matrix = ExponentMatrix::new(5, 3).unwrap();

        save_exponent_matrix(&matrix, &temp.name).unwrap();

        let file_size = std::fs::metadata(temp.path()).unwrap().len();
        assert_eq!(file_size, 24 + 15 * 8);
    }

    #[test]
    fn test_missing_file_reports_open_failure() {
        let result = load_exponent_matrix("definitely_not_here_expbin_test");

        assert!(matches!(result, Err(ExpbinError::Open { .. })));
    }

    #[test]
    fn test_short_header_is_rejected() {
        let temp = TempName::new("short_header");
        std::fs::write(temp.path(), [0u8; 10]).unwrap();

        let result = load_exponent_matrix(&temp.name);

        assert!(matches!(
            result,
            Err(ExpbinError::ShortHeader { file_size: 10, .. })
        ));
    }

    #[test]
    fn test_truncated_body_is_rejected() {
        let temp = TempName::new("truncated");
        let matrix = ExponentMatrix::new(4, 4).unwrap();
        save_exponent_matrix(&matrix, &temp.name).unwrap();

        // Drop the last cell
        let bytes = std::fs::read(temp.path()).unwrap();
        std::fs::write(temp.path(), &bytes[..bytes.len() - 8]).unwrap();

        let result = load_exponent_matrix(&temp.name);

        assert!(matches!(result, Err(ExpbinError::SizeMismatch { .. })));
    }

    #[test]
    fn test_zero_dimension_header_is_rejected() {
        let temp = TempName::new("zero_rows");
        let mut file = std::fs::File::create(temp.path()).unwrap();
        file.write_all(&0u64.to_ne_bytes()).unwrap();
        file.write_all(&4u64.to_ne_bytes()).unwrap();
        file.write_all(&8u64.to_ne_bytes()).unwrap();
        drop(file);

        let result = load_exponent_matrix(&temp.name);

        assert!(matches!(
            result,
            Err(ExpbinError::EmptyMatrix { rows: 0, cols: 4, .. })
        ));
    }

    #[test]
    fn test_foreign_element_size_is_rejected() {
        let temp = TempName::new("element_size");
        let mut file = std::fs::File::create(temp.path()).unwrap();
        file.write_all(&1u64.to_ne_bytes()).unwrap();
        file.write_all(&1u64.to_ne_bytes()).unwrap();
        file.write_all(&16u64.to_ne_bytes()).unwrap();
        file.write_all(&[0u8; 16]).unwrap();
        drop(file);

        let result = load_exponent_matrix(&temp.name);

        assert!(matches!(
            result,
            Err(ExpbinError::UnsupportedElementSize {
                element_size: 16,
                ..
            })
        ));
    }

    #[test]
    fn test_unwritable_target_reports_create_failure() {
        let matrix = ExponentMatrix::new(2, 2).unwrap();

        let result = save_exponent_matrix(&matrix, "no_such_directory/at_all/matrix");

        assert!(matches!(result, Err(ExpbinError::Create { .. })));
    }
}
