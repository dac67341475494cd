use crate::core::actions::colour_sectors::{ColourSectorsError, colour_exponent_matrix};
use crate::core::actions::compute_exponents::{ComputeExponentsError, compute_exponent_matrix};
use crate::core::actions::draw_crosshair::draw_crosshair;
use crate::core::actions::exponent_statistics::analyze_exponents;
use crate::core::actions::generate_sectors::generate_sectors;
use crate::core::data::palette::Palette;
use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
use crate::core::data::settings::Settings;
use crate::core::lyapunov::algorithm::LyapunovAlgorithm;
use crate::core::lyapunov::colour_mapping::factory::colour_map_factory;
use crate::core::lyapunov::colour_mapping::map::ExponentColourMap;
use crate::core::lyapunov::errors::ConfigError;
use crate::core::lyapunov::maps::factory::map_factory;
use crate::core::threadpool::ThreadPool;
use crate::storage::expbin::{ExpbinError, load_exponent_matrix, save_exponent_matrix};
use log::info;
use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

#[derive(Debug)]
pub enum RenderError {
    Config(ConfigError),
    Compute(ComputeExponentsError),
    Colour(ColourSectorsError),
    PixelGrid(PixelGridError),
    Codec(ExpbinError),
    LoadedMatrixDimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
    SaveVerificationFailed {
        name: String,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {}", err),
            Self::Compute(err) => write!(f, "exponent computation error: {}", err),
            Self::Colour(err) => write!(f, "colouring error: {}", err),
            Self::PixelGrid(err) => write!(f, "pixel grid error: {}", err),
            Self::Codec(err) => write!(f, "exponent matrix codec error: {}", err),
            Self::LoadedMatrixDimensionMismatch {
                expected_width,
                expected_height,
                actual_width,
                actual_height,
            } => {
                write!(
                    f,
                    "loaded exponent matrix is {}x{} but the image is {}x{}",
                    actual_width, actual_height, expected_width, expected_height
                )
            }
            Self::SaveVerificationFailed { name } => {
                write!(
                    f,
                    "saved exponent matrix \"{}\" did not reload equivalently",
                    name
                )
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Compute(err) => Some(err),
            Self::Colour(err) => Some(err),
            Self::PixelGrid(err) => Some(err),
            Self::Codec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for RenderError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ComputeExponentsError> for RenderError {
    fn from(err: ComputeExponentsError) -> Self {
        Self::Compute(err)
    }
}

impl From<ColourSectorsError> for RenderError {
    fn from(err: ColourSectorsError) -> Self {
        Self::Colour(err)
    }
}

impl From<PixelGridError> for RenderError {
    fn from(err: PixelGridError) -> Self {
        Self::PixelGrid(err)
    }
}

impl From<ExpbinError> for RenderError {
    fn from(err: ExpbinError) -> Self {
        Self::Codec(err)
    }
}

fn log_render_info(settings: &Settings) {
    let fractal = &settings.fractal;
    info!("Rendering      : {}", fractal.map_kind);
    info!("Sequence       : {}", fractal.rx_sequence);
    info!(
        "Image size     : {}x{}",
        settings.image.width, settings.image.height
    );
    info!(
        "Sectors up to  : {}x{}",
        settings.render.max_sector_size, settings.render.max_sector_size
    );
    info!("Iterations     : {}", settings.render.max_iter);
    info!("Transient iter.: {}", settings.render.transient_iter);
    info!(
        "Limits of ra   : [{}, {}], span : {}",
        fractal.min_ra,
        fractal.max_ra,
        fractal.max_ra - fractal.min_ra
    );
    info!(
        "Limits of rb   : [{}, {}], span : {}",
        fractal.min_rb,
        fractal.max_rb,
        fractal.max_rb - fractal.min_rb
    );
}

/// Renders one image from scratch (or from a cached exponent matrix).
///
/// The pipeline is two pooled phases with a barrier after each: exponent
/// jobs, then a sequential statistics pass, then colouring jobs, then the
/// crosshair overlay. Configuration problems surface here, before any job
/// is enqueued, and a failed job aborts the whole render.
pub fn render(
    settings: &Settings,
    neg_palette: &Palette,
    pos_palette: &Palette,
) -> Result<PixelGrid, RenderError> {
    let width = settings.image.width;
    let height = settings.image.height;

    // Validate the full configuration up front, even when the computation
    // phase is bypassed by a loaded matrix.
    let map = map_factory(settings.fractal.map_kind)?;
    let algorithm =
        LyapunovAlgorithm::new(map, &settings.fractal, &settings.render, width, height)?;

    log_render_info(settings);

    let sectors = generate_sectors(width, height, settings.render.max_sector_size);
    let workers =
        NonZeroUsize::new(settings.render.threads).unwrap_or(NonZeroUsize::MIN);
    let pool = ThreadPool::new(workers);

    let matrix = if settings.render.load_exp_matrix {
        let loaded = load_exponent_matrix(&settings.render.exp_matrix_in_name)?;
        if loaded.width() != width || loaded.height() != height {
            return Err(RenderError::LoadedMatrixDimensionMismatch {
                expected_width: width,
                expected_height: height,
                actual_width: loaded.width(),
                actual_height: loaded.height(),
            });
        }
        loaded
    } else {
        compute_exponent_matrix(Arc::new(algorithm), &sectors, &pool)?
    };

    let statistics = analyze_exponents(&matrix);

    if settings.render.save_exp_matrix {
        let name = &settings.render.exp_matrix_out_name;
        save_exponent_matrix(&matrix, name)?;
        let reloaded = load_exponent_matrix(name)?;
        if !matrix.equivalent(&reloaded) {
            return Err(RenderError::SaveVerificationFailed { name: name.clone() });
        }
    }

    let mut grid = if settings.render.skip_coloring {
        PixelGrid::new(width, height)?
    } else {
        let mapper: Arc<dyn ExponentColourMap> = Arc::from(colour_map_factory(
            settings.colour.mode,
            neg_palette.clone(),
            pos_palette.clone(),
            &settings.render,
            &statistics,
        ));
        colour_exponent_matrix(Arc::new(matrix), mapper, &sectors, &pool)?
    };

    if settings.colour.draw_crosshair {
        draw_crosshair(&mut grid)?;
    }

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::settings::{
        ColourSettings, FractalSettings, ImageSettings, RenderSettings,
    };
    use crate::core::lyapunov::maps::kinds::MapKind;
    use crate::storage::load_palettes::{DEFAULT_NEG_PALETTE, DEFAULT_POS_PALETTE};

    fn palettes() -> (Palette, Palette) {
        (
            Palette::new(DEFAULT_NEG_PALETTE.to_vec()).unwrap(),
            Palette::new(DEFAULT_POS_PALETTE.to_vec()).unwrap(),
        )
    }

    fn small_settings(width: usize, height: usize) -> Settings {
        Settings {
            fractal: FractalSettings::default(),
            image: ImageSettings {
                width,
                height,
                name: "test".to_owned(),
            },
            colour: ColourSettings::default(),
            render: RenderSettings {
                max_iter: 40,
                transient_iter: 10,
                max_sector_size: 5,
                threads: 2,
                ..RenderSettings::default()
            },
        }
    }

    #[test]
    fn test_render_produces_image_of_requested_size() {
        let (neg, pos) = palettes();
        let settings = small_settings(12, 9);

        let grid = render(&settings, &neg, &pos).unwrap();

        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 9);
    }

    #[test]
    fn test_render_is_deterministic_across_thread_counts() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(16, 11);

        settings.render.threads = 1;
        let single = render(&settings, &neg, &pos).unwrap();

        settings.render.threads = 8;
        let many = render(&settings, &neg, &pos).unwrap();

        assert_eq!(single, many);
    }

    #[test]
    fn test_unimplemented_map_fails_before_rendering() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(8, 8);
        settings.fractal.map_kind = MapKind::Circle;

        let result = render(&settings, &neg, &pos);

        assert!(matches!(
            result,
            Err(RenderError::Config(ConfigError::UnimplementedMap {
                kind: MapKind::Circle
            }))
        ));
    }

    #[test]
    fn test_sequence_symbol_c_fails_before_rendering() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(8, 8);
        settings.fractal.rx_sequence = "AC".parse().unwrap();

        let result = render(&settings, &neg, &pos);

        assert!(matches!(
            result,
            Err(RenderError::Config(
                ConfigError::UnimplementedSequenceSymbol { .. }
            ))
        ));
    }

    #[test]
    fn test_zero_threads_falls_back_to_one_worker() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(6, 6);
        settings.render.threads = 0;

        let grid = render(&settings, &neg, &pos).unwrap();

        assert_eq!(grid.width(), 6);
    }

    #[test]
    fn test_skip_coloring_returns_black_image() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(6, 4);
        settings.render.skip_coloring = true;

        let grid = render(&settings, &neg, &pos).unwrap();

        assert!(grid.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_crosshair_flag_inverts_centre_column() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(7, 7);
        settings.render.skip_coloring = true;
        settings.colour.draw_crosshair = true;

        let grid = render(&settings, &neg, &pos).unwrap();

        // Black canvas: the cross is white except the double-inverted centre
        assert_eq!(
            grid.pixel(3, 0).unwrap(),
            Colour {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(grid.pixel(3, 3).unwrap(), Colour::BLACK);
        assert_eq!(grid.pixel(0, 0).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_save_then_load_bypass_reproduces_the_image() {
        let (neg, pos) = palettes();
        let matrix_name = std::env::temp_dir()
            .join(format!("render_test_cache_{}", std::process::id()))
            .to_string_lossy()
            .into_owned();

        let mut settings = small_settings(10, 8);
        settings.render.save_exp_matrix = true;
        settings.render.exp_matrix_out_name = matrix_name.clone();
        let computed = render(&settings, &neg, &pos).unwrap();

        settings.render.save_exp_matrix = false;
        settings.render.load_exp_matrix = true;
        settings.render.exp_matrix_in_name = matrix_name.clone();
        let reloaded = render(&settings, &neg, &pos).unwrap();

        assert_eq!(computed, reloaded);

        let _ = std::fs::remove_file(format!("{}.expbin", matrix_name));
    }

    #[test]
    fn test_loading_matrix_of_wrong_size_aborts() {
        let (neg, pos) = palettes();
        let matrix_name = std::env::temp_dir()
            .join(format!("render_test_mismatch_{}", std::process::id()))
            .to_string_lossy()
            .into_owned();

        let mut settings = small_settings(10, 8);
        settings.render.save_exp_matrix = true;
        settings.render.exp_matrix_out_name = matrix_name.clone();
        render(&settings, &neg, &pos).unwrap();

        settings.render.save_exp_matrix = false;
        settings.render.load_exp_matrix = true;
        settings.render.exp_matrix_in_name = matrix_name.clone();
        settings.image.width = 11;

        let result = render(&settings, &neg, &pos);

        assert!(matches!(
            result,
            Err(RenderError::LoadedMatrixDimensionMismatch { .. })
        ));

        let _ = std::fs::remove_file(format!("{}.expbin", matrix_name));
    }

    #[test]
    fn test_missing_matrix_file_aborts_the_render() {
        let (neg, pos) = palettes();
        let mut settings = small_settings(6, 6);
        settings.render.load_exp_matrix = true;
        settings.render.exp_matrix_in_name = "no_such_matrix_cache_file".to_owned();

        let result = render(&settings, &neg, &pos);

        assert!(matches!(result, Err(RenderError::Codec(_))));
    }
}
