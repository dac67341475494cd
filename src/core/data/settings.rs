use crate::core::data::complex::Complex;
use crate::core::lyapunov::colour_mapping::kinds::ColouringMode;
use crate::core::lyapunov::maps::kinds::MapKind;
use crate::core::lyapunov::rx_sequence::RxSequence;

const DEFAULT_IMAGE_SIDE: usize = 1000;
const DEFAULT_MAX_ITER: usize = 2000;
const DEFAULT_TRANSIENT_ITER: usize = 200;
const DEFAULT_MAX_SECTOR_SIZE: usize = 64;
const DEFAULT_POS_CLAMP: f64 = 10_000.0;
const DEFAULT_NEG_CLAMP: f64 = -10_000.0;

/// Which map is iterated and over which parameter region.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalSettings {
    pub map_kind: MapKind,
    pub x0: Complex,
    pub min_ra: f64,
    pub max_ra: f64,
    pub min_rb: f64,
    pub max_rb: f64,
    pub min_rc: f64,
    pub max_rc: f64,
    pub rx_sequence: RxSequence,
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self {
            map_kind: MapKind::default(),
            x0: Complex::from_real(0.5),
            min_ra: 0.0,
            max_ra: 4.0,
            min_rb: 0.0,
            max_rb: 4.0,
            min_rc: 0.0,
            max_rc: 0.0,
            rx_sequence: RxSequence::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSettings {
    pub width: usize,
    pub height: usize,
    pub name: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_SIDE,
            height: DEFAULT_IMAGE_SIDE,
            name: "fractal".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourSettings {
    pub mode: ColouringMode,
    pub neg_palette_file: String,
    pub pos_palette_file: String,
    pub draw_crosshair: bool,
}

impl Default for ColourSettings {
    fn default() -> Self {
        Self {
            mode: ColouringMode::default(),
            neg_palette_file: "npalette".to_owned(),
            pos_palette_file: "ppalette".to_owned(),
            draw_crosshair: false,
        }
    }
}

/// Iteration counts, work partitioning, clamping and matrix caching knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub max_iter: usize,
    pub transient_iter: usize,
    pub max_sector_size: usize,
    pub threads: usize,

    pub save_exp_matrix: bool,
    pub load_exp_matrix: bool,
    pub skip_coloring: bool,

    pub lower_pos_clamp: f64,
    pub upper_pos_clamp: f64,
    pub lower_neg_clamp: f64,
    pub upper_neg_clamp: f64,

    pub exp_matrix_out_name: String,
    pub exp_matrix_in_name: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            transient_iter: DEFAULT_TRANSIENT_ITER,
            max_sector_size: DEFAULT_MAX_SECTOR_SIZE,
            threads: detected_thread_count(),
            save_exp_matrix: false,
            load_exp_matrix: false,
            skip_coloring: false,
            lower_pos_clamp: 0.0,
            upper_pos_clamp: DEFAULT_POS_CLAMP,
            lower_neg_clamp: DEFAULT_NEG_CLAMP,
            upper_neg_clamp: 0.0,
            exp_matrix_out_name: "exponent_matrix".to_owned(),
            exp_matrix_in_name: "exponent_matrix".to_owned(),
        }
    }
}

/// Detected hardware concurrency, falling back to a single worker when
/// detection fails.
#[must_use]
pub fn detected_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Everything one render needs, constructed once and passed by reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Settings {
    pub fractal: FractalSettings,
    pub image: ImageSettings,
    pub colour: ColourSettings,
    pub render: RenderSettings,
}
