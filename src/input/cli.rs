use crate::core::data::complex::Complex;
use crate::core::data::settings::{
    ColourSettings, FractalSettings, ImageSettings, RenderSettings, Settings,
    detected_thread_count,
};
use crate::core::lyapunov::colour_mapping::kinds::{ColouringMode, ParseColouringModeError};
use crate::core::lyapunov::maps::kinds::{MapKind, ParseMapKindError};
use crate::core::lyapunov::rx_sequence::{RxSequence, RxSequenceError};
use clap::Parser;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    Map(ParseMapKindError),
    Sequence(RxSequenceError),
    Coloring(ParseColouringModeError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(err) => write!(f, "{}", err),
            Self::Sequence(err) => write!(f, "{}", err),
            Self::Coloring(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Map(err) => Some(err),
            Self::Sequence(err) => Some(err),
            Self::Coloring(err) => Some(err),
        }
    }
}

impl From<ParseMapKindError> for CliError {
    fn from(err: ParseMapKindError) -> Self {
        Self::Map(err)
    }
}

impl From<RxSequenceError> for CliError {
    fn from(err: RxSequenceError) -> Self {
        Self::Sequence(err)
    }
}

impl From<ParseColouringModeError> for CliError {
    fn from(err: ParseColouringModeError) -> Self {
        Self::Coloring(err)
    }
}

/// Command line surface of the renderer.
#[derive(Debug, Parser)]
#[command(
    name = "lyapunov_explorer",
    about = "Lyapunov-exponent fractal renderer",
    version
)]
pub struct CliArgs {
    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = 1000)]
    pub width: usize,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 1000)]
    pub height: usize,

    /// Output image name, written as <name>.png
    #[arg(short = 'o', long, default_value = "fractal")]
    pub output: String,

    /// Map to iterate: logmap, circmap, gaussmap or custom
    #[arg(long, default_value = "logmap")]
    pub map: String,

    /// Repeating parameter-selection sequence, e.g. AB
    #[arg(short = 's', long, default_value = "AB")]
    pub sequence: String,

    /// Real part of the orbit seed
    #[arg(long, default_value_t = 0.5)]
    pub x0_real: f64,

    /// Imaginary part of the orbit seed
    #[arg(long, default_value_t = 0.0)]
    pub x0_imag: f64,

    #[arg(long, default_value_t = 0.0)]
    pub min_ra: f64,

    #[arg(long, default_value_t = 4.0)]
    pub max_ra: f64,

    #[arg(long, default_value_t = 0.0)]
    pub min_rb: f64,

    #[arg(long, default_value_t = 4.0)]
    pub max_rb: f64,

    #[arg(long, default_value_t = 0.0)]
    pub min_rc: f64,

    #[arg(long, default_value_t = 0.0)]
    pub max_rc: f64,

    /// Measured iterations per pixel
    #[arg(short = 'i', long, default_value_t = 2000)]
    pub max_iter: usize,

    /// Discarded startup iterations per pixel
    #[arg(long, default_value_t = 200)]
    pub transient_iter: usize,

    /// Maximum sector side length in pixels
    #[arg(long, default_value_t = 64)]
    pub sector_size: usize,

    /// Worker threads; defaults to the detected hardware concurrency
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Coloring mode: binary or linear
    #[arg(short = 'c', long, default_value = "linear")]
    pub coloring: String,

    /// Negative palette file
    #[arg(long, default_value = "npalette")]
    pub neg_palette: String,

    /// Positive palette file
    #[arg(long, default_value = "ppalette")]
    pub pos_palette: String,

    /// Invert a central cross of pixels
    #[arg(long)]
    pub crosshair: bool,

    #[arg(long, default_value_t = 0.0)]
    pub lower_pos_clamp: f64,

    #[arg(long, default_value_t = 10000.0)]
    pub upper_pos_clamp: f64,

    #[arg(long, default_value_t = -10000.0)]
    pub lower_neg_clamp: f64,

    #[arg(long, default_value_t = 0.0)]
    pub upper_neg_clamp: f64,

    /// Save the exponent matrix as <name>.expbin after computing
    #[arg(long)]
    pub save_matrix: bool,

    /// Load the exponent matrix from <name>.expbin instead of computing
    #[arg(long)]
    pub load_matrix: bool,

    /// Stop after statistics (and an optional matrix save)
    #[arg(long)]
    pub skip_coloring: bool,

    /// Exponent matrix name to save to
    #[arg(long, default_value = "exponent_matrix")]
    pub matrix_out: String,

    /// Exponent matrix name to load from
    #[arg(long, default_value = "exponent_matrix")]
    pub matrix_in: String,

    /// Print render progress and statistics
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Converts the raw arguments into validated, immutable settings.
    pub fn into_settings(self) -> Result<Settings, CliError> {
        let map_kind: MapKind = self.map.parse()?;
        let rx_sequence: RxSequence = self.sequence.parse()?;
        let mode: ColouringMode = self.coloring.parse()?;

        Ok(Settings {
            fractal: FractalSettings {
                map_kind,
                x0: Complex {
                    real: self.x0_real,
                    imag: self.x0_imag,
                },
                min_ra: self.min_ra,
                max_ra: self.max_ra,
                min_rb: self.min_rb,
                max_rb: self.max_rb,
                min_rc: self.min_rc,
                max_rc: self.max_rc,
                rx_sequence,
            },
            image: ImageSettings {
                width: self.width,
                height: self.height,
                name: self.output,
            },
            colour: ColourSettings {
                mode,
                neg_palette_file: self.neg_palette,
                pos_palette_file: self.pos_palette,
                draw_crosshair: self.crosshair,
            },
            render: RenderSettings {
                max_iter: self.max_iter,
                transient_iter: self.transient_iter,
                max_sector_size: self.sector_size,
                threads: self.threads.unwrap_or_else(detected_thread_count),
                save_exp_matrix: self.save_matrix,
                load_exp_matrix: self.load_matrix,
                skip_coloring: self.skip_coloring,
                lower_pos_clamp: self.lower_pos_clamp,
                upper_pos_clamp: self.upper_pos_clamp,
                lower_neg_clamp: self.lower_neg_clamp,
                upper_neg_clamp: self.upper_neg_clamp,
                exp_matrix_out_name: self.matrix_out,
                exp_matrix_in_name: self.matrix_in,
            },
        })
    }
}
