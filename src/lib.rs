mod controllers;
mod core;
mod input;
mod storage;

pub use controllers::lyapunov::lyapunov_controller;
pub use input::cli::CliArgs;

pub use self::core::actions::compute_exponents::compute_sector_exponents;
pub use self::core::actions::generate_sectors::generate_sectors;
pub use self::core::actions::render::{RenderError, render};
pub use self::core::data::colour::Colour;
pub use self::core::data::exponent_matrix::ExponentMatrix;
pub use self::core::data::palette::Palette;
pub use self::core::data::pixel_grid::PixelGrid;
pub use self::core::data::sector::Sector;
pub use self::core::data::settings::{
    ColourSettings, FractalSettings, ImageSettings, RenderSettings, Settings,
};
pub use self::core::lyapunov::algorithm::LyapunovAlgorithm;
pub use self::core::lyapunov::maps::logistic::LogisticMap;
pub use storage::expbin::{load_exponent_matrix, save_exponent_matrix};
pub use storage::write_png::write_png;
