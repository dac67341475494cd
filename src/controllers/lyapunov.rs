use std::time::Instant;

use log::info;

use crate::core::actions::render::render;
use crate::input::cli::CliArgs;
use crate::storage::load_palettes::{
    DEFAULT_NEG_PALETTE, DEFAULT_POS_PALETTE, load_palette_or_default,
};
use crate::storage::write_png::write_png;

/// Runs one full render from parsed arguments to a PNG on disk.
pub fn lyapunov_controller(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.into_settings()?;

    let neg_palette = load_palette_or_default(
        &settings.colour.neg_palette_file,
        &DEFAULT_NEG_PALETTE,
        "negative",
    )?;
    let pos_palette = load_palette_or_default(
        &settings.colour.pos_palette_file,
        &DEFAULT_POS_PALETTE,
        "positive",
    )?;

    let start = Instant::now();
    let grid = render(&settings, &neg_palette, &pos_palette)?;
    info!("Render duration: {:?}", start.elapsed());

    let filepath = format!("{}.png", settings.image.name);
    write_png(&grid, &filepath)?;
    info!("Saved to {}", filepath);

    Ok(())
}
