use crate::core::actions::exponent_statistics::ExponentStatistics;
use crate::core::data::palette::Palette;
use crate::core::data::settings::RenderSettings;
use crate::core::lyapunov::colour_mapping::kinds::ColouringMode;
use crate::core::lyapunov::colour_mapping::map::ExponentColourMap;
use crate::core::lyapunov::colour_mapping::maps::binary::BinaryColouring;
use crate::core::lyapunov::colour_mapping::maps::linear::LinearColouring;

#[must_use]
pub fn colour_map_factory(
    mode: ColouringMode,
    neg_palette: Palette,
    pos_palette: Palette,
    render: &RenderSettings,
    statistics: &ExponentStatistics,
) -> Box<dyn ExponentColourMap> {
    match mode {
        ColouringMode::Binary => Box::new(BinaryColouring::new(neg_palette, pos_palette)),
        ColouringMode::Linear => Box::new(LinearColouring::new(
            neg_palette,
            pos_palette,
            render,
            statistics,
        )),
    }
}
