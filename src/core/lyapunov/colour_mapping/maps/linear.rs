use crate::core::actions::exponent_statistics::ExponentStatistics;
use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::data::settings::RenderSettings;
use crate::core::lyapunov::colour_mapping::kinds::ColouringMode;
use crate::core::lyapunov::colour_mapping::map::ExponentColourMap;

/// Palette interpolation over the normalized exponent magnitude.
///
/// Finite exponents are clamped into the configured window for their sign,
/// divided by the normalization factor (the smaller of the observed maximum
/// and the clamp bound) and blended between the two neighbouring palette
/// entries. Non-finite exponents skip normalization and take the palette's
/// last entry by the same sign test binary colouring uses, so NaN lands in
/// the negative branch.
#[derive(Debug)]
pub struct LinearColouring {
    neg_palette: Palette,
    pos_palette: Palette,
    lower_pos_clamp: f64,
    upper_pos_clamp: f64,
    lower_neg_clamp: f64,
    upper_neg_clamp: f64,
    pos_normalization: f64,
    neg_normalization: f64,
}

impl LinearColouring {
    #[must_use]
    pub fn new(
        neg_palette: Palette,
        pos_palette: Palette,
        render: &RenderSettings,
        statistics: &ExponentStatistics,
    ) -> Self {
        // An empty category means no finite exponent of that sign exists, so
        // the factor is never divided through; the clamp bound stands in.
        let pos_normalization = statistics
            .max_finite_positive
            .map_or(render.upper_pos_clamp, |max| max.min(render.upper_pos_clamp));
        let neg_normalization = statistics
            .max_abs_finite_negative
            .map_or(render.lower_neg_clamp, |max| {
                (-max).max(render.lower_neg_clamp)
            });

        Self {
            neg_palette,
            pos_palette,
            lower_pos_clamp: render.lower_pos_clamp,
            upper_pos_clamp: render.upper_pos_clamp,
            lower_neg_clamp: render.lower_neg_clamp,
            upper_neg_clamp: render.upper_neg_clamp,
            pos_normalization,
            neg_normalization,
        }
    }

    fn blend(palette: &Palette, normalized: f64) -> Colour {
        let fractional = normalized * (palette.len() - 1) as f64;
        let lower = fractional.floor() as usize;
        let upper = (fractional.ceil() as usize) % palette.len();

        // An integral fractional index selects one entry outright; the
        // weighted sum below would otherwise cancel to zero.
        if lower == upper {
            return palette.colour(lower);
        }

        let lower_weight = upper as f64 - fractional;
        let upper_weight = fractional - lower as f64;
        let lower_colour = palette.colour(lower);
        let upper_colour = palette.colour(upper);

        let channel = |a: u8, b: u8| -> u8 {
            (f64::from(a) * lower_weight + f64::from(b) * upper_weight).round() as u8
        };

        Colour {
            r: channel(lower_colour.r, upper_colour.r),
            g: channel(lower_colour.g, upper_colour.g),
            b: channel(lower_colour.b, upper_colour.b),
        }
    }
}

impl ExponentColourMap for LinearColouring {
    fn map(&self, exponent: f64) -> Colour {
        if !exponent.is_finite() {
            return if exponent >= 0.0 {
                self.pos_palette.last()
            } else {
                self.neg_palette.last()
            };
        }

        let (palette, clamped, factor) = if exponent < 0.0 {
            (
                &self.neg_palette,
                exponent.max(self.lower_neg_clamp).min(self.upper_neg_clamp),
                self.neg_normalization,
            )
        } else {
            (
                &self.pos_palette,
                exponent.max(self.lower_pos_clamp).min(self.upper_pos_clamp),
                self.pos_normalization,
            )
        };

        let normalized = if clamped == 0.0 || factor == 0.0 {
            0.0
        } else {
            (clamped / factor).clamp(0.0, 1.0)
        };

        Self::blend(palette, normalized)
    }

    fn mode(&self) -> ColouringMode {
        ColouringMode::Linear
    }
}
