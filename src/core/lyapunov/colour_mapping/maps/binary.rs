use crate::core::data::colour::Colour;
use crate::core::data::palette::Palette;
use crate::core::lyapunov::colour_mapping::kinds::ColouringMode;
use crate::core::lyapunov::colour_mapping::map::ExponentColourMap;

/// Two-tone colouring: the sign of the exponent picks a palette, and the
/// palette's last entry is used as-is.
///
/// NaN fails the `>= 0` test and lands in the negative branch, matching the
/// long-standing behaviour of this renderer.
#[derive(Debug)]
pub struct BinaryColouring {
    neg_palette: Palette,
    pos_palette: Palette,
}

impl BinaryColouring {
    #[must_use]
    pub fn new(neg_palette: Palette, pos_palette: Palette) -> Self {
        Self {
            neg_palette,
            pos_palette,
        }
    }
}

impl ExponentColourMap for BinaryColouring {
    fn map(&self, exponent: f64) -> Colour {
        if exponent >= 0.0 {
            self.pos_palette.last()
        } else {
            self.neg_palette.last()
        }
    }

    fn mode(&self) -> ColouringMode {
        ColouringMode::Binary
    }
}
