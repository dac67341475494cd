use crate::core::data::complex::Complex;
use crate::core::data::settings::{FractalSettings, RenderSettings};
use crate::core::lyapunov::errors::ConfigError;
use crate::core::lyapunov::maps::map::ParameterisedMap;
use crate::core::lyapunov::rx_sequence::{RxSequence, RxSymbol};

/// Maps a pixel index to a parameter value inside `[min, max]`.
///
/// A one-pixel axis has no span to interpolate over and pins the parameter
/// to the lower bound.
fn axis_value(min: f64, max: f64, index: usize, extent: usize) -> f64 {
    if extent == 1 {
        min
    } else {
        min + (max - min) * index as f64 / (extent - 1) as f64
    }
}

/// Per-pixel Lyapunov exponent calculator.
///
/// The orbit starts at the configured seed, runs `transient_iter` steps to
/// shed startup behaviour, then accumulates `ln |map'(orbit)|` over
/// `max_iter` further steps. The parameter used at every step follows the
/// rx sequence: `A` draws from the `ra` range (vertical axis), `B` from the
/// `rb` range (horizontal axis). The resulting time average may be infinite
/// or NaN; those values are stored as-is and classified later.
#[derive(Debug)]
pub struct LyapunovAlgorithm<M: ParameterisedMap> {
    map: M,
    x0: Complex,
    min_ra: f64,
    max_ra: f64,
    min_rb: f64,
    max_rb: f64,
    rx_sequence: RxSequence,
    transient_iter: usize,
    max_iter: usize,
    image_width: usize,
    image_height: usize,
}

impl<M: ParameterisedMap> LyapunovAlgorithm<M> {
    pub fn new(
        map: M,
        fractal: &FractalSettings,
        render: &RenderSettings,
        image_width: usize,
        image_height: usize,
    ) -> Result<Self, ConfigError> {
        if fractal.rx_sequence.contains(RxSymbol::C) {
            return Err(ConfigError::UnimplementedSequenceSymbol {
                symbol: RxSymbol::C,
            });
        }
        if render.max_iter == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            map,
            x0: fractal.x0,
            min_ra: fractal.min_ra,
            max_ra: fractal.max_ra,
            min_rb: fractal.min_rb,
            max_rb: fractal.max_rb,
            rx_sequence: fractal.rx_sequence.clone(),
            transient_iter: render.transient_iter,
            max_iter: render.max_iter,
            image_width,
            image_height,
        })
    }

    #[must_use]
    pub fn image_width(&self) -> usize {
        self.image_width
    }

    #[must_use]
    pub fn image_height(&self) -> usize {
        self.image_height
    }

    fn parameter_at(&self, step: usize, ra: Complex, rb: Complex) -> Complex {
        match self.rx_sequence.symbol_at(step) {
            RxSymbol::A => ra,
            RxSymbol::B => rb,
            // Rejected in the constructor, so this branch is unreachable
            RxSymbol::C => unreachable!("sequence symbol C is rejected at setup"),
        }
    }

    /// Computes the exponent for pixel `(x, y)` of the full image.
    #[must_use]
    pub fn compute(&self, x: usize, y: usize) -> f64 {
        let ra = Complex::from_real(axis_value(
            self.min_ra,
            self.max_ra,
            y,
            self.image_height,
        ));
        let rb = Complex::from_real(axis_value(
            self.min_rb,
            self.max_rb,
            x,
            self.image_width,
        ));

        let mut orbit = self.x0;
        let mut step = 0;

        for _ in 0..self.transient_iter {
            let r = self.parameter_at(step, ra, rb);
            orbit = self.map.step(orbit, r);
            step += 1;
        }

        let mut sum_log = 0.0;
        for _ in 0..self.max_iter {
            let r = self.parameter_at(step, ra, rb);
            sum_log += self.map.derivative(orbit, r).modulus().ln();
            orbit = self.map.step(orbit, r);
            step += 1;
        }

        sum_log / self.max_iter as f64
    }
}
