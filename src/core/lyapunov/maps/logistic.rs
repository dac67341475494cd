use crate::core::data::complex::Complex;
use crate::core::lyapunov::maps::kinds::MapKind;
use crate::core::lyapunov::maps::map::ParameterisedMap;

#[derive(Debug, Default, Copy, Clone)]
pub struct LogisticMap;

impl ParameterisedMap for LogisticMap {
    // x -> r·x·(1 - x)
    fn step(&self, x: Complex, r: Complex) -> Complex {
        r * x * (Complex::ONE - x)
    }

    // d/dx = r·(1 - 2x)
    fn derivative(&self, x: Complex, r: Complex) -> Complex {
        r * (Complex::ONE - x * 2.0)
    }

    fn kind(&self) -> MapKind {
        MapKind::Logistic
    }
}
