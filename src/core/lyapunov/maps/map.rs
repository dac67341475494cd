use crate::core::data::complex::Complex;
use crate::core::lyapunov::maps::kinds::MapKind;

/// One iterated map together with its derivative.
///
/// `step` advances the orbit by one iteration under parameter `r`;
/// `derivative` evaluates the map's derivative at the same point, which is
/// what the Lyapunov exponent accumulates the log-modulus of.
pub trait ParameterisedMap: Send + Sync {
    fn step(&self, x: Complex, r: Complex) -> Complex;
    fn derivative(&self, x: Complex, r: Complex) -> Complex;
    fn kind(&self) -> MapKind;
}

impl ParameterisedMap for Box<dyn ParameterisedMap> {
    fn step(&self, x: Complex, r: Complex) -> Complex {
        (**self).step(x, r)
    }

    fn derivative(&self, x: Complex, r: Complex) -> Complex {
        (**self).derivative(x, r)
    }

    fn kind(&self) -> MapKind {
        (**self).kind()
    }
}
