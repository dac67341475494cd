use crate::core::lyapunov::maps::kinds::MapKind;
use crate::core::lyapunov::rx_sequence::RxSymbol;
use std::error::Error;
use std::fmt;

/// Configuration problems detected at render setup, before any job is
/// enqueued.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnimplementedMap { kind: MapKind },
    UnimplementedSequenceSymbol { symbol: RxSymbol },
    ZeroMaxIterations,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnimplementedMap { kind } => {
                write!(f, "{} is not implemented", kind)
            }
            Self::UnimplementedSequenceSymbol { symbol } => {
                write!(f, "sequence symbol {} is not implemented", symbol)
            }
            Self::ZeroMaxIterations => {
                write!(f, "max iterations must be greater than zero")
            }
        }
    }
}

impl Error for ConfigError {}
