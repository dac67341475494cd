use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Which bifurcation parameter a given iteration step draws from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RxSymbol {
    A,
    B,
    C,
}

impl fmt::Display for RxSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
            Self::C => write!(f, "C"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RxSequenceError {
    Empty,
    UnknownSymbol { symbol: char },
}

impl fmt::Display for RxSequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "rx sequence must contain at least one symbol"),
            Self::UnknownSymbol { symbol } => {
                write!(f, "unknown rx sequence symbol '{}'", symbol)
            }
        }
    }
}

impl Error for RxSequenceError {}

/// Repeating parameter-selection pattern, e.g. "AB".
///
/// Iteration step `i` of the map uses `symbol_at(i)`, wrapping around the
/// sequence indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RxSequence {
    symbols: Vec<RxSymbol>,
}

impl RxSequence {
    pub fn new(symbols: Vec<RxSymbol>) -> Result<Self, RxSequenceError> {
        if symbols.is_empty() {
            return Err(RxSequenceError::Empty);
        }

        Ok(Self { symbols })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false // non-emptiness is enforced by the constructor
    }

    #[must_use]
    pub fn symbol_at(&self, step: usize) -> RxSymbol {
        self.symbols[step % self.symbols.len()]
    }

    #[must_use]
    pub fn contains(&self, symbol: RxSymbol) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for RxSequence {
    fn default() -> Self {
        Self {
            symbols: vec![RxSymbol::A, RxSymbol::B],
        }
    }
}

impl fmt::Display for RxSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl FromStr for RxSequence {
    type Err = RxSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .map(|c| match c {
                'A' => Ok(RxSymbol::A),
                'B' => Ok(RxSymbol::B),
                'C' => Ok(RxSymbol::C),
                _ => Err(RxSequenceError::UnknownSymbol { symbol: c }),
            })
            .collect::<Result<Vec<RxSymbol>, RxSequenceError>>()?;

        Self::new(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_sequence() {
        assert_eq!(RxSequence::new(vec![]), Err(RxSequenceError::Empty));
    }

    #[test]
    fn test_default_sequence_is_ab() {
        let sequence = RxSequence::default();

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.symbol_at(0), RxSymbol::A);
        assert_eq!(sequence.symbol_at(1), RxSymbol::B);
    }

    #[test]
    fn test_symbol_at_wraps_around() {
        let sequence = RxSequence::new(vec![RxSymbol::A, RxSymbol::B, RxSymbol::B]).unwrap();

        assert_eq!(sequence.symbol_at(3), RxSymbol::A);
        assert_eq!(sequence.symbol_at(4), RxSymbol::B);
        assert_eq!(sequence.symbol_at(302), RxSymbol::B);
    }

    #[test]
    fn test_from_str_parses_symbols() {
        let sequence: RxSequence = "ABBA".parse().unwrap();

        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.symbol_at(2), RxSymbol::B);
        assert_eq!(sequence.symbol_at(3), RxSymbol::A);
    }

    #[test]
    fn test_from_str_rejects_unknown_symbols() {
        let result = RxSequence::from_str("AXB");

        assert_eq!(result, Err(RxSequenceError::UnknownSymbol { symbol: 'X' }));
    }

    #[test]
    fn test_from_str_rejects_empty_string() {
        assert_eq!(RxSequence::from_str(""), Err(RxSequenceError::Empty));
    }

    #[test]
    fn test_display_round_trips() {
        let sequence: RxSequence = "ABC".parse().unwrap();

        assert_eq!(sequence.to_string(), "ABC");
        assert!(sequence.contains(RxSymbol::C));
    }
}
