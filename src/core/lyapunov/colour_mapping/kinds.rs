use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum ColouringMode {
    Binary,
    #[default]
    Linear,
}

impl ColouringMode {
    pub const ALL: &'static [Self] = &[Self::Linear, Self::Binary];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Linear => "linear",
        }
    }
}

impl std::fmt::Display for ColouringMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColouringModeError {
    pub input: String,
}

impl std::fmt::Display for ParseColouringModeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown coloring mode \"{}\"", self.input)
    }
}

impl std::error::Error for ParseColouringModeError {}

impl FromStr for ColouringMode {
    type Err = ParseColouringModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(Self::Binary),
            "linear" => Ok(Self::Linear),
            _ => Err(ParseColouringModeError {
                input: s.to_owned(),
            }),
        }
    }
}
