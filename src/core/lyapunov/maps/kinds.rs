use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Default)]
pub enum MapKind {
    #[default]
    Logistic,
    Circle,
    Gauss,
    Custom,
}

impl MapKind {
    pub const ALL: &'static [Self] = &[Self::Logistic, Self::Circle, Self::Gauss, Self::Custom];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Logistic => "logistic map",
            Self::Circle => "circle map",
            Self::Gauss => "Gauss map",
            Self::Custom => "custom map",
        }
    }
}

impl std::fmt::Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMapKindError {
    pub input: String,
}

impl std::fmt::Display for ParseMapKindError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown map type \"{}\"", self.input)
    }
}

impl std::error::Error for ParseMapKindError {}

impl FromStr for MapKind {
    type Err = ParseMapKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logmap" => Ok(Self::Logistic),
            "circmap" => Ok(Self::Circle),
            "gaussmap" => Ok(Self::Gauss),
            "custom" => Ok(Self::Custom),
            _ => Err(ParseMapKindError {
                input: s.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(MapKind::ALL.first(), Some(&MapKind::default()));
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = MapKind::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn test_from_str_accepts_known_names() {
        assert_eq!("logmap".parse(), Ok(MapKind::Logistic));
        assert_eq!("circmap".parse(), Ok(MapKind::Circle));
        assert_eq!("gaussmap".parse(), Ok(MapKind::Gauss));
        assert_eq!("custom".parse(), Ok(MapKind::Custom));
    }

    #[test]
    fn test_from_str_rejects_unknown_names() {
        let result = MapKind::from_str("henon");

        assert_eq!(
            result,
            Err(ParseMapKindError {
                input: "henon".to_owned()
            })
        );
    }
}
