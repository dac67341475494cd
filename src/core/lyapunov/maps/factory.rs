use crate::core::lyapunov::errors::ConfigError;
use crate::core::lyapunov::maps::kinds::MapKind;
use crate::core::lyapunov::maps::logistic::LogisticMap;
use crate::core::lyapunov::maps::map::ParameterisedMap;

/// Resolves a configured map kind to an implementation.
///
/// Only the logistic map exists today; every other kind is a configuration
/// stub and must fail here, at setup, rather than silently aliasing to the
/// logistic map.
pub fn map_factory(kind: MapKind) -> Result<Box<dyn ParameterisedMap>, ConfigError> {
    match kind {
        MapKind::Logistic => Ok(Box::new(LogisticMap)),
        MapKind::Circle | MapKind::Gauss | MapKind::Custom => {
            Err(ConfigError::UnimplementedMap { kind })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_builds_the_logistic_map() {
        let map = map_factory(MapKind::Logistic).unwrap();

        assert_eq!(map.kind(), MapKind::Logistic);
    }

    #[test]
    fn test_factory_rejects_every_unimplemented_kind() {
        for &kind in MapKind::ALL {
            if kind == MapKind::Logistic {
                continue;
            }

            assert_eq!(
                map_factory(kind).map(|m| m.kind()),
                Err(ConfigError::UnimplementedMap { kind })
            );
        }
    }
}
