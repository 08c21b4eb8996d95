//! Loading and validating [`ScoringConfig`] from TOML.

use gbg_map_district_models::ScoringConfig;

use crate::DistrictError;

/// Parses a scoring config from TOML and validates it.
///
/// Keys that are absent keep their defaults, so an empty string yields
/// [`ScoringConfig::default`].
///
/// # Errors
///
/// * [`DistrictError::Toml`] if the TOML is malformed
/// * [`DistrictError::InvalidConfig`] if a value is out of range
pub fn load_config(toml_str: &str) -> Result<ScoringConfig, DistrictError> {
    let config: ScoringConfig = toml::de::from_str(toml_str)?;
    validate(&config)?;
    log::debug!("Loaded scoring config: {config:?}");
    Ok(config)
}

/// Checks that every value in `config` is usable.
///
/// # Errors
///
/// Returns [`DistrictError::InvalidConfig`] describing the first bad value.
pub fn validate(config: &ScoringConfig) -> Result<(), DistrictError> {
    require_positive("crime_scale", config.crime_scale)?;
    require_positive("default_area_km2", config.default_area_km2)?;
    require_positive("qol_income_reference", config.qol_income_reference)?;

    for (name, weight) in [
        ("qol_crime_weight", config.qol_crime_weight),
        ("qol_education_weight", config.qol_education_weight),
        ("qol_income_weight", config.qol_income_weight),
    ] {
        if !weight.is_finite() {
            return Err(invalid(format!("{name} must be finite, got {weight}")));
        }
    }

    if !config.reference_center.is_finite() {
        return Err(invalid(format!(
            "reference_center must be finite, got {:?}",
            config.reference_center
        )));
    }

    Ok(())
}

fn require_positive(name: &str, value: f64) -> Result<(), DistrictError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a positive number, got {value}")))
    }
}

const fn invalid(message: String) -> DistrictError {
    DistrictError::InvalidConfig { message }
}

#[cfg(test)]
mod tests {
    use gbg_map_district_models::Coordinate;

    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = load_config("").unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = load_config("crime_scale = 20.0\nreference_center = [57.0, 12.0]\n").unwrap();
        assert!((config.crime_scale - 20.0).abs() < f64::EPSILON);
        assert_eq!(config.reference_center, Coordinate::new(57.0, 12.0));
        assert!((config.default_area_km2 - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = load_config("crime_scale = 0.0").unwrap_err();
        assert!(
            matches!(err, DistrictError::InvalidConfig { ref message } if message.contains("crime_scale")),
            "unexpected error: {err}"
        );
        assert!(load_config("default_area_km2 = -1.0").is_err());
        assert!(load_config("qol_income_reference = 0.0").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            load_config("crime_scale = "),
            Err(DistrictError::Toml(_))
        ));
        assert!(matches!(
            load_config("crime_scale = \"ten\""),
            Err(DistrictError::Toml(_))
        ));
    }

    #[test]
    fn rejects_non_finite_weight() {
        let config = ScoringConfig {
            qol_crime_weight: f64::NAN,
            ..ScoringConfig::default()
        };
        assert!(validate(&config).is_err());
    }
}
