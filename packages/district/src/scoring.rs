//! Presentation-time composites computed from a [`DisplayRecord`].

use gbg_map_district_models::{DisplayRecord, ScoringConfig};

use crate::normalize::MAX_CRIME_LEVEL;

/// Quality-of-life index with the default weights.
#[must_use]
pub fn quality_of_life(record: &DisplayRecord) -> i64 {
    quality_of_life_with(record, &ScoringConfig::default())
}

/// Weighted quality-of-life index, rounded to the nearest integer:
///
/// `w_crime * (100 - crime_level) + w_edu * tertiary_education
///  + w_income * min(median_income / income_reference, 1) * 100`
///
/// The income term is capped at the reference income, so the index stays
/// within 0-100 while `tertiary_education` is a valid percentage.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn quality_of_life_with(record: &DisplayRecord, config: &ScoringConfig) -> i64 {
    let safety = f64::from(MAX_CRIME_LEVEL.saturating_sub(record.crime_level));
    let education = if record.tertiary_education.is_finite() {
        record.tertiary_education
    } else {
        0.0
    };
    let income_ratio = (record.median_income as f64 / config.qol_income_reference).min(1.0);

    let index = config.qol_crime_weight.mul_add(
        safety,
        config
            .qol_education_weight
            .mul_add(education, config.qol_income_weight * income_ratio * 100.0),
    );

    index.round() as i64
}

/// Residents per km², rounded to the nearest integer.
///
/// An unusable area (non-positive or non-finite) is replaced by the
/// configured default area.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn population_density(record: &DisplayRecord, config: &ScoringConfig) -> u64 {
    let area = if record.area.is_finite() && record.area > 0.0 {
        record.area
    } else {
        config.default_area_km2
    };

    (record.population as f64 / area).round() as u64
}

#[cfg(test)]
mod tests {
    use gbg_map_district_models::Coordinate;

    use super::*;

    fn record(crime_level: u8, tertiary_education: f64, median_income: u64) -> DisplayRecord {
        DisplayRecord {
            id: "centrum".to_owned(),
            name: "Centrum".to_owned(),
            crime_level,
            tertiary_education,
            median_income,
            population: 45_000,
            area: 2.1,
            center: Coordinate::new(57.7089, 11.9746),
        }
    }

    #[test]
    fn centrum_index() {
        // 0.4 * 55 + 0.3 * 78 + 0.3 * 84 = 70.6
        assert_eq!(quality_of_life(&record(45, 78.0, 420_000)), 71);
    }

    #[test]
    fn bounds() {
        assert_eq!(quality_of_life(&record(100, 0.0, 0)), 0);
        assert_eq!(quality_of_life(&record(0, 100.0, 500_000)), 100);
    }

    #[test]
    fn income_term_is_capped() {
        let capped = quality_of_life(&record(0, 100.0, 5_000_000));
        assert_eq!(capped, 100);
        assert_eq!(
            quality_of_life(&record(50, 50.0, 1_000_000)),
            quality_of_life(&record(50, 50.0, 500_000))
        );
    }

    #[test]
    fn custom_weights() {
        let config = ScoringConfig {
            qol_crime_weight: 1.0,
            qol_education_weight: 0.0,
            qol_income_weight: 0.0,
            ..ScoringConfig::default()
        };
        assert_eq!(quality_of_life_with(&record(30, 90.0, 1), &config), 70);
    }

    #[test]
    fn density_rounds() {
        let config = ScoringConfig::default();
        // 45000 / 2.1 = 21428.57
        assert_eq!(population_density(&record(0, 0.0, 0), &config), 21_429);
    }

    #[test]
    fn density_with_bad_area_uses_default() {
        let config = ScoringConfig::default();
        let mut r = record(0, 0.0, 0);
        r.area = 0.0;
        assert_eq!(population_density(&r, &config), 45_000);
        r.area = f64::NAN;
        assert_eq!(population_density(&r, &config), 45_000);
    }
}
