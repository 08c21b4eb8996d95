//! Builds flat [`DisplayRecord`]s from identity plus raw statistic groups.
//!
//! Each output field is derived independently and every absent or
//! non-finite input falls back to a documented default, so formatting
//! never fails.

use gbg_map_district_models::{
    Coordinate, DisplayRecord, DistrictEntry, DistrictIdentity, RawDistrictStatistics,
    ScoringConfig,
};
use serde::{Deserialize, Serialize};

use crate::normalize::crime_level_for;

/// Everything the formatter needs for one district.
///
/// Deserializes from a flat object such as
/// `{"id": "centrum", "name": "Centrum", "crime": {...}, "area": 2.1}`;
/// every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistrictInput {
    /// Key and display name.
    #[serde(flatten)]
    pub identity: DistrictIdentity,
    /// Raw statistic groups.
    #[serde(flatten)]
    pub statistics: RawDistrictStatistics,
    /// Land area in km², if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Center coordinate, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Coordinate>,
}

impl DistrictInput {
    /// Creates an input with no area or center.
    #[must_use]
    pub const fn new(identity: DistrictIdentity, statistics: RawDistrictStatistics) -> Self {
        Self {
            identity,
            statistics,
            area: None,
            center: None,
        }
    }

    /// Sets the land area in km².
    #[must_use]
    pub const fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    /// Sets the center coordinate.
    #[must_use]
    pub const fn with_center(mut self, center: Coordinate) -> Self {
        self.center = Some(center);
        self
    }
}

impl From<&DistrictEntry> for DistrictInput {
    fn from(entry: &DistrictEntry) -> Self {
        Self::new(
            DistrictIdentity::new(entry.id.key(), entry.name.clone()),
            entry.statistics.clone(),
        )
        .with_area(entry.area_km2)
        .with_center(entry.center)
    }
}

/// Formats one district with the default [`ScoringConfig`].
#[must_use]
pub fn format_record(input: &DistrictInput) -> DisplayRecord {
    format_record_with(input, &ScoringConfig::default())
}

/// Formats one district.
///
/// * `crime_level`: normalized incident count (see [`crime_level_for`])
/// * `tertiary_education`, `median_income`, `population`: copied from the
///   raw groups, `0` when absent or non-finite
/// * `area`: the given area when finite and positive, otherwise
///   `config.default_area_km2`
/// * `center`: the given center when finite, otherwise
///   `config.reference_center`
#[must_use]
pub fn format_record_with(input: &DistrictInput, config: &ScoringConfig) -> DisplayRecord {
    let stats = &input.statistics;
    let identity = &input.identity;

    let tertiary_education = finite_or_zero(
        stats.education.tertiary_education,
        "tertiary_education",
        &identity.id,
    );

    let area = match input.area {
        Some(area) if area.is_finite() && area > 0.0 => area,
        Some(area) => {
            log::warn!(
                "District '{}' has unusable area {area}; using {}",
                identity.id,
                config.default_area_km2
            );
            config.default_area_km2
        }
        None => config.default_area_km2,
    };

    let center = match input.center {
        Some(center) if center.is_finite() => center,
        Some(center) => {
            log::warn!(
                "District '{}' has non-finite center {center:?}; using reference center",
                identity.id
            );
            config.reference_center
        }
        None => config.reference_center,
    };

    DisplayRecord {
        id: identity.id.clone(),
        name: identity.name.clone(),
        crime_level: crime_level_for(&stats.crime, config),
        tertiary_education,
        median_income: stats.income.median_income,
        population: stats.population.total,
        area,
        center,
    }
}

/// Formats every input in order with the given config.
#[must_use]
pub fn format_all(inputs: &[DistrictInput], config: &ScoringConfig) -> Vec<DisplayRecord> {
    inputs
        .iter()
        .map(|input| format_record_with(input, config))
        .collect()
}

fn finite_or_zero(value: f64, field: &str, id: &str) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("District '{id}' has non-finite {field} ({value}); using 0");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use gbg_map_district_models::{
        CrimeStatistics, District, EducationStatistics, IncomeStatistics, PopulationStatistics,
    };

    use super::*;

    fn centrum_input() -> DistrictInput {
        DistrictInput::new(
            DistrictIdentity::new("centrum", "Centrum"),
            RawDistrictStatistics {
                crime: CrimeStatistics {
                    total_incidents: 450,
                    ..CrimeStatistics::default()
                },
                education: EducationStatistics {
                    tertiary_education: 78.0,
                    ..EducationStatistics::default()
                },
                income: IncomeStatistics {
                    median_income: 420_000,
                    ..IncomeStatistics::default()
                },
                population: PopulationStatistics {
                    total: 45_000,
                    ..PopulationStatistics::default()
                },
                ..RawDistrictStatistics::default()
            },
        )
    }

    #[test]
    fn end_to_end_centrum() {
        let record = format_record(&centrum_input());
        assert_eq!(
            record,
            DisplayRecord {
                id: "centrum".to_owned(),
                name: "Centrum".to_owned(),
                crime_level: 45,
                tertiary_education: 78.0,
                median_income: 420_000,
                population: 45_000,
                area: 1.0,
                center: Coordinate::new(57.7089, 11.9746),
            }
        );
    }

    #[test]
    fn empty_input_gets_defaults() {
        let input: DistrictInput = serde_json::from_str("{}").unwrap();
        let record = format_record(&input);
        assert_eq!(record.id, "");
        assert_eq!(record.name, "");
        assert_eq!(record.crime_level, 0);
        assert!(record.tertiary_education.abs() < f64::EPSILON);
        assert_eq!(record.median_income, 0);
        assert_eq!(record.population, 0);
        assert!((record.area - 1.0).abs() < f64::EPSILON);
        assert_eq!(record.center, Coordinate::new(57.7089, 11.9746));
    }

    #[test]
    fn flat_json_input() {
        let input: DistrictInput = serde_json::from_str(
            r#"{
                "id": "haga",
                "name": "Haga",
                "crime": {"totalIncidents": 350},
                "income": {"medianIncome": 380000},
                "area": 0.8,
                "center": [57.7069, 11.9726]
            }"#,
        )
        .unwrap();
        let record = format_record(&input);
        assert_eq!(record.id, "haga");
        assert_eq!(record.crime_level, 35);
        assert_eq!(record.median_income, 380_000);
        assert!((record.area - 0.8).abs() < f64::EPSILON);
        assert_eq!(record.center, Coordinate::new(57.7069, 11.9726));
    }

    #[test]
    fn unusable_area_and_center_fall_back() {
        let config = ScoringConfig::default();
        for area in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let input = centrum_input().with_area(area);
            let record = format_record_with(&input, &config);
            assert!((record.area - 1.0).abs() < f64::EPSILON, "area {area}");
        }

        let input = centrum_input().with_center(Coordinate::new(f64::NAN, 11.0));
        assert_eq!(format_record(&input).center, config.reference_center);
    }

    #[test]
    fn non_finite_education_is_zero() {
        let mut input = centrum_input();
        input.statistics.education.tertiary_education = f64::NAN;
        assert!(format_record(&input).tertiary_education.abs() < f64::EPSILON);
    }

    #[test]
    fn config_overrides_defaults() {
        let config = ScoringConfig {
            crime_scale: 5.0,
            default_area_km2: 3.5,
            reference_center: Coordinate::new(1.0, 2.0),
            ..ScoringConfig::default()
        };
        let record = format_record_with(&centrum_input(), &config);
        assert_eq!(record.crime_level, 90);
        assert!((record.area - 3.5).abs() < f64::EPSILON);
        assert_eq!(record.center, Coordinate::new(1.0, 2.0));
    }

    #[test]
    fn entry_conversion_keeps_area_and_center() {
        let entry = DistrictEntry {
            id: District::Torslanda,
            name: "Torslanda".to_owned(),
            area_km2: 4.1,
            center: Coordinate::new(57.7249, 11.9586),
            boundary: Vec::new(),
            statistics: RawDistrictStatistics::default(),
        };
        let record = format_record(&DistrictInput::from(&entry));
        assert_eq!(record.id, "torslanda");
        assert!((record.area - 4.1).abs() < f64::EPSILON);
        assert_eq!(record.center, entry.center);
    }

    #[test]
    fn format_all_preserves_order() {
        let inputs = vec![
            DistrictInput::new(District::Angered.identity(), RawDistrictStatistics::default()),
            centrum_input(),
        ];
        let records = format_all(&inputs, &ScoringConfig::default());
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["angered", "centrum"]);
    }
}
