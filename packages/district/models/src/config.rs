//! Named scoring constants and the [`ScoringConfig`] that carries them.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Raw incident count that maps to one crime-level point.
pub const CRIME_SCALE: f64 = 10.0;

/// Area in km² assumed when none is supplied.
pub const DEFAULT_AREA_KM2: f64 = 1.0;

/// Gothenburg's nominal city center, used when a district has no center.
pub const REFERENCE_CENTER: Coordinate = Coordinate::new(57.7089, 11.9746);

/// Weight of the inverted crime level in the quality-of-life index.
pub const QOL_CRIME_WEIGHT: f64 = 0.4;

/// Weight of the tertiary education share in the quality-of-life index.
pub const QOL_EDUCATION_WEIGHT: f64 = 0.3;

/// Weight of the normalized median income in the quality-of-life index.
pub const QOL_INCOME_WEIGHT: f64 = 0.3;

/// Median income (SEK) that scores full marks in the quality-of-life index.
pub const QOL_INCOME_REFERENCE: f64 = 500_000.0;

/// Constants used by the normalizer, formatter, and derived views.
///
/// Every field has a default, so a TOML file may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Divisor applied to the raw incident count.
    pub crime_scale: f64,
    /// Fallback district area in km².
    pub default_area_km2: f64,
    /// Fallback district center.
    pub reference_center: Coordinate,
    pub qol_crime_weight: f64,
    pub qol_education_weight: f64,
    pub qol_income_weight: f64,
    /// Income divisor for the quality-of-life index.
    pub qol_income_reference: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            crime_scale: CRIME_SCALE,
            default_area_km2: DEFAULT_AREA_KM2,
            reference_center: REFERENCE_CENTER,
            qol_crime_weight: QOL_CRIME_WEIGHT,
            qol_education_weight: QOL_EDUCATION_WEIGHT,
            qol_income_weight: QOL_INCOME_WEIGHT,
            qol_income_reference: QOL_INCOME_REFERENCE,
        }
    }
}
