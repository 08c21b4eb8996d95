//! Crime-level normalization.
//!
//! Maps a raw incident count onto the bounded 0-100 scale used for map
//! coloring: divide by the configured scale, clamp, round half up.

use gbg_map_district_models::config::CRIME_SCALE;
use gbg_map_district_models::{CrimeStatistics, ScoringConfig};

/// Upper bound of the crime-level scale.
pub const MAX_CRIME_LEVEL: u8 = 100;

/// Normalizes a raw incident count with the default scale.
///
/// Absent values (`None`) and `NaN` count as zero. Never fails.
#[must_use]
pub fn crime_level(raw: impl Into<Option<f64>>) -> u8 {
    crime_level_with_scale(raw, CRIME_SCALE)
}

/// Normalizes a raw incident count with an explicit scale.
///
/// The result is always within `0..=100`. Negative input and `-inf` clamp
/// to 0, `+inf` clamps to 100, and a `NaN` quotient (including `0 / 0`)
/// yields 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn crime_level_with_scale(raw: impl Into<Option<f64>>, scale: f64) -> u8 {
    let raw = raw.into().unwrap_or(0.0);
    let scaled = raw / scale;

    if scaled.is_nan() {
        return 0;
    }

    let clamped = scaled.clamp(0.0, f64::from(MAX_CRIME_LEVEL));

    // Non-negative, so `round` (half away from zero) is round-half-up.
    clamped.round() as u8
}

/// Computes the crime level for a crime statistics group.
///
/// Uses [`CrimeStatistics::incident_count`] as the raw input.
#[must_use]
pub fn crime_level_for(crime: &CrimeStatistics, config: &ScoringConfig) -> u8 {
    #[allow(clippy::cast_precision_loss)]
    let count = crime.incident_count() as f64;
    crime_level_with_scale(count, config.crime_scale)
}
