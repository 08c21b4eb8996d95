//! Sidebar view of a single district.
//!
//! Bundles a [`DisplayRecord`] with everything the side panel derives from
//! it: density, quality-of-life index, crime band, and a per-type crime
//! chart.

use std::fmt;

use gbg_map_district_models::{CrimeTypeCount, DisplayRecord, ScoringConfig};
use serde::Serialize;

use crate::DistrictError;
use crate::format::{DistrictInput, format_record_with};
use crate::palette::{CrimeLevelBand, fill_color};
use crate::registry;
use crate::scoring::{population_density, quality_of_life_with};

/// One bar in the crime breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBar {
    /// Crime type label.
    pub label: String,
    /// Incident count.
    pub value: u64,
    /// Bar height relative to the tallest bar, 0-100.
    pub height_percent: f64,
}

/// Everything the sidebar shows for one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictProfile {
    pub record: DisplayRecord,
    /// Residents per km².
    pub density: u64,
    pub quality_of_life: i64,
    pub band: CrimeLevelBand,
    /// Interpolated map fill color for the crime level.
    pub fill_color: String,
    pub crime_chart: Vec<ChartBar>,
}

/// Builds chart bars scaled against the largest count.
///
/// An all-zero breakdown produces zero-height bars.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn crime_chart(breakdown: &[CrimeTypeCount]) -> Vec<ChartBar> {
    let max = breakdown.iter().map(|c| c.count).max().unwrap_or(0).max(1);

    breakdown
        .iter()
        .map(|c| ChartBar {
            label: c.crime_type.clone(),
            value: c.count,
            height_percent: c.count as f64 / max as f64 * 100.0,
        })
        .collect()
}

/// Derives the sidebar profile for a formatted record.
#[must_use]
pub fn build_profile(
    record: DisplayRecord,
    breakdown: &[CrimeTypeCount],
    config: &ScoringConfig,
) -> DistrictProfile {
    DistrictProfile {
        density: population_density(&record, config),
        quality_of_life: quality_of_life_with(&record, config),
        band: CrimeLevelBand::from_level(record.crime_level),
        fill_color: fill_color(record.crime_level),
        crime_chart: crime_chart(breakdown),
        record,
    }
}

/// Builds the profile of a district from the static table.
///
/// # Errors
///
/// Returns [`DistrictError::UnknownDistrict`] if `key` is not a known
/// district key.
pub fn static_profile(key: &str, config: &ScoringConfig) -> Result<DistrictProfile, DistrictError> {
    let entry = registry::find(key)?;
    let record = format_record_with(&DistrictInput::from(entry), config);
    Ok(build_profile(
        record,
        &entry.statistics.crime.by_type,
        config,
    ))
}

/// Formats an integer with Swedish digit grouping (`45000` -> `45 000`).
///
/// Groups are separated by a no-break space (U+00A0).
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * 2);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{a0}');
        }
        out.push(ch);
    }

    out
}

impl fmt::Display for DistrictProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        writeln!(f, "{}", r.name)?;
        writeln!(
            f,
            "  Crime level:       {}/100 ({})",
            r.crime_level, self.band
        )?;
        for bar in &self.crime_chart {
            writeln!(f, "    {:<12} {}", bar.label, format_number(bar.value))?;
        }
        writeln!(f, "  Tertiary educ.:    {}%", r.tertiary_education)?;
        writeln!(
            f,
            "  Median income:     {} SEK",
            format_number(r.median_income)
        )?;
        writeln!(f, "  Population:        {}", format_number(r.population))?;
        writeln!(f, "  Area:              {} km²", r.area)?;
        writeln!(f, "  Pop/km²:           {}", self.density)?;
        write!(f, "  Quality of life:   {}", self.quality_of_life)
    }
}
