//! Raw per-district statistic groups.
//!
//! Every group and every field defaults to zero, so partially filled JSON
//! or TOML (or a text-extraction result that matched nothing) always
//! deserializes into a complete record.

use serde::{Deserialize, Serialize};

/// All statistic groups for one district, as published in the city's
/// reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawDistrictStatistics {
    /// Resident counts.
    pub population: PopulationStatistics,
    /// Education attainment shares.
    pub education: EducationStatistics,
    /// Income figures.
    pub income: IncomeStatistics,
    /// Reported crime.
    pub crime: CrimeStatistics,
    /// Housing stock.
    pub housing: HousingStatistics,
    /// Labour market.
    pub employment: EmploymentStatistics,
}

/// Resident counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PopulationStatistics {
    /// Total residents.
    pub total: u64,
    /// Residents per km² as reported (not derived).
    pub density: f64,
    /// Residents by age bracket.
    pub age_groups: AgeGroups,
}

/// Residents by age bracket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGroups {
    /// Ages 0-17.
    #[serde(rename = "0-17")]
    pub children: u64,
    /// Ages 18-64.
    #[serde(rename = "18-64")]
    pub working_age: u64,
    /// Ages 65 and over.
    #[serde(rename = "65+")]
    pub seniors: u64,
}

/// Education attainment, each in percent of the adult population.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationStatistics {
    pub tertiary_education: f64,
    pub high_school: f64,
    pub primary_school: f64,
}

/// Income figures in SEK per year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncomeStatistics {
    pub median_income: u64,
    pub average_income: u64,
    /// Share of households below the low-income threshold, in percent.
    pub low_income_households: f64,
}

/// Reported crime for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrimeStatistics {
    /// Total reported incidents. This is the crime-level input.
    pub total_incidents: u64,
    pub violent_crime: u64,
    pub property_crime: u64,
    /// Incidents per 1,000 residents as reported. Informational only.
    pub crime_rate: f64,
    /// Per-type breakdown, when the source provides one.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_type: Vec<CrimeTypeCount>,
}

impl CrimeStatistics {
    /// Returns the incident count used for the crime level.
    ///
    /// Uses `total_incidents` when set, otherwise the sum of the violent
    /// and property counts.
    #[must_use]
    pub const fn incident_count(&self) -> u64 {
        if self.total_incidents > 0 {
            self.total_incidents
        } else {
            self.violent_crime.saturating_add(self.property_crime)
        }
    }
}

/// Incident count for a single crime type in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrimeTypeCount {
    /// Crime type label (e.g. "Theft").
    pub crime_type: String,
    /// Number of reported incidents.
    pub count: u64,
    /// Reporting year.
    pub year: u16,
}

/// Housing stock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HousingStatistics {
    pub total_housing: u64,
    /// Share of rental apartments, in percent.
    pub rental_percentage: f64,
    /// Average monthly rent in SEK.
    pub average_rent: u64,
}

/// Labour market, each in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmploymentStatistics {
    pub employment_rate: f64,
    pub unemployment_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_all_zero() {
        let stats: RawDistrictStatistics = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, RawDistrictStatistics::default());
    }

    #[test]
    fn partial_json_fills_only_given_fields() {
        let stats: RawDistrictStatistics = serde_json::from_str(
            r#"{"crime":{"totalIncidents":450},"population":{"ageGroups":{"65+":1200}}}"#,
        )
        .unwrap();
        assert_eq!(stats.crime.total_incidents, 450);
        assert_eq!(stats.population.age_groups.seniors, 1200);
        assert_eq!(stats.population.total, 0);
        assert_eq!(stats.income, IncomeStatistics::default());
    }

    #[test]
    fn incident_count_prefers_total() {
        let crime = CrimeStatistics {
            total_incidents: 300,
            violent_crime: 50,
            property_crime: 100,
            ..CrimeStatistics::default()
        };
        assert_eq!(crime.incident_count(), 300);
    }

    #[test]
    fn incident_count_falls_back_to_breakdown_sum() {
        let crime = CrimeStatistics {
            violent_crime: 50,
            property_crime: 100,
            ..CrimeStatistics::default()
        };
        assert_eq!(crime.incident_count(), 150);

        let saturated = CrimeStatistics {
            violent_crime: u64::MAX,
            property_crime: 1,
            ..CrimeStatistics::default()
        };
        assert_eq!(saturated.incident_count(), u64::MAX);
    }
}
