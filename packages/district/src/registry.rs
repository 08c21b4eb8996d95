//! Compile-time table of known district statistics.
//!
//! Each entry is a `(key, toml_content)` pair embedded via `include_str!`,
//! one file per district under `sources/`. The table is closed: it covers
//! exactly the districts in [`District::ALL`], in the same order.

use std::sync::LazyLock;

use gbg_map_district_models::{DisplayRecord, District, DistrictEntry, ScoringConfig};

use crate::DistrictError;
use crate::format::{DistrictInput, format_record_with};

/// Embedded TOML district definitions, in [`District::ALL`] order.
const DISTRICT_TOMLS: &[(&str, &str)] = &[
    ("centrum", include_str!("../sources/centrum.toml")),
    ("haga", include_str!("../sources/haga.toml")),
    ("linnégatan", include_str!("../sources/linnegatan.toml")),
    ("vasastan", include_str!("../sources/vasastan.toml")),
    ("olskroken", include_str!("../sources/olskroken.toml")),
    ("angered", include_str!("../sources/angered.toml")),
    ("bergsjön", include_str!("../sources/bergsjon.toml")),
    ("kortedala", include_str!("../sources/kortedala.toml")),
    ("torslanda", include_str!("../sources/torslanda.toml")),
    ("mölndal", include_str!("../sources/molndal.toml")),
];

static ENTRIES: LazyLock<Vec<DistrictEntry>> = LazyLock::new(|| {
    DISTRICT_TOMLS
        .iter()
        .map(|(key, toml_str)| {
            toml::de::from_str(toml_str)
                .unwrap_or_else(|e| panic!("Failed to parse district '{key}': {e}"))
        })
        .collect()
});

/// Returns every static district entry in declared order.
///
/// # Panics
///
/// Panics if any embedded TOML file fails to parse. Since these are
/// compile-time constants, parse failures indicate a development error
/// and are caught by the tests below.
#[must_use]
pub fn all_entries() -> &'static [DistrictEntry] {
    &ENTRIES
}

/// Returns the static entry for a known district.
#[must_use]
pub fn entry(district: District) -> Option<&'static DistrictEntry> {
    all_entries().iter().find(|e| e.id == district)
}

/// Looks up a static entry by district key.
///
/// # Errors
///
/// Returns [`DistrictError::UnknownDistrict`] if `key` is not one of the
/// known district keys.
pub fn find(key: &str) -> Result<&'static DistrictEntry, DistrictError> {
    District::from_key(key)
        .and_then(entry)
        .ok_or_else(|| DistrictError::UnknownDistrict {
            key: key.to_owned(),
        })
}

/// Formats every static entry into a [`DisplayRecord`].
#[must_use]
pub fn display_records(config: &ScoringConfig) -> Vec<DisplayRecord> {
    all_entries()
        .iter()
        .map(|entry| format_record_with(&DistrictInput::from(entry), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_known_districts_in_order() {
        let ids: Vec<District> = all_entries().iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            District::ALL,
            "Static table must list exactly the known districts in declared order"
        );
    }

    #[test]
    fn embedded_keys_match_entries() {
        for ((key, _), entry) in DISTRICT_TOMLS.iter().zip(all_entries()) {
            assert_eq!(*key, entry.id.key());
        }
    }

    #[test]
    fn names_match_enum() {
        for entry in all_entries() {
            assert_eq!(entry.name, entry.id.name(), "{:?}", entry.id);
        }
    }

    #[test]
    fn geometry_is_valid() {
        for entry in all_entries() {
            assert!(entry.area_km2 > 0.0, "{:?} has non-positive area", entry.id);
            assert!(entry.center.is_finite());
            assert!(
                entry.has_closed_boundary(),
                "{:?} boundary is not a closed ring",
                entry.id
            );
        }
    }

    #[test]
    fn reproduces_published_crime_levels() {
        let expected = [45, 35, 25, 30, 55, 75, 70, 60, 40, 35];
        let levels: Vec<u8> = display_records(&ScoringConfig::default())
            .iter()
            .map(|r| r.crime_level)
            .collect();
        assert_eq!(levels, expected);
    }

    #[test]
    fn centrum_record() {
        let records = display_records(&ScoringConfig::default());
        let centrum = &records[0];
        assert_eq!(centrum.id, "centrum");
        assert_eq!(centrum.population, 45_000);
        assert_eq!(centrum.median_income, 420_000);
        assert!((centrum.area - 2.1).abs() < f64::EPSILON);
        assert!((centrum.tertiary_education - 78.0).abs() < f64::EPSILON);
    }

    #[test]
    fn find_by_key() {
        let entry = find("mölndal").unwrap();
        assert_eq!(entry.id, District::Molndal);
        assert_eq!(entry.statistics.crime.by_type.len(), 2);

        assert!(matches!(
            find("gamlestaden"),
            Err(DistrictError::UnknownDistrict { ref key }) if key == "gamlestaden"
        ));
    }
}
