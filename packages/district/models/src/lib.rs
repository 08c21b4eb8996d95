#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Gothenburg district identity, raw statistics, and display record types.
//!
//! These types are shared by the scoring/formatting crate and the text
//! extraction crate. Raw statistics come in nested groups that mirror the
//! city's statistical reports, while [`DisplayRecord`] is the flat shape
//! handed to the map and sidebar.

pub mod config;
pub mod entry;
pub mod statistics;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use config::ScoringConfig;
pub use entry::DistrictEntry;
pub use statistics::{
    AgeGroups, CrimeStatistics, CrimeTypeCount, EducationStatistics, EmploymentStatistics,
    HousingStatistics, IncomeStatistics, PopulationStatistics, RawDistrictStatistics,
};

/// The closed set of Gothenburg districts known to the map.
///
/// Declaration order is significant: batch extraction assigns identities
/// positionally in this order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum District {
    /// Inner city around the canal belt
    Centrum,
    /// Old wooden-house quarter south of the moat
    Haga,
    /// Linnéstaden along Linnégatan
    #[serde(rename = "linnégatan")]
    #[strum(serialize = "linnégatan")]
    Linnegatan,
    /// Residential blocks around Vasaplatsen
    Vasastan,
    /// East of the central station
    Olskroken,
    /// North-eastern suburb
    Angered,
    /// Eastern hillside suburb
    #[serde(rename = "bergsjön")]
    #[strum(serialize = "bergsjön")]
    Bergsjon,
    /// North-eastern residential district
    Kortedala,
    /// Western island district
    Torslanda,
    /// Neighboring municipality to the south
    #[serde(rename = "mölndal")]
    #[strum(serialize = "mölndal")]
    Molndal,
}

impl District {
    /// All known districts in declared order.
    pub const ALL: &[Self] = &[
        Self::Centrum,
        Self::Haga,
        Self::Linnegatan,
        Self::Vasastan,
        Self::Olskroken,
        Self::Angered,
        Self::Bergsjon,
        Self::Kortedala,
        Self::Torslanda,
        Self::Molndal,
    ];

    /// Returns the stable short key (e.g. `"linnégatan"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Centrum => "centrum",
            Self::Haga => "haga",
            Self::Linnegatan => "linnégatan",
            Self::Vasastan => "vasastan",
            Self::Olskroken => "olskroken",
            Self::Angered => "angered",
            Self::Bergsjon => "bergsjön",
            Self::Kortedala => "kortedala",
            Self::Torslanda => "torslanda",
            Self::Molndal => "mölndal",
        }
    }

    /// Returns the human-readable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Centrum => "Centrum",
            Self::Haga => "Haga",
            Self::Linnegatan => "Linnégatan",
            Self::Vasastan => "Vasastan",
            Self::Olskroken => "Olskroken",
            Self::Angered => "Angered",
            Self::Bergsjon => "Bergsjön",
            Self::Kortedala => "Kortedala",
            Self::Torslanda => "Torslanda",
            Self::Molndal => "Mölndal",
        }
    }

    /// Looks up a district by its key. Returns `None` for unknown keys.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    /// Returns the district at `index` in declared order, if any.
    #[must_use]
    pub fn nth(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns an owned identity for this district.
    #[must_use]
    pub fn identity(self) -> DistrictIdentity {
        DistrictIdentity {
            id: self.key().to_owned(),
            name: self.name().to_owned(),
        }
    }
}

/// Key and display name for one district.
///
/// An empty identity (both strings empty) marks a record whose district
/// could not be determined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistrictIdentity {
    /// Stable short key (e.g. `"centrum"`).
    pub id: String,
    /// Display name (e.g. `"Centrum"`).
    pub name: String,
}

impl DistrictIdentity {
    /// Creates an identity from arbitrary key and name strings.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Returns `true` if neither key nor name is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty()
    }

    /// Returns the known district for this key, if any.
    #[must_use]
    pub fn district(&self) -> Option<District> {
        District::from_key(&self.id)
    }
}

impl From<District> for DistrictIdentity {
    fn from(district: District) -> Self {
        district.identity()
    }
}

/// A geographic coordinate.
///
/// Serialized as a `[latitude, longitude]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns `true` if both components are finite numbers.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.latitude, c.longitude]
    }
}

/// Flat, presentation-ready record for one district.
///
/// Derived on demand from [`RawDistrictStatistics`]; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// District key.
    pub id: String,
    /// District display name.
    pub name: String,
    /// Bounded crime score, 0-100.
    pub crime_level: u8,
    /// Share of residents with tertiary education, in percent.
    pub tertiary_education: f64,
    /// Annual median income in SEK.
    pub median_income: u64,
    /// Resident count.
    pub population: u64,
    /// Land area in km².
    pub area: f64,
    /// Label/center point of the district.
    pub center: Coordinate,
}

impl DisplayRecord {
    /// Returns the identity portion of this record.
    #[must_use]
    pub fn identity(&self) -> DistrictIdentity {
        DistrictIdentity::new(self.id.clone(), self.name.clone())
    }

    /// Returns the known district for this record's key, if any.
    #[must_use]
    pub fn district(&self) -> Option<District> {
        District::from_key(&self.id)
    }
}
