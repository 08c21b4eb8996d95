//! Static district table entry, deserialized from the embedded TOML files.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, District, RawDistrictStatistics};

/// One row of the static district table.
///
/// Boundary positions use `GeoJSON` order (`[longitude, latitude]`), while
/// `center` is a `[latitude, longitude]` [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictEntry {
    /// Which known district this entry describes.
    pub id: District,
    /// Display name as published by the city.
    pub name: String,
    /// Land area in km².
    pub area_km2: f64,
    /// Label/center point.
    pub center: Coordinate,
    /// Closed outer ring of the district polygon.
    pub boundary: Vec<[f64; 2]>,
    /// Published statistics.
    #[serde(default)]
    pub statistics: RawDistrictStatistics,
}

impl DistrictEntry {
    /// Returns `true` if the boundary has at least four positions and its
    /// first and last positions coincide.
    #[must_use]
    pub fn has_closed_boundary(&self) -> bool {
        self.boundary.len() >= 4 && self.boundary.first() == self.boundary.last()
    }
}
