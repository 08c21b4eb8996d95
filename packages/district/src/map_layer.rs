//! `GeoJSON` export of display records for the map's fill layer.
//!
//! Each record becomes one Polygon feature whose properties carry the
//! numeric fields the map styles and popups read. Districts in the static
//! table use their published boundary; anything else gets a square around
//! its center.

use gbg_map_district_models::{Coordinate, DisplayRecord};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value, feature::Id};

use crate::DistrictError;
use crate::palette::fill_color;
use crate::registry;

/// Half-width in degrees of the fallback square around a center point.
pub const FALLBACK_HALF_WIDTH_DEG: f64 = 0.01;

/// Builds a `FeatureCollection` with one feature per record, in order.
#[must_use]
pub fn to_feature_collection(records: &[DisplayRecord]) -> FeatureCollection {
    let features: Vec<Feature> = records.iter().map(to_feature).collect();
    log::debug!("Built {} map features", features.len());

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Serializes records as a pretty-printed `GeoJSON` string.
///
/// # Errors
///
/// Returns [`DistrictError::Json`] if serialization fails.
pub fn to_geojson_string(records: &[DisplayRecord]) -> Result<String, DistrictError> {
    Ok(serde_json::to_string_pretty(&to_feature_collection(
        records,
    ))?)
}

/// Builds the feature for a single record.
#[must_use]
pub fn to_feature(record: &DisplayRecord) -> Feature {
    let ring = record
        .district()
        .and_then(registry::entry)
        .map_or_else(
            || square_ring(record.center, FALLBACK_HALF_WIDTH_DEG),
            |entry| entry.boundary.iter().map(|p| p.to_vec()).collect(),
        );

    let mut properties = JsonObject::new();
    properties.insert("id".to_owned(), record.id.clone().into());
    properties.insert("name".to_owned(), record.name.clone().into());
    properties.insert("crimeLevel".to_owned(), record.crime_level.into());
    properties.insert(
        "tertiaryEducation".to_owned(),
        record.tertiary_education.into(),
    );
    properties.insert("medianIncome".to_owned(), record.median_income.into());
    properties.insert("population".to_owned(), record.population.into());
    properties.insert("area".to_owned(), record.area.into());
    properties.insert(
        "fillColor".to_owned(),
        fill_color(record.crime_level).into(),
    );

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: (!record.id.is_empty()).then(|| Id::String(record.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Closed square ring around `center`, in `[longitude, latitude]` order.
fn square_ring(center: Coordinate, half_width: f64) -> Vec<Vec<f64>> {
    let (lon, lat) = (center.longitude, center.latitude);
    vec![
        vec![lon - half_width, lat - half_width],
        vec![lon + half_width, lat - half_width],
        vec![lon + half_width, lat + half_width],
        vec![lon - half_width, lat + half_width],
        vec![lon - half_width, lat - half_width],
    ]
}
