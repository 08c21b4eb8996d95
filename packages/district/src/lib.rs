#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Crime-level normalization, display record formatting, and derived
//! district views.
//!
//! Raw statistic groups flow through the [`normalize`] and [`format`]
//! modules to become [`DisplayRecord`]s. Everything on that path is total:
//! missing or malformed numbers degrade to documented defaults instead of
//! producing errors. The [`scoring`], [`palette`], and [`profile`] modules
//! compute presentation-time views (quality-of-life index, density, map
//! colors), and [`map_layer`] packages records as `GeoJSON` map features.
//! The static district table lives in [`registry`].
//!
//! [`DisplayRecord`]: gbg_map_district_models::DisplayRecord

pub mod config;
pub mod format;
pub mod map_layer;
pub mod normalize;
pub mod palette;
pub mod profile;
pub mod registry;
pub mod scoring;

use thiserror::Error;

/// Errors from the fallible edges of the district crate: configuration
/// loading, keyed lookups, and serialization.
#[derive(Debug, Error)]
pub enum DistrictError {
    /// TOML parsing failed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Description of what went wrong.
        message: String,
    },

    /// No district is registered under the given key.
    #[error("Unknown district: {key}")]
    UnknownDistrict {
        /// The key that was looked up.
        key: String,
    },
}
