//! Crime-level colors for the map fill layer and the sidebar legend.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Color stops for the map fill, linearly interpolated by crime level.
pub const FILL_STOPS: &[(u8, [u8; 3])] = &[
    (0, [0x4a, 0xde, 0x80]),
    (25, [0x22, 0xc5, 0x5e]),
    (50, [0xea, 0xb3, 0x08]),
    (75, [0xf9, 0x73, 0x16]),
    (100, [0xef, 0x44, 0x44]),
];

/// Interpolated fill color for a crime level, as `#rrggbb`.
///
/// Levels above the last stop use the last stop's color.
#[must_use]
pub fn fill_color(level: u8) -> String {
    let [r, g, b] = interpolate(level);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn interpolate(level: u8) -> [u8; 3] {
    let Some(&(first_level, first_rgb)) = FILL_STOPS.first() else {
        return [0, 0, 0];
    };
    if level <= first_level {
        return first_rgb;
    }

    for window in FILL_STOPS.windows(2) {
        let (lo, lo_rgb) = window[0];
        let (hi, hi_rgb) = window[1];
        if level <= hi {
            let t = f64::from(level - lo) / f64::from(hi - lo);
            return [
                lerp(lo_rgb[0], hi_rgb[0], t),
                lerp(lo_rgb[1], hi_rgb[1], t),
                lerp(lo_rgb[2], hi_rgb[2], t),
            ];
        }
    }

    FILL_STOPS.last().map_or(first_rgb, |&(_, rgb)| rgb)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp(a: u8, b: u8, t: f64) -> u8 {
    let (a, b) = (f64::from(a), f64::from(b));
    (b - a).mul_add(t, a).round().clamp(0.0, 255.0) as u8
}

/// Coarse crime-level band shown in the sidebar and legend.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CrimeLevelBand {
    /// 0-25
    Low,
    /// 26-50
    Moderate,
    /// 51-75
    Elevated,
    /// Above 75
    High,
}

impl CrimeLevelBand {
    /// Returns the band containing `level`.
    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0..=25 => Self::Low,
            26..=50 => Self::Moderate,
            51..=75 => Self::Elevated,
            _ => Self::High,
        }
    }

    /// Legend color for this band.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#4ade80",
            Self::Moderate => "#22c55e",
            Self::Elevated => "#eab308",
            Self::High => "#ef4444",
        }
    }

    /// Returns all variants in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Low, Self::Moderate, Self::Elevated, Self::High]
    }
}
