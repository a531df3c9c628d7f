//! Geographic helpers for the shala directory.
//!
//! Great-circle distance, the "near me" sort, the free-text directory filter,
//! and the mapping from browser geolocation error codes to messages.

use crate::i18n::Translator;
use crate::types::ShalaData;
use serde::Serialize;
use std::str::FromStr;
use thiserror::Error;

/// Mean Earth radius used for all distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("expected LAT,LNG, got {0:?}")]
    Format(String),
    #[error("coordinate out of range: {0:?}")]
    Range(String),
}

impl FromStr for LatLng {
    type Err = CoordinateError;

    /// Parses `"12.31,76.64"`. Whitespace around either number is allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoordinateError::Format(s.to_string()))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .map_err(|_| CoordinateError::Format(s.to_string()))
        };
        let point = LatLng::new(parse(lat)?, parse(lng)?);
        if !point.is_valid() {
            return Err(CoordinateError::Range(s.to_string()));
        }
        Ok(point)
    }
}

impl From<&ShalaData> for LatLng {
    fn from(shala: &ShalaData) -> Self {
        LatLng::new(shala.lat, shala.lng)
    }
}

/// Great-circle distance between two points in kilometres (haversine).
pub fn haversine_km(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Pair each shala with its distance from `origin`, nearest first.
///
/// The sort is stable: shalas at equal distance keep their input order.
pub fn sort_by_distance<'a>(shalas: &[&'a ShalaData], origin: LatLng) -> Vec<(&'a ShalaData, f64)> {
    let mut with_distance: Vec<_> = shalas
        .iter()
        .map(|s| (*s, haversine_km(origin, LatLng::from(*s))))
        .collect();
    with_distance.sort_by(|a, b| a.1.total_cmp(&b.1));
    with_distance
}

/// Filter the directory by a free-text query over name, city, country and
/// teacher names. A blank query keeps everything.
pub fn filter_shalas<'a>(shalas: &'a [ShalaData], query: &str) -> Vec<&'a ShalaData> {
    let query = query.trim();
    if query.is_empty() {
        return shalas.iter().collect();
    }
    let needle = query.to_lowercase();
    let hit = |s: &str| s.to_lowercase().contains(&needle);
    shalas
        .iter()
        .filter(|s| {
            hit(&s.name)
                || hit(&s.city)
                || hit(&s.country)
                || s.teachers.iter().any(|t| hit(&t.name))
        })
        .collect()
}

/// Round a distance and group thousands with commas: `1234.4` → `"1,234"`.
pub fn format_km(km: f64) -> String {
    let rounded = km.round().max(0.0) as u64;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Geolocation errors
// =============================================================================

/// Why a "near me" request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GeolocationError {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    /// The browser has no geolocation API.
    Unsupported,
    Unknown,
}

impl GeolocationError {
    pub const ALL: [GeolocationError; 5] = [
        Self::PermissionDenied,
        Self::PositionUnavailable,
        Self::Timeout,
        Self::Unsupported,
        Self::Unknown,
    ];

    /// Map a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::PermissionDenied,
            2 => Self::PositionUnavailable,
            3 => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    /// Browser error code, where one exists.
    pub fn code(self) -> Option<u16> {
        match self {
            Self::PermissionDenied => Some(1),
            Self::PositionUnavailable => Some(2),
            Self::Timeout => Some(3),
            Self::Unsupported | Self::Unknown => None,
        }
    }

    /// Key under `map.errors` in the `shalas` namespace.
    pub fn key(self) -> &'static str {
        match self {
            Self::PermissionDenied => "permissionDenied",
            Self::PositionUnavailable => "positionUnavailable",
            Self::Timeout => "timeout",
            Self::Unsupported => "unsupported",
            Self::Unknown => "unknown",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            Self::PermissionDenied => "Location permission denied",
            Self::PositionUnavailable => "Location unavailable",
            Self::Timeout => "Location request timed out",
            Self::Unsupported => "Geolocation is not supported by your browser",
            Self::Unknown => "Unable to get location",
        }
    }

    /// Localized message, falling back to the English default.
    pub fn message(self, t: &Translator<'_>) -> String {
        let key = format!("map.errors.{}", self.key());
        if t.has("shalas", &key) {
            t.t("shalas", &key)
        } else {
            self.default_message().to_string()
        }
    }
}

impl std::fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.default_message())
    }
}
