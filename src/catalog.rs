//! City catalog for the standard five-city Danish game.
//!
//! All five cities are enumerated with their coordinates stored in a
//! compile-time lookup table indexed by the `City` enum discriminant.
//! The catalog is fixed: the secret city and every guess come from it.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::geo::Coordinate;

/// The number of cities in the catalog.
pub const CITY_COUNT: usize = 5;

/// A city in the catalog.
///
/// The `#[repr(u8)]` attribute enables use as an array index. Serializes
/// as the Danish display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum City {
    #[serde(rename = "København")]
    Kobenhavn = 0,
    Aarhus = 1,
    Odense = 2,
    Aalborg = 3,
    Esbjerg = 4,
}

/// All city variants in index order.
pub const ALL_CITIES: [City; CITY_COUNT] = [
    City::Kobenhavn,
    City::Aarhus,
    City::Odense,
    City::Aalborg,
    City::Esbjerg,
];

/// Static metadata for one city.
struct CityInfo {
    name: &'static str,
    lat: f64,
    lng: f64,
}

/// Metadata table indexed by `City as usize`.
const CITY_INFO: [CityInfo; CITY_COUNT] = [
    CityInfo { name: "København", lat: 55.6761, lng: 12.5683 },
    CityInfo { name: "Aarhus", lat: 56.1629, lng: 10.2039 },
    CityInfo { name: "Odense", lat: 55.4038, lng: 10.4024 },
    CityInfo { name: "Aalborg", lat: 57.0488, lng: 9.9217 },
    CityInfo { name: "Esbjerg", lat: 55.4765, lng: 8.4594 },
];

impl City {
    /// Returns the Danish display name for this city.
    pub const fn name(self) -> &'static str {
        CITY_INFO[self as usize].name
    }

    /// Returns the city's coordinate in degrees.
    pub const fn coordinate(self) -> Coordinate {
        Coordinate {
            lat: CITY_INFO[self as usize].lat,
            lng: CITY_INFO[self as usize].lng,
        }
    }

    /// Looks up a city by name, case-insensitively.
    ///
    /// Accepts the Danish display name and an ASCII fold of it
    /// (`kobenhavn` for København), so the protocol stays typeable
    /// without a Danish keyboard layout.
    pub fn from_name(name: &str) -> Option<City> {
        let lower = name.to_lowercase();
        match lower.as_str() {
            "københavn" | "kobenhavn" => Some(City::Kobenhavn),
            "aarhus" => Some(City::Aarhus),
            "odense" => Some(City::Odense),
            "aalborg" => Some(City::Aalborg),
            "esbjerg" => Some(City::Esbjerg),
            _ => None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a catalog city.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown city: '{0}'")]
pub struct ParseCityError(pub String);

impl FromStr for City {
    type Err = ParseCityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        City::from_name(s).ok_or_else(|| ParseCityError(s.to_string()))
    }
}
