//! Great-circle distance and compass bearing.
//!
//! Pure closed-form scoring: haversine distance on a 6371 km sphere and
//! the standard two-point initial bearing, coarsened to eight compass
//! directions. No validation is performed; both formulas are total over
//! finite inputs.

use serde::Serialize;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Haversine great-circle distance between two points, in kilometres.
///
/// Uses the `atan2`/`sqrt` form, which never sees a negative radicand:
/// the haversine term is bounded to [0, 1] by `sin² + cos² = 1`.
/// `distance_km(x, x)` is exactly zero.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Initial bearing from `from` toward `to`, in degrees normalized to [0, 360).
///
/// For coincident points `atan2(0, 0)` is zero, so the bearing is 0 (north).
pub fn initial_bearing_deg(from: Coordinate, to: Coordinate) -> f64 {
    let d_lng = (to.lng - from.lng).to_radians();
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// The number of compass directions.
pub const DIRECTION_COUNT: usize = 8;

/// An eight-way compass direction, clockwise from north.
///
/// Serializes as the short abbreviation (`"N"`, `"NE"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum CompassDirection {
    #[serde(rename = "N")]
    North = 0,
    #[serde(rename = "NE")]
    Northeast = 1,
    #[serde(rename = "E")]
    East = 2,
    #[serde(rename = "SE")]
    Southeast = 3,
    #[serde(rename = "S")]
    South = 4,
    #[serde(rename = "SW")]
    Southwest = 5,
    #[serde(rename = "W")]
    West = 6,
    #[serde(rename = "NW")]
    Northwest = 7,
}

/// All direction variants in clockwise order from north.
pub const ALL_DIRECTIONS: [CompassDirection; DIRECTION_COUNT] = [
    CompassDirection::North,
    CompassDirection::Northeast,
    CompassDirection::East,
    CompassDirection::Southeast,
    CompassDirection::South,
    CompassDirection::Southwest,
    CompassDirection::West,
    CompassDirection::Northwest,
];

impl CompassDirection {
    /// Returns the short abbreviation (N, NE, ...).
    pub const fn abbr(self) -> &'static str {
        match self {
            CompassDirection::North => "N",
            CompassDirection::Northeast => "NE",
            CompassDirection::East => "E",
            CompassDirection::Southeast => "SE",
            CompassDirection::South => "S",
            CompassDirection::Southwest => "SW",
            CompassDirection::West => "W",
            CompassDirection::Northwest => "NW",
        }
    }

    /// Returns the Danish display name (Nord, Nordøst, ...).
    pub const fn danish(self) -> &'static str {
        match self {
            CompassDirection::North => "Nord",
            CompassDirection::Northeast => "Nordøst",
            CompassDirection::East => "Øst",
            CompassDirection::Southeast => "Sydøst",
            CompassDirection::South => "Syd",
            CompassDirection::Southwest => "Sydvest",
            CompassDirection::West => "Vest",
            CompassDirection::Northwest => "Nordvest",
        }
    }

    /// Maps a bearing in degrees (normalized to [0, 360)) to a direction.
    ///
    /// Divides into 45° sectors centered on each direction. Rounding is
    /// half-away-from-zero (`f64::round`), so boundary bearings round up:
    /// 22.5° is NE, 67.5° is E, 337.5° wraps to N.
    pub fn from_bearing_deg(bearing: f64) -> CompassDirection {
        let index = (bearing / 45.0).round() as usize % DIRECTION_COUNT;
        ALL_DIRECTIONS[index]
    }
}

/// Compass direction of the initial bearing from `from` toward `to`.
pub fn bearing_label(from: Coordinate, to: Coordinate) -> CompassDirection {
    CompassDirection::from_bearing_deg(initial_bearing_deg(from, to))
}
