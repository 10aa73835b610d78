use std::{fmt, str::FromStr};

use thiserror::Error;

/// Latitude in decimal degrees.
///
/// The default value is invalid (`NaN`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    pub const DEG_MAX: f64 = 90.0;
    pub const DEG_MIN: f64 = -90.0;

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl Default for LatCoord {
    fn default() -> Self {
        Self(f64::NAN)
    }
}

impl fmt::Display for LatCoord {
    // `f64` formatting yields the shortest text that parses back
    // to the identical value.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longitude in decimal degrees.
///
/// The default value is invalid (`NaN`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    pub const DEG_MAX: f64 = 180.0;
    pub const DEG_MIN: f64 = -180.0;

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= Self::DEG_MIN && self.0 <= Self::DEG_MAX
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let res = Self(deg.into());
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let res = Self(deg.into());
        res.is_valid().then_some(res)
    }
}

impl Default for LngCoord {
    fn default() -> Self {
        Self(f64::NAN)
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}'")]
    LatitudeFormat(String),
    #[error("Invalid longitude '{0}'")]
    LongitudeFormat(String),
    #[error("Latitude degrees out of range: {0}")]
    LatitudeRange(f64),
    #[error("Longitude degrees out of range: {0}")]
    LongitudeRange(f64),
    #[error("Failed to parse map point '{0}'")]
    Format(String),
}

/// A geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    /// Parse user or sensor input given as separate decimal strings.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse_lat_lng_deg(lat_str: &str, lng_str: &str) -> Result<Self, MapPointParseError> {
        let lat_deg = lat_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::LatitudeFormat(lat_str.to_owned()))?;
        let lng_deg = lng_str
            .trim()
            .parse::<f64>()
            .map_err(|_| MapPointParseError::LongitudeFormat(lng_str.to_owned()))?;
        let lat =
            LatCoord::try_from_deg(lat_deg).ok_or(MapPointParseError::LatitudeRange(lat_deg))?;
        let lng =
            LngCoord::try_from_deg(lng_deg).ok_or(MapPointParseError::LongitudeRange(lng_deg))?;
        Ok(Self::new(lat, lng))
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((lat_str, lng_str)) => Self::parse_lat_lng_deg(lat_str, lng_str),
            None => Err(MapPointParseError::Format(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_coords_are_invalid() {
        assert!(!LatCoord::default().is_valid());
        assert!(!LngCoord::default().is_valid());
        assert!(!MapPoint::default().is_valid());
    }

    #[test]
    fn range_limits() {
        assert!(LatCoord::try_from_deg(90.0).is_some());
        assert!(LatCoord::try_from_deg(-90.0).is_some());
        assert!(LatCoord::try_from_deg(90.000_001).is_none());
        assert!(LngCoord::try_from_deg(180.0).is_some());
        assert!(LngCoord::try_from_deg(-180.0).is_some());
        assert!(LngCoord::try_from_deg(-180.5).is_none());
        assert!(LatCoord::try_from_deg(f64::NAN).is_none());
        assert!(LngCoord::try_from_deg(f64::INFINITY).is_none());
    }

    #[test]
    fn parse_valid_input() {
        let pos = MapPoint::parse_lat_lng_deg(" 23.685", "90.3563 ").unwrap();
        assert_eq!(pos.to_lat_lng_deg(), (23.685, 90.3563));
    }

    #[test]
    fn parse_invalid_input() {
        assert_eq!(
            MapPoint::parse_lat_lng_deg("abc", "90"),
            Err(MapPointParseError::LatitudeFormat("abc".into()))
        );
        assert_eq!(
            MapPoint::parse_lat_lng_deg("23", ""),
            Err(MapPointParseError::LongitudeFormat("".into()))
        );
        assert_eq!(
            MapPoint::parse_lat_lng_deg("91", "0"),
            Err(MapPointParseError::LatitudeRange(91.0))
        );
        assert_eq!(
            MapPoint::parse_lat_lng_deg("0", "181"),
            Err(MapPointParseError::LongitudeRange(181.0))
        );
        assert!(matches!(
            MapPoint::parse_lat_lng_deg("NaN", "0"),
            Err(MapPointParseError::LatitudeRange(_))
        ));
    }

    #[test]
    fn display_round_trip() {
        let pos = MapPoint::from_lat_lng_deg(23.685, 90.3563);
        let text = pos.to_string();
        assert_eq!(text, "23.685,90.3563");
        let parsed: MapPoint = text.parse().unwrap();
        assert_eq!(parsed, pos);
    }

    #[test]
    fn display_round_trip_is_lossless() {
        let lat = 52.520_006_599_999_996_f64;
        let lng = -13.404_954_123_456_789_f64;
        let pos = MapPoint::from_lat_lng_deg(lat, lng);
        let (lat_str, lng_str) = (pos.lat().to_string(), pos.lng().to_string());
        let parsed = MapPoint::parse_lat_lng_deg(&lat_str, &lng_str).unwrap();
        assert_eq!(parsed.to_lat_lng_deg(), (lat, lng));
    }

    #[test]
    fn parse_without_separator() {
        assert_eq!(
            "23.685".parse::<MapPoint>(),
            Err(MapPointParseError::Format("23.685".into()))
        );
    }
}
