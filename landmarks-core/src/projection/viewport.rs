use super::MarkerProjection;
use crate::entities::MapPoint;

/// The visible section of the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: MapPoint,
    pub zoom: f64,
}

impl Viewport {
    pub const DEFAULT_CENTER_LAT: f64 = 23.6850;
    pub const DEFAULT_CENTER_LNG: f64 = 90.3563;
    pub const DEFAULT_ZOOM: f64 = 8.0;

    pub const fn new(center: MapPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Center on the first marker of a freshly loaded projection.
    ///
    /// Returns `false` and leaves the viewport unchanged if
    /// there are no markers.
    pub fn follow(&mut self, projection: &MarkerProjection) -> bool {
        match projection.center() {
            Some(center) => {
                self.center = center;
                true
            }
            None => false,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: MapPoint::from_lat_lng_deg(Self::DEFAULT_CENTER_LAT, Self::DEFAULT_CENTER_LNG),
            zoom: Self::DEFAULT_ZOOM,
        }
    }
}
