use async_trait::async_trait;
use landmarks_core::{entities::MapPoint, gateways::location::LocationProvider};

/// A location that is configured instead of measured.
///
/// Without a configured position the location is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLocation(Option<MapPoint>);

impl FixedLocation {
    pub const fn new(pos: Option<MapPoint>) -> Self {
        Self(pos)
    }
}

#[async_trait(?Send)]
impl LocationProvider for FixedLocation {
    async fn last(&self) -> Option<MapPoint> {
        self.0.filter(|pos| pos.is_valid())
    }
}
