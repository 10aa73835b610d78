use crate::entities::MapPoint;
use async_trait::async_trait;

#[async_trait(?Send)]
pub trait LocationProvider {
    /// Best-effort last known position.
    ///
    /// A denied permission or an unavailable sensor yields `None`.
    async fn last(&self) -> Option<MapPoint>;
}
