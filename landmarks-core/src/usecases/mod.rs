// Preparation of landmark mutations from user input.

mod create_landmark;
mod error;
mod update_landmark;

pub use self::{create_landmark::*, error::Error, update_landmark::*};

use crate::entities::{EditRecord, MapPoint};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::entities::*;
}

type Result<T> = std::result::Result<T, Error>;

/// The text fields of a landmark form.
#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandmarkInput {
    pub title : String,
    pub lat   : String,
    pub lng   : String,
}

impl LandmarkInput {
    pub fn new(title: impl Into<String>, lat: impl Into<String>, lng: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lat: lat.into(),
            lng: lng.into(),
        }
    }

    /// Parse the coordinates.
    pub fn pos(&self) -> Result<MapPoint> {
        Ok(MapPoint::parse_lat_lng_deg(&self.lat, &self.lng)?)
    }
}

impl From<&EditRecord> for LandmarkInput {
    fn from(from: &EditRecord) -> Self {
        let coord = |deg: Option<f64>| deg.map(|deg| deg.to_string()).unwrap_or_default();
        Self {
            title: from.title.clone(),
            lat: coord(from.lat),
            lng: coord(from.lng),
        }
    }
}
