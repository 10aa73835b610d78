use crate::{geo::*, id::*};

/// Path of an image relative to the image base URL
/// of the remote store, e.g. `images/abc.jpg`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagePath(String);

impl ImagePath {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Resolve the fetchable address of this image.
    ///
    /// The `base` URL must end with a slash, otherwise its
    /// last path segment gets replaced.
    #[cfg(feature = "url")]
    pub fn to_url(&self, base: &crate::url::Url) -> Option<crate::url::Url> {
        if self.is_empty() {
            return None;
        }
        base.join(self.0.trim().trim_start_matches('/')).ok()
    }
}

impl From<String> for ImagePath {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for ImagePath {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<ImagePath> for String {
    fn from(from: ImagePath) -> Self {
        from.0
    }
}

/// A landmark as confirmed by the remote store.
///
/// Coordinates that were missing or unparseable in the
/// remote record are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub id: Id,
    pub title: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: ImagePath,
}

impl Landmark {
    /// The validated position, if any.
    pub fn pos(&self) -> Option<MapPoint> {
        MapPoint::try_from_lat_lng_deg(self.lat?, self.lng?)
    }

    /// Only landmarks with a title and a valid position
    /// can be placed on a map.
    pub fn is_displayable(&self) -> bool {
        !self.title.trim().is_empty() && self.pos().is_some()
    }
}

/// A landmark that has not been created remotely yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLandmark {
    pub title: String,
    pub pos: MapPoint,
}

/// Changes of an existing landmark.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkChanges {
    pub id: Id,
    pub title: String,
    pub pos: MapPoint,
}

impl LandmarkChanges {
    /// Apply the changes on top of the last known record.
    ///
    /// The image path is retained.
    pub fn merge_into(self, mut landmark: Landmark) -> Landmark {
        debug_assert_eq!(self.id, landmark.id);
        let (lat, lng) = self.pos.to_lat_lng_deg();
        landmark.title = self.title;
        landmark.lat = Some(lat);
        landmark.lng = Some(lng);
        landmark
    }
}

/// Everything an edit form needs to know about
/// an existing landmark.
#[derive(Debug, Clone, PartialEq)]
pub struct EditRecord {
    pub id: Id,
    pub title: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub image: ImagePath,
}

impl From<&Landmark> for EditRecord {
    fn from(from: &Landmark) -> Self {
        let Landmark {
            id,
            title,
            lat,
            lng,
            image,
        } = from;
        Self {
            id: *id,
            title: title.clone(),
            lat: *lat,
            lng: *lng,
            image: image.clone(),
        }
    }
}
