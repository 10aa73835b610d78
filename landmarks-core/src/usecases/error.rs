use crate::{entities::MapPointParseError, util::validate::LandmarkInvalidation};
use thiserror::Error;

/// Invalid user input that is rejected before contacting
/// the remote store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("The title is empty")]
    Title,
    #[error(transparent)]
    Position(#[from] MapPointParseError),
    #[error("Invalid position")]
    InvalidPosition,
    #[error("An image is required")]
    MissingImage,
    #[error("The landmark has no id")]
    MissingId,
}

impl From<LandmarkInvalidation> for Error {
    fn from(from: LandmarkInvalidation) -> Self {
        match from {
            LandmarkInvalidation::Title => Self::Title,
            LandmarkInvalidation::Position => Self::InvalidPosition,
        }
    }
}
