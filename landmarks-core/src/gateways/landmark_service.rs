use crate::entities::*;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("The requested landmark could not be found")]
    NotFound,
    #[error("The request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Remote store that holds the authoritative list of landmarks.
#[async_trait(?Send)]
pub trait LandmarkService {
    async fn list(&self) -> Result<Vec<Landmark>>;

    /// Returns the created landmark including its id and
    /// the canonical image path.
    async fn create(&self, new_landmark: &NewLandmark, image: &EncodedImage) -> Result<Landmark>;

    /// Without a new `image` the existing image is retained.
    async fn update(
        &self,
        changes: &LandmarkChanges,
        image: Option<&EncodedImage>,
    ) -> Result<Landmark>;

    async fn delete(&self, id: Id) -> Result<()>;
}
