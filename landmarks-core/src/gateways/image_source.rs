use crate::entities::RawImage;
use async_trait::async_trait;
use std::io;

#[async_trait(?Send)]
pub trait ImageSource {
    /// Returns `None` if the user didn't pick or capture an image.
    async fn capture(&self) -> io::Result<Option<RawImage>>;
}
