use async_trait::async_trait;
use landmarks_core::{entities::RawImage, gateways::image_source::ImageSource};
use std::{
    io,
    path::{Path, PathBuf},
};

/// Picks an image from the file system.
#[derive(Debug, Clone, Default)]
pub struct FileImageSource {
    path: Option<PathBuf>,
}

impl FileImageSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// A source without a file behaves like a cancelled picker.
    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl ImageSource for FileImageSource {
    async fn capture(&self) -> io::Result<Option<RawImage>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        log::debug!("Reading image from {}", path.display());
        let data = tokio::fs::read(path).await?;
        Ok(Some(data.into()))
    }
}
