use crate::entities::{EncodedImage, RawImage};
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("No image data")]
    Empty,
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ImageError>;

/// How images are prepared before uploading them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_width: u32,
    pub max_height: u32,
    /// JPEG quality in the range 1..=100
    pub quality: u8,
}

impl UploadPolicy {
    pub const DEFAULT_MAX_WIDTH: u32 = 800;
    pub const DEFAULT_MAX_HEIGHT: u32 = 600;
    pub const DEFAULT_QUALITY: u8 = 90;
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_width: Self::DEFAULT_MAX_WIDTH,
            max_height: Self::DEFAULT_MAX_HEIGHT,
            quality: Self::DEFAULT_QUALITY,
        }
    }
}

/// Scale `(width, height)` to fit into `(max_width, max_height)`
/// while preserving the aspect ratio.
///
/// Images are never scaled up.
pub fn fit_within((width, height): (u32, u32), (max_width, max_height): (u32, u32)) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    if scale >= 1.0 {
        return (width, height);
    }
    let scaled = |len: u32| ((f64::from(len) * scale).round() as u32).max(1);
    (scaled(width), scaled(height))
}

/// Decode an image of any supported format and re-encode it as JPEG.
///
/// This is CPU bound and should not run on an async executor.
pub fn encode_for_upload(raw: &RawImage, policy: &UploadPolicy) -> Result<EncodedImage> {
    if raw.is_empty() {
        return Err(ImageError::Empty);
    }
    let mut img = image::load_from_memory(raw.as_bytes())?;
    let source = (img.width(), img.height());
    let (width, height) = fit_within(source, (policy.max_width, policy.max_height));
    if (width, height) != source {
        log::debug!(
            "Resizing image from {}x{} to {width}x{height}",
            source.0,
            source.1
        );
        img = img.resize_exact(width, height, FilterType::Lanczos3);
    }
    let rgb = img.to_rgb8();
    let mut data = Vec::new();
    JpegEncoder::new_with_quality(&mut data, policy.quality.clamp(1, 100)).encode_image(&rgb)?;
    log::debug!("Encoded {width}x{height} JPEG image with {} bytes", data.len());
    Ok(EncodedImage {
        data,
        width,
        height,
    })
}
