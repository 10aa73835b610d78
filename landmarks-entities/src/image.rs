use std::fmt;

/// Image bytes as delivered by an image source, e.g. a picked
/// gallery file or a camera capture.
///
/// The container format is not known in advance.
#[derive(Clone, PartialEq, Eq)]
pub struct RawImage(Vec<u8>);

impl RawImage {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for RawImage {
    fn from(from: Vec<u8>) -> Self {
        Self(from)
    }
}

impl From<RawImage> for Vec<u8> {
    fn from(from: RawImage) -> Self {
        from.0
    }
}

impl fmt::Debug for RawImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("RawImage")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

/// A JPEG image that is ready to be uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    pub const MEDIA_TYPE: &'static str = "image/jpeg";
    pub const FILE_NAME: &'static str = "upload.jpg";
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("data", &format_args!("{} bytes", self.data.len()))
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
