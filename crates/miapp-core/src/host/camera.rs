//! Camera capture capability.

use super::CapabilityError;

/// Where the image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    Photos,
}

/// A captured or picked image, base64-encoded by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub format: String,
    pub base64: String,
}

impl CapturedImage {
    /// `data:` URL form, as handed to the presentation layer.
    pub fn data_url(&self) -> String {
        format!("data:image/{};base64,{}", self.format, self.base64)
    }
}

pub trait CameraProvider: Send + Sync {
    fn get_photo(&self, source: ImageSource) -> Result<CapturedImage, CapabilityError>;
}

/// Fallback when no camera capability exists.
#[derive(Debug, Default)]
pub struct NoCamera;

impl CameraProvider for NoCamera {
    fn get_photo(&self, _source: ImageSource) -> Result<CapturedImage, CapabilityError> {
        Err(CapabilityError::Unavailable("camera"))
    }
}
