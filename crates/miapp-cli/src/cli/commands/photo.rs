//! `miapp photo` – capture or pick an image via the camera capability.

use anyhow::Result;
use clap::ValueEnum;
use miapp_core::host::{CapabilityError, Host, ImageSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PhotoSource {
    Camera,
    Photos,
}

impl From<PhotoSource> for ImageSource {
    fn from(source: PhotoSource) -> Self {
        match source {
            PhotoSource::Camera => ImageSource::Camera,
            PhotoSource::Photos => ImageSource::Photos,
        }
    }
}

pub fn run_photo(host: &Host, source: PhotoSource) -> Result<()> {
    match host.camera.get_photo(source.into()) {
        Ok(image) => println!("{}", image.data_url()),
        // User-invoked capability request: a missing feature is surfaced as
        // a notice, not an error.
        Err(CapabilityError::Unavailable(_)) => host.presenter.toast("Camera no disponible"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
