//! Notification icons.

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::Result;

/// An RGBA icon image. Always has at least one pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    image: RgbaImage,
}

impl Icon {
    /// Load an icon from an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)?.to_rgba8();
        debug!(path = %path.display(), w = image.width(), h = image.height(), "Loaded icon");
        Ok(Self::from_image(image))
    }

    /// Wrap an image; an empty image becomes the placeholder.
    pub fn from_image(image: RgbaImage) -> Self {
        if image.width() == 0 || image.height() == 0 {
            return Self::placeholder();
        }
        Self { image }
    }

    /// A 1×1 fully transparent icon.
    pub fn placeholder() -> Self {
        Self {
            image: RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0])),
        }
    }

    /// Top-left `size`×`size` region of the icon, or less if the icon is smaller.
    ///
    /// Icons are never scaled up.
    pub fn cropped(&self, size: u32) -> Self {
        let w = self.width().min(size);
        let h = self.height().min(size);
        if w == self.width() && h == self.height() {
            return self.clone();
        }
        Self::from_image(imageops::crop_imm(&self.image, 0, 0, w, h).to_image())
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_placeholder(&self) -> bool {
        self.width() == 1 && self.height() == 1 && self.image.get_pixel(0, 0)[3] == 0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}
