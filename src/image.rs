use image::{DynamicImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct Image {
    /// Container format detected on decoding, if any
    pub format: Option<ImageFormat>,
    pub icc: Option<Vec<u8>>,
    pub pixels: DynamicImage,
}

impl Image {
    pub fn from_pixels(pixels: DynamicImage) -> Self {
        Self {
            format: None,
            icc: None,
            pixels,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }
}
