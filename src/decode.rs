use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult};

use crate::image::Image;

/// Guesses the format based on file contents, so a misleading extension does not matter.
pub fn decode(file: &Path) -> ImageResult<Image> {
    let reader = ImageReader::open(file)?.with_guessed_format()?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    // has to be read before the decoder is consumed by decoding the pixels
    let icc = decoder.icc_profile()?;
    let pixels = DynamicImage::from_decoder(decoder)?;
    Ok(Image {
        format,
        icc,
        pixels,
    })
}
