use std::io::Write;

use image::codecs::jpeg::JpegEncoder;

use crate::encoders::write_icc;
use crate::{error::ClipError, image::Image, clip_try};

/// Matches the imagemagick default when the input quality cannot be estimated
const DEFAULT_QUALITY: u8 = 92;

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ClipError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, DEFAULT_QUALITY);
    write_icc(&mut encoder, image);
    Ok(clip_try!(Encode, image.pixels.write_with_encoder(encoder)))
}
