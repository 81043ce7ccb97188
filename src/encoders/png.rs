use std::io::Write;

use image::codecs::png::PngEncoder;

use crate::encoders::write_icc;
use crate::{error::ClipError, image::Image, clip_try};

pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<(), ClipError> {
    let mut encoder = PngEncoder::new(writer);
    write_icc(&mut encoder, image);
    Ok(clip_try!(Encode, image.pixels.write_with_encoder(encoder)))
}
