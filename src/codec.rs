//! The decode/encode capability a crop run is given.
//!
//! `FileCodec` talks to the filesystem through the `image` crate.
//! Tests substitute an in-memory implementation, see [`testing::MemoryCodec`].

use std::path::Path;

use crate::{clip_err, clip_try, decode, encode, error::ClipError, image::Image};

pub trait ImageCodec {
    /// Fails with `FileNotFound` if there is nothing at `path`, `Decode` if it cannot be read
    fn decode(&self, path: &Path) -> Result<Image, ClipError>;
    /// Fails with `Encode` if the format is unsupported or the write fails
    fn encode(&self, image: &Image, path: &Path) -> Result<(), ClipError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileCodec;

impl ImageCodec for FileCodec {
    fn decode(&self, path: &Path) -> Result<Image, ClipError> {
        if !path.is_file() {
            return Err(clip_err!(
                FileNotFound,
                "unable to open image `{}': No such file or directory",
                path.display()
            ));
        }
        Ok(clip_try!(Decode, decode::decode(path)))
    }

    fn encode(&self, image: &Image, path: &Path) -> Result<(), ClipError> {
        encode::encode(image, path)
    }
}
