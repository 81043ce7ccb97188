use std::{
    ffi::OsStr,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use image::ImageFormat;

use crate::{clip_err, clip_try, error::ClipError, image::Image};

#[allow(unused_imports)] // unused when neither png nor jpeg are enabled
use crate::encoders;

pub fn encode(image: &Image, path: &Path) -> Result<(), ClipError> {
    // Resolved before the file is created, so that an unusable extension
    // does not truncate whatever is already there. In-place runs rely on this.
    let format = choose_encoding_format(path)?;

    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path)
        .map_err(|error| clip_err!(Encode, "unable to open image `{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    match format {
        #[cfg(feature = "png")]
        ImageFormat::Png => encoders::png::encode(image, &mut writer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => encoders::jpeg::encode(image, &mut writer)?,
        _ => clip_try!(Encode, image.pixels.write_to(&mut writer, format)),
    }

    // Flush the buffers to write everything to disk.
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    clip_try!(Encode, writer.flush());
    Ok(())
}

/// The format is implied by the output path's extension and nothing else.
fn choose_encoding_format(path: &Path) -> Result<ImageFormat, ClipError> {
    let no_delegate = || {
        // fallback to empty string matches imagemagick
        let extension = path.extension().unwrap_or(OsStr::new(""));
        clip_err!(
            Encode,
            "no encode delegate for this image format `{}'",
            extension.to_ascii_uppercase().to_string_lossy()
        )
    };
    let format = ImageFormat::from_path(path).map_err(|_| no_delegate())?;
    if !format.writing_enabled() {
        return Err(no_delegate());
    }
    Ok(format)
}
