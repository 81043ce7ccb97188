use std::num::NonZeroU32;

use crate::{clip_err, error::ClipError, image::Image};

/// The rectangle as requested on the command line, before clamping.
/// An unset extent stands for everything from the offset to the edge.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct CropRequest {
    pub x: u32,
    pub y: u32,
    pub width: Option<NonZeroU32>,
    pub height: Option<NonZeroU32>,
}

/// A rectangle that lies entirely within the source image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Shrinks the requested extents so that the rectangle does not extend past
/// the right or bottom edge. Extents are never increased.
pub fn compute_clamped_rect(
    (image_width, image_height): (u32, u32),
    request: CropRequest,
) -> Result<CropRect, ClipError> {
    let CropRequest { x, y, .. } = request;
    if x >= image_width || y >= image_height {
        return Err(clip_err!(
            OutOfBounds,
            "crop offset +{x}+{y} is outside the {image_width}x{image_height} image"
        ));
    }

    let available_width = image_width - x;
    let available_height = image_height - y;
    let clamp = |requested: Option<NonZeroU32>, available: u32| match requested {
        Some(n) => n.get().min(available),
        None => available,
    };

    Ok(CropRect {
        x,
        y,
        width: clamp(request.width, available_width),
        height: clamp(request.height, available_height),
    })
}

/// Copies the clamped region into a new image of the same pixel type,
/// without any scaling or filtering. The source is consumed.
pub fn crop(image: Image, request: CropRequest) -> Result<Image, ClipError> {
    let rect = compute_clamped_rect(image.dimensions(), request)?;
    let Image { format, icc, pixels: source } = image;
    let pixels = source.crop_imm(rect.x, rect.y, rect.width, rect.height);
    drop(source);
    Ok(Image {
        format,
        icc,
        pixels,
    })
}
