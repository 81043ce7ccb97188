use std::{num::NonZeroU32, path::PathBuf};

use crate::{
    codec::{FileCodec, ImageCodec},
    error::ClipError,
    operations::{self, CropRequest},
};

/// Everything a single run needs, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipPlan {
    pub input: PathBuf,
    /// Same as `input` unless given explicitly, in which case the input is overwritten
    pub output: PathBuf,
    pub x: u32,
    pub y: u32,
    /// `None` means all the way to the right edge
    pub width: Option<NonZeroU32>,
    /// `None` means all the way to the bottom edge
    pub height: Option<NonZeroU32>,
    /// Accepted for compatibility, has no effect
    pub verbose: bool,
}

impl ClipPlan {
    pub fn new(input: PathBuf) -> Self {
        Self {
            output: input.clone(),
            input,
            x: 0,
            y: 0,
            width: None,
            height: None,
            verbose: false,
        }
    }

    pub fn crop_request(&self) -> CropRequest {
        CropRequest {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn execute(&self) -> Result<(), ClipError> {
        self.execute_with(&FileCodec)
    }

    /// Decode, crop, encode. The first failure aborts the run.
    pub fn execute_with(&self, codec: &impl ImageCodec) -> Result<(), ClipError> {
        let image = codec.decode(&self.input)?;
        let cropped = operations::crop(image, self.crop_request())?;
        codec.encode(&cropped, &self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec::testing::MemoryCodec, error::ErrorKind, image::Image};
    use image::{DynamicImage, GenericImageView, Pixel, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> Image {
        Image::from_pixels(DynamicImage::ImageRgb8(RgbImage::from_fn(
            width,
            height,
            |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, (x / 256 + y / 256) as u8]),
        )))
    }

    #[test]
    fn oversized_crop_into_separate_output() {
        let source = gradient(500, 500);
        let codec = MemoryCodec::with_file("in.png", source.clone());
        let plan = ClipPlan {
            output: PathBuf::from("out.png"),
            x: 100,
            y: 100,
            width: NonZeroU32::new(1000),
            height: NonZeroU32::new(1000),
            ..ClipPlan::new(PathBuf::from("in.png"))
        };

        plan.execute_with(&codec).unwrap();

        let output = codec.get("out.png").unwrap();
        assert_eq!(output.dimensions(), (400, 400));
        assert_eq!(
            output.pixels.to_rgb8(),
            source.pixels.crop_imm(100, 100, 400, 400).to_rgb8()
        );
        // the input is left alone
        assert_eq!(codec.get("in.png").unwrap().dimensions(), (500, 500));
    }

    #[test]
    fn output_defaults_to_the_input() {
        let codec = MemoryCodec::with_file("in.png", gradient(800, 600));
        let plan = ClipPlan {
            width: NonZeroU32::new(200),
            height: NonZeroU32::new(200),
            ..ClipPlan::new(PathBuf::from("in.png"))
        };
        assert_eq!(plan.output, plan.input);

        plan.execute_with(&codec).unwrap();

        assert_eq!(codec.files.borrow().len(), 1);
        let overwritten = codec.get("in.png").unwrap();
        assert_eq!(overwritten.dimensions(), (200, 200));
        assert_eq!(overwritten.pixels.get_pixel(199, 199), Rgb([199, 199, 0]).to_rgba());
    }

    #[test]
    fn no_extents_copies_everything_past_the_offset() {
        let codec = MemoryCodec::with_file("in.png", gradient(64, 48));
        let plan = ClipPlan {
            x: 10,
            y: 40,
            ..ClipPlan::new(PathBuf::from("in.png"))
        };
        plan.execute_with(&codec).unwrap();
        assert_eq!(codec.get("in.png").unwrap().dimensions(), (54, 8));
    }

    #[test]
    fn out_of_bounds_writes_nothing() {
        let codec = MemoryCodec::with_file("in.png", gradient(50, 50));
        let plan = ClipPlan {
            output: PathBuf::from("out.png"),
            y: 50,
            ..ClipPlan::new(PathBuf::from("in.png"))
        };

        let err = plan.execute_with(&codec).unwrap_err();

        assert_eq!(err.kind, ErrorKind::OutOfBounds);
        assert!(codec.get("out.png").is_none());
    }

    #[test]
    fn missing_input_writes_nothing() {
        let codec = MemoryCodec::default();
        let plan = ClipPlan {
            output: PathBuf::from("out.png"),
            ..ClipPlan::new(PathBuf::from("absent.png"))
        };
        let err = plan.execute_with(&codec).unwrap_err();
        assert_eq!(err.kind, ErrorKind::FileNotFound);
        assert!(codec.files.borrow().is_empty());
    }

    #[test]
    fn verbose_changes_nothing() {
        let quiet_codec = MemoryCodec::with_file("in.png", gradient(30, 30));
        let loud_codec = MemoryCodec::with_file("in.png", gradient(30, 30));
        let quiet = ClipPlan {
            x: 5,
            width: NonZeroU32::new(10),
            ..ClipPlan::new(PathBuf::from("in.png"))
        };
        let loud = ClipPlan {
            verbose: true,
            ..quiet.clone()
        };
        quiet.execute_with(&quiet_codec).unwrap();
        loud.execute_with(&loud_codec).unwrap();
        assert_eq!(
            quiet_codec.get("in.png").unwrap().pixels,
            loud_codec.get("in.png").unwrap().pixels
        );
    }
}
