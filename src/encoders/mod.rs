//! Dedicated encoders for formats that can carry the source ICC profile

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;

#[cfg(any(feature = "jpeg", feature = "png"))]
fn write_icc(encoder: &mut impl image::ImageEncoder, image: &crate::image::Image) {
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
}
