mod crop;

pub use crop::{compute_clamped_rect, crop, CropRect, CropRequest};
