//! `clip-image` crops an image to a rectangle given by an offset and dimensions.
//! The library interface exists for the binary and for tests, and is not stable.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
mod arg_parsers;
pub mod args;
pub mod codec;
mod decode;
mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod image;
pub mod operations;
pub mod plan;
