//! Parsers for the values of specific command-line flags

pub mod numbers;
pub use numbers::{parse_extent, parse_offset};
