#![deny(missing_docs)]
//! Image types and pixel ordering for dense 8-bit images

/// image representation for image processing purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// pixel type aliases and the lexicographic pixel order.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::pixel::{cmp_pixels, is_less, Pixel3, BLACK, WHITE};
