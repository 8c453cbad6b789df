#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use bgrkit_image as image;

#[doc(inline)]
pub use bgrkit_imgproc as imgproc;
