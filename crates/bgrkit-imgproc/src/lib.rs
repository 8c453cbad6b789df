#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// image filtering module.
pub mod filter;

/// 3x3 morphological operations module.
pub mod morphology;

/// border extension of images.
pub mod padding;

/// module containing parallelization utilities.
pub mod parallel;

/// operations to threshold images.
pub mod threshold;
