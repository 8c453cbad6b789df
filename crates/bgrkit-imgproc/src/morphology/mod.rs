//! 3x3 morphological operations with wraparound borders.
//!
//! All operators compare pixels lexicographically by channel, so a whole pixel
//! is always picked from the window; channels are never mixed.

mod error;
mod ops;
mod window;

pub use error::MorphologyError;
pub use ops::{dilate, erode, morphology_close, morphology_open};
pub use window::{
    checked_iterations, neighborhood_filter, WindowReduction, MEDIAN_RANK, WINDOW_SIZE,
};
