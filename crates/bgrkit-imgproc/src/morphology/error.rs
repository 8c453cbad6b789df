use bgrkit_image::ImageError;

use crate::parallel::ParallelError;

/// Errors related to neighborhood operations such as dilation and erosion.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// The input image is not valid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The rows of a round could not be scheduled.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// The iteration count is negative.
    #[error("Invalid iteration count ({0}): must be zero or greater")]
    InvalidIterationCount(i64),

    /// The rank does not index into the 3x3 window.
    #[error("Invalid window rank ({0}): must be less than 9")]
    InvalidWindowRank(usize),
}
