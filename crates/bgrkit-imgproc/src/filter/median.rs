use bgrkit_image::Image;

use crate::morphology::{neighborhood_filter, MorphologyError, WindowReduction, MEDIAN_RANK};
use crate::parallel::ExecutionStrategy;

/// Apply a 3x3 median filter to an image.
///
/// The 9 pixels around each location are sorted lexicographically by channel
/// and the one at [`MEDIAN_RANK`] is kept. Borders wrap around to the
/// opposite side and each of the `iterations` rounds filters the previous output.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `iterations` - The number of rounds. Zero returns a copy of `src`.
///
/// # Example
///
/// ```
/// use bgrkit_image::Image;
/// use bgrkit_imgproc::filter::median_filter;
///
/// let mut image = Image::<u8, 3>::from_size_val([4, 4].into(), 50).unwrap();
/// image.set_pixel(2, 1, [255, 255, 255]).unwrap();
///
/// let filtered = median_filter(&image, 1).unwrap();
/// assert!(filtered.as_slice().iter().all(|&v| v == 50));
/// ```
pub fn median_filter<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    median_filter_with_rank(src, iterations, MEDIAN_RANK)
}

/// Apply a 3x3 rank filter, keeping the pixel at `rank` of the sorted window.
///
/// `rank` 4 is the true median; [`median_filter`] uses [`MEDIAN_RANK`].
///
/// # Errors
///
/// Fails with [`MorphologyError::InvalidWindowRank`] if `rank` is 9 or more.
pub fn median_filter_with_rank<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
    rank: usize,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    neighborhood_filter(
        src,
        iterations,
        WindowReduction::Rank(rank),
        ExecutionStrategy::default(),
    )
}
