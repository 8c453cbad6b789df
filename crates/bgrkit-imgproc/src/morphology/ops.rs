use bgrkit_image::Image;

use super::window::{neighborhood_filter, WindowReduction};
use super::MorphologyError;
use crate::parallel::ExecutionStrategy;

/// Dilate an image with a 3x3 structuring element.
///
/// Each pixel is replaced by the lexicographic maximum of its 3x3 neighborhood,
/// with the borders wrapping around to the opposite side. The operation is
/// repeated `iterations` times, each round consuming the previous output.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `iterations` - The number of rounds. Zero returns a copy of `src`.
///
/// # Returns
///
/// A new image of the same size as `src`.
///
/// # Example
///
/// ```
/// use bgrkit_image::Image;
/// use bgrkit_imgproc::morphology::dilate;
///
/// let mut image = Image::<u8, 3>::from_size_val([3, 3].into(), 0).unwrap();
/// image.set_pixel(1, 1, [10, 20, 30]).unwrap();
///
/// let dilated = dilate(&image, 1).unwrap();
/// assert!(dilated.as_slice().chunks_exact(3).all(|p| p == [10, 20, 30]));
/// ```
pub fn dilate<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    neighborhood_filter(
        src,
        iterations,
        WindowReduction::Max,
        ExecutionStrategy::default(),
    )
}

/// Erode an image with a 3x3 structuring element.
///
/// Each pixel is replaced by the lexicographic minimum of its 3x3 neighborhood,
/// with the borders wrapping around to the opposite side. The operation is
/// repeated `iterations` times, each round consuming the previous output.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `iterations` - The number of rounds. Zero returns a copy of `src`.
///
/// # Returns
///
/// A new image of the same size as `src`.
pub fn erode<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    neighborhood_filter(
        src,
        iterations,
        WindowReduction::Min,
        ExecutionStrategy::default(),
    )
}

/// Morphological opening: erosion followed by dilation.
///
/// Both passes use the same number of iterations.
pub fn morphology_open<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    dilate(&erode(src, iterations)?, iterations)
}

/// Morphological closing: dilation followed by erosion.
///
/// Both passes use the same number of iterations.
pub fn morphology_close<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    erode(&dilate(src, iterations)?, iterations)
}
