use bgrkit_image::{cmp_pixels, is_less, Image};

use super::MorphologyError;
use crate::padding::wrap_border;
use crate::parallel::{execute_rows, ExecutionStrategy};

/// Number of pixels in the 3x3 structuring element.
pub const WINDOW_SIZE: usize = 9;

/// Rank picked by the median filter from the sorted window.
///
/// NOTE: this is the 6th smallest pixel, one above the true middle (4).
pub const MEDIAN_RANK: usize = 5;

/// How the 9 pixels of a window are reduced to one output pixel.
///
/// Pixels are compared lexicographically by channel (see [`bgrkit_image::cmp_pixels`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowReduction {
    /// The largest pixel. The first one in scan order wins ties.
    Max,
    /// The smallest pixel. The first one in scan order wins ties.
    Min,
    /// The pixel at the given index of the sorted window.
    Rank(usize),
}

impl WindowReduction {
    fn validate(self) -> Result<(), MorphologyError> {
        match self {
            WindowReduction::Rank(rank) if rank >= WINDOW_SIZE => {
                Err(MorphologyError::InvalidWindowRank(rank))
            }
            _ => Ok(()),
        }
    }

    fn reduce<T, const C: usize>(self, window: &mut [[T; C]; WINDOW_SIZE]) -> [T; C]
    where
        T: Copy + Ord,
    {
        match self {
            WindowReduction::Max => window[1..].iter().fold(window[0], |acc, pixel| {
                if is_less(&acc, pixel) {
                    *pixel
                } else {
                    acc
                }
            }),
            WindowReduction::Min => window[1..].iter().fold(window[0], |acc, pixel| {
                if is_less(pixel, &acc) {
                    *pixel
                } else {
                    acc
                }
            }),
            WindowReduction::Rank(rank) => {
                window.sort_unstable_by(|a, b| cmp_pixels(a, b));
                window[rank]
            }
        }
    }
}

/// Convert a signed iteration count into a valid one.
///
/// # Errors
///
/// Fails with [`MorphologyError::InvalidIterationCount`] if `iterations` is negative.
///
/// # Example
///
/// ```
/// use bgrkit_imgproc::morphology::{checked_iterations, MorphologyError};
///
/// assert_eq!(checked_iterations(3), Ok(3));
/// assert_eq!(checked_iterations(-1), Err(MorphologyError::InvalidIterationCount(-1)));
/// ```
pub fn checked_iterations(iterations: i64) -> Result<usize, MorphologyError> {
    usize::try_from(iterations).map_err(|_| MorphologyError::InvalidIterationCount(iterations))
}

/// Apply a 3x3 neighborhood reduction to an image a number of times.
///
/// Every round extends the current image by one pixel with wraparound
/// ([`wrap_border`]), reduces the 3x3 window centred on each pixel and feeds
/// its output to the next round. Zero iterations return a copy of the input.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `iterations` - The number of rounds.
/// * `reduction` - How each window is reduced.
/// * `strategy` - How the rows of a round are scheduled.
///
/// # Errors
///
/// Fails if the image is empty, the rank is out of the window or the
/// strategy cannot be executed.
///
/// # Example
///
/// ```
/// use bgrkit_image::Image;
/// use bgrkit_imgproc::morphology::{neighborhood_filter, WindowReduction};
/// use bgrkit_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 3>::from_size_val([4, 4].into(), 7).unwrap();
/// let out = neighborhood_filter(&image, 2, WindowReduction::Rank(4), ExecutionStrategy::Serial)
///     .unwrap();
///
/// assert_eq!(out, image);
/// ```
pub fn neighborhood_filter<T, const C: usize>(
    src: &Image<T, C>,
    iterations: usize,
    reduction: WindowReduction,
    strategy: ExecutionStrategy,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    src.ensure_not_empty()?;
    reduction.validate()?;

    log::debug!(
        "neighborhood filter {:?} on {} for {} iterations ({:?})",
        reduction,
        src.size(),
        iterations,
        strategy
    );

    let mut current = src.clone();
    for round in 0..iterations {
        log::trace!("{:?} round {}/{}", reduction, round + 1, iterations);
        current = filter_round(&current, reduction, strategy)?;
    }

    Ok(current)
}

fn filter_round<T, const C: usize>(
    src: &Image<T, C>,
    reduction: WindowReduction,
    strategy: ExecutionStrategy,
) -> Result<Image<T, C>, MorphologyError>
where
    T: Copy + Default + Ord + Send + Sync,
{
    let extended = wrap_border(src)?;
    let extended_data = extended.as_slice();
    let extended_stride = extended.width() * C;

    let mut dst = Image::from_size_val(src.size(), T::default())?;
    let row_stride = src.width() * C;

    execute_rows(strategy, dst.as_slice_mut(), row_stride, |y, dst_row| {
        // the three extended rows around output row y
        let rows: [&[T]; 3] = std::array::from_fn(|dy| {
            let start = (y + dy) * extended_stride;
            &extended_data[start..start + extended_stride]
        });

        for (x, dst_pixel) in dst_row.chunks_exact_mut(C).enumerate() {
            let mut window = [[T::default(); C]; WINDOW_SIZE];
            for (k, slot) in window.iter_mut().enumerate() {
                let offset = (x + k % 3) * C;
                slot.copy_from_slice(&rows[k / 3][offset..offset + C]);
            }
            dst_pixel.copy_from_slice(&reduction.reduce(&mut window));
        }
    })?;

    Ok(dst)
}
