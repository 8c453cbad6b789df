use rayon::prelude::*;
use thiserror::Error;

use bgrkit_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The row stride must be valid.
    #[error("row stride must be > 0, got {0}")]
    InvalidRowStride(usize),
}

/// Controls how the rows of an operation are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to each pixel of `src` and the matching pixel of `dst` in parallel.
///
/// Both images are expected to have the same size and at least one column.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each pixel of an image in place, in parallel.
///
/// The image is expected to have at least one column.
pub fn par_iter_pixels_mut<T, const C: usize>(
    image: &mut Image<T, C>,
    f: impl Fn(&mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = image.cols();
    image
        .as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .for_each(|row| row.chunks_exact_mut(C).for_each(&f));
}

/// Run `op` over every row of `dst` with the given strategy.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `dst` - The destination buffer, split into rows of `row_stride` elements.
/// * `row_stride` - The number of elements in a row (width * channels).
/// * `op` - The operation receiving the row index and the mutable row.
pub fn execute_rows<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    row_stride: usize,
    op: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if row_stride == 0 {
        return Err(ParallelError::InvalidRowStride(row_stride));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(y, row)| op(y, row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(y, row)| op(y, row));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(row_stride)
                    .enumerate()
                    .for_each(|(y, row)| op(y, row));
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_index_fill(strategy: ExecutionStrategy) -> Result<Vec<usize>, ParallelError> {
        let mut dst = vec![0; 6];
        execute_rows(strategy, &mut dst, 2, |y, row| row.fill(y + 1))?;
        Ok(dst)
    }

    #[test]
    fn execute_serial() -> Result<(), ParallelError> {
        assert_eq!(row_index_fill(ExecutionStrategy::Serial)?, vec![1, 1, 2, 2, 3, 3]);
        Ok(())
    }

    #[test]
    fn execute_parallel_rows() -> Result<(), ParallelError> {
        assert_eq!(
            row_index_fill(ExecutionStrategy::ParallelRows)?,
            vec![1, 1, 2, 2, 3, 3]
        );
        Ok(())
    }

    #[test]
    fn execute_fixed() -> Result<(), ParallelError> {
        assert_eq!(
            row_index_fill(ExecutionStrategy::Fixed(2))?,
            vec![1, 1, 2, 2, 3, 3]
        );
        Ok(())
    }

    #[test]
    fn execute_fixed_zero_threads() {
        let res = row_index_fill(ExecutionStrategy::Fixed(0));
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
    }

    #[test]
    fn execute_zero_stride() {
        let mut dst = vec![0u8; 4];
        let res = execute_rows(ExecutionStrategy::Serial, &mut dst, 0, |_, _| {});
        assert_eq!(res, Err(ParallelError::InvalidRowStride(0)));
    }

    #[test]
    fn pixels_mut_in_place() -> Result<(), bgrkit_image::ImageError> {
        let mut image = Image::<u8, 3>::new([2, 1].into(), vec![1, 2, 3, 4, 5, 6])?;
        par_iter_pixels_mut(&mut image, |pixel| pixel.reverse());
        assert_eq!(image.as_slice(), &[3, 2, 1, 6, 5, 4]);
        Ok(())
    }
}
