use bgrkit_image::{Image, ImageError, ImageSize};

/// Padding extents, in pixels, for each side of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Rows added above the image.
    pub top: usize,
    /// Rows added below the image.
    pub bottom: usize,
    /// Columns added left of the image.
    pub left: usize,
    /// Columns added right of the image.
    pub right: usize,
}

impl Padding2D {
    /// The same padding on all four sides.
    pub fn uniform(pad: usize) -> Self {
        Self {
            top: pad,
            bottom: pad,
            left: pad,
            right: pad,
        }
    }
}

#[inline]
fn wrap(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

/// Pad an image by wrapping its content around from the opposite side.
///
/// Columns are extended first; the new rows are then copied from the already
/// column-extended rows, so the corners wrap both horizontally and vertically.
/// Padding wider than the image keeps wrapping.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `padding` - The padding extents.
///
/// # Errors
///
/// Fails with [`ImageError::InvalidDimensions`] if the image has zero rows or columns.
pub fn pad_wrap<T, const C: usize>(
    src: &Image<T, C>,
    padding: Padding2D,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    src.ensure_not_empty()?;

    let (width, height) = (src.width(), src.height());
    let padded_size = ImageSize {
        width: width + padding.left + padding.right,
        height: height + padding.top + padding.bottom,
    };
    let row_stride = padded_size.width * C;

    // extend every row horizontally
    let mut column_extended = Vec::with_capacity(height * row_stride);
    for y in 0..height {
        let row = src.row(y);
        for x in 0..padded_size.width {
            let src_x = wrap(x as isize - padding.left as isize, width);
            column_extended.extend_from_slice(&row[src_x * C..(src_x + 1) * C]);
        }
    }

    // then extend vertically using the widened rows
    let mut data = Vec::with_capacity(padded_size.height * row_stride);
    for y in 0..padded_size.height {
        let src_y = wrap(y as isize - padding.top as isize, height);
        data.extend_from_slice(&column_extended[src_y * row_stride..(src_y + 1) * row_stride]);
    }

    Image::new(padded_size, data)
}

/// Extend an image by one pixel on every side with toroidal wraparound.
///
/// The result is (rows + 2) x (cols + 2): column 0 holds the last column,
/// column cols + 1 holds the first one, and the first and last rows are the
/// wrapped last and first rows of the widened image.
///
/// # Example
///
/// ```
/// use bgrkit_image::Image;
/// use bgrkit_imgproc::padding::wrap_border;
///
/// let image = Image::<u8, 1>::new([2, 2].into(), vec![1, 2, 3, 4]).unwrap();
/// let extended = wrap_border(&image).unwrap();
///
/// assert_eq!(
///     extended.as_slice(),
///     &[
///         4, 3, 4, 3,
///         2, 1, 2, 1,
///         4, 3, 4, 3,
///         2, 1, 2, 1,
///     ]
/// );
/// ```
pub fn wrap_border<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    pad_wrap(src, Padding2D::uniform(1))
}
