use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use bgrkit_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with pixel data.
///
/// The pixels are stored row-major and interleaved, i.e. with shape (H, W, C),
/// where H is the height, W the width and C the number of channels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bgrkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and default pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `val` - The value every channel of every pixel is set to.
    ///
    /// # Examples
    ///
    /// ```
    /// use bgrkit_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val(
    ///   ImageSize {
    ///     width: 10,
    ///     height: 20,
    ///   }, 0u8).unwrap();
    ///
    /// assert_eq!(image.as_slice().len(), 10 * 20 * 3);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Whether the image has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.size.width == 0 || self.size.height == 0
    }

    /// Fail with [`ImageError::InvalidDimensions`] if the image has zero rows or columns.
    pub fn ensure_not_empty(&self) -> Result<(), ImageError> {
        if self.is_empty() {
            return Err(ImageError::InvalidDimensions(
                self.size.width,
                self.size.height,
            ));
        }
        Ok(())
    }

    /// Get the pixel data of the image as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data of the image as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a single channel value at `[y, x, ch]`.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, ch] = index;
        if y >= self.height() || x >= self.width() || ch >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + ch)
    }

    /// Get the channels of one row as a flat slice.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[T] {
        let stride = self.width() * CHANNELS;
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Get the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy + Default,
    {
        let offset = self.pixel_offset(x, y)?;
        let mut pixel = [T::default(); CHANNELS];
        pixel.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        Ok(pixel)
    }

    /// Set the pixel at column `x` and row `y`.
    ///
    /// # Errors
    ///
    /// If the coordinates are out of bounds, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [T; CHANNELS]) -> Result<(), ImageError>
    where
        T: Copy,
    {
        let offset = self.pixel_offset(x, y)?;
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }

    fn pixel_offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok((y * self.width() + x) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(ImageSize::from([10, 20]), image_size);
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.cols(), 10);
        assert_eq!(image.rows(), 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_wrong_data_length() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert_eq!(res, Err(ImageError::InvalidChannelShape(11, 12)));
    }

    #[test]
    fn image_get_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::from_size_val([2, 3].into(), 0)?;
        image.set_pixel(1, 2, [1, 2, 3])?;

        assert_eq!(image.get_pixel(1, 2)?, [1, 2, 3]);
        assert_eq!(image.get([2, 1, 2]), Some(&3));
        assert_eq!(image.get([3, 0, 0]), None);
        assert_eq!(image.row(2), &[0, 0, 0, 1, 2, 3]);
        assert_eq!(
            image.get_pixel(2, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 3))
        );

        Ok(())
    }

    #[test]
    fn image_empty() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([0, 4].into(), vec![])?;
        assert!(image.is_empty());
        assert_eq!(
            image.ensure_not_empty(),
            Err(ImageError::InvalidDimensions(0, 4))
        );

        Ok(())
    }
}
