use bgrkit_image::{Image, ImageError, Pixel3, WHITE};

use crate::parallel;

/// The accepted values of one channel in [`select_color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelRange {
    /// Accept `min <= value <= max`.
    Closed {
        /// Lower bound, inclusive.
        min: u8,
        /// Upper bound, inclusive.
        max: u8,
    },
    /// Accept `value >= min || value <= max`, a range wrapping past 255 back to 0.
    Wrapped {
        /// Start of the range, inclusive.
        min: u8,
        /// End of the range after wrapping, inclusive.
        max: u8,
    },
}

impl ChannelRange {
    /// Build the range for a pair of bounds.
    ///
    /// The range is closed if `min <= max` and wraps around otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use bgrkit_imgproc::threshold::ChannelRange;
    ///
    /// let hue = ChannelRange::new(170, 10);
    /// assert!(hue.contains(175));
    /// assert!(hue.contains(5));
    /// assert!(!hue.contains(90));
    /// ```
    pub fn new(min: u8, max: u8) -> Self {
        if min <= max {
            ChannelRange::Closed { min, max }
        } else {
            ChannelRange::Wrapped { min, max }
        }
    }

    /// Whether `value` lies in the range.
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        match *self {
            ChannelRange::Closed { min, max } => value >= min && value <= max,
            ChannelRange::Wrapped { min, max } => value >= min || value <= max,
        }
    }
}

/// Select the pixels whose channels all lie within the given bounds.
///
/// Each channel gets its own [`ChannelRange`]: a closed interval when
/// `min_values[c] <= max_values[c]`, a wrapping one otherwise.
///
/// # Arguments
///
/// * `src` - The input image, usually in HSV.
/// * `min_values` - The lower bound of each channel.
/// * `max_values` - The upper bound of each channel.
///
/// # Returns
///
/// A mask of the same size: white where the pixel is selected, black elsewhere.
///
/// # Example
///
/// ```
/// use bgrkit_image::Image;
/// use bgrkit_imgproc::threshold::select_color;
///
/// let image = Image::<u8, 3>::new([2, 1].into(), vec![10, 100, 100, 100, 100, 100]).unwrap();
/// let mask = select_color(&image, &[200, 0, 0], &[50, 255, 255]).unwrap();
///
/// assert_eq!(mask.as_slice(), &[255, 255, 255, 0, 0, 0]);
/// ```
pub fn select_color(
    src: &Image<u8, 3>,
    min_values: &Pixel3,
    max_values: &Pixel3,
) -> Result<Image<u8, 3>, ImageError> {
    src.ensure_not_empty()?;

    let ranges: [ChannelRange; 3] =
        std::array::from_fn(|c| ChannelRange::new(min_values[c], max_values[c]));

    log::debug!("select_color on {} with {:?}", src.size(), ranges);

    let mut dst = Image::from_size_val(src.size(), 0u8)?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let selected = ranges
            .iter()
            .zip(src_pixel.iter())
            .all(|(range, &value)| range.contains(value));
        if selected {
            dst_pixel.copy_from_slice(&WHITE);
        }
    });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_range_is_inclusive() {
        let range = ChannelRange::new(10, 20);
        assert_eq!(range, ChannelRange::Closed { min: 10, max: 20 });
        assert!(range.contains(10));
        assert!(range.contains(20));
        assert!(!range.contains(9));
        assert!(!range.contains(21));
    }

    #[test]
    fn equal_bounds_accept_single_value() {
        let range = ChannelRange::new(7, 7);
        assert!(range.contains(7));
        assert!(!range.contains(6));
        assert!(!range.contains(8));
    }

    #[test]
    fn wrapped_range() {
        let range = ChannelRange::new(200, 50);
        assert_eq!(range, ChannelRange::Wrapped { min: 200, max: 50 });
        assert!(range.contains(10));
        assert!(range.contains(50));
        assert!(range.contains(200));
        assert!(range.contains(220));
        assert!(!range.contains(100));
        assert!(!range.contains(51));
        assert!(!range.contains(199));
    }

    #[test]
    fn select_color_wraps_first_channel() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            [3, 1].into(),
            vec![10, 128, 128, 220, 0, 255, 100, 128, 128],
        )?;
        let mask = select_color(&image, &[200, 0, 0], &[50, 255, 255])?;

        assert_eq!(mask.get_pixel(0, 0)?, WHITE);
        assert_eq!(mask.get_pixel(1, 0)?, WHITE);
        assert_eq!(mask.get_pixel(2, 0)?, [0, 0, 0]);
        Ok(())
    }

    #[test]
    fn select_color_requires_all_channels() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            [2, 2].into(),
            vec![
                40, 150, 60, // all in range
                40, 100, 60, // channel 1 below
                40, 150, 90, // channel 2 above
                95, 150, 60, // channel 0 above
            ],
        )?;
        let mask = select_color(&image, &[30, 110, 50], &[90, 255, 80])?;

        assert_eq!(
            mask.as_slice(),
            &[255, 255, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        Ok(())
    }

    #[test]
    fn select_color_empty_image() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new([0, 2].into(), vec![])?;
        assert_eq!(
            select_color(&image, &[0, 0, 0], &[255, 255, 255]),
            Err(ImageError::InvalidDimensions(0, 2))
        );
        Ok(())
    }
}
