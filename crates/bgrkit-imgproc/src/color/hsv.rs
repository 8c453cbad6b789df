use crate::parallel;
use bgrkit_image::{Image, ImageError};

/// What happens to the hue channel of pixels without chroma (B == G == R).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AchromaticHue {
    /// Leave the channel untouched, so it keeps the old blue value.
    #[default]
    Preserve,
    /// Write a hue of zero.
    Zero,
}

/// Convert a BGR image to HSV in place.
///
/// The channels are overwritten with packed 8-bit HSV values:
///
/// * H (channel 0): hue in degrees divided by two, in the range [0, 180).
/// * S (channel 1): saturation scaled to [0, 255].
/// * V (channel 2): the largest of B, G and R.
///
/// Gray pixels keep their blue value in the hue channel, see
/// [`convert_hsv_with`] to reset it instead.
///
/// # Errors
///
/// Fails with [`ImageError::InvalidDimensions`] if the image has zero rows or columns.
///
/// # Example
///
/// ```
/// use bgrkit_image::Image;
/// use bgrkit_imgproc::color::convert_hsv;
///
/// let mut image = Image::<u8, 3>::new([2, 1].into(), vec![0, 0, 255, 128, 128, 128]).unwrap();
/// convert_hsv(&mut image).unwrap();
///
/// assert_eq!(image.as_slice(), &[0, 255, 255, 128, 0, 128]);
/// ```
pub fn convert_hsv(image: &mut Image<u8, 3>) -> Result<(), ImageError> {
    convert_hsv_with(image, AchromaticHue::default())
}

/// Convert a BGR image to HSV in place, choosing the hue of gray pixels.
///
/// # Arguments
///
/// * `image` - The BGR image, overwritten with HSV values.
/// * `achromatic` - What to store as hue when B == G == R.
pub fn convert_hsv_with(
    image: &mut Image<u8, 3>,
    achromatic: AchromaticHue,
) -> Result<(), ImageError> {
    image.ensure_not_empty()?;

    log::debug!("convert_hsv on {} ({:?})", image.size(), achromatic);

    parallel::par_iter_pixels_mut(image, |pixel| bgr_to_hsv(pixel, achromatic));

    Ok(())
}

/// Convert a BGR image to HSV into a newly allocated image.
///
/// Same conversion as [`convert_hsv`], leaving `src` untouched.
pub fn hsv_from_bgr(src: &Image<u8, 3>) -> Result<Image<u8, 3>, ImageError> {
    let mut dst = src.clone();
    convert_hsv(&mut dst)?;
    Ok(dst)
}

fn bgr_to_hsv(pixel: &mut [u8], achromatic: AchromaticHue) {
    let b = pixel[0] as f64;
    let g = pixel[1] as f64;
    let r = pixel[2] as f64;

    let v = b.max(g).max(r);
    let diff = v - b.min(g).min(r);

    pixel[2] = v as u8;
    pixel[1] = if v != 0.0 {
        (255.0 * diff / v) as u8
    } else {
        0
    };

    if diff != 0.0 {
        let h = if v == b {
            240.0 + 60.0 * (r - g) / diff
        } else if v == g {
            120.0 + 60.0 * (b - r) / diff
        } else {
            60.0 * (g - b) / diff
        };

        let h = if h < 0.0 { h + 360.0 } else { h };

        pixel[0] = (h / 2.0) as u8;
    } else if achromatic == AchromaticHue::Zero {
        pixel[0] = 0;
    }
}
