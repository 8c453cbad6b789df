use std::cmp::Ordering;

/// A 3-channel 8-bit pixel.
///
/// Read as (B, G, R) for color images and as (H, S, V) after HSV conversion.
pub type Pixel3 = [u8; 3];

/// The white pixel written by mask producing operators.
pub const WHITE: Pixel3 = [255, 255, 255];

/// The black (zero) pixel.
pub const BLACK: Pixel3 = [0, 0, 0];

/// Strict lexicographic comparison of two pixels.
///
/// Channel 0 is compared first, then channel 1, then channel 2.
///
/// # Examples
///
/// ```
/// use bgrkit_image::is_less;
///
/// assert!(is_less(&[0, 9, 9], &[1, 0, 0]));
/// assert!(is_less(&[1, 0, 0], &[1, 0, 1]));
/// assert!(!is_less(&[1, 2, 3], &[1, 2, 3]));
/// ```
pub fn is_less<T: Ord, const C: usize>(a: &[T; C], b: &[T; C]) -> bool {
    cmp_pixels(a, b) == Ordering::Less
}

/// Total order over pixels, lexicographic by channel.
///
/// Suitable as a comparator for sorting windows of pixels.
pub fn cmp_pixels<T: Ord, const C: usize>(a: &[T; C], b: &[T; C]) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
