mod hsv;

pub use hsv::{convert_hsv, convert_hsv_with, hsv_from_bgr, AchromaticHue};
